//! Command-line grammar shared by the option schemas.
//!
//! A thin layer over a [`clap::Command`] that schemas declare their
//! parameters and options against, and that parses the raw arguments
//! either permissively (preflight) or strictly.

use clap::builder::ValueParser;
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Parser under construction for one impersonated tool.
#[derive(Debug, Clone)]
pub struct Cmdline {
    command: Command,
    argv: Vec<String>,
}

impl Cmdline {
    /// Start a grammar for `toolname` that will parse `argv` (slot 0 included).
    pub fn new(toolname: &'static str, argv: &[String]) -> Self {
        let command = Command::new(toolname).disable_version_flag(true);
        Self {
            command,
            argv: argv.to_vec(),
        }
    }

    fn push(&mut self, arg: Arg) {
        self.command = std::mem::take(&mut self.command).arg(arg);
    }

    /// Declare a positional parameter list taking at least `min` values.
    ///
    /// The list is optional when `min` is zero. Upper limits belong to the
    /// owning schema's check.
    pub fn add_param(
        &mut self,
        id: &'static str,
        min: usize,
        value_name: &'static str,
        help: &'static str,
    ) {
        self.push(
            Arg::new(id)
                .num_args(min.max(1)..)
                .required(min > 0)
                .action(ArgAction::Append)
                .value_name(value_name)
                .help(help),
        );
    }

    /// Declare a single-value option.
    pub fn add_option(
        &mut self,
        id: &'static str,
        short: Option<char>,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) {
        self.push(value_arg(id, short, long, value_name, help));
    }

    /// Declare a single-value option whose text is converted by `parser`.
    pub fn add_typed_option(
        &mut self,
        id: &'static str,
        short: Option<char>,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
        parser: impl Into<ValueParser>,
    ) {
        self.push(value_arg(id, short, long, value_name, help).value_parser(parser));
    }

    /// Declare a boolean flag.
    pub fn add_flag(
        &mut self,
        id: &'static str,
        short: Option<char>,
        long: &'static str,
        help: &'static str,
    ) {
        let mut arg = Arg::new(id)
            .long(long)
            .action(ArgAction::SetTrue)
            .help(help);
        if let Some(c) = short {
            arg = arg.short(c);
        }
        self.push(arg);
    }

    /// Declare an option that may be given several times.
    pub fn add_repeated_option(
        &mut self,
        id: &'static str,
        short: Option<char>,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) {
        self.push(value_arg(id, short, long, value_name, help).action(ArgAction::Append));
    }

    /// Declare a repeatable option whose values may also be `delim`-joined.
    pub fn add_list_option(
        &mut self,
        id: &'static str,
        delim: char,
        short: Option<char>,
        long: &'static str,
        value_name: &'static str,
        help: &'static str,
    ) {
        self.push(
            value_arg(id, short, long, value_name, help)
                .action(ArgAction::Append)
                .value_delimiter(delim),
        );
    }

    /// Parse the arguments.
    ///
    /// A preflight pass ignores grammar errors so that only early exits such as
    /// help requests surface; the full pass reports every error.
    pub fn parse(&self, preflight: bool) -> Result<ArgMatches, clap::Error> {
        self.command
            .clone()
            .ignore_errors(preflight)
            .try_get_matches_from(&self.argv)
    }

    /// The underlying command, for help rendering.
    pub fn command(&self) -> &Command {
        &self.command
    }
}

fn value_arg(
    id: &'static str,
    short: Option<char>,
    long: &'static str,
    value_name: &'static str,
    help: &'static str,
) -> Arg {
    let arg = Arg::new(id)
        .long(long)
        .num_args(1)
        .value_name(value_name)
        .help(help);
    match short {
        Some(c) => arg.short(c),
        None => arg,
    }
}

/// Single string value, with empty text treated as absent.
pub fn single(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .get_one::<String>(id)
        .filter(|s| !s.is_empty())
        .cloned()
}

/// Typed single value.
pub fn typed<T: Clone + Send + Sync + 'static>(matches: &ArgMatches, id: &str) -> Option<T> {
    matches.get_one::<T>(id).cloned()
}

/// All values of a repeatable or list option, in command-line order.
pub fn many(matches: &ArgMatches, id: &str) -> Vec<String> {
    matches
        .get_many::<String>(id)
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

/// Boolean flag, false when absent.
pub fn flag(matches: &ArgMatches, id: &str) -> bool {
    matches.get_one::<bool>(id).copied().unwrap_or(false)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cmdline(args: &[&str]) -> Cmdline {
        let argv: Vec<String> = args.iter().map(ToString::to_string).collect();
        let mut cmdline = Cmdline::new("fasterq-dump", &argv);
        cmdline.add_param("accessions", 0, "accession", "accessions to process");
        cmdline.add_option("outdir", Some('O'), "outdir", "path", "output directory");
        cmdline.add_typed_option(
            "threads",
            Some('e'),
            "threads",
            "count",
            "worker threads",
            clap::value_parser!(u32),
        );
        cmdline.add_flag("fasta", None, "fasta", "produce FASTA");
        cmdline.add_repeated_option("region", Some('r'), "region", "name", "region");
        cmdline.add_list_option("debug", ',', Some('+'), "debug", "Module", "debug modules");
        cmdline
    }

    #[test]
    fn test_full_parse_binds_values() {
        let m = cmdline(&[
            "fasterq-dump", "SRR1", "-O", "out", "-e", "4", "--fasta", "SRR2", "-r", "a", "-r",
            "b", "-+", "VDB,KNS", "--debug", "KFS",
        ])
        .parse(false)
        .unwrap();

        assert_eq!(many(&m, "accessions"), ["SRR1", "SRR2"]);
        assert_eq!(single(&m, "outdir").as_deref(), Some("out"));
        assert_eq!(typed::<u32>(&m, "threads"), Some(4));
        assert!(flag(&m, "fasta"));
        assert_eq!(many(&m, "region"), ["a", "b"]);
        assert_eq!(many(&m, "debug"), ["VDB", "KNS", "KFS"]);
    }

    #[test]
    fn test_absent_values() {
        let m = cmdline(&["fasterq-dump"]).parse(false).unwrap();
        assert!(many(&m, "accessions").is_empty());
        assert_eq!(single(&m, "outdir"), None);
        assert_eq!(typed::<u32>(&m, "threads"), None);
        assert!(!flag(&m, "fasta"));
    }

    #[test]
    fn test_empty_value_is_absent() {
        let m = cmdline(&["fasterq-dump", "--outdir", ""]).parse(false).unwrap();
        assert_eq!(single(&m, "outdir"), None);
    }

    #[test]
    fn test_full_parse_rejects_bad_input() {
        assert!(cmdline(&["fasterq-dump", "--bogus"]).parse(false).is_err());
        assert!(cmdline(&["fasterq-dump", "-e", "many"]).parse(false).is_err());
        assert!(cmdline(&["fasterq-dump", "-O"]).parse(false).is_err());
    }

    #[test]
    fn test_positional_count_is_not_capped_by_grammar() {
        let mut args = vec!["fasterq-dump".to_string()];
        args.extend((0..300).map(|i| format!("SRR{i}")));
        let refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let m = cmdline(&refs).parse(false).unwrap();
        assert_eq!(many(&m, "accessions").len(), 300);
    }

    #[test]
    fn test_preflight_ignores_grammar_errors() {
        assert!(cmdline(&["fasterq-dump", "--bogus"]).parse(true).is_ok());
    }

    #[test]
    fn test_preflight_surfaces_help() {
        let err = cmdline(&["fasterq-dump", "--help"]).parse(true).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }
}
