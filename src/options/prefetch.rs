//! `prefetch` options.

use clap::ArgMatches;

use super::{OptionSet, check_one_of, check_range, describe_flag, describe_value};
use crate::argv::ArgvBuilder;
use crate::cmdline::{Cmdline, flag, single, typed};
use crate::error::Result;

const TRANSPORTS: &[&str] = &["http", "fasp", "both"];
const FORCE: &[&str] = &["no", "yes", "all", "ALL"];
const YES_NO: &[&str] = &["yes", "no"];

/// Options understood by `prefetch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefetchOptions {
    /// File type to download.
    pub file_type: Option<String>,
    /// Transport (`http`, `fasp`, `both`).
    pub transport: Option<String>,
    /// Minimum file size to download, in KB.
    pub min_size: Option<u64>,
    /// Maximum file size to download, in KB.
    pub max_size: Option<u64>,
    /// Force download (`no`, `yes`, `all`, `ALL`).
    pub force: Option<String>,
    /// Resume partial downloads (`yes`, `no`).
    pub resume: Option<String>,
    /// Verify after download (`yes`, `no`).
    pub verify: Option<String>,
    /// Write the file here.
    pub output_file: Option<String>,
    /// Save files into this directory.
    pub output_directory: Option<String>,
    /// Show progress.
    pub progress: bool,
    /// Double-check all references.
    pub check_all: bool,
}

impl OptionSet for PrefetchOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        cmdline.add_option(
            "type",
            Some('T'),
            "type",
            "file-type",
            "specify file type to download",
        );
        cmdline.add_option(
            "transport",
            Some('t'),
            "transport",
            "value",
            "transport: one of: fasp; http; both",
        );
        cmdline.add_typed_option(
            "min-size",
            Some('N'),
            "min-size",
            "size",
            "minimum file size to download in KB (inclusive)",
            clap::value_parser!(u64),
        );
        cmdline.add_typed_option(
            "max-size",
            Some('X'),
            "max-size",
            "size",
            "maximum file size to download in KB (exclusive)",
            clap::value_parser!(u64),
        );
        cmdline.add_option(
            "force",
            Some('f'),
            "force",
            "yes|no|all|ALL",
            "force object download",
        );
        cmdline.add_option(
            "resume",
            Some('r'),
            "resume",
            "yes|no",
            "resume partial downloads",
        );
        cmdline.add_option(
            "verify",
            Some('C'),
            "verify",
            "yes|no",
            "verify after download",
        );
        cmdline.add_option(
            "output-file",
            Some('o'),
            "output-file",
            "file",
            "write file to <file>",
        );
        cmdline.add_option(
            "output-directory",
            Some('O'),
            "output-directory",
            "directory",
            "save files to <directory>/",
        );
        cmdline.add_flag("progress", Some('p'), "progress", "show progress");
        cmdline.add_flag(
            "check-all",
            Some('c'),
            "check-all",
            "double-check all refseqs",
        );
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.file_type = single(matches, "type");
        self.transport = single(matches, "transport");
        self.min_size = typed(matches, "min-size");
        self.max_size = typed(matches, "max-size");
        self.force = single(matches, "force");
        self.resume = single(matches, "resume");
        self.verify = single(matches, "verify");
        self.output_file = single(matches, "output-file");
        self.output_directory = single(matches, "output-directory");
        self.progress = flag(matches, "progress");
        self.check_all = flag(matches, "check-all");
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        describe_value(&mut out, "type", self.file_type.as_ref());
        describe_value(&mut out, "transport", self.transport.as_ref());
        describe_value(&mut out, "min-size", self.min_size.as_ref());
        describe_value(&mut out, "max-size", self.max_size.as_ref());
        describe_value(&mut out, "force", self.force.as_ref());
        describe_value(&mut out, "resume", self.resume.as_ref());
        describe_value(&mut out, "verify", self.verify.as_ref());
        describe_value(&mut out, "output-file", self.output_file.as_ref());
        describe_value(&mut out, "output-directory", self.output_directory.as_ref());
        describe_flag(&mut out, "progress", self.progress);
        describe_flag(&mut out, "check-all", self.check_all);
        out
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        let values = [
            ("--type", &self.file_type),
            ("--transport", &self.transport),
        ];
        for (name, value) in values {
            if let Some(v) = value {
                builder.add_option_value(name, v);
            }
        }
        if let Some(v) = self.min_size {
            builder.add_option_value("--min-size", &v);
        }
        if let Some(v) = self.max_size {
            builder.add_option_value("--max-size", &v);
        }
        let values = [
            ("--force", &self.force),
            ("--resume", &self.resume),
            ("--verify", &self.verify),
            ("--output-file", &self.output_file),
            ("--output-directory", &self.output_directory),
        ];
        for (name, value) in values {
            if let Some(v) = value {
                builder.add_option_value(name, v);
            }
        }
        if self.progress {
            builder.add_option("--progress");
        }
        if self.check_all {
            builder.add_option("--check-all");
        }
    }

    fn check(&self) -> Result<()> {
        check_one_of("--transport", self.transport.as_deref(), TRANSPORTS)?;
        check_one_of("--force", self.force.as_deref(), FORCE)?;
        check_one_of("--resume", self.resume.as_deref(), YES_NO)?;
        check_one_of("--verify", self.verify.as_deref(), YES_NO)?;
        check_range("--min-size", self.min_size, "--max-size", self.max_size)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::{parse_into, translated};
    use super::*;

    fn parsed(args: &[&str]) -> PrefetchOptions {
        let mut options = PrefetchOptions::default();
        parse_into(&mut options, args).unwrap();
        options
    }

    #[test]
    fn test_translates_in_declaration_order() {
        let o = parsed(&[
            "prefetch", "-p", "-O", "out", "-X", "20000000", "-t", "http", "-f", "yes",
        ]);
        assert!(o.check().is_ok());
        assert_eq!(
            translated(&o),
            [
                "--transport", "http", "--max-size", "20000000", "--force", "yes",
                "--output-directory", "out", "--progress"
            ]
        );
    }

    #[test]
    fn test_enumerated_values() {
        assert!(parsed(&["prefetch", "-t", "ftp"]).check().is_err());
        assert!(parsed(&["prefetch", "-f", "ALL"]).check().is_ok());
        assert!(parsed(&["prefetch", "-f", "All"]).check().is_err());
        assert!(parsed(&["prefetch", "-r", "maybe"]).check().is_err());
        assert!(parsed(&["prefetch", "-C", "no"]).check().is_ok());
    }

    #[test]
    fn test_min_size_above_max_size() {
        assert!(parsed(&["prefetch", "-N", "10", "-X", "5"]).check().is_err());
        assert!(parsed(&["prefetch", "-N", "5", "-X", "10"]).check().is_ok());
    }

    #[test]
    fn test_describe_empty() {
        assert_eq!(PrefetchOptions::default().describe(), "");
    }
}
