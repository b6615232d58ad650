//! `sra-pileup` options.

use clap::ArgMatches;

use super::{OptionSet, check_one_of, describe_flag, describe_list, describe_value};
use crate::argv::ArgvBuilder;
use crate::cmdline::{Cmdline, flag, many, single, typed};
use crate::error::Result;

const FUNCTIONS: &[&str] = &[
    "ref", "ref-ex", "count", "stat", "mismatch", "index", "varcount", "deletes", "indels",
];
const DUPLICATES: &[&str] = &["0", "1"];

/// Options understood by `sra-pileup`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SraPileupOptions {
    /// Regions to pile up, each `name[:from-to]`.
    pub aligned_region: Vec<String>,
    /// Output file.
    pub outfile: Option<String>,
    /// Minimum mapping quality.
    pub minmapq: Option<u32>,
    /// Duplicate handling (`0` ignore, `1` count).
    pub duplicates: Option<String>,
    /// Alternative output function.
    pub function: Option<String>,
    /// Omit base qualities.
    pub noqual: bool,
    /// Do not skip positions without coverage.
    pub no_skip: bool,
}

impl OptionSet for SraPileupOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        cmdline.add_repeated_option(
            "aligned-region",
            Some('r'),
            "aligned-region",
            "name[:from-to]",
            "Filter by position on genome",
        );
        cmdline.add_option(
            "outfile",
            Some('o'),
            "outfile",
            "filename",
            "Output will be written to this file",
        );
        cmdline.add_typed_option(
            "minmapq",
            Some('q'),
            "minmapq",
            "min. mapq",
            "Minimum mapq-value, alignments with lower mapq will be ignored",
            clap::value_parser!(u32),
        );
        cmdline.add_option(
            "duplicates",
            Some('d'),
            "duplicates",
            "0|1",
            "process duplicates 0..off/1..on",
        );
        cmdline.add_option(
            "function",
            None,
            "function",
            "fkt",
            "alternative functionality \
             (ref|ref-ex|count|stat|mismatch|index|varcount|deletes|indels)",
        );
        cmdline.add_flag("noqual", Some('p'), "noqual", "Omit qualities in output");
        cmdline.add_flag(
            "no-skip",
            Some('n'),
            "no-skip",
            "Does not skip reference-regions without alignments",
        );
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.aligned_region = many(matches, "aligned-region");
        self.outfile = single(matches, "outfile");
        self.minmapq = typed(matches, "minmapq");
        self.duplicates = single(matches, "duplicates");
        self.function = single(matches, "function");
        self.noqual = flag(matches, "noqual");
        self.no_skip = flag(matches, "no-skip");
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        describe_list(&mut out, "aligned-region:", &self.aligned_region);
        describe_value(&mut out, "outfile", self.outfile.as_ref());
        describe_value(&mut out, "minmapq", self.minmapq.as_ref());
        describe_value(&mut out, "duplicates", self.duplicates.as_ref());
        describe_value(&mut out, "function", self.function.as_ref());
        describe_flag(&mut out, "noqual", self.noqual);
        describe_flag(&mut out, "no-skip", self.no_skip);
        out
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        builder.add_option_values("--aligned-region", &self.aligned_region);
        if let Some(v) = &self.outfile {
            builder.add_option_value("--outfile", v);
        }
        if let Some(v) = self.minmapq {
            builder.add_option_value("--minmapq", &v);
        }
        if let Some(v) = &self.duplicates {
            builder.add_option_value("--duplicates", v);
        }
        if let Some(v) = &self.function {
            builder.add_option_value("--function", v);
        }
        if self.noqual {
            builder.add_option("--noqual");
        }
        if self.no_skip {
            builder.add_option("--no-skip");
        }
    }

    fn check(&self) -> Result<()> {
        check_one_of("--duplicates", self.duplicates.as_deref(), DUPLICATES)?;
        check_one_of("--function", self.function.as_deref(), FUNCTIONS)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::{parse_into, translated};
    use super::*;

    fn parsed(args: &[&str]) -> SraPileupOptions {
        let mut options = SraPileupOptions::default();
        parse_into(&mut options, args).unwrap();
        options
    }

    #[test]
    fn test_regions_repeat_their_flag() {
        let o = parsed(&[
            "sra-pileup", "-r", "chr1:1-100", "--function", "count", "-r", "chr2", "-n",
        ]);
        assert!(o.check().is_ok());
        assert_eq!(
            translated(&o),
            [
                "--aligned-region", "chr1:1-100", "--aligned-region", "chr2", "--function",
                "count", "--no-skip"
            ]
        );
    }

    #[test]
    fn test_enumerated_values() {
        assert!(parsed(&["sra-pileup", "--function", "topology"]).check().is_err());
        assert!(parsed(&["sra-pileup", "--function", "ref-ex"]).check().is_ok());
        assert!(parsed(&["sra-pileup", "-d", "2"]).check().is_err());
        assert!(parsed(&["sra-pileup", "-d", "1"]).check().is_ok());
    }

    #[test]
    fn test_describe() {
        let o = parsed(&["sra-pileup", "-r", "a", "-r", "b", "-q", "20"]);
        assert_eq!(o.describe(), "aligned-region:a,b\nminmapq: 20\n");
    }
}
