//! `sam-dump` options.

use clap::ArgMatches;

use super::{OptionSet, check_exclusive, describe_flag, describe_list, describe_value};
use crate::argv::ArgvBuilder;
use crate::cmdline::{Cmdline, flag, many, single};
use crate::error::Result;

/// Options understood by `sam-dump`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct SamDumpOptions {
    /// Regions to dump, each `name[:from-to]`.
    pub aligned_region: Vec<String>,
    /// Include unaligned reads.
    pub unaligned: bool,
    /// Primary alignments only.
    pub primary: bool,
    /// Long CIGAR form.
    pub cigar_long: bool,
    /// Always reconstruct the header.
    pub header: bool,
    /// Omit the header.
    pub no_header: bool,
    /// Produce FASTQ.
    pub fastq: bool,
    /// Produce FASTA.
    pub fasta: bool,
    /// Compress output with gzip.
    pub gzip: bool,
    /// Compress output with bzip2.
    pub bzip2: bool,
    /// Output file.
    pub output_file: Option<String>,
}

impl OptionSet for SamDumpOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        cmdline.add_repeated_option(
            "aligned-region",
            None,
            "aligned-region",
            "name[:from-to]",
            "Filter by position on genome",
        );
        cmdline.add_flag(
            "unaligned",
            Some('u'),
            "unaligned",
            "Output unaligned reads",
        );
        cmdline.add_flag(
            "primary",
            Some('1'),
            "primary",
            "Output only primary alignments",
        );
        cmdline.add_flag(
            "cigar-long",
            Some('c'),
            "cigar-long",
            "Output long version of CIGAR",
        );
        cmdline.add_flag("header", Some('r'), "header", "Always reconstruct header");
        cmdline.add_flag("no-header", Some('n'), "no-header", "Do not output headers");
        cmdline.add_flag("fastq", None, "fastq", "Produce FastQ formatted output");
        cmdline.add_flag("fasta", None, "fasta", "Produce Fasta formatted output");
        cmdline.add_flag("gzip", None, "gzip", "Compress output using gzip");
        cmdline.add_flag("bzip2", None, "bzip2", "Compress output using bzip2");
        cmdline.add_option(
            "output-file",
            Some('o'),
            "output-file",
            "file",
            "print output into this file",
        );
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.aligned_region = many(matches, "aligned-region");
        self.unaligned = flag(matches, "unaligned");
        self.primary = flag(matches, "primary");
        self.cigar_long = flag(matches, "cigar-long");
        self.header = flag(matches, "header");
        self.no_header = flag(matches, "no-header");
        self.fastq = flag(matches, "fastq");
        self.fasta = flag(matches, "fasta");
        self.gzip = flag(matches, "gzip");
        self.bzip2 = flag(matches, "bzip2");
        self.output_file = single(matches, "output-file");
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        describe_list(&mut out, "aligned-region:", &self.aligned_region);
        describe_flag(&mut out, "unaligned", self.unaligned);
        describe_flag(&mut out, "primary", self.primary);
        describe_flag(&mut out, "cigar-long", self.cigar_long);
        describe_flag(&mut out, "header", self.header);
        describe_flag(&mut out, "no-header", self.no_header);
        describe_flag(&mut out, "fastq", self.fastq);
        describe_flag(&mut out, "fasta", self.fasta);
        describe_flag(&mut out, "gzip", self.gzip);
        describe_flag(&mut out, "bzip2", self.bzip2);
        describe_value(&mut out, "output-file", self.output_file.as_ref());
        out
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        builder.add_option_values("--aligned-region", &self.aligned_region);
        let flags = [
            ("--unaligned", self.unaligned),
            ("--primary", self.primary),
            ("--cigar-long", self.cigar_long),
            ("--header", self.header),
            ("--no-header", self.no_header),
            ("--fastq", self.fastq),
            ("--fasta", self.fasta),
            ("--gzip", self.gzip),
            ("--bzip2", self.bzip2),
        ];
        for (name, on) in flags {
            if on {
                builder.add_option(name);
            }
        }
        if let Some(v) = &self.output_file {
            builder.add_option_value("--output-file", v);
        }
    }

    fn check(&self) -> Result<()> {
        check_exclusive(&[("--header", self.header), ("--no-header", self.no_header)])?;
        check_exclusive(&[("--fastq", self.fastq), ("--fasta", self.fasta)])?;
        check_exclusive(&[("--gzip", self.gzip), ("--bzip2", self.bzip2)])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::{parse_into, translated};
    use super::*;

    fn parsed(args: &[&str]) -> SamDumpOptions {
        let mut options = SamDumpOptions::default();
        parse_into(&mut options, args).unwrap();
        options
    }

    #[test]
    fn test_translates_in_declaration_order() {
        let o = parsed(&[
            "sam-dump", "-o", "out.sam", "--aligned-region", "chr20", "-1", "-u",
        ]);
        assert!(o.check().is_ok());
        assert_eq!(
            translated(&o),
            [
                "--aligned-region", "chr20", "--unaligned", "--primary", "--output-file",
                "out.sam"
            ]
        );
    }

    #[test]
    fn test_exclusive_pairs() {
        assert!(parsed(&["sam-dump", "-r", "-n"]).check().is_err());
        assert!(parsed(&["sam-dump", "--fastq", "--fasta"]).check().is_err());
        assert!(parsed(&["sam-dump", "--gzip", "--bzip2"]).check().is_err());
        assert!(parsed(&["sam-dump", "--fastq", "--gzip"]).check().is_ok());
    }
}
