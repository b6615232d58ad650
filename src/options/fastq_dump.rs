//! `fastq-dump` options.

use clap::ArgMatches;

use super::{OptionSet, check_exclusive, check_range, describe_flag, describe_value};
use crate::argv::ArgvBuilder;
use crate::cmdline::{Cmdline, flag, single, typed};
use crate::error::Result;

/// Options understood by `fastq-dump`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FastqDumpOptions {
    /// First spot to dump.
    pub min_spot_id: Option<u64>,
    /// Last spot to dump.
    pub max_spot_id: Option<u64>,
    /// Skip reads shorter than this.
    pub min_read_len: Option<u64>,
    /// Output directory.
    pub outdir: Option<String>,
    /// Write to stdout.
    pub stdout: bool,
    /// Compress output with gzip.
    pub gzip: bool,
    /// Compress output with bzip2.
    pub bzip2: bool,
    /// One file per read.
    pub split_files: bool,
    /// Mates to two files, singletons to a third.
    pub split_3: bool,
    /// Reads of a spot as separate records.
    pub split_spot: bool,
    /// Drop technical reads.
    pub skip_technical: bool,
    /// Defline format for sequences.
    pub defline_seq: Option<String>,
}

impl OptionSet for FastqDumpOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        cmdline.add_typed_option(
            "minSpotId",
            Some('N'),
            "minSpotId",
            "rowid",
            "minimum spot id",
            clap::value_parser!(u64),
        );
        cmdline.add_typed_option(
            "maxSpotId",
            Some('X'),
            "maxSpotId",
            "rowid",
            "maximum spot id",
            clap::value_parser!(u64),
        );
        cmdline.add_typed_option(
            "minReadLen",
            Some('M'),
            "minReadLen",
            "len",
            "filter by sequence length >= <len>",
            clap::value_parser!(u64),
        );
        cmdline.add_option(
            "outdir",
            Some('O'),
            "outdir",
            "path",
            "output directory, default is working directory",
        );
        cmdline.add_flag(
            "stdout",
            Some('Z'),
            "stdout",
            "output to stdout, all split data become joined into single stream",
        );
        cmdline.add_flag("gzip", None, "gzip", "compress output using gzip");
        cmdline.add_flag("bzip2", None, "bzip2", "compress output using bzip2");
        cmdline.add_flag(
            "split-files",
            None,
            "split-files",
            "write reads into separate files",
        );
        cmdline.add_flag(
            "split-3",
            None,
            "split-3",
            "3-way split: mates to _1/_2, singletons to a third file",
        );
        cmdline.add_flag(
            "split-spot",
            None,
            "split-spot",
            "split spots into individual reads",
        );
        cmdline.add_flag(
            "skip-technical",
            None,
            "skip-technical",
            "dump only biological reads",
        );
        cmdline.add_option(
            "defline-seq",
            None,
            "defline-seq",
            "fmt",
            "defline format specification for sequence",
        );
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.min_spot_id = typed(matches, "minSpotId");
        self.max_spot_id = typed(matches, "maxSpotId");
        self.min_read_len = typed(matches, "minReadLen");
        self.outdir = single(matches, "outdir");
        self.stdout = flag(matches, "stdout");
        self.gzip = flag(matches, "gzip");
        self.bzip2 = flag(matches, "bzip2");
        self.split_files = flag(matches, "split-files");
        self.split_3 = flag(matches, "split-3");
        self.split_spot = flag(matches, "split-spot");
        self.skip_technical = flag(matches, "skip-technical");
        self.defline_seq = single(matches, "defline-seq");
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        describe_value(&mut out, "minSpotId", self.min_spot_id.as_ref());
        describe_value(&mut out, "maxSpotId", self.max_spot_id.as_ref());
        describe_value(&mut out, "minReadLen", self.min_read_len.as_ref());
        describe_value(&mut out, "outdir", self.outdir.as_ref());
        describe_flag(&mut out, "stdout", self.stdout);
        describe_flag(&mut out, "gzip", self.gzip);
        describe_flag(&mut out, "bzip2", self.bzip2);
        describe_flag(&mut out, "split-files", self.split_files);
        describe_flag(&mut out, "split-3", self.split_3);
        describe_flag(&mut out, "split-spot", self.split_spot);
        describe_flag(&mut out, "skip-technical", self.skip_technical);
        describe_value(&mut out, "defline-seq", self.defline_seq.as_ref());
        out
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        let numbers = [
            ("--minSpotId", self.min_spot_id),
            ("--maxSpotId", self.max_spot_id),
            ("--minReadLen", self.min_read_len),
        ];
        for (name, value) in numbers {
            if let Some(v) = value {
                builder.add_option_value(name, &v);
            }
        }
        if let Some(v) = &self.outdir {
            builder.add_option_value("--outdir", v);
        }
        let flags = [
            ("--stdout", self.stdout),
            ("--gzip", self.gzip),
            ("--bzip2", self.bzip2),
            ("--split-files", self.split_files),
            ("--split-3", self.split_3),
            ("--split-spot", self.split_spot),
            ("--skip-technical", self.skip_technical),
        ];
        for (name, on) in flags {
            if on {
                builder.add_option(name);
            }
        }
        if let Some(v) = &self.defline_seq {
            builder.add_option_value("--defline-seq", v);
        }
    }

    fn check(&self) -> Result<()> {
        check_exclusive(&[("--gzip", self.gzip), ("--bzip2", self.bzip2)])?;
        check_exclusive(&[
            ("--split-files", self.split_files),
            ("--split-3", self.split_3),
            ("--split-spot", self.split_spot),
        ])?;
        check_range(
            "--minSpotId",
            self.min_spot_id,
            "--maxSpotId",
            self.max_spot_id,
        )
    }
}
