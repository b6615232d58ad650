//! `fasterq-dump` options.

use clap::ArgMatches;

use super::{OptionSet, check_exclusive, describe_flag, describe_value};
use crate::argv::ArgvBuilder;
use crate::cmdline::{Cmdline, flag, single, typed};
use crate::error::{Error, Result};

/// Options understood by `fasterq-dump`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct FasterqDumpOptions {
    /// Output file name.
    pub outfile: Option<String>,
    /// Output directory.
    pub outdir: Option<String>,
    /// Directory for temporary files.
    pub temp: Option<String>,
    /// Number of worker threads.
    pub threads: Option<u32>,
    /// Memory limit per thread.
    pub mem: Option<String>,
    /// File buffer size.
    pub bufsize: Option<String>,
    /// Cursor cache size.
    pub curcache: Option<String>,
    /// Show progress.
    pub progress: bool,
    /// Split spots into reads.
    pub split_spot: bool,
    /// Write reads into different files.
    pub split_files: bool,
    /// Mates to two files, singletons to a third.
    pub split_3: bool,
    /// Concatenate the reads of a spot.
    pub concatenate_reads: bool,
    /// Overwrite existing files.
    pub force: bool,
    /// Drop technical reads.
    pub skip_technical: bool,
    /// Produce FASTA instead of FASTQ.
    pub fasta: bool,
    /// Custom defline for sequence.
    pub seq_defline: Option<String>,
}

impl OptionSet for FasterqDumpOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        cmdline.add_option(
            "outfile",
            Some('o'),
            "outfile",
            "path",
            "full path of outputfile",
        );
        cmdline.add_option("outdir", Some('O'), "outdir", "path", "path for outputfile");
        cmdline.add_option(
            "temp",
            Some('t'),
            "temp",
            "path",
            "path to directory for temp. files",
        );
        cmdline.add_typed_option(
            "threads",
            Some('e'),
            "threads",
            "count",
            "how many threads to use",
            clap::value_parser!(u32),
        );
        cmdline.add_option("mem", Some('m'), "mem", "size", "memory limit for sorting");
        cmdline.add_option(
            "bufsize",
            Some('b'),
            "bufsize",
            "size",
            "size of file-buffer",
        );
        cmdline.add_option(
            "curcache",
            Some('c'),
            "curcache",
            "size",
            "size of cursor-cache",
        );
        cmdline.add_flag("progress", Some('p'), "progress", "show progress");
        cmdline.add_flag(
            "split-spot",
            Some('s'),
            "split-spot",
            "split spots into reads",
        );
        cmdline.add_flag(
            "split-files",
            Some('S'),
            "split-files",
            "write reads into different files",
        );
        cmdline.add_flag(
            "split-3",
            Some('3'),
            "split-3",
            "writes single reads into special file",
        );
        cmdline.add_flag(
            "concatenate-reads",
            None,
            "concatenate-reads",
            "writes whole spots into one file",
        );
        cmdline.add_flag(
            "force",
            Some('f'),
            "force",
            "force overwrite of existing file(s)",
        );
        cmdline.add_flag(
            "skip-technical",
            None,
            "skip-technical",
            "skip technical reads",
        );
        cmdline.add_flag("fasta", None, "fasta", "produce FASTA output");
        cmdline.add_option(
            "seq-defline",
            None,
            "seq-defline",
            "custom",
            "custom defline for sequence",
        );
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.outfile = single(matches, "outfile");
        self.outdir = single(matches, "outdir");
        self.temp = single(matches, "temp");
        self.threads = typed(matches, "threads");
        self.mem = single(matches, "mem");
        self.bufsize = single(matches, "bufsize");
        self.curcache = single(matches, "curcache");
        self.progress = flag(matches, "progress");
        self.split_spot = flag(matches, "split-spot");
        self.split_files = flag(matches, "split-files");
        self.split_3 = flag(matches, "split-3");
        self.concatenate_reads = flag(matches, "concatenate-reads");
        self.force = flag(matches, "force");
        self.skip_technical = flag(matches, "skip-technical");
        self.fasta = flag(matches, "fasta");
        self.seq_defline = single(matches, "seq-defline");
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        describe_value(&mut out, "outfile", self.outfile.as_ref());
        describe_value(&mut out, "outdir", self.outdir.as_ref());
        describe_value(&mut out, "temp", self.temp.as_ref());
        describe_value(&mut out, "threads", self.threads.as_ref());
        describe_value(&mut out, "mem", self.mem.as_ref());
        describe_value(&mut out, "bufsize", self.bufsize.as_ref());
        describe_value(&mut out, "curcache", self.curcache.as_ref());
        describe_flag(&mut out, "progress", self.progress);
        describe_flag(&mut out, "split-spot", self.split_spot);
        describe_flag(&mut out, "split-files", self.split_files);
        describe_flag(&mut out, "split-3", self.split_3);
        describe_flag(&mut out, "concatenate-reads", self.concatenate_reads);
        describe_flag(&mut out, "force", self.force);
        describe_flag(&mut out, "skip-technical", self.skip_technical);
        describe_flag(&mut out, "fasta", self.fasta);
        describe_value(&mut out, "seq-defline", self.seq_defline.as_ref());
        out
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        let paths = [
            ("--outfile", &self.outfile),
            ("--outdir", &self.outdir),
            ("--temp", &self.temp),
        ];
        for (name, value) in paths {
            if let Some(v) = value {
                builder.add_option_value(name, v);
            }
        }
        if let Some(v) = self.threads {
            builder.add_option_value("--threads", &v);
        }
        let sizes = [
            ("--mem", &self.mem),
            ("--bufsize", &self.bufsize),
            ("--curcache", &self.curcache),
        ];
        for (name, value) in sizes {
            if let Some(v) = value {
                builder.add_option_value(name, v);
            }
        }
        let flags = [
            ("--progress", self.progress),
            ("--split-spot", self.split_spot),
            ("--split-files", self.split_files),
            ("--split-3", self.split_3),
            ("--concatenate-reads", self.concatenate_reads),
            ("--force", self.force),
            ("--skip-technical", self.skip_technical),
            ("--fasta", self.fasta),
        ];
        for (name, on) in flags {
            if on {
                builder.add_option(name);
            }
        }
        if let Some(v) = &self.seq_defline {
            builder.add_option_value("--seq-defline", v);
        }
    }

    fn check(&self) -> Result<()> {
        if self.threads == Some(0) {
            return Err(Error::validation("--threads must be at least 1"));
        }
        check_exclusive(&[
            ("--split-spot", self.split_spot),
            ("--split-files", self.split_files),
            ("--split-3", self.split_3),
            ("--concatenate-reads", self.concatenate_reads),
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::super::{parse_into, translated};
    use super::*;

    fn parsed(args: &[&str]) -> FasterqDumpOptions {
        let mut options = FasterqDumpOptions::default();
        parse_into(&mut options, args).unwrap();
        options
    }

    #[test]
    fn test_translates_in_declaration_order() {
        let o = parsed(&[
            "fasterq-dump", "--fasta", "-3", "-e", "8", "-O", "/data", "-p", "-m", "1G",
        ]);
        assert!(o.check().is_ok());
        assert_eq!(
            translated(&o),
            [
                "--outdir", "/data", "--threads", "8", "--mem", "1G", "--progress", "--split-3",
                "--fasta"
            ]
        );
    }

    #[test]
    fn test_zero_threads_rejected() {
        assert!(parsed(&["fasterq-dump", "-e", "0"]).check().is_err());
        assert!(parsed(&["fasterq-dump", "-e", "1"]).check().is_ok());
    }

    #[test]
    fn test_split_modes_are_exclusive() {
        let err = parsed(&["fasterq-dump", "-S", "--concatenate-reads"])
            .check()
            .unwrap_err();
        assert!(err.to_string().contains("--split-files, --concatenate-reads"));
    }

    #[test]
    fn test_describe() {
        let o = parsed(&["fasterq-dump", "-e", "4", "-f"]);
        assert_eq!(o.describe(), "threads: 4\nforce\n");
    }
}
