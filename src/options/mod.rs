//! Option schemas for the impersonated tools.
//!
//! Every schema follows the same life cycle: it is registered against a
//! [`Cmdline`], bound from the parse result, checked, and finally translated
//! into an [`ArgvBuilder`]. The common options shared by all tools live in
//! [`CommonOptions`]; each tool contributes one variant of [`ToolOptions`].

mod common;
mod fasterq_dump;
mod fastq_dump;
mod prefetch;
mod sam_dump;
mod sra_pileup;
mod srapath;

use std::fmt::Write as _;

use clap::ArgMatches;

use crate::argv::ArgvBuilder;
use crate::cmdline::Cmdline;
use crate::error::{Error, Result};
use crate::identity::Imposter;

pub use common::CommonOptions;
pub use fasterq_dump::FasterqDumpOptions;
pub use fastq_dump::FastqDumpOptions;
pub use prefetch::PrefetchOptions;
pub use sam_dump::SamDumpOptions;
pub use sra_pileup::SraPileupOptions;
pub use srapath::SrapathOptions;

/// Contract shared by all option schemas.
pub trait OptionSet {
    /// Declare parameters and options to the parser.
    fn register(&self, cmdline: &mut Cmdline);

    /// Copy parsed values into the schema.
    fn bind(&mut self, matches: &ArgMatches);

    /// Render the parsed values, omitting empty and false fields.
    fn describe(&self) -> String;

    /// Append the effective options to the builder in canonical order.
    fn populate(&self, builder: &mut ArgvBuilder);

    /// Check semantic constraints the grammar cannot express.
    fn check(&self) -> Result<()>;
}

/// Tool-specific options, one variant per impersonated tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOptions {
    /// `srapath`
    Srapath(SrapathOptions),
    /// `prefetch`
    Prefetch(PrefetchOptions),
    /// `fastq-dump`
    FastqDump(FastqDumpOptions),
    /// `fasterq-dump`
    FasterqDump(FasterqDumpOptions),
    /// `sra-pileup`
    SraPileup(SraPileupOptions),
    /// `sam-dump`
    SamDump(SamDumpOptions),
}

impl ToolOptions {
    /// Fresh, unparsed options for `imposter`; `None` for an invalid identity.
    pub fn for_imposter(imposter: Imposter) -> Option<Self> {
        let options = match imposter {
            Imposter::Srapath => Self::Srapath(SrapathOptions::default()),
            Imposter::Prefetch => Self::Prefetch(PrefetchOptions::default()),
            Imposter::FastqDump => Self::FastqDump(FastqDumpOptions::default()),
            Imposter::FasterqDump => Self::FasterqDump(FasterqDumpOptions::default()),
            Imposter::SraPileup => Self::SraPileup(SraPileupOptions::default()),
            Imposter::SamDump => Self::SamDump(SamDumpOptions::default()),
            Imposter::Invalid => return None,
        };
        Some(options)
    }

    /// Tool these options belong to.
    pub const fn imposter(&self) -> Imposter {
        match self {
            Self::Srapath(_) => Imposter::Srapath,
            Self::Prefetch(_) => Imposter::Prefetch,
            Self::FastqDump(_) => Imposter::FastqDump,
            Self::FasterqDump(_) => Imposter::FasterqDump,
            Self::SraPileup(_) => Imposter::SraPileup,
            Self::SamDump(_) => Imposter::SamDump,
        }
    }

    fn inner(&self) -> &dyn OptionSet {
        match self {
            Self::Srapath(o) => o,
            Self::Prefetch(o) => o,
            Self::FastqDump(o) => o,
            Self::FasterqDump(o) => o,
            Self::SraPileup(o) => o,
            Self::SamDump(o) => o,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn OptionSet {
        match self {
            Self::Srapath(o) => o,
            Self::Prefetch(o) => o,
            Self::FastqDump(o) => o,
            Self::FasterqDump(o) => o,
            Self::SraPileup(o) => o,
            Self::SamDump(o) => o,
        }
    }
}

impl OptionSet for ToolOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        self.inner().register(cmdline);
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.inner_mut().bind(matches);
    }

    fn describe(&self) -> String {
        self.inner().describe()
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        self.inner().populate(builder);
    }

    fn check(&self) -> Result<()> {
        self.inner().check()
    }
}

/// True if `value` is exactly one of `allowed`.
pub fn is_one_of(value: &str, allowed: &[&str]) -> bool {
    allowed.contains(&value)
}

/// Fail unless an optional enumerated value is in `allowed`.
fn check_one_of(option: &str, value: Option<&str>, allowed: &[&str]) -> Result<()> {
    match value {
        Some(v) if !is_one_of(v, allowed) => Err(Error::validation(format!(
            "invalid value '{v}' for {option}, expected one of ({})",
            allowed.join("|")
        ))),
        _ => Ok(()),
    }
}

/// Fail if more than one of the named flags is set.
fn check_exclusive(flags: &[(&str, bool)]) -> Result<()> {
    let set: Vec<&str> = flags
        .iter()
        .filter(|(_, on)| *on)
        .map(|(name, _)| *name)
        .collect();
    if set.len() > 1 {
        return Err(Error::validation(format!(
            "options {} are mutually exclusive",
            set.join(", ")
        )));
    }
    Ok(())
}

/// Fail if both bounds are given and `min` exceeds `max`.
fn check_range(min_name: &str, min: Option<u64>, max_name: &str, max: Option<u64>) -> Result<()> {
    if let (Some(lo), Some(hi)) = (min, max)
        && lo > hi
    {
        return Err(Error::validation(format!(
            "{min_name} ({lo}) must not exceed {max_name} ({hi})"
        )));
    }
    Ok(())
}

/// Append `name` followed by the comma-joined values, if any.
fn describe_list(out: &mut String, name: &str, values: &[String]) {
    if !values.is_empty() {
        let _ = writeln!(out, "{name}{}", values.join(","));
    }
}

/// Append `name: value` if the value is present.
fn describe_value<T: std::fmt::Display>(out: &mut String, name: &str, value: Option<&T>) {
    if let Some(v) = value {
        let _ = writeln!(out, "{name}: {v}");
    }
}

/// Append `name` on its own line if the flag is set.
fn describe_flag(out: &mut String, name: &str, on: bool) {
    if on {
        let _ = writeln!(out, "{name}");
    }
}

/// Parse `args` against a schema's grammar and bind the result.
#[cfg(test)]
fn parse_into<T: OptionSet>(
    options: &mut T,
    args: &[&str],
) -> std::result::Result<(), clap::Error> {
    let argv: Vec<String> = args.iter().map(ToString::to_string).collect();
    let mut cmdline = Cmdline::new("test-tool", &argv);
    options.register(&mut cmdline);
    let matches = cmdline.parse(false)?;
    options.bind(&matches);
    Ok(())
}

/// Translate a schema into its option tokens.
#[cfg(test)]
fn translated<T: OptionSet>(options: &T) -> Vec<String> {
    let mut builder = ArgvBuilder::new();
    options.populate(&mut builder);
    builder.options().to_vec()
}
