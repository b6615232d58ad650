//! Options and parameters shared by every impersonated tool.

use std::fmt::Write as _;

use clap::ArgMatches;

use super::{OptionSet, check_one_of, describe_flag, describe_list};
use crate::argv::ArgvBuilder;
use crate::cmdline::{Cmdline, flag, many, single};
use crate::constants::{LIST_DELIMITER, LOG_LEVELS, limits};
use crate::error::{Error, Result};

/// Accessions plus the common option set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommonOptions {
    /// Name of the tool being impersonated.
    pub toolname: String,
    /// Accessions to process.
    pub accessions: Vec<String>,
    /// Path to an ngc file.
    pub ngc_file: Option<String>,
    /// Path to a kar file.
    pub kar_file: Option<String>,
    /// Path to a permission file.
    pub perm_file: Option<String>,
    /// Location in the cloud.
    pub location: Option<String>,
    /// `--disable-multithreading`
    pub disable_multithreading: bool,
    /// `-V/--version`
    pub version: bool,
    /// Debug modules, in command-line order.
    pub debug: Vec<String>,
    /// Requested log level.
    pub log_level: Option<String>,
    /// File with further options and parameters.
    pub option_file: Option<String>,
}

impl CommonOptions {
    /// Empty common options for `toolname`.
    pub fn new(toolname: impl Into<String>) -> Self {
        Self {
            toolname: toolname.into(),
            ..Self::default()
        }
    }
}

impl OptionSet for CommonOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        cmdline.add_param(
            "accessions",
            0,
            "accessions(s)",
            "list of accessions to process",
        );
        cmdline.add_option("ngc", None, "ngc", "path", "<path> to ngc file");
        cmdline.add_option("kar", None, "kar", "path", "<path> to kar file");
        cmdline.add_option("perm", None, "perm", "path", "<path> to permission file");
        cmdline.add_option("location", None, "location", "loc", "location in cloud");

        cmdline.add_flag(
            "disable-multithreading",
            None,
            "disable-multithreading",
            "disable multithreading",
        );
        cmdline.add_flag(
            "version",
            Some('V'),
            "version",
            "Display the version of the program",
        );

        cmdline.add_list_option(
            "debug",
            LIST_DELIMITER,
            Some('+'),
            "debug",
            "Module[-Flag]",
            "Turn on debug output for module. All flags if not specified.",
        );
        cmdline.add_option(
            "log-level",
            Some('L'),
            "log-level",
            "level",
            "Logging level as number or enum string. One of (fatal|sys|int|err|warn|info|debug) \
             or (0-6) Current/default is warn",
        );
        cmdline.add_option(
            "option-file",
            None,
            "option-file",
            "file",
            "Read more options and parameters from the file.",
        );
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.accessions = many(matches, "accessions");
        self.ngc_file = single(matches, "ngc");
        self.kar_file = single(matches, "kar");
        self.perm_file = single(matches, "perm");
        self.location = single(matches, "location");
        self.disable_multithreading = flag(matches, "disable-multithreading");
        self.version = flag(matches, "version");
        self.debug = many(matches, "debug")
            .into_iter()
            .filter(|module| !module.is_empty())
            .collect();
        self.log_level = single(matches, "log-level");
        self.option_file = single(matches, "option-file");
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        for acc in &self.accessions {
            let _ = writeln!(out, "acc  = {acc}");
        }
        if let Some(v) = &self.ngc_file {
            let _ = writeln!(out, "ngc-file : {v}");
        }
        if let Some(v) = &self.kar_file {
            let _ = writeln!(out, "kar-file : {v}");
        }
        if let Some(v) = &self.perm_file {
            let _ = writeln!(out, "perm-file: {v}");
        }
        if let Some(v) = &self.location {
            let _ = writeln!(out, "location : {v}");
        }
        describe_flag(&mut out, "disable multithreading", self.disable_multithreading);
        describe_flag(&mut out, "version", self.version);
        describe_list(&mut out, "debug modules:", &self.debug);
        if let Some(v) = &self.log_level {
            let _ = writeln!(out, "log-level: {v}");
        }
        if let Some(v) = &self.option_file {
            let _ = writeln!(out, "option-file: {v}");
        }
        out
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        builder.add_option_values("-+", &self.debug);
        if self.disable_multithreading {
            builder.add_option("--disable-multithreading");
        }
        if let Some(level) = &self.log_level {
            builder.add_option_value("-L", level);
        }
        if let Some(file) = &self.option_file {
            builder.add_option_value("--option-file", file);
        }
    }

    fn check(&self) -> Result<()> {
        // ngc/kar/perm files are resolved later; their existence is not checked here
        check_one_of("--log-level", self.log_level.as_deref(), LOG_LEVELS)?;
        if self.accessions.len() > limits::MAX_ACCESSIONS {
            return Err(Error::validation(format!(
                "too many accessions: {} (at most {})",
                self.accessions.len(),
                limits::MAX_ACCESSIONS
            )));
        }
        if self.debug.len() > limits::MAX_DEBUG_MODULES {
            return Err(Error::validation(format!(
                "too many debug modules: {} (at most {})",
                self.debug.len(),
                limits::MAX_DEBUG_MODULES
            )));
        }
        Ok(())
    }
}
