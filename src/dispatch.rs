//! Parse, validate and translate one impersonated invocation.

#![allow(clippy::print_stdout)]
#![allow(clippy::print_stderr)]

use std::fmt;
use std::io::{self, Write};

use clap::error::ErrorKind;
use tracing::{debug, error, warn};

use crate::args::Args;
use crate::argv::{ArgVector, ArgvBuilder};
use crate::cmdline::{Cmdline, flag};
use crate::constants::exit_code;
use crate::error::{Error, Result};
use crate::identity::Identity;
use crate::options::{CommonOptions, OptionSet, ToolOptions};

/// Progress of a dispatcher run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Nothing done yet.
    Constructed,
    /// Tool and common schemas declared to the parser.
    SchemasRegistered,
    /// Permissive first pass finished.
    Preparsed,
    /// Full pass finished and values bound.
    Parsed,
    /// Both schemas passed their checks.
    Validated,
    /// Both schemas written to the argument builder.
    Translated,
    /// Run finished.
    Done,
    /// Run stopped early.
    Failed,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Everything the execution step needs to launch the real tool.
#[derive(Debug)]
pub struct Invocation {
    /// Tool to execute.
    pub toolname: &'static str,
    /// Common options, including the accessions still to be resolved.
    pub common: CommonOptions,
    /// Sanitized argument vector for the tool.
    pub argv: ArgVector,
}

impl Invocation {
    /// Accessions to run the tool on.
    pub fn accessions(&self) -> &[String] {
        &self.common.accessions
    }
}

/// Hands a finished invocation to the real tool.
pub trait Executor {
    /// Execute the tool. The argument vector is released when `invocation` drops.
    fn execute(&mut self, invocation: Invocation) -> Result<()>;
}

/// Executor that only prints the argument vector.
#[derive(Debug)]
pub struct DryRun<W> {
    out: W,
}

impl<W: Write> DryRun<W> {
    /// Print to `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Consume the executor and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl DryRun<io::Stdout> {
    /// Print to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Executor for DryRun<W> {
    fn execute(&mut self, invocation: Invocation) -> Result<()> {
        for (i, arg) in invocation.argv.iter().enumerate() {
            writeln!(self.out, "argv[{i}] = '{arg}'")?;
        }
        self.out.flush()?;
        Ok(())
    }
}

/// Drives one invocation through the parse, validate and translate stages.
#[derive(Debug)]
pub struct Dispatcher<'a> {
    args: &'a Args<'a>,
    toolname: &'static str,
    toolkit_version: String,
    tool_options: ToolOptions,
    stage: Stage,
}

impl<'a> Dispatcher<'a> {
    /// Prepare a run for the tool `identity` resolved to.
    pub fn new(args: &'a Args<'a>, identity: &Identity) -> Result<Self> {
        let unrecognized = || Error::UnrecognizedIdentity {
            basename: identity.basename().to_string(),
        };
        let tool_options = ToolOptions::for_imposter(identity.imposter()).ok_or_else(unrecognized)?;
        let toolname = identity.imposter().tool_name().ok_or_else(unrecognized)?;

        Ok(Self {
            args,
            toolname,
            toolkit_version: identity.toolkit_version().to_string(),
            tool_options,
            stage: Stage::Constructed,
        })
    }

    /// Current stage.
    pub const fn stage(&self) -> Stage {
        self.stage
    }

    /// Tool-specific options, bound once the run reached [`Stage::Parsed`].
    pub const fn tool_options(&self) -> &ToolOptions {
        &self.tool_options
    }

    fn advance(&mut self, stage: Stage) {
        debug!(from = %self.stage, to = %stage, tool = self.toolname, "dispatcher stage");
        self.stage = stage;
    }

    /// Run the invocation and return the process exit status.
    ///
    /// A parser error is reported on stderr but still yields
    /// [`exit_code::SUCCESS`].
    pub fn run(&mut self, executor: &mut dyn Executor) -> i32 {
        match self.try_run(executor) {
            Ok(status) => status,
            Err(Error::Parse(e)) => {
                if matches!(
                    e.kind(),
                    ErrorKind::DisplayHelp
                        | ErrorKind::DisplayVersion
                        | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    let _ = e.print();
                    self.advance(Stage::Done);
                } else {
                    eprintln!("An error occured: {e}");
                    warn!(tool = self.toolname, "command line rejected by parser");
                    self.advance(Stage::Failed);
                }
                // TODO: decide whether a rejected command line should exit non-zero
                exit_code::SUCCESS
            }
            Err(e @ Error::Validation { .. }) => {
                eprintln!("{e}");
                self.advance(Stage::Failed);
                exit_code::VALIDATION
            }
            Err(e) => {
                error!(tool = self.toolname, "{e}");
                eprintln!("{e}");
                self.advance(Stage::Failed);
                exit_code::FAILURE
            }
        }
    }

    fn try_run(&mut self, executor: &mut dyn Executor) -> Result<i32> {
        let mut cmdline = Cmdline::new(self.toolname, self.args.as_slice());
        let mut common = CommonOptions::new(self.toolname);

        self.tool_options.register(&mut cmdline);
        common.register(&mut cmdline);
        self.advance(Stage::SchemasRegistered);

        let preflight = cmdline.parse(true)?;
        self.advance(Stage::Preparsed);
        if flag(&preflight, "version") {
            println!("\n{} : {}\n", self.toolname, self.toolkit_version);
            self.advance(Stage::Done);
            return Ok(exit_code::SUCCESS);
        }

        let matches = cmdline.parse(false)?;
        self.tool_options.bind(&matches);
        common.bind(&matches);
        self.advance(Stage::Parsed);

        self.tool_options.check()?;
        common.check()?;
        self.advance(Stage::Validated);

        debug!(
            tool = %self.tool_options.describe(),
            common = %common.describe(),
            "parsed options"
        );

        let mut builder = ArgvBuilder::new();
        self.tool_options.populate(&mut builder);
        common.populate(&mut builder);
        self.advance(Stage::Translated);

        let argv = builder.build()?;
        executor.execute(Invocation {
            toolname: self.toolname,
            common,
            argv,
        })?;
        self.advance(Stage::Done);
        Ok(exit_code::SUCCESS)
    }
}
