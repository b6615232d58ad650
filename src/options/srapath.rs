//! `srapath` options.

use clap::ArgMatches;

use super::{OptionSet, check_one_of, describe_flag, describe_list, describe_value};
use crate::argv::ArgvBuilder;
use crate::cmdline::{Cmdline, flag, many, single, typed};
use crate::error::{Error, Result};

const FUNCTIONS: &[&str] = &["names", "search"];
const PROTOCOLS: &[&str] = &["fasp", "http", "https"];

/// Options understood by `srapath`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SrapathOptions {
    /// Resolver function.
    pub function: Option<String>,
    /// Request timeout in milliseconds.
    pub timeout: Option<u64>,
    /// Comma-separated protocol preference.
    pub protocol: Option<String>,
    /// Resolver API version.
    pub vers: Option<String>,
    /// Resolver URL.
    pub url: Option<String>,
    /// Extra `name=value` request parameters.
    pub params: Vec<String>,
    /// Print the raw resolver reply.
    pub raw: bool,
    /// Print the reply as JSON.
    pub json: bool,
    /// Also report cache locations.
    pub cache: bool,
}

impl OptionSet for SrapathOptions {
    fn register(&self, cmdline: &mut Cmdline) {
        cmdline.add_option(
            "function",
            Some('f'),
            "function",
            "function",
            "function to perform (names|search)",
        );
        cmdline.add_typed_option(
            "timeout",
            Some('t'),
            "timeout",
            "value",
            "timeout value in milliseconds",
            clap::value_parser!(u64),
        );
        cmdline.add_option(
            "protocol",
            Some('a'),
            "protocol",
            "protocol",
            "protocol(s) to use, comma separated (fasp|http|https)",
        );
        cmdline.add_option(
            "vers",
            Some('e'),
            "vers",
            "version",
            "version of the name-resolver service",
        );
        cmdline.add_option(
            "url",
            Some('u'),
            "url",
            "url",
            "url of the name-resolver service",
        );
        cmdline.add_repeated_option(
            "param",
            Some('p'),
            "param",
            "name=value",
            "additional request parameter",
        );
        cmdline.add_flag("raw", Some('r'), "raw", "print the raw reply");
        cmdline.add_flag("json", Some('j'), "json", "print the reply in JSON");
        cmdline.add_flag("cache", Some('c'), "cache", "also print the cache location");
    }

    fn bind(&mut self, matches: &ArgMatches) {
        self.function = single(matches, "function");
        self.timeout = typed(matches, "timeout");
        self.protocol = single(matches, "protocol");
        self.vers = single(matches, "vers");
        self.url = single(matches, "url");
        self.params = many(matches, "param");
        self.raw = flag(matches, "raw");
        self.json = flag(matches, "json");
        self.cache = flag(matches, "cache");
    }

    fn describe(&self) -> String {
        let mut out = String::new();
        describe_value(&mut out, "function", self.function.as_ref());
        describe_value(&mut out, "timeout", self.timeout.as_ref());
        describe_value(&mut out, "protocol", self.protocol.as_ref());
        describe_value(&mut out, "vers", self.vers.as_ref());
        describe_value(&mut out, "url", self.url.as_ref());
        describe_list(&mut out, "params:", &self.params);
        describe_flag(&mut out, "raw", self.raw);
        describe_flag(&mut out, "json", self.json);
        describe_flag(&mut out, "cache", self.cache);
        out
    }

    fn populate(&self, builder: &mut ArgvBuilder) {
        if let Some(v) = &self.function {
            builder.add_option_value("--function", v);
        }
        if let Some(v) = self.timeout {
            builder.add_option_value("--timeout", &v);
        }
        if let Some(v) = &self.protocol {
            builder.add_option_value("--protocol", v);
        }
        if let Some(v) = &self.vers {
            builder.add_option_value("--vers", v);
        }
        if let Some(v) = &self.url {
            builder.add_option_value("--url", v);
        }
        builder.add_option_values("--param", &self.params);
        if self.raw {
            builder.add_option("--raw");
        }
        if self.json {
            builder.add_option("--json");
        }
        if self.cache {
            builder.add_option("--cache");
        }
    }

    fn check(&self) -> Result<()> {
        check_one_of("--function", self.function.as_deref(), FUNCTIONS)?;
        if let Some(protocols) = &self.protocol {
            for p in protocols.split(',') {
                check_one_of("--protocol", Some(p), PROTOCOLS)?;
            }
        }
        if let Some(p) = self.params.iter().find(|p| !p.contains('=')) {
            return Err(Error::validation(format!(
                "request parameter '{p}' is not of the form name=value"
            )));
        }
        Ok(())
    }
}
