//! Sanitized argument vector construction.
//!
//! [`ArgvBuilder`] stages positional parameters and option tokens as text.
//! [`ArgvBuilder::build`] materializes them into an [`ArgVector`], which owns an
//! independent NUL-terminated copy of every token and can be viewed as the
//! null-terminated pointer array expected by process-execution APIs.

use std::ffi::{CStr, CString, c_char};
use std::fmt::{Display, Write as _};

use crate::error::{Error, Result};

/// Append-only staging area for the downstream tool's arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgvBuilder {
    parameters: Vec<String>,
    options: Vec<String>,
}

impl ArgvBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a positional parameter.
    pub fn add_parameter(&mut self, parameter: impl Into<String>) {
        self.parameters.push(parameter.into());
    }

    /// Drop all staged parameters.
    pub fn clear_parameters(&mut self) {
        self.parameters.clear();
    }

    /// Append a bare flag.
    pub fn add_option(&mut self, flag: &str) {
        self.options.push(flag.to_string());
    }

    /// Append a flag followed by one value.
    pub fn add_option_value<T: Display + ?Sized>(&mut self, flag: &str, value: &T) {
        self.options.push(flag.to_string());
        self.options.push(value.to_string());
    }

    /// Append the flag once per value (`-f a -f b`).
    pub fn add_option_values<T: Display>(&mut self, flag: &str, values: &[T]) {
        for value in values {
            self.add_option_value(flag, value);
        }
    }

    /// Append the flag once with all values joined by `delim` (`-f a,b`).
    pub fn add_list_option<T: Display>(&mut self, flag: &str, delim: char, values: &[T]) {
        let mut joined = String::new();
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                joined.push(delim);
            }
            let _ = write!(joined, "{value}");
        }
        self.options.push(flag.to_string());
        self.options.push(joined);
    }

    /// Staged positional parameters.
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Staged option tokens, flags and values flattened.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Materialize parameters then options into an owned vector.
    pub fn build(&self) -> Result<ArgVector> {
        let args = self
            .parameters
            .iter()
            .chain(&self.options)
            .map(|token| {
                CString::new(token.as_bytes()).map_err(|source| Error::InteriorNul {
                    token: token.replace('\0', "\\0"),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(ArgVector { args })
    }
}

/// Materialized argument vector.
///
/// Not `Clone`: each token is released exactly once when the vector drops.
#[derive(Debug, PartialEq, Eq)]
pub struct ArgVector {
    args: Vec<CString>,
}

impl ArgVector {
    /// Number of tokens, not counting the null sentinel.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// True if no tokens were materialized.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Token at `index`.
    pub fn get(&self, index: usize) -> Option<&CStr> {
        self.args.get(index).map(CString::as_c_str)
    }

    /// Iterate tokens as UTF-8 text.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.args.iter().filter_map(|arg| arg.to_str().ok())
    }

    /// Null-terminated pointer array for exec-style APIs.
    ///
    /// The pointers borrow from `self` and are valid only while it is alive.
    pub fn as_ptrs(&self) -> Vec<*const c_char> {
        self.args
            .iter()
            .map(|arg| arg.as_ptr())
            .chain(std::iter::once(std::ptr::null()))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_builder_materializes_sentinel_only() {
        let argv = ArgvBuilder::new().build().unwrap();
        assert!(argv.is_empty());
        let ptrs = argv.as_ptrs();
        assert_eq!(ptrs.len(), 1);
        assert!(ptrs[0].is_null());
    }

    #[test]
    fn test_parameters_precede_options() {
        let mut builder = ArgvBuilder::new();
        builder.add_option("--split-3");
        builder.add_parameter("SRR000001");
        builder.add_option_value("-L", "info");
        builder.add_parameter("SRR000002");

        let argv = builder.build().unwrap();
        assert_eq!(argv.len(), 5);
        assert_eq!(
            argv.iter().collect::<Vec<_>>(),
            ["SRR000001", "SRR000002", "--split-3", "-L", "info"]
        );
        let ptrs = argv.as_ptrs();
        assert_eq!(ptrs.len(), 6);
        assert!(ptrs[5].is_null());
        assert!(ptrs[..5].iter().all(|p| !p.is_null()));
    }

    #[test]
    fn test_materialized_tokens_do_not_alias_staging() {
        let mut builder = ArgvBuilder::new();
        builder.add_parameter("SRR000001");
        let argv = builder.build().unwrap();
        let staged = builder.parameters()[0].as_ptr();
        let built = argv.get(0).unwrap().as_ptr().cast::<u8>();
        assert_ne!(staged, built);
        drop(builder);
        assert_eq!(argv.get(0).unwrap().to_str().unwrap(), "SRR000001");
    }

    #[test]
    fn test_generic_value_is_rendered() {
        let mut builder = ArgvBuilder::new();
        builder.add_option_value("--threads", &6_u32);
        builder.add_option_value("--min-size", &1.5_f64);
        assert_eq!(builder.options(), ["--threads", "6", "--min-size", "1.5"]);
    }

    #[test]
    fn test_repeatable_option_repeats_flag() {
        let mut builder = ArgvBuilder::new();
        builder.add_option_values("-+", &["VDB", "KNS-TLS"]);
        assert_eq!(builder.options(), ["-+", "VDB", "-+", "KNS-TLS"]);

        let mut builder = ArgvBuilder::new();
        builder.add_option_values::<String>("-+", &[]);
        assert!(builder.options().is_empty());
    }

    #[test]
    fn test_list_option_joins_with_delimiter() {
        let mut builder = ArgvBuilder::new();
        builder.add_list_option("--aligned-region", ';', &["chr1", "chr2:1-100"]);
        assert_eq!(builder.options(), ["--aligned-region", "chr1;chr2:1-100"]);

        let mut builder = ArgvBuilder::new();
        builder.add_list_option::<&str>("-a", ',', &[]);
        assert_eq!(builder.options(), ["-a", ""]);
    }

    #[test]
    fn test_clear_parameters_keeps_options() {
        let mut builder = ArgvBuilder::new();
        builder.add_parameter("SRR1");
        builder.add_option("--gzip");
        builder.clear_parameters();
        assert!(builder.parameters().is_empty());
        assert_eq!(builder.build().unwrap().len(), 1);
    }

    #[test]
    fn test_interior_nul_is_rejected() {
        let mut builder = ArgvBuilder::new();
        builder.add_option_value("--outfile", "a\0b");
        let err = builder.build().unwrap_err();
        assert!(matches!(err, Error::InteriorNul { ref token, .. } if token == "a\\0b"));
    }

    #[test]
    fn test_repeated_build_yields_independent_vectors() {
        let mut builder = ArgvBuilder::new();
        builder.add_option("--fasta");
        let first = builder.build().unwrap();
        let second = builder.build().unwrap();
        assert_eq!(first, second);
        assert_ne!(first.as_ptrs()[0], second.as_ptrs()[0]);
    }
}
