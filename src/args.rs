//! Ownership wrapper around the process argument vector.

use std::borrow::Cow;
use std::fmt::Write as _;

/// Raw arguments as handed to the driver.
///
/// Normally the caller's vector is borrowed. In test mode the vector is
/// deep-copied with slot 0 replaced by the impersonated tool name, and the
/// copy is released when the wrapper is dropped.
#[derive(Debug, Clone)]
pub struct Args<'a> {
    argv: Cow<'a, [String]>,
}

impl<'a> Args<'a> {
    /// Wrap `argv`, switching to test mode if `test_imp` is non-empty.
    pub fn new(argv: &'a [String], test_imp: Option<&str>) -> Self {
        let argv = match test_imp.filter(|imp| !imp.is_empty()) {
            Some(imp) => {
                let mut owned = Vec::with_capacity(argv.len().max(1));
                owned.push(imp.to_string());
                owned.extend(argv.iter().skip(1).cloned());
                Cow::Owned(owned)
            }
            None => Cow::Borrowed(argv),
        };
        Self { argv }
    }

    /// True if the wrapper owns a rewritten copy of the arguments.
    pub fn testing(&self) -> bool {
        matches!(self.argv, Cow::Owned(_))
    }

    /// Number of arguments, program name included.
    pub fn len(&self) -> usize {
        self.argv.len()
    }

    /// True if there are no arguments at all.
    pub fn is_empty(&self) -> bool {
        self.argv.is_empty()
    }

    /// Program name (slot 0), empty if absent.
    pub fn program(&self) -> &str {
        self.argv.first().map_or("", String::as_str)
    }

    /// All arguments, program name included.
    pub fn as_slice(&self) -> &[String] {
        &self.argv
    }

    /// Diagnostic listing of every argument.
    pub fn dump(&self) -> String {
        let mut out = format!("main2() ( testing = {} )\n", u8::from(self.testing()));
        for (i, arg) in self.argv.iter().enumerate() {
            let _ = writeln!(out, "argv[{i}] = {arg}");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_borrows_without_override() {
        let raw = argv(&["/usr/bin/fasterq-dump", "SRR000001"]);
        let args = Args::new(&raw, None);
        assert!(!args.testing());
        assert_eq!(args.len(), 2);
        assert_eq!(args.program(), "/usr/bin/fasterq-dump");
        assert!(std::ptr::eq(args.as_slice(), raw.as_slice()));
    }

    #[test]
    fn test_empty_override_borrows() {
        let raw = argv(&["sratools", "x"]);
        let args = Args::new(&raw, Some(""));
        assert!(!args.testing());
        assert_eq!(args.program(), "sratools");
    }

    #[test]
    fn test_override_replaces_slot_zero_and_copies_rest() {
        let raw = argv(&["sratools", "SRR000001", "-L", "info"]);
        let args = Args::new(&raw, Some("fasterq-dump"));
        assert!(args.testing());
        assert_eq!(args.as_slice(), argv(&["fasterq-dump", "SRR000001", "-L", "info"]));
        assert!(!std::ptr::eq(args.as_slice().as_ptr(), raw.as_ptr()));
        assert_ne!(args.as_slice()[1].as_ptr(), raw[1].as_ptr());
    }

    #[test]
    fn test_override_on_empty_argv() {
        let raw: Vec<String> = Vec::new();
        let args = Args::new(&raw, Some("prefetch"));
        assert!(args.testing());
        assert_eq!(args.as_slice(), argv(&["prefetch"]));
    }

    #[test]
    fn test_program_of_empty_argv() {
        let raw: Vec<String> = Vec::new();
        let args = Args::new(&raw, None);
        assert!(args.is_empty());
        assert_eq!(args.program(), "");
    }

    #[test]
    fn test_dump_lists_every_argument() {
        let raw = argv(&["sratools", "SRR1"]);
        let args = Args::new(&raw, Some("sam-dump"));
        assert_eq!(
            args.dump(),
            "main2() ( testing = 1 )\nargv[0] = sam-dump\nargv[1] = SRR1\n"
        );
    }
}
