//! Tool identity detection from the invocation name.
//!
//! The driver is installed under several names (`fasterq-dump`,
//! `prefetch.3.0.0`, ...) and decides which tool to impersonate from
//! `argv[0]` alone.

use std::fmt;

use crate::constants::{DEFAULT_TOOLKIT_VERS, TOOLKIT_VERS_OVERRIDE};

/// Tool personality adopted by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Imposter {
    /// `srapath`
    Srapath,
    /// `prefetch`
    Prefetch,
    /// `fastq-dump`
    FastqDump,
    /// `fasterq-dump`
    FasterqDump,
    /// `sra-pileup`
    SraPileup,
    /// `sam-dump`
    SamDump,
    /// Invocation name matched no known tool.
    Invalid,
}

/// Basename to identity table, matched case-sensitively.
static IMPOSTERS: [(&str, Imposter); 6] = [
    ("srapath", Imposter::Srapath),
    ("prefetch", Imposter::Prefetch),
    ("fastq-dump", Imposter::FastqDump),
    ("fasterq-dump", Imposter::FasterqDump),
    ("sra-pileup", Imposter::SraPileup),
    ("sam-dump", Imposter::SamDump),
];

impl Imposter {
    /// Resolve a basename against the known tools.
    pub fn from_basename(basename: &str) -> Self {
        IMPOSTERS
            .iter()
            .find(|(name, _)| *name == basename)
            .map_or(Self::Invalid, |(_, imposter)| *imposter)
    }

    /// Name the tool is installed under, `None` for [`Imposter::Invalid`].
    pub fn tool_name(self) -> Option<&'static str> {
        IMPOSTERS
            .iter()
            .find(|(_, imposter)| *imposter == self)
            .map(|(name, _)| *name)
    }

    /// All recognized identities.
    pub fn all() -> impl Iterator<Item = Self> {
        IMPOSTERS.iter().map(|(_, imposter)| *imposter)
    }
}

impl fmt::Display for Imposter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Srapath => "SRAPATH",
            Self::Prefetch => "PREFETCH",
            Self::FastqDump => "FASTQ_DUMP",
            Self::FasterqDump => "FASTERQ_DUMP",
            Self::SraPileup => "SRA_PILEUP",
            Self::SamDump => "SAM_DUMP",
            Self::Invalid => "INVALID",
        };
        f.write_str(s)
    }
}

/// Packed toolkit version (`major:8 | minor:8 | patch:16`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolkitVersion(u32);

impl ToolkitVersion {
    /// Wrap a packed version value.
    pub const fn from_packed(packed: u32) -> Self {
        Self(packed)
    }

    /// Version compiled into this binary.
    ///
    /// `SRATOOLS_TOOLKIT_VERS` at build time takes precedence over the default;
    /// an unparsable override falls back to the default.
    pub fn compiled() -> Self {
        Self(
            TOOLKIT_VERS_OVERRIDE
                .and_then(parse_packed)
                .unwrap_or(DEFAULT_TOOLKIT_VERS),
        )
    }

    /// Major component.
    pub const fn major(self) -> u32 {
        self.0 >> 24
    }

    /// Minor component.
    pub const fn minor(self) -> u32 {
        (self.0 >> 16) & 0xFF
    }

    /// Patch component.
    pub const fn patch(self) -> u32 {
        self.0 & 0xFFFF
    }
}

impl fmt::Display for ToolkitVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major(), self.minor(), self.patch())
    }
}

fn parse_packed(s: &str) -> Option<u32> {
    let s = s.trim();
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .map_or_else(
            || s.parse().ok(),
            |hex| u32::from_str_radix(&hex.replace('_', ""), 16).ok(),
        )
}

/// Identity record derived once from `argv[0]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    basename: String,
    requested_version: String,
    toolkit_version: String,
    imposter: Imposter,
    version_ok: bool,
}

impl Identity {
    /// Detect the identity against the compiled toolkit version.
    pub fn detect(argv0: &str) -> Self {
        Self::detect_with(argv0, ToolkitVersion::compiled())
    }

    /// Detect the identity against an explicit toolkit version.
    pub fn detect_with(argv0: &str, toolkit: ToolkitVersion) -> Self {
        let file_name = argv0.rsplit_once('/').map_or(argv0, |(_, tail)| tail);
        let (basename, requested_version) = file_name.split_once('.').unwrap_or((file_name, ""));
        let toolkit_version = toolkit.to_string();
        let version_ok = requested_version.is_empty() || requested_version == toolkit_version;

        Self {
            basename: basename.to_string(),
            requested_version: requested_version.to_string(),
            imposter: Imposter::from_basename(basename),
            toolkit_version,
            version_ok,
        }
    }

    /// Tool name with path and version suffix stripped.
    pub fn basename(&self) -> &str {
        &self.basename
    }

    /// Version pinned in the invocation name, empty if none.
    pub fn requested_version(&self) -> &str {
        &self.requested_version
    }

    /// Toolkit version as `major.minor.patch`.
    pub fn toolkit_version(&self) -> &str {
        &self.toolkit_version
    }

    /// Resolved tool.
    pub const fn imposter(&self) -> Imposter {
        self.imposter
    }

    /// True if the basename matched none of the known tools.
    pub fn invalid(&self) -> bool {
        self.imposter == Imposter::Invalid
    }

    /// True if a pinned version differs from the toolkit version.
    pub const fn invalid_version(&self) -> bool {
        !self.version_ok
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} _basename:{} _requested_version:{} _toolkit_version:{} _version_ok: {}",
            self.imposter,
            self.basename,
            self.requested_version,
            self.toolkit_version,
            if self.version_ok { "YES" } else { "NO" }
        )
    }
}
