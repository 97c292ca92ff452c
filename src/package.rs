//! npm package identity
//!
//! A package name is kept exactly as typed for the registry URL, and
//! sanitized separately when it is used as a file stem.

use anyhow::Result;
use std::fmt;

/// Base URL for package pages on the npm registry
pub const NPM_PACKAGE_URL: &str = "https://www.npmjs.com/package/";

/// A published npm package, possibly scoped (`@scope/name`)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageName {
    raw: String,
}

impl PackageName {
    /// Create a package name, rejecting the empty string
    pub fn new(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            anyhow::bail!(
                "Package name must not be empty, e.g. \"pkgscribe generate @rescui/use-glow-hover\""
            );
        }
        Ok(Self { raw })
    }

    /// The name as given on the command line
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Registry page for this package. The name is not encoded.
    pub fn url(&self) -> String {
        format!("{}{}", NPM_PACKAGE_URL, self.raw)
    }

    /// Filesystem-safe stem for output files
    pub fn sanitized(&self) -> String {
        sanitize(&self.raw)
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Replace `@`, `/` and `\` with `-`. Every other character is kept.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '@' | '/' | '\\' => '-',
            other => other,
        })
        .collect()
}

/// clap value parser for package name arguments
pub fn parse_package_name(s: &str) -> std::result::Result<PackageName, String> {
    PackageName::new(s).map_err(|e| e.to_string())
}
