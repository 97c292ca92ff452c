//! Single source of truth for the pkgscribe filesystem layout.
//!
//! This module defines WHERE files live. It does no I/O.
//!
//! ```text
//! <root>/
//! ├── .pkgscribe/config.toml   # Optional config
//! ├── prompts/
//! │   ├── prompt_docs.txt      # Doc Generator template
//! │   └── prompt_tests.txt     # Test Generator template
//! ├── docs/<sanitized>.md      # Generated documentation
//! └── tests/<sanitized>.md     # Generated test suites
//! ```

use std::path::{Path, PathBuf};

use crate::artifact;
use crate::config::LayoutSection;

/// Doc Generator template file name
pub const DOCS_PROMPT_FILE: &str = "prompt_docs.txt";

/// Test Generator template file name
pub const TESTS_PROMPT_FILE: &str = "prompt_tests.txt";

/// Project config dir: `<root>/.pkgscribe/`
pub fn pkgscribe_dir(root: &Path) -> PathBuf {
    root.join(".pkgscribe")
}

/// Project config: `<root>/.pkgscribe/config.toml`
pub fn config_path(root: &Path) -> PathBuf {
    pkgscribe_dir(root).join("config.toml")
}

/// Resolved directories for one project root
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
    dirs: LayoutSection,
}

impl Layout {
    pub fn new(root: impl Into<PathBuf>, dirs: LayoutSection) -> Self {
        Self {
            root: root.into(),
            dirs,
        }
    }

    /// Generated documentation: `<root>/docs/`
    pub fn docs_dir(&self) -> PathBuf {
        self.root.join(&self.dirs.docs_dir)
    }

    /// Generated test suites: `<root>/tests/`
    pub fn tests_dir(&self) -> PathBuf {
        self.root.join(&self.dirs.tests_dir)
    }

    /// Prompt templates: `<root>/prompts/`
    pub fn prompts_dir(&self) -> PathBuf {
        self.root.join(&self.dirs.prompts_dir)
    }

    /// `<root>/prompts/prompt_docs.txt`
    pub fn docs_prompt(&self) -> PathBuf {
        self.prompts_dir().join(DOCS_PROMPT_FILE)
    }

    /// `<root>/prompts/prompt_tests.txt`
    pub fn tests_prompt(&self) -> PathBuf {
        self.prompts_dir().join(TESTS_PROMPT_FILE)
    }

    /// `<root>/docs/<stem>.md`
    pub fn doc_file(&self, stem: &str) -> PathBuf {
        artifact::artifact_path(&self.docs_dir(), stem)
    }

    /// `<root>/tests/<stem>.md`
    pub fn test_file(&self, stem: &str) -> PathBuf {
        artifact::artifact_path(&self.tests_dir(), stem)
    }
}
