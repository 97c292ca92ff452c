//! `pkgscribe generate` - Markdown documentation for an npm package

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::artifact;
use crate::gemini::Generator;
use crate::package::PackageName;
use crate::paths::Layout;
use crate::template::PACKAGE_LINK;

/// Build the documentation prompt for `package`
pub fn build_prompt(
    layout: &Layout,
    package: &PackageName,
    template: Option<&Path>,
) -> Result<String> {
    let template = super::load_template(layout.docs_prompt(), template)?;
    super::check_placeholder(&template, PACKAGE_LINK);

    Ok(template.fill(PACKAGE_LINK, &package.url()).into_prompt())
}

/// Generate `docs/<sanitized>.md` and return its path
pub fn execute(
    layout: &Layout,
    package: &PackageName,
    template: Option<&Path>,
    generator: &dyn Generator,
) -> Result<PathBuf> {
    tracing::info!(package = %package, url = %package.url(), "generating documentation");

    let prompt = build_prompt(layout, package, template)?;
    let text = generator.generate(&prompt)?;

    let path = artifact::write(&layout.doc_file(&package.sanitized()), text.as_deref())?;

    println!("Documentation saved to {}", path.display());
    Ok(path)
}
