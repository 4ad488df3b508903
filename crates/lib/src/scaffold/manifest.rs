//! `packages.config` manifest parsing.
//!
//! ```xml
//! <packages>
//!   <package id="Bridge" version="17.10.1" />
//!   <package id="Newtonsoft.Json" />
//! </packages>
//! ```

use thiserror::Error;

/// A package listed in a template's manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
  pub id: String,
  pub version: Option<String>,
}

#[derive(Debug, Error)]
pub enum ManifestError {
  #[error("not well-formed XML: {0}")]
  Xml(#[from] roxmltree::Error),

  #[error("expected a <packages> root element, found <{0}>")]
  UnexpectedRoot(String),

  #[error("<package> element without an id attribute")]
  MissingId,
}

/// Parse the package list out of a manifest document.
pub fn parse_manifest(xml: &str) -> Result<Vec<PackageReference>, ManifestError> {
  let document = roxmltree::Document::parse(xml)?;
  let root = document.root_element();
  if root.tag_name().name() != "packages" {
    return Err(ManifestError::UnexpectedRoot(root.tag_name().name().to_string()));
  }

  root
    .children()
    .filter(|node| node.is_element() && node.tag_name().name() == "package")
    .map(|node| {
      let id = node
        .attribute("id")
        .filter(|id| !id.trim().is_empty())
        .ok_or(ManifestError::MissingId)?;
      Ok(PackageReference {
        id: id.to_string(),
        version: node.attribute("version").map(str::to_string),
      })
    })
    .collect()
}
