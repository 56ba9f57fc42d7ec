//! XML launch document loading

use super::entity::LaunchDocument;
use crate::error::Result;
use std::path::Path;

/// Read a resolved launch file from disk
pub fn parse_xml_file(path: &Path) -> Result<LaunchDocument> {
    let content = std::fs::read_to_string(path)?;
    parse_xml_string(&content)
}

/// Parse resolved launch XML text into a [`LaunchDocument`]
pub fn parse_xml_string(content: &str) -> Result<LaunchDocument> {
    let doc = roxmltree::Document::parse(content)?;
    Ok(LaunchDocument::from_roxmltree(&doc))
}
