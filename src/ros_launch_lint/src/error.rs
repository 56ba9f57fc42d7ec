//! Error types for ros_launch_lint

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("XML parsing error: {0}")]
    XmlError(#[from] roxmltree::Error),

    #[error("Invalid configuration: {0}")]
    ConfigError(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Reasons a comment is rejected as a port annotation.
///
/// Never fatal: the extractor logs these and moves on to the next comment.
#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("Comment found, but failed to parse xml: {0}")]
    Malformed(#[from] roxmltree::Error),

    #[error("Invalid xml annotation structure: no element in comment")]
    NoElement,

    #[error("Invalid xml annotation structure: unexpected root '<{0}>'")]
    UnrecognizedRoot(String),
}

pub type Result<T> = std::result::Result<T, LintError>;
