//! Resolved XML launch document

pub mod entity;
pub mod parser;
pub mod visitor;

pub use entity::{Content, Element, ElementId, ElementKind, LaunchDocument};
pub use parser::{parse_xml_file, parse_xml_string};
pub use visitor::{walk, DocumentVisitor};
