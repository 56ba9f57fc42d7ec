//! Component tree entities

use crate::xml::ElementId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A namespace scope with the remaps declared directly inside it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    /// Absolute, `/`-terminated namespace path
    pub name: String,
    pub remaps: Vec<(String, String)>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            remaps: Vec::new(),
        }
    }

    pub fn root() -> Self {
        Self::new("/")
    }

    /// Apply the first matching remap to `path`.
    ///
    /// A remap matches when its `from` equals `path` as written, or when
    /// `from` resolved against this namespace equals `path`.
    pub fn resolve_remap(&self, path: &str) -> String {
        log::trace!("Resolving remaps for {}", path);

        for (from, to) in &self.remaps {
            if path == from || path == format!("{}{}", self.name, from) {
                log::trace!("...remapped to {}", to);
                return to.clone();
            }
            log::trace!("remap {} -> {} does not match", from, to);
        }

        log::trace!("...no remap found");
        path.to_string()
    }
}

/// Communication endpoint direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortKind {
    #[default]
    None,
    Publisher,
    Subscriber,
    ServiceAdvertise,
    ServiceClient,
}

impl PortKind {
    /// Map an annotation `class` attribute to a kind
    pub fn from_class(class: &str) -> Self {
        match class {
            "pub" => PortKind::Publisher,
            "sub" => PortKind::Subscriber,
            "adv" => PortKind::ServiceAdvertise,
            "call" => PortKind::ServiceClient,
            _ => PortKind::None,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            PortKind::None => "none",
            PortKind::Publisher => "pub",
            PortKind::Subscriber => "sub",
            PortKind::ServiceAdvertise => "adv",
            PortKind::ServiceClient => "call",
        }
    }
}

/// A typed topic or service endpoint of a component
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Port {
    /// Absolute endpoint name
    pub path: String,
    pub data_type: String,
    /// Reserved ordinal, -1 when unused
    pub index: i32,
    pub kind: PortKind,
}

impl Port {
    pub fn new(path: impl Into<String>, data_type: impl Into<String>, kind: PortKind) -> Self {
        Self {
            path: path.into(),
            data_type: data_type.into(),
            index: -1,
            kind,
        }
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  {} [{}] class:{}",
            self.path,
            self.data_type,
            self.kind.as_class()
        )
    }
}

/// One entry of the component tree.
///
/// Namespace-only entries leave `node_type`, `package`, `params` and
/// `ports` empty and carry no `namespace` or `source_element`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDesc {
    /// Namespace segment or component name
    pub name: String,
    /// Absolute path of the parent entry
    pub path: String,
    /// Executable, empty for namespace-only entries
    #[serde(rename = "type")]
    pub node_type: String,
    pub package: String,
    pub source_file: String,
    pub namespace: Option<Namespace>,
    pub params: Vec<(String, String)>,
    pub args: String,
    pub ports: Vec<Port>,
    pub source_element: Option<ElementId>,
}

impl NodeDesc {
    /// A namespace-only entry
    pub fn namespace_only(
        name: impl Into<String>,
        path: impl Into<String>,
        source_file: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            node_type: String::new(),
            package: String::new(),
            source_file: source_file.into(),
            namespace: None,
            params: Vec::new(),
            args: String::new(),
            ports: Vec::new(),
            source_element: None,
        }
    }

    /// Whether this entry is a declared component rather than a namespace
    pub fn is_component(&self) -> bool {
        !self.node_type.is_empty()
    }

    /// Fully qualified name: parent path followed by the entry name
    pub fn full_name(&self) -> String {
        format!("{}{}", self.path, self.name)
    }

    /// Rewrite `path` through this component's merged remaps
    pub fn resolve_remap(&self, path: &str) -> String {
        match &self.namespace {
            Some(ns) => ns.resolve_remap(path),
            None => path.to_string(),
        }
    }
}

impl fmt::Display for NodeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}{}", self.path, self.name)?;

        for (name, value) in &self.params {
            writeln!(f, "  {}={}", name, value)?;
        }

        writeln!(f)?;

        for port in &self.ports {
            writeln!(f, "{}", port)?;
        }

        Ok(())
    }
}
