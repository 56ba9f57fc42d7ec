//! Analyzer configuration
//!
//! Every ROS process exposes a handful of endpoints whether or not its
//! launch declaration says so. The set synthesised for each component is
//! configurable; the default is the roscpp logging interface.
//!
//! ```yaml
//! implicit_ports:
//!   - name: /rosout
//!     type: rosgraph_msgs/Log
//!     kind: publisher
//!   - name: ~get_loggers
//!     type: roscpp/GetLoggers
//!     kind: service_advertise
//! ```

use crate::{
    error::Result,
    names,
    tree::{NodeDesc, Port, PortKind},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Endpoint added to every component.
///
/// `name` follows graph name rules: `/x` is absolute, `~x` is private to the
/// component and `x` is relative to its namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImplicitPort {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub kind: PortKind,
}

impl ImplicitPort {
    fn new(name: &str, data_type: &str, kind: PortKind) -> Self {
        Self {
            name: name.to_string(),
            data_type: data_type.to_string(),
            kind,
        }
    }

    /// Concrete port for `component`
    pub fn resolve(&self, component: &NodeDesc) -> Port {
        Port::new(
            names::resolve_name(&component.path, &component.name, &self.name),
            self.data_type.clone(),
            self.kind,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintConfig {
    #[serde(default = "default_implicit_ports")]
    pub implicit_ports: Vec<ImplicitPort>,
}

fn default_implicit_ports() -> Vec<ImplicitPort> {
    vec![
        ImplicitPort::new("/rosout", "rosgraph_msgs/Log", PortKind::Publisher),
        ImplicitPort::new(
            "~get_loggers",
            "roscpp/GetLoggers",
            PortKind::ServiceAdvertise,
        ),
        ImplicitPort::new(
            "~set_logger_level",
            "roscpp/SetLoggerLevel",
            PortKind::ServiceAdvertise,
        ),
    ]
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            implicit_ports: default_implicit_ports(),
        }
    }
}

impl LintConfig {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        log::debug!("Loading lint config from {}", path.display());
        Self::from_yaml_str(&content)
    }
}
