//! ros_launch_lint library
//!
//! Static analysis of resolved ROS launch files: rebuilds the tree of
//! components the launch would start, with their namespaces, remaps,
//! params and communication ports, and compares such trees.

pub mod annotation;
pub mod config;
pub mod diff;
pub mod error;
pub mod names;
pub mod traverser;
pub mod tree;
pub mod xml;

pub use config::LintConfig;
pub use diff::{diff, diff_trees, TreeDiff};
pub use error::{LintError, Result};
pub use traverser::TreeBuilder;
pub use tree::{ComponentTree, Namespace, NodeDesc, NodeId, Port, PortKind};

use std::path::Path;
use xml::LaunchDocument;

/// Build the component tree of `doc` and annotate its ports
pub fn analyze_document(
    doc: &LaunchDocument,
    root_file: &str,
    config: &LintConfig,
) -> ComponentTree {
    let mut tree = TreeBuilder::build(doc, root_file);
    annotation::extract_ports(&mut tree, doc, config);
    log::info!(
        "{}: {} components, {} global params",
        root_file,
        tree.components().count(),
        tree.global_params.len()
    );
    tree
}

/// Analyze resolved launch XML given as a string
pub fn analyze_str(content: &str, root_file: &str, config: &LintConfig) -> Result<ComponentTree> {
    let doc = xml::parse_xml_string(content)?;
    Ok(analyze_document(&doc, root_file, config))
}

/// Analyze a resolved launch file on disk
pub fn analyze_launch_file(path: &Path, config: &LintConfig) -> Result<ComponentTree> {
    log::info!("Analyzing launch file: {}", path.display());
    let doc = xml::parse_xml_file(path)?;
    Ok(analyze_document(&doc, &path.display().to_string(), config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_analyze_simple_launch() {
        let xml = r#"<launch>
            <group ns="a"><node name="n" pkg="p" type="t"/></group>
        </launch>"#;

        let tree = analyze_str(xml, "root.launch", &LintConfig::default()).unwrap();
        let components: Vec<_> = tree.components().collect();
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].path, "/a/");
        assert_eq!(components[0].ports.len(), 3);
    }

    #[test]
    fn test_analyze_launch_file() {
        let xml = r#"<launch>
            <node pkg="rospy_tutorials" type="talker.py" name="talker" />
            <node pkg="rospy_tutorials" type="listener.py" name="listener" />
        </launch>"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(xml.as_bytes()).unwrap();
        file.flush().unwrap();

        let tree = analyze_launch_file(file.path(), &LintConfig::default()).unwrap();
        let names: Vec<_> = tree.components().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["talker", "listener"]);

        let root_file = file.path().display().to_string();
        assert!(tree.components().all(|c| c.source_file == root_file));
    }

    #[test]
    fn test_analyze_malformed() {
        let result = analyze_str("<launch><node", "root.launch", &LintConfig::default());
        assert!(matches!(result, Err(LintError::XmlError(_))));
    }
}
