//! Port extraction from comment annotations
//!
//! Endpoints of a component cannot be inferred from the launch file alone,
//! so they are declared in XML comments inside the `<node>` element:
//!
//! ```xml
//! <node name="talker" pkg="rospy_tutorials" type="talker.py">
//!   <!-- <topics>
//!          <topic name="chatter" type="std_msgs/String" class="pub"/>
//!        </topics> -->
//!   <!-- <services>
//!          <service name="~reset" type="std_srvs/Empty" class="adv"/>
//!        </services> -->
//! </node>
//! ```
//!
//! Only the first element of a comment is read. Comments that are not XML,
//! hold no element, or whose first element is neither `topics` nor
//! `services` are skipped.

use crate::{
    config::LintConfig,
    error::AnnotationError,
    names,
    tree::{ComponentTree, NodeDesc, Port, PortKind},
    xml::LaunchDocument,
};

const ANNOTATION_ROOTS: [&str; 2] = ["topics", "services"];

/// Synthetic root so comments with several top-level elements still parse
const WRAPPER: &str = "annotation";

/// Parse one comment as a port annotation for `component`.
pub fn parse_annotation(
    comment: &str,
    component: &NodeDesc,
) -> std::result::Result<Vec<Port>, AnnotationError> {
    let wrapped = format!("<{0}>{1}</{0}>", WRAPPER, comment);
    let doc = roxmltree::Document::parse(&wrapped)?;
    let root = doc
        .root_element()
        .first_element_child()
        .ok_or(AnnotationError::NoElement)?;

    let root_name = root.tag_name().name();
    if !ANNOTATION_ROOTS.contains(&root_name) {
        return Err(AnnotationError::UnrecognizedRoot(root_name.to_string()));
    }

    let ports = root
        .children()
        .filter(|n| n.is_element())
        .map(|entry| {
            Port::new(
                names::resolve_name(
                    &component.path,
                    &component.name,
                    entry.attribute("name").unwrap_or(""),
                ),
                entry.attribute("type").unwrap_or(""),
                PortKind::from_class(entry.attribute("class").unwrap_or("")),
            )
        })
        .collect();

    Ok(ports)
}

/// Fill in the ports of every component in `tree`.
///
/// Components get the configured implicit ports first, then the ports of
/// each annotation comment in document order.
pub fn extract_ports(tree: &mut ComponentTree, doc: &LaunchDocument, config: &LintConfig) {
    for id in tree.ids() {
        let desc = tree.get(id);
        let mut ports = Vec::new();

        if desc.is_component() {
            ports.extend(config.implicit_ports.iter().map(|p| p.resolve(desc)));
        }

        if let Some(element) = desc.source_element.and_then(|e| doc.get(e)) {
            for comment in element.comments() {
                match parse_annotation(comment, desc) {
                    Ok(found) => {
                        log::debug!(
                            "{} ports annotated for {}",
                            found.len(),
                            desc.full_name()
                        );
                        ports.extend(found);
                    }
                    Err(e) => log::info!("{}: {}", desc.full_name(), e),
                }
            }
        }

        tree.get_mut(id).ports.extend(ports);
    }
}
