use ros_launch_lint::{analyze_str, LintConfig, LintError, PortKind};

fn analyze(xml: &str) -> ros_launch_lint::ComponentTree {
    analyze_str(xml, "root.launch", &LintConfig::default()).unwrap()
}

#[test]
fn test_empty_file() {
    let result = analyze_str("", "root.launch", &LintConfig::default());
    assert!(result.is_err(), "Empty file should produce an error");
}

#[test]
fn test_malformed_xml() {
    let xml = "<launch>\n  <node pkg=\"test\" type=\"test\"\n</launch>";
    let err = analyze_str(xml, "root.launch", &LintConfig::default()).unwrap_err();
    assert!(matches!(err, LintError::XmlError(_)));
    assert!(
        err.to_string().contains("XML parsing error"),
        "Error should mention XML parsing: {}",
        err
    );
}

#[test]
fn test_empty_launch() {
    let tree = analyze("<launch/>");
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.components().count(), 0);
    assert!(tree.global_params.is_empty());
}

#[test]
fn test_node_without_name_pkg_or_type() {
    let tree = analyze(r#"<launch><node/></launch>"#);
    let root = tree.root();
    assert_eq!(tree.children(root).len(), 1);

    let entry = tree.get(tree.children(root)[0]);
    assert_eq!(entry.name, "");
    assert_eq!(entry.package, "");
    assert!(!entry.is_component(), "Without a type there is no component");
    assert!(entry.ports.is_empty());
}

#[test]
fn test_remap_without_attributes() {
    let tree = analyze(r#"<launch><remap/><node name="n" pkg="p" type="t"/></launch>"#);
    let n = tree.components().next().unwrap();
    assert_eq!(
        n.namespace.as_ref().unwrap().remaps,
        vec![(String::new(), String::new())]
    );
}

#[test]
fn test_include_without_file() {
    let tree = analyze(r#"<launch><include><node name="n" pkg="p" type="t"/></include></launch>"#);
    let n = tree.components().next().unwrap();
    assert_eq!(n.source_file, "");
}

#[test]
fn test_nested_includes_restore_provenance() {
    let tree = analyze(
        r#"<launch>
            <include file="a.launch">
                <include file="b.launch">
                    <node name="deep" pkg="p" type="t"/>
                </include>
                <node name="mid" pkg="p" type="t"/>
            </include>
            <node name="top" pkg="p" type="t"/>
        </launch>"#,
    );
    let files: Vec<_> = tree
        .components()
        .map(|c| (c.name.as_str(), c.source_file.as_str()))
        .collect();
    assert_eq!(
        files,
        vec![
            ("deep", "b.launch"),
            ("mid", "a.launch"),
            ("top", "root.launch")
        ]
    );
}

#[test]
fn test_params_do_not_leak_between_components() {
    let tree = analyze(
        r#"<launch>
            <node name="a" pkg="p" type="t"><param name="x" value="1"/></node>
            <node name="b" pkg="p" type="t"/>
        </launch>"#,
    );
    let components: Vec<_> = tree.components().collect();
    assert_eq!(components[0].params.len(), 1);
    assert!(components[1].params.is_empty());
}

#[test]
fn test_deeply_nested_groups() {
    let mut xml = String::from("<launch>");
    for i in 0..32 {
        xml.push_str(&format!("<group ns=\"g{}\">", i));
    }
    xml.push_str(r#"<node name="n" pkg="p" type="t"/>"#);
    for _ in 0..32 {
        xml.push_str("</group>");
    }
    xml.push_str("</launch>");

    let tree = analyze(&xml);
    let n = tree.components().next().unwrap();
    assert!(n.path.starts_with("/g0/g1/g2/"));
    assert!(n.path.ends_with("/g31/"));
    assert_eq!(tree.len(), 34);
}

#[test]
fn test_annotation_with_unknown_root_is_skipped() {
    let tree = analyze(
        r#"<launch><node name="n" pkg="p" type="t">
            <!-- <params><p name="x"/></params> -->
            <!-- <topics><t name="ok" type="std_msgs/Empty" class="pub"/></topics> -->
        </node></launch>"#,
    );
    let n = tree.components().next().unwrap();
    assert_eq!(n.ports.len(), 4);
    assert_eq!(n.ports[3].path, "/ok");
}

#[test]
fn test_annotation_with_incomplete_entries() {
    let tree = analyze(
        r#"<launch><node name="n" pkg="p" type="t">
            <!-- <topics><t name="no_type"/><t type="x/Y" class="sub"/></topics> -->
        </node></launch>"#,
    );
    let n = tree.components().next().unwrap();
    assert_eq!(n.ports.len(), 5);
    assert_eq!(n.ports[3].path, "/no_type");
    assert_eq!(n.ports[3].data_type, "");
    assert_eq!(n.ports[3].kind, PortKind::None);
    assert_eq!(n.ports[4].path, "/");
    assert_eq!(n.ports[4].kind, PortKind::Subscriber);
}

#[test]
fn test_annotations_outside_node_are_ignored() {
    let tree = analyze(
        r#"<launch>
            <!-- <topics><t name="stray" type="x/Y" class="pub"/></topics> -->
            <group ns="g">
                <!-- <topics><t name="stray" type="x/Y" class="pub"/></topics> -->
                <node name="n" pkg="p" type="t"/>
            </group>
        </launch>"#,
    );
    let n = tree.components().next().unwrap();
    assert_eq!(n.ports.len(), 3);
}
