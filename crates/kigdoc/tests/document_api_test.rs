//! Integration tests for the session API
//!
//! These tests exercise the public surface end to end: catalog
//! constructions, defaults, label synthesis, and document rendering.

use std::fs;
use std::io::Write;

use kigdoc::config::{DocumentConfig, StyleDefaults};
use kigdoc::style::{LineStyle, PointStyle};
use kigdoc::view::DisplayOptions;
use kigdoc::{Arg, KigError, NodeRef, Session};

/// Builds the same small construction in any session.
fn build_segment_scene(session: &mut Session) -> Result<(), KigError> {
    let a = session.construct_kind(
        "Point",
        &[Arg::Double(0.0), Arg::Double(0.0)],
        &DisplayOptions::new().with_name("A"),
    )?;
    let b = session.construct_kind(
        "Point",
        &[Arg::Double(4.0), Arg::Double(0.0)],
        &DisplayOptions::new(),
    )?;
    let segment = session.construct_kind(
        "Segment",
        &[Arg::Node(a), Arg::Node(b)],
        &DisplayOptions::new(),
    )?;
    session.construct_kind("MidPoint", &[Arg::Node(segment)], &DisplayOptions::new())?;
    Ok(())
}

#[test]
fn test_full_document_structure() {
    let mut session = Session::default();
    build_segment_scene(&mut session).expect("scene builds");
    let document = session.finalize().expect("clean session finalizes");

    assert!(document.starts_with(
        "<!DOCTYPE KigDocument>\n<KigDocument axes=\"1\" grid=\"1\" CompatibilityVersion=\"0.7.0\" Version=\"0.9.1\" >\n"
    ));
    assert!(document.contains("<CoordinateSystem>Euclidean</CoordinateSystem>"));
    assert!(document.contains("<Object type=\"FixedPoint\""));
    assert!(document.contains("<Object type=\"SegmentAB\""));
    assert!(document.contains("<Property which=\"mid-point\""));
    assert!(document.contains("<Object type=\"Label\""));
    assert!(document.ends_with(" </View>\n</KigDocument>\n"));

    // Hierarchy section precedes the view section
    let hierarchy_end = document.find(" </Hierarchy>").unwrap();
    let view_start = document.find(" <View>").unwrap();
    assert!(hierarchy_end < view_start);
}

#[test]
fn test_rendering_is_deterministic_across_sessions() {
    let mut first = Session::default();
    build_segment_scene(&mut first).unwrap();

    let mut second = Session::default();
    build_segment_scene(&mut second).unwrap();

    assert_eq!(first.finalize().unwrap(), second.finalize().unwrap());
}

#[test]
fn test_config_controls_flags_and_defaults() {
    let style = StyleDefaults {
        color: "#aa0000".to_string(),
        point_style: PointStyle::RectangularEmpty,
        line_style: LineStyle::DashDotLine,
        ..StyleDefaults::default()
    };
    let config = DocumentConfig::new(false, false, style);

    let mut session = Session::new(&config);
    session
        .construct_kind(
            "Point",
            &[Arg::Double(1.0), Arg::Double(1.0)],
            &DisplayOptions::new(),
        )
        .unwrap();
    let document = session.finalize().unwrap();

    assert!(document.contains("axes=\"0\" grid=\"0\""));
    assert!(document.contains(
        "point-style=\"RectangularEmpty\" namecalcer=\"none\" style=\"DashDotLine\" shown=\"true\" color=\"#aa0000\""
    ));
}

#[test]
fn test_dangling_parent_aborts_whole_session() {
    let mut session = Session::default();
    build_segment_scene(&mut session).unwrap();

    let err = session
        .construct_kind(
            "Segment",
            &[Arg::Node(NodeRef::from_raw(1)), Arg::Node(NodeRef::from_raw(404))],
            &DisplayOptions::new(),
        )
        .expect_err("dangling parent must fail");
    assert!(matches!(err, KigError::DanglingParent { .. }));

    // The session never produces a document after a structural error.
    assert!(matches!(session.finalize(), Err(KigError::Poisoned)));
}

#[test]
fn test_finalize_into_writes_the_document() {
    let mut session = Session::default();
    build_segment_scene(&mut session).unwrap();

    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("scene.kig");
    let mut file = fs::File::create(&path).expect("create file");
    session.finalize_into(&mut file).expect("write document");
    file.flush().unwrap();

    let written = fs::read_to_string(&path).expect("read back");
    assert!(written.starts_with("<!DOCTYPE KigDocument>"));
    assert!(written.ends_with("</KigDocument>\n"));
}

#[test]
fn test_renaming_accumulates_label_chains() {
    // Byte-level pin of the orphaned-label quirk: renaming leaves the old
    // label chain serialized in the document.
    let mut session = Session::default();
    let point = session
        .construct_kind(
            "Point",
            &[Arg::Double(0.0), Arg::Double(0.0)],
            &DisplayOptions::new().with_name("A"),
        )
        .unwrap();
    session.set_name(point, "B");

    let document = session.finalize().unwrap();
    assert_eq!(document.matches("<Object type=\"Label\"").count(), 2);
    assert!(document.contains(">A</Data>"));
    assert!(document.contains(">B</Data>"));
}

#[test]
fn test_value_then_construction_exact_records() {
    let mut session = Session::default();
    let x = session.create_value(0.0);
    let y = session.create_value(0.0);
    session
        .create_graph_node(
            kigdoc::node::GraphKind::Construction,
            "FixedPoint",
            &[x, y],
            &DisplayOptions::new().with_internal(false),
        )
        .unwrap();

    let document = session.finalize().unwrap();
    assert!(document.contains("  <Data type=\"double\" id=\"1\" >0.0</Data>\n"));
    assert!(document.contains("  <Data type=\"double\" id=\"2\" >0.0</Data>\n"));
    assert!(document.contains(
        "  <Object type=\"FixedPoint\" id=\"3\" >\n   <Parent id=\"1\" />\n   <Parent id=\"2\" />\n  </Object>\n"
    ));
    assert!(document.contains("object=\"3\" />"));
}
