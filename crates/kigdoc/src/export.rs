//! Document serialization.
//!
//! Renders the two ordered logs of a session into the final markup
//! document. The framing is fixed byte-for-byte for compatibility with the
//! external renderer: tag names, attribute order, indentation, and the
//! `"0"`/`"1"` encoding of the axes/grid flags all come from the legacy
//! format and must not drift.
//!
//! The serializer performs no validation and no escaping; records arrive
//! here fully formed (text literals were escaped at node creation) and are
//! emitted verbatim in log order. Rendering the same logs twice yields
//! byte-identical output.

use kigdoc_core::node::HierarchyRecord;
use kigdoc_core::view::ViewEntry;

/// Renders the document preamble, both logs, and the closing boundaries.
pub(crate) fn render(
    hierarchy: &[HierarchyRecord],
    views: &[ViewEntry],
    axes: bool,
    grid: bool,
) -> String {
    let mut out = format!(
        "<!DOCTYPE KigDocument>\n<KigDocument axes=\"{}\" grid=\"{}\" CompatibilityVersion=\"0.7.0\" Version=\"0.9.1\" >\n <CoordinateSystem>Euclidean</CoordinateSystem>\n <Hierarchy>\n",
        flag(axes),
        flag(grid),
    );
    for record in hierarchy {
        out.push_str(&record.to_string());
    }
    out.push_str(" </Hierarchy>\n <View>\n");
    for view in views {
        out.push_str(&view.to_string());
    }
    out.push_str(" </View>\n</KigDocument>\n");
    out
}

fn flag(value: bool) -> &'static str {
    if value { "1" } else { "0" }
}

#[cfg(test)]
mod tests {
    use super::*;

    use kigdoc_core::identifier::NodeId;
    use kigdoc_core::node::GraphKind;
    use kigdoc_core::style::{LineStyle, PointStyle};

    #[test]
    fn test_empty_document_framing() {
        let rendered = render(&[], &[], true, true);
        assert_eq!(
            rendered,
            "<!DOCTYPE KigDocument>\n\
             <KigDocument axes=\"1\" grid=\"1\" CompatibilityVersion=\"0.7.0\" Version=\"0.9.1\" >\n\
             \x20<CoordinateSystem>Euclidean</CoordinateSystem>\n\
             \x20<Hierarchy>\n\
             \x20</Hierarchy>\n\
             \x20<View>\n\
             \x20</View>\n\
             </KigDocument>\n"
        );
    }

    #[test]
    fn test_flags_encode_as_zero_and_one() {
        let rendered = render(&[], &[], false, true);
        assert!(rendered.contains("axes=\"0\" grid=\"1\""));
        let rendered = render(&[], &[], true, false);
        assert!(rendered.contains("axes=\"1\" grid=\"0\""));
    }

    #[test]
    fn test_records_emitted_in_log_order() {
        let hierarchy = vec![
            HierarchyRecord::Data {
                type_tag: "double".to_string(),
                id: NodeId::from_raw(1),
                literal: "0.0".to_string(),
            },
            HierarchyRecord::Data {
                type_tag: "double".to_string(),
                id: NodeId::from_raw(2),
                literal: "0.0".to_string(),
            },
            HierarchyRecord::Graph {
                kind: GraphKind::Construction,
                type_tag: "FixedPoint".to_string(),
                id: NodeId::from_raw(3),
                parents: vec![NodeId::from_raw(1), NodeId::from_raw(2)],
            },
        ];
        let views = vec![ViewEntry {
            object: NodeId::from_raw(3),
            shown: true,
            width: -1,
            point_style: PointStyle::Round,
            line_style: LineStyle::SolidLine,
            color: "#0000ff".to_string(),
            name_calcer: "none".to_string(),
        }];

        let rendered = render(&hierarchy, &views, true, true);
        assert_eq!(
            rendered,
            "<!DOCTYPE KigDocument>\n\
             <KigDocument axes=\"1\" grid=\"1\" CompatibilityVersion=\"0.7.0\" Version=\"0.9.1\" >\n\
             \x20<CoordinateSystem>Euclidean</CoordinateSystem>\n\
             \x20<Hierarchy>\n\
             \x20\x20<Data type=\"double\" id=\"1\" >0.0</Data>\n\
             \x20\x20<Data type=\"double\" id=\"2\" >0.0</Data>\n\
             \x20\x20<Object type=\"FixedPoint\" id=\"3\" >\n\
             \x20\x20\x20<Parent id=\"1\" />\n\
             \x20\x20\x20<Parent id=\"2\" />\n\
             \x20\x20</Object>\n\
             \x20</Hierarchy>\n\
             \x20<View>\n\
             \x20\x20<Draw width=\"-1\" point-style=\"Round\" namecalcer=\"none\" style=\"SolidLine\" shown=\"true\" color=\"#0000ff\" object=\"3\" />\n\
             \x20</View>\n\
             </KigDocument>\n"
        );
    }

    #[test]
    fn test_render_is_deterministic() {
        let hierarchy = vec![HierarchyRecord::Data {
            type_tag: "int".to_string(),
            id: NodeId::from_raw(1),
            literal: "5".to_string(),
        }];
        assert_eq!(
            render(&hierarchy, &[], true, false),
            render(&hierarchy, &[], true, false)
        );
    }
}
