//! Display records for visible nodes.
//!
//! Every non-internal construction or property node owns exactly one
//! [`ViewEntry`], created together with the node and appended to the view
//! log. The entry snapshots the display defaults that were current at
//! creation time; later changes to the defaults registry never touch it.
//!
//! [`DisplayOptions`] carries the per-request overrides a caller may supply
//! when creating a node. An unset field inherits the registry's current
//! value.

use std::fmt;

use crate::identifier::NodeId;
use crate::style::{LineStyle, PointStyle};

/// Per-request display overrides for a node under construction.
///
/// All fields default to "inherit". The `name` field additionally triggers
/// label synthesis: a node created with a non-empty name gets a companion
/// `Label` construction displaying that name.
///
/// # Examples
///
/// ```
/// use kigdoc_core::view::DisplayOptions;
/// use kigdoc_core::style::PointStyle;
///
/// let options = DisplayOptions::new()
///     .with_name("A")
///     .with_color("#ff0000")
///     .with_point_style(PointStyle::Cross);
/// assert_eq!(options.name.as_deref(), Some("A"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayOptions {
    /// Explicit visibility, or inherit.
    pub shown: Option<bool>,
    /// Display name; non-empty requests label synthesis.
    pub name: Option<String>,
    /// Whether the node is a pure intermediate with no view.
    pub internal: Option<bool>,
    /// Explicit pen width, or inherit. `-1` means renderer default.
    pub width: Option<i32>,
    /// Explicit point style, or inherit.
    pub point_style: Option<PointStyle>,
    /// Explicit line style, or inherit.
    pub line_style: Option<LineStyle>,
    /// Explicit color string, or inherit.
    pub color: Option<String>,
}

impl DisplayOptions {
    /// Creates options with every field inheriting the session defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the node internal (or explicitly non-internal).
    pub fn with_internal(mut self, internal: bool) -> Self {
        self.internal = Some(internal);
        self
    }

    /// Sets the explicit visibility.
    pub fn with_shown(mut self, shown: bool) -> Self {
        self.shown = Some(shown);
        self
    }

    /// Sets the display name, requesting label synthesis.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the explicit pen width.
    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    /// Sets the explicit point style.
    pub fn with_point_style(mut self, style: PointStyle) -> Self {
        self.point_style = Some(style);
        self
    }

    /// Sets the explicit line style.
    pub fn with_line_style(mut self, style: LineStyle) -> Self {
        self.line_style = Some(style);
        self
    }

    /// Sets the explicit color string.
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// The requested display name, if non-empty.
    pub fn requested_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

/// The display record bound to a visible node.
///
/// `name_calcer` is kept as a string: `"none"` for unlabeled nodes, or the
/// decimal id of the label's name value node. This mirrors the document
/// format, where the attribute is textual either way.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewEntry {
    /// Id of the node this record draws.
    pub object: NodeId,
    /// Visibility, serialized `"true"`/`"false"`.
    pub shown: bool,
    /// Pen width; `-1` requests the renderer default.
    pub width: i32,
    /// Marker style for points.
    pub point_style: PointStyle,
    /// Dash pattern for curves.
    pub line_style: LineStyle,
    /// Color string, e.g. `"#0000ff"`.
    pub color: String,
    /// `"none"` or the id of the name value node driving the label.
    pub name_calcer: String,
}

impl fmt::Display for ViewEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  <Draw width=\"{}\" point-style=\"{}\" namecalcer=\"{}\" style=\"{}\" shown=\"{}\" color=\"{}\" object=\"{}\" />",
            self.width,
            self.point_style,
            self.name_calcer,
            self.line_style,
            if self.shown { "true" } else { "false" },
            self.color,
            self.object,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_record_format() {
        let entry = ViewEntry {
            object: NodeId::from_raw(3),
            shown: true,
            width: -1,
            point_style: PointStyle::Round,
            line_style: LineStyle::SolidLine,
            color: "#0000ff".to_string(),
            name_calcer: "none".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            "  <Draw width=\"-1\" point-style=\"Round\" namecalcer=\"none\" style=\"SolidLine\" shown=\"true\" color=\"#0000ff\" object=\"3\" />\n"
        );
    }

    #[test]
    fn test_draw_record_with_name_calcer() {
        let entry = ViewEntry {
            object: NodeId::from_raw(8),
            shown: false,
            width: 2,
            point_style: PointStyle::Cross,
            line_style: LineStyle::DotLine,
            color: "#ff0000".to_string(),
            name_calcer: "5".to_string(),
        };
        assert_eq!(
            entry.to_string(),
            "  <Draw width=\"2\" point-style=\"Cross\" namecalcer=\"5\" style=\"DotLine\" shown=\"false\" color=\"#ff0000\" object=\"8\" />\n"
        );
    }

    #[test]
    fn test_requested_name_filters_empty() {
        assert_eq!(DisplayOptions::new().requested_name(), None);
        assert_eq!(DisplayOptions::new().with_name("").requested_name(), None);
        assert_eq!(
            DisplayOptions::new().with_name("A").requested_name(),
            Some("A")
        );
    }

    #[test]
    fn test_builder_chain() {
        let options = DisplayOptions::new()
            .with_internal(true)
            .with_shown(false)
            .with_width(3);
        assert_eq!(options.internal, Some(true));
        assert_eq!(options.shown, Some(false));
        assert_eq!(options.width, Some(3));
        assert_eq!(options.color, None);
    }
}
