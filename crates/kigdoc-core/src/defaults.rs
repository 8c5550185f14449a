//! The session-scoped display defaults registry.
//!
//! [`DefaultsRegistry`] holds the *current* default display attributes
//! consulted whenever a node is created without an explicit value, plus the
//! `internal` default and the document-level axes/grid flags.
//!
//! Resolution is snapshot-at-creation: a node reads the registry once, when
//! it is built, and later mutations of the registry only affect nodes
//! created afterwards.
//!
//! The style setters are deliberately permissive, matching the legacy
//! behavior the document format grew up with: an unrecognized point or line
//! style is *not* an error, it is dropped. Unlike the legacy code the drop
//! is observable, as a `log::warn!` and a `false` return.

use log::warn;

use crate::style::{LineStyle, PointStyle};
use crate::view::DisplayOptions;

/// Default pen width sentinel; the renderer substitutes its own width.
pub const DEFAULT_WIDTH: i32 = -1;
/// Default object color.
pub const DEFAULT_COLOR: &str = "#0000ff";
/// Default `namecalcer` value for unlabeled nodes.
pub const DEFAULT_NAME: &str = "none";

/// Current default display attributes and document flags for one session.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultsRegistry {
    shown: bool,
    width: i32,
    point_style: PointStyle,
    line_style: LineStyle,
    color: String,
    name: String,
    internal: bool,
    axes: bool,
    grid: bool,
}

impl Default for DefaultsRegistry {
    fn default() -> Self {
        Self {
            shown: true,
            width: DEFAULT_WIDTH,
            point_style: PointStyle::default(),
            line_style: LineStyle::default(),
            color: DEFAULT_COLOR.to_string(),
            name: DEFAULT_NAME.to_string(),
            internal: false,
            axes: true,
            grid: true,
        }
    }
}

impl DefaultsRegistry {
    /// Creates a registry with the stock defaults: visible, default width,
    /// round points, solid lines, blue, not internal, axes and grid on.
    pub fn new() -> Self {
        Self::default()
    }

    // --- resolution -------------------------------------------------------

    /// Resolves visibility: explicit value or the current default.
    pub fn resolve_shown(&self, explicit: Option<bool>) -> bool {
        explicit.unwrap_or(self.shown)
    }

    /// Resolves pen width: explicit value or the current default.
    pub fn resolve_width(&self, explicit: Option<i32>) -> i32 {
        explicit.unwrap_or(self.width)
    }

    /// Resolves point style: explicit value or the current default.
    pub fn resolve_point_style(&self, explicit: Option<PointStyle>) -> PointStyle {
        explicit.unwrap_or(self.point_style)
    }

    /// Resolves line style: explicit value or the current default.
    pub fn resolve_line_style(&self, explicit: Option<LineStyle>) -> LineStyle {
        explicit.unwrap_or(self.line_style)
    }

    /// Resolves color: explicit value or a clone of the current default.
    pub fn resolve_color(&self, explicit: Option<&str>) -> String {
        explicit.map_or_else(|| self.color.clone(), str::to_string)
    }

    /// Resolves the internal flag: explicit value or the current default.
    pub fn resolve_internal(&self, explicit: Option<bool>) -> bool {
        explicit.unwrap_or(self.internal)
    }

    /// The current default `namecalcer` string for nodes without a label.
    pub fn name(&self) -> &str {
        &self.name
    }

    // --- mutation ---------------------------------------------------------

    /// Makes nodes created from now on hidden by default.
    pub fn hide_objects(&mut self) {
        self.shown = false;
    }

    /// Makes nodes created from now on visible by default.
    pub fn show_objects(&mut self) {
        self.shown = true;
    }

    /// Sets the default visibility.
    pub fn set_shown(&mut self, shown: bool) {
        self.shown = shown;
    }

    /// Sets the default pen width.
    pub fn set_width(&mut self, width: i32) {
        self.width = width;
    }

    /// Sets the default point style from its wire spelling.
    ///
    /// An unrecognized spelling is ignored: the current default is kept, a
    /// warning is logged, and `false` is returned.
    pub fn set_point_style(&mut self, style: &str) -> bool {
        match style.parse::<PointStyle>() {
            Ok(parsed) => {
                self.point_style = parsed;
                true
            }
            Err(reason) => {
                warn!(reason; "Ignoring default point style");
                false
            }
        }
    }

    /// Sets the default line style from its wire spelling.
    ///
    /// An unrecognized spelling is ignored: the current default is kept, a
    /// warning is logged, and `false` is returned.
    pub fn set_line_style(&mut self, style: &str) -> bool {
        match style.parse::<LineStyle>() {
            Ok(parsed) => {
                self.line_style = parsed;
                true
            }
            Err(reason) => {
                warn!(reason; "Ignoring default line style");
                false
            }
        }
    }

    /// Sets the default color string. The value is passed through
    /// uninterpreted; the renderer is the judge of color syntax.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Sets the default `namecalcer` string.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Sets whether nodes are internal by default.
    pub fn set_internal(&mut self, internal: bool) {
        self.internal = internal;
    }

    // --- document flags ---------------------------------------------------

    /// Whether the document shows coordinate axes.
    pub fn axes(&self) -> bool {
        self.axes
    }

    /// Whether the document shows the coordinate grid.
    pub fn grid(&self) -> bool {
        self.grid
    }

    /// Sets the axes flag.
    pub fn set_axes(&mut self, axes: bool) {
        self.axes = axes;
    }

    /// Sets the grid flag.
    pub fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    // --- bulk resolution --------------------------------------------------

    /// Resolves a full set of view attributes against the current defaults.
    ///
    /// Returns `(shown, width, point_style, line_style, color)`; the
    /// `name`/`internal` fields of the options are resolved separately by
    /// the builder because they drive structure, not drawing.
    pub fn resolve_view(&self, options: &DisplayOptions) -> (bool, i32, PointStyle, LineStyle, String) {
        (
            self.resolve_shown(options.shown),
            self.resolve_width(options.width),
            self.resolve_point_style(options.point_style),
            self.resolve_line_style(options.line_style),
            self.resolve_color(options.color.as_deref()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_defaults() {
        let registry = DefaultsRegistry::new();
        assert!(registry.resolve_shown(None));
        assert_eq!(registry.resolve_width(None), -1);
        assert_eq!(registry.resolve_point_style(None), PointStyle::Round);
        assert_eq!(registry.resolve_line_style(None), LineStyle::SolidLine);
        assert_eq!(registry.resolve_color(None), "#0000ff");
        assert!(!registry.resolve_internal(None));
        assert_eq!(registry.name(), "none");
        assert!(registry.axes());
        assert!(registry.grid());
    }

    #[test]
    fn test_explicit_value_wins() {
        let registry = DefaultsRegistry::new();
        assert!(!registry.resolve_shown(Some(false)));
        assert_eq!(registry.resolve_width(Some(4)), 4);
        assert_eq!(registry.resolve_color(Some("#00ff00")), "#00ff00");
        assert!(registry.resolve_internal(Some(true)));
    }

    #[test]
    fn test_mutation_changes_later_resolution() {
        let mut registry = DefaultsRegistry::new();
        registry.set_color("#ff0000");
        registry.hide_objects();
        registry.set_width(2);

        assert_eq!(registry.resolve_color(None), "#ff0000");
        assert!(!registry.resolve_shown(None));
        assert_eq!(registry.resolve_width(None), 2);
    }

    #[test]
    fn test_valid_style_applied() {
        let mut registry = DefaultsRegistry::new();
        assert!(registry.set_point_style("Cross"));
        assert!(registry.set_line_style("DashLine"));
        assert_eq!(registry.resolve_point_style(None), PointStyle::Cross);
        assert_eq!(registry.resolve_line_style(None), LineStyle::DashLine);
    }

    #[test]
    fn test_invalid_style_is_ignored() {
        let mut registry = DefaultsRegistry::new();
        assert!(!registry.set_point_style("Starburst"));
        assert!(!registry.set_line_style("WavyLine"));
        // previous values kept
        assert_eq!(registry.resolve_point_style(None), PointStyle::Round);
        assert_eq!(registry.resolve_line_style(None), LineStyle::SolidLine);
    }

    #[test]
    fn test_resolve_view_bundles_fields() {
        let registry = DefaultsRegistry::new();
        let options = DisplayOptions::new().with_width(7).with_color("#123456");
        let (shown, width, point_style, line_style, color) = registry.resolve_view(&options);
        assert!(shown);
        assert_eq!(width, 7);
        assert_eq!(point_style, PointStyle::Round);
        assert_eq!(line_style, LineStyle::SolidLine);
        assert_eq!(color, "#123456");
    }
}
