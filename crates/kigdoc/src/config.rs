//! Configuration types for kigdoc sessions.
//!
//! This module provides configuration structures that seed a new session's
//! defaults registry and document flags. All types implement
//! [`serde::Deserialize`] for flexible loading from external sources.
//!
//! # Overview
//!
//! - [`DocumentConfig`] - Top-level configuration combining document flags
//!   and style defaults.
//! - [`StyleDefaults`] - Initial values for the display defaults registry.
//!
//! # Example
//!
//! ```
//! # use kigdoc::config::DocumentConfig;
//! // Use default configuration
//! let config = DocumentConfig::default();
//! assert!(config.axes());
//! ```

use serde::Deserialize;

use kigdoc_core::defaults::{DEFAULT_COLOR, DEFAULT_WIDTH, DefaultsRegistry};
use kigdoc_core::style::{LineStyle, PointStyle};

/// Top-level session configuration: document flags plus style defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    /// Whether the document shows coordinate axes.
    #[serde(default = "default_true")]
    axes: bool,

    /// Whether the document shows the coordinate grid.
    #[serde(default = "default_true")]
    grid: bool,

    /// Initial display defaults.
    #[serde(default)]
    style: StyleDefaults,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            axes: true,
            grid: true,
            style: StyleDefaults::default(),
        }
    }
}

impl DocumentConfig {
    /// Creates a configuration with the given flags and style defaults.
    pub fn new(axes: bool, grid: bool, style: StyleDefaults) -> Self {
        Self { axes, grid, style }
    }

    /// Whether the document shows coordinate axes.
    pub fn axes(&self) -> bool {
        self.axes
    }

    /// Whether the document shows the coordinate grid.
    pub fn grid(&self) -> bool {
        self.grid
    }

    /// Returns the style defaults section.
    pub fn style(&self) -> &StyleDefaults {
        &self.style
    }

    /// Builds the initial defaults registry for a session using this
    /// configuration.
    pub fn registry(&self) -> DefaultsRegistry {
        let mut registry = DefaultsRegistry::new();
        registry.set_axes(self.axes);
        registry.set_grid(self.grid);
        registry.set_shown(self.style.shown);
        registry.set_width(self.style.width);
        registry.set_color(self.style.color.clone());
        registry.set_internal(self.style.internal);
        // Typed in the config, so these cannot be the invalid-spelling case.
        registry.set_point_style(self.style.point_style.as_str());
        registry.set_line_style(self.style.line_style.as_str());
        registry
    }
}

/// Initial values for the display defaults registry.
///
/// Fields left out of a deserialized document fall back to the stock
/// defaults: visible, default width, round points, solid lines, blue, not
/// internal.
#[derive(Debug, Clone, Deserialize)]
pub struct StyleDefaults {
    /// Default visibility of created nodes.
    #[serde(default = "default_true")]
    pub shown: bool,

    /// Default pen width; `-1` requests the renderer default.
    #[serde(default = "default_width")]
    pub width: i32,

    /// Default point style.
    #[serde(default)]
    pub point_style: PointStyle,

    /// Default line style.
    #[serde(default)]
    pub line_style: LineStyle,

    /// Default color string.
    #[serde(default = "default_color")]
    pub color: String,

    /// Whether nodes are internal by default.
    #[serde(default)]
    pub internal: bool,
}

impl Default for StyleDefaults {
    fn default() -> Self {
        Self {
            shown: true,
            width: DEFAULT_WIDTH,
            point_style: PointStyle::default(),
            line_style: LineStyle::default(),
            color: DEFAULT_COLOR.to_string(),
            internal: false,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_width() -> i32 {
    DEFAULT_WIDTH
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}
