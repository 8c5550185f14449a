//! Point and line style definitions.
//!
//! The renderer recognizes exactly five point styles and five line styles.
//! The variant names are the wire spellings: [`PointStyle::as_str`] and
//! [`LineStyle::as_str`] return the strings embedded in `<Draw>` records,
//! and [`FromStr`] accepts the same spellings.
//!
//! Parsing an unrecognized spelling is an error for the caller to absorb;
//! the defaults registry and the view mutators turn it into a warn-and-keep
//! signal rather than a failure.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Marker style for rendered points.
///
/// # Examples
///
/// ```
/// use kigdoc_core::style::PointStyle;
///
/// let style: PointStyle = "RoundEmpty".parse().unwrap();
/// assert_eq!(style, PointStyle::RoundEmpty);
/// assert!("Squircle".parse::<PointStyle>().is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum PointStyle {
    /// Filled round marker (default)
    #[default]
    Round,
    /// Hollow round marker
    RoundEmpty,
    /// Filled rectangular marker
    Rectangular,
    /// Hollow rectangular marker
    RectangularEmpty,
    /// Cross marker
    Cross,
}

impl PointStyle {
    /// Returns the wire spelling used in `<Draw>` records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Round => "Round",
            Self::RoundEmpty => "RoundEmpty",
            Self::Rectangular => "Rectangular",
            Self::RectangularEmpty => "RectangularEmpty",
            Self::Cross => "Cross",
        }
    }
}

impl fmt::Display for PointStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PointStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Round" => Ok(Self::Round),
            "RoundEmpty" => Ok(Self::RoundEmpty),
            "Rectangular" => Ok(Self::Rectangular),
            "RectangularEmpty" => Ok(Self::RectangularEmpty),
            "Cross" => Ok(Self::Cross),
            _ => Err(format!(
                "invalid point style `{s}`, valid values: Round, RoundEmpty, Rectangular, RectangularEmpty, Cross"
            )),
        }
    }
}

/// Dash pattern for rendered curves and lines.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum LineStyle {
    /// Solid continuous line (default)
    #[default]
    SolidLine,
    /// Dashed line
    DashLine,
    /// Dash-dot pattern
    DashDotLine,
    /// Dash-dot-dot pattern
    DashDotDotLine,
    /// Dotted line
    DotLine,
}

impl LineStyle {
    /// Returns the wire spelling used in `<Draw>` records.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SolidLine => "SolidLine",
            Self::DashLine => "DashLine",
            Self::DashDotLine => "DashDotLine",
            Self::DashDotDotLine => "DashDotDotLine",
            Self::DotLine => "DotLine",
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SolidLine" => Ok(Self::SolidLine),
            "DashLine" => Ok(Self::DashLine),
            "DashDotLine" => Ok(Self::DashDotLine),
            "DashDotDotLine" => Ok(Self::DashDotDotLine),
            "DotLine" => Ok(Self::DotLine),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: SolidLine, DashLine, DashDotLine, DashDotDotLine, DotLine"
            )),
        }
    }
}
