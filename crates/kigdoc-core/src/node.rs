//! Hierarchy record taxonomy.
//!
//! Every node of a construction session becomes exactly one
//! [`HierarchyRecord`]: a `Data` record for literal values, or a graph
//! record for constructions and derived properties. Records are immutable
//! once created; the session appends them to its hierarchy log in call
//! order and that order is preserved verbatim in the output document.
//!
//! # Record formats
//!
//! The serialized forms are fixed byte-for-byte for compatibility with the
//! downstream renderer:
//!
//! ```text
//!   <Data type="double" id="1" >0.5</Data>
//!   <Object type="SegmentAB" id="4" >
//!    <Parent id="2" />
//!    <Parent id="3" />
//!   </Object>
//!   <Property which="mid-point" id="5" >
//!    <Parent id="4" />
//!   </Property>
//! ```
//!
//! Text literals are escaped when the record is created, never at render
//! time; [`Literal::into_markup`] performs the escaping.

use std::fmt;

use crate::identifier::NodeId;

/// Value type tag for integer literals.
pub const INT_TYPE: &str = "int";
/// Value type tag for floating-point literals.
pub const DOUBLE_TYPE: &str = "double";
/// Value type tag for text literals.
pub const STRING_TYPE: &str = "string";

/// Escapes the markup-special characters of a text literal.
///
/// Ampersands are replaced first so already-escaped output is not double
/// escaped into `&amp;lt;`.
pub fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A literal destined to become the payload of a `Data` record.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// Integer literal, type tag `"int"`.
    Int(i64),
    /// Floating-point literal, type tag `"double"`.
    Double(f64),
    /// Text literal, type tag `"string"`. Escaped on conversion.
    Str(String),
}

impl Literal {
    /// Returns the value type tag for this literal.
    pub fn type_tag(&self) -> &'static str {
        match self {
            Self::Int(_) => INT_TYPE,
            Self::Double(_) => DOUBLE_TYPE,
            Self::Str(_) => STRING_TYPE,
        }
    }

    /// Converts the literal into its markup payload, escaping text.
    ///
    /// Doubles use shortest round-trip formatting with a trailing `.0` for
    /// integral values, so `0.0` renders as `0.0` and not `0`.
    pub fn into_markup(self) -> String {
        match self {
            Self::Int(value) => value.to_string(),
            Self::Double(value) => format!("{value:?}"),
            Self::Str(text) => escape_text(&text),
        }
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

impl From<String> for Literal {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

/// Distinguishes the two graph record flavors.
///
/// A `Property` is a derived attribute of exactly one parent; everything
/// else built from other nodes is a `Construction`. The flavor picks the
/// record's tag pair (`<Property which=...>` versus `<Object type=...>`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// A geometric object built from zero or more parents.
    Construction,
    /// A derived attribute of exactly one parent.
    Property,
}

/// One entry of the hierarchy log.
#[derive(Debug, Clone, PartialEq)]
pub enum HierarchyRecord {
    /// A literal value node. `literal` is stored already escaped.
    Data {
        /// Value type tag, e.g. `"double"`.
        type_tag: String,
        /// Node identifier.
        id: NodeId,
        /// Escaped markup payload.
        literal: String,
    },
    /// A construction or property node with its ordered parents.
    Graph {
        /// Record flavor.
        kind: GraphKind,
        /// Concrete construction/property type tag, e.g. `"FixedPoint"`.
        type_tag: String,
        /// Node identifier.
        id: NodeId,
        /// Parent nodes in argument order.
        parents: Vec<NodeId>,
    },
}

impl HierarchyRecord {
    /// Returns the id of the node this record describes.
    pub fn id(&self) -> NodeId {
        match self {
            Self::Data { id, .. } | Self::Graph { id, .. } => *id,
        }
    }

    /// Returns the type tag of the node this record describes.
    pub fn type_tag(&self) -> &str {
        match self {
            Self::Data { type_tag, .. } | Self::Graph { type_tag, .. } => type_tag,
        }
    }
}

impl fmt::Display for HierarchyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data {
                type_tag,
                id,
                literal,
            } => {
                writeln!(f, "  <Data type=\"{type_tag}\" id=\"{id}\" >{literal}</Data>")
            }
            Self::Graph {
                kind,
                type_tag,
                id,
                parents,
            } => {
                let (open, close) = match kind {
                    GraphKind::Construction => ("Object type", "Object"),
                    GraphKind::Property => ("Property which", "Property"),
                };
                write!(f, "  <{open}=\"{type_tag}\" id=\"{id}\" >")?;
                for parent in parents {
                    write!(f, "\n   <Parent id=\"{parent}\" />")?;
                }
                writeln!(f, "\n  </{close}>")
            }
        }
    }
}
