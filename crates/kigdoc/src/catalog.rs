//! The construction catalog: named kinds layered on the generic node model.
//!
//! Each [`CatalogEntry`] is one line of data: a public name, the concrete
//! type tag the renderer understands, the record flavor, and the per-slot
//! argument coercions. [`Session::construct_kind`] is the single generic
//! entry point that consults the table, coerces literal arguments into
//! value nodes, and dispatches to the core builder. Adding a kind means
//! adding a table line, nothing else.
//!
//! Arity is enforced here, per kind; the core builder only knows the
//! generic property-takes-one-parent rule.

use kigdoc_core::node::{GraphKind, Literal};
use kigdoc_core::view::DisplayOptions;

use crate::error::KigError;
use crate::session::{NodeRef, Session};

/// An argument to a catalog construction: an existing node or a literal to
/// be turned into a value node.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// An already-created node.
    Node(NodeRef),
    /// An integer literal.
    Int(i64),
    /// A floating-point literal.
    Double(f64),
    /// A text literal.
    Str(String),
}

impl From<NodeRef> for Arg {
    fn from(node: NodeRef) -> Self {
        Self::Node(node)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Self::Double(value)
    }
}

impl From<&str> for Arg {
    fn from(text: &str) -> Self {
        Self::Str(text.to_string())
    }
}

/// How a literal argument in a given slot becomes a parent node.
///
/// Node arguments always pass through unchanged; the coercion only decides
/// the value type a literal is lifted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coerce {
    /// Expects a node; literals are lifted to a value of their own kind.
    Node,
    /// Numeric literals become `double` value nodes.
    Double,
    /// Numeric literals become `int` value nodes.
    Int,
    /// Text literals become escaped `string` value nodes.
    Str,
}

/// One named construction kind.
#[derive(Debug)]
pub struct CatalogEntry {
    /// Public name used for lookup, e.g. `"Segment"`.
    pub name: &'static str,
    /// Record flavor.
    pub kind: GraphKind,
    /// Concrete type tag emitted in the record, e.g. `"SegmentAB"`.
    pub type_tag: &'static str,
    /// Per-slot argument coercions; also the expected arity.
    pub params: &'static [Coerce],
    /// Whether extra trailing node arguments are accepted.
    pub variadic: bool,
}

const fn object(
    name: &'static str,
    type_tag: &'static str,
    params: &'static [Coerce],
) -> CatalogEntry {
    CatalogEntry {
        name,
        kind: GraphKind::Construction,
        type_tag,
        params,
        variadic: false,
    }
}

const fn variadic(
    name: &'static str,
    type_tag: &'static str,
    params: &'static [Coerce],
) -> CatalogEntry {
    CatalogEntry {
        name,
        kind: GraphKind::Construction,
        type_tag,
        params,
        variadic: true,
    }
}

const fn property(name: &'static str, type_tag: &'static str) -> CatalogEntry {
    CatalogEntry {
        name,
        kind: GraphKind::Property,
        type_tag,
        params: &[Coerce::Node],
        variadic: false,
    }
}

use Coerce::{Double as D, Int as I, Node as N, Str as S};

/// The declarative kind table.
pub static CATALOG: &[CatalogEntry] = &[
    // Points
    object("Point", "FixedPoint", &[D, D]),
    object("ConstrainedPoint", "ConstrainedPoint", &[D, N]),
    object("RelativePoint", "RelativePoint", &[D, D, N]),
    // Lines, segments, rays
    object("Line", "LineAB", &[N, N]),
    object("Segment", "SegmentAB", &[N, N]),
    object("Ray", "RayAB", &[N, N]),
    object("Orthogonal", "LinePerpend", &[N, N]),
    object("Parallel", "LineParallel", &[N, N]),
    // Circles and arcs
    object("Circle", "CircleBCP", &[N, N]),
    object("CircleByCenterRadius", "CircleBPR", &[N, N]),
    object("CircleBy3Points", "CircleBTP", &[N, N, N]),
    object("ArcBy3Points", "ArcBTP", &[N, N, N]),
    object("ArcByCenterPointAngle", "ArcBCPA", &[N, N, N]),
    // Conics
    object("ParabolaByDirectrixFocus", "ParabolaBDP", &[N, N]),
    object("VerticalCubic", "VerticalCubicB4P", &[N, N, N, N]),
    object("ConicArc", "ConicArcBTPC", &[N, N, N, N]),
    // Intersections; the trailing int selects which of the two points
    object("LineLineIntersection", "LineLineIntersection", &[N, N]),
    object("CircleCircleIntersection", "CircleCircleIntersection", &[N, N, I]),
    object("ConicLineIntersection", "ConicLineIntersection", &[N, N, I]),
    // Polygons
    object("Triangle", "TriangleB3P", &[N, N, N]),
    variadic("Polygon", "PolygonBNP", &[N]),
    // "PoligonBCV" is the renderer's spelling
    object("PolygonBCV", "PoligonBCV", &[N, N, I]),
    object("PolygonVertex", "PolygonVertex", &[N, I]),
    object("PolygonSide", "PolygonSide", &[N, I]),
    // Vectors and angles
    object("Vector", "Vector", &[N, N]),
    object("Angle", "Angle", &[N, N, N]),
    // Transformations
    object("Translate", "Translation", &[N, N]),
    object("CentralSymmetry", "PointReflection", &[N, N]),
    object("AxialSymmetry", "LineReflection", &[N, N]),
    object("Rotate", "Rotation", &[N, N, N]),
    object("Scale", "ScalingOverCenter", &[N, N, N]),
    object("Scale2", "ScalingOverCenter2", &[N, N, N, N]),
    object("InvertPoint", "InvertPoint", &[N, N]),
    object("CircularInversion", "CircularInversion", &[N, N]),
    object("InvertLine", "InvertLine", &[N, N]),
    object("InvertCircle", "InvertCircle", &[N, N]),
    object("InvertArc", "InvertArc", &[N, N]),
    object("InvertSegment", "InvertSegment", &[N, N]),
    // Text; extra trailing arguments are label variables
    variadic("Label", "Label", &[I, N, S]),
    // Derived properties
    property("Type", "base-object-type"),
    property("Coordinate", "coordinate"),
    property("XCoord", "coordinate-x"),
    property("YCoord", "coordinate-y"),
    property("MidPoint", "mid-point"),
    property("EndPointA", "end-point-A"),
    property("EndPointB", "end-point-B"),
    property("Length", "length"),
    property("Equation", "equation"),
    property("Slope", "slope"),
    property("NumOfSides", "polygon-number-of-sides"),
    property("Perimeter", "polygon-perimeter"),
    property("Surface", "polygon-surface"),
    property("CenterOfMass", "polygon-center-of-mass"),
    property("WindingNumber", "polygon-winding-number"),
    property("Radius", "radius"),
    property("Center", "center"),
    property("Bisector", "angle-bisector"),
    property("Support", "support"),
];

/// Looks up a catalog entry by public name.
pub fn lookup(name: &str) -> Option<&'static CatalogEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}

impl Session {
    /// Creates a node of a named catalog kind.
    ///
    /// Literal arguments are lifted into value nodes per the entry's
    /// coercions before the graph node is created, so a `Point` call with
    /// two numbers produces two `double` records followed by the
    /// `FixedPoint` record, exactly as if the caller had created the values
    /// first.
    ///
    /// # Errors
    ///
    /// - [`KigError::UnknownKind`] if `name` is not in the catalog.
    /// - [`KigError::InvalidArity`] if the argument count does not match
    ///   the entry (variadic kinds accept extra trailing arguments).
    /// - [`KigError::DanglingParent`] if a node argument was never created
    ///   in this session.
    /// - Any error of [`Session::create_graph_node`].
    ///
    /// All of these are structural and poison the session. Node arguments
    /// are validated before any literal is lifted, so a failed request
    /// appends nothing to either log.
    pub fn construct_kind(
        &mut self,
        name: &str,
        args: &[Arg],
        options: &DisplayOptions,
    ) -> Result<NodeRef, KigError> {
        let Some(entry) = lookup(name) else {
            self.poison();
            return Err(KigError::UnknownKind(name.to_string()));
        };

        let arity_ok = if entry.variadic {
            args.len() >= entry.params.len()
        } else {
            args.len() == entry.params.len()
        };
        if !arity_ok {
            self.poison();
            return Err(KigError::InvalidArity {
                type_tag: entry.type_tag.to_string(),
                expected: entry.params.len(),
                got: args.len(),
            });
        }

        // Reject bad node references before lifting any literal: coercion
        // appends value records, and a request that fails must leave the
        // logs exactly as they were.
        for arg in args {
            if let Arg::Node(node) = arg {
                if !self.issued(*node) {
                    self.poison();
                    return Err(KigError::DanglingParent {
                        type_tag: entry.type_tag.to_string(),
                        parent: node.id(),
                    });
                }
            }
        }

        let mut parents = Vec::with_capacity(args.len());
        for (slot, arg) in args.iter().enumerate() {
            let coerce = entry.params.get(slot).copied().unwrap_or(Coerce::Node);
            parents.push(self.coerce_argument(arg, coerce));
        }

        self.create_graph_node(entry.kind, entry.type_tag, &parents, options)
    }

    /// Lifts a literal argument into a value node; node arguments pass
    /// through. Mismatched literals are lifted to their own kind rather
    /// than rejected; the renderer is the last line of defense.
    fn coerce_argument(&mut self, arg: &Arg, coerce: Coerce) -> NodeRef {
        match (arg, coerce) {
            (Arg::Node(node), _) => *node,
            (Arg::Int(value), Coerce::Double) => self.create_value(Literal::Double(*value as f64)),
            (Arg::Double(value), Coerce::Double) => self.create_value(Literal::Double(*value)),
            (Arg::Int(value), Coerce::Int) => self.create_value(Literal::Int(*value)),
            (Arg::Double(value), Coerce::Int) => self.create_value(Literal::Int(*value as i64)),
            (Arg::Int(value), _) => self.create_value(Literal::Int(*value)),
            (Arg::Double(value), _) => self.create_value(Literal::Double(*value)),
            (Arg::Str(text), _) => self.create_value(Literal::Str(text.clone())),
        }
    }
}
