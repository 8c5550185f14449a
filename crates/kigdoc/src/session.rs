//! The construction session: graph building and log management.
//!
//! A [`Session`] owns everything a document in progress needs: the id
//! allocator, the display defaults registry, and the two append-only logs
//! (hierarchy and view). All state is threaded explicitly through the
//! session value; nothing is global, so independent sessions coexist and
//! each restarts ids at 1.
//!
//! Callers issue creation requests in dependency order. A construction's
//! parents must already exist as nodes of the same session; this is a
//! documented precondition, not an inferred ordering. Requests that break
//! it fail with [`KigError::DanglingParent`] and poison the session: no
//! document can be produced afterwards, because the output format has no
//! way to express a dangling reference.

use std::collections::HashMap;
use std::io;

use log::{debug, info, warn};

use kigdoc_core::defaults::DefaultsRegistry;
use kigdoc_core::identifier::{IdAllocator, NodeId};
use kigdoc_core::node::{GraphKind, HierarchyRecord, Literal};
use kigdoc_core::view::{DisplayOptions, ViewEntry};

use crate::config::DocumentConfig;
use crate::error::KigError;
use crate::export;

/// Type tag of synthesized label constructions.
pub const LABEL_TYPE: &str = "Label";

/// Type tag of the implicit zero-offset position value a label hangs on.
const RELATIVE_POSITION_TYPE: &str = "relative-point";
const ZERO_OFFSET: &str = "0 0";

/// A `Copy` handle to a node created in a session.
///
/// The handle carries only the node id. It stays valid for the lifetime of
/// the session that issued it; passing it to a different session is exactly
/// the dangling-parent case that session will reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeRef {
    id: NodeId,
}

impl NodeRef {
    /// Builds a handle from an externally recorded raw id.
    ///
    /// Intended for front ends that track argument nodes by number. The
    /// handle is only meaningful if the target session actually issued the
    /// id; otherwise any construction using it fails with
    /// [`KigError::DanglingParent`].
    pub fn from_raw(id: u64) -> Self {
        Self {
            id: NodeId::from_raw(id),
        }
    }

    /// The node id behind this handle.
    pub fn id(&self) -> NodeId {
        self.id
    }
}

/// A construction document in progress.
///
/// The session is the `GraphBuilder` of the system: it allocates ids,
/// resolves display defaults, synthesizes labels, and appends records to
/// the hierarchy and view logs in call order. [`Session::finalize`] renders
/// the logs into the output document.
///
/// # Examples
///
/// ```
/// use kigdoc::{Session, view::DisplayOptions, node::GraphKind};
///
/// let mut session = Session::default();
/// let x = session.create_value(0.0);
/// let y = session.create_value(0.0);
/// let origin = session
///     .create_graph_node(GraphKind::Construction, "FixedPoint", &[x, y], &DisplayOptions::new())
///     .expect("parents exist");
/// assert_eq!(origin.id().get(), 3);
///
/// let document = session.finalize().expect("no structural errors");
/// assert!(document.starts_with("<!DOCTYPE KigDocument>"));
/// ```
#[derive(Debug)]
pub struct Session {
    ids: IdAllocator,
    defaults: DefaultsRegistry,
    hierarchy: Vec<HierarchyRecord>,
    views: Vec<ViewEntry>,
    /// Owner id -> index into `views` for the mutators.
    view_slots: HashMap<NodeId, usize>,
    poisoned: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&DocumentConfig::default())
    }
}

impl Session {
    /// Opens a session seeded from the given configuration.
    pub fn new(config: &DocumentConfig) -> Self {
        Self {
            ids: IdAllocator::new(),
            defaults: config.registry(),
            hierarchy: Vec::new(),
            views: Vec::new(),
            view_slots: HashMap::new(),
            poisoned: false,
        }
    }

    // --- node creation ----------------------------------------------------

    /// Creates a value node holding a literal.
    ///
    /// The record is appended to the hierarchy log immediately; text
    /// literals are escaped here, once, never at render time. Value nodes
    /// have no view.
    pub fn create_value(&mut self, literal: impl Into<Literal>) -> NodeRef {
        let literal = literal.into();
        let type_tag = literal.type_tag();
        let id = self.ids.allocate();
        debug!(type_tag, id = id.get(); "Creating value node");
        self.hierarchy.push(HierarchyRecord::Data {
            type_tag: type_tag.to_string(),
            id,
            literal: literal.into_markup(),
        });
        NodeRef { id }
    }

    /// Creates a construction or property node.
    ///
    /// Parents are recorded in the order supplied, which the caller must
    /// have arranged to be dependency order. If the node is not internal it
    /// receives a view entry with every unset attribute resolved from the
    /// current defaults; a non-empty `options.name` additionally synthesizes
    /// a label chain (name value, position value, `Label` construction)
    /// whose records precede this node's own.
    ///
    /// # Errors
    ///
    /// - [`KigError::DanglingParent`] if a parent was never created in this
    ///   session. Fatal: the session is poisoned.
    /// - [`KigError::InvalidArity`] if `kind` is `Property` and the parent
    ///   count is not exactly one. Fatal: the session is poisoned.
    pub fn create_graph_node(
        &mut self,
        kind: GraphKind,
        type_tag: &str,
        parents: &[NodeRef],
        options: &DisplayOptions,
    ) -> Result<NodeRef, KigError> {
        for parent in parents {
            if !self.ids.issued(parent.id) {
                self.poisoned = true;
                return Err(KigError::DanglingParent {
                    type_tag: type_tag.to_string(),
                    parent: parent.id,
                });
            }
        }
        if kind == GraphKind::Property && parents.len() != 1 {
            self.poisoned = true;
            return Err(KigError::InvalidArity {
                type_tag: type_tag.to_string(),
                expected: 1,
                got: parents.len(),
            });
        }

        let parent_ids = parents.iter().map(|parent| parent.id).collect();
        let id = self.insert_graph_node(kind, type_tag, parent_ids, options);
        Ok(NodeRef { id })
    }

    /// Appends a validated graph node: id allocation, defaults resolution,
    /// label synthesis, log appends. Shared by the public entry point and
    /// the label synthesizer (whose parents are known-good by construction).
    fn insert_graph_node(
        &mut self,
        kind: GraphKind,
        type_tag: &str,
        parents: Vec<NodeId>,
        options: &DisplayOptions,
    ) -> NodeId {
        let id = self.ids.allocate();
        let internal = self.defaults.resolve_internal(options.internal);
        debug!(type_tag, id = id.get(), internal; "Creating graph node");

        if internal {
            // Internal nodes are invisible by construction: no view entry,
            // no label, even if a name was requested.
            self.hierarchy.push(HierarchyRecord::Graph {
                kind,
                type_tag: type_tag.to_string(),
                id,
                parents,
            });
            return id;
        }

        let name_calcer = match options.requested_name() {
            Some(name) => {
                let owner_shown = self.defaults.resolve_shown(options.shown);
                self.synthesize_label(id, name, owner_shown, options).to_string()
            }
            None => self.defaults.name().to_string(),
        };

        let (shown, width, point_style, line_style, color) = self.defaults.resolve_view(options);
        let view = ViewEntry {
            object: id,
            shown,
            width,
            point_style,
            line_style,
            color,
            name_calcer,
        };

        self.hierarchy.push(HierarchyRecord::Graph {
            kind,
            type_tag: type_tag.to_string(),
            id,
            parents,
        });
        self.view_slots.insert(id, self.views.len());
        self.views.push(view);
        id
    }

    /// Builds the label chain for a named node and returns the id of the
    /// name value node, which becomes the owner's `namecalcer`.
    ///
    /// The chain is: a string value holding the name, a zero-offset
    /// relative-position value, then the `Label` construction with parents
    /// `[owner, position, name]`. The label's view forces `shown` to the
    /// owner's resolved visibility and never carries a name of its own; its
    /// remaining attributes follow the owner's explicit options.
    fn synthesize_label(
        &mut self,
        owner: NodeId,
        name: &str,
        owner_shown: bool,
        style: &DisplayOptions,
    ) -> NodeId {
        debug!(owner = owner.get(), name; "Synthesizing label");
        let name_value = self.create_value(Literal::Str(name.to_string()));
        let position = self.create_position_value();

        let label_options = DisplayOptions {
            shown: Some(owner_shown),
            name: None,
            internal: Some(false),
            width: style.width,
            point_style: style.point_style,
            line_style: style.line_style,
            color: style.color.clone(),
        };
        self.insert_graph_node(
            GraphKind::Construction,
            LABEL_TYPE,
            vec![owner, position.id, name_value.id],
            &label_options,
        );
        name_value.id
    }

    /// Creates the implicit zero-offset position value for a label.
    fn create_position_value(&mut self) -> NodeRef {
        let id = self.ids.allocate();
        self.hierarchy.push(HierarchyRecord::Data {
            type_tag: RELATIVE_POSITION_TYPE.to_string(),
            id,
            literal: ZERO_OFFSET.to_string(),
        });
        NodeRef { id }
    }

    // --- view mutators ----------------------------------------------------

    /// Makes the node visible. No-op for internal nodes.
    pub fn show(&mut self, node: NodeRef) {
        self.set_shown(node, true);
    }

    /// Hides the node. No-op for internal nodes.
    pub fn hide(&mut self, node: NodeRef) {
        self.set_shown(node, false);
    }

    /// Sets the node's visibility. No-op for internal nodes.
    pub fn set_shown(&mut self, node: NodeRef, shown: bool) {
        if let Some(view) = self.view_mut(node) {
            view.shown = shown;
        }
    }

    /// Sets the node's pen width. No-op for internal nodes.
    pub fn set_width(&mut self, node: NodeRef, width: i32) {
        if let Some(view) = self.view_mut(node) {
            view.width = width;
        }
    }

    /// Sets the node's color string, uninterpreted. No-op for internal
    /// nodes.
    pub fn set_color(&mut self, node: NodeRef, color: impl Into<String>) {
        if let Some(view) = self.view_mut(node) {
            view.color = color.into();
        }
    }

    /// Sets the node's point style from its wire spelling.
    ///
    /// An unrecognized spelling never raises: the existing value is kept, a
    /// warning is logged, and `false` is returned. Also `false` for nodes
    /// without a view.
    pub fn set_point_style(&mut self, node: NodeRef, style: &str) -> bool {
        let parsed = match style.parse() {
            Ok(parsed) => parsed,
            Err(reason) => {
                warn!(reason, node = node.id.get(); "Ignoring point style");
                return false;
            }
        };
        match self.view_mut(node) {
            Some(view) => {
                view.point_style = parsed;
                true
            }
            None => false,
        }
    }

    /// Sets the node's line style from its wire spelling.
    ///
    /// Same contract as [`set_point_style`](Self::set_point_style).
    pub fn set_line_style(&mut self, node: NodeRef, style: &str) -> bool {
        let parsed = match style.parse() {
            Ok(parsed) => parsed,
            Err(reason) => {
                warn!(reason, node = node.id.get(); "Ignoring line style");
                return false;
            }
        };
        match self.view_mut(node) {
            Some(view) => {
                view.line_style = parsed;
                true
            }
            None => false,
        }
    }

    /// Renames the node: synthesizes a fresh label chain from the view's
    /// current attributes and rebinds `namecalcer` to the new name value.
    ///
    /// The previous label chain is *not* removed from the logs; it stays as
    /// an orphaned, still-serialized subgraph. That accumulation is legacy
    /// behavior the document format's consumers tolerate, and it is pinned
    /// by a regression test. No-op for internal nodes.
    pub fn set_name(&mut self, node: NodeRef, name: &str) {
        let Some(slot) = self.view_slots.get(&node.id).copied() else {
            warn!(node = node.id.get(); "Ignoring name for node without a view");
            return;
        };
        let current = self.views[slot].clone();
        let style = DisplayOptions {
            shown: Some(current.shown),
            name: None,
            internal: Some(false),
            width: Some(current.width),
            point_style: Some(current.point_style),
            line_style: Some(current.line_style),
            color: Some(current.color),
        };
        let name_value = self.synthesize_label(node.id, name, current.shown, &style);
        self.views[slot].name_calcer = name_value.to_string();
    }

    fn view_mut(&mut self, node: NodeRef) -> Option<&mut ViewEntry> {
        let slot = self.view_slots.get(&node.id).copied();
        if slot.is_none() {
            warn!(node = node.id.get(); "Ignoring view mutation for node without a view");
        }
        slot.map(|slot| &mut self.views[slot])
    }

    // --- session defaults -------------------------------------------------

    /// Makes nodes created from now on hidden by default.
    pub fn hide_objects(&mut self) {
        self.defaults.hide_objects();
    }

    /// Makes nodes created from now on visible by default.
    pub fn show_objects(&mut self) {
        self.defaults.show_objects();
    }

    /// Sets the default visibility for later nodes.
    pub fn set_default_shown(&mut self, shown: bool) {
        self.defaults.set_shown(shown);
    }

    /// Sets the default pen width for later nodes.
    pub fn set_default_width(&mut self, width: i32) {
        self.defaults.set_width(width);
    }

    /// Sets the default point style; `false` if the spelling is not
    /// recognized (the previous default is kept).
    pub fn set_default_point_style(&mut self, style: &str) -> bool {
        self.defaults.set_point_style(style)
    }

    /// Sets the default line style; `false` if the spelling is not
    /// recognized (the previous default is kept).
    pub fn set_default_line_style(&mut self, style: &str) -> bool {
        self.defaults.set_line_style(style)
    }

    /// Sets the default color for later nodes.
    pub fn set_default_color(&mut self, color: impl Into<String>) {
        self.defaults.set_color(color);
    }

    /// Sets the default `namecalcer` string for later nodes.
    pub fn set_default_name(&mut self, name: impl Into<String>) {
        self.defaults.set_name(name);
    }

    /// Sets whether later nodes are internal by default.
    pub fn set_default_internal(&mut self, internal: bool) {
        self.defaults.set_internal(internal);
    }

    /// Sets the document's axes flag.
    pub fn set_axes(&mut self, axes: bool) {
        self.defaults.set_axes(axes);
    }

    /// Sets the document's grid flag.
    pub fn set_grid(&mut self, grid: bool) {
        self.defaults.set_grid(grid);
    }

    // --- inspection -------------------------------------------------------

    /// The hierarchy log, in creation order.
    pub fn hierarchy(&self) -> &[HierarchyRecord] {
        &self.hierarchy
    }

    /// The view log, in creation order.
    pub fn views(&self) -> &[ViewEntry] {
        &self.views
    }

    /// The view entry bound to `node`, if the node is visible.
    pub fn view_of(&self, node: NodeRef) -> Option<&ViewEntry> {
        self.view_slots
            .get(&node.id)
            .map(|slot| &self.views[*slot])
    }

    /// Whether a structural error has aborted this session.
    pub fn is_poisoned(&self) -> bool {
        self.poisoned
    }

    pub(crate) fn poison(&mut self) {
        self.poisoned = true;
    }

    /// Whether this session issued the handle's id.
    pub(crate) fn issued(&self, node: NodeRef) -> bool {
        self.ids.issued(node.id)
    }

    // --- finalize ---------------------------------------------------------

    /// Renders the session into the final document text.
    ///
    /// # Errors
    ///
    /// [`KigError::Poisoned`] if a structural error occurred earlier; a
    /// session that failed never emits a document.
    pub fn finalize(self) -> Result<String, KigError> {
        if self.poisoned {
            return Err(KigError::Poisoned);
        }
        info!(
            hierarchy_len = self.hierarchy.len(),
            views_len = self.views.len();
            "Rendering document",
        );
        Ok(export::render(
            &self.hierarchy,
            &self.views,
            self.defaults.axes(),
            self.defaults.grid(),
        ))
    }

    /// Renders the session and writes the document to `sink`.
    ///
    /// # Errors
    ///
    /// [`KigError::Poisoned`] as for [`finalize`](Self::finalize), or
    /// [`KigError::Io`] if the sink cannot be written.
    pub fn finalize_into(self, sink: &mut dyn io::Write) -> Result<(), KigError> {
        let text = self.finalize()?;
        sink.write_all(text.as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}
