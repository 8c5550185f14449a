//! Kigdoc - build Kig geometry documents from declarative construction calls.
//!
//! A [`Session`] turns an ordered sequence of construction requests
//! (points, lines, circles, transformations, derived properties, labels)
//! into a single well-formed markup document for the external Kig renderer
//! to consume. The session allocates stable node identifiers, records
//! parent/child dependencies in call order, resolves display attributes
//! against inheritable session defaults, and finally serializes the graph
//! deterministically.
//!
//! What this crate does *not* do: parse a scripting language (callers issue
//! requests programmatically), launch the renderer, or validate geometric
//! correctness. A construction's arguments must already exist as nodes of
//! the same session; issuing requests in dependency order is the caller's
//! contract.
//!
//! # Examples
//!
//! ```
//! use kigdoc::{Arg, Session, view::DisplayOptions};
//!
//! let mut session = Session::default();
//!
//! let a = session.construct_kind(
//!     "Point",
//!     &[Arg::Double(0.0), Arg::Double(0.0)],
//!     &DisplayOptions::new().with_name("A"),
//! )?;
//! let b = session.construct_kind(
//!     "Point",
//!     &[Arg::Double(4.0), Arg::Double(0.0)],
//!     &DisplayOptions::new().with_name("B"),
//! )?;
//! session.construct_kind(
//!     "Segment",
//!     &[Arg::Node(a), Arg::Node(b)],
//!     &DisplayOptions::new(),
//! )?;
//!
//! let document = session.finalize()?;
//! assert!(document.contains("<Object type=\"SegmentAB\""));
//! # Ok::<(), kigdoc::KigError>(())
//! ```

pub mod config;

mod catalog;
mod error;
mod export;
mod session;

pub use kigdoc_core::{defaults, identifier, node, style, view};

pub use catalog::{Arg, CATALOG, CatalogEntry, Coerce, lookup};
pub use error::KigError;
pub use session::{LABEL_TYPE, NodeRef, Session};
