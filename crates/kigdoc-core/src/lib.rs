//! Kigdoc Core Types and Records
//!
//! This crate provides the foundational types for building Kig construction
//! graphs. It includes:
//!
//! - **Identifiers**: Monotonic node identifier allocation ([`identifier`] module)
//! - **Styles**: Point and line style enumerations with the Kig wire
//!   spellings ([`style`] module)
//! - **Defaults**: The session-scoped display defaults registry
//!   ([`defaults`] module)
//! - **Nodes**: Hierarchy record taxonomy and markup escaping ([`node`] module)
//! - **Views**: Display records bound to visible nodes ([`view`] module)
//!
//! The crate performs no I/O; rendering the records into a full document is
//! the responsibility of the `kigdoc` crate.

pub mod defaults;
pub mod identifier;
pub mod node;
pub mod style;
pub mod view;
