//! Port definitions for the interactive engine.
//!
//! The presentation layer implements these traits; the engine never depends
//! on a concrete display surface.

pub mod frame_sink;
