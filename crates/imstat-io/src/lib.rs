//! imstat-io - Input for imstat
//!
//! Reads a text source holding one value per line and hands the lines to
//! the statistics engine unchanged. Parsing the values is the engine's job.

pub mod reader;

pub use reader::*;
