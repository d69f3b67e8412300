//! Atom dialects
//!
//! Atom 1.0 (RFC 4287) and the pre-standard Atom 0.3 draft.

mod generator;
mod parser;
mod types;

pub use generator::AtomGenerator;
pub use parser::AtomParser;
pub use types::{Category, Content, Entry, Feed, Generator, Link, Person};

/// Atom 1.0 namespace
pub const ATOM10_URI: &str = "http://www.w3.org/2005/Atom";

/// Atom 0.3 namespace
pub const ATOM03_URI: &str = "http://purl.org/atom/ns#";
