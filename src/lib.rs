#![doc = include_str!("../README.md")]

/// Atom 0.3 and 1.0 documents
pub mod atom;
/// Property-table driven equality, hashing, dumps and copies
pub mod bean;
mod config;
/// Conversion between wire feeds and the synd model
pub mod convert;
/// RFC 822 and W3C date-time handling
pub mod date;
mod error;
/// Feed document input and output
pub mod io;
/// Extension modules (Dublin Core, Syndication, GeoRSS)
pub mod module;
/// RSS 0.90 through 2.0 documents
pub mod rss;
/// Dialect-independent feed model
pub mod synd;
/// Dialect-level feed documents
pub mod wire;
/// Namespace-aware XML element tree
pub mod xml;

pub use bean::{Bean, CopyFrom};
pub use config::{InputConfig, OutputConfig};
pub use error::{Result, SyndError};
pub use io::{SyndFeedInput, SyndFeedOutput, WireFeedInput, WireFeedOutput};
pub use module::Module;
pub use synd::{
    SyndCategory, SyndContent, SyndEnclosure, SyndEntry, SyndFeed, SyndImage, SyndLink,
    SyndPerson,
};
pub use wire::{FeedType, WireEntry, WireFeed};
