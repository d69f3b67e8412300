//! Reading and writing feed documents
//!
//! [`WireFeedInput`] detects the dialect of a document and parses it into a
//! [`WireFeed`]; [`WireFeedOutput`] writes one back. [`SyndFeedInput`] and
//! [`SyndFeedOutput`] add the conversion to and from [`SyndFeed`](crate::SyndFeed).

mod healer;
mod input;
mod output;

use crate::atom::{AtomGenerator, AtomParser};
use crate::rss::{RssGenerator, RssParser};
use crate::wire::{FeedType, WireFeed};
use crate::xml::{Document, Element};
use crate::Result;

pub use self::healer::heal;
pub use self::input::{SyndFeedInput, WireFeedInput};
pub use self::output::{SyndFeedOutput, WireFeedOutput};

/// Reads the documents of one dialect family
pub trait WireFeedParser: Send + Sync {
    /// Feed type of `document`, if this parser reads it
    fn detect(&self, document: &Document) -> Option<FeedType>;

    /// Parse a document previously detected as `feed_type`
    fn parse(&self, document: &Document, feed_type: FeedType) -> Result<WireFeed>;
}

/// Writes the documents of one dialect family
pub trait WireFeedGenerator: Send + Sync {
    /// Whether this generator writes `feed_type`
    fn supports(&self, feed_type: FeedType) -> bool;

    /// Build the document element for `feed`
    fn generate(&self, feed: &WireFeed) -> Result<Element>;

    /// DOCTYPE declaration written before the document element
    fn doctype(&self, _feed_type: FeedType) -> Option<&'static str> {
        None
    }
}

static PARSERS: &[&dyn WireFeedParser] = &[&RssParser, &AtomParser];

static GENERATORS: &[&dyn WireFeedGenerator] = &[&RssGenerator, &AtomGenerator];

/// The first registered parser that recognizes `document`
pub fn detect(document: &Document) -> Option<(&'static dyn WireFeedParser, FeedType)> {
    PARSERS
        .iter()
        .find_map(|parser| parser.detect(document).map(|t| (*parser, t)))
}

/// The registered generator for `feed_type`
pub fn generator_for(feed_type: FeedType) -> Option<&'static dyn WireFeedGenerator> {
    GENERATORS.iter().copied().find(|g| g.supports(feed_type))
}
