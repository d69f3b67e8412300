//! Converters between dialect feeds and [`SyndFeed`]
//!
//! One converter is registered per [`FeedType`]. A converter copies a wire
//! feed into a synd feed and builds a wire feed of its own type back from a
//! synd feed.

mod atom;
mod rss;

use crate::synd::SyndFeed;
use crate::wire::{FeedType, WireFeed};
use crate::{Result, SyndError};

pub use self::atom::AtomConverter;
pub use self::rss::RssConverter;

/// Maps one feed type onto the synd model and back
pub trait Converter: Send + Sync {
    /// Feed type this converter reads and produces
    fn feed_type(&self) -> FeedType;

    /// Copy `wire` into `feed`
    ///
    /// With `preserve`, each synd entry keeps the wire entry it came from.
    fn copy_into(&self, wire: &WireFeed, feed: &mut SyndFeed, preserve: bool) -> Result<()>;

    /// Build a wire feed of this converter's type from `feed`
    fn create_real_feed(&self, feed: &SyndFeed) -> Result<WireFeed>;
}

static CONVERTERS: &[&dyn Converter] = &[
    &RssConverter::new(FeedType::Rss090),
    &RssConverter::new(FeedType::Rss091Netscape),
    &RssConverter::new(FeedType::Rss091Userland),
    &RssConverter::new(FeedType::Rss092),
    &RssConverter::new(FeedType::Rss093),
    &RssConverter::new(FeedType::Rss094),
    &RssConverter::new(FeedType::Rss10),
    &RssConverter::new(FeedType::Rss20),
    &AtomConverter::new(FeedType::Atom03),
    &AtomConverter::new(FeedType::Atom10),
];

/// The registered converter for `feed_type`
pub fn converter_for(feed_type: FeedType) -> Result<&'static dyn Converter> {
    CONVERTERS
        .iter()
        .copied()
        .find(|c| c.feed_type() == feed_type)
        .ok_or_else(|| SyndError::UnsupportedFeedType(feed_type.to_string()))
}

/// Feed types with a registered converter
pub fn supported_feed_types() -> Vec<FeedType> {
    CONVERTERS.iter().map(|c| c.feed_type()).collect()
}

/// Reject wire feeds handed to the converter of another type
fn check_type(converter: &dyn Converter, wire: &WireFeed) -> Result<()> {
    if wire.feed_type() == converter.feed_type() {
        Ok(())
    } else {
        Err(SyndError::TypeMismatch {
            expected: converter.feed_type().to_string(),
            found: wire.feed_type().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feed_type_has_a_converter() {
        for feed_type in FeedType::ALL {
            assert_eq!(converter_for(feed_type).unwrap().feed_type(), feed_type);
        }
        assert_eq!(supported_feed_types().len(), FeedType::ALL.len());
    }
}
