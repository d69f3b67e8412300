use tracing::debug;

use crate::config::OutputConfig;
use crate::synd::SyndFeed;
use crate::wire::WireFeed;
use crate::xml;
use crate::{Result, SyndError};

/// Writes wire feeds as XML documents
#[derive(Debug, Clone, Default)]
pub struct WireFeedOutput {
    config: OutputConfig,
}

impl WireFeedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &OutputConfig {
        &self.config
    }

    /// Serialize `feed` in its own dialect
    ///
    /// # Errors
    ///
    /// [`SyndError::UnsupportedFeedType`] if no generator writes the feed type.
    pub fn output_string(&self, feed: &WireFeed) -> Result<String> {
        let feed_type = feed.feed_type();
        let generator = super::generator_for(feed_type)
            .ok_or_else(|| SyndError::UnsupportedFeedType(feed_type.to_string()))?;

        let root = generator.generate(feed)?;
        debug!("Writing {} document", feed_type);
        xml::write_document(&root, generator.doctype(feed_type), self.config.indent())
    }
}

/// Writes synd feeds as XML documents
///
/// # Examples
///
/// ```
/// use synd_rs::{FeedType, OutputConfig, SyndFeed, SyndFeedOutput};
///
/// let mut feed = SyndFeed::new(FeedType::Rss20);
/// feed.set_title(Some("News"));
/// feed.set_link(Some("http://example.com/"));
///
/// let xml = SyndFeedOutput::with_config(OutputConfig::compact())
///     .output_string(&feed)
///     .unwrap();
/// assert!(xml.contains(r#"<rss version="2.0">"#));
/// assert!(xml.contains("<title>News</title>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyndFeedOutput {
    output: WireFeedOutput,
}

impl SyndFeedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: OutputConfig) -> Self {
        Self {
            output: WireFeedOutput::with_config(config),
        }
    }

    pub fn config(&self) -> &OutputConfig {
        self.output.config()
    }

    /// Convert `feed` to its feed type and serialize it
    pub fn output_string(&self, feed: &SyndFeed) -> Result<String> {
        let wire = feed.to_wire()?;
        self.output.output_string(&wire)
    }
}
