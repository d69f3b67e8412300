use tracing::debug;

use super::healer;
use crate::config::InputConfig;
use crate::synd::SyndFeed;
use crate::wire::WireFeed;
use crate::xml;
use crate::{Result, SyndError};

/// Parses feed documents into wire feeds
///
/// # Examples
///
/// ```
/// use synd_rs::{FeedType, WireFeedInput};
///
/// let xml = r#"<rss version="2.0"><channel><title>News</title></channel></rss>"#;
/// let feed = WireFeedInput::new().build(xml).unwrap();
///
/// assert_eq!(feed.feed_type(), FeedType::Rss20);
/// assert_eq!(feed.as_rss().unwrap().title.as_deref(), Some("News"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct WireFeedInput {
    config: InputConfig,
}

impl WireFeedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Detect the dialect of `xml` and parse it
    ///
    /// A leading byte order mark and whitespace are ignored. Documents with a
    /// DOCTYPE fail with [`SyndError::DoctypeNotAllowed`] unless
    /// [`InputConfig::allow_doctypes`] is set.
    pub fn build(&self, xml: &str) -> Result<WireFeed> {
        let trimmed = xml.trim_start_matches('\u{feff}').trim_start();
        let healed = if self.config.xml_healer {
            healer::heal(trimmed)
        } else {
            trimmed.into()
        };

        let document = xml::parse_document(&healed)?;
        if document.doctype.is_some() && !self.config.allow_doctypes {
            return Err(SyndError::DoctypeNotAllowed);
        }

        let (parser, feed_type) = super::detect(&document).ok_or_else(|| {
            SyndError::UnsupportedFeedType(format!(
                "no parser for root element <{}>",
                document.root.qualified_name()
            ))
        })?;
        debug!("Detected {} document", feed_type);

        let mut feed = parser.parse(&document, feed_type)?;
        feed.set_encoding(document.encoding.clone());
        Ok(feed)
    }
}

/// Parses feed documents into synd feeds
///
/// # Examples
///
/// ```
/// use synd_rs::SyndFeedInput;
///
/// let xml = r#"<feed xmlns="http://www.w3.org/2005/Atom">
///     <title>Blog</title>
///     <entry><title>Hello</title><id>urn:entry:1</id></entry>
/// </feed>"#;
///
/// let feed = SyndFeedInput::new().build(xml).unwrap();
/// assert_eq!(feed.title(), Some("Blog"));
/// assert_eq!(feed.entries()[0].uri(), Some("urn:entry:1"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyndFeedInput {
    input: WireFeedInput,
}

impl SyndFeedInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            input: WireFeedInput::with_config(config),
        }
    }

    pub fn config(&self) -> &InputConfig {
        self.input.config()
    }

    /// Parse `xml` and convert it to a [`SyndFeed`]
    pub fn build(&self, xml: &str) -> Result<SyndFeed> {
        let wire = self.input.build(xml)?;
        SyndFeed::from_wire(&wire, self.config().preserve_wire_feed)
    }
}
