//! Dialect-level feed documents
//!
//! A wire feed is the bean tree of one concrete dialect, as read from or
//! written to XML. [`FeedType`] names the dialect and version.

use std::fmt;
use std::str::FromStr;

use crate::atom;
use crate::rss;
use crate::{Result, SyndError};

/// Feed dialect and version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FeedType {
    /// RSS 0.90 (RDF based)
    Rss090,
    /// RSS 0.91, Netscape flavour (with DOCTYPE)
    Rss091Netscape,
    /// RSS 0.91, UserLand flavour
    Rss091Userland,
    Rss092,
    Rss093,
    Rss094,
    /// RSS 1.0 (RDF based)
    Rss10,
    Rss20,
    Atom03,
    Atom10,
}

impl FeedType {
    /// Every supported dialect, RSS first
    pub const ALL: [FeedType; 10] = [
        FeedType::Rss090,
        FeedType::Rss091Netscape,
        FeedType::Rss091Userland,
        FeedType::Rss092,
        FeedType::Rss093,
        FeedType::Rss094,
        FeedType::Rss10,
        FeedType::Rss20,
        FeedType::Atom03,
        FeedType::Atom10,
    ];

    /// Conventional identifier, e.g. `rss_2.0` or `atom_1.0`
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedType::Rss090 => "rss_0.9",
            FeedType::Rss091Netscape => "rss_0.91N",
            FeedType::Rss091Userland => "rss_0.91U",
            FeedType::Rss092 => "rss_0.92",
            FeedType::Rss093 => "rss_0.93",
            FeedType::Rss094 => "rss_0.94",
            FeedType::Rss10 => "rss_1.0",
            FeedType::Rss20 => "rss_2.0",
            FeedType::Atom03 => "atom_0.3",
            FeedType::Atom10 => "atom_1.0",
        }
    }

    pub fn is_rss(&self) -> bool {
        !self.is_atom()
    }

    pub fn is_atom(&self) -> bool {
        matches!(self, FeedType::Atom03 | FeedType::Atom10)
    }

    /// RSS dialects whose document element is `rdf:RDF`
    pub fn is_rdf(&self) -> bool {
        matches!(self, FeedType::Rss090 | FeedType::Rss10)
    }

    /// Value of the `version` attribute on `<rss>`, for non-RDF RSS
    pub fn rss_version(&self) -> Option<&'static str> {
        match self {
            FeedType::Rss091Netscape | FeedType::Rss091Userland => Some("0.91"),
            FeedType::Rss092 => Some("0.92"),
            FeedType::Rss093 => Some("0.93"),
            FeedType::Rss094 => Some("0.94"),
            FeedType::Rss20 => Some("2.0"),
            _ => None,
        }
    }
}

impl fmt::Display for FeedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedType {
    type Err = SyndError;

    /// # Examples
    ///
    /// ```
    /// use synd_rs::FeedType;
    ///
    /// assert_eq!("rss_0.91U".parse::<FeedType>().unwrap(), FeedType::Rss091Userland);
    /// assert!("rss_3.0".parse::<FeedType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        FeedType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SyndError::UnsupportedFeedType(s.to_string()))
    }
}

/// A feed in one concrete dialect
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireFeed {
    Rss(rss::Channel),
    Atom(atom::Feed),
}

impl WireFeed {
    pub fn feed_type(&self) -> FeedType {
        match self {
            WireFeed::Rss(channel) => channel.feed_type,
            WireFeed::Atom(feed) => feed.feed_type,
        }
    }

    pub fn encoding(&self) -> Option<&str> {
        match self {
            WireFeed::Rss(channel) => channel.encoding.as_deref(),
            WireFeed::Atom(feed) => feed.encoding.as_deref(),
        }
    }

    pub fn set_encoding(&mut self, encoding: Option<String>) {
        match self {
            WireFeed::Rss(channel) => channel.encoding = encoding,
            WireFeed::Atom(feed) => feed.encoding = encoding,
        }
    }

    pub fn as_rss(&self) -> Option<&rss::Channel> {
        match self {
            WireFeed::Rss(channel) => Some(channel),
            WireFeed::Atom(_) => None,
        }
    }

    pub fn as_atom(&self) -> Option<&atom::Feed> {
        match self {
            WireFeed::Atom(feed) => Some(feed),
            WireFeed::Rss(_) => None,
        }
    }
}

/// An entry in one concrete dialect
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WireEntry {
    Item(rss::Item),
    Entry(atom::Entry),
}
