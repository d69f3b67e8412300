//! Atom bean tree, shared by Atom 0.3 and 1.0
//!
//! Atom 0.3 names are mapped onto their 1.0 counterparts: `tagline` is the
//! subtitle, `copyright` the rights, `modified` the updated date and
//! `issued` the published date.

use chrono::{DateTime, Utc};

use crate::bean::{bean_traits, Bean, Property, PropertyValue};
use crate::module::{self, Module};
use crate::wire::FeedType;
use crate::xml::Element;

/// `<feed>`
#[derive(Debug, Clone)]
pub struct Feed {
    pub feed_type: FeedType,
    /// Encoding named in the XML declaration
    pub encoding: Option<String>,
    pub xml_base: Option<String>,
    /// `xml:lang` of the feed element
    pub language: Option<String>,
    pub id: Option<String>,
    pub title: Option<Content>,
    pub subtitle: Option<Content>,
    pub rights: Option<String>,
    /// Atom 0.3 `info`
    pub info: Option<Content>,
    pub generator: Option<Generator>,
    pub icon: Option<String>,
    pub logo: Option<String>,
    pub updated: Option<DateTime<Utc>>,
    pub alternate_links: Vec<Link>,
    pub other_links: Vec<Link>,
    pub authors: Vec<Person>,
    pub contributors: Vec<Person>,
    pub categories: Vec<Category>,
    pub entries: Vec<Entry>,
    pub modules: Vec<Box<dyn Module>>,
    pub foreign_markup: Vec<Element>,
}

impl Feed {
    /// An empty feed of the given Atom version
    pub fn new(feed_type: FeedType) -> Self {
        Self {
            feed_type,
            encoding: None,
            xml_base: None,
            language: None,
            id: None,
            title: None,
            subtitle: None,
            rights: None,
            info: None,
            generator: None,
            icon: None,
            logo: None,
            updated: None,
            alternate_links: Vec::new(),
            other_links: Vec::new(),
            authors: Vec::new(),
            contributors: Vec::new(),
            categories: Vec::new(),
            entries: Vec::new(),
            modules: Vec::new(),
            foreign_markup: Vec::new(),
        }
    }

    pub fn module(&self, uri: &str) -> Option<&dyn Module> {
        module::find_module(&self.modules, uri)
    }

    /// Alternate links first, then the others
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.alternate_links.iter().chain(self.other_links.iter())
    }
}

impl Bean for Feed {
    fn bean_name(&self) -> &'static str {
        "Feed"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("feedType", self.feed_type.as_str()),
            Property::new("encoding", self.encoding.as_deref()),
            Property::new("xmlBase", self.xml_base.as_deref()),
            Property::new("language", self.language.as_deref()),
            Property::new("id", self.id.as_deref()),
            Property::new("title", PropertyValue::bean(self.title.as_ref())),
            Property::new("subtitle", PropertyValue::bean(self.subtitle.as_ref())),
            Property::new("rights", self.rights.as_deref()),
            Property::new("info", PropertyValue::bean(self.info.as_ref())),
            Property::new("generator", PropertyValue::bean(self.generator.as_ref())),
            Property::new("icon", self.icon.as_deref()),
            Property::new("logo", self.logo.as_deref()),
            Property::new("updated", self.updated),
            Property::new("alternateLinks", PropertyValue::beans(&self.alternate_links)),
            Property::new("otherLinks", PropertyValue::beans(&self.other_links)),
            Property::new("authors", PropertyValue::beans(&self.authors)),
            Property::new("contributors", PropertyValue::beans(&self.contributors)),
            Property::new("categories", PropertyValue::beans(&self.categories)),
            Property::new("entries", PropertyValue::beans(&self.entries)),
            Property::new("modules", module::modules_property(&self.modules)),
        ]
    }
}

/// `<entry>`
#[derive(Debug, Clone, Default)]
pub struct Entry {
    pub xml_base: Option<String>,
    pub id: Option<String>,
    pub title: Option<Content>,
    pub summary: Option<Content>,
    pub contents: Vec<Content>,
    pub rights: Option<String>,
    /// `published`, Atom 0.3 `issued`
    pub published: Option<DateTime<Utc>>,
    /// `updated`, Atom 0.3 `modified`
    pub updated: Option<DateTime<Utc>>,
    /// Atom 0.3 `created`
    pub created: Option<DateTime<Utc>>,
    pub alternate_links: Vec<Link>,
    pub other_links: Vec<Link>,
    pub authors: Vec<Person>,
    pub contributors: Vec<Person>,
    pub categories: Vec<Category>,
    /// Metadata of the feed the entry was copied from
    pub source: Option<Box<Feed>>,
    pub modules: Vec<Box<dyn Module>>,
    pub foreign_markup: Vec<Element>,
}

impl Entry {
    pub fn module(&self, uri: &str) -> Option<&dyn Module> {
        module::find_module(&self.modules, uri)
    }

    /// Alternate links first, then the others
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.alternate_links.iter().chain(self.other_links.iter())
    }
}

impl Bean for Entry {
    fn bean_name(&self) -> &'static str {
        "Entry"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("xmlBase", self.xml_base.as_deref()),
            Property::new("id", self.id.as_deref()),
            Property::new("title", PropertyValue::bean(self.title.as_ref())),
            Property::new("summary", PropertyValue::bean(self.summary.as_ref())),
            Property::new("contents", PropertyValue::beans(&self.contents)),
            Property::new("rights", self.rights.as_deref()),
            Property::new("published", self.published),
            Property::new("updated", self.updated),
            Property::new("created", self.created),
            Property::new("alternateLinks", PropertyValue::beans(&self.alternate_links)),
            Property::new("otherLinks", PropertyValue::beans(&self.other_links)),
            Property::new("authors", PropertyValue::beans(&self.authors)),
            Property::new("contributors", PropertyValue::beans(&self.contributors)),
            Property::new("categories", PropertyValue::beans(&self.categories)),
            Property::new("source", PropertyValue::bean(self.source.as_deref())),
            Property::new("modules", module::modules_property(&self.modules)),
        ]
    }
}

/// `<link>`
#[derive(Debug, Clone)]
pub struct Link {
    pub href: Option<String>,
    /// `href` resolved against the `xml:base` in scope
    pub href_resolved: Option<String>,
    pub rel: String,
    pub link_type: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
    pub length: i64,
}

impl Default for Link {
    fn default() -> Self {
        Self {
            href: None,
            href_resolved: None,
            rel: Link::ALTERNATE.to_string(),
            link_type: None,
            hreflang: None,
            title: None,
            length: 0,
        }
    }
}

impl Link {
    /// Relation assumed when `rel` is absent
    pub const ALTERNATE: &'static str = "alternate";

    /// Relation of links that point at attached media
    pub const ENCLOSURE: &'static str = "enclosure";

    pub fn new(href: &str) -> Self {
        Self {
            href: Some(href.to_string()),
            ..Self::default()
        }
    }

    /// The resolved href, or the href as written when nothing was resolved
    ///
    /// # Examples
    ///
    /// ```
    /// use synd_rs::atom::Link;
    ///
    /// let mut link = Link::new("/posts/1");
    /// assert_eq!(link.href_resolved(), Some("/posts/1"));
    ///
    /// link.href_resolved = Some("http://example.com/posts/1".to_string());
    /// assert_eq!(link.href_resolved(), Some("http://example.com/posts/1"));
    /// ```
    pub fn href_resolved(&self) -> Option<&str> {
        self.href_resolved.as_deref().or(self.href.as_deref())
    }

    pub fn is_alternate(&self) -> bool {
        self.rel == Self::ALTERNATE
    }
}

impl Bean for Link {
    fn bean_name(&self) -> &'static str {
        "Link"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("href", self.href.as_deref()),
            Property::new("hrefResolved", self.href_resolved()),
            Property::new("rel", self.rel.as_str()),
            Property::new("type", self.link_type.as_deref()),
            Property::new("hreflang", self.hreflang.as_deref()),
            Property::new("title", self.title.as_deref()),
            Property::new("length", self.length),
        ]
    }
}

/// Text construct or entry content
#[derive(Debug, Clone, Default)]
pub struct Content {
    /// `text`, `html`, `xhtml` or a MIME type
    pub content_type: Option<String>,
    /// Atom 0.3 `mode`, or [`Content::BASE64`] for binary inline content
    pub mode: Option<String>,
    /// Out-of-line content location
    pub src: Option<String>,
    pub value: Option<String>,
}

impl Content {
    pub const TEXT: &'static str = "text";
    pub const HTML: &'static str = "html";
    pub const XHTML: &'static str = "xhtml";

    pub const XML: &'static str = "xml";
    pub const ESCAPED: &'static str = "escaped";
    pub const BASE64: &'static str = "base64";

    /// Content holding `value` with the given type
    pub fn new(content_type: Option<&str>, value: &str) -> Self {
        Self {
            content_type: content_type.map(str::to_string),
            value: Some(value.to_string()),
            ..Self::default()
        }
    }

    /// Whether Atom 1.0 carries this inline content base64 encoded
    ///
    /// Inline content whose type is neither text nor XML is binary.
    pub fn is_binary(&self) -> bool {
        let Some(content_type) = self.content_type.as_deref() else {
            return false;
        };
        let lower = content_type.to_ascii_lowercase();
        self.src.is_none()
            && !matches!(lower.as_str(), Self::TEXT | Self::HTML | Self::XHTML)
            && !lower.starts_with("text/")
            && !lower.ends_with("+xml")
            && !lower.ends_with("/xml")
    }

    /// Whether the value is serialized markup rather than text
    pub fn is_markup(&self) -> bool {
        self.content_type.as_deref() == Some(Self::XHTML)
            || self.mode.as_deref() == Some(Self::XML)
    }
}

impl Bean for Content {
    fn bean_name(&self) -> &'static str {
        "Content"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("type", self.content_type.as_deref()),
            Property::new("mode", self.mode.as_deref()),
            Property::new("src", self.src.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }
}

/// Author or contributor
#[derive(Debug, Clone, Default)]
pub struct Person {
    pub name: Option<String>,
    /// `uri`, Atom 0.3 `url`
    pub uri: Option<String>,
    pub email: Option<String>,
}

impl Bean for Person {
    fn bean_name(&self) -> &'static str {
        "Person"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("name", self.name.as_deref()),
            Property::new("uri", self.uri.as_deref()),
            Property::new("email", self.email.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct Category {
    pub term: Option<String>,
    pub scheme: Option<String>,
    pub label: Option<String>,
}

impl Bean for Category {
    fn bean_name(&self) -> &'static str {
        "Category"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("term", self.term.as_deref()),
            Property::new("scheme", self.scheme.as_deref()),
            Property::new("label", self.label.as_deref()),
        ]
    }
}

/// Software that produced the feed
#[derive(Debug, Clone, Default)]
pub struct Generator {
    /// `uri`, Atom 0.3 `url`
    pub url: Option<String>,
    pub version: Option<String>,
    pub value: Option<String>,
}

impl Bean for Generator {
    fn bean_name(&self) -> &'static str {
        "Generator"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("url", self.url.as_deref()),
            Property::new("version", self.version.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }
}

bean_traits!(Feed, Entry, Link, Content, Person, Category, Generator);
