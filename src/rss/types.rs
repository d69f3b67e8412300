//! RSS bean tree
//!
//! One set of beans covers every RSS version; fields a version does not
//! define stay empty.

use chrono::{DateTime, Utc};

use crate::bean::{bean_traits, Bean, Property, PropertyValue};
use crate::module::{self, Module};
use crate::wire::FeedType;
use crate::xml::Element;

/// `<channel>` plus everything RSS 0.90/1.0 keeps beside it under `rdf:RDF`
#[derive(Debug, Clone)]
pub struct Channel {
    pub feed_type: FeedType,
    /// Encoding named in the XML declaration
    pub encoding: Option<String>,
    pub style_sheet: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub link: Option<String>,
    /// `rdf:about` (RSS 1.0)
    pub uri: Option<String>,
    pub image: Option<Image>,
    pub items: Vec<Item>,
    pub text_input: Option<TextInput>,
    pub language: Option<String>,
    pub rating: Option<String>,
    pub copyright: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
    pub last_build_date: Option<DateTime<Utc>>,
    pub docs: Option<String>,
    pub managing_editor: Option<String>,
    pub web_master: Option<String>,
    pub skip_hours: Vec<u32>,
    pub skip_days: Vec<String>,
    pub cloud: Option<Cloud>,
    pub categories: Vec<Category>,
    pub generator: Option<String>,
    pub ttl: Option<u32>,
    pub modules: Vec<Box<dyn Module>>,
    pub foreign_markup: Vec<Element>,
}

impl Channel {
    /// An empty channel of the given RSS version
    pub fn new(feed_type: FeedType) -> Self {
        Self {
            feed_type,
            encoding: None,
            style_sheet: None,
            title: None,
            description: None,
            link: None,
            uri: None,
            image: None,
            items: Vec::new(),
            text_input: None,
            language: None,
            rating: None,
            copyright: None,
            pub_date: None,
            last_build_date: None,
            docs: None,
            managing_editor: None,
            web_master: None,
            skip_hours: Vec::new(),
            skip_days: Vec::new(),
            cloud: None,
            categories: Vec::new(),
            generator: None,
            ttl: None,
            modules: Vec::new(),
            foreign_markup: Vec::new(),
        }
    }

    pub fn module(&self, uri: &str) -> Option<&dyn Module> {
        module::find_module(&self.modules, uri)
    }
}

impl Bean for Channel {
    fn bean_name(&self) -> &'static str {
        "Channel"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        let skip_hours = self
            .skip_hours
            .iter()
            .map(|h| PropertyValue::Integer(i64::from(*h)))
            .collect();

        vec![
            Property::new("feedType", self.feed_type.as_str()),
            Property::new("encoding", self.encoding.as_deref()),
            Property::new("styleSheet", self.style_sheet.as_deref()),
            Property::new("title", self.title.as_deref()),
            Property::new("description", self.description.as_deref()),
            Property::new("link", self.link.as_deref()),
            Property::new("uri", self.uri.as_deref()),
            Property::new("image", PropertyValue::bean(self.image.as_ref())),
            Property::new("items", PropertyValue::beans(&self.items)),
            Property::new("textInput", PropertyValue::bean(self.text_input.as_ref())),
            Property::new("language", self.language.as_deref()),
            Property::new("rating", self.rating.as_deref()),
            Property::new("copyright", self.copyright.as_deref()),
            Property::new("pubDate", self.pub_date),
            Property::new("lastBuildDate", self.last_build_date),
            Property::new("docs", self.docs.as_deref()),
            Property::new("managingEditor", self.managing_editor.as_deref()),
            Property::new("webMaster", self.web_master.as_deref()),
            Property::new("skipHours", PropertyValue::List(skip_hours)),
            Property::new("skipDays", self.skip_days.as_slice()),
            Property::new("cloud", PropertyValue::bean(self.cloud.as_ref())),
            Property::new("categories", PropertyValue::beans(&self.categories)),
            Property::new("generator", self.generator.as_deref()),
            Property::new("ttl", self.ttl),
            Property::new("modules", module::modules_property(&self.modules)),
        ]
    }
}

/// `<item>`
#[derive(Debug, Clone, Default)]
pub struct Item {
    pub title: Option<String>,
    pub link: Option<String>,
    /// `rdf:about` (RSS 1.0)
    pub uri: Option<String>,
    pub description: Option<Description>,
    /// `content:encoded`
    pub content: Option<Content>,
    pub source: Option<Source>,
    pub enclosures: Vec<Enclosure>,
    pub categories: Vec<Category>,
    pub guid: Option<Guid>,
    pub comments: Option<String>,
    pub author: Option<String>,
    pub pub_date: Option<DateTime<Utc>>,
    pub expiration_date: Option<DateTime<Utc>>,
    pub modules: Vec<Box<dyn Module>>,
    pub foreign_markup: Vec<Element>,
}

impl Item {
    pub fn module(&self, uri: &str) -> Option<&dyn Module> {
        module::find_module(&self.modules, uri)
    }
}

impl Bean for Item {
    fn bean_name(&self) -> &'static str {
        "Item"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("title", self.title.as_deref()),
            Property::new("link", self.link.as_deref()),
            Property::new("uri", self.uri.as_deref()),
            Property::new("description", PropertyValue::bean(self.description.as_ref())),
            Property::new("content", PropertyValue::bean(self.content.as_ref())),
            Property::new("source", PropertyValue::bean(self.source.as_ref())),
            Property::new("enclosures", PropertyValue::beans(&self.enclosures)),
            Property::new("categories", PropertyValue::beans(&self.categories)),
            Property::new("guid", PropertyValue::bean(self.guid.as_ref())),
            Property::new("comments", self.comments.as_deref()),
            Property::new("author", self.author.as_deref()),
            Property::new("pubDate", self.pub_date),
            Property::new("expirationDate", self.expiration_date),
            Property::new("modules", module::modules_property(&self.modules)),
        ]
    }
}

/// Item description, with the RSS 0.93 `type` attribute
#[derive(Debug, Clone, Default)]
pub struct Description {
    pub description_type: Option<String>,
    pub value: Option<String>,
}

impl Bean for Description {
    fn bean_name(&self) -> &'static str {
        "Description"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("type", self.description_type.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }
}

/// Full item content from `content:encoded`
#[derive(Debug, Clone, Default)]
pub struct Content {
    pub content_type: Option<String>,
    pub value: Option<String>,
}

impl Content {
    /// Content type used for `content:encoded`
    pub const HTML: &'static str = "html";
}

impl Bean for Content {
    fn bean_name(&self) -> &'static str {
        "Content"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("type", self.content_type.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct Category {
    pub domain: Option<String>,
    pub value: Option<String>,
}

impl Bean for Category {
    fn bean_name(&self) -> &'static str {
        "Category"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("domain", self.domain.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct Enclosure {
    pub url: Option<String>,
    pub length: i64,
    pub enclosure_type: Option<String>,
}

impl Bean for Enclosure {
    fn bean_name(&self) -> &'static str {
        "Enclosure"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("url", self.url.as_deref()),
            Property::new("length", self.length),
            Property::new("type", self.enclosure_type.as_deref()),
        ]
    }
}

/// Globally unique item identifier
#[derive(Debug, Clone)]
pub struct Guid {
    pub value: Option<String>,
    /// Whether the value is a URL to the item, `true` unless stated otherwise
    pub perma_link: bool,
}

impl Default for Guid {
    fn default() -> Self {
        Self {
            value: None,
            perma_link: true,
        }
    }
}

impl Bean for Guid {
    fn bean_name(&self) -> &'static str {
        "Guid"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("value", self.value.as_deref()),
            Property::new("permaLink", self.perma_link),
        ]
    }
}

/// Channel the item came from
#[derive(Debug, Clone, Default)]
pub struct Source {
    pub url: Option<String>,
    pub value: Option<String>,
}

impl Bean for Source {
    fn bean_name(&self) -> &'static str {
        "Source"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("url", self.url.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct Image {
    pub title: Option<String>,
    pub url: Option<String>,
    pub link: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub description: Option<String>,
}

impl Bean for Image {
    fn bean_name(&self) -> &'static str {
        "Image"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("title", self.title.as_deref()),
            Property::new("url", self.url.as_deref()),
            Property::new("link", self.link.as_deref()),
            Property::new("width", self.width),
            Property::new("height", self.height),
            Property::new("description", self.description.as_deref()),
        ]
    }
}

/// rssCloud registration endpoint
#[derive(Debug, Clone, Default)]
pub struct Cloud {
    pub domain: Option<String>,
    pub port: Option<u32>,
    pub path: Option<String>,
    pub register_procedure: Option<String>,
    pub protocol: Option<String>,
}

impl Bean for Cloud {
    fn bean_name(&self) -> &'static str {
        "Cloud"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("domain", self.domain.as_deref()),
            Property::new("port", self.port),
            Property::new("path", self.path.as_deref()),
            Property::new("registerProcedure", self.register_procedure.as_deref()),
            Property::new("protocol", self.protocol.as_deref()),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct TextInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    pub link: Option<String>,
}

impl Bean for TextInput {
    fn bean_name(&self) -> &'static str {
        "TextInput"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("title", self.title.as_deref()),
            Property::new("description", self.description.as_deref()),
            Property::new("name", self.name.as_deref()),
            Property::new("link", self.link.as_deref()),
        ]
    }
}

bean_traits!(Channel, Item, Description, Content, Category, Enclosure, Guid, Source, Image, Cloud, TextInput);
