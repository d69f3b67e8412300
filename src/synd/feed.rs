use std::any::Any;

use chrono::{DateTime, Utc};
use tracing::debug;

use super::entry;
use super::{uri, SyndCategory, SyndContent, SyndEntry, SyndImage, SyndLink, SyndPerson};
use crate::bean::{
    bean_traits, Bean, CopyFrom, CopyFromHelper, Factory, Interface, Property, PropertyType,
    PropertyValue, Value,
};
use crate::convert;
use crate::module::{self, dc, DcModule, DcSubject, Module};
use crate::wire::{FeedType, WireFeed};
use crate::xml::Element;
use crate::{Result, SyndError};

/// Feed properties that are views over the Dublin Core module
pub const CONVENIENCE_PROPERTIES: &[&str] =
    &["publishedDate", "author", "copyright", "language", "categories"];

/// A dialect-independent feed
///
/// The published date, author, copyright, language and categories live in
/// the Dublin Core module (date, creator, rights, language and subjects).
/// The accessors below read and write it, and the bean engine sees them
/// only through the module.
///
/// # Examples
///
/// ```
/// use synd_rs::synd::{SyndCategory, SyndFeed};
/// use synd_rs::FeedType;
///
/// let mut feed = SyndFeed::new(FeedType::Rss20);
/// feed.set_title(Some("News"));
/// feed.set_language(Some("en"));
/// feed.set_categories(vec![SyndCategory::new("rust")]);
///
/// assert_eq!(feed.dc_module().language(), Some("en"));
/// assert_eq!(feed.categories()[0].name.as_deref(), Some("rust"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyndFeed {
    feed_type: Option<FeedType>,
    encoding: Option<String>,
    uri: Option<String>,
    title: Option<SyndContent>,
    link: Option<String>,
    links: Vec<SyndLink>,
    description: Option<SyndContent>,
    image: Option<SyndImage>,
    entries: Vec<SyndEntry>,
    authors: Vec<SyndPerson>,
    contributors: Vec<SyndPerson>,
    docs: Option<String>,
    generator: Option<String>,
    managing_editor: Option<String>,
    web_master: Option<String>,
    style_sheet: Option<String>,
    modules: Vec<Box<dyn Module>>,
    foreign_markup: Vec<Element>,
    wire_feed: Option<WireFeed>,
}

impl SyndFeed {
    /// An empty feed that will be written as `feed_type`
    pub fn new(feed_type: FeedType) -> Self {
        Self {
            feed_type: Some(feed_type),
            ..Self::default()
        }
    }

    /// Normalize a dialect feed
    ///
    /// With `preserve`, the wire feed and each wire entry are kept on the
    /// result and can be read back with [`wire_feed`](Self::wire_feed) and
    /// [`SyndEntry::wire_entry`].
    pub fn from_wire(wire: &WireFeed, preserve: bool) -> Result<Self> {
        let converter = convert::converter_for(wire.feed_type())?;

        let mut feed = Self::default();
        converter.copy_into(wire, &mut feed, preserve)?;
        if preserve {
            feed.wire_feed = Some(wire.clone());
        }
        debug!(
            "Converted {} feed with {} entries",
            wire.feed_type(),
            feed.entries.len()
        );
        Ok(feed)
    }

    /// Build a dialect feed of the given type
    pub fn create_wire_feed(&self, feed_type: FeedType) -> Result<WireFeed> {
        convert::converter_for(feed_type)?.create_real_feed(self)
    }

    /// Build a dialect feed of this feed's own type
    pub fn to_wire(&self) -> Result<WireFeed> {
        let feed_type = self
            .feed_type
            .ok_or_else(|| SyndError::UnsupportedFeedType("feed type not set".to_string()))?;
        self.create_wire_feed(feed_type)
    }

    pub fn feed_type(&self) -> Option<FeedType> {
        self.feed_type
    }

    pub fn set_feed_type(&mut self, feed_type: Option<FeedType>) {
        self.feed_type = feed_type;
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }

    pub fn set_encoding(&mut self, encoding: Option<&str>) {
        self.encoding = encoding.map(str::to_string);
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Set the feed URI, normalized through [`uri::normalize`]
    pub fn set_uri(&mut self, uri: Option<&str>) {
        self.uri = uri::normalize(uri);
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().and_then(|t| t.value.as_deref())
    }

    pub fn set_title(&mut self, title: Option<&str>) {
        self.title
            .get_or_insert_with(SyndContent::default)
            .value = title.map(str::to_string);
    }

    pub fn title_ex(&self) -> Option<&SyndContent> {
        self.title.as_ref()
    }

    pub fn set_title_ex(&mut self, title: Option<SyndContent>) {
        self.title = title;
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    pub fn set_link(&mut self, link: Option<&str>) {
        self.link = link.map(str::to_string);
    }

    pub fn links(&self) -> &[SyndLink] {
        &self.links
    }

    pub fn links_mut(&mut self) -> &mut Vec<SyndLink> {
        &mut self.links
    }

    pub fn set_links(&mut self, links: Vec<SyndLink>) {
        self.links = links;
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_ref().and_then(|d| d.value.as_deref())
    }

    pub fn set_description(&mut self, description: Option<&str>) {
        self.description
            .get_or_insert_with(SyndContent::default)
            .value = description.map(str::to_string);
    }

    pub fn description_ex(&self) -> Option<&SyndContent> {
        self.description.as_ref()
    }

    pub fn set_description_ex(&mut self, description: Option<SyndContent>) {
        self.description = description;
    }

    pub fn image(&self) -> Option<&SyndImage> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: Option<SyndImage>) {
        self.image = image;
    }

    pub fn entries(&self) -> &[SyndEntry] {
        &self.entries
    }

    pub fn entries_mut(&mut self) -> &mut Vec<SyndEntry> {
        &mut self.entries
    }

    pub fn set_entries(&mut self, entries: Vec<SyndEntry>) {
        self.entries = entries;
    }

    pub fn authors(&self) -> &[SyndPerson] {
        &self.authors
    }

    pub fn authors_mut(&mut self) -> &mut Vec<SyndPerson> {
        &mut self.authors
    }

    pub fn set_authors(&mut self, authors: Vec<SyndPerson>) {
        self.authors = authors;
    }

    pub fn contributors(&self) -> &[SyndPerson] {
        &self.contributors
    }

    pub fn contributors_mut(&mut self) -> &mut Vec<SyndPerson> {
        &mut self.contributors
    }

    pub fn set_contributors(&mut self, contributors: Vec<SyndPerson>) {
        self.contributors = contributors;
    }

    pub fn docs(&self) -> Option<&str> {
        self.docs.as_deref()
    }

    pub fn set_docs(&mut self, docs: Option<&str>) {
        self.docs = docs.map(str::to_string);
    }

    pub fn generator(&self) -> Option<&str> {
        self.generator.as_deref()
    }

    pub fn set_generator(&mut self, generator: Option<&str>) {
        self.generator = generator.map(str::to_string);
    }

    pub fn managing_editor(&self) -> Option<&str> {
        self.managing_editor.as_deref()
    }

    pub fn set_managing_editor(&mut self, managing_editor: Option<&str>) {
        self.managing_editor = managing_editor.map(str::to_string);
    }

    pub fn web_master(&self) -> Option<&str> {
        self.web_master.as_deref()
    }

    pub fn set_web_master(&mut self, web_master: Option<&str>) {
        self.web_master = web_master.map(str::to_string);
    }

    pub fn style_sheet(&self) -> Option<&str> {
        self.style_sheet.as_deref()
    }

    pub fn set_style_sheet(&mut self, style_sheet: Option<&str>) {
        self.style_sheet = style_sheet.map(str::to_string);
    }

    /// Published date, read from the Dublin Core date
    pub fn published_date(&self) -> Option<DateTime<Utc>> {
        self.dc_module().date()
    }

    pub fn set_published_date(&mut self, published_date: Option<DateTime<Utc>>) {
        self.dc_module_mut().set_date(published_date);
    }

    /// Author, read from the Dublin Core creator
    pub fn author(&self) -> Option<&str> {
        self.dc_module().creator()
    }

    pub fn set_author(&mut self, author: Option<&str>) {
        self.dc_module_mut().set_creator(author);
    }

    /// Copyright notice, read from the Dublin Core rights
    pub fn copyright(&self) -> Option<&str> {
        self.dc_module().right()
    }

    pub fn set_copyright(&mut self, copyright: Option<&str>) {
        self.dc_module_mut().set_right(copyright);
    }

    /// Language, read from the Dublin Core language
    pub fn language(&self) -> Option<&str> {
        self.dc_module().language()
    }

    pub fn set_language(&mut self, language: Option<&str>) {
        self.dc_module_mut().set_language(language);
    }

    /// Categories, built from the Dublin Core subjects
    pub fn categories(&self) -> Vec<SyndCategory> {
        self.dc_module()
            .subjects
            .iter()
            .map(SyndCategory::from)
            .collect()
    }

    /// Replace the Dublin Core subjects with `categories`
    pub fn set_categories(&mut self, categories: Vec<SyndCategory>) {
        self.dc_module_mut().subjects = categories.iter().map(DcSubject::from).collect();
    }

    /// Attached modules
    pub fn modules(&self) -> &[Box<dyn Module>] {
        &self.modules
    }

    /// Attached modules, creating the Dublin Core module if missing
    pub fn modules_mut(&mut self) -> &mut Vec<Box<dyn Module>> {
        module::ensure_module::<DcModule>(&mut self.modules, dc::URI);
        &mut self.modules
    }

    pub fn set_modules(&mut self, modules: Vec<Box<dyn Module>>) {
        self.modules = modules;
    }

    /// Module by URI, or a shared empty one for modules this crate knows
    pub fn module(&self, uri: &str) -> Option<&dyn Module> {
        module::module_or_default(&self.modules, uri)
    }

    /// Mutable module by URI, created if missing for modules this crate knows
    pub fn module_mut(&mut self, uri: &str) -> Option<&mut (dyn Module + 'static)> {
        module::get_or_create_module(&mut self.modules, uri)
    }

    pub fn dc_module(&self) -> &DcModule {
        module::dc_or_default(&self.modules)
    }

    pub fn dc_module_mut(&mut self) -> &mut DcModule {
        module::ensure_module::<DcModule>(&mut self.modules, dc::URI)
    }

    /// Elements from unknown namespaces, kept for round-tripping
    pub fn foreign_markup(&self) -> &[Element] {
        &self.foreign_markup
    }

    pub fn foreign_markup_mut(&mut self) -> &mut Vec<Element> {
        &mut self.foreign_markup
    }

    pub fn set_foreign_markup(&mut self, foreign_markup: Vec<Element>) {
        self.foreign_markup = foreign_markup;
    }

    /// The dialect feed this feed was converted from, when preserved
    pub fn wire_feed(&self) -> Option<&WireFeed> {
        self.wire_feed.as_ref()
    }
}

fn new_entry() -> Box<dyn CopyFrom> {
    Box::new(SyndEntry::default())
}

fn new_image() -> Box<dyn CopyFrom> {
    Box::new(SyndImage::default())
}

static IMPLEMENTATIONS: &[(Interface, Factory)] = &[
    (Interface::SyndContent, entry::new_content),
    (Interface::SyndLink, entry::new_link),
    (Interface::SyndEnclosure, entry::new_enclosure),
    (Interface::SyndPerson, entry::new_person),
    (Interface::SyndCategory, entry::new_category),
    (Interface::SyndFeed, entry::new_feed),
    (Interface::SyndEntry, new_entry),
    (Interface::SyndImage, new_image),
];

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndFeed,
    &[
        ("feedType", PropertyType::Basic),
        ("encoding", PropertyType::Basic),
        ("uri", PropertyType::Basic),
        ("title", PropertyType::Bean(Interface::SyndContent)),
        ("link", PropertyType::Basic),
        ("links", PropertyType::Bean(Interface::SyndLink)),
        ("description", PropertyType::Bean(Interface::SyndContent)),
        ("image", PropertyType::Bean(Interface::SyndImage)),
        ("entries", PropertyType::Bean(Interface::SyndEntry)),
        ("authors", PropertyType::Bean(Interface::SyndPerson)),
        ("contributors", PropertyType::Bean(Interface::SyndPerson)),
        ("docs", PropertyType::Basic),
        ("generator", PropertyType::Basic),
        ("managingEditor", PropertyType::Basic),
        ("webMaster", PropertyType::Basic),
        ("styleSheet", PropertyType::Basic),
        ("modules", PropertyType::Modules),
    ],
    IMPLEMENTATIONS,
);

impl Bean for SyndFeed {
    fn bean_name(&self) -> &'static str {
        "SyndFeed"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("feedType", self.feed_type.map(|t| t.as_str())),
            Property::new("encoding", self.encoding.as_deref()),
            Property::new("uri", self.uri.as_deref()),
            Property::new("title", PropertyValue::bean(self.title.as_ref())),
            Property::new("link", self.link.as_deref()),
            Property::new("links", PropertyValue::beans(&self.links)),
            Property::new("description", PropertyValue::bean(self.description.as_ref())),
            Property::new("image", PropertyValue::bean(self.image.as_ref())),
            Property::new("entries", PropertyValue::beans(&self.entries)),
            Property::new("authors", PropertyValue::beans(&self.authors)),
            Property::new("contributors", PropertyValue::beans(&self.contributors)),
            Property::new("docs", self.docs.as_deref()),
            Property::new("generator", self.generator.as_deref()),
            Property::new("managingEditor", self.managing_editor.as_deref()),
            Property::new("webMaster", self.web_master.as_deref()),
            Property::new("styleSheet", self.style_sheet.as_deref()),
            Property::new("modules", module::modules_property(&self.modules)),
            Property::new("publishedDate", self.published_date()),
            Property::new("author", self.author()),
            Property::new("copyright", self.copyright()),
            Property::new("language", self.language()),
            Property::new("categories", PropertyValue::beans(&self.dc_module().subjects)),
        ]
    }

    fn ignored_properties(&self) -> &'static [&'static str] {
        CONVENIENCE_PROPERTIES
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyndFeed {
    fn interface(&self) -> Interface {
        Interface::SyndFeed
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "feedType" => {
                self.feed_type = value
                    .into_text(name)?
                    .map(|t| t.parse::<FeedType>())
                    .transpose()?
            }
            "encoding" => self.encoding = value.into_text(name)?,
            "uri" => self.uri = uri::normalize(value.into_text(name)?.as_deref()),
            "title" => self.title = value.into_bean(name)?,
            "link" => self.link = value.into_text(name)?,
            "links" => self.links = value.into_beans(name)?,
            "description" => self.description = value.into_bean(name)?,
            "image" => self.image = value.into_bean(name)?,
            "entries" => self.entries = value.into_beans(name)?,
            "authors" => self.authors = value.into_beans(name)?,
            "contributors" => self.contributors = value.into_beans(name)?,
            "docs" => self.docs = value.into_text(name)?,
            "generator" => self.generator = value.into_text(name)?,
            "managingEditor" => self.managing_editor = value.into_text(name)?,
            "webMaster" => self.web_master = value.into_text(name)?,
            "styleSheet" => self.style_sheet = value.into_text(name)?,
            "modules" => self.modules = value.into_modules(name)?,
            _ => return Err(SyndError::unknown_property("SyndFeed", name)),
        }
        Ok(())
    }

    fn new_instance(&self) -> Box<dyn CopyFrom> {
        Box::new(Self::default())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

bean_traits!(SyndFeed);
