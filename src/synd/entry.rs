use std::any::Any;

use chrono::{DateTime, Utc};

use super::{uri, SyndCategory, SyndContent, SyndEnclosure, SyndFeed, SyndLink, SyndPerson};
use crate::bean::{
    bean_traits, Bean, CopyFrom, CopyFromHelper, Factory, Interface, Property, PropertyType,
    PropertyValue, Value,
};
use crate::module::{self, dc, DcModule, Module};
use crate::wire::WireEntry;
use crate::xml::Element;
use crate::{Result, SyndError};

/// Entry properties that are views over the Dublin Core module
pub const CONVENIENCE_PROPERTIES: &[&str] = &["publishedDate", "author"];

/// A dialect-independent feed entry
///
/// `published_date` and `author` are not stored on the entry: they read and
/// write the Dublin Core module and are skipped by equality, hashing, dumps
/// and copies, which see them through the module instead.
///
/// # Examples
///
/// ```
/// use synd_rs::synd::{SyndCategory, SyndEntry};
///
/// let mut entry = SyndEntry::new();
/// assert!(entry.categories().is_empty());
/// assert_eq!(entry.author(), "");
///
/// entry.set_author(Some("Alice"));
/// entry.set_author(Some("Bob"));
/// assert_eq!(entry.author(), "Alice");
///
/// entry.categories_mut().push(SyndCategory::new("rust"));
/// assert_eq!(entry.categories().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyndEntry {
    uri: Option<String>,
    title: Option<SyndContent>,
    link: Option<String>,
    description: Option<SyndContent>,
    contents: Vec<SyndContent>,
    links: Vec<SyndLink>,
    enclosures: Vec<SyndEnclosure>,
    authors: Vec<SyndPerson>,
    contributors: Vec<SyndPerson>,
    categories: Vec<SyndCategory>,
    updated_date: Option<DateTime<Utc>>,
    source: Option<Box<SyndFeed>>,
    modules: Vec<Box<dyn Module>>,
    foreign_markup: Vec<Element>,
    wire_entry: Option<WireEntry>,
}

impl SyndEntry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Set the entry URI, normalized through [`uri::normalize`]
    pub fn set_uri(&mut self, uri: Option<&str>) {
        self.uri = uri::normalize(uri);
    }

    /// Title text
    pub fn title(&self) -> Option<&str> {
        self.title.as_ref().and_then(|t| t.value.as_deref())
    }

    /// Set the title text, keeping the title's content type
    pub fn set_title(&mut self, title: Option<&str>) {
        self.title
            .get_or_insert_with(SyndContent::default)
            .value = title.map(str::to_string);
    }

    /// Title as a full text construct
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

    pub fn description(&self) -> Option<&SyndContent> {
        self.description.as_ref()
    }

    pub fn description_mut(&mut self) -> Option<&mut SyndContent> {
        self.description.as_mut()
    }

    pub fn set_description(&mut self, description: Option<SyndContent>) {
        self.description = description;
    }

    pub fn contents(&self) -> &[SyndContent] {
        &self.contents
    }

    pub fn contents_mut(&mut self) -> &mut Vec<SyndContent> {
        &mut self.contents
    }

    pub fn set_contents(&mut self, contents: Vec<SyndContent>) {
        self.contents = contents;
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

    /// First link with the given relation
    ///
    /// # Examples
    ///
    /// ```
    /// use synd_rs::synd::{SyndEntry, SyndLink};
    ///
    /// let mut entry = SyndEntry::new();
    /// entry.links_mut().push(SyndLink::new("http://example.com/a"));
    /// entry.links_mut().push(SyndLink::with_rel("http://example.com/b", "self"));
    /// entry.links_mut().push(SyndLink::new("http://example.com/c"));
    ///
    /// let alternate = entry.find_related_link("alternate").unwrap();
    /// assert_eq!(alternate.href.as_deref(), Some("http://example.com/a"));
    /// assert!(entry.find_related_link("edit").is_none());
    /// ```
    pub fn find_related_link(&self, rel: &str) -> Option<&SyndLink> {
        self.links.iter().find(|l| l.rel == rel)
    }

    pub fn enclosures(&self) -> &[SyndEnclosure] {
        &self.enclosures
    }

    pub fn enclosures_mut(&mut self) -> &mut Vec<SyndEnclosure> {
        &mut self.enclosures
    }

    pub fn set_enclosures(&mut self, enclosures: Vec<SyndEnclosure>) {
        self.enclosures = enclosures;
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

    /// Categories, empty when none
    pub fn categories(&self) -> &[SyndCategory] {
        &self.categories
    }

    pub fn categories_mut(&mut self) -> &mut Vec<SyndCategory> {
        &mut self.categories
    }

    pub fn set_categories(&mut self, categories: Vec<SyndCategory>) {
        self.categories = categories;
    }

    pub fn updated_date(&self) -> Option<DateTime<Utc>> {
        self.updated_date
    }

    pub fn set_updated_date(&mut self, updated_date: Option<DateTime<Utc>>) {
        self.updated_date = updated_date;
    }

    /// Published date, read from the Dublin Core date
    pub fn published_date(&self) -> Option<DateTime<Utc>> {
        self.dc_module().date()
    }

    /// Set the Dublin Core date
    pub fn set_published_date(&mut self, published_date: Option<DateTime<Utc>>) {
        self.dc_module_mut().set_date(published_date);
    }

    /// Name of the first author, else the Dublin Core creator, else `""`
    pub fn author(&self) -> String {
        let author = match self.authors.first() {
            Some(person) => person.name.as_deref(),
            None => self.dc_module().creator(),
        };
        author.unwrap_or_default().to_string()
    }

    /// Set the Dublin Core creator, unless one is already present
    ///
    /// The first non-empty author wins; later calls leave it in place. RSS
    /// items rely on this so that an explicit `dc:creator` is not overwritten
    /// by the `author` element.
    pub fn set_author(&mut self, author: Option<&str>) {
        let dc = self.dc_module_mut();
        if dc.creator().is_none_or(str::is_empty) {
            dc.set_creator(author);
        }
    }

    /// Feed the entry was copied from, when aggregated
    pub fn source(&self) -> Option<&SyndFeed> {
        self.source.as_deref()
    }

    pub fn set_source(&mut self, source: Option<SyndFeed>) {
        self.source = source.map(Box::new);
    }

    /// Attached modules
    ///
    /// A Dublin Core module is only present once it has been written to; use
    /// [`modules_mut`](Self::modules_mut) to see it created.
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

    /// Dublin Core module, empty when not yet written
    pub fn dc_module(&self) -> &DcModule {
        module::dc_or_default(&self.modules)
    }

    /// Dublin Core module, created on first access
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

    /// The dialect entry this entry was converted from, when preserved
    pub fn wire_entry(&self) -> Option<&WireEntry> {
        self.wire_entry.as_ref()
    }

    pub fn set_wire_entry(&mut self, wire_entry: Option<WireEntry>) {
        self.wire_entry = wire_entry;
    }
}

pub(super) fn new_content() -> Box<dyn CopyFrom> {
    Box::new(SyndContent::default())
}

pub(super) fn new_link() -> Box<dyn CopyFrom> {
    Box::new(SyndLink::default())
}

pub(super) fn new_enclosure() -> Box<dyn CopyFrom> {
    Box::new(SyndEnclosure::default())
}

pub(super) fn new_person() -> Box<dyn CopyFrom> {
    Box::new(SyndPerson::default())
}

pub(super) fn new_category() -> Box<dyn CopyFrom> {
    Box::new(SyndCategory::default())
}

pub(super) fn new_feed() -> Box<dyn CopyFrom> {
    Box::new(SyndFeed::default())
}

static IMPLEMENTATIONS: &[(Interface, Factory)] = &[
    (Interface::SyndContent, new_content),
    (Interface::SyndLink, new_link),
    (Interface::SyndEnclosure, new_enclosure),
    (Interface::SyndPerson, new_person),
    (Interface::SyndCategory, new_category),
    (Interface::SyndFeed, new_feed),
];

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndEntry,
    &[
        ("uri", PropertyType::Basic),
        ("title", PropertyType::Bean(Interface::SyndContent)),
        ("link", PropertyType::Basic),
        ("description", PropertyType::Bean(Interface::SyndContent)),
        ("contents", PropertyType::Bean(Interface::SyndContent)),
        ("links", PropertyType::Bean(Interface::SyndLink)),
        ("enclosures", PropertyType::Bean(Interface::SyndEnclosure)),
        ("authors", PropertyType::Bean(Interface::SyndPerson)),
        ("contributors", PropertyType::Bean(Interface::SyndPerson)),
        ("categories", PropertyType::Bean(Interface::SyndCategory)),
        ("updatedDate", PropertyType::Basic),
        ("source", PropertyType::Bean(Interface::SyndFeed)),
        ("modules", PropertyType::Modules),
    ],
    IMPLEMENTATIONS,
);

impl Bean for SyndEntry {
    fn bean_name(&self) -> &'static str {
        "SyndEntry"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("uri", self.uri.as_deref()),
            Property::new("title", PropertyValue::bean(self.title.as_ref())),
            Property::new("link", self.link.as_deref()),
            Property::new("description", PropertyValue::bean(self.description.as_ref())),
            Property::new("contents", PropertyValue::beans(&self.contents)),
            Property::new("links", PropertyValue::beans(&self.links)),
            Property::new("enclosures", PropertyValue::beans(&self.enclosures)),
            Property::new("authors", PropertyValue::beans(&self.authors)),
            Property::new("contributors", PropertyValue::beans(&self.contributors)),
            Property::new("categories", PropertyValue::beans(&self.categories)),
            Property::new("updatedDate", self.updated_date),
            Property::new("source", PropertyValue::bean(self.source.as_deref())),
            Property::new("modules", module::modules_property(&self.modules)),
            Property::new("publishedDate", self.published_date()),
            Property::new("author", self.author()),
        ]
    }

    fn ignored_properties(&self) -> &'static [&'static str] {
        CONVENIENCE_PROPERTIES
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyndEntry {
    fn interface(&self) -> Interface {
        Interface::SyndEntry
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "uri" => self.uri = uri::normalize(value.into_text(name)?.as_deref()),
            "title" => self.title = value.into_bean(name)?,
            "link" => self.link = value.into_text(name)?,
            "description" => self.description = value.into_bean(name)?,
            "contents" => self.contents = value.into_beans(name)?,
            "links" => self.links = value.into_beans(name)?,
            "enclosures" => self.enclosures = value.into_beans(name)?,
            "authors" => self.authors = value.into_beans(name)?,
            "contributors" => self.contributors = value.into_beans(name)?,
            "categories" => self.categories = value.into_beans(name)?,
            "updatedDate" => self.updated_date = value.into_date(name)?,
            "source" => self.source = value.into_bean::<SyndFeed>(name)?.map(Box::new),
            "modules" => self.modules = value.into_modules(name)?,
            _ => return Err(SyndError::unknown_property("SyndEntry", name)),
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

bean_traits!(SyndEntry);
