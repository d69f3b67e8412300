//! Dublin Core module
//!
//! Reference: https://www.dublincore.org/specifications/dublin-core/dces/
//!
//! Every element is repeatable, so each one is stored as a list. The
//! single-valued accessors read the first value and replace the whole list.

use std::any::Any;

use chrono::{DateTime, Utc};

use super::{Module, ModuleGenerator, ModuleParser};
use crate::bean::{
    bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType,
    PropertyValue, Value,
};
use crate::date;
use crate::xml::Element;
use crate::{Result, SyndError};

/// Dublin Core elements namespace URI
pub const URI: &str = "http://purl.org/dc/elements/1.1/";

/// Conventional namespace prefix
pub const PREFIX: &str = "dc";

const RDF_URI: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
const TAXO_URI: &str = "http://purl.org/rss/1.0/modules/taxonomy/";

/// A Dublin Core subject, optionally qualified by a taxonomy
#[derive(Debug, Clone, Default)]
pub struct DcSubject {
    /// Taxonomy the value belongs to
    pub taxonomy_uri: Option<String>,
    /// Subject text
    pub value: Option<String>,
}

impl DcSubject {
    /// A subject without taxonomy
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            taxonomy_uri: None,
            value: Some(value.into()),
        }
    }

    /// A subject inside a taxonomy
    pub fn with_taxonomy(value: impl Into<String>, taxonomy_uri: impl Into<String>) -> Self {
        Self {
            taxonomy_uri: Some(taxonomy_uri.into()),
            value: Some(value.into()),
        }
    }
}

static SUBJECT_COPY_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::DcSubject,
    &[
        ("taxonomyUri", PropertyType::Basic),
        ("value", PropertyType::Basic),
    ],
    &[],
);

impl Bean for DcSubject {
    fn bean_name(&self) -> &'static str {
        "DcSubject"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("taxonomyUri", self.taxonomy_uri.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for DcSubject {
    fn interface(&self) -> Interface {
        Interface::DcSubject
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        SUBJECT_COPY_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "taxonomyUri" => self.taxonomy_uri = value.into_text(name)?,
            "value" => self.value = value.into_text(name)?,
            _ => return Err(SyndError::unknown_property("DcSubject", name)),
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

/// Dublin Core module
///
/// # Examples
///
/// ```
/// use synd_rs::module::DcModule;
///
/// let mut dc = DcModule::default();
/// dc.set_creator(Some("Alice"));
/// dc.creators.push("Bob".to_string());
///
/// assert_eq!(dc.creator(), Some("Alice"));
/// assert_eq!(dc.creators.len(), 2);
///
/// dc.set_creator(None);
/// assert!(dc.creators.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DcModule {
    /// dc:title
    pub titles: Vec<String>,
    /// dc:creator
    pub creators: Vec<String>,
    /// dc:subject
    pub subjects: Vec<DcSubject>,
    /// dc:description
    pub descriptions: Vec<String>,
    /// dc:publisher
    pub publishers: Vec<String>,
    /// dc:contributor
    pub contributors: Vec<String>,
    /// dc:date
    pub dates: Vec<DateTime<Utc>>,
    /// dc:type
    pub types: Vec<String>,
    /// dc:format
    pub formats: Vec<String>,
    /// dc:identifier
    pub identifiers: Vec<String>,
    /// dc:source
    pub sources: Vec<String>,
    /// dc:language
    pub languages: Vec<String>,
    /// dc:relation
    pub relations: Vec<String>,
    /// dc:coverage
    pub coverages: Vec<String>,
    /// dc:rights
    pub rights: Vec<String>,
}

fn first(values: &[String]) -> Option<&str> {
    values.first().map(String::as_str)
}

fn single(value: Option<&str>) -> Vec<String> {
    value.map(|v| vec![v.to_string()]).unwrap_or_default()
}

macro_rules! single_valued {
    ($($field:ident => $get:ident, $set:ident;)+) => {
        $(
            #[doc = concat!("First `", stringify!($field), "` value")]
            pub fn $get(&self) -> Option<&str> {
                first(&self.$field)
            }

            #[doc = concat!("Replace `", stringify!($field), "` with a single value, or clear it")]
            pub fn $set(&mut self, value: Option<&str>) {
                self.$field = single(value);
            }
        )+
    };
}

impl DcModule {
    single_valued! {
        titles => title, set_title;
        creators => creator, set_creator;
        descriptions => description, set_description;
        publishers => publisher, set_publisher;
        contributors => contributor, set_contributor;
        types => dc_type, set_dc_type;
        formats => format, set_format;
        identifiers => identifier, set_identifier;
        sources => source, set_source;
        languages => language, set_language;
        relations => relation, set_relation;
        coverages => coverage, set_coverage;
        rights => right, set_right;
    }

    /// First date
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.dates.first().copied()
    }

    /// Replace the dates with a single value, or clear them
    pub fn set_date(&mut self, date: Option<DateTime<Utc>>) {
        self.dates = date.into_iter().collect();
    }

    /// First subject
    pub fn subject(&self) -> Option<&DcSubject> {
        self.subjects.first()
    }

    /// Replace the subjects with a single value, or clear them
    pub fn set_subject(&mut self, subject: Option<DcSubject>) {
        self.subjects = subject.into_iter().collect();
    }

    /// Returns `true` when no element carries a value
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
            && self.creators.is_empty()
            && self.subjects.is_empty()
            && self.descriptions.is_empty()
            && self.publishers.is_empty()
            && self.contributors.is_empty()
            && self.dates.is_empty()
            && self.types.is_empty()
            && self.formats.is_empty()
            && self.identifiers.is_empty()
            && self.sources.is_empty()
            && self.languages.is_empty()
            && self.relations.is_empty()
            && self.coverages.is_empty()
            && self.rights.is_empty()
    }
}

fn new_subject() -> Box<dyn CopyFrom> {
    Box::new(DcSubject::default())
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::Module(URI),
    &[
        ("titles", PropertyType::Basic),
        ("creators", PropertyType::Basic),
        ("subjects", PropertyType::Bean(Interface::DcSubject)),
        ("descriptions", PropertyType::Basic),
        ("publishers", PropertyType::Basic),
        ("contributors", PropertyType::Basic),
        ("dates", PropertyType::Basic),
        ("types", PropertyType::Basic),
        ("formats", PropertyType::Basic),
        ("identifiers", PropertyType::Basic),
        ("sources", PropertyType::Basic),
        ("languages", PropertyType::Basic),
        ("relations", PropertyType::Basic),
        ("coverages", PropertyType::Basic),
        ("rights", PropertyType::Basic),
    ],
    &[(Interface::DcSubject, new_subject)],
);

impl Bean for DcModule {
    fn bean_name(&self) -> &'static str {
        "DcModule"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("titles", self.titles.as_slice()),
            Property::new("creators", self.creators.as_slice()),
            Property::new("subjects", PropertyValue::beans(&self.subjects)),
            Property::new("descriptions", self.descriptions.as_slice()),
            Property::new("publishers", self.publishers.as_slice()),
            Property::new("contributors", self.contributors.as_slice()),
            Property::new("dates", self.dates.as_slice()),
            Property::new("types", self.types.as_slice()),
            Property::new("formats", self.formats.as_slice()),
            Property::new("identifiers", self.identifiers.as_slice()),
            Property::new("sources", self.sources.as_slice()),
            Property::new("languages", self.languages.as_slice()),
            Property::new("relations", self.relations.as_slice()),
            Property::new("coverages", self.coverages.as_slice()),
            Property::new("rights", self.rights.as_slice()),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for DcModule {
    fn interface(&self) -> Interface {
        Interface::Module(URI)
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "titles" => self.titles = value.into_texts(name)?,
            "creators" => self.creators = value.into_texts(name)?,
            "subjects" => self.subjects = value.into_beans(name)?,
            "descriptions" => self.descriptions = value.into_texts(name)?,
            "publishers" => self.publishers = value.into_texts(name)?,
            "contributors" => self.contributors = value.into_texts(name)?,
            "dates" => self.dates = value.into_dates(name)?,
            "types" => self.types = value.into_texts(name)?,
            "formats" => self.formats = value.into_texts(name)?,
            "identifiers" => self.identifiers = value.into_texts(name)?,
            "sources" => self.sources = value.into_texts(name)?,
            "languages" => self.languages = value.into_texts(name)?,
            "relations" => self.relations = value.into_texts(name)?,
            "coverages" => self.coverages = value.into_texts(name)?,
            "rights" => self.rights = value.into_texts(name)?,
            _ => return Err(SyndError::unknown_property("DcModule", name)),
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

impl Module for DcModule {
    fn uri(&self) -> &str {
        URI
    }

    fn clone_module(&self) -> Box<dyn Module> {
        Box::new(self.clone())
    }

    fn new_module(&self) -> Box<dyn Module> {
        Box::new(Self::default())
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

bean_traits!(DcSubject, DcModule);

/// Reads `dc:*` children
#[derive(Debug, Clone, Copy, Default)]
pub struct DcModuleParser;

impl DcModuleParser {
    fn texts(element: &Element, name: &str) -> Vec<String> {
        element
            .children_named(Some(URI), name)
            .map(|e| e.text().trim().to_string())
            .filter(|t| !t.is_empty())
            .collect()
    }

    fn subject(element: &Element) -> Option<DcSubject> {
        // <dc:subject><taxo:topic rdf:about="..."/></dc:subject> or
        // <dc:subject><rdf:Description><taxo:taxonomy rdf:resource="..."/><rdf:value>..</rdf:value>
        if let Some(description) = element.child(Some(RDF_URI), "Description") {
            let taxonomy_uri = description
                .child(Some(TAXO_URI), "taxonomy")
                .and_then(|t| t.attribute("rdf:resource").or_else(|| t.attribute("resource")))
                .map(str::to_string);
            let value = description.child_text(Some(RDF_URI), "value");
            return Some(DcSubject {
                taxonomy_uri,
                value,
            });
        }

        let value = element.text().trim().to_string();
        if value.is_empty() {
            None
        } else {
            Some(DcSubject::new(value))
        }
    }
}

impl ModuleParser for DcModuleParser {
    fn namespace_uri(&self) -> &'static str {
        URI
    }

    fn parse(&self, element: &Element) -> Option<Box<dyn Module>> {
        let dc = DcModule {
            titles: Self::texts(element, "title"),
            creators: Self::texts(element, "creator"),
            subjects: element
                .children_named(Some(URI), "subject")
                .filter_map(Self::subject)
                .collect(),
            descriptions: Self::texts(element, "description"),
            publishers: Self::texts(element, "publisher"),
            contributors: Self::texts(element, "contributor"),
            dates: Self::texts(element, "date")
                .iter()
                .filter_map(|d| date::parse_date_lenient(d))
                .collect(),
            types: Self::texts(element, "type"),
            formats: Self::texts(element, "format"),
            identifiers: Self::texts(element, "identifier"),
            sources: Self::texts(element, "source"),
            languages: Self::texts(element, "language"),
            relations: Self::texts(element, "relation"),
            coverages: Self::texts(element, "coverage"),
            rights: Self::texts(element, "rights"),
        };

        if dc.is_empty() {
            None
        } else {
            Some(Box::new(dc))
        }
    }
}

/// Writes `dc:*` children
#[derive(Debug, Clone, Copy, Default)]
pub struct DcModuleGenerator;

impl DcModuleGenerator {
    fn texts(element: &mut Element, name: &str, values: &[String]) {
        for value in values {
            element.push(Element::with_namespace(Some(PREFIX), name, URI).with_text(value));
        }
    }
}

impl ModuleGenerator for DcModuleGenerator {
    fn namespace_uri(&self) -> &'static str {
        URI
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn generate(&self, module: &dyn Module, element: &mut Element) {
        let Some(dc) = module.as_any().downcast_ref::<DcModule>() else {
            return;
        };

        Self::texts(element, "title", &dc.titles);
        Self::texts(element, "creator", &dc.creators);
        for subject in &dc.subjects {
            let mut subject_element = Element::with_namespace(Some(PREFIX), "subject", URI);
            match &subject.taxonomy_uri {
                Some(taxonomy_uri) => {
                    let mut description =
                        Element::with_namespace(Some("rdf"), "Description", RDF_URI);
                    let mut taxonomy = Element::with_namespace(Some("taxo"), "taxonomy", TAXO_URI);
                    taxonomy.set_attribute("rdf:resource", taxonomy_uri);
                    description.push(taxonomy);
                    if let Some(value) = &subject.value {
                        description
                            .push(Element::with_namespace(Some("rdf"), "value", RDF_URI).with_text(value));
                    }
                    subject_element.push(description);
                }
                None => {
                    if let Some(value) = &subject.value {
                        subject_element.push_text(value);
                    }
                }
            }
            element.push(subject_element);
        }
        Self::texts(element, "description", &dc.descriptions);
        Self::texts(element, "publisher", &dc.publishers);
        Self::texts(element, "contributor", &dc.contributors);
        for value in &dc.dates {
            element.push(
                Element::with_namespace(Some(PREFIX), "date", URI).with_text(&date::format_w3c(value)),
            );
        }
        Self::texts(element, "type", &dc.types);
        Self::texts(element, "format", &dc.formats);
        Self::texts(element, "identifier", &dc.identifiers);
        Self::texts(element, "source", &dc.sources);
        Self::texts(element, "language", &dc.languages);
        Self::texts(element, "relation", &dc.relations);
        Self::texts(element, "coverage", &dc.coverages);
        Self::texts(element, "rights", &dc.rights);
    }
}
