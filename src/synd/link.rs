use std::any::Any;

use crate::bean::{bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType, Value};
use crate::{Result, SyndError};

/// Relation assumed for links that do not declare one
pub const DEFAULT_REL: &str = "alternate";

/// A resource related to a feed or entry
#[derive(Debug, Clone)]
pub struct SyndLink {
    pub href: Option<String>,
    /// Link relation, `alternate` unless set otherwise
    pub rel: String,
    /// MIME type of the target
    pub link_type: Option<String>,
    pub hreflang: Option<String>,
    pub title: Option<String>,
    /// Size of the target in bytes, 0 when unknown
    pub length: i64,
}

impl Default for SyndLink {
    fn default() -> Self {
        Self {
            href: None,
            rel: DEFAULT_REL.to_string(),
            link_type: None,
            hreflang: None,
            title: None,
            length: 0,
        }
    }
}

impl SyndLink {
    /// An `alternate` link to `href`
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            ..Self::default()
        }
    }

    /// A link to `href` with the given relation
    pub fn with_rel(href: impl Into<String>, rel: impl Into<String>) -> Self {
        Self {
            href: Some(href.into()),
            rel: rel.into(),
            ..Self::default()
        }
    }
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndLink,
    &[
        ("href", PropertyType::Basic),
        ("rel", PropertyType::Basic),
        ("type", PropertyType::Basic),
        ("hreflang", PropertyType::Basic),
        ("title", PropertyType::Basic),
        ("length", PropertyType::Basic),
    ],
    &[],
);

impl Bean for SyndLink {
    fn bean_name(&self) -> &'static str {
        "SyndLink"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("href", self.href.as_deref()),
            Property::new("rel", self.rel.as_str()),
            Property::new("type", self.link_type.as_deref()),
            Property::new("hreflang", self.hreflang.as_deref()),
            Property::new("title", self.title.as_deref()),
            Property::new("length", self.length),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyndLink {
    fn interface(&self) -> Interface {
        Interface::SyndLink
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "href" => self.href = value.into_text(name)?,
            "rel" => {
                self.rel = value
                    .into_text(name)?
                    .unwrap_or_else(|| DEFAULT_REL.to_string())
            }
            "type" => self.link_type = value.into_text(name)?,
            "hreflang" => self.hreflang = value.into_text(name)?,
            "title" => self.title = value.into_text(name)?,
            "length" => self.length = value.into_integer(name)?.unwrap_or(0),
            _ => return Err(SyndError::unknown_property("SyndLink", name)),
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

bean_traits!(SyndLink);
