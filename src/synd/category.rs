use std::any::Any;

use crate::bean::{bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType, Value};
use crate::module::DcSubject;
use crate::{Result, SyndError};

/// A category, optionally scoped by a taxonomy URI
#[derive(Debug, Clone, Default)]
pub struct SyndCategory {
    pub name: Option<String>,
    pub taxonomy_uri: Option<String>,
}

impl SyndCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            taxonomy_uri: None,
        }
    }

    pub fn with_taxonomy(name: impl Into<String>, taxonomy_uri: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            taxonomy_uri: Some(taxonomy_uri.into()),
        }
    }
}

impl From<&DcSubject> for SyndCategory {
    fn from(subject: &DcSubject) -> Self {
        Self {
            name: subject.value.clone(),
            taxonomy_uri: subject.taxonomy_uri.clone(),
        }
    }
}

impl From<&SyndCategory> for DcSubject {
    fn from(category: &SyndCategory) -> Self {
        DcSubject {
            taxonomy_uri: category.taxonomy_uri.clone(),
            value: category.name.clone(),
        }
    }
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndCategory,
    &[
        ("name", PropertyType::Basic),
        ("taxonomyUri", PropertyType::Basic),
    ],
    &[],
);

impl Bean for SyndCategory {
    fn bean_name(&self) -> &'static str {
        "SyndCategory"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("name", self.name.as_deref()),
            Property::new("taxonomyUri", self.taxonomy_uri.as_deref()),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyndCategory {
    fn interface(&self) -> Interface {
        Interface::SyndCategory
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "name" => self.name = value.into_text(name)?,
            "taxonomyUri" => self.taxonomy_uri = value.into_text(name)?,
            _ => return Err(SyndError::unknown_property("SyndCategory", name)),
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

bean_traits!(SyndCategory);
