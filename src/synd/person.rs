use std::any::Any;

use crate::bean::{bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType, Value};
use crate::{Result, SyndError};

/// An author or contributor
#[derive(Debug, Clone, Default)]
pub struct SyndPerson {
    pub name: Option<String>,
    pub uri: Option<String>,
    pub email: Option<String>,
}

impl SyndPerson {
    /// A person known only by name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndPerson,
    &[
        ("name", PropertyType::Basic),
        ("uri", PropertyType::Basic),
        ("email", PropertyType::Basic),
    ],
    &[],
);

impl Bean for SyndPerson {
    fn bean_name(&self) -> &'static str {
        "SyndPerson"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("name", self.name.as_deref()),
            Property::new("uri", self.uri.as_deref()),
            Property::new("email", self.email.as_deref()),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyndPerson {
    fn interface(&self) -> Interface {
        Interface::SyndPerson
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "name" => self.name = value.into_text(name)?,
            "uri" => self.uri = value.into_text(name)?,
            "email" => self.email = value.into_text(name)?,
            _ => return Err(SyndError::unknown_property("SyndPerson", name)),
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

bean_traits!(SyndPerson);
