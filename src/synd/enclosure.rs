use std::any::Any;

use crate::bean::{bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType, Value};
use crate::{Result, SyndError};

/// Media attached to an entry
#[derive(Debug, Clone, Default)]
pub struct SyndEnclosure {
    pub url: Option<String>,
    /// Size in bytes, 0 when unknown
    pub length: i64,
    /// MIME type
    pub enclosure_type: Option<String>,
}

impl SyndEnclosure {
    pub fn new(url: impl Into<String>, length: i64, enclosure_type: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            length,
            enclosure_type: Some(enclosure_type.into()),
        }
    }
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndEnclosure,
    &[
        ("url", PropertyType::Basic),
        ("length", PropertyType::Basic),
        ("type", PropertyType::Basic),
    ],
    &[],
);

impl Bean for SyndEnclosure {
    fn bean_name(&self) -> &'static str {
        "SyndEnclosure"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("url", self.url.as_deref()),
            Property::new("length", self.length),
            Property::new("type", self.enclosure_type.as_deref()),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyndEnclosure {
    fn interface(&self) -> Interface {
        Interface::SyndEnclosure
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "url" => self.url = value.into_text(name)?,
            "length" => self.length = value.into_integer(name)?.unwrap_or(0),
            "type" => self.enclosure_type = value.into_text(name)?,
            _ => return Err(SyndError::unknown_property("SyndEnclosure", name)),
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

bean_traits!(SyndEnclosure);
