use std::any::Any;

use crate::bean::{bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType, Value};
use crate::{Result, SyndError};

/// Image representing a feed
#[derive(Debug, Clone, Default)]
pub struct SyndImage {
    pub title: Option<String>,
    pub url: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndImage,
    &[
        ("title", PropertyType::Basic),
        ("url", PropertyType::Basic),
        ("link", PropertyType::Basic),
        ("description", PropertyType::Basic),
        ("width", PropertyType::Basic),
        ("height", PropertyType::Basic),
    ],
    &[],
);

impl Bean for SyndImage {
    fn bean_name(&self) -> &'static str {
        "SyndImage"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("title", self.title.as_deref()),
            Property::new("url", self.url.as_deref()),
            Property::new("link", self.link.as_deref()),
            Property::new("description", self.description.as_deref()),
            Property::new("width", self.width),
            Property::new("height", self.height),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

fn dimension(name: &str, value: Value) -> Result<Option<u32>> {
    value
        .into_integer(name)?
        .map(|v| {
            u32::try_from(v).map_err(|_| SyndError::InvalidPropertyValue {
                property: name.to_string(),
                message: format!("{} is not a valid dimension", v),
            })
        })
        .transpose()
}

impl CopyFrom for SyndImage {
    fn interface(&self) -> Interface {
        Interface::SyndImage
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "title" => self.title = value.into_text(name)?,
            "url" => self.url = value.into_text(name)?,
            "link" => self.link = value.into_text(name)?,
            "description" => self.description = value.into_text(name)?,
            "width" => self.width = dimension(name, value)?,
            "height" => self.height = dimension(name, value)?,
            _ => return Err(SyndError::unknown_property("SyndImage", name)),
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

bean_traits!(SyndImage);
