use std::any::Any;

use crate::bean::{bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType, Value};
use crate::{Result, SyndError};

/// MIME type assumed when a content construct does not name one
pub const DEFAULT_TYPE: &str = "text/plain";

/// A text construct: MIME type, encoding mode and value
///
/// # Examples
///
/// ```
/// use synd_rs::synd::SyndContent;
///
/// let plain = SyndContent::default();
/// assert_eq!(plain.content_type(), "text/plain");
///
/// let html = SyndContent::html("<b>hi</b>");
/// assert_eq!(html.content_type(), "text/html");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyndContent {
    /// MIME type as set, see [`content_type`](Self::content_type)
    pub content_type: Option<String>,
    /// Atom 0.3 encoding mode (`xml`, `escaped`, `base64`)
    pub mode: Option<String>,
    pub value: Option<String>,
}

impl SyndContent {
    /// Plain text content
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            content_type: Some(DEFAULT_TYPE.to_string()),
            mode: None,
            value: Some(value.into()),
        }
    }

    /// HTML content
    pub fn html(value: impl Into<String>) -> Self {
        Self {
            content_type: Some("text/html".to_string()),
            mode: None,
            value: Some(value.into()),
        }
    }

    /// Content with an explicit MIME type
    pub fn with_type(content_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            content_type: Some(content_type.into()),
            mode: None,
            value: Some(value.into()),
        }
    }

    /// MIME type, `text/plain` when unset
    pub fn content_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_TYPE)
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::SyndContent,
    &[
        ("type", PropertyType::Basic),
        ("mode", PropertyType::Basic),
        ("value", PropertyType::Basic),
    ],
    &[],
);

impl Bean for SyndContent {
    fn bean_name(&self) -> &'static str {
        "SyndContent"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("type", self.content_type.as_deref()),
            Property::new("mode", self.mode.as_deref()),
            Property::new("value", self.value.as_deref()),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyndContent {
    fn interface(&self) -> Interface {
        Interface::SyndContent
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "type" => self.content_type = value.into_text(name)?,
            "mode" => self.mode = value.into_text(name)?,
            "value" => self.value = value.into_text(name)?,
            _ => return Err(SyndError::unknown_property("SyndContent", name)),
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

bean_traits!(SyndContent);
