//! Syndication module
//!
//! Reference: https://web.resource.org/rss/1.0/modules/syndication/

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use tracing::warn;

use super::{Module, ModuleGenerator, ModuleParser};
use crate::bean::{bean_traits, Bean, CopyFrom, CopyFromHelper, Interface, Property, PropertyType, Value};
use crate::date;
use crate::xml::Element;
use crate::{Result, SyndError};

/// Syndication namespace URI
pub const URI: &str = "http://purl.org/rss/1.0/modules/syndication/";

/// Conventional namespace prefix
pub const PREFIX: &str = "sy";

/// Period over which the channel is updated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum UpdatePeriod {
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl UpdatePeriod {
    /// Wire form of the period
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdatePeriod::Hourly => "hourly",
            UpdatePeriod::Daily => "daily",
            UpdatePeriod::Weekly => "weekly",
            UpdatePeriod::Monthly => "monthly",
            UpdatePeriod::Yearly => "yearly",
        }
    }
}

impl fmt::Display for UpdatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdatePeriod {
    type Err = SyndError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hourly" => Ok(UpdatePeriod::Hourly),
            "daily" => Ok(UpdatePeriod::Daily),
            "weekly" => Ok(UpdatePeriod::Weekly),
            "monthly" => Ok(UpdatePeriod::Monthly),
            "yearly" => Ok(UpdatePeriod::Yearly),
            other => Err(SyndError::InvalidPropertyValue {
                property: "updatePeriod".to_string(),
                message: format!("unknown update period '{}'", other),
            }),
        }
    }
}

/// Syndication hints for aggregators
///
/// # Examples
///
/// ```
/// use synd_rs::module::{SyModule, UpdatePeriod};
///
/// let sy = SyModule {
///     update_period: Some(UpdatePeriod::Hourly),
///     update_frequency: Some(2),
///     update_base: None,
/// };
/// assert_eq!(sy.update_period.unwrap().to_string(), "hourly");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SyModule {
    /// sy:updatePeriod
    pub update_period: Option<UpdatePeriod>,
    /// sy:updateFrequency, times per period
    pub update_frequency: Option<u32>,
    /// sy:updateBase
    pub update_base: Option<DateTime<Utc>>,
}

static COPY_FROM_HELPER: CopyFromHelper = CopyFromHelper::new(
    Interface::Module(URI),
    &[
        ("updatePeriod", PropertyType::Basic),
        ("updateFrequency", PropertyType::Basic),
        ("updateBase", PropertyType::Basic),
    ],
    &[],
);

impl Bean for SyModule {
    fn bean_name(&self) -> &'static str {
        "SyModule"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("updatePeriod", self.update_period.as_ref().map(UpdatePeriod::as_str)),
            Property::new("updateFrequency", self.update_frequency),
            Property::new("updateBase", self.update_base),
        ]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

impl CopyFrom for SyModule {
    fn interface(&self) -> Interface {
        Interface::Module(URI)
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        COPY_FROM_HELPER.copy(self, source)
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match name {
            "updatePeriod" => {
                self.update_period = value
                    .into_text(name)?
                    .map(|p| p.parse::<UpdatePeriod>())
                    .transpose()?
            }
            "updateFrequency" => {
                self.update_frequency = value
                    .into_integer(name)?
                    .map(|f| {
                        u32::try_from(f).map_err(|_| SyndError::InvalidPropertyValue {
                            property: name.to_string(),
                            message: format!("frequency {} out of range", f),
                        })
                    })
                    .transpose()?
            }
            "updateBase" => self.update_base = value.into_date(name)?,
            _ => return Err(SyndError::unknown_property("SyModule", name)),
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

impl Module for SyModule {
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

bean_traits!(SyModule);

/// Reads `sy:*` children
#[derive(Debug, Clone, Copy, Default)]
pub struct SyModuleParser;

impl ModuleParser for SyModuleParser {
    fn namespace_uri(&self) -> &'static str {
        URI
    }

    fn parse(&self, element: &Element) -> Option<Box<dyn Module>> {
        let update_period = element
            .child_text(Some(URI), "updatePeriod")
            .and_then(|p| match p.parse() {
                Ok(period) => Some(period),
                Err(e) => {
                    warn!("Ignoring sy:updatePeriod: {}", e);
                    None
                }
            });
        let update_frequency = element
            .child_text(Some(URI), "updateFrequency")
            .and_then(|f| match f.trim().parse() {
                Ok(frequency) => Some(frequency),
                Err(e) => {
                    warn!("Ignoring sy:updateFrequency '{}': {}", f, e);
                    None
                }
            });
        let update_base = element
            .child_text(Some(URI), "updateBase")
            .and_then(|d| date::parse_date_lenient(&d));

        if update_period.is_none() && update_frequency.is_none() && update_base.is_none() {
            return None;
        }

        Some(Box::new(SyModule {
            update_period,
            update_frequency,
            update_base,
        }))
    }
}

/// Writes `sy:*` children
#[derive(Debug, Clone, Copy, Default)]
pub struct SyModuleGenerator;

impl ModuleGenerator for SyModuleGenerator {
    fn namespace_uri(&self) -> &'static str {
        URI
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn generate(&self, module: &dyn Module, element: &mut Element) {
        let Some(sy) = module.as_any().downcast_ref::<SyModule>() else {
            return;
        };

        if let Some(period) = sy.update_period {
            element.push(Element::with_namespace(Some(PREFIX), "updatePeriod", URI).with_text(period.as_str()));
        }
        if let Some(frequency) = sy.update_frequency {
            element.push(
                Element::with_namespace(Some(PREFIX), "updateFrequency", URI)
                    .with_text(&frequency.to_string()),
            );
        }
        if let Some(base) = &sy.update_base {
            element.push(
                Element::with_namespace(Some(PREFIX), "updateBase", URI).with_text(&date::format_w3c(base)),
            );
        }
    }
}
