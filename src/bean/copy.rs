//! Declaration-driven deep copy between implementations of one interface

use std::any::Any;
use std::fmt;

use tracing::trace;

use super::{Bean, PropertyValue, Value};
use crate::module::{self, Module};
use crate::{Result, SyndError};

/// Capability interfaces beans can be copied across
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interface {
    /// Normalized feed
    SyndFeed,
    /// Normalized entry
    SyndEntry,
    /// Text construct (type, mode, value)
    SyndContent,
    /// Related resource
    SyndLink,
    /// Author or contributor
    SyndPerson,
    /// Category with taxonomy
    SyndCategory,
    /// Enclosed media
    SyndEnclosure,
    /// Feed image
    SyndImage,
    /// Dublin Core subject
    DcSubject,
    /// Extension module, identified by namespace URI
    Module(&'static str),
}

impl fmt::Display for Interface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interface::Module(uri) => write!(f, "Module({})", uri),
            other => write!(f, "{:?}", other),
        }
    }
}

/// Declared type of a copyable property
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyType {
    /// Text, numbers, dates and lists of them; copied by value
    Basic,
    /// A bean (or list of beans) implementing the given interface
    Bean(Interface),
    /// A list of extension modules
    Modules,
}

/// Constructor for a registered implementation of an interface
pub type Factory = fn() -> Box<dyn CopyFrom>;

/// A bean that can deep-copy its declared properties from any other bean
/// implementing the same interface
pub trait CopyFrom: Bean {
    /// Interface shared by all implementations this bean copies from
    fn interface(&self) -> Interface;

    /// Replace the declared properties of `self` with deep copies of `source`'s
    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()>;

    /// Assign a single declared property
    fn set_property(&mut self, name: &str, value: Value) -> Result<()>;

    /// A default-constructed bean of the same concrete type
    fn new_instance(&self) -> Box<dyn CopyFrom>;

    /// Downcast access
    fn as_any(&self) -> &dyn Any;

    /// Owned downcast access
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// Property table plus implementation registry for one interface
///
/// For each declared property the helper reads the source value, deep-copies
/// it and assigns it on the target. Bean-typed values are copied into a new
/// instance of the registered implementation for their interface (or of the
/// source's own type when none is registered); modules are recreated through
/// [`module::create_module`].
///
/// # Examples
///
/// ```
/// use synd_rs::bean::{CopyFrom, CopyFromHelper, Interface};
/// use synd_rs::synd::{SyndContent, SyndLink};
/// use synd_rs::SyndError;
///
/// let link = SyndLink::new("http://example.com/");
/// let mut content = SyndContent::default();
///
/// // A link is not a content construct
/// let err = content.copy_from(&link).unwrap_err();
/// assert!(matches!(err, SyndError::TypeMismatch { .. }));
/// ```
#[derive(Debug)]
pub struct CopyFromHelper {
    interface: Interface,
    properties: &'static [(&'static str, PropertyType)],
    implementations: &'static [(Interface, Factory)],
}

impl CopyFromHelper {
    /// Create a helper for `interface`
    pub const fn new(
        interface: Interface,
        properties: &'static [(&'static str, PropertyType)],
        implementations: &'static [(Interface, Factory)],
    ) -> Self {
        Self {
            interface,
            properties,
            implementations,
        }
    }

    /// Interface this helper copies
    pub fn interface(&self) -> Interface {
        self.interface
    }

    /// Declared property table
    pub fn properties(&self) -> &'static [(&'static str, PropertyType)] {
        self.properties
    }

    /// Copy every declared property from `source` into `target`
    ///
    /// Fails with [`SyndError::TypeMismatch`] when `source` implements another
    /// interface.
    pub fn copy(&self, target: &mut dyn CopyFrom, source: &dyn CopyFrom) -> Result<()> {
        if source.interface() != self.interface {
            return Err(SyndError::TypeMismatch {
                expected: self.interface.to_string(),
                found: source.interface().to_string(),
            });
        }

        let values = source.properties();
        for (name, declared) in self.properties {
            let Some(property) = values.iter().find(|p| p.name == *name) else {
                trace!("{} does not expose {}, skipping", source.bean_name(), name);
                continue;
            };

            let value = self.copy_value(&property.value, *declared)?;
            target.set_property(name, value)?;
        }

        Ok(())
    }

    fn copy_value(&self, value: &PropertyValue<'_>, declared: PropertyType) -> Result<Value> {
        Ok(match value {
            PropertyValue::Null => Value::Null,
            PropertyValue::Bool(b) => Value::Bool(*b),
            PropertyValue::Integer(i) => Value::Integer(*i),
            PropertyValue::Float(f) => Value::Float(*f),
            PropertyValue::Text(t) => Value::Text(t.to_string()),
            PropertyValue::Date(d) => Value::Date(*d),
            PropertyValue::List(items) => Value::List(
                items
                    .iter()
                    .map(|item| self.copy_value(item, declared))
                    .collect::<Result<Vec<_>>>()?,
            ),
            PropertyValue::Bean(bean) => {
                let source = bean
                    .as_copy_from()
                    .ok_or_else(|| SyndError::NotCopyable(bean.bean_name().to_string()))?;

                if let PropertyType::Bean(expected) = declared {
                    if source.interface() != expected {
                        return Err(SyndError::TypeMismatch {
                            expected: expected.to_string(),
                            found: source.interface().to_string(),
                        });
                    }
                }

                let mut target = self
                    .create_instance(source.interface())
                    .unwrap_or_else(|| source.new_instance());
                target.copy_from(source)?;
                Value::Bean(target)
            }
            PropertyValue::Module(module) => Value::Module(copy_module(*module)?),
        })
    }

    fn create_instance(&self, interface: Interface) -> Option<Box<dyn CopyFrom>> {
        self.implementations
            .iter()
            .find(|(registered, _)| *registered == interface)
            .map(|(_, factory)| factory())
    }
}

/// Deep copy of a module into a fresh instance of the registered implementation
/// for its URI, or of the source's own type for unregistered URIs
pub fn copy_module(source: &dyn Module) -> Result<Box<dyn Module>> {
    let mut target = module::create_module(source.uri()).unwrap_or_else(|| source.new_module());
    target.copy_from(source)?;
    Ok(target)
}

/// Deep copy of `source` into a new default-constructed `T`
///
/// # Examples
///
/// ```
/// use synd_rs::bean;
/// use synd_rs::synd::SyndEntry;
///
/// let mut entry = SyndEntry::new();
/// entry.set_title(Some("Hello"));
/// entry.set_author(Some("Alice"));
///
/// let copy: SyndEntry = bean::copy(&entry).unwrap();
/// assert_eq!(copy, entry);
/// assert_eq!(copy.author(), "Alice");
/// ```
pub fn copy<T: CopyFrom + Default>(source: &dyn CopyFrom) -> Result<T> {
    let mut target = T::default();
    target.copy_from(source)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::dc::DcModule;
    use crate::synd::{SyndContent, SyndEntry, SyndLink};

    #[test]
    fn test_interface_display() {
        assert_eq!(Interface::SyndEntry.to_string(), "SyndEntry");
        assert_eq!(
            Interface::Module("http://purl.org/dc/elements/1.1/").to_string(),
            "Module(http://purl.org/dc/elements/1.1/)"
        );
    }

    #[test]
    fn test_copy_rejects_other_interface() {
        let link = SyndLink::new("http://example.com/");
        let mut entry = SyndEntry::new();

        match entry.copy_from(&link) {
            Err(SyndError::TypeMismatch { expected, found }) => {
                assert_eq!(expected, "SyndEntry");
                assert_eq!(found, "SyndLink");
            }
            other => panic!("Expected type mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_copy_module_uses_registry() {
        let mut dc = DcModule::default();
        dc.set_creator(Some("Alice"));

        let copy = copy_module(&dc).unwrap();
        let copy = copy.as_any().downcast_ref::<DcModule>().unwrap();
        assert_eq!(copy.creator(), Some("Alice"));
    }

    #[test]
    fn test_copy_produces_independent_beans() {
        let mut entry = SyndEntry::new();
        entry.set_description(Some(SyndContent::text("original")));

        let mut copy: SyndEntry = copy(&entry).unwrap();
        if let Some(description) = copy.description_mut() {
            description.value = Some("changed".to_string());
        }

        assert_eq!(
            entry.description().and_then(|d| d.value.as_deref()),
            Some("original")
        );
    }
}
