//! Generic bean engine
//!
//! Every feed element (synd beans, extension modules, Atom links) describes
//! itself through a property table instead of hand-written comparison code.
//! The routines in this module walk that table to provide:
//!
//! - structural equality ([`equals`]) over all declared, non-ignored properties
//! - a hash consistent with that equality ([`hash`], [`hash_code`])
//! - a `Type.property=value` dump ([`dump`])
//! - declaration-driven deep copy across implementations of the same
//!   interface ([`CopyFrom`], [`CopyFromHelper`])
//!
//! Deep clones are plain Rust [`Clone`]; extension modules are cloned through
//! [`Module::clone_module`](crate::module::Module::clone_module).
//!
//! # Example
//!
//! ```
//! use synd_rs::bean::{self, CopyFrom};
//! use synd_rs::synd::SyndContent;
//!
//! let original = SyndContent::html("<p>Hello</p>");
//!
//! let mut copy = SyndContent::default();
//! copy.copy_from(&original).unwrap();
//!
//! assert!(bean::equals(&original, &copy));
//! assert_eq!(bean::hash_code(&original), bean::hash_code(&copy));
//! ```

mod copy;
mod object;
mod value;

use std::fmt;

pub use self::copy::{copy, copy_module, CopyFrom, CopyFromHelper, Factory, Interface, PropertyType};
pub use self::object::{dump, equals, hash, hash_code, visible_properties};
pub use self::value::{PropertyValue, Value};

/// A feed element that exposes its state as a table of named properties
pub trait Bean: fmt::Debug {
    /// Type name used to compare beans and to prefix dumps
    fn bean_name(&self) -> &'static str;

    /// All declared properties, in declaration order
    fn properties(&self) -> Vec<Property<'_>>;

    /// Properties skipped by equality, hashing and dumps
    ///
    /// Used for convenience properties that are only views over another
    /// property (usually an extension module).
    fn ignored_properties(&self) -> &'static [&'static str] {
        &[]
    }

    /// This bean as a copy source, if it supports [`CopyFrom`]
    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        None
    }
}

/// A single named property value borrowed from a bean
#[derive(Debug, Clone)]
pub struct Property<'a> {
    /// Property name as declared in the bean's table
    pub name: &'static str,
    /// Current value
    pub value: PropertyValue<'a>,
}

impl<'a> Property<'a> {
    /// Create a property entry
    pub fn new(name: &'static str, value: impl Into<PropertyValue<'a>>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Implement `PartialEq`, `Eq`, `Hash` and `Display` through the bean engine
macro_rules! bean_traits {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PartialEq for $ty {
                fn eq(&self, other: &Self) -> bool {
                    $crate::bean::equals(self, other)
                }
            }

            impl Eq for $ty {}

            impl std::hash::Hash for $ty {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    $crate::bean::hash(self, state)
                }
            }

            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&$crate::bean::dump(self))
                }
            }
        )+
    };
}

pub(crate) use bean_traits;
