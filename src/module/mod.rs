//! Extension modules
//!
//! A module is a namespaced bag of extension fields attached to a feed or an
//! entry, such as Dublin Core metadata. Owners keep at most one module per
//! namespace URI; lookups by URI never fail for the modules this crate knows
//! how to build, a default instance is created instead.
//!
//! Each module namespace also ships a [`ModuleParser`] and a
//! [`ModuleGenerator`] used by the RSS and Atom readers and writers.

pub mod dc;
pub mod georss;
pub mod sy;

use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use tracing::{trace, warn};

use crate::bean::{self, CopyFrom, PropertyValue};
use crate::xml::Element;

pub use self::dc::{DcModule, DcSubject};
pub use self::georss::GeoRssModule;
pub use self::sy::{SyModule, UpdatePeriod};

/// An extension module attached to a feed or entry
pub trait Module: CopyFrom + Send + Sync {
    /// Namespace URI identifying the module
    fn uri(&self) -> &str;

    /// Deep clone behind a box
    fn clone_module(&self) -> Box<dyn Module>;

    /// A default-constructed module of the same concrete type
    fn new_module(&self) -> Box<dyn Module>;

    /// Mutable downcast access
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl Clone for Box<dyn Module> {
    fn clone(&self) -> Self {
        self.clone_module()
    }
}

impl PartialEq for dyn Module {
    fn eq(&self, other: &Self) -> bool {
        bean::equals(self, other)
    }
}

impl Eq for dyn Module {}

impl Hash for dyn Module {
    fn hash<H: Hasher>(&self, state: &mut H) {
        bean::hash(self, state)
    }
}

/// Construct an empty module for a known namespace URI
///
/// Returns `None` for namespaces this crate has no implementation for.
///
/// # Examples
///
/// ```
/// use synd_rs::module::{self, dc};
///
/// let module = module::create_module(dc::URI).unwrap();
/// assert_eq!(module.uri(), dc::URI);
/// assert!(module::create_module("http://example.com/unknown").is_none());
/// ```
pub fn create_module(uri: &str) -> Option<Box<dyn Module>> {
    match uri {
        dc::URI => Some(Box::new(DcModule::default())),
        sy::URI => Some(Box::new(SyModule::default())),
        georss::URI => Some(Box::new(GeoRssModule::default())),
        _ => None,
    }
}

/// The module with the given URI, if present
pub fn find_module<'a>(modules: &'a [Box<dyn Module>], uri: &str) -> Option<&'a dyn Module> {
    modules.iter().find(|m| m.uri() == uri).map(|m| m.as_ref())
}

/// Mutable access to the module with the given URI, if present
pub fn find_module_mut<'a>(
    modules: &'a mut [Box<dyn Module>],
    uri: &str,
) -> Option<&'a mut (dyn Module + 'static)> {
    modules.iter_mut().find(|m| m.uri() == uri).map(|m| m.as_mut())
}

/// The module with the given URI, creating a default one for known URIs
pub fn get_or_create_module<'a>(
    modules: &'a mut Vec<Box<dyn Module>>,
    uri: &str,
) -> Option<&'a mut (dyn Module + 'static)> {
    if !modules.iter().any(|m| m.uri() == uri) {
        if let Some(module) = create_module(uri) {
            trace!("Creating default module for {}", uri);
            modules.push(module);
        }
    }
    find_module_mut(modules, uri)
}

/// The module with the given URI as concrete type `T`, if present
pub fn module_of<'a, T: Module + 'static>(modules: &'a [Box<dyn Module>], uri: &str) -> Option<&'a T> {
    find_module(modules, uri).and_then(|m| m.as_any().downcast_ref::<T>())
}

/// The module with the given URI as concrete type `T`, created if absent
///
/// A module registered under the URI with another concrete type is replaced by
/// a `T` copied from it.
pub fn ensure_module<'a, T: Module + Default + 'static>(
    modules: &'a mut Vec<Box<dyn Module>>,
    uri: &str,
) -> &'a mut T {
    let index = match modules.iter().position(|m| m.uri() == uri) {
        Some(index) => index,
        None => {
            modules.push(Box::new(T::default()));
            modules.len() - 1
        }
    };

    if !modules[index].as_any().is::<T>() {
        let mut typed = T::default();
        if let Err(e) = typed.copy_from(modules[index].as_ref()) {
            warn!("Replacing module {} with an empty one: {}", uri, e);
        }
        modules[index] = Box::new(typed);
    }

    modules[index]
        .as_any_mut()
        .downcast_mut::<T>()
        .expect("BUG: module at index was just checked or replaced with a T")
}

static EMPTY_DC: LazyLock<DcModule> = LazyLock::new(DcModule::default);
static EMPTY_SY: LazyLock<SyModule> = LazyLock::new(SyModule::default);
static EMPTY_GEORSS: LazyLock<GeoRssModule> = LazyLock::new(GeoRssModule::default);

/// Shared empty instance of a known module, for read-only lookups
pub(crate) fn default_module(uri: &str) -> Option<&'static dyn Module> {
    match uri {
        dc::URI => Some(&*EMPTY_DC),
        sy::URI => Some(&*EMPTY_SY),
        georss::URI => Some(&*EMPTY_GEORSS),
        _ => None,
    }
}

/// The module with the given URI, or a shared empty one for known URIs
pub fn module_or_default<'a>(modules: &'a [Box<dyn Module>], uri: &str) -> Option<&'a dyn Module> {
    find_module(modules, uri).or_else(|| default_module(uri))
}

/// Dublin Core module of an owner, or a shared empty one when it has none
pub(crate) fn dc_or_default(modules: &[Box<dyn Module>]) -> &DcModule {
    module_of::<DcModule>(modules, dc::URI).unwrap_or(&EMPTY_DC)
}

/// Bean view of an owner's module list
///
/// Modules are ordered by URI and a missing Dublin Core module reads as an
/// empty one, so owners that only differ by a lazily created DC module or by
/// module order compare equal.
pub(crate) fn modules_property(modules: &[Box<dyn Module>]) -> PropertyValue<'_> {
    let mut views: Vec<&dyn Module> = modules.iter().map(|m| m.as_ref()).collect();
    if !views.iter().any(|m| m.uri() == dc::URI) {
        views.push(&*EMPTY_DC);
    }
    views.sort_by(|a, b| a.uri().cmp(b.uri()));
    PropertyValue::List(views.into_iter().map(PropertyValue::Module).collect())
}

/// Reads one module namespace out of a feed, channel, item or entry element
pub trait ModuleParser: Send + Sync {
    /// Namespace URI handled by this parser
    fn namespace_uri(&self) -> &'static str;

    /// Build the module from the owner's children in this namespace
    ///
    /// Returns `None` when the element carries nothing for this namespace.
    fn parse(&self, element: &Element) -> Option<Box<dyn Module>>;
}

/// Writes one module namespace into a feed, channel, item or entry element
pub trait ModuleGenerator: Send + Sync {
    /// Namespace URI handled by this generator
    fn namespace_uri(&self) -> &'static str;

    /// Preferred namespace prefix
    fn prefix(&self) -> &'static str;

    /// Append the module's elements to `element`
    fn generate(&self, module: &dyn Module, element: &mut Element);
}

static MODULE_PARSERS: &[&dyn ModuleParser] = &[
    &dc::DcModuleParser,
    &sy::SyModuleParser,
    &georss::GeoRssModuleParser,
];

static MODULE_GENERATORS: &[&dyn ModuleGenerator] = &[
    &dc::DcModuleGenerator,
    &sy::SyModuleGenerator,
    &georss::GeoRssModuleGenerator,
];

/// Returns `true` for namespaces handled by a registered module parser
pub fn is_module_namespace(namespace: &str) -> bool {
    MODULE_PARSERS.iter().any(|p| p.namespace_uri() == namespace)
}

/// Run every registered module parser over `element`
pub fn parse_modules(element: &Element) -> Vec<Box<dyn Module>> {
    let mut modules = Vec::new();
    for parser in MODULE_PARSERS {
        let uri = parser.namespace_uri();
        let present = element
            .elements()
            .any(|child| child.namespace.as_deref() == Some(uri));
        if !present {
            continue;
        }
        match parser.parse(element) {
            Some(module) => modules.push(module),
            None => trace!("No {} module content in <{}>", uri, element.name),
        }
    }
    modules
}

/// Append every module that has a registered generator to `element`
pub fn generate_modules(modules: &[Box<dyn Module>], element: &mut Element) {
    for module in modules {
        match MODULE_GENERATORS
            .iter()
            .find(|g| g.namespace_uri() == module.uri())
        {
            Some(generator) => generator.generate(module.as_ref(), element),
            None => trace!("No generator for module {}", module.uri()),
        }
    }
}

/// Preferred prefix for a module namespace
pub fn prefix_for(namespace: &str) -> Option<&'static str> {
    MODULE_GENERATORS
        .iter()
        .find(|g| g.namespace_uri() == namespace)
        .map(|g| g.prefix())
}
