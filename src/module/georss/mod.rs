//! GeoRSS module (simple encoding)
//!
//! Reference: https://www.georss.org/simple.html

mod geometry;

use std::any::Any;

use tracing::warn;

use super::{Module, ModuleGenerator, ModuleParser};
use crate::bean::{bean_traits, Bean, CopyFrom, Interface, Property, PropertyValue, Value};
use crate::xml::Element;
use crate::{Result, SyndError};

pub use self::geometry::{
    Envelope, Geometry, LineString, LinearRing, Point, Polygon, Position, PositionList,
};

/// GeoRSS simple namespace URI
pub const URI: &str = "http://www.georss.org/georss";

/// Conventional namespace prefix
pub const PREFIX: &str = "georss";

const ELEMENTS: [&str; 4] = ["point", "line", "polygon", "box"];

/// Location of a feed or entry
///
/// # Examples
///
/// ```
/// use synd_rs::module::georss::{GeoRssModule, Geometry, Point, Position};
///
/// let module = GeoRssModule::new(Geometry::Point(Point::new(Position::new(45.256, -71.92))));
/// assert_eq!(module.geometry().map(|g| g.to_simple()).as_deref(), Some("45.256 -71.92"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GeoRssModule {
    geometry: Option<Geometry>,
}

impl GeoRssModule {
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry: Some(geometry),
        }
    }

    pub fn geometry(&self) -> Option<&Geometry> {
        self.geometry.as_ref()
    }

    pub fn set_geometry(&mut self, geometry: Option<Geometry>) {
        self.geometry = geometry;
    }
}

impl Bean for GeoRssModule {
    fn bean_name(&self) -> &'static str {
        "GeoRssModule"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![Property::new("geometry", PropertyValue::bean(self.geometry.as_ref()))]
    }

    fn as_copy_from(&self) -> Option<&dyn CopyFrom> {
        Some(self)
    }
}

// Geometries are plain values, so copying clones them instead of walking a
// property table.
impl CopyFrom for GeoRssModule {
    fn interface(&self) -> Interface {
        Interface::Module(URI)
    }

    fn copy_from(&mut self, source: &dyn CopyFrom) -> Result<()> {
        if source.interface() != self.interface() {
            return Err(SyndError::TypeMismatch {
                expected: self.interface().to_string(),
                found: source.interface().to_string(),
            });
        }
        let source = source
            .as_any()
            .downcast_ref::<GeoRssModule>()
            .ok_or_else(|| SyndError::NotCopyable(source.bean_name().to_string()))?;
        self.geometry = source.geometry.clone();
        Ok(())
    }

    fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        match (name, value) {
            ("geometry", Value::Null) => {
                self.geometry = None;
                Ok(())
            }
            ("geometry", other) => Err(SyndError::InvalidPropertyValue {
                property: name.to_string(),
                message: format!("geometries are assigned by value, not {:?}", other),
            }),
            _ => Err(SyndError::unknown_property("GeoRssModule", name)),
        }
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

impl Module for GeoRssModule {
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

bean_traits!(GeoRssModule);

/// Reads the first `georss:*` simple geometry
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoRssModuleParser;

impl ModuleParser for GeoRssModuleParser {
    fn namespace_uri(&self) -> &'static str {
        URI
    }

    fn parse(&self, element: &Element) -> Option<Box<dyn Module>> {
        let child = element.elements().find(|child| {
            child.namespace.as_deref() == Some(URI) && ELEMENTS.contains(&child.name.as_str())
        })?;

        match Geometry::parse_simple(&child.name, &child.text()) {
            Ok(geometry) => Some(Box::new(GeoRssModule::new(geometry))),
            Err(e) => {
                warn!("Ignoring georss:{}: {}", child.name, e);
                None
            }
        }
    }
}

/// Writes the geometry as a `georss:*` simple element
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoRssModuleGenerator;

impl ModuleGenerator for GeoRssModuleGenerator {
    fn namespace_uri(&self) -> &'static str {
        URI
    }

    fn prefix(&self) -> &'static str {
        PREFIX
    }

    fn generate(&self, module: &dyn Module, element: &mut Element) {
        let Some(geometry) = module
            .as_any()
            .downcast_ref::<GeoRssModule>()
            .and_then(GeoRssModule::geometry)
        else {
            return;
        };

        element.push(
            Element::with_namespace(Some(PREFIX), geometry.element_name(), URI)
                .with_text(&geometry.to_simple()),
        );
    }
}
