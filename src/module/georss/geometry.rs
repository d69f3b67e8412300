//! GeoRSS geometry value objects
//!
//! Geometries own their coordinates. Accessors for optional parts return a
//! shared empty value instead of `None`, so an unset position compares equal
//! to a default one.

use crate::bean::{bean_traits, Bean, Property, PropertyValue};
use crate::{Result, SyndError};

/// A WGS84 coordinate
#[derive(Debug, Clone, Copy, Default)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl Position {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Bean for Position {
    fn bean_name(&self) -> &'static str {
        "Position"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("latitude", self.latitude),
            Property::new("longitude", self.longitude),
        ]
    }
}

/// An ordered list of positions
#[derive(Debug, Clone, Default)]
pub struct PositionList {
    positions: Vec<Position>,
}

impl PositionList {
    pub const fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Append a coordinate
    pub fn add(&mut self, latitude: f64, longitude: f64) {
        self.positions.push(Position::new(latitude, longitude));
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Position> {
        self.positions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Position> {
        self.positions.iter()
    }
}

impl FromIterator<Position> for PositionList {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().collect(),
        }
    }
}

impl Bean for PositionList {
    fn bean_name(&self) -> &'static str {
        "PositionList"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![Property::new("positions", PropertyValue::beans(&self.positions))]
    }
}

static ORIGIN: Position = Position::new(0.0, 0.0);
static EMPTY_POSITIONS: PositionList = PositionList::new();

/// A single location
///
/// # Examples
///
/// ```
/// use synd_rs::module::georss::{Point, Position};
///
/// let unset = Point::default();
/// assert_eq!(unset.position().latitude, 0.0);
/// assert_eq!(unset, Point::new(Position::new(0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Point {
    position: Option<Position>,
}

impl Point {
    pub fn new(position: Position) -> Self {
        Self {
            position: Some(position),
        }
    }

    /// The location, or the origin when unset
    pub fn position(&self) -> &Position {
        self.position.as_ref().unwrap_or(&ORIGIN)
    }

    /// Mutable location, created on first access
    pub fn position_mut(&mut self) -> &mut Position {
        self.position.get_or_insert_with(Position::default)
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        self.position = position;
    }
}

impl Bean for Point {
    fn bean_name(&self) -> &'static str {
        "Point"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![Property::new("position", PropertyValue::Bean(self.position()))]
    }
}

/// A closed ring of positions, the boundary of a polygon
#[derive(Debug, Clone, Default)]
pub struct LinearRing {
    position_list: Option<PositionList>,
}

impl LinearRing {
    pub fn new(position_list: PositionList) -> Self {
        Self {
            position_list: Some(position_list),
        }
    }

    /// The ring's positions, empty when unset
    pub fn position_list(&self) -> &PositionList {
        self.position_list.as_ref().unwrap_or(&EMPTY_POSITIONS)
    }

    /// Mutable positions, created on first access
    pub fn position_list_mut(&mut self) -> &mut PositionList {
        self.position_list.get_or_insert_with(PositionList::new)
    }

    pub fn set_position_list(&mut self, position_list: Option<PositionList>) {
        self.position_list = position_list;
    }
}

impl Bean for LinearRing {
    fn bean_name(&self) -> &'static str {
        "LinearRing"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![Property::new("positionList", PropertyValue::Bean(self.position_list()))]
    }
}

/// An open path
#[derive(Debug, Clone, Default)]
pub struct LineString {
    pub position_list: PositionList,
}

impl Bean for LineString {
    fn bean_name(&self) -> &'static str {
        "LineString"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![Property::new("positionList", PropertyValue::Bean(&self.position_list))]
    }
}

/// An area bounded by an exterior ring, with optional holes
#[derive(Debug, Clone, Default)]
pub struct Polygon {
    pub exterior: LinearRing,
    pub interior: Vec<LinearRing>,
}

impl Bean for Polygon {
    fn bean_name(&self) -> &'static str {
        "Polygon"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("exterior", PropertyValue::Bean(&self.exterior)),
            Property::new("interior", PropertyValue::beans(&self.interior)),
        ]
    }
}

/// A bounding box
#[derive(Debug, Clone, Copy, Default)]
pub struct Envelope {
    pub min_latitude: f64,
    pub min_longitude: f64,
    pub max_latitude: f64,
    pub max_longitude: f64,
}

impl Bean for Envelope {
    fn bean_name(&self) -> &'static str {
        "Envelope"
    }

    fn properties(&self) -> Vec<Property<'_>> {
        vec![
            Property::new("minLatitude", self.min_latitude),
            Property::new("minLongitude", self.min_longitude),
            Property::new("maxLatitude", self.max_latitude),
            Property::new("maxLongitude", self.max_longitude),
        ]
    }
}

/// Any geometry a GeoRSS module can carry
#[derive(Debug, Clone)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    Envelope(Envelope),
}

impl Geometry {
    fn inner(&self) -> &dyn Bean {
        match self {
            Geometry::Point(g) => g,
            Geometry::LineString(g) => g,
            Geometry::Polygon(g) => g,
            Geometry::Envelope(g) => g,
        }
    }

    /// Simple-encoding element name (`point`, `line`, `polygon`, `box`)
    pub fn element_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "point",
            Geometry::LineString(_) => "line",
            Geometry::Polygon(_) => "polygon",
            Geometry::Envelope(_) => "box",
        }
    }

    /// Parse the text of a simple-encoding element
    ///
    /// # Examples
    ///
    /// ```
    /// use synd_rs::module::georss::Geometry;
    ///
    /// let geometry = Geometry::parse_simple("point", "45.256 -71.92").unwrap();
    /// let Geometry::Point(point) = geometry else { panic!() };
    /// assert_eq!(point.position().longitude, -71.92);
    ///
    /// assert!(Geometry::parse_simple("line", "45.256").is_err());
    /// ```
    pub fn parse_simple(name: &str, text: &str) -> Result<Self> {
        let numbers = text
            .split_whitespace()
            .map(|n| {
                n.parse::<f64>()
                    .map_err(|_| SyndError::InvalidGeometry(format!("'{}' is not a number", n)))
            })
            .collect::<Result<Vec<f64>>>()?;

        if numbers.is_empty() || numbers.len() % 2 != 0 {
            return Err(SyndError::InvalidGeometry(format!(
                "{} needs latitude/longitude pairs, got {} values",
                name,
                numbers.len()
            )));
        }

        let positions: PositionList = numbers
            .chunks_exact(2)
            .map(|pair| Position::new(pair[0], pair[1]))
            .collect();

        match name {
            "point" if positions.len() == 1 => {
                Ok(Geometry::Point(Point::new(positions.get(0).copied().unwrap_or_default())))
            }
            "line" if positions.len() >= 2 => Ok(Geometry::LineString(LineString {
                position_list: positions,
            })),
            "polygon" if positions.len() >= 4 => Ok(Geometry::Polygon(Polygon {
                exterior: LinearRing::new(positions),
                interior: Vec::new(),
            })),
            "box" if positions.len() == 2 => Ok(Geometry::Envelope(Envelope {
                min_latitude: numbers[0],
                min_longitude: numbers[1],
                max_latitude: numbers[2],
                max_longitude: numbers[3],
            })),
            "point" | "line" | "polygon" | "box" => Err(SyndError::InvalidGeometry(format!(
                "wrong number of positions for {}: {}",
                name,
                positions.len()
            ))),
            other => Err(SyndError::InvalidGeometry(format!("unknown geometry '{}'", other))),
        }
    }

    /// Text of the simple-encoding element
    pub fn to_simple(&self) -> String {
        let join = |list: &PositionList| {
            list.iter()
                .map(|p| format!("{} {}", p.latitude, p.longitude))
                .collect::<Vec<_>>()
                .join(" ")
        };

        match self {
            Geometry::Point(point) => {
                let p = point.position();
                format!("{} {}", p.latitude, p.longitude)
            }
            Geometry::LineString(line) => join(&line.position_list),
            Geometry::Polygon(polygon) => join(polygon.exterior.position_list()),
            Geometry::Envelope(e) => format!(
                "{} {} {} {}",
                e.min_latitude, e.min_longitude, e.max_latitude, e.max_longitude
            ),
        }
    }
}

impl Bean for Geometry {
    fn bean_name(&self) -> &'static str {
        self.inner().bean_name()
    }

    fn properties(&self) -> Vec<Property<'_>> {
        self.inner().properties()
    }
}

bean_traits!(Position, PositionList, Point, LinearRing, LineString, Polygon, Envelope, Geometry);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_ring_lazy_list() {
        let mut ring = LinearRing::default();
        assert!(ring.position_list().is_empty());
        assert_eq!(ring, LinearRing::new(PositionList::new()));

        ring.position_list_mut().add(1.0, 2.0);
        assert_eq!(ring.position_list().len(), 1);
        assert_ne!(ring, LinearRing::default());
    }

    #[test]
    fn test_point_lazy_position() {
        let mut point = Point::default();
        point.position_mut().latitude = 10.0;
        assert_eq!(point.position().latitude, 10.0);
        assert_eq!(point.position().longitude, 0.0);
    }

    #[test]
    fn test_parse_line() {
        let geometry = Geometry::parse_simple("line", "45.256 -110.45 46.46 -109.48 43.84 -109.86").unwrap();
        match &geometry {
            Geometry::LineString(line) => {
                assert_eq!(line.position_list.len(), 3);
                assert_eq!(line.position_list.get(2).map(|p| p.latitude), Some(43.84));
            }
            other => panic!("Expected line, got {:?}", other),
        }
        assert_eq!(geometry.to_simple(), "45.256 -110.45 46.46 -109.48 43.84 -109.86");
    }

    #[test]
    fn test_parse_box() {
        let geometry = Geometry::parse_simple("box", "42.943 -71.032 43.039 -69.856").unwrap();
        match geometry {
            Geometry::Envelope(e) => {
                assert_eq!(e.min_latitude, 42.943);
                assert_eq!(e.max_longitude, -69.856);
            }
            other => panic!("Expected box, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Geometry::parse_simple("point", "north west"),
            Err(SyndError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Geometry::parse_simple("polygon", "1 2 3 4"),
            Err(SyndError::InvalidGeometry(_))
        ));
        assert!(matches!(
            Geometry::parse_simple("circle", "1 2"),
            Err(SyndError::InvalidGeometry(_))
        ));
    }

    #[test]
    fn test_geometry_equality_by_kind() {
        let point = Geometry::Point(Point::new(Position::new(1.0, 2.0)));
        let line = Geometry::parse_simple("line", "1 2 3 4").unwrap();
        assert_ne!(point, line);
        assert_eq!(point.clone(), point);
    }
}
