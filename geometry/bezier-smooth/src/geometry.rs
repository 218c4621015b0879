//! Geometry and feature types.
//!
//! These mirror the GeoJSON object model. With the `serde` feature enabled
//! they (de)serialize to and from GeoJSON geometry and feature objects.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single coordinate: `[x, y]` or `[x, y, z]`.
///
/// Components past the third are carried through parsing but ignored by
/// smoothing.
pub type Position = Vec<f64>;

/// A geometry value.
///
/// Only [`LineString`](Self::LineString), [`MultiLineString`](Self::MultiLineString),
/// [`Polygon`](Self::Polygon) and [`MultiPolygon`](Self::MultiPolygon) can be
/// smoothed; the remaining variants are rejected by
/// [`smooth_geometry`](crate::smooth_geometry).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type"))]
pub enum Geometry {
    /// A single position.
    Point {
        /// The position.
        coordinates: Position,
    },
    /// Unconnected positions.
    MultiPoint {
        /// The positions.
        coordinates: Vec<Position>,
    },
    /// A connected sequence of positions.
    LineString {
        /// The vertices in order.
        coordinates: Vec<Position>,
    },
    /// Independent line strings.
    MultiLineString {
        /// One vertex sequence per line.
        coordinates: Vec<Vec<Position>>,
    },
    /// An exterior ring followed by zero or more holes.
    Polygon {
        /// Rings, exterior first.
        coordinates: Vec<Vec<Position>>,
    },
    /// Independent polygons.
    MultiPolygon {
        /// Rings of each polygon.
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    /// A heterogeneous list of geometries.
    GeometryCollection {
        /// The member geometries.
        geometries: Vec<Geometry>,
    },
}

impl Geometry {
    /// Create a line string.
    #[must_use]
    pub fn line_string(coordinates: Vec<Position>) -> Self {
        Self::LineString { coordinates }
    }

    /// Create a multi line string.
    #[must_use]
    pub fn multi_line_string(coordinates: Vec<Vec<Position>>) -> Self {
        Self::MultiLineString { coordinates }
    }

    /// Create a polygon from its rings, exterior first.
    #[must_use]
    pub fn polygon(coordinates: Vec<Vec<Position>>) -> Self {
        Self::Polygon { coordinates }
    }

    /// Create a multi polygon.
    #[must_use]
    pub fn multi_polygon(coordinates: Vec<Vec<Vec<Position>>>) -> Self {
        Self::MultiPolygon { coordinates }
    }

    /// The GeoJSON type name of this geometry.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Point { .. } => "Point",
            Self::MultiPoint { .. } => "MultiPoint",
            Self::LineString { .. } => "LineString",
            Self::MultiLineString { .. } => "MultiLineString",
            Self::Polygon { .. } => "Polygon",
            Self::MultiPolygon { .. } => "MultiPolygon",
            Self::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// Number of lines or rings that smoothing would process.
    ///
    /// Zero for variants that cannot be smoothed.
    #[must_use]
    pub fn num_lines(&self) -> usize {
        match self {
            Self::LineString { .. } => 1,
            Self::MultiLineString { coordinates } | Self::Polygon { coordinates } => {
                coordinates.len()
            }
            Self::MultiPolygon { coordinates } => coordinates.iter().map(Vec::len).sum(),
            Self::Point { .. } | Self::MultiPoint { .. } | Self::GeometryCollection { .. } => 0,
        }
    }
}

/// The GeoJSON `"type"` tag of a feature object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
enum FeatureTag {
    #[default]
    Feature,
}

/// A geometry paired with opaque properties.
///
/// Smoothing replaces the geometry and clones the properties unchanged.
///
/// # Example
///
/// ```
/// use bezier_smooth::{Feature, Geometry};
///
/// let feature = Feature::new(
///     Geometry::line_string(vec![vec![0.0, 0.0], vec![1.0, 1.0]]),
///     "stroke: #f00",
/// );
/// assert_eq!(feature.geometry.type_name(), "LineString");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Feature<P = ()> {
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    #[allow(dead_code)]
    tag: FeatureTag,

    /// The feature geometry.
    pub geometry: Geometry,

    /// Caller-defined properties.
    pub properties: P,
}

impl<P> Feature<P> {
    /// Create a feature.
    #[must_use]
    pub fn new(geometry: Geometry, properties: P) -> Self {
        Self {
            tag: FeatureTag::Feature,
            geometry,
            properties,
        }
    }
}
