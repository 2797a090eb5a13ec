//! Country outline geometry
//!
//! GeoJSON-shaped polygon data. The scoring core only needs the centroid;
//! the full outline is carried for the silhouette-rendering collaborator.

use super::Coordinates;
use serde::Deserialize;

/// A ring of `[lon, lat]` positions, GeoJSON axis order
pub type Ring = Vec<[f64; 2]>;

/// A country boundary: polygon or multi-polygon of lon/lat rings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Single polygon: exterior ring first, optional interior rings (holes)
    Polygon { coordinates: Vec<Ring> },
    /// Several disjoint polygons (islands), each with its own ring list
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

impl Geometry {
    /// True if the geometry carries no usable exterior ring
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exterior_rings().all(Vec::is_empty)
    }

    /// Exterior ring of every polygon part, in declaration order
    ///
    /// Interior rings (holes) are skipped; they never contribute to the
    /// centroid or the silhouette hit area.
    pub fn exterior_rings(&self) -> impl Iterator<Item = &Ring> {
        let rings: Vec<&Ring> = match self {
            Self::Polygon { coordinates } => coordinates.first().into_iter().collect(),
            Self::MultiPolygon { coordinates } => {
                coordinates.iter().filter_map(|rings| rings.first()).collect()
            }
        };
        rings.into_iter()
    }

    /// Representative point of the geometry
    ///
    /// The area-weighted (shoelace) centroid of the exterior ring. For a
    /// multi-polygon the largest-area exterior ring decides; on an exact area
    /// tie the first declared ring wins. Degenerate rings with no measurable
    /// area fall back to the mean of their vertices.
    ///
    /// Returns `None` when there is no non-empty exterior ring.
    #[must_use]
    pub fn centroid(&self) -> Option<Coordinates> {
        let mut best: Option<(f64, &Ring)> = None;
        for ring in self.exterior_rings() {
            if ring.is_empty() {
                continue;
            }
            let area = ring_area(ring).abs();
            match best {
                Some((best_area, _)) if area <= best_area => {}
                _ => best = Some((area, ring)),
            }
        }
        best.map(|(_, ring)| ring_centroid(ring))
    }
}

/// Signed shoelace area of a ring (in squared degrees)
fn ring_area(ring: &[[f64; 2]]) -> f64 {
    let mut area = 0.0;
    for i in 0..ring.len() {
        let [x1, y1] = ring[i];
        let [x2, y2] = ring[(i + 1) % ring.len()];
        area += x1 * y2 - x2 * y1;
    }
    area / 2.0
}

/// Area-weighted centroid of a single ring
///
/// Falls back to the vertex mean when the ring is degenerate (near-zero
/// area, e.g. all points collinear).
fn ring_centroid(ring: &[[f64; 2]]) -> Coordinates {
    const EPSILON: f64 = 1e-12;

    let area = ring_area(ring);
    if area.abs() > EPSILON {
        let mut cx = 0.0;
        let mut cy = 0.0;
        for i in 0..ring.len() {
            let [x1, y1] = ring[i];
            let [x2, y2] = ring[(i + 1) % ring.len()];
            let cross = x1 * y2 - x2 * y1;
            cx += (x1 + x2) * cross;
            cy += (y1 + y2) * cross;
        }
        let factor = 1.0 / (6.0 * area);
        return Coordinates::new(cy * factor, cx * factor);
    }

    // Vertex mean; ignore the closing point when the ring repeats it
    let closed = ring.len() > 1 && ring.first() == ring.last();
    let points = if closed { &ring[..ring.len() - 1] } else { ring };
    let n = points.len() as f64;
    let (sum_x, sum_y) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), [x, y]| (sx + x, sy + y));
    Coordinates::new(sum_y / n, sum_x / n)
}
