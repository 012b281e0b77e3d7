//! Polyline representation for stored walking paths.
//!
//! The store hands out path vertices tagged with an `order` field in any
//! sequence; a [`Polyline`] holds them sorted so consecutive points form
//! walkable segments.

use serde::{Deserialize, Serialize};

use crate::model::{PathRecord, Point};

/// An ordered walking path as decoded coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a new Polyline from already ordered points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds the polyline of a stored path, ascending by `order`.
    ///
    /// The sort is stable, so vertices sharing an `order` keep store order.
    pub fn from_record(record: &PathRecord) -> Self {
        let mut vertices = record.points.clone();
        vertices.sort_by_key(|vertex| vertex.order);
        Self {
            points: vertices.iter().map(|vertex| vertex.point()).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consecutive point pairs.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PathPointRecord;

    fn vertex(latitude: f64, longitude: f64, order: i32) -> PathPointRecord {
        PathPointRecord { latitude, longitude, order }
    }

    #[test]
    fn test_from_record_sorts_by_order() {
        let record = PathRecord {
            id: 1,
            name: "Pasarela".to_string(),
            points: vec![vertex(1.0, 1.0, 3), vertex(0.0, 0.0, 1), vertex(1.0, 0.0, 2)],
            campus: "x".to_string(),
        };
        let polyline = Polyline::from_record(&record);
        assert_eq!(
            polyline.points(),
            &[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)][..]
        );
    }

    #[test]
    fn test_segments() {
        let polyline = Polyline::new(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
        ]);
        let segments: Vec<_> = polyline.segments().collect();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[1], (Point::new(1.0, 0.0), Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_single_point_has_no_segments() {
        let polyline = Polyline::new(vec![Point::new(1.5, 2.5)]);
        assert_eq!(polyline.segments().count(), 0);
        assert_eq!(polyline.points(), &[Point::new(1.5, 2.5)][..]);
    }

    #[test]
    fn test_empty_polyline() {
        let polyline = Polyline::new(vec![]);
        assert!(polyline.points().is_empty());
        assert_eq!(polyline.segments().count(), 0);
    }
}
