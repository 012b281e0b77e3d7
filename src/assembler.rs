//! Turns a routed node sequence into the transport-level [`RoutePath`].

use crate::model::{Point, ReceptionPoint, RoutePath, RoutePoint, Totem};

/// Build the response path for a route from `totem` to `reception`.
///
/// Orders start at 1 and are contiguous. Consecutive points with identical
/// coordinates (a totem placed exactly on a path vertex) are emitted once.
pub fn assemble(points: &[Point], totem: &Totem, reception: &ReceptionPoint) -> RoutePath {
    let mut route_points: Vec<RoutePoint> = Vec::with_capacity(points.len());
    for point in points {
        if let Some(last) = route_points.last() {
            if last.latitude == point.latitude && last.longitude == point.longitude {
                continue;
            }
        }
        route_points.push(RoutePoint {
            latitude: point.latitude,
            longitude: point.longitude,
            order: route_points.len() as i32 + 1,
        });
    }

    RoutePath {
        name: format!("Camino desde {} a {}", totem.name, reception.name),
        points: route_points,
        campus: totem.campus.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totem() -> Totem {
        Totem {
            id: 1,
            latitude: 0.0,
            longitude: 0.0,
            name: "Totem Foro".to_string(),
            description: String::new(),
            image_url: String::new(),
            campus: "concepcion".to_string(),
            active: true,
        }
    }

    fn reception() -> ReceptionPoint {
        ReceptionPoint {
            id: 9,
            latitude: 1.0,
            longitude: 1.0,
            name: "Recepción Central".to_string(),
            description: String::new(),
            image_url: String::new(),
            campus: "concepcion".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_orders_are_one_based_and_contiguous() {
        let points = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        let route = assemble(&points, &totem(), &reception());
        let orders: Vec<i32> = route.points.iter().map(|p| p.order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
    }

    #[test]
    fn test_collapses_repeated_coordinates() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 1.0),
        ];
        let route = assemble(&points, &totem(), &reception());
        assert_eq!(route.coordinates(), vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert_eq!(route.points.last().map(|p| p.order), Some(3));
    }

    #[test]
    fn test_name_and_campus_come_from_endpoints() {
        let route = assemble(&[], &totem(), &reception());
        assert_eq!(route.name, "Camino desde Totem Foro a Recepción Central");
        assert_eq!(route.campus, "concepcion");
        assert!(route.points.is_empty());
    }
}
