//! Great-circle geometry shared by the location gate.

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Haversine distance between two points, in kilometers.
pub fn haversine_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let lat1 = from.latitude.to_radians();
    let lat2 = to.latitude.to_radians();
    let dlat = (to.latitude - from.latitude).to_radians();
    let dlon = (to.longitude - from.longitude).to_radians();

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(latitude: f64, longitude: f64) -> GeoPoint {
        GeoPoint {
            latitude,
            longitude,
        }
    }

    #[test]
    fn identical_points_are_zero_kilometers_apart() {
        let dhaka = point(23.4567, 90.1234);
        assert_eq!(haversine_km(dhaka, dhaka), 0.0);
    }

    #[test]
    fn one_degree_of_latitude_at_the_equator() {
        let distance = haversine_km(point(0.0, 0.0), point(1.0, 0.0));
        assert!((distance - 111.195).abs() < 0.01, "got {distance}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = point(23.4567, 90.1234);
        let b = point(23.8103, 90.4125);
        let forward = haversine_km(a, b);
        let backward = haversine_km(b, a);
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn longitude_deltas_shrink_with_latitude() {
        let at_equator = haversine_km(point(0.0, 0.0), point(0.0, 1.0));
        let at_sixty_north = haversine_km(point(60.0, 0.0), point(60.0, 1.0));
        assert!(at_sixty_north < at_equator / 1.9);
    }
}
