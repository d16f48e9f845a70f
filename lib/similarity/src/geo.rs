// Great-circle distance for store lookups

/// Mean Earth radius in miles
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Haversine distance in miles between two points given in degrees
pub fn distance_miles(lat1: f64, lng1: f64, lat2: f64, lng2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lng = (lng2 - lng1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for near-antipodal points
    let a = a.clamp(0.0, 1.0);
    EARTH_RADIUS_MILES * 2.0 * a.sqrt().atan2((1.0 - a).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point_is_zero() {
        assert_eq!(distance_miles(40.7128, -74.0060, 40.7128, -74.0060), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let ab = distance_miles(40.7128, -74.0060, 34.0522, -118.2437);
        let ba = distance_miles(34.0522, -118.2437, 40.7128, -74.0060);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_new_york_to_los_angeles() {
        let d = distance_miles(40.7128, -74.0060, 34.0522, -118.2437);
        assert!((d - 2445.0).abs() < 10.0, "got {}", d);
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_MILES;
        for (lat1, lng1, lat2, lng2) in [
            (-87.5, 0.0, 87.5, -180.0),
            (0.0, 0.0, 0.0, 180.0),
            (90.0, 0.0, -90.0, 0.0),
            (40.7128, -74.0060, -40.7128, 105.9940),
        ] {
            let d = distance_miles(lat1, lng1, lat2, lng2);
            assert!(d.is_finite(), "NaN for ({}, {}) -> ({}, {})", lat1, lng1, lat2, lng2);
            assert!((d - half_circumference).abs() < 1.0, "got {}", d);
        }
    }

    #[test]
    fn test_one_degree_of_latitude() {
        let d = distance_miles(0.0, 0.0, 1.0, 0.0);
        assert!((d - 69.1).abs() < 0.1, "got {}", d);
    }
}
