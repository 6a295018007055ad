// crates/eventgeo-core/src/distance.rs
use crate::model::Coordinate;

/// Mean Earth radius in statute miles.
pub const EARTH_RADIUS_MILES: f64 = 3959.0;

/// Great-circle distance between two points in miles (haversine).
///
/// Symmetric and exactly `0.0` for identical inputs.
///
/// ```
/// use eventgeo_core::distance::distance_miles;
/// use eventgeo_core::Coordinate;
///
/// let boise = Coordinate::new(43.6150, -116.2023);
/// let provo = Coordinate::new(40.2338, -111.6585);
/// let d = distance_miles(boise, provo);
/// assert!((d - 330.0).abs() < 15.0);
/// assert_eq!(distance_miles(boise, boise), 0.0);
/// ```
pub fn distance_miles(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // rounding can push antipodal pairs just past 1.0
    let h = h.min(1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_MILES * c
}

impl Coordinate {
    /// See [`distance_miles`].
    pub fn distance_miles(&self, other: &Coordinate) -> f64 {
        distance_miles(*self, *other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        let p = Coordinate::new(34.0522, -118.2437);
        assert_eq!(distance_miles(p, p), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let pairs = [
            (Coordinate::new(34.05, -118.24), Coordinate::new(40.71, -74.00)),
            (Coordinate::new(-33.86, 151.21), Coordinate::new(51.50, -0.12)),
            (Coordinate::new(0.0, 179.9), Coordinate::new(0.0, -179.9)),
        ];
        for (a, b) in pairs {
            assert_eq!(distance_miles(a, b), distance_miles(b, a));
        }
    }

    #[test]
    fn antipodal_points_are_half_the_circumference() {
        let half = std::f64::consts::PI * EARTH_RADIUS_MILES;
        let d = distance_miles(Coordinate::new(-87.843, -176.673), Coordinate::new(87.843, 3.327));
        assert!(d.is_finite());
        assert!((d - half).abs() < 1.0, "got {d}");

        for i in 0..2000 {
            let lat = -89.9 + i as f64 * 0.09;
            let lon = -179.9 + i as f64 * 0.17;
            let d = distance_miles(Coordinate::new(lat, lon), Coordinate::new(-lat, lon + 180.0));
            assert!(d.is_finite() && d <= half + 1e-6, "({lat}, {lon}) gave {d}");
        }
    }

    #[test]
    fn one_degree_of_latitude() {
        // 2 * pi * 3959 / 360
        let d = distance_miles(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
        assert!((d - 69.097).abs() < 0.01, "got {d}");
    }

    #[test]
    fn los_angeles_to_new_york() {
        let la = Coordinate::new(34.0522, -118.2437);
        let ny = Coordinate::new(40.7128, -74.0060);
        let d = la.distance_miles(&ny);
        assert!((d - 2445.0).abs() < 10.0, "got {d}");
    }
}
