//! Great-circle distance between WGS84 coordinates.
//!
//! Stateless helper shared by the composite scorer and any location-aware
//! caller. Out-of-range input is not validated here; NaN propagates and
//! callers guard upstream.

use geo::Coord;

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two coordinates, in kilometres.
///
/// Uses the haversine formula with a fixed Earth radius of 6371 km.
/// Coordinates follow the crate convention of `x = longitude`,
/// `y = latitude`, both in degrees.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use kerbside_core::haversine_km;
///
/// let london = Coord { x: -0.1278, y: 51.5074 };
/// let paris = Coord { x: 2.3522, y: 48.8566 };
/// let distance = haversine_km(london, paris);
/// assert!((340.0..348.0).contains(&distance));
/// ```
#[must_use]
pub fn haversine_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_distance_for_identical_points() {
        let p = Coord { x: 13.4, y: 52.52 };
        assert_eq!(haversine_km(p, p), 0.0);
    }

    #[rstest]
    fn one_degree_of_longitude_at_the_equator() {
        let a = Coord { x: 0.0, y: 0.0 };
        let b = Coord { x: 1.0, y: 0.0 };
        let d = haversine_km(a, b);
        assert!((d - 111.19).abs() < 0.1, "got {d}");
    }

    #[rstest]
    fn distance_is_symmetric() {
        let a = Coord { x: -0.1278, y: 51.5074 };
        let b = Coord { x: 2.3522, y: 48.8566 };
        assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
    }

    #[rstest]
    fn nan_input_propagates() {
        let a = Coord { x: f64::NAN, y: 0.0 };
        let b = Coord { x: 0.0, y: 0.0 };
        assert!(haversine_km(a, b).is_nan());
    }
}
