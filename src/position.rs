use geo::{Bearing, Distance, Geodesic, Point};

pub fn distance_and_bearing(p1: (f64, f64), p2: (f64, f64)) -> (f64, f64) {
    let start = Point::new(p1.1, p1.0);
    let end = Point::new(p2.1, p2.0);
    let distance = Geodesic.distance(start, end);
    let raw_bearing = Geodesic.bearing(start, end);
    let bearing = (raw_bearing + 360.0) % 360.0;
    (distance, bearing)
}

/// >= 1000m: show as km with 2 decimal places
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 { format!("{:.0} m", meters) } else { format!("{:.2} km", meters / 1000.0) }
}

/// Format bearing for display (compass direction)
pub fn format_bearing(degrees: f64) -> String {
    let directions = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];
    let idx = ((degrees + 22.5) / 45.0) as usize % 8;
    format!("{:.0}° {}", degrees, directions[idx])
}

/// Get distance and bearing string between two points
/// Returns None if either point is invalid
pub fn distance_bearing_string(
    from_lat: f64,
    from_lon: f64,
    to_lat: f64,
    to_lon: f64,
) -> Option<String> {
    if !(-90.0..=90.0).contains(&from_lat)
        || !(-180.0..=180.0).contains(&from_lon)
        || !(-90.0..=90.0).contains(&to_lat)
        || !(-180.0..=180.0).contains(&to_lon)
    {
        return None;
    }

    let (distance, bearing) = distance_and_bearing((from_lat, from_lon), (to_lat, to_lon));

    Some(format!("{} @ {}", format_distance(distance), format_bearing(bearing)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.0), "0 m");
        assert_eq!(format_distance(512.4), "512 m");
        assert_eq!(format_distance(999.0), "999 m");
        assert_eq!(format_distance(1500.0), "1.50 km");
        assert_eq!(format_distance(12_345.0), "12.35 km");
    }

    #[test]
    fn test_format_bearing_compass_buckets() {
        assert_eq!(format_bearing(0.0), "0° N");
        assert_eq!(format_bearing(90.0), "90° E");
        assert_eq!(format_bearing(180.0), "180° S");
        assert_eq!(format_bearing(270.0), "270° W");
        assert_eq!(format_bearing(359.0), "359° N");
        assert_eq!(format_bearing(44.0), "44° NE");
    }

    #[test]
    fn test_distance_pristina_vienna() {
        // Geodesic distance is roughly 628 km; allow a loose band.
        let (dist, bearing) = distance_and_bearing((42.6629, 21.1655), (48.2082, 16.3738));
        assert!((600_000.0..660_000.0).contains(&dist), "dist = {dist}");
        assert!((0.0..360.0).contains(&bearing));
    }

    #[test]
    fn test_distance_bearing_string_bounds() {
        assert!(distance_bearing_string(91.0, 0.0, 0.0, 0.0).is_none());
        assert!(distance_bearing_string(0.0, -181.0, 0.0, 0.0).is_none());
        assert!(distance_bearing_string(42.66, 21.16, 48.21, 16.37).is_some());
    }
}
