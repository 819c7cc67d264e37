//! Encoded polyline writer (precision 1e5).

use super::GeoPoint;

const PRECISION: f64 = 1e5;

/// Encodes a sequence of points in the encoded-polyline format understood by
/// common map renderers.
///
/// Each coordinate is scaled by 1e5, delta-encoded against the previous point
/// and written as 5-bit chunks offset by 63.
///
/// # Examples
///
/// ```
/// use route_synth::geo::{encode_polyline, GeoPoint};
///
/// let path = [
///     GeoPoint::new(38.5, -120.2),
///     GeoPoint::new(40.7, -120.95),
///     GeoPoint::new(43.252, -126.453),
/// ];
/// assert_eq!(encode_polyline(&path), "_p~iF~ps|U_ulLnnqC_mqNvxq`@");
/// ```
pub fn encode_polyline(points: &[GeoPoint]) -> String {
    let mut out = String::with_capacity(points.len() * 8);
    let mut prev_lat = 0i64;
    let mut prev_lng = 0i64;

    for p in points {
        let lat = (p.lat * PRECISION).round() as i64;
        let lng = (p.lng * PRECISION).round() as i64;
        push_value(lat - prev_lat, &mut out);
        push_value(lng - prev_lng, &mut out);
        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

fn push_value(delta: i64, out: &mut String) {
    let mut v = if delta < 0 {
        !(delta << 1)
    } else {
        delta << 1
    };
    while v >= 0x20 {
        out.push(char::from((((v & 0x1f) | 0x20) + 63) as u8));
        v >>= 5;
    }
    out.push(char::from((v + 63) as u8));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        assert_eq!(encode_polyline(&[]), "");
    }

    #[test]
    fn test_single_point() {
        // (0, 0) encodes each zero delta as '?'
        assert_eq!(encode_polyline(&[GeoPoint::new(0.0, 0.0)]), "??");
    }

    #[test]
    fn test_negative_delta() {
        // -179.9832104 is the worked example for a single value
        let s = encode_polyline(&[GeoPoint::new(0.0, -179.9832104)]);
        assert_eq!(s, "?`~oia@");
    }

    #[test]
    fn test_output_is_printable_ascii() {
        let path = [
            GeoPoint::new(28.6139, 77.209),
            GeoPoint::new(28.3, 77.4),
            GeoPoint::new(27.1767, 78.0081),
        ];
        let s = encode_polyline(&path);
        assert!(!s.is_empty());
        assert!(s.bytes().all(|b| (63..=126).contains(&b)));
    }
}
