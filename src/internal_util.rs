pub fn square_distance(p1: &(f64, f64), p2: &(f64, f64)) -> f64 {
    (p1.0 - p2.0).powi(2) + (p1.1 - p2.1).powi(2)
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

pub fn lerp_rgb(a: [u8; 3], b: [u8; 3], t: f64) -> [f64; 3] {
    [
        lerp(a[0] as f64, b[0] as f64, t),
        lerp(a[1] as f64, b[1] as f64, t),
        lerp(a[2] as f64, b[2] as f64, t),
    ]
}

/// Round and saturate a channel value into a byte.
pub fn to_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Linear-interpolated percentile (`p` in \[0, 100\]) of unsorted values.
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    Some(lerp(sorted[lower], sorted[upper], rank - lower as f64))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_percentile() {
        let values = [4.0, 1.0, 3.0, 2.0, 5.0];
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 50.0), Some(3.0));
        assert_eq!(percentile(&values, 100.0), Some(5.0));
        assert_eq!(percentile(&values, 12.5), Some(1.5));
        assert_eq!(percentile(&[], 50.0), None);
    }

    #[test]
    fn test_percentile_orders_nan_last() {
        let values = [f64::NAN, 3.0, 1.0, f64::NAN, 2.0, f64::NAN];
        assert_eq!(percentile(&values, 0.0), Some(1.0));
        assert_eq!(percentile(&values, 40.0), Some(3.0));
        assert!(percentile(&values, 100.0).unwrap().is_nan());
    }

    #[test]
    fn test_to_channel() {
        assert_eq!(to_channel(-3.0), 0);
        assert_eq!(to_channel(127.5), 128);
        assert_eq!(to_channel(300.0), 255);
    }
}
