/// Utility helpers for Wavebox

/// Formats seconds as `m:ss`. Negative and non-finite input reads as zero.
pub fn format_time(seconds: f64) -> String {
    let total = if seconds.is_finite() && seconds > 0.0 {
        seconds.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Share of `width` covered by `offset`, clamped to `0..=1`.
pub fn fraction_of(offset: f64, width: f64) -> f64 {
    if width > 0.0 && offset.is_finite() {
        (offset / width).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_minutes_and_padded_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(65.9), "1:05");
        assert_eq!(format_time(3600.0), "60:00");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[test]
    fn fraction_is_clamped() {
        assert!((fraction_of(50.0, 200.0) - 0.25).abs() < 1e-9);
        assert_eq!(fraction_of(-5.0, 200.0), 0.0);
        assert_eq!(fraction_of(300.0, 200.0), 1.0);
        assert_eq!(fraction_of(10.0, 0.0), 0.0);
    }
}
