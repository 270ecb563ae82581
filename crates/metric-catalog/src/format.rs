//! Value Formatting
//!
//! Magnitude-dependent precision keeps the rendered text width bounded:
//! fewer decimal places as the number grows.

/// Two decimals below 10, one below 100, none above
pub fn fmt_auto(v: f32) -> String {
    if v.abs() >= 100.0 {
        format!("{v:.0}")
    } else if v.abs() >= 10.0 {
        format!("{v:.1}")
    } else {
        format!("{v:.2}")
    }
}

/// One decimal below 10, none above
pub fn fmt_auto1(v: f32) -> String {
    if v.abs() >= 10.0 {
        format!("{v:.0}")
    } else {
        format!("{v:.1}")
    }
}

/// Engineering suffixes for consumption figures: `k` from 9e2, `M` from 9e5
pub fn fmt_engineering(v: f32) -> String {
    if v.abs() >= 9e5 {
        format!("{}M", fmt_auto1(v / 1e6))
    } else if v.abs() >= 9e2 {
        format!("{}k", fmt_auto1(v / 1e3))
    } else {
        fmt_auto1(v)
    }
}

/// Distance-per-energy with a display cap and trailing sign marker
///
/// At or past the cap the capped magnitude is shown with `+`/`-` indicating
/// which side of zero the real value is on.
pub fn fmt_capped_efficiency(v: f32, max: f32) -> String {
    if v.abs() >= max {
        format!("{max:.0}{}", if v > 0.0 { "+" } else { "-" })
    } else {
        fmt_auto1(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_auto_breakpoints() {
        assert_eq!(fmt_auto(1.234), "1.23");
        assert_eq!(fmt_auto(12.34), "12.3");
        assert_eq!(fmt_auto(123.4), "123");
        assert_eq!(fmt_auto(-123.4), "-123");
    }

    #[test]
    fn test_fmt_auto1() {
        assert_eq!(fmt_auto1(9.96), "10.0");
        assert_eq!(fmt_auto1(42.0), "42");
        assert_eq!(fmt_auto1(-3.25), "-3.2");
    }

    #[test]
    fn test_fmt_engineering() {
        assert_eq!(fmt_engineering(500.0), "500");
        assert_eq!(fmt_engineering(1500.0), "1.5k");
        assert_eq!(fmt_engineering(25_000.0), "25k");
        assert_eq!(fmt_engineering(2_000_000.0), "2.0M");
        assert_eq!(fmt_engineering(-1500.0), "-1.5k");
    }

    #[test]
    fn test_fmt_capped_efficiency() {
        assert_eq!(fmt_capped_efficiency(5.2, 100.0), "5.2");
        assert_eq!(fmt_capped_efficiency(42.0, 100.0), "42");
        assert_eq!(fmt_capped_efficiency(150.0, 100.0), "100+");
        assert_eq!(fmt_capped_efficiency(-150.0, 100.0), "100-");
    }
}
