//! Number formatting for the KPI tiles and the projection chart axis.

/// Groups an integer with thousands separators: `1234567` → `"1,234,567"`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        grouped.push('-');
    }
    let first_group = digits.len() % 3;
    let mut written = 0;
    if first_group > 0 {
        grouped.push_str(&digits[..first_group]);
        written = first_group;
    }
    while written < digits.len() {
        if written > 0 {
            grouped.push(',');
        }
        grouped.push_str(&digits[written..written + 3]);
        written += 3;
    }
    grouped
}

/// Dollar display used by the KPI tiles, matching the original page's
/// `'$' + value.toLocaleString()` output (sign between `$` and digits).
pub fn format_usd(value: f64) -> String {
    let whole = value.round() as i64;
    format!("${}", group_thousands(whole))
}

/// Compact dollar label for chart axis ticks.
pub fn format_usd_compact(value: f64) -> String {
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };
    if magnitude >= 1_000_000.0 {
        format!("{sign}${:.1}M", magnitude / 1_000_000.0)
    } else if magnitude >= 1_000.0 {
        format!("{sign}${:.0}k", magnitude / 1_000.0)
    } else {
        format!("{sign}${magnitude:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(435), "435");
        assert_eq!(group_thousands(4350), "4,350");
        assert_eq!(group_thousands(435_000), "435,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-30_000), "-30,000");
    }

    #[test]
    fn formats_usd_like_to_locale_string() {
        assert_eq!(format_usd(435_000.0), "$435,000");
        assert_eq!(format_usd(-30_000.0), "$-30,000");
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn compact_labels_scale_units() {
        assert_eq!(format_usd_compact(0.0), "$0");
        assert_eq!(format_usd_compact(480.0), "$480");
        assert_eq!(format_usd_compact(480_000.0), "$480k");
        assert_eq!(format_usd_compact(1_957_500.0), "$2.0M");
        assert_eq!(format_usd_compact(-30_000.0), "-$30k");
    }
}
