//! Formatting for loyalty point amounts.

use std::fmt;

/// A point amount formatted with comma thousands separators.
///
/// Point balances in the tens of thousands are unreadable without grouping,
/// so every user-facing amount goes through this wrapper: `Points(45_000)`
/// renders as `45,000`.
pub struct Points(pub u64);

impl fmt::Display for Points {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        f.write_str(&grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_grouping() {
        assert_eq!(format!("{}", Points(0)), "0");
        assert_eq!(format!("{}", Points(999)), "999");
        assert_eq!(format!("{}", Points(1_000)), "1,000");
        assert_eq!(format!("{}", Points(45_000)), "45,000");
        assert_eq!(format!("{}", Points(105_000)), "105,000");
        assert_eq!(format!("{}", Points(1_234_567)), "1,234,567");
    }
}
