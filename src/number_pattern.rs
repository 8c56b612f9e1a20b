//! Strict number parsing for `#,##0.###` style layout patterns.
//!
//! Only the structural parts of a pattern matter when reading text: whether it
//! allows grouping separators in the integer part, whether it has a fraction
//! part, and whether it carries a percent suffix. Digit counts in the pattern
//! are output hints and are not enforced. The empty pattern is the general
//! format and accepts both grouping and a fraction.

use crate::symbols::NumberSymbols;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberPattern {
    pattern: &'static str,
    grouping: bool,
    fraction: bool,
    percent: bool,
}

impl NumberPattern {
    pub fn compile(pattern: &'static str) -> Self {
        let positive = pattern.split(';').next().unwrap_or_default();
        let (body, percent) = match positive.strip_suffix('%') {
            Some(body) => (body, true),
            None => (positive, false),
        };
        let general = body.is_empty();
        let integer_part = body.split('.').next().unwrap_or_default();
        Self {
            pattern,
            grouping: general || integer_part.contains(','),
            fraction: general || body.contains('.'),
            percent,
        }
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn allows_grouping(&self) -> bool {
        self.grouping
    }

    pub fn allows_fraction(&self) -> bool {
        self.fraction
    }

    /// Parses the whole of `value`, or returns `None` when any character is left over.
    pub fn parse(&self, value: &str, symbols: &NumberSymbols) -> Option<f64> {
        let mut body = value;
        if self.percent {
            body = body.strip_suffix('%')?;
        }
        let mut normalized = String::with_capacity(body.len() + 1);
        if let Some(rest) = body.strip_prefix('-') {
            normalized.push('-');
            body = rest;
        }

        let mut mantissa_digits = 0usize;
        let mut exponent_digits = 0usize;
        let mut seen_decimal = false;
        let mut in_exponent = false;
        let mut previous_digit = false;
        let mut chars = body.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch.is_ascii_digit() {
                normalized.push(ch);
                if in_exponent {
                    exponent_digits += 1;
                } else {
                    mantissa_digits += 1;
                }
                previous_digit = true;
                continue;
            }
            if in_exponent {
                if matches!(ch, '+' | '-') && normalized.ends_with('e') {
                    normalized.push(ch);
                    continue;
                }
                return None;
            }
            if ch == symbols.decimal && self.fraction && !seen_decimal {
                normalized.push('.');
                seen_decimal = true;
                previous_digit = false;
            } else if ch == symbols.group
                && self.grouping
                && !seen_decimal
                && previous_digit
                && chars.peek().is_some_and(|next| next.is_ascii_digit())
            {
                previous_digit = false;
            } else if matches!(ch, 'E' | 'e') && mantissa_digits > 0 {
                normalized.push('e');
                in_exponent = true;
                previous_digit = false;
            } else {
                return None;
            }
        }

        if mantissa_digits == 0 || (in_exponent && exponent_digits == 0) {
            return None;
        }
        let parsed: f64 = normalized.parse().ok()?;
        let parsed = if self.percent { parsed / 100.0 } else { parsed };
        parsed.is_finite().then_some(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINT: NumberSymbols = NumberSymbols::point();
    const COMMA: NumberSymbols = NumberSymbols::comma();

    #[test]
    fn general_pattern_accepts_grouping_and_fraction() {
        let general = NumberPattern::compile("");
        assert!(general.allows_grouping());
        assert!(general.allows_fraction());
        assert_eq!(general.parse("1,204.75", &POINT), Some(1204.75));
        assert_eq!(general.parse("1.204,75", &COMMA), Some(1204.75));
        assert_eq!(general.parse("-12", &POINT), Some(-12.0));
    }

    #[test]
    fn integer_patterns_reject_separators() {
        let hash = NumberPattern::compile("#");
        assert!(!hash.allows_grouping());
        assert!(!hash.allows_fraction());
        assert_eq!(hash.parse("42", &POINT), Some(42.0));
        assert_eq!(hash.parse("4.2", &POINT), None);
        assert_eq!(hash.parse("4,200", &POINT), None);
    }

    #[test]
    fn fixed_fraction_pattern_has_no_grouping() {
        let fixed = NumberPattern::compile("0.00");
        assert_eq!(fixed.parse("174.50", &POINT), Some(174.5));
        assert_eq!(fixed.parse("1,204.75", &POINT), None);
    }

    #[test]
    fn grouping_must_sit_between_integer_digits() {
        let grouped = NumberPattern::compile("#,##0.###");
        assert_eq!(grouped.parse(",123", &POINT), None);
        assert_eq!(grouped.parse("123,", &POINT), None);
        assert_eq!(grouped.parse("1,,234", &POINT), None);
        assert_eq!(grouped.parse("1.5,0", &POINT), None);
        assert_eq!(grouped.parse("12,345,678", &POINT), Some(12_345_678.0));
    }

    #[test]
    fn exponent_requires_digits_on_both_sides() {
        let general = NumberPattern::compile("");
        assert_eq!(general.parse("1E3", &POINT), Some(1000.0));
        assert_eq!(general.parse("2.5e-1", &POINT), Some(0.25));
        assert_eq!(general.parse("E3", &POINT), None);
        assert_eq!(general.parse("1E", &POINT), None);
        assert_eq!(general.parse("1E3E4", &POINT), None);
    }

    #[test]
    fn rejects_empty_and_sign_only_values() {
        let general = NumberPattern::compile("");
        assert_eq!(general.parse("", &POINT), None);
        assert_eq!(general.parse("-", &POINT), None);
        assert_eq!(general.parse(".", &POINT), None);
        assert_eq!(general.parse("1.2.3", &POINT), None);
    }

    #[test]
    fn percent_pattern_requires_suffix() {
        let percent = NumberPattern::compile("#####.###############%");
        assert_eq!(percent.parse("12.5", &POINT), None);
        assert_eq!(percent.parse("12.5%", &POINT), Some(0.125));
    }
}
