//! Culture-sensitive numeric parsing.
//!
//! Form fields arrive as raw strings and every culture writes numbers
//! differently: English uses `.` for decimals and `,` for digit groups,
//! French flips the decimal to `,` and groups with spaces, Spanish groups
//! with `.`. This module rewrites a string under one culture's separators
//! into the plain form the standard library parsers understand and then
//! defers to them, so the accepted grammar beyond separator placement is
//! exactly what `f64`/`i64` accept.

/// Numeric separator conventions for one culture.
#[derive(Debug, Clone)]
pub struct NumberFormat {
    /// Decimal separator (e.g. '.' for en, ',' for fr and es)
    pub decimal_sep: char,

    /// Group separators accepted between digits (e.g. ',' for en; spaces,
    /// breaking or not, for fr)
    pub group_seps: &'static [char],
}

impl NumberFormat {
    /// Parse a culture-formatted decimal number.
    ///
    /// Group separators are dropped when they sit between two digits before
    /// the decimal point; the culture's decimal separator is mapped to `.`;
    /// everything else reaches `f64::from_str` untouched.
    ///
    /// # Returns
    /// * `Some(value)` when the string parses under this culture
    /// * `None` for empty, misformatted, or non-numeric input
    pub fn parse_decimal(&self, input: &str) -> Option<f64> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.normalize(trimmed).parse::<f64>().ok()
    }

    /// Parse an integer field.
    ///
    /// Integers never admit group or decimal separators, whatever the
    /// culture, so this is a trim plus `i64::from_str`: `5.5` and `5,5`
    /// both fail here even when the culture accepts them as decimals.
    pub fn parse_integer(&self, input: &str) -> Option<i64> {
        input.trim().parse::<i64>().ok()
    }

    /// Rewrite `trimmed` into `.`-decimal form. A group separator in an
    /// illegal position is kept in place so the final parse rejects it.
    fn normalize(&self, trimmed: &str) -> String {
        let chars: Vec<char> = trimmed.chars().collect();
        let mut out = String::with_capacity(trimmed.len());
        let mut seen_decimal = false;

        for (i, &c) in chars.iter().enumerate() {
            if c == self.decimal_sep {
                seen_decimal = true;
                out.push('.');
            } else if !seen_decimal && self.group_seps.contains(&c) {
                let between_digits = i > 0
                    && chars[i - 1].is_ascii_digit()
                    && chars.get(i + 1).map(|n| n.is_ascii_digit()).unwrap_or(false);
                if !between_digits {
                    out.push(c);
                }
            } else {
                out.push(c);
            }
        }

        out
    }
}
