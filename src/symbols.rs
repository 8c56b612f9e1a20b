use std::fmt;

/// Baseline decimal and grouping separators used before any sample overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberSymbols {
    pub decimal: char,
    pub group: char,
}

impl NumberSymbols {
    pub const fn new(decimal: char, group: char) -> Self {
        Self { decimal, group }
    }

    /// Point as decimal separator, comma for thousands.
    pub const fn point() -> Self {
        Self::new('.', ',')
    }

    /// Comma as decimal separator, point for thousands.
    pub const fn comma() -> Self {
        Self::new(',', '.')
    }

    pub fn is_valid(&self) -> bool {
        self.decimal != self.group && !self.decimal.is_ascii_digit() && !self.group.is_ascii_digit()
    }
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self::point()
    }
}

impl fmt::Display for NumberSymbols {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decimal '{}', group '{}'", self.decimal, self.group)
    }
}
