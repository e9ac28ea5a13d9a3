use crate::interpreter::operator::Associativity;

/// Settings for [`Converter`](super::Converter).
///
/// The default reproduces the classic teaching behavior: unknown characters
/// are dropped, unbalanced parentheses are tolerated, and `^` groups left to
/// right like every other operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConvertOptions {
    /// Reject unknown characters and unbalanced parentheses instead of
    /// degrading silently.
    pub strict: bool,
    /// Grouping of chained `^`. `Right` gives the mathematical reading
    /// `2 ^ 3 ^ 2 = 2 ^ 9`.
    pub power:  Associativity,
}

impl ConvertOptions {
    /// Lenient conversion with left-associative `^`.
    #[must_use]
    pub fn lenient() -> Self {
        Self::default()
    }

    /// Strict conversion with left-associative `^`.
    #[must_use]
    pub fn strict() -> Self {
        Self { strict: true,
               ..Self::default() }
    }

    /// Returns a copy with the given `^` associativity.
    #[must_use]
    pub const fn with_power(self, power: Associativity) -> Self {
        Self { power, ..self }
    }
}
