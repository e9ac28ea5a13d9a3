use serde::{Serialize, Serializer};

/// How operators of equal precedence group when they appear in a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Associativity {
    /// `a op b op c` groups as `(a op b) op c`.
    #[default]
    Left,
    /// `a op b op c` groups as `a op (b op c)`.
    Right,
}

/// The six binary operators understood by both the evaluator and the
/// converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
    /// `%`
    Mod,
}

impl Operator {
    /// Every supported operator, in table order.
    pub const ALL: [Self; 6] = [Self::Add, Self::Sub, Self::Mul, Self::Div, Self::Pow, Self::Mod];

    /// Returns the symbol the operator is written with.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
            Self::Mod => "%",
        }
    }

    /// Looks up an operator by its exact symbol.
    ///
    /// # Example
    /// ```
    /// use stackviz::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("^"), Some(Operator::Pow));
    /// assert_eq!(Operator::from_symbol("**"), None);
    /// ```
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Binding strength used by the shunting-yard converter.
    ///
    /// `+` and `-` bind loosest, then `*`, `/` and `%`, then `^`.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div | Self::Mod => 2,
            Self::Pow => 3,
        }
    }

    /// Returns the grouping of this operator. Only `^` is configurable; it
    /// takes `power`, every other operator is left-associative.
    #[must_use]
    pub const fn associativity(self, power: Associativity) -> Associativity {
        match self {
            Self::Pow => power,
            _ => Associativity::Left,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl Serialize for Operator {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}
