/// Shunting-yard conversion.
///
/// Rewrites an infix token stream as postfix using an explicit operator
/// stack and the static precedence table.
pub mod core;

/// Conversion settings.
///
/// Chooses between lenient and strict handling of malformed input and sets
/// how `^` associates.
pub mod options;

pub use self::core::{Converter, convert, to_postfix_string};
pub use options::ConvertOptions;
