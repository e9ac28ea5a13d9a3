/// Number rendering helpers.
///
/// Formats the floating-point values that appear in step descriptions and
/// stack snapshots so that they read like ordinary calculator output.
pub mod num;
