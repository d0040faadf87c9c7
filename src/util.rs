/// Numeric rounding and conversion helpers.
///
/// This module holds the precision constants and the component rounding rule
/// used by the complex constructor, together with safe float-to-integer
/// conversion for root degrees.
///
/// All conversions return an `Option`, which is `None` if the value is out of
/// range or not a whole number.
pub mod num;
