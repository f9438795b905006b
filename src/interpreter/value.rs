/// Runtime value representation.
///
/// Defines the `Value` enum together with the boolean-to-integer and
/// integer-to-float promotions used by arithmetic, conditions and the
/// numeric built-ins, and the textual form `print` writes.
pub mod core;
