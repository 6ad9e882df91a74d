//!
//! The value representation of the karst runtime: one `Value` type for scalars and for handles
//! to shared heap objects, plus the `Slot` wrapper through which a binding can alias another.
//!

/// To convert values to Rust types, fallibly.
pub mod convert;
/// Identifiers for compiled function bodies.
pub mod function_id;
/// The four heap-allocated aggregate kinds: strings, arrays, dictionaries and closures.
pub mod kinds;
/// Cycle guard shared by the `Display` and `Debug` impls.
mod render;
/// Value slots that may alias another value.
pub mod slot;
/// The `Value` type itself.
pub mod value;

pub use function_id::FunctionId;
pub use kinds::{Array, Closure, Dictionary, Str};
pub use slot::Slot;
pub use value::{Value, ValueKind};
