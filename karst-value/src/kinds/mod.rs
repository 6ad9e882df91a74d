//! Aggregate kinds. Each one is a `Shareable` heap object: values hold them through `Shared`
//! handles, and mutation goes through a `RefCell` so every holder sees it.

mod array;
mod closure;
mod dictionary;
mod string;

pub use array::Array;
pub use closure::Closure;
pub use dictionary::Dictionary;
pub use string::Str;
