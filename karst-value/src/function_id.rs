use std::fmt::Display;

/// Identifies the compiled body of a function, as handed out by whatever compiles them.
///
/// Fast to move, clone and compare; closures store it next to their captures.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct FunctionId(pub u32);

impl Display for FunctionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
