// atmsim/src/input/mod.rs

pub mod line;
pub mod mock;
pub mod traits;

pub use line::LineInput;
pub use mock::ScriptedInput;
pub use traits::InputSource;
