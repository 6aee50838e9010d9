// atmsim/src/input/traits.rs

use crate::Result;

/// InputSource abstracts terminal input away from the session logic.
pub trait InputSource {
    /// Read the next line without its line ending. Returns
    /// `Error::InputClosed` once the source is exhausted.
    fn read_line(&mut self) -> Result<String>;
}

impl<T: InputSource + ?Sized> InputSource for &mut T {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }
}

impl<T: InputSource + ?Sized> InputSource for Box<T> {
    fn read_line(&mut self) -> Result<String> {
        (**self).read_line()
    }
}
