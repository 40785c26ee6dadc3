use crate::utils::error::Result;

/// Terminal seam for the menu engine. `read_line` returns `None` once the
/// input stream is exhausted.
pub trait Console {
    fn write(&mut self, text: &str) -> Result<()>;
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn read_line(&mut self) -> Result<Option<String>>;
}
