use std::io;

/// One keystroke as seen by the render loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Char(char),
    /// A key that produces no character (arrows, function keys, ...).
    Other,
    /// The user asked to abort the session (Ctrl+C).
    Interrupt,
}

/// A text grid the render loop draws frames onto and reads keys from.
///
/// Entering and leaving full-screen mode belongs to the implementation's
/// construction and `Drop`, so the loop only deals with drawing and input.
pub trait DisplaySurface {
    /// Grid size as `(columns, rows)`.
    fn size(&self) -> io::Result<(u16, u16)>;

    fn clear(&mut self) -> io::Result<()>;

    /// Writes one glyph at `(row, column)`. Highlighted glyphs use the
    /// surface's highlight attribute, which is reset right after.
    fn put(&mut self, row: u16, column: u16, glyph: char, highlighted: bool) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;

    /// Blocks until a key is pressed. Input is not echoed.
    fn read_key(&mut self) -> io::Result<KeyInput>;
}
