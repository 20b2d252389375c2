use crate::controllers::interactive::ports::display_surface::{DisplaySurface, KeyInput};
use crate::presenters::terminal::colour_pair::ColourPair;
use crate::presenters::terminal::key_input::key_input_from_event;
use crossterm::{
    cursor::{self, MoveTo},
    event, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, DisableLineWrap, EnableLineWrap, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use std::io::{self, BufWriter, Stdout, Write};

/// Full-screen crossterm surface on stdout.
///
/// Construction switches the terminal to raw mode on the alternate screen;
/// dropping the surface restores it, including on early returns and panics
/// that unwind.
pub struct TerminalSurface {
    out: BufWriter<Stdout>,
    highlight: ColourPair,
}

impl TerminalSurface {
    pub fn new() -> io::Result<Self> {
        Self::with_highlight(ColourPair::default())
    }

    pub fn with_highlight(highlight: ColourPair) -> io::Result<Self> {
        terminal::enable_raw_mode()?;

        // from here on Drop restores the terminal, whatever fails next
        let mut surface = Self {
            out: BufWriter::new(io::stdout()),
            highlight,
        };
        queue_setup(&mut surface.out)?;
        surface.out.flush()?;

        debug!("terminal surface ready, highlight pair {:?}", highlight);

        Ok(surface)
    }
}

pub(crate) fn queue_setup<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        EnterAlternateScreen,
        DisableLineWrap,
        cursor::Hide,
        Clear(ClearType::All),
        MoveTo(0, 0)
    )
}

pub(crate) fn queue_teardown<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(
        out,
        ResetColor,
        cursor::Show,
        EnableLineWrap,
        LeaveAlternateScreen
    )
}

/// Queues the commands that draw one glyph, bracketing highlighted glyphs
/// with the colour pair and a reset.
pub(crate) fn queue_glyph<W: Write>(
    out: &mut W,
    row: u16,
    column: u16,
    glyph: char,
    highlight: Option<ColourPair>,
) -> io::Result<()> {
    queue!(out, MoveTo(column, row))?;

    match highlight {
        Some(pair) => queue!(
            out,
            SetForegroundColor(pair.foreground),
            SetBackgroundColor(pair.background),
            Print(glyph),
            ResetColor
        ),
        None => queue!(out, Print(glyph)),
    }
}

impl DisplaySurface for TerminalSurface {
    fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn put(&mut self, row: u16, column: u16, glyph: char, highlighted: bool) -> io::Result<()> {
        let highlight = highlighted.then_some(self.highlight);

        queue_glyph(&mut self.out, row, column, glyph, highlight)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyInput> {
        loop {
            if let Some(key) = key_input_from_event(&event::read()?) {
                return Ok(key);
            }
        }
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        if let Err(err) = queue_teardown(&mut self.out).and_then(|()| self.out.flush()) {
            debug!("failed to leave the alternate screen: {}", err);
        }
        if let Err(err) = terminal::disable_raw_mode() {
            debug!("failed to disable raw mode: {}", err);
        }

        debug!("terminal surface restored");
    }
}
