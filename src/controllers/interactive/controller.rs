use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::viewer_config::ViewerConfig;
use crate::controllers::interactive::errors::controller::ControllerError;
use crate::controllers::interactive::ports::display_surface::{DisplaySurface, KeyInput};
use crate::core::actions::generate_cell_buffer::generate_cell_buffer::generate_cell_buffer;
#[cfg(not(feature = "parallel"))]
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
#[cfg(feature = "parallel")]
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::data::cell_buffer::CellBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::view_window::ViewWindow;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::glyph_map::MandelbrotGlyphMap;
use crate::core::navigation::{handle_key, NavigationOutcome, NavigationSteps};
use log::{debug, info, trace};
use std::time::Instant;

/// The render/input loop. Owns the display surface and the view window.
pub struct InteractiveController<S: DisplaySurface> {
    surface: S,
    window: ViewWindow,
    steps: NavigationSteps,
    glyph_map: MandelbrotGlyphMap,
    frames_rendered: u64,
}

impl<S: DisplaySurface> InteractiveController<S> {
    /// Sizes the view window to the surface. Fails when the surface reports
    /// zero columns or rows.
    pub fn new(surface: S, config: ViewerConfig) -> Result<Self, ControllerError> {
        let (columns, rows) = surface.size()?;
        let pixel_rect = PixelRect::new(u32::from(columns), u32::from(rows))?;

        info!("viewer started on a {}x{} grid", columns, rows);

        Ok(Self {
            surface,
            window: ViewWindow::new(config.mandelbrot.region, pixel_rect),
            steps: config.steps,
            glyph_map: MandelbrotGlyphMap::default(),
            frames_rendered: 0,
        })
    }

    /// Draws a frame, waits for a key, applies it, and repeats until the
    /// quit key arrives.
    pub fn run(&mut self) -> Result<(), ControllerError> {
        self.surface.clear()?;

        loop {
            let frame = self.render_frame()?;
            self.draw(&frame.cell_buffer)?;

            debug!(
                "frame {} rendered in {:?} for re [{}, {}] im [{}, {}]",
                frame.frame_number,
                frame.render_duration,
                self.window.x_min(),
                self.window.x_max(),
                self.window.y_min(),
                self.window.y_max()
            );

            match self.surface.read_key()? {
                KeyInput::Char(key) => {
                    if handle_key(&mut self.window, key, self.steps) == NavigationOutcome::Stop {
                        info!("quit after {} frames", self.frames_rendered);
                        return Ok(());
                    }
                }
                KeyInput::Other => trace!("ignoring non-character key"),
                KeyInput::Interrupt => return Err(ControllerError::Interrupted),
            }
        }
    }

    /// Classifies every cell of the current window and maps the result to
    /// glyphs. Nothing is reused from earlier frames.
    pub fn render_frame(&mut self) -> Result<FrameData, ControllerError> {
        let start = Instant::now();
        let algorithm = MandelbrotAlgorithm::new(&self.window);
        let pixel_rect = algorithm.pixel_rect();

        #[cfg(not(feature = "parallel"))]
        let classifications = generate_fractal(pixel_rect, &algorithm)?;
        #[cfg(feature = "parallel")]
        let classifications = generate_fractal_rayon(pixel_rect, &algorithm)?;

        let cell_buffer = generate_cell_buffer(classifications, &self.glyph_map, pixel_rect)?;
        self.frames_rendered += 1;

        Ok(FrameData {
            frame_number: self.frames_rendered,
            cell_buffer,
            render_duration: start.elapsed(),
        })
    }

    #[must_use]
    pub fn window(&self) -> &ViewWindow {
        &self.window
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    fn draw(&mut self, buffer: &CellBuffer) -> Result<(), ControllerError> {
        // cells come from a grid built out of u16 dimensions
        for (point, cell) in buffer.iter() {
            self.surface
                .put(point.y as u16, point.x as u16, cell.glyph, cell.highlighted)?;
        }

        self.surface.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRectError;
    use std::collections::VecDeque;
    use std::io;

    /// In-memory grid fed from a fixed list of keys.
    struct ScriptedSurface {
        columns: u16,
        rows: u16,
        grid: Vec<(char, bool)>,
        keys: VecDeque<KeyInput>,
        clears: usize,
        flushes: usize,
        puts: usize,
    }

    impl ScriptedSurface {
        fn new(columns: u16, rows: u16, keys: &[KeyInput]) -> Self {
            Self {
                columns,
                rows,
                grid: vec![('?', false); usize::from(columns) * usize::from(rows)],
                keys: keys.iter().copied().collect(),
                clears: 0,
                flushes: 0,
                puts: 0,
            }
        }

        fn with_keys(columns: u16, rows: u16, keys: &str) -> Self {
            let keys: Vec<KeyInput> = keys.chars().map(KeyInput::Char).collect();
            Self::new(columns, rows, &keys)
        }

        fn cell(&self, row: u16, column: u16) -> (char, bool) {
            self.grid[usize::from(row) * usize::from(self.columns) + usize::from(column)]
        }
    }

    impl DisplaySurface for ScriptedSurface {
        fn size(&self) -> io::Result<(u16, u16)> {
            Ok((self.columns, self.rows))
        }

        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            self.grid.fill((' ', false));
            Ok(())
        }

        fn put(&mut self, row: u16, column: u16, glyph: char, highlighted: bool) -> io::Result<()> {
            let index = usize::from(row) * usize::from(self.columns) + usize::from(column);
            self.grid[index] = (glyph, highlighted);
            self.puts += 1;
            Ok(())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.flushes += 1;
            Ok(())
        }

        fn read_key(&mut self) -> io::Result<KeyInput> {
            self.keys
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more keys"))
        }
    }

    #[test]
    fn default_session_draws_the_classic_view() {
        let surface = ScriptedSurface::with_keys(80, 24, " ");
        let mut controller = InteractiveController::new(surface, ViewerConfig::default()).unwrap();

        controller.run().unwrap();

        let surface = controller.surface();
        // (-2, -1) lies well outside the set
        assert_eq!(surface.cell(0, 0), ('X', true));
        // (-0.5, 0) lies inside the main cardioid
        assert_eq!(surface.cell(12, 40), (' ', false));
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.flushes, 1);
        assert_eq!(surface.puts, 80 * 24);
        assert_eq!(controller.frames_rendered(), 1);
    }

    #[test]
    fn every_key_triggers_a_redraw() {
        let surface = ScriptedSurface::new(
            20,
            10,
            &[
                KeyInput::Char('w'),
                KeyInput::Other,
                KeyInput::Char('x'),
                KeyInput::Char(' '),
            ],
        );
        let mut controller = InteractiveController::new(surface, ViewerConfig::default()).unwrap();

        controller.run().unwrap();

        assert_eq!(controller.frames_rendered(), 4);
        assert_eq!(controller.surface().flushes, 4);
        assert_eq!(controller.surface().puts, 4 * 20 * 10);
    }

    #[test]
    fn keys_move_the_window_between_frames() {
        let surface = ScriptedSurface::with_keys(20, 10, "wwaq ");
        let mut controller = InteractiveController::new(surface, ViewerConfig::default()).unwrap();

        controller.run().unwrap();

        let window = controller.window();
        assert!((window.x_min() - -1.3).abs() < 1e-12);
        assert!((window.x_max() - 1.3).abs() < 1e-12);
        assert!((window.y_min() - 0.2).abs() < 1e-12);
        assert!((window.y_max() - 1.8).abs() < 1e-12);
        assert_eq!(window.pixel_rect(), PixelRect::new(20, 10).unwrap());
    }

    #[test]
    fn opposite_keys_restore_the_first_frame() {
        let surface = ScriptedSurface::with_keys(40, 12, " ");
        let mut first = InteractiveController::new(surface, ViewerConfig::default()).unwrap();
        first.run().unwrap();

        let surface = ScriptedSurface::with_keys(40, 12, "wsadqe ");
        let mut second = InteractiveController::new(surface, ViewerConfig::default()).unwrap();
        second.run().unwrap();

        assert_eq!(first.surface().grid, second.surface().grid);
    }

    #[test]
    fn panning_changes_what_is_drawn() {
        let surface = ScriptedSurface::with_keys(40, 12, " ");
        let mut still = InteractiveController::new(surface, ViewerConfig::default()).unwrap();
        still.run().unwrap();

        let surface = ScriptedSurface::with_keys(40, 12, "dd ");
        let mut panned = InteractiveController::new(surface, ViewerConfig::default()).unwrap();
        panned.run().unwrap();

        assert_ne!(still.surface().grid, panned.surface().grid);
    }

    #[test]
    fn render_frame_recomputes_every_cell() {
        let surface = ScriptedSurface::with_keys(80, 24, "");
        let mut controller = InteractiveController::new(surface, ViewerConfig::default()).unwrap();

        let frame = controller.render_frame().unwrap();

        assert_eq!(frame.frame_number, 1);
        assert_eq!(frame.cell_buffer.iter().count(), 80 * 24);
        assert!(frame.cell_buffer.iter().any(|(_, cell)| cell.highlighted));
        assert!(frame.cell_buffer.iter().any(|(_, cell)| !cell.highlighted));
    }

    #[test]
    fn interrupt_ends_the_session_with_an_error() {
        let surface = ScriptedSurface::new(10, 5, &[KeyInput::Char('w'), KeyInput::Interrupt]);
        let mut controller = InteractiveController::new(surface, ViewerConfig::default()).unwrap();

        let result = controller.run();

        assert!(matches!(result, Err(ControllerError::Interrupted)));
        assert_eq!(controller.frames_rendered(), 2);
    }

    #[test]
    fn surface_read_failure_propagates() {
        let surface = ScriptedSurface::with_keys(10, 5, "w");
        let mut controller = InteractiveController::new(surface, ViewerConfig::default()).unwrap();

        let result = controller.run();

        match result {
            Err(ControllerError::Surface(err)) => assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected a surface error, got {:?}", other),
        }
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let surface = ScriptedSurface::with_keys(0, 24, " ");

        let result = InteractiveController::new(surface, ViewerConfig::default());

        match result {
            Err(ControllerError::InvalidDimensions(err)) => {
                assert_eq!(err, PixelRectError::InvalidSize { width: 0, height: 24 })
            }
            Err(other) => panic!("expected invalid dimensions, got {:?}", other),
            Ok(_) => panic!("expected invalid dimensions, got a controller"),
        }
    }
}
