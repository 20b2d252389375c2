use crate::core::data::complex::Complex;
use crate::core::data::view_window::ViewWindow;
use crate::core::navigation::steps::NavigationSteps;
use crate::core::navigation::view_command::ViewCommand;
use log::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationOutcome {
    Continue,
    Stop,
}

/// Applies one command to the window. All affected bounds change together.
///
/// Zooming in is refused when it would leave either axis narrower than
/// `steps.min_extent`; the window is then left untouched.
pub fn navigate(
    window: &mut ViewWindow,
    command: ViewCommand,
    steps: NavigationSteps,
) -> NavigationOutcome {
    let region = window.region();

    let updated = match command {
        ViewCommand::PanUp => region.translate(Complex { real: 0.0, imag: steps.pan }),
        ViewCommand::PanLeft => region.translate(Complex { real: steps.pan, imag: 0.0 }),
        ViewCommand::PanDown => region.translate(Complex { real: 0.0, imag: -steps.pan }),
        ViewCommand::PanRight => region.translate(Complex { real: -steps.pan, imag: 0.0 }),
        ViewCommand::ZoomIn => match region.inset(steps.zoom) {
            Ok(zoomed)
                if zoomed.width() >= steps.min_extent && zoomed.height() >= steps.min_extent =>
            {
                zoomed
            }
            Ok(zoomed) => {
                debug!(
                    "zoom in refused: {}x{} is below the minimum extent {}",
                    zoomed.width(),
                    zoomed.height(),
                    steps.min_extent
                );
                return NavigationOutcome::Continue;
            }
            Err(err) => {
                debug!("zoom in refused: {}", err);
                return NavigationOutcome::Continue;
            }
        },
        ViewCommand::ZoomOut => match region.inset(-steps.zoom) {
            Ok(zoomed) => zoomed,
            Err(err) => {
                debug!("zoom out refused: {}", err);
                return NavigationOutcome::Continue;
            }
        },
        ViewCommand::Quit => return NavigationOutcome::Stop,
    };

    window.set_region(updated);
    trace!("{:?} -> {:?}", command, updated);

    NavigationOutcome::Continue
}

/// Decodes `key` and applies it. Unbound keys leave the window as it is.
pub fn handle_key(window: &mut ViewWindow, key: char, steps: NavigationSteps) -> NavigationOutcome {
    match ViewCommand::from_key(key) {
        Some(command) => navigate(window, command, steps),
        None => {
            trace!("ignoring unbound key {:?}", key);
            NavigationOutcome::Continue
        }
    }
}
