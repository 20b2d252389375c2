use std::process::ExitCode;

use ascii_mandelbrot::{ControllerError, InteractiveController, TerminalSurface, ViewerConfig};
use log::error;

// shells report a SIGINT-terminated process as 128 + 2
const INTERRUPTED_EXIT_CODE: u8 = 130;

fn run() -> Result<(), ControllerError> {
    let surface = TerminalSurface::new()?;
    let mut controller = InteractiveController::new(surface, ViewerConfig::default())?;

    controller.run()
}

fn main() -> ExitCode {
    env_logger::init();

    // the surface is dropped inside run(), so the terminal is restored
    // before anything below writes to it
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(ControllerError::Interrupted) => ExitCode::from(INTERRUPTED_EXIT_CODE),
        Err(err) => {
            error!("{}", err);
            eprintln!("ascii_mandelbrot: {}", err);
            ExitCode::FAILURE
        }
    }
}
