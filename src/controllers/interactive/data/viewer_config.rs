use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
use crate::core::navigation::NavigationSteps;

/// Settings for one interactive session. There is no runtime configuration
/// surface; the defaults are the viewer's behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewerConfig {
    pub mandelbrot: MandelbrotConfig,
    pub steps: NavigationSteps,
}
