const DEFAULT_PAN_STEP: f64 = 0.5;
const DEFAULT_ZOOM_STEP: f64 = 0.2;
const DEFAULT_MIN_EXTENT: f64 = 1e-9;

/// How far one keystroke moves or resizes the view, in plane units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavigationSteps {
    /// Added to or subtracted from both bounds of one axis.
    pub pan: f64,
    /// Moved inwards (zoom in) or outwards (zoom out) on every edge.
    pub zoom: f64,
    /// Smallest width or height a zoom in may leave the window with.
    pub min_extent: f64,
}

impl Default for NavigationSteps {
    fn default() -> Self {
        Self {
            pan: DEFAULT_PAN_STEP,
            zoom: DEFAULT_ZOOM_STEP,
            min_extent: DEFAULT_MIN_EXTENT,
        }
    }
}
