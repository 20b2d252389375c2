#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    PanUp,
    PanLeft,
    PanDown,
    PanRight,
    ZoomIn,
    ZoomOut,
    Quit,
}

impl ViewCommand {
    /// Decodes a keystroke. Keys without a binding return `None`.
    #[must_use]
    pub const fn from_key(key: char) -> Option<Self> {
        match key {
            'w' => Some(Self::PanUp),
            'a' => Some(Self::PanLeft),
            's' => Some(Self::PanDown),
            'd' => Some(Self::PanRight),
            'q' => Some(Self::ZoomIn),
            'e' => Some(Self::ZoomOut),
            ' ' => Some(Self::Quit),
            _ => None,
        }
    }
}
