use crate::colour::Colour;

/// What the settings layer needs from the host windowing system.
pub trait Platform {
    /// The system's default text colour (`foreground`) or window background.
    fn system_colour(&self, foreground: bool) -> Colour;
}

/// A platform with a fixed pair of system colours. Used when there is no host
/// to ask, and in tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPalette {
    pub foreground: Colour,
    pub background: Colour,
}

impl Default for FixedPalette {
    fn default() -> Self {
        Self {
            foreground: Colour::from_rgb(0, 0, 0),
            background: Colour::from_rgb(255, 255, 255),
        }
    }
}

impl Platform for FixedPalette {
    fn system_colour(&self, foreground: bool) -> Colour {
        if foreground {
            self.foreground
        } else {
            self.background
        }
    }
}
