//! Responsive viewport classification.

/// Widths strictly below this are mobile.
pub const MOBILE_BREAKPOINT_PX: u32 = 468;

/// Layout class derived from the host window width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewportClass {
    /// Bottom control bar, single-column tiles, full-width chat.
    Mobile,
    /// Vertical control rail and multi-column tiles.
    #[default]
    Desktop,
}

impl ViewportClass {
    /// Classify a width in pixels. No hysteresis.
    pub fn from_width(width_px: u32) -> Self {
        if width_px < MOBILE_BREAKPOINT_PX { Self::Mobile } else { Self::Desktop }
    }

    /// Whether this is the mobile class.
    pub fn is_mobile(self) -> bool {
        self == Self::Mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_inclusive_on_desktop_side() {
        assert_eq!(ViewportClass::from_width(0), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(467), ViewportClass::Mobile);
        assert_eq!(ViewportClass::from_width(468), ViewportClass::Desktop);
        assert_eq!(ViewportClass::from_width(1920), ViewportClass::Desktop);
    }
}
