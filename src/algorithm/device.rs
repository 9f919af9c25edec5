//! Device classification and the animation speed constants it selects

use crate::io::configuration::{
    DESKTOP_BASE_CHANGE_RATE, DESKTOP_BRIGHT_CHANGE_RATE, DESKTOP_TIME_INCREMENT,
    MOBILE_BASE_CHANGE_RATE, MOBILE_BRIGHT_CHANGE_RATE, MOBILE_TIME_INCREMENT,
    MOBILE_USER_AGENT_TOKENS, MOBILE_WIDTH_THRESHOLD,
};

/// Binary device classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    /// Phones, tablets and narrow viewports
    Mobile,
    /// Everything else
    Desktop,
}

impl DeviceClass {
    /// Classify from an optional user agent and the viewport width
    ///
    /// A known mobile user agent or a viewport narrower than 768 pixels
    /// counts as mobile.
    pub fn detect(user_agent: Option<&str>, viewport_width: u32) -> Self {
        let mobile_agent = user_agent.is_some_and(|agent| {
            let agent = agent.to_ascii_lowercase();
            MOBILE_USER_AGENT_TOKENS
                .iter()
                .any(|token| agent.contains(token))
        });

        if mobile_agent || viewport_width < MOBILE_WIDTH_THRESHOLD {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    /// Whether this is the mobile class
    pub const fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Per-device animation constants
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedProfile {
    /// Time accumulator increment per frame
    pub time_increment: f64,
    /// Glyph change probability per frame for ordinary cells
    pub base_change_rate: f64,
    /// Glyph change probability per frame for bright cells
    pub bright_change_rate: f64,
}

impl SpeedProfile {
    /// Constants for a device class
    pub const fn for_class(class: DeviceClass) -> Self {
        match class {
            DeviceClass::Desktop => Self {
                time_increment: DESKTOP_TIME_INCREMENT,
                base_change_rate: DESKTOP_BASE_CHANGE_RATE,
                bright_change_rate: DESKTOP_BRIGHT_CHANGE_RATE,
            },
            DeviceClass::Mobile => Self {
                time_increment: MOBILE_TIME_INCREMENT,
                base_change_rate: MOBILE_BASE_CHANGE_RATE,
                bright_change_rate: MOBILE_BRIGHT_CHANGE_RATE,
            },
        }
    }
}
