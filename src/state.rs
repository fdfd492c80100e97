//! Implements the device state

use std::fmt::{self, Display};

/// Value every setting starts out with.
pub(crate) const INITIAL_SETTING: i64 = 20;

/// The adjustable settings of the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Setting {
    Volume,
    Brightness,
    Contrast,
}

impl Setting {
    pub(crate) const ALL: [Setting; 3] = [Setting::Volume, Setting::Brightness, Setting::Contrast];

    /// Parse a normalized (lower case) token.
    pub(crate) fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == token)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Setting::Volume => "volume",
            Setting::Brightness => "brightness",
            Setting::Contrast => "contrast",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DeviceState {
    pub volume: i64,
    pub brightness: i64,
    pub contrast: i64,
    /// Power state of the TV.
    pub is_online: bool,
}

impl DeviceState {
    pub(crate) fn new() -> Self {
        Self {
            volume: INITIAL_SETTING,
            brightness: INITIAL_SETTING,
            contrast: INITIAL_SETTING,
            is_online: false,
        }
    }

    pub(crate) fn get(&self, setting: Setting) -> i64 {
        match setting {
            Setting::Volume => self.volume,
            Setting::Brightness => self.brightness,
            Setting::Contrast => self.contrast,
        }
    }

    /// Add `delta` to a setting. There is no range limit; overflow wraps.
    pub(crate) fn adjust(&mut self, setting: Setting, delta: i64) {
        let value = match setting {
            Setting::Volume => &mut self.volume,
            Setting::Brightness => &mut self.brightness,
            Setting::Contrast => &mut self.contrast,
        };
        *value = value.wrapping_add(delta);
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

/// Options snapshot as shown by `options show`.
impl Display for DeviceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let online = if self.is_online { "True" } else { "False" };
        write!(
            f,
            "Options:\nVolume {}\nIsOnline {online}\nBrightness {}\nContrast {}",
            self.volume, self.brightness, self.contrast
        )
    }
}
