//! Core value types for channel configuration.

/// Lightning effect rendered by the display.
///
/// The known effects map to the ordinals the firmware ships with. Any other
/// ordinal is carried as [`LightningMode::Other`] and encoded unchanged; the
/// crate does not check it against what a given firmware supports.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LightningMode {
    /// Solid color across the whole panel.
    #[default]
    PlainColor,

    /// Heart animation.
    Love,

    /// Growing plants animation.
    Plants,

    /// "No man's land" animation.
    NoMansLand,

    /// Fire animation.
    Fire,

    /// Twinkling stars.
    Stars,

    /// An ordinal without a named effect.
    Other(u8),
}

impl LightningMode {
    /// Returns the wire ordinal of this mode.
    pub const fn ordinal(self) -> u8 {
        match self {
            LightningMode::PlainColor => 0x00,
            LightningMode::Love => 0x01,
            LightningMode::Plants => 0x02,
            LightningMode::NoMansLand => 0x03,
            LightningMode::Fire => 0x04,
            LightningMode::Stars => 0x05,
            LightningMode::Other(ordinal) => ordinal,
        }
    }

    /// Maps an ordinal to its named mode, falling back to `Other`.
    pub const fn from_ordinal(ordinal: u8) -> Self {
        match ordinal {
            0x00 => LightningMode::PlainColor,
            0x01 => LightningMode::Love,
            0x02 => LightningMode::Plants,
            0x03 => LightningMode::NoMansLand,
            0x04 => LightningMode::Fire,
            0x05 => LightningMode::Stars,
            other => LightningMode::Other(other),
        }
    }

    /// Replaces an `Other` holding a known ordinal with its named mode.
    pub const fn canonical(self) -> Self {
        Self::from_ordinal(self.ordinal())
    }
}

// `Other(0)` and `PlainColor` put the same byte on the wire, so equality
// follows the ordinal.
impl PartialEq for LightningMode {
    fn eq(&self, other: &Self) -> bool {
        self.ordinal() == other.ordinal()
    }
}

impl Eq for LightningMode {}

impl From<u8> for LightningMode {
    fn from(ordinal: u8) -> Self {
        LightningMode::from_ordinal(ordinal)
    }
}

impl From<LightningMode> for u8 {
    fn from(mode: LightningMode) -> Self {
        mode.ordinal()
    }
}

/// Display brightness as a percentage in `0..=100`.
///
/// Out-of-range levels are rejected when the value is built, so everything
/// downstream of this type (setters, encoding) is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Panel off.
    pub const MIN: Self = Brightness(0);

    /// Full brightness.
    pub const MAX: Self = Brightness(100);

    /// Creates a brightness level.
    ///
    /// # Errors
    /// * `BrightnessOutOfRange` - `level` is above 100
    pub const fn new(level: u8) -> Result<Self, ChannelError> {
        if level > Self::MAX.0 {
            return Err(ChannelError::BrightnessOutOfRange(level));
        }
        Ok(Brightness(level))
    }

    /// Creates a brightness level, clamping anything above 100.
    pub const fn saturating(level: u8) -> Self {
        if level > Self::MAX.0 {
            Self::MAX
        } else {
            Brightness(level)
        }
    }

    /// Returns the level in percent.
    #[inline]
    pub const fn level(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for Brightness {
    type Error = ChannelError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Brightness::new(level)
    }
}

impl From<Brightness> for u8 {
    fn from(brightness: Brightness) -> Self {
        brightness.0
    }
}

/// Errors raised while configuring a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelError {
    /// The color input could not be normalized to an RGB triplet.
    InvalidColor,

    /// Brightness level above 100.
    BrightnessOutOfRange(u8),
}

impl core::fmt::Display for ChannelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ChannelError::InvalidColor => {
                write!(f, "provided color is not valid")
            }
            ChannelError::BrightnessOutOfRange(level) => {
                write!(f, "brightness {} is out of range (expected 0-100)", level)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ChannelError {}
