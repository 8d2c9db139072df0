//! Lightning channel: solid colors and light effects.
//!
//! Packet layout (hex characters):
//!
//! ```text
//! ┌────────┬────────┬────────────┬──────┬───────┬────────┐
//! │ PREFIX │ COLOR  │ BRIGHTNESS │ MODE │ POWER │ SUFFIX │
//! │ 4      │ 6      │ 2          │ 2    │ 2     │ 6      │
//! └────────┴────────┴────────────┴──────┴───────┴────────┘
//! ```

use crate::channel::Channel;
use crate::color::{ColorInput, HexColor};
use crate::hex;
use crate::packet::{MAX_PACKET_LEN, Packet};
use crate::queue::{MessageQueue, PacketQueue};
use crate::types::{Brightness, ChannelError, LightningMode};

/// Command prefix of lightning packets.
pub const LIGHTNING_PREFIX: &str = "4501";

/// Command suffix of lightning packets.
pub const LIGHTNING_SUFFIX: &str = "000000";

/// Length of a lightning packet in hex characters.
pub const LIGHTNING_PACKET_LEN: usize = LIGHTNING_PREFIX.len()
    + hex::COLOR_HEX_WIDTH
    + 3 * hex::BYTE_HEX_WIDTH
    + LIGHTNING_SUFFIX.len();

const _: () = assert!(LIGHTNING_PACKET_LEN <= MAX_PACKET_LEN);

/// Full configuration of a lightning channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightningConfig {
    pub mode: LightningMode,
    pub color: HexColor,
    pub brightness: Brightness,
    pub power: bool,
}

impl Default for LightningConfig {
    fn default() -> Self {
        Self {
            mode: LightningMode::PlainColor,
            color: HexColor::WHITE,
            brightness: Brightness::MAX,
            power: true,
        }
    }
}

impl LightningConfig {
    /// Returns this configuration with every field set in `options` replaced.
    ///
    /// The color is normalized before anything is applied, so a failure
    /// leaves no partial result behind.
    ///
    /// # Errors
    /// * `InvalidColor` - The color option does not normalize
    pub fn overlay(&self, options: &LightningOptions<'_>) -> Result<Self, ChannelError> {
        let color = match options.color {
            Some(input) => input.normalize().inspect_err(|_| {
                #[cfg(feature = "defmt")]
                defmt::debug!("lightning: rejected color input");
            })?,
            None => self.color,
        };

        Ok(Self {
            mode: options.mode.map_or(self.mode, LightningMode::canonical),
            color,
            brightness: options.brightness.unwrap_or(self.brightness),
            power: options.power.unwrap_or(self.power),
        })
    }

    /// Encodes the configuration into a lightning packet.
    pub fn encode(&self) -> Packet {
        Packet::builder()
            .fragment(LIGHTNING_PREFIX)
            .fragment(&hex::color_to_hex(self.color))
            .fragment(&hex::brightness_to_hex(self.brightness))
            .fragment(&hex::number_to_hex(self.mode.ordinal()))
            .fragment(hex::bool_to_hex(self.power))
            .fragment(LIGHTNING_SUFFIX)
            .build()
    }
}

/// Partial lightning configuration; unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightningOptions<'a> {
    pub mode: Option<LightningMode>,
    pub color: Option<ColorInput<'a>>,
    pub brightness: Option<Brightness>,
    pub power: Option<bool>,
}

impl<'a> LightningOptions<'a> {
    /// Creates options with no field set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(mut self, mode: impl Into<LightningMode>) -> Self {
        self.mode = Some(mode.into().canonical());
        self
    }

    pub fn color(mut self, color: impl Into<ColorInput<'a>>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    pub fn power(mut self, power: bool) -> Self {
        self.power = Some(power);
        self
    }
}

/// Lightning display channel.
///
/// Holds a [`LightningConfig`] and keeps its queue holding exactly one
/// packet: the encoding of the current configuration. The constructor and
/// every successful mutation clear the queue and push the fresh packet;
/// a failed mutation touches neither the configuration nor the queue.
///
/// # Type Parameters
/// * `Q` - Queue the packets are published into
#[derive(Debug)]
pub struct LightningChannel<Q: MessageQueue = PacketQueue> {
    config: LightningConfig,
    queue: Q,
}

impl<Q: MessageQueue> LightningChannel<Q> {
    /// Creates a channel from `options` merged over the defaults and
    /// publishes its first packet.
    ///
    /// # Errors
    /// * `InvalidColor` - The color option does not normalize
    pub fn new(queue: Q, options: LightningOptions<'_>) -> Result<Self, ChannelError> {
        let config = LightningConfig::default().overlay(&options)?;
        Ok(Self::from_config(queue, config))
    }

    /// Creates a channel with the default configuration.
    pub fn with_defaults(queue: Q) -> Self {
        Self::from_config(queue, LightningConfig::default())
    }

    /// Creates a channel from a complete configuration.
    pub fn from_config(queue: Q, config: LightningConfig) -> Self {
        let mut channel = Self { config, queue };
        channel.republish();
        channel
    }

    #[inline]
    pub fn config(&self) -> &LightningConfig {
        &self.config
    }

    #[inline]
    pub fn mode(&self) -> LightningMode {
        self.config.mode
    }

    /// Sets the effect. Any ordinal is accepted; known ordinals are stored
    /// as their named mode.
    pub fn set_mode(&mut self, mode: impl Into<LightningMode>) {
        self.config.mode = mode.into().canonical();
        self.republish();
    }

    #[inline]
    pub fn color(&self) -> HexColor {
        self.config.color
    }

    /// Sets the color.
    ///
    /// # Errors
    /// * `InvalidColor` - The input does not normalize; the channel is left
    ///   untouched
    pub fn set_color<'a>(&mut self, color: impl Into<ColorInput<'a>>) -> Result<(), ChannelError> {
        self.config.color = color.into().normalize()?;
        self.republish();
        Ok(())
    }

    #[inline]
    pub fn power(&self) -> bool {
        self.config.power
    }

    pub fn set_power(&mut self, power: bool) {
        self.config.power = power;
        self.republish();
    }

    #[inline]
    pub fn brightness(&self) -> Brightness {
        self.config.brightness
    }

    pub fn set_brightness(&mut self, brightness: Brightness) {
        self.config.brightness = brightness;
        self.republish();
    }

    /// Applies several fields at once with a single republish.
    ///
    /// # Errors
    /// * `InvalidColor` - The color option does not normalize; nothing is
    ///   applied
    pub fn update(&mut self, options: LightningOptions<'_>) -> Result<(), ChannelError> {
        self.config = self.config.overlay(&options)?;
        self.republish();
        Ok(())
    }

    /// Returns a mutable reference to the queue, e.g. to drain it.
    pub fn queue_mut(&mut self) -> &mut Q {
        &mut self.queue
    }

    /// Consumes the channel and returns its queue.
    pub fn into_queue(self) -> Q {
        self.queue
    }

    /// Replaces the queued packet with the encoding of the current config.
    fn republish(&mut self) {
        let packet = self.config.encode();
        #[cfg(feature = "defmt")]
        defmt::trace!("lightning: publish {}", packet);

        self.queue.clear();
        self.queue.push(packet);
    }
}

impl<Q: MessageQueue> Channel for LightningChannel<Q> {
    type Queue = Q;

    fn packet(&self) -> Packet {
        self.config.encode()
    }

    fn queue(&self) -> &Q {
        &self.queue
    }
}
