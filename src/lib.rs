#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`LightningChannel`**: Owns a lightning configuration and keeps its queue holding the matching packet
//! - **`LightningConfig`**: Mode, color, brightness and power of the lightning channel, with documented defaults
//! - **`LightningOptions`**: Partial configuration merged over defaults or over the current state
//! - **`HexColor`**: A validated RGB triplet; `ColorInput` lists everything that normalizes to one
//! - **`Brightness`**: A percentage in `0..=100`, checked on construction
//! - **`Packet`**: A fixed-layout hex command string
//! - **`MessageQueue`**: Trait to implement for your outgoing queue (`PacketQueue` is provided)
//! - **`frame`**: Wraps a packet into the bytes sent over the wire
//!
//! Packets use uppercase hex digits. A lightning packet is always 22
//! characters long, whatever the configuration.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod channel;
pub mod color;
pub mod frame;
pub mod hex;
pub mod packet;
pub mod queue;
pub mod types;

pub use channel::lightning::{LIGHTNING_PACKET_LEN, LIGHTNING_PREFIX, LIGHTNING_SUFFIX};
pub use channel::{Channel, LightningChannel, LightningConfig, LightningOptions};
pub use color::{ColorInput, HexColor};
pub use frame::{FrameError, encode_frame};
pub use packet::{MAX_PACKET_LEN, Packet, PacketBuilder, PacketError};
pub use queue::{MessageQueue, PacketQueue};
pub use types::{Brightness, ChannelError, LightningMode};
