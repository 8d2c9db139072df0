//! Display channels.
//!
//! A channel owns the configuration of one display mode and keeps exactly
//! the packets for that configuration in its [`MessageQueue`].

use crate::packet::Packet;
use crate::queue::MessageQueue;

pub mod lightning;

pub use lightning::{LightningChannel, LightningConfig, LightningOptions};

/// Behavior shared by every channel type.
pub trait Channel {
    /// Queue the channel publishes into.
    type Queue: MessageQueue;

    /// Encodes the current configuration.
    fn packet(&self) -> Packet;

    /// Returns the queue holding the published packets.
    fn queue(&self) -> &Self::Queue;
}
