//! Outgoing packet queues.
//!
//! Channels publish packets through the [`MessageQueue`] trait and rely on
//! nothing beyond `clear` and `push`. [`PacketQueue`] is the fixed-capacity
//! implementation the transport drains.

use crate::packet::Packet;
use heapless::Deque;

/// Trait for abstracting the queue a channel publishes into.
///
/// Implement this to hand packets straight to your transport, or use
/// [`PacketQueue`].
pub trait MessageQueue {
    /// Removes every pending packet.
    fn clear(&mut self);

    /// Appends a packet after the ones already pending.
    ///
    /// This method cannot fail. Implementations must accept at least one
    /// packet after `clear`; anything they cannot hold is their concern.
    fn push(&mut self, packet: Packet);
}

/// Ordered, fixed-capacity queue of pending packets.
///
/// Packets pushed while the queue is full are refused and counted in
/// [`dropped`](Self::dropped); the queue never evicts on its own.
///
/// # Type Parameters
/// * `N` - Maximum number of pending packets (at least 1)
#[derive(Debug, Clone)]
pub struct PacketQueue<const N: usize = 4> {
    packets: Deque<Packet, N>,
    dropped: u32,
}

impl<const N: usize> PacketQueue<N> {
    const NON_EMPTY: () = assert!(N > 0, "packet queue capacity must be at least 1");

    /// Creates an empty queue.
    pub const fn new() -> Self {
        let () = Self::NON_EMPTY;

        Self {
            packets: Deque::new(),
            dropped: 0,
        }
    }

    /// Returns the number of pending packets.
    #[inline]
    pub fn len(&self) -> usize {
        self.packets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.packets.is_empty()
    }

    /// Returns the queue capacity.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the oldest pending packet.
    pub fn front(&self) -> Option<&Packet> {
        self.packets.front()
    }

    /// Removes and returns the oldest pending packet.
    pub fn pop_front(&mut self) -> Option<Packet> {
        self.packets.pop_front()
    }

    /// Iterates pending packets in push order.
    pub fn iter(&self) -> impl Iterator<Item = &Packet> {
        self.packets.iter()
    }

    /// Returns how many pushes were refused because the queue was full.
    #[inline]
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}

impl<const N: usize> Default for PacketQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> MessageQueue for PacketQueue<N> {
    fn clear(&mut self) {
        self.packets.clear();
    }

    fn push(&mut self, packet: Packet) {
        if self.packets.push_back(packet).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            #[cfg(feature = "defmt")]
            defmt::warn!("packet queue full ({=usize}), packet dropped", N);
        }
    }
}

impl<Q: MessageQueue + ?Sized> MessageQueue for &mut Q {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn push(&mut self, packet: Packet) {
        (**self).push(packet);
    }
}
