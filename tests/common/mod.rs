//! Shared test infrastructure for timebox-channels integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use timebox_channels::{MessageQueue, Packet};

// ============================================================================
// Recording Queue
// ============================================================================

/// A queue operation observed by [`RecordingQueue`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueueOp {
    Clear,
    Push(Packet),
}

/// Mock queue that records every clear and push it receives
pub struct RecordingQueue {
    packets: heapless::Vec<Packet, 8>,
    history: heapless::Vec<QueueOp, 32>,
}

impl RecordingQueue {
    pub fn new() -> Self {
        Self {
            packets: heapless::Vec::new(),
            history: heapless::Vec::new(),
        }
    }

    pub fn packets(&self) -> &[Packet] {
        &self.packets
    }

    pub fn history(&self) -> &[QueueOp] {
        &self.history
    }

    /// Forget recorded operations, keeping the queued packets
    pub fn reset_history(&mut self) {
        self.history.clear();
    }
}

impl MessageQueue for RecordingQueue {
    fn clear(&mut self) {
        self.packets.clear();
        let _ = self.history.push(QueueOp::Clear);
    }

    fn push(&mut self, packet: Packet) {
        let _ = self.packets.push(packet.clone());
        let _ = self.history.push(QueueOp::Push(packet));
    }
}

// ============================================================================
// Packet Helpers
// ============================================================================

/// Field ranges of a lightning packet, in hex characters
pub const PREFIX: core::ops::Range<usize> = 0..4;
pub const COLOR: core::ops::Range<usize> = 4..10;
pub const BRIGHTNESS: core::ops::Range<usize> = 10..12;
pub const MODE: core::ops::Range<usize> = 12..14;
pub const POWER: core::ops::Range<usize> = 14..16;
pub const SUFFIX: core::ops::Range<usize> = 16..22;

/// Returns one field of a lightning packet
pub fn field(packet: &Packet, range: core::ops::Range<usize>) -> &str {
    &packet.as_str()[range]
}

/// Asserts that two lightning packets differ only in the given field
pub fn assert_only_field_changed(before: &Packet, after: &Packet, changed: core::ops::Range<usize>) {
    for range in [PREFIX, COLOR, BRIGHTNESS, MODE, POWER, SUFFIX] {
        if range == changed {
            continue;
        }
        assert_eq!(
            field(before, range.clone()),
            field(after, range.clone()),
            "field {:?} changed unexpectedly",
            range
        );
    }
}
