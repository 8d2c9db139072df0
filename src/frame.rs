//! Transport framing for Timebox-Evo packets.
//!
//! Frame format:
//! - START (1 byte): 0x01
//! - LENGTH (2 bytes, little-endian): payload length + 2
//! - PAYLOAD (0-32 bytes): the packet decoded from hex
//! - CHECKSUM (2 bytes, little-endian): wrapping sum of LENGTH and PAYLOAD bytes
//! - END (1 byte): 0x02

use crate::packet::{MAX_PACKET_BYTES, Packet, PacketError};
use heapless::Vec;

/// Frame start byte
pub const FRAME_START: u8 = 0x01;

/// Frame end byte
pub const FRAME_END: u8 = 0x02;

/// Maximum complete frame size (START + LENGTH + MAX_PAYLOAD + CHECKSUM + END)
pub const MAX_FRAME_SIZE: usize = 1 + 2 + MAX_PACKET_BYTES + 2 + 1;

/// Errors that can occur during frame encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FrameError {
    /// Packet text is not an even-length hex string
    InvalidHex,
    /// Payload exceeds `MAX_PACKET_BYTES`
    PayloadTooLarge,
}

impl core::fmt::Display for FrameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FrameError::InvalidHex => write!(f, "packet is not an even-length hex string"),
            FrameError::PayloadTooLarge => {
                write!(f, "payload exceeds {} bytes", MAX_PACKET_BYTES)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

impl From<PacketError> for FrameError {
    fn from(err: PacketError) -> Self {
        match err {
            PacketError::InvalidHex => FrameError::InvalidHex,
            PacketError::TooLong => FrameError::PayloadTooLarge,
        }
    }
}

/// Calculate the checksum over the length field and payload
pub fn checksum(length: u16, payload: &[u8]) -> u16 {
    let [low, high] = length.to_le_bytes();
    payload
        .iter()
        .fold(u16::from(low).wrapping_add(u16::from(high)), |sum, &byte| {
            sum.wrapping_add(u16::from(byte))
        })
}

/// Frame a raw payload
pub fn encode_payload(payload: &[u8]) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
    if payload.len() > MAX_PACKET_BYTES {
        return Err(FrameError::PayloadTooLarge);
    }

    // Bounded by MAX_PACKET_BYTES above
    let length = (payload.len() + 2) as u16;
    let crc = checksum(length, payload);

    let mut frame = Vec::new();
    frame.push(FRAME_START).map_err(|_| FrameError::PayloadTooLarge)?;
    frame.extend_from_slice(&length.to_le_bytes()).map_err(|_| FrameError::PayloadTooLarge)?;
    frame.extend_from_slice(payload).map_err(|_| FrameError::PayloadTooLarge)?;
    frame.extend_from_slice(&crc.to_le_bytes()).map_err(|_| FrameError::PayloadTooLarge)?;
    frame.push(FRAME_END).map_err(|_| FrameError::PayloadTooLarge)?;
    Ok(frame)
}

/// Frame a packet for the wire
pub fn encode_frame(packet: &Packet) -> Result<Vec<u8, MAX_FRAME_SIZE>, FrameError> {
    let payload = packet.to_bytes()?;
    encode_payload(&payload)
}
