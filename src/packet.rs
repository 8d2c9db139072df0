//! Hex command packets.

use crate::hex;
use heapless::{String, Vec};

/// Maximum packet length in hex characters.
pub const MAX_PACKET_LEN: usize = 64;

/// Maximum packet length in bytes once decoded.
pub const MAX_PACKET_BYTES: usize = MAX_PACKET_LEN / 2;

/// Errors that can occur while building or decoding packets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Text contains a non-hex character or an odd number of digits.
    InvalidHex,

    /// Text exceeds `MAX_PACKET_LEN`.
    TooLong,
}

impl core::fmt::Display for PacketError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PacketError::InvalidHex => write!(f, "packet is not an even-length hex string"),
            PacketError::TooLong => {
                write!(f, "packet exceeds {} hex characters", MAX_PACKET_LEN)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PacketError {}

/// A command packet: hex digits concatenated without separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Packet(String<MAX_PACKET_LEN>);

impl Packet {
    /// Creates a new packet builder.
    pub fn builder() -> PacketBuilder {
        PacketBuilder::new()
    }

    /// Wraps existing hex text as a packet.
    ///
    /// # Errors
    /// * `InvalidHex` - Non-hex character or odd length
    /// * `TooLong` - More than `MAX_PACKET_LEN` characters
    pub fn parse(text: &str) -> Result<Self, PacketError> {
        if text.len() % 2 != 0 || hex::digits_invalid(text) {
            return Err(PacketError::InvalidHex);
        }

        let mut buf = String::new();
        buf.push_str(text).map_err(|_| PacketError::TooLong)?;
        Ok(Packet(buf))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Length in hex characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the hex text into raw bytes.
    ///
    /// Packets from [`PacketBuilder::build`] and [`Packet::parse`] always
    /// decode.
    ///
    /// # Errors
    /// * `InvalidHex` - The packet holds an odd number of digits
    pub fn to_bytes(&self) -> Result<Vec<u8, MAX_PACKET_BYTES>, PacketError> {
        let digits = self.0.as_bytes();
        if digits.len() % 2 != 0 {
            return Err(PacketError::InvalidHex);
        }

        let mut bytes = Vec::new();
        for pair in digits.chunks_exact(2) {
            let high = hex::digit_value(pair[0]).ok_or(PacketError::InvalidHex)?;
            let low = hex::digit_value(pair[1]).ok_or(PacketError::InvalidHex)?;
            bytes
                .push((high << 4) | low)
                .map_err(|_| PacketError::TooLong)?;
        }
        Ok(bytes)
    }
}

impl AsRef<str> for Packet {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl core::fmt::Display for Packet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Packet {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{=str}", self.as_str())
    }
}

/// Builder that concatenates hex fragments into a [`Packet`].
#[derive(Debug, Default)]
pub struct PacketBuilder {
    buf: String<MAX_PACKET_LEN>,
}

impl PacketBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    /// Appends a hex fragment.
    ///
    /// # Panics
    /// Panics if the packet capacity is exceeded or the fragment contains a
    /// non-hex character. Both are programming errors in a channel layout.
    pub fn fragment(mut self, fragment: &str) -> Self {
        if hex::digits_invalid(fragment) {
            panic!("packet fragment is not hex: {}", fragment);
        }
        if self.buf.push_str(fragment).is_err() {
            panic!("packet capacity exceeded");
        }
        self
    }

    /// Finishes the packet.
    ///
    /// # Panics
    /// Panics if the fragments add up to an odd number of digits, which
    /// [`Packet::parse`] would also reject.
    pub fn build(self) -> Packet {
        if self.buf.len() % 2 != 0 {
            panic!("packet has an odd number of hex digits: {}", self.buf);
        }
        Packet(self.buf)
    }
}
