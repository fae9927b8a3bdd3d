//! Fixed-width frame layout and payload fragmentation.
//!
//! This is the core of fragwire. Every frame is exactly one channel width
//! long and carries:
//! - A 6-byte preamble (0x07 repeated) for receiver synchronization
//! - A sequence byte identifying the message modulo 4
//! - A marker byte: start delimiter (0xD5) on the first frame of a message,
//!   a wrapping fragment counter on later fragments
//! - Payload, then a 4-byte little-endian footer marking the frame as the
//!   message's last (terminal) or not (continuation)
//! - Zero padding out to the channel width
//!
//! Payloads that do not fit one frame are split across as many frames as the
//! channel width allows, and every produced frame is handed to a trace sink
//! in fragment order.

pub mod codec;
pub mod config;
pub mod engine;
pub mod error;

pub use codec::{
    encode_fragment, Frame, CONTINUATION_FOOTER, FOOTER_SIZE, HEADER_SIZE, MIN_FRAME_SIZE,
    PAYLOAD_FILL, PREAMBLE_BYTE, PREAMBLE_SIZE, START_DELIMITER, TERMINAL_FOOTER,
};
pub use config::ChannelConfig;
pub use engine::FrameEngine;
pub use error::{FrameError, Result};
