use bytes::{BufMut, Bytes, BytesMut};

/// Preamble: 6 bytes of 0x07.
pub const PREAMBLE_SIZE: usize = 6;

/// Frame header: preamble (6) + sequence byte (1) + marker byte (1) = 8 bytes.
pub const HEADER_SIZE: usize = 8;

/// Footer: one 4-byte marker word.
pub const FOOTER_SIZE: usize = 4;

/// Smallest channel width that can hold a frame at all (header + footer).
pub const MIN_FRAME_SIZE: usize = HEADER_SIZE + FOOTER_SIZE;

/// Byte repeated across the preamble.
pub const PREAMBLE_BYTE: u8 = 0x07;

/// Start-of-frame delimiter, carried by the first frame of every message.
pub const START_DELIMITER: u8 = 0xD5;

/// Footer word on the last (or only) frame of a message.
pub const TERMINAL_FOOTER: u32 = 0xDDCC_BBAA;

/// Footer word on a fragment with more fragments following.
pub const CONTINUATION_FOOTER: u32 = 0x4433_2211;

/// Synthetic payload fill byte.
pub const PAYLOAD_FILL: u8 = 0xFF;

/// One wire frame, tagged with the message and fragment it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message this frame carries payload for (1-based).
    pub message_id: u32,
    /// Position within the message (1-based, 1 for a non-fragmented frame).
    pub fragment_id: u32,
    /// The full channel-width byte sequence.
    pub bytes: Bytes,
}

/// Sequence byte: identifies the message, not the fragment, so it is
/// constant across all fragments of one message.
pub fn sequence_byte(message_id: u32) -> u8 {
    ((message_id - 1) % 4) as u8
}

/// Marker byte at offset 7: the start delimiter on the first frame of a
/// message, a wrapping fragment counter on later ones. The counter range is
/// [0, 3], so it can never collide with the delimiter.
pub fn marker_byte(fragment_id: u32) -> u8 {
    if fragment_id == 1 {
        START_DELIMITER
    } else {
        ((fragment_id - 2) % 4) as u8
    }
}

/// Encode one frame of exactly `channel_width` bytes.
///
/// Wire format:
/// ```text
/// ┌───────────────┬──────────┬──────────┬──────────┬───────────┬─────────┐
/// │ Preamble (6B) │ Sequence │ Marker   │ Payload  │ Footer    │ Padding │
/// │ 0x07 × 6      │ (1B)     │ (1B)     │ (var)    │ (4B LE)   │ zeros   │
/// └───────────────┴──────────┴──────────┴──────────┴───────────┴─────────┘
/// ```
///
/// The footer follows the payload immediately; any remaining capacity is
/// zero-filled so the frame is always exactly the channel width. Callers
/// guarantee the payload slice fits (`HEADER_SIZE + payload.len() +
/// FOOTER_SIZE <= channel_width`).
pub fn encode_fragment(
    channel_width: usize,
    message_id: u32,
    fragment_id: u32,
    last: bool,
    payload: &[u8],
) -> Frame {
    debug_assert!(HEADER_SIZE + payload.len() + FOOTER_SIZE <= channel_width);

    let mut buf = BytesMut::with_capacity(channel_width);
    buf.put_bytes(PREAMBLE_BYTE, PREAMBLE_SIZE);
    buf.put_u8(sequence_byte(message_id));
    buf.put_u8(marker_byte(fragment_id));
    buf.put_slice(payload);
    buf.put_u32_le(if last {
        TERMINAL_FOOTER
    } else {
        CONTINUATION_FOOTER
    });
    buf.put_bytes(0, channel_width - buf.len());

    Frame {
        message_id,
        fragment_id,
        bytes: buf.freeze(),
    }
}
