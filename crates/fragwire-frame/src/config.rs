use crate::codec::{FOOTER_SIZE, HEADER_SIZE, MIN_FRAME_SIZE};
use crate::error::FrameError;

/// Validated per-run channel configuration.
///
/// Construction is the one place invariants are checked; a `ChannelConfig`
/// that exists is valid, and the engine never re-validates per message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    message_count: u32,
    payload_length: usize,
    channel_width: usize,
}

impl ChannelConfig {
    /// Validate and build a configuration.
    ///
    /// Rejects a zero message count, a channel narrower than the minimum
    /// frame size, and a minimum-width channel paired with a non-empty
    /// payload (no room for payload bytes at all).
    pub fn new(
        message_count: u32,
        payload_length: usize,
        channel_width: usize,
    ) -> Result<Self, FrameError> {
        if message_count == 0 {
            return Err(FrameError::NoMessages);
        }
        if channel_width < MIN_FRAME_SIZE {
            return Err(FrameError::ChannelTooNarrow {
                width: channel_width,
                min: MIN_FRAME_SIZE,
            });
        }
        if channel_width == MIN_FRAME_SIZE && payload_length > 0 {
            return Err(FrameError::PayloadDoesNotFit {
                payload: payload_length,
                width: channel_width,
            });
        }

        Ok(Self {
            message_count,
            payload_length,
            channel_width,
        })
    }

    pub fn message_count(&self) -> u32 {
        self.message_count
    }

    pub fn payload_length(&self) -> usize {
        self.payload_length
    }

    pub fn channel_width(&self) -> usize {
        self.channel_width
    }

    /// Payload capacity of one frame.
    ///
    /// Zero only when the width is exactly the minimum frame size, which
    /// validation pairs with an empty payload, so the fragmented path always
    /// sees a positive capacity.
    pub fn payload_per_fragment(&self) -> usize {
        self.channel_width - HEADER_SIZE - FOOTER_SIZE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typical_configuration() {
        let config = ChannelConfig::new(5, 6, 20).unwrap();
        assert_eq!(config.message_count(), 5);
        assert_eq!(config.payload_length(), 6);
        assert_eq!(config.channel_width(), 20);
        assert_eq!(config.payload_per_fragment(), 8);
    }

    #[test]
    fn rejects_zero_messages() {
        let err = ChannelConfig::new(0, 10, 20).unwrap_err();
        assert!(matches!(err, FrameError::NoMessages));
    }

    #[test]
    fn rejects_channel_below_minimum_frame_size() {
        let err = ChannelConfig::new(5, 10, 5).unwrap_err();
        assert!(matches!(
            err,
            FrameError::ChannelTooNarrow { width: 5, min: 12 }
        ));
    }

    #[test]
    fn rejects_zero_width_channel() {
        let err = ChannelConfig::new(1, 0, 0).unwrap_err();
        assert!(matches!(err, FrameError::ChannelTooNarrow { .. }));
    }

    #[test]
    fn rejects_payload_with_no_room() {
        let err = ChannelConfig::new(1, 10, 12).unwrap_err();
        assert!(matches!(
            err,
            FrameError::PayloadDoesNotFit {
                payload: 10,
                width: 12
            }
        ));
    }

    #[test]
    fn accepts_empty_payload_at_minimum_width() {
        let config = ChannelConfig::new(1, 0, 12).unwrap();
        assert_eq!(config.payload_per_fragment(), 0);
    }
}
