use fragwire_trace::TraceSink;
use tracing::debug;

use crate::codec::{encode_fragment, Frame, FOOTER_SIZE, HEADER_SIZE, PAYLOAD_FILL};
use crate::config::ChannelConfig;
use crate::error::Result;

/// Turns logical messages into channel-width wire frames and dispatches them
/// to a trace sink.
///
/// The engine holds a validated [`ChannelConfig`] and nothing else; framing a
/// message is pure, and dispatch to the sink is the only side effect.
pub struct FrameEngine {
    config: ChannelConfig,
}

impl FrameEngine {
    pub fn new(config: ChannelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChannelConfig {
        &self.config
    }

    /// Frame and dispatch every message, ids 1..=count in ascending order.
    ///
    /// Fragments of one message are dispatched in fragment order before the
    /// next message starts. A sink failure aborts the run.
    pub fn send_all<S: TraceSink>(&self, sink: &mut S) -> Result<()> {
        for message_id in 1..=self.config.message_count() {
            for frame in self.frame_message(message_id) {
                sink.record(frame.message_id, frame.fragment_id, &frame.bytes)?;
            }
        }
        Ok(())
    }

    /// Number of frames every message in this run produces.
    ///
    /// Constant across messages: payloads are synthetic and all the same
    /// length.
    pub fn frames_per_message(&self) -> usize {
        let total = HEADER_SIZE + self.config.payload_length() + FOOTER_SIZE;
        if total <= self.config.channel_width() {
            1
        } else {
            self.config
                .payload_length()
                .div_ceil(self.config.payload_per_fragment())
        }
    }

    /// Build the frames for one message, fragment ids from 1.
    ///
    /// A message whose header + payload + footer fit the channel yields a
    /// single frame; otherwise the payload is split across
    /// `ceil(payload_length / payload_per_fragment)` frames, each filled to
    /// capacity except possibly the last.
    pub fn frame_message(&self, message_id: u32) -> Vec<Frame> {
        let payload = vec![PAYLOAD_FILL; self.config.payload_length()];
        let width = self.config.channel_width();
        let total = HEADER_SIZE + payload.len() + FOOTER_SIZE;

        if total <= width {
            debug!(message_id, fragments = 1, "framed message");
            return vec![encode_fragment(width, message_id, 1, true, &payload)];
        }

        let per_fragment = self.config.payload_per_fragment();
        let count = payload.len().div_ceil(per_fragment);
        let mut frames = Vec::with_capacity(count);

        for fragment_id in 1..=count as u32 {
            let offset = (fragment_id as usize - 1) * per_fragment;
            let take = per_fragment.min(payload.len() - offset);
            let last = fragment_id as usize == count;
            frames.push(encode_fragment(
                width,
                message_id,
                fragment_id,
                last,
                &payload[offset..offset + take],
            ));
        }

        debug!(message_id, fragments = count, "framed message");
        frames
    }
}
