/// Errors raised while validating a channel configuration or running a
/// simulation.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The configured message count is zero.
    #[error("message count must be greater than zero")]
    NoMessages,

    /// The channel cannot hold even an empty frame.
    #[error("channel width {width} is below the minimum frame size of {min} bytes")]
    ChannelTooNarrow { width: usize, min: usize },

    /// The channel has no room for payload bytes.
    #[error("payload of {payload} bytes cannot fit in channel width {width}")]
    PayloadDoesNotFit { payload: usize, width: usize },

    /// The trace sink failed to persist a frame.
    #[error(transparent)]
    Trace(#[from] fragwire_trace::TraceError),
}

pub type Result<T> = std::result::Result<T, FrameError>;
