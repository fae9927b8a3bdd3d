//! Append-only textual trace sink for recorded wire frames.
//!
//! The simulator never transmits anything; "sending" a frame means handing it
//! to a [`TraceSink`], which appends one line per frame:
//!
//! ```text
//! <message_id>, <fragment_id>, <frame bytes as lowercase two-digit hex>
//! ```
//!
//! Sinks have no framing knowledge. Two implementations are provided: a
//! file-backed sink for real runs and an in-memory sink for tests.

pub mod error;
pub mod file;
pub mod sink;

pub use error::{Result, TraceError};
pub use file::FileSink;
pub use sink::{render_record, MemorySink, TraceRecord, TraceSink};
