use std::fmt::Write as _;

use crate::error::Result;

/// Destination for recorded frames.
///
/// One operation: append a `(message id, fragment id, frame bytes)` triple.
/// The frame engine owns frame construction; a sink only persists what it is
/// handed, in call order.
pub trait TraceSink {
    fn record(&mut self, message_id: u32, fragment_id: u32, frame: &[u8]) -> Result<()>;
}

/// One recorded frame, as retained by [`MemorySink`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceRecord {
    pub message_id: u32,
    pub fragment_id: u32,
    pub bytes: Vec<u8>,
}

/// Render one trace line (without the trailing newline).
///
/// Ids are decimal; every frame byte is lowercase two-digit hex followed by a
/// space, so the line ends with a space whenever the frame is non-empty.
pub fn render_record(message_id: u32, fragment_id: u32, frame: &[u8]) -> String {
    let mut line = String::with_capacity(16 + frame.len() * 3);
    // Infallible for String targets.
    let _ = write!(line, "{message_id}, {fragment_id}, ");
    for byte in frame {
        let _ = write!(line, "{byte:02x} ");
    }
    line
}

/// In-memory sink that retains every record, in order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Vec<TraceRecord>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records received so far, in dispatch order.
    pub fn records(&self) -> &[TraceRecord] {
        &self.records
    }

    /// Records belonging to one message, in fragment order.
    pub fn records_for(&self, message_id: u32) -> Vec<&TraceRecord> {
        self.records
            .iter()
            .filter(|r| r.message_id == message_id)
            .collect()
    }
}

impl TraceSink for MemorySink {
    fn record(&mut self, message_id: u32, fragment_id: u32, frame: &[u8]) -> Result<()> {
        self.records.push(TraceRecord {
            message_id,
            fragment_id,
            bytes: frame.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_ids_and_hex_bytes() {
        let line = render_record(3, 1, &[0x07, 0xd5, 0x00, 0xff]);
        assert_eq!(line, "3, 1, 07 d5 00 ff ");
    }

    #[test]
    fn renders_ids_in_decimal_above_nine() {
        let line = render_record(12, 10, &[0xaa]);
        assert_eq!(line, "12, 10, aa ");
    }

    #[test]
    fn renders_empty_frame_without_hex_column() {
        assert_eq!(render_record(1, 1, &[]), "1, 1, ");
    }

    #[test]
    fn memory_sink_retains_order() {
        let mut sink = MemorySink::new();
        sink.record(1, 1, &[0x01]).unwrap();
        sink.record(1, 2, &[0x02]).unwrap();
        sink.record(2, 1, &[0x03]).unwrap();

        assert_eq!(sink.records().len(), 3);
        assert_eq!(sink.records()[1].fragment_id, 2);

        let first = sink.records_for(1);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].bytes, vec![0x01]);
        assert_eq!(first[1].bytes, vec![0x02]);
    }
}
