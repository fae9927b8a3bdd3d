use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{Result, TraceError};
use crate::sink::{render_record, TraceSink};

/// File-backed trace sink.
///
/// The file name embeds the run configuration
/// (`messages_{count}_{payload}_{width}.log`), so repeated runs with an
/// identical configuration append to the same file. Each record is written as
/// one line and flushed immediately.
pub struct FileSink {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open (creating the directory and file as needed) the trace file for
    /// the given run configuration, in append mode.
    pub fn open(
        dir: impl AsRef<Path>,
        message_count: u32,
        payload_length: usize,
        channel_width: usize,
    ) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|source| TraceError::Open {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(trace_file_name(message_count, payload_length, channel_width));
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|source| TraceError::Open {
                path: path.clone(),
                source,
            })?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Path of the trace file this sink appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TraceSink for FileSink {
    fn record(&mut self, message_id: u32, fragment_id: u32, frame: &[u8]) -> Result<()> {
        let line = render_record(message_id, fragment_id, frame);
        writeln!(self.writer, "{line}")?;
        self.writer.flush()?;
        Ok(())
    }
}

fn trace_file_name(message_count: u32, payload_length: usize, channel_width: usize) -> String {
    format!("messages_{message_count}_{payload_length}_{channel_width}.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_temp_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "fragwire-trace-{tag}-{}-{}",
            std::process::id(),
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("time should be after epoch")
                .as_nanos()
        ));
        fs::create_dir_all(&dir).expect("temp dir should be creatable");
        dir
    }

    #[test]
    fn file_name_embeds_configuration() {
        assert_eq!(trace_file_name(5, 6, 20), "messages_5_6_20.log");
    }

    #[test]
    fn writes_one_line_per_record() {
        let dir = unique_temp_dir("lines");
        let mut sink = FileSink::open(&dir, 2, 1, 13).unwrap();
        sink.record(1, 1, &[0x07, 0xff]).unwrap();
        sink.record(2, 1, &[0x07, 0xee]).unwrap();

        let contents = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(contents, "1, 1, 07 ff \n2, 1, 07 ee \n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn reopening_appends_to_same_file() {
        let dir = unique_temp_dir("append");

        let mut sink = FileSink::open(&dir, 1, 0, 12).unwrap();
        sink.record(1, 1, &[0x01]).unwrap();
        let path = sink.path().to_path_buf();
        drop(sink);

        let mut sink = FileSink::open(&dir, 1, 0, 12).unwrap();
        assert_eq!(sink.path(), path);
        sink.record(1, 1, &[0x02]).unwrap();
        drop(sink);

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn creates_missing_trace_directory() {
        let dir = unique_temp_dir("mkdir").join("nested").join("log");
        let sink = FileSink::open(&dir, 1, 2, 14).unwrap();
        assert!(sink.path().starts_with(&dir));
        assert!(dir.is_dir());
        let _ = fs::remove_dir_all(dir.parent().unwrap().parent().unwrap());
    }
}
