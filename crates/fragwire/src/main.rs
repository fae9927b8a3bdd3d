mod exit;
mod logging;
mod output;

use std::path::PathBuf;

use clap::Parser;
use fragwire_frame::{ChannelConfig, FrameEngine};
use fragwire_trace::FileSink;
use tracing::info;

use crate::exit::{frame_error, trace_error, CliResult, SUCCESS};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::{print_summary, OutputFormat, RunSummary};

#[derive(Parser, Debug)]
#[command(
    name = "fragwire",
    version,
    about = "Wire-level framing and fragmentation simulator"
)]
struct Cli {
    /// Number of messages to frame and record.
    message_count: u32,

    /// Synthetic payload length per message, in bytes.
    payload_length: usize,

    /// Channel width: the exact size of every emitted frame, in bytes.
    channel_width: usize,

    /// Directory the trace file is written to.
    #[arg(long, value_name = "DIR", default_value = "log")]
    trace_dir: PathBuf,

    /// Run summary format.
    #[arg(long, value_name = "FORMAT")]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: LogLevel,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    match run(cli, format) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

fn run(cli: Cli, format: OutputFormat) -> CliResult<i32> {
    let config = ChannelConfig::new(cli.message_count, cli.payload_length, cli.channel_width)
        .map_err(|err| frame_error("invalid configuration", err))?;

    let mut sink = FileSink::open(
        &cli.trace_dir,
        config.message_count(),
        config.payload_length(),
        config.channel_width(),
    )
    .map_err(|err| trace_error("failed to open trace sink", err))?;

    let engine = FrameEngine::new(config);
    engine
        .send_all(&mut sink)
        .map_err(|err| frame_error("run failed", err))?;

    let frames_per_message = engine.frames_per_message();
    let summary = RunSummary {
        messages: config.message_count(),
        frames_per_message,
        frames: frames_per_message * config.message_count() as usize,
        channel_width: config.channel_width(),
        trace_path: sink.path().display().to_string(),
    };
    info!(
        messages = summary.messages,
        frames = summary.frames,
        trace_path = %summary.trace_path,
        "run complete"
    );
    print_summary(&summary, format);

    Ok(SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_positional_integers() {
        let cli = Cli::try_parse_from(["fragwire", "5", "6", "20"])
            .expect("three integers should parse");
        assert_eq!(cli.message_count, 5);
        assert_eq!(cli.payload_length, 6);
        assert_eq!(cli.channel_width, 20);
        assert_eq!(cli.trace_dir, PathBuf::from("log"));
    }

    #[test]
    fn rejects_missing_argument() {
        let err = Cli::try_parse_from(["fragwire", "5", "6"])
            .expect_err("two arguments should fail");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn rejects_extra_argument() {
        Cli::try_parse_from(["fragwire", "5", "6", "20", "7"])
            .expect_err("four positional arguments should fail");
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = Cli::try_parse_from(["fragwire", "5", "abc", "20"])
            .expect_err("non-numeric payload length should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn rejects_negative_token() {
        // Leading '-' never parses as an unsigned value.
        Cli::try_parse_from(["fragwire", "5", "--", "-1", "20"])
            .expect_err("negative payload length should fail");
    }

    #[test]
    fn parses_trace_dir_and_format_flags() {
        let cli = Cli::try_parse_from([
            "fragwire",
            "1",
            "0",
            "12",
            "--trace-dir",
            "/tmp/traces",
            "--format",
            "json",
        ])
        .expect("flags should parse");
        assert_eq!(cli.trace_dir, PathBuf::from("/tmp/traces"));
        assert!(matches!(cli.format, Some(OutputFormat::Json)));
    }
}
