use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

/// What one completed run produced.
#[derive(Serialize)]
pub struct RunSummary {
    pub messages: u32,
    pub frames_per_message: usize,
    pub frames: usize,
    pub channel_width: usize,
    pub trace_path: String,
}

pub fn print_summary(summary: &RunSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["MESSAGES", "FRAMES", "WIDTH", "TRACE"])
                .add_row(vec![
                    summary.messages.to_string(),
                    format!("{} ({}/msg)", summary.frames, summary.frames_per_message),
                    summary.channel_width.to_string(),
                    summary.trace_path.clone(),
                ]);
            println!("{table}");
        }
    }
}
