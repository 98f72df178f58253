use crate::config::settings::OutputFormat;
use crate::core::chart::OrderVolumeChart;
use crate::domain::model::{RecordCountSource, UploadSummary};
use crate::utils::error::Result;
use crate::utils::format::format_file_size;

const CHART_WIDTH: usize = 40;

pub fn render(summary: &UploadSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(summary)),
        OutputFormat::Json => render_json(summary),
    }
}

pub fn render_json(summary: &UploadSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(summary)?)
}

pub fn render_text(summary: &UploadSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("{}\n\n", summary.headline()));
    out.push_str(&format!(
        "File:            {} ({})\n",
        summary.file_name,
        format_file_size(summary.file_size_bytes)
    ));
    out.push_str(&format!("Total Records:   {}\n", summary.total_records));
    out.push_str(&format!("Valid Records:   {}\n", summary.valid_records));
    out.push_str(&format!("Error Records:   {}\n", summary.error_records));
    out.push_str(&format!("Processing Time: {:.1}s\n", summary.processing_time_secs));

    if !summary.columns.is_empty() {
        out.push_str(&format!("Columns:         {}\n", summary.columns.join(", ")));
    }

    out.push('\n');
    out.push_str(&OrderVolumeChart::new(summary.category_volumes.clone()).render_text(CHART_WIDTH));

    if summary.record_count_source == RecordCountSource::Simulated {
        out.push_str("\nNote: the file could not be read; the record count is simulated.\n");
    }
    if summary.simulated {
        out.push_str(
            "Note: valid/error counts, processing time and order volumes are simulated.\n",
        );
    }

    out
}
