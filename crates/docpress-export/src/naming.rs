use jiff::civil::DateTime;

/// Prefix for timestamped output files of the styled pipeline.
pub const OUTPUT_PREFIX: &str = "vnc_tutorial_";

/// `{prefix}YYYYMMDD_HHMMSS.pdf` for the given local time.
pub fn timestamped_output_name(prefix: &str, at: DateTime) -> String {
    format!("{prefix}{}.pdf", at.strftime("%Y%m%d_%H%M%S"))
}
