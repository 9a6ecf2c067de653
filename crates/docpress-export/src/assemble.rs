use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::ExportError;
use crate::process::run_tool;

const COMBINED_FILE: &str = "combined.md";
const STYLE_FILE: &str = "style.css";
const HTML_FILE: &str = "output.html";

/// The two external programs driven by [`generate_pdf_from_markdown`].
#[derive(Debug, Clone)]
pub struct Toolchain {
    /// Markdown → standalone HTML converter, called pandoc-style.
    pub converter: String,
    /// HTML → PDF renderer, called as `<renderer> <input> <output>`.
    pub renderer: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            converter: "pandoc".to_string(),
            renderer: "wkhtmltopdf".to_string(),
        }
    }
}

/// Outcome of a successful assembly run.
#[derive(Debug, Clone)]
pub struct AssemblyReport {
    pub output: PathBuf,
    /// Inputs that were merged, in order.
    pub inputs: Vec<PathBuf>,
}

/// Keep the candidates that are existing regular files, in input order.
pub fn valid_inputs(candidates: &[PathBuf]) -> Vec<PathBuf> {
    candidates
        .iter()
        .filter(|path| {
            let ok = path.is_file();
            if !ok {
                debug!(path = %path.display(), "skipping missing input");
            }
            ok
        })
        .cloned()
        .collect()
}

/// Concatenate the documents in order, each followed by exactly one blank
/// line. A document without a final newline gets one first.
pub fn combine_documents(paths: &[PathBuf]) -> Result<String, ExportError> {
    let mut combined = String::new();
    for path in paths {
        let text = fs::read_to_string(path).map_err(|e| ExportError::io(path, e))?;
        combined.push_str(&text);
        if !text.ends_with('\n') {
            combined.push('\n');
        }
        combined.push('\n');
    }
    Ok(combined)
}

/// Merge Markdown inputs and render them to a styled PDF at `output`.
///
/// Intermediate files live in a temporary directory that is removed when
/// this function returns, whatever the outcome. `output` is only ever
/// written by the renderer.
pub fn generate_pdf_from_markdown(
    candidates: &[PathBuf],
    stylesheet: &str,
    output: &Path,
    tools: &Toolchain,
) -> Result<AssemblyReport, ExportError> {
    let inputs = valid_inputs(candidates);
    if inputs.is_empty() {
        return Err(ExportError::NoValidInputs);
    }

    let tmp = tempfile::Builder::new()
        .prefix("docpress-")
        .tempdir()
        .map_err(|e| ExportError::io(std::env::temp_dir(), e))?;
    debug!(dir = %tmp.path().display(), "created scratch directory");

    let combined_path = tmp.path().join(COMBINED_FILE);
    let style_path = tmp.path().join(STYLE_FILE);
    let html_path = tmp.path().join(HTML_FILE);

    let combined = combine_documents(&inputs)?;
    fs::write(&combined_path, combined).map_err(|e| ExportError::io(&combined_path, e))?;
    fs::write(&style_path, stylesheet).map_err(|e| ExportError::io(&style_path, e))?;

    info!(inputs = inputs.len(), tool = %tools.converter, "converting Markdown to HTML");
    run_tool(
        &tools.converter,
        [
            combined_path.as_os_str(),
            OsStr::new("-s"),
            OsStr::new("--css"),
            style_path.as_os_str(),
            OsStr::new("-o"),
            html_path.as_os_str(),
        ],
    )?;

    info!(tool = %tools.renderer, output = %output.display(), "rendering HTML to PDF");
    run_tool(&tools.renderer, [html_path.as_os_str(), output.as_os_str()])?;

    Ok(AssemblyReport {
        output: output.to_path_buf(),
        inputs,
    })
}
