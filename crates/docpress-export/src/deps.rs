use tracing::debug;

use crate::error::ExportError;

/// External programs the styled pipeline shells out to.
pub const REQUIRED_TOOLS: [&str; 2] = ["pandoc", "wkhtmltopdf"];

/// Verify that every tool resolves on `PATH`.
///
/// Stops at the first missing tool. A missing tool is permanent, so there
/// is nothing to retry.
pub fn check_dependencies(tools: &[&str]) -> Result<(), ExportError> {
    for tool in tools {
        match which::which(tool) {
            Ok(path) => debug!(tool, path = %path.display(), "found dependency"),
            Err(_) => {
                return Err(ExportError::MissingTool {
                    tool: tool.to_string(),
                });
            }
        }
    }
    Ok(())
}
