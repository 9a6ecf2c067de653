use std::ffi::OsStr;
use std::process::Command;

use tracing::debug;

use crate::error::ExportError;

/// Run an external tool to completion and require a zero exit status.
///
/// The tool inherits stdout/stderr so its own diagnostics reach the
/// console. Any failure is final.
pub fn run_tool<I, S>(program: &str, args: I) -> Result<(), ExportError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut command = Command::new(program);
    command.args(args);
    debug!(tool = program, ?command, "running external tool");

    let status = command.status().map_err(|source| ExportError::Spawn {
        tool: program.to_string(),
        source,
    })?;

    if status.success() {
        Ok(())
    } else {
        debug!(tool = program, code = ?status.code(), "external tool failed");
        Err(ExportError::ToolFailed {
            tool: program.to_string(),
            code: status.code(),
        })
    }
}
