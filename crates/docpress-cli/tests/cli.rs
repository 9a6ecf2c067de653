#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Mutex;

// Writing a script while another test forks can make exec fail with
// ETXTBSY, so tests in this file run one at a time.
static SERIAL: Mutex<()> = Mutex::new(());

fn docpress_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_docpress"))
}

/// Scratch layout for one run: a working directory, a private `TMPDIR`
/// and a directory of fake tools.
struct Sandbox {
    root: tempfile::TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let sandbox = Self {
            root: tempfile::tempdir().unwrap(),
        };
        for dir in ["work", "tmp", "bin"] {
            fs::create_dir(sandbox.root.path().join(dir)).unwrap();
        }
        sandbox
    }

    fn dir(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    fn doc(&self, name: &str, contents: &str) {
        fs::write(self.dir("work").join(name), contents).unwrap();
    }

    fn tool(&self, name: &str, body: &str) {
        let path = self.dir("bin").join(name);
        fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn working_tools(&self) {
        self.tool("pandoc", "cp \"$1\" \"$6\"");
        self.tool("wkhtmltopdf", "cp \"$1\" \"$2\"");
    }

    /// Fake tools shadow any real ones; the system dirs stay reachable for
    /// `cp` inside the scripts.
    fn path_with_tools(&self) -> String {
        format!("{}:/bin:/usr/bin", self.dir("bin").display())
    }

    fn run(&self, path: &str, args: &[&str]) -> Output {
        Command::new(docpress_bin())
            .args(args)
            .current_dir(self.dir("work"))
            .env("PATH", path)
            .env("TMPDIR", self.dir("tmp"))
            .env_remove("RUST_LOG")
            .output()
            .unwrap()
    }

    fn entries(&self, name: &str) -> Vec<String> {
        fs::read_dir(self.dir(name))
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    fn pdfs(&self) -> Vec<String> {
        self.entries("work")
            .into_iter()
            .filter(|name| name.ends_with(".pdf"))
            .collect()
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

fn assert_empty(dir: &Path) {
    let leftovers: Vec<_> = fs::read_dir(dir).unwrap().collect();
    assert!(leftovers.is_empty(), "{} is not empty: {leftovers:?}", dir.display());
}

#[test]
fn missing_tool_exits_before_creating_temp_files() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let sb = Sandbox::new();
    sb.doc("README.md", "# Title\n");
    let empty_path = sb.dir("bin").display().to_string();

    let output = sb.run(&empty_path, &["styled"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Error: pandoc is not installed or not in PATH."));
    assert_empty(&sb.dir("tmp"));
    assert!(sb.pdfs().is_empty());
}

#[test]
fn only_missing_inputs_exits_with_one() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let sb = Sandbox::new();
    sb.working_tools();

    let output = sb.run(&sb.path_with_tools(), &["styled", "nope.md", "also-missing.md"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("No valid Markdown files found."));
    assert!(stdout(&output).is_empty());
    assert!(sb.pdfs().is_empty());
    assert_empty(&sb.dir("tmp"));
}

#[test]
fn successful_run_reports_timestamped_pdf() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let sb = Sandbox::new();
    sb.working_tools();
    sb.doc("a.md", "# Title\n");

    let output = sb.run(&sb.path_with_tools(), &["styled", "a.md"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("\n✅ PDF generated: vnc_tutorial_"), "stdout: {out:?}");

    let pdfs = sb.pdfs();
    assert_eq!(pdfs.len(), 1);
    assert_eq!(out.trim(), format!("✅ PDF generated: {}", pdfs[0]));
    // The fake renderer copies the combined document straight through.
    assert_eq!(
        fs::read_to_string(sb.dir("work").join(&pdfs[0])).unwrap(),
        "# Title\n\n"
    );
    assert_empty(&sb.dir("tmp"));
}

#[test]
fn failing_renderer_status_becomes_exit_code() {
    let _guard = SERIAL.lock().unwrap_or_else(|e| e.into_inner());
    let sb = Sandbox::new();
    sb.tool("pandoc", "cp \"$1\" \"$6\"");
    sb.tool("wkhtmltopdf", "exit 5");
    sb.doc("a.md", "# Title\n");

    let output = sb.run(&sb.path_with_tools(), &["styled", "a.md"]);

    assert_eq!(output.status.code(), Some(5));
    let err = stderr(&output);
    assert!(err.contains("Error: wkhtmltopdf exited with status 5"));
    // The failure is reported once, not echoed by the default log level.
    assert!(!err.contains("external tool failed"), "stderr: {err}");
    assert!(sb.pdfs().is_empty());
    assert_empty(&sb.dir("tmp"));
}
