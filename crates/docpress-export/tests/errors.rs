use docpress_export::error::ExportError;

fn tool_failed(code: Option<i32>) -> ExportError {
    ExportError::ToolFailed {
        tool: "pandoc".to_string(),
        code,
    }
}

#[test]
fn tool_failure_propagates_its_exit_code() {
    assert_eq!(tool_failed(Some(3)).exit_code(), 3);
    assert_eq!(tool_failed(Some(64)).exit_code(), 64);
}

#[test]
fn unrepresentable_codes_fall_back_to_one() {
    assert_eq!(tool_failed(None).exit_code(), 1);
    assert_eq!(tool_failed(Some(-1)).exit_code(), 1);
    assert_eq!(tool_failed(Some(256)).exit_code(), 1);
}

#[test]
fn no_inputs_exits_with_one() {
    let err = ExportError::NoValidInputs;
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "No valid Markdown files found.");
}

#[test]
fn tool_failure_message_names_tool_and_status() {
    assert_eq!(tool_failed(Some(2)).to_string(), "pandoc exited with status 2");
    assert!(tool_failed(None).to_string().contains("signal"));
}
