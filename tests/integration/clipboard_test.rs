//! Integration tests for the clipboard publisher.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use photo_paster::clipboard::tool::{ClipboardTool, ToolError, ToolKind};
use photo_paster::clipboard::{ClipboardError, FileListClipboard, Publisher};

/// A mock tool for testing the Publisher orchestrator.
struct MockTool {
    kind: ToolKind,
    available: bool,
    result: Result<(), ToolError>,
    contents: Result<Vec<PathBuf>, ToolError>,
    calls: Arc<AtomicUsize>,
}

impl MockTool {
    fn new(kind: ToolKind) -> Self {
        Self {
            kind,
            available: true,
            result: Ok(()),
            contents: Err(ToolError::NotSupported),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    fn result(mut self, result: Result<(), ToolError>) -> Self {
        self.result = result;
        self
    }

    fn contents(mut self, contents: Result<Vec<PathBuf>, ToolError>) -> Self {
        self.contents = contents;
        self
    }

    fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl ClipboardTool for MockTool {
    fn kind(&self) -> ToolKind {
        self.kind
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn try_publish(&self, _paths: &[PathBuf]) -> Result<(), ToolError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn read_file_list(&self) -> Result<Vec<PathBuf>, ToolError> {
        self.contents.clone()
    }
}

fn batch() -> Vec<PathBuf> {
    vec![PathBuf::from("/p/1.jpg"), PathBuf::from("/p/2.jpg")]
}

#[test]
fn tool_kind_names() {
    assert_eq!(ToolKind::Win32.name(), "win32");
    assert_eq!(ToolKind::OsaScript.name(), "osascript");
    assert_eq!(ToolKind::Xclip.name(), "xclip");
}

#[test]
fn default_name_implementation_uses_kind_name() {
    let tool = MockTool::new(ToolKind::Xclip);
    assert_eq!(tool.name(), "xclip");
}

#[test]
fn with_tools_accepts_empty_vec() {
    let publisher = Publisher::with_tools(vec![]);
    assert!(publisher.tools().is_empty());
}

#[test]
fn no_tools_means_no_tool_available() {
    let publisher = Publisher::with_tools(vec![]);
    let err = publisher.publish(&batch()).unwrap_err();
    assert!(matches!(err, ClipboardError::NoToolAvailable));
}

#[test]
fn first_available_tool_wins() {
    let skipped = MockTool::new(ToolKind::Win32).available(false);
    let used = MockTool::new(ToolKind::Xclip);
    let unused = MockTool::new(ToolKind::OsaScript);
    let (skipped_calls, used_calls, unused_calls) =
        (skipped.counter(), used.counter(), unused.counter());

    let publisher = Publisher::with_tools(vec![
        Box::new(skipped),
        Box::new(used),
        Box::new(unused),
    ]);

    assert_eq!(publisher.publish_with(&batch()).unwrap(), ToolKind::Xclip);
    assert_eq!(skipped_calls.load(Ordering::SeqCst), 0);
    assert_eq!(used_calls.load(Ordering::SeqCst), 1);
    assert_eq!(unused_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn busy_clipboard_is_reported_without_fallback() {
    let busy = MockTool::new(ToolKind::Win32).result(Err(ToolError::Busy("locked".to_string())));
    let fallback = MockTool::new(ToolKind::Xclip);
    let fallback_calls = fallback.counter();

    let publisher = Publisher::with_tools(vec![Box::new(busy), Box::new(fallback)]);
    let err = publisher.publish(&batch()).unwrap_err();

    match err {
        ClipboardError::Busy { reason } => assert_eq!(reason, "locked"),
        other => panic!("Expected Busy, got {:?}", other),
    }
    assert_eq!(fallback_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn failed_tool_falls_through_to_next() {
    let failing =
        MockTool::new(ToolKind::OsaScript).result(Err(ToolError::Failed("boom".to_string())));
    let working = MockTool::new(ToolKind::Xclip);

    let publisher = Publisher::with_tools(vec![Box::new(failing), Box::new(working)]);

    assert_eq!(publisher.publish_with(&batch()).unwrap(), ToolKind::Xclip);
}

#[test]
fn not_found_and_not_supported_are_skipped() {
    let missing = MockTool::new(ToolKind::Xclip).result(Err(ToolError::NotFound));
    let unsupported = MockTool::new(ToolKind::Win32).result(Err(ToolError::NotSupported));

    let publisher = Publisher::with_tools(vec![Box::new(missing), Box::new(unsupported)]);
    let err = publisher.publish(&batch()).unwrap_err();

    assert!(matches!(err, ClipboardError::NoToolAvailable));
}

#[test]
fn all_tools_failing_reports_last_write_error() {
    let first = MockTool::new(ToolKind::OsaScript).result(Err(ToolError::Failed("one".to_string())));
    let second = MockTool::new(ToolKind::Xclip).result(Err(ToolError::Failed("two".to_string())));

    let publisher = Publisher::with_tools(vec![Box::new(first), Box::new(second)]);
    let err = publisher.publish(&batch()).unwrap_err();

    match err {
        ClipboardError::Write { reason } => assert_eq!(reason, "two"),
        other => panic!("Expected Write, got {:?}", other),
    }
}

#[test]
fn empty_batch_is_published_not_rejected() {
    let tool = MockTool::new(ToolKind::Xclip);
    let calls = tool.counter();

    let publisher = Publisher::with_tools(vec![Box::new(tool)]);

    publisher.publish(&[]).unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn read_back_uses_first_tool_that_can_read() {
    let write_only = MockTool::new(ToolKind::Xclip);
    let reader = MockTool::new(ToolKind::Win32).contents(Ok(batch()));

    let publisher = Publisher::with_tools(vec![Box::new(write_only), Box::new(reader)]);

    assert_eq!(publisher.read_file_list().unwrap(), batch());
}

#[test]
fn read_back_of_clipboard_without_file_list_is_empty() {
    let reader = MockTool::new(ToolKind::Win32).contents(Ok(vec![]));

    let publisher = Publisher::with_tools(vec![Box::new(reader)]);

    assert!(publisher.read_file_list().unwrap().is_empty());
}

#[test]
fn read_back_reports_busy_and_failed_reads() {
    let busy = MockTool::new(ToolKind::Win32).contents(Err(ToolError::Busy("locked".to_string())));
    let err = Publisher::with_tools(vec![Box::new(busy)])
        .read_file_list()
        .unwrap_err();
    assert!(matches!(err, ClipboardError::Busy { .. }));

    let broken =
        MockTool::new(ToolKind::Win32).contents(Err(ToolError::Failed("bad payload".to_string())));
    match Publisher::with_tools(vec![Box::new(broken)])
        .read_file_list()
        .unwrap_err()
    {
        ClipboardError::Read { reason } => assert_eq!(reason, "bad payload"),
        other => panic!("Expected Read, got {:?}", other),
    }
}

#[test]
fn read_back_without_reading_tool_means_no_tool_available() {
    let write_only = MockTool::new(ToolKind::Xclip);
    let unavailable = MockTool::new(ToolKind::Win32)
        .available(false)
        .contents(Ok(batch()));

    let publisher = Publisher::with_tools(vec![Box::new(write_only), Box::new(unavailable)]);

    assert!(matches!(
        publisher.read_file_list().unwrap_err(),
        ClipboardError::NoToolAvailable
    ));
}
