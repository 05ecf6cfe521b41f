// Integration tests for cli/sink_mode.rs — sink selection and construction

use std::fs;
use std::path::Path;

use cpu_cores::cli::sink_mode::{determine_sink, open_sink, SinkMode, SinkTarget};
use tempfile::TempDir;

#[test]
fn selection_table() {
    let file = Some(Path::new("gh.env"));
    assert_eq!(determine_sink(SinkMode::Auto, None, file), SinkTarget::File("gh.env".into()));
    assert_eq!(determine_sink(SinkMode::Auto, None, None), SinkTarget::Command);
    assert_eq!(determine_sink(SinkMode::Command, None, file), SinkTarget::Command);
    assert_eq!(determine_sink(SinkMode::Plain, None, file), SinkTarget::Plain);
    assert_eq!(
        determine_sink(SinkMode::Command, Some(Path::new("x.env")), file),
        SinkTarget::File("x.env".into())
    );
}

#[test]
fn opened_file_sink_appends() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.env");
    let mut sink = open_sink(&SinkTarget::File(path.clone()));
    sink.set_output("count", "6").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "count=6\n");
}
