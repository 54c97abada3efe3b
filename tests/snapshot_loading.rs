use std::error::Error;
use std::io::Write;

use serde_json::json;

use runlineage::snapshot::{self, Snapshot, TaskSnapshot};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn snapshot_file_round_trips_task_order_and_outputs() -> TestResult {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    let contents = json!({
        "tasks": [
            {"task_id": "b_task", "name": "B", "output": {"run_times": []}},
            {"task_id": "a_task", "name": "A"},
        ]
    });
    file.write_all(contents.to_string().as_bytes())?;

    let snapshot = snapshot::load_from_path(file.path())?;

    // Input order is preserved verbatim; it drives all downstream ordering.
    assert_eq!(snapshot.tasks.len(), 2);
    assert_eq!(snapshot.tasks[0].task_id, "b_task");
    assert_eq!(snapshot.tasks[1].task_id, "a_task");
    assert!(snapshot.tasks[0].output.is_some());
    assert!(snapshot.tasks[1].output.is_none());

    Ok(())
}

#[test]
fn missing_snapshot_file_reports_the_path() -> TestResult {
    let err = snapshot::load_from_path("/no/such/snapshot.json").unwrap_err();
    assert!(format!("{err:#}").contains("/no/such/snapshot.json"));
    Ok(())
}

#[test]
fn invalid_json_is_an_error_not_a_panic() -> TestResult {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(b"{ not json")?;
    assert!(snapshot::load_from_path(file.path()).is_err());
    Ok(())
}

#[test]
fn task_filter_preserves_snapshot_order() -> TestResult {
    let task = |id: &str| TaskSnapshot {
        task_id: id.into(),
        name: String::new(),
        output: None,
    };
    let mut snapshot = Snapshot {
        tasks: vec![task("c"), task("a"), task("b")],
    };

    snapshot.retain_tasks(&["b".into(), "a".into()]);

    let ids: Vec<&str> = snapshot.tasks.iter().map(|t| t.task_id.as_str()).collect();
    assert_eq!(ids, ["a", "b"]);

    Ok(())
}

#[test]
fn empty_task_filter_keeps_everything() -> TestResult {
    let task = |id: &str| TaskSnapshot {
        task_id: id.into(),
        name: String::new(),
        output: None,
    };
    let mut snapshot = Snapshot {
        tasks: vec![task("x"), task("y")],
    };

    snapshot.retain_tasks(&[]);
    assert_eq!(snapshot.tasks.len(), 2);

    Ok(())
}
