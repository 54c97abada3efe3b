use std::error::Error;

use serde_json::json;

use runlineage::build_model;
use runlineage::config::OptionsFile;
use runlineage::layout::LayoutVariant;
use runlineage::model::validate_model;
use runlineage::snapshot::{Snapshot, TaskSnapshot};

type TestResult = Result<(), Box<dyn Error>>;

/// A snapshot where nothing can contribute: no run, no step log, a step log
/// of the wrong shape.
fn barren_snapshot() -> Snapshot {
    Snapshot {
        tasks: vec![
            TaskSnapshot {
                task_id: "never_ran".into(),
                name: String::new(),
                output: None,
            },
            TaskSnapshot {
                task_id: "no_log".into(),
                name: String::new(),
                output: Some(json!({"rows_written": 12})),
            },
            TaskSnapshot {
                task_id: "bad_log".into(),
                name: String::new(),
                output: Some(json!({"run_times": "not a list"})),
            },
        ],
    }
}

#[test]
fn no_contributions_emit_the_minimal_root_only_model() -> TestResult {
    let model = build_model(&barren_snapshot(), LayoutVariant::Tree, &OptionsFile::default());

    assert!(model.is_minimal());
    assert_eq!(model.nodes.len(), 1);
    assert_eq!(model.nodes[0].id, 0);
    assert_eq!(model.nodes[0].kind, "root");
    assert_eq!(model.nodes[0].parent_id, None);
    assert!(model.task_links.is_empty());
    assert!(model.task_order.is_empty());
    assert!(model.palette.is_empty());

    validate_model(&model)?;

    Ok(())
}

#[test]
fn empty_snapshot_behaves_like_zero_contributions() -> TestResult {
    let model = build_model(
        &Snapshot { tasks: vec![] },
        LayoutVariant::Boxes,
        &OptionsFile::default(),
    );

    assert!(model.is_minimal());
    let layout = model.layout.as_ref().unwrap();
    assert!(layout.positions.is_empty());
    assert!(layout.task_boxes.is_empty());

    Ok(())
}

#[test]
fn serialized_model_matches_the_renderer_contract() -> TestResult {
    let model = build_model(&barren_snapshot(), LayoutVariant::Tree, &OptionsFile::default());
    let value = serde_json::to_value(&model)?;

    // Field names are the renderer contract: camel-case parentId on nodes,
    // snake_case elsewhere, no layout key for the tree variant.
    assert_eq!(value["nodes"][0]["parentId"], json!(null));
    assert_eq!(value["nodes"][0]["kind"], json!("root"));
    assert!(value["task_links"].as_array().unwrap().is_empty());
    assert!(value["task_order"].as_array().unwrap().is_empty());
    assert!(value["palette"].as_array().unwrap().is_empty());
    assert!(value.get("layout").is_none());

    Ok(())
}
