use std::error::Error;

use serde_json::json;

use runlineage::build_model;
use runlineage::config::OptionsFile;
use runlineage::layout::LayoutVariant;
use runlineage::snapshot::{Snapshot, Step, TaskSnapshot, extract_steps};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn step_without_module_id_is_skipped_without_breaking_siblings() -> TestResult {
    let snapshot = Snapshot {
        tasks: vec![TaskSnapshot {
            task_id: "T".into(),
            name: String::new(),
            output: Some(json!({
                "run_times": [
                    {"module_id": "src1", "module_type": "source", "module_entity": "e1"},
                    {"module_type": "sink", "module_entity": "ignored"},
                    {"module_id": "sink2", "module_type": "sink"},
                ]
            })),
        }],
    };

    let model = build_model(&snapshot, LayoutVariant::Tree, &OptionsFile::default());

    // root + e1 + src1 + sink2; the entry without module_id contributes
    // nothing, not even its entity.
    assert_eq!(model.nodes.len(), 4);

    // The chain still connects across the dropped entry.
    let src = model.nodes.iter().find(|n| n.label == "src1").unwrap().id;
    let sink = model.nodes.iter().find(|n| n.label == "sink2").unwrap().id;
    assert!(
        model
            .task_links
            .iter()
            .any(|l| l.source == src && l.target == sink)
    );

    Ok(())
}

#[test]
fn extractor_tolerates_every_malformed_shape() -> TestResult {
    // Whole output without a step log.
    assert!(extract_steps(&json!({})).is_empty());
    assert!(extract_steps(&json!({"run_times": "oops"})).is_empty());
    assert!(extract_steps(&json!({"run_times": 42})).is_empty());

    // Non-object entries, empty and whitespace module ids.
    let steps = extract_steps(&json!({
        "run_times": [
            "not a record",
            17,
            null,
            {"module_id": ""},
            {"module_id": "   "},
            {"module_id": "ok", "module_type": "SOURCE"},
        ]
    }));
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].module(), "ok");

    Ok(())
}

#[test]
fn module_type_is_classified_by_case_insensitive_prefix() -> TestResult {
    let steps = extract_steps(&json!({
        "run_times": [
            {"module_id": "a", "module_type": "SourceMysql"},
            {"module_id": "b", "module_type": "SINK_csv"},
            {"module_id": "c", "module_type": "transform"},
            {"module_id": "d"},
        ]
    }));

    assert!(matches!(steps[0], Step::Source { .. }));
    assert!(matches!(steps[1], Step::Sink { .. }));
    assert!(matches!(steps[2], Step::Intermediate { .. }));
    assert!(matches!(steps[3], Step::Intermediate { .. }));

    Ok(())
}

#[test]
fn legacy_module_idk_spelling_is_accepted() -> TestResult {
    let steps = extract_steps(&json!({
        "run_times": [
            {"module_idk": "old", "module_type": "source"},
        ]
    }));
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].module(), "old");

    Ok(())
}

#[test]
fn tasks_without_a_successful_run_contribute_nothing() -> TestResult {
    let snapshot = Snapshot {
        tasks: vec![
            TaskSnapshot {
                task_id: "no_run".into(),
                name: String::new(),
                output: None,
            },
            TaskSnapshot {
                task_id: "has_run".into(),
                name: String::new(),
                output: Some(json!({
                    "run_times": [{"module_id": "m", "module_type": "source"}]
                })),
            },
        ],
    };

    let model = build_model(&snapshot, LayoutVariant::Tree, &OptionsFile::default());

    assert_eq!(model.task_order, ["has_run"]);
    for node in &model.nodes {
        assert!(!node.groups.iter().any(|g| g == "no_run"));
    }
    for link in &model.task_links {
        assert_ne!(link.task, "no_run");
    }

    Ok(())
}

#[test]
fn intermediate_steps_stay_private_to_their_task() -> TestResult {
    let task = |id: &str| TaskSnapshot {
        task_id: id.into(),
        name: String::new(),
        output: Some(json!({
            "run_times": [
                {"module_id": "s", "module_type": "source"},
                {"module_id": "transform", "module_type": "python"},
            ]
        })),
    };
    let snapshot = Snapshot {
        tasks: vec![task("A"), task("B")],
    };

    let model = build_model(&snapshot, LayoutVariant::Tree, &OptionsFile::default());

    // The source module is shared; the identically named intermediate is
    // not: root + s + transform(A) + transform(B).
    assert_eq!(model.nodes.len(), 4);

    let intermediates: Vec<_> = model
        .nodes
        .iter()
        .filter(|n| n.subtype == "intermediate")
        .collect();
    assert_eq!(intermediates.len(), 2);
    assert_eq!(intermediates[0].groups, ["A"]);
    assert_eq!(intermediates[1].groups, ["B"]);

    Ok(())
}
