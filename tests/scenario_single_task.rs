use std::error::Error;

use serde_json::json;

use runlineage::build_model;
use runlineage::config::OptionsFile;
use runlineage::layout::LayoutVariant;
use runlineage::snapshot::{Snapshot, TaskSnapshot};

type TestResult = Result<(), Box<dyn Error>>;

fn snapshot() -> Snapshot {
    Snapshot {
        tasks: vec![TaskSnapshot {
            task_id: "etl_daily".into(),
            name: "Daily ETL".into(),
            output: Some(json!({
                "run_times": [
                    {"module_id": "src1", "module_type": "source", "module_entity": "ent1"},
                    {"module_id": "sink1", "module_type": "sink", "module_entity": "ent2"},
                ]
            })),
        }],
    }
}

#[test]
fn source_then_sink_yields_five_nodes_in_discovery_order() -> TestResult {
    let model = build_model(&snapshot(), LayoutVariant::Tree, &OptionsFile::default());

    assert_eq!(model.nodes.len(), 5);

    let labels: Vec<&str> = model.nodes.iter().map(|n| n.label.as_str()).collect();
    assert_eq!(labels, ["", "ent1", "src1", "sink1", "ent2"]);

    let kinds: Vec<&str> = model.nodes.iter().map(|n| n.kind.as_str()).collect();
    assert_eq!(kinds, ["root", "entity", "module", "module", "entity"]);

    let subtypes: Vec<&str> = model.nodes.iter().map(|n| n.subtype.as_str()).collect();
    assert_eq!(subtypes, ["root", "source", "source", "sink", "sink"]);

    Ok(())
}

#[test]
fn source_then_sink_yields_entity_module_chain_edges() -> TestResult {
    let model = build_model(&snapshot(), LayoutVariant::Tree, &OptionsFile::default());

    let links: Vec<(usize, usize, &str)> = model
        .task_links
        .iter()
        .map(|l| (l.source, l.target, l.task.as_str()))
        .collect();

    // ent1 -> src1, src1 -> sink1, sink1 -> ent2, all tagged with the task.
    assert_eq!(
        links,
        [
            (1, 2, "etl_daily"),
            (2, 3, "etl_daily"),
            (3, 4, "etl_daily"),
        ]
    );

    Ok(())
}

#[test]
fn parent_pointers_follow_first_inbound_edge() -> TestResult {
    let model = build_model(&snapshot(), LayoutVariant::Tree, &OptionsFile::default());

    let parents: Vec<Option<usize>> = model.nodes.iter().map(|n| n.parent_id).collect();

    // The source entity has no inbound edge and hangs off the root.
    assert_eq!(parents, [None, Some(0), Some(1), Some(2), Some(3)]);

    Ok(())
}

#[test]
fn every_node_belongs_to_the_contributing_task() -> TestResult {
    let model = build_model(&snapshot(), LayoutVariant::Tree, &OptionsFile::default());

    assert!(model.nodes[0].groups.is_empty());
    for node in model.nodes.iter().skip(1) {
        assert_eq!(node.groups, ["etl_daily"]);
    }

    assert_eq!(model.task_order, ["etl_daily"]);
    assert_eq!(model.palette.len(), 1);

    Ok(())
}
