// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod graph;
pub mod layout;
pub mod logging;
pub mod model;
pub mod palette;
pub mod snapshot;

use anyhow::{Context, Result, anyhow};
use tracing::{debug, info};

use crate::cli::{CliArgs, LayoutArg};
use crate::config::OptionsFile;
use crate::graph::GraphBuilder;
use crate::layout::LayoutVariant;
use crate::model::LayoutModel;
use crate::snapshot::{Snapshot, extract_steps};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - layout option loading
/// - snapshot loading + task filter
/// - the model build
/// - post-build structural validation
/// - JSON emission on stdout
pub fn run(args: CliArgs) -> Result<()> {
    let options = config::load_or_default(args.config.as_deref())?;
    let variant = resolve_variant(&args, &options)?;

    let mut snapshot = snapshot::load_from_path(&args.snapshot)?;
    snapshot.retain_tasks(&args.tasks);

    let model = build_model(&snapshot, variant, &options);

    model::validate_model(&model).context("emitted model failed structural validation")?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&model)?
    } else {
        serde_json::to_string(&model)?
    };
    println!("{json}");

    Ok(())
}

/// Build a layout model from an immutable snapshot.
///
/// This is the pure core: single-pass, no I/O, no shared state. Every call
/// owns its own registry and edge list, so concurrent builds from different
/// callers are independent by construction. Tasks without a successful run
/// and malformed step entries degrade locally; the build itself cannot
/// fail, and an empty snapshot yields the minimal root-only model.
pub fn build_model(
    snapshot: &Snapshot,
    variant: LayoutVariant,
    options: &OptionsFile,
) -> LayoutModel {
    let mut builder = GraphBuilder::new();

    for task in &snapshot.tasks {
        let Some(output) = &task.output else {
            debug!(task = %task.task_id, "no successful run; task excluded");
            continue;
        };
        let steps = extract_steps(output);
        builder.add_task(&task.task_id, &steps);
    }

    let graph = builder.finish();

    let parents = layout::assign_parents(&graph);
    let boxes = match variant {
        LayoutVariant::Tree => None,
        LayoutVariant::Boxes => Some(layout::boxes::compute(&graph, &options.layout)),
    };
    let palette = palette::generate(
        graph.task_order.len(),
        options.palette.saturation,
        options.palette.lightness,
    );

    let model = model::emit(&graph, &parents, boxes, palette);

    info!(
        nodes = model.nodes.len(),
        links = model.task_links.len(),
        tasks = model.task_order.len(),
        "layout model built"
    );

    model
}

/// The CLI flag wins over the config file; both fall back to the tree
/// variant.
fn resolve_variant(args: &CliArgs, options: &OptionsFile) -> Result<LayoutVariant> {
    match args.layout {
        Some(LayoutArg::Tree) => Ok(LayoutVariant::Tree),
        Some(LayoutArg::Boxes) => Ok(LayoutVariant::Boxes),
        None => options
            .layout
            .variant
            .parse()
            .map_err(|e: String| anyhow!(e)),
    }
}
