//! Render Chart
//!
//! This example builds a small review workflow, validates it, prints the
//! DOT source and saves the chart.
//!
//! Key concepts:
//! - Fluent machine and transition builders
//! - Nested guards flattened into one edge suffix
//! - Transitions sharing a state pair merged into one edge
//! - Validation that reports every problem at once
//!
//! Run with: RUST_LOG=debug cargo run --example render_chart

use statechart_render::builder::{guarded_transition, MachineBuilder, TransitionBuilder};
use statechart_render::core::StateSpec;
use statechart_render::graph::validate;
use statechart_render::{guards, ChartOptions, ChartRenderer, OutputFormat};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Render Chart Example ===\n");

    let machine = MachineBuilder::new("review")
        .state(StateSpec::new("draft").on_exit(["save_draft"]))
        .state(
            StateSpec::new("review")
                .on_enter(["assign_reviewer", "notify_author"])
                .on_exit(["release_reviewer"]),
        )
        .state(StateSpec::new("published").on_enter(["announce"]))
        .initial("draft")
        .terminal("published")
        .add_transition(guarded_transition("submit", "draft", "review", "complete"))
        .transition(
            TransitionBuilder::new()
                .event("reject")
                .from("review")
                .to("draft")
                .after("notify_author"),
        )?
        .transition(
            TransitionBuilder::new()
                .event("approve")
                .from("review")
                .to("published")
                .guards(guards![[approved, signed_off], not_embargoed]),
        )?
        .transition(
            TransitionBuilder::new()
                .event("fast_track")
                .from_any(["draft", "review"])
                .to("published")
                .guard("is_admin")
                .before("log_override"),
        )?
        .build()?;

    let report = validate(&machine);
    println!("Definition valid: {}", report.is_success());

    let renderer = ChartRenderer::new(&machine, ChartOptions::default())?;
    println!(
        "Graph has {} nodes and {} edges\n",
        renderer.graph().node_count(),
        renderer.graph().edge_count()
    );

    println!("{}", renderer.to_dot());

    let path = std::env::temp_dir().join("review.dot");
    renderer.save(&path, OutputFormat::Dot)?;
    println!("Saved DOT source to {}", path.display());

    let image = std::env::temp_dir().join("review.png");
    match renderer.save(&image, OutputFormat::Png) {
        Ok(()) => println!("Saved image to {}", image.display()),
        Err(error) => println!("Skipped image: {error}"),
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
