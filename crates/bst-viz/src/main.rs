use std::time::Duration;

use anyhow::{Context, Result};
use bst_core::{Layout, LayoutConfig, SearchAlgorithm, Session, SessionConfig, parse_values};
use bst_viz::{Command, ControlPanel, OrbitCamera, draw_labels, draw_tree};
use clap::Parser;
use macroquad::prelude::{
    Color, DARKGRAY, WHITE, clear_background, draw_text, get_fps, get_frame_time, next_frame,
    set_camera, set_default_camera,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bst-viz", about = "Interactive 3D binary search tree visualizer")]
struct Cli {
    /// Initial tree as comma-separated values, e.g. "50,30,70,20,40".
    #[arg(long)]
    values: Option<String>,
    /// Seed for random trees (random if omitted).
    #[arg(long)]
    seed: Option<u64>,
    /// Delay between revealed search steps, in milliseconds.
    #[arg(long, default_value_t = 800)]
    step_ms: u64,
    /// Delay before a finished search path is cleared, in milliseconds.
    #[arg(long, default_value_t = 3000)]
    clear_ms: u64,
    /// Initially selected algorithm.
    #[arg(long, default_value = "recursive")]
    algorithm: SearchAlgorithm,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[macroquad::main("BST Visualization")]
async fn main() {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(cli).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = SessionConfig {
        step_delay: Duration::from_millis(cli.step_ms),
        clear_delay: Duration::from_millis(cli.clear_ms),
        ..SessionConfig::default()
    };
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut loaded_values = cli
        .values
        .as_deref()
        .map(|text| parse_values(text, config.value_min, config.value_max))
        .transpose()
        .context("failed to parse --values")?;

    let mut panel = ControlPanel::new(cli.algorithm, config.value_min, config.value_max);
    let mut session = Session::new(config);
    match &loaded_values {
        Some(values) => session.build_tree_from_values(values.iter().copied()),
        None => session
            .generate_random_tree_with(&mut rng)
            .context("failed to generate initial tree")?,
    }
    info!(
        nodes = session.tree().len(),
        depth = session.tree().depth(),
        "initial tree ready"
    );

    let layout_config = LayoutConfig::default();
    let mut camera = OrbitCamera::new(60.0, 0.0, 0.2).with_zoom(4.0, 10.0, 250.0);
    camera.frame(&Layout::compute(session.tree(), &layout_config));

    loop {
        camera.update();

        if let Some(command) = panel.update(session.is_searching()) {
            apply(command, &mut session, &mut panel, &mut rng, &mut loaded_values);
            camera.frame(&Layout::compute(session.tree(), &layout_config));
        }
        session.tick(Duration::from_secs_f32(get_frame_time()));

        let layout = Layout::compute(session.tree(), &layout_config);
        let camera3d = camera.to_camera3d();

        clear_background(Color::from_rgba(10, 10, 20, 255));
        set_camera(&camera3d);
        draw_tree(&layout, &session, layout_config.node_radius);
        set_default_camera();
        draw_labels(&layout, &camera3d);

        draw_text("Binary Search Tree Visualization", 10.0, 25.0, 20.0, WHITE);
        panel.draw_ui(&session, 50.0);
        draw_text(&format!("FPS: {}", get_fps()), 10.0, 175.0, 16.0, DARKGRAY);

        next_frame().await
    }
}

/// Applies a panel command to the session, reporting failures on the panel.
///
/// `loaded_values` is the list `L` reloads: the `--values` list until a
/// typed list replaces it.
fn apply(
    command: Command,
    session: &mut Session,
    panel: &mut ControlPanel,
    rng: &mut StdRng,
    loaded_values: &mut Option<Vec<i32>>,
) {
    match command {
        Command::Search { value, algorithm } => {
            if !session.search(value, algorithm) {
                panel.set_message("Build a tree first");
            }
        }
        Command::Build(values) => {
            session.build_tree_from_values(values.iter().copied());
            *loaded_values = Some(values);
        }
        Command::RandomTree => {
            if let Err(err) = session.generate_random_tree_with(rng) {
                error!(%err, "random tree generation failed");
                panel.set_message(err.to_string());
            }
        }
        Command::Rebuild => match loaded_values {
            Some(values) => session.build_tree_from_values(values.iter().copied()),
            None => panel.set_message("No value list loaded, press V to type one"),
        },
        Command::Clear => session.clear(),
    }
}
