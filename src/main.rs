use physlab::{ScenarioConfig, Scenario, ScenarioKind, Snapshot};
use physlab::{summarize, summarize_query};
use physlab::{bench_ticks, bench_field_grid};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside `scenarios/`
    #[arg(short, default_value = "projectile.yaml")]
    file_name: String,

    /// Override the scenario kind from the file
    #[arg(short)]
    scenario: Option<String>,

    /// Print the analytic summary for a `name=value&...` handoff string
    #[arg(long)]
    summary: Option<String>,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;

    log::debug!("{:?}", scenario_cfg);

    Ok(scenario_cfg)
}

fn describe(frame: &Snapshot) -> String {
    match frame {
        Snapshot::Projectile { time, position, vertical_velocity } => {
            format!("t={time:.3} x={:.3} y={:.3} vy={vertical_velocity:.3}", position.x, position.y)
        }
        Snapshot::Pendulum { time, angle, angular_velocity, .. } => {
            format!("t={time:.3} theta={angle:.4} omega={angular_velocity:.4}")
        }
        Snapshot::Spring { time, displacement, velocity } => {
            format!("t={time:.3} x={displacement:.4} v={velocity:.4}")
        }
        Snapshot::Circular { time, angle, trace, .. } => {
            format!("t={time:.3} angle={angle:.4} trace={}", trace.len())
        }
        Snapshot::Collision { time, bodies } => format!(
            "t={time:.3} v1=({:.3}, {:.3}) v2=({:.3}, {:.3})",
            bodies[0].v.x, bodies[0].v.y, bodies[1].v.x, bodies[1].v.y
        ),
        Snapshot::Field { time, vectors, .. } => format!("t={time:.3} vectors={}", vectors.len()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_ticks();
        bench_field_grid();
        return Ok(());
    }

    let kind_override = args
        .scenario
        .as_deref()
        .map(str::parse::<ScenarioKind>)
        .transpose()?;

    if let Some(query) = args.summary.as_deref() {
        let kind = match kind_override {
            Some(kind) => kind,
            None => load_scenario_from_yaml(&args.file_name)?.engine.scenario,
        };
        let summary = summarize_query(kind, query);
        println!("{}", summary.text);
        return Ok(());
    }

    let mut scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    if let Some(kind) = kind_override {
        scenario_cfg.engine.scenario = kind;
    }

    let mut scenario = Scenario::build_scenario(&scenario_cfg);
    let mut last = None;
    scenario.run_headless(|frame| {
        log::trace!("{}", describe(frame));
        last = Some(frame.clone());
    });

    if let Some(frame) = last {
        println!("final: {}", describe(&frame));
    }

    let summary = summarize(scenario.session.parameters(), scenario.session.arena());
    println!("{}", summary.text);

    Ok(())
}
