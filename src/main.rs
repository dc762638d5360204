use photonsim::{Scenario, ScenarioConfig};

use clap::Parser;
use anyhow::Result;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short, default_value = "infall.yaml")]
    file_name: String,
}

// load here to keep main clean
fn load_scenario_from_yaml() -> Result<ScenarioConfig> {
    let args = Args::parse();
    let file_name = args.file_name;

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&file_name);
    let file = File::open(&config_path)?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();

    let scenario_cfg = load_scenario_from_yaml()?;
    let mut scenario = Scenario::build_scenario(scenario_cfg)?;

    println!(
        "photonsim: stepping {} photons around rs = {}",
        scenario.photons.len(),
        scenario.black_hole.rs
    );

    let summary = scenario.run();
    println!(
        "done after {} ticks: {} absorbed, {} in flight, {} trajectory points",
        summary.ticks, summary.absorbed, summary.in_flight, summary.trajectory_points
    );

    //photonsim::bench_rk4();

    Ok(())
}
