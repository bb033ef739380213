use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tc_atmosphere::{AtmosphereError, IsaAtmosphere};
use tc_core::{Field, linspace};
use tc_cycle::{CycleError, TurbofanAnalysis};
use tc_project::ProjectError;
use thiserror::Error;

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error(transparent)]
    Atmosphere(#[from] AtmosphereError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid arguments: {what}")]
    Args { what: &'static str },
}

type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "tc-cli")]
#[command(about = "Turbocycle CLI - Turbofan cycle analysis tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate an engine definition file
    Validate {
        /// Path to the engine YAML file
        engine_path: PathBuf,
    },
    /// Analyze one flight condition
    Analyze {
        /// Path to the engine YAML file
        engine_path: PathBuf,
        /// Flight altitude in metres
        #[arg(long)]
        altitude: f64,
        /// Flight Mach number (exclusive with --speed)
        #[arg(long)]
        mach: Option<f64>,
        /// Flight speed in m/s (exclusive with --mach)
        #[arg(long)]
        speed: Option<f64>,
        /// Emit results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sweep an altitude range at fixed Mach number, emitting CSV
    Sweep {
        /// Path to the engine YAML file
        engine_path: PathBuf,
        /// Sweep start altitude in metres
        #[arg(long)]
        alt_start: f64,
        /// Sweep end altitude in metres
        #[arg(long)]
        alt_end: f64,
        /// Number of altitude points
        #[arg(long, default_value_t = 25)]
        points: usize,
        /// Flight Mach number held across the sweep
        #[arg(long)]
        mach: f64,
        /// Output CSV file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { engine_path } => cmd_validate(&engine_path),
        Commands::Analyze {
            engine_path,
            altitude,
            mach,
            speed,
            json,
        } => cmd_analyze(&engine_path, altitude, mach, speed, json),
        Commands::Sweep {
            engine_path,
            alt_start,
            alt_end,
            points,
            mach,
            output,
        } => cmd_sweep(&engine_path, alt_start, alt_end, points, mach, output.as_deref()),
    }
}

fn load_engine(engine_path: &Path) -> CliResult<TurbofanAnalysis> {
    let project = tc_project::load_engine(engine_path)?;
    Ok(tc_project::build_analysis(&project)?)
}

fn cmd_validate(engine_path: &Path) -> CliResult<()> {
    println!("Validating engine definition: {}", engine_path.display());
    let project = tc_project::load_engine(engine_path)?;
    tc_project::validate_engine(&project)?;
    println!("✓ Engine definition is valid");
    Ok(())
}

fn cmd_analyze(
    engine_path: &Path,
    altitude: f64,
    mach: Option<f64>,
    speed: Option<f64>,
    json: bool,
) -> CliResult<()> {
    let mut engine = load_engine(engine_path)?;
    let atmosphere = IsaAtmosphere::default();
    let state = atmosphere.sample(altitude)?;

    let speed = match (mach, speed) {
        (Some(m), None) => m * state.speed_of_sound,
        (None, Some(v)) => v,
        _ => {
            return Err(CliError::Args {
                what: "provide exactly one of --mach or --speed",
            });
        }
    };

    let ambient = atmosphere.ambient(&Field::scalar(altitude))?;
    engine.perform_analysis(speed, &ambient)?;

    let thrust = engine.specific_thrust()?;
    let fuel = engine.fuel_consumption()?;
    let efficiencies = engine.efficiencies()?;
    let core_exit = engine.core_exit_state()?;
    let fan_exit = engine.fan_exit_state()?;

    if json {
        let report = serde_json::json!({
            "altitude_m": altitude,
            "speed_mps": speed,
            "mach": speed / state.speed_of_sound,
            "specific_thrust": thrust,
            "fuel_consumption": fuel,
            "efficiencies": efficiencies,
            "core_exit": core_exit,
            "fan_exit": fan_exit,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let value = |field: &Field| field.at(0);
    println!("Flight condition:");
    println!("  Altitude:  {:.0} m", altitude);
    println!("  Speed:     {:.2} m/s (Mach {:.3})", speed, speed / state.speed_of_sound);
    println!("  Ambient:   {:.2} K, {:.0} Pa", state.temperature, state.pressure);
    println!("\nPerformance:");
    println!("  Specific thrust:  {:>10.2} N s/kg", value(&thrust.total));
    println!("    core share:     {:>10.2} N s/kg", value(&thrust.core));
    println!("    fan share:      {:>10.2} N s/kg", value(&thrust.fan));
    println!("  TSFC:             {:>10.3e} kg/(N s)", value(&fuel.tsfc));
    println!("  Overall eff.:     {:>10.4}", value(&efficiencies.overall));
    println!("  Propulsive eff.:  {:>10.4}", value(&efficiencies.propulsive));
    println!("  Thermal eff.:     {:>10.4}", value(&efficiencies.thermal));
    println!("\nExhaust:");
    println!(
        "  Core exit:  M = {:.3}, {:.0} Pa, {:.1} K, {:.1} m/s",
        value(&core_exit.mach),
        value(&core_exit.pressure),
        value(&core_exit.temperature),
        value(&core_exit.velocity),
    );
    println!(
        "  Fan exit:   M = {:.3}, {:.0} Pa, {:.1} K, {:.1} m/s",
        value(&fan_exit.mach),
        value(&fan_exit.pressure),
        value(&fan_exit.temperature),
        value(&fan_exit.velocity),
    );

    Ok(())
}

fn cmd_sweep(
    engine_path: &Path,
    alt_start: f64,
    alt_end: f64,
    points: usize,
    mach: f64,
    output: Option<&Path>,
) -> CliResult<()> {
    if points < 2 {
        return Err(CliError::Args {
            what: "sweep needs at least 2 points",
        });
    }
    if mach <= 0.0 {
        return Err(CliError::Args {
            what: "mach must be positive",
        });
    }

    let mut engine = load_engine(engine_path)?;
    let atmosphere = IsaAtmosphere::default();

    let altitudes = linspace(alt_start, alt_end, points);
    let ambient = atmosphere.ambient(&Field::array(altitudes.clone()))?;

    // One vectorized run evaluates the whole envelope element-wise.
    let speeds = &ambient.speed_of_sound * mach;
    engine.perform_analysis(speeds.clone(), &ambient)?;

    let thrust = engine.specific_thrust()?;
    let fuel = engine.fuel_consumption()?;
    let efficiencies = engine.efficiencies()?;

    // Build CSV
    let mut csv = String::from(
        "altitude_m,speed_mps,specific_thrust_ns_per_kg,tsfc_kg_per_ns,eta_overall,eta_propulsive,eta_thermal\n",
    );
    for (i, altitude) in altitudes.iter().enumerate() {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            altitude,
            speeds.at(i),
            thrust.total.at(i),
            fuel.tsfc.at(i),
            efficiencies.overall.at(i),
            efficiencies.propulsive.at(i),
            efficiencies.thermal.at(i),
        ));
    }

    // Write to file or stdout
    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!("✓ Exported {} sweep points to {}", points, path.display());
    } else {
        print!("{}", csv);
        io::stdout().flush()?;
    }

    Ok(())
}
