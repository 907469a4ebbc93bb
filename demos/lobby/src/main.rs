//! lobby: replay a morning of traffic in a small office building.
//!
//! Runs a scripted call plan (embedded, or `--script calls.csv`) against a
//! simulated building, writes `events.csv` and `snapshots.csv`, then prints
//! each call's outcome, the final state of every car and the final snapshot
//! as JSON.
//!
//! ```bash
//! lobby --elevators 3 --underground 2 --error-rate 0
//! ELEVATOR_COUNT=4 lobby --script calls.csv --out output/run1
//! lobby --config building.json
//! RUST_LOG=debug lobby
//! ```
//!
//! Building flags fall back to the environment keys `ELEVATOR_COUNT`,
//! `UNDERGROUND_FLOORS`, `ABOVE_GROUND_FLOORS`, `FLOOR_TRAVEL_TIME_MS`,
//! `DOOR_OPEN_CLOSE_TIME_MS`, `DOOR_HOLD_TIME_MS`, `ERROR_RATE` and
//! `MAINTENANCE_FIX_TIME_MS`.  Flags override `--config`, which overrides the
//! defaults.

use std::io::Cursor;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lift_core::{BuildingConfig, IdScheme, floor_label};
use lift_dispatch::{DispatchPolicy, NearestCar};
use lift_output::{CsvWriter, EventLogObserver};
use lift_schedule::{CallPlan, load_plan_csv, load_plan_reader};
use lift_sim::{CallOutcome, Sim, SimBuilder};

// ── Embedded call plan ────────────────────────────────────────────────────────

// Two cars, ground floor to 5.  The last call targets a floor the default
// building does not have.
const PLAN_CSV: &str = "\
at_ms,kind,elevator,floor,direction\n\
0,hall,,3,down\n\
500,car,B,5,\n\
1500,hall,,1,up\n\
9000,car,A,0,\n\
12000,open,B,,\n\
12100,close,B,,\n\
15000,maintenance,A,,\n\
16000,car,A,4,\n\
21000,hall,,2,up\n\
24000,hall,,7,up\n\
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "lobby")]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON building config; missing keys take their defaults
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Call plan CSV (at_ms,kind,elevator,floor,direction)
    #[arg(short = 's', long)]
    script: Option<PathBuf>,

    /// Output directory for events.csv and snapshots.csv
    #[arg(short = 'o', long, default_value = "output/lobby")]
    out: PathBuf,

    #[arg(short = 'e', long = "elevators", env = "ELEVATOR_COUNT")]
    elevator_count: Option<usize>,

    #[arg(long = "underground", env = "UNDERGROUND_FLOORS")]
    underground_floors: Option<i32>,

    #[arg(long = "above-ground", env = "ABOVE_GROUND_FLOORS")]
    above_ground_floors: Option<i32>,

    #[arg(long = "travel-ms", env = "FLOOR_TRAVEL_TIME_MS")]
    floor_travel_time_ms: Option<u64>,

    #[arg(long = "door-ms", env = "DOOR_OPEN_CLOSE_TIME_MS")]
    door_open_close_time_ms: Option<u64>,

    #[arg(long = "hold-ms", env = "DOOR_HOLD_TIME_MS")]
    door_hold_time_ms: Option<u64>,

    /// Probability (0..=1) that a move attempt faults
    #[arg(long, env = "ERROR_RATE")]
    error_rate: Option<f64>,

    #[arg(long = "fix-ms", env = "MAINTENANCE_FIX_TIME_MS")]
    maintenance_fix_time_ms: Option<u64>,

    /// Simulated milliseconds per tick
    #[arg(long)]
    tick_ms: Option<u64>,

    #[arg(long)]
    seed: Option<u64>,

    /// Elevator id scheme: alphabetic or uuid
    #[arg(long)]
    ids: Option<IdScheme>,

    /// Write a snapshot every N ticks (0 = never)
    #[arg(long, default_value = "10")]
    snapshot_every: u64,

    /// Ticks to keep running after the last call
    #[arg(long, default_value = "100000")]
    settle_ticks: u64,
}

impl Args {
    fn building_config(&self) -> Result<BuildingConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str(&text)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => BuildingConfig::default(),
        };

        if let Some(v) = self.elevator_count {
            config.elevator_count = v;
        }
        if let Some(v) = self.underground_floors {
            config.underground_floors = v;
        }
        if let Some(v) = self.above_ground_floors {
            config.above_ground_floors = v;
        }
        if let Some(v) = self.floor_travel_time_ms {
            config.floor_travel_time_ms = v;
        }
        if let Some(v) = self.door_open_close_time_ms {
            config.door_open_close_time_ms = v;
        }
        if let Some(v) = self.door_hold_time_ms {
            config.door_hold_time_ms = v;
        }
        if let Some(v) = self.error_rate {
            config.error_rate = v;
        }
        if let Some(v) = self.maintenance_fix_time_ms {
            config.maintenance_fix_time_ms = v;
        }
        if let Some(v) = self.tick_ms {
            config.tick_ms = v;
        }
        if let Some(v) = self.seed {
            config.seed = v;
        }
        if let Some(scheme) = self.ids {
            config.id_scheme = scheme;
        }

        config.validate().context("invalid building config")?;
        Ok(config)
    }

    fn plan(&self) -> Result<CallPlan> {
        let plan = match &self.script {
            Some(path) => load_plan_csv(path)
                .with_context(|| format!("loading call plan {}", path.display()))?,
            None => load_plan_reader(Cursor::new(PLAN_CSV))?,
        };
        Ok(plan)
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("warn,lift_sim=info,lift_dispatch=info")),
        )
        .init();

    let args = Args::parse();
    let config = args.building_config()?;
    let plan = args.plan()?;

    println!("=== lobby: lift building simulator ===");
    println!(
        "Elevators: {}  |  Floors: {}..{}  |  Error rate: {}  |  Seed: {}",
        config.elevator_count,
        floor_label(-config.underground_floors),
        floor_label(config.above_ground_floors),
        config.error_rate,
        config.seed,
    );
    println!("Calls: {} over {} ms", plan.len(), plan.last_ms());
    println!();

    let mut sim = SimBuilder::new(config.clone(), NearestCar)
        .snapshot_interval(args.snapshot_every)
        .build()?;
    info!(policy = sim.policy.name(), "dispatch policy");

    let writer = CsvWriter::new(&args.out)
        .with_context(|| format!("creating output in {}", args.out.display()))?;
    let mut obs = EventLogObserver::new(writer, &config);

    let t0 = Instant::now();
    let outcomes = sim.run_plan(&plan, args.settle_ticks, &mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.take_error() {
        eprintln!("output error: {e}");
    }

    println!(
        "Simulated {} ({} ticks) in {:.3} s, {} events",
        sim.clock,
        sim.now().0,
        elapsed.as_secs_f64(),
        obs.event_count(),
    );
    println!("  {}", args.out.join("events.csv").display());
    println!("  {}", args.out.join("snapshots.csv").display());
    println!();

    print_outcomes(&outcomes);
    print_state(&sim);

    println!("Final snapshot:");
    println!("{}", serde_json::to_string_pretty(&sim.snapshot())?);
    Ok(())
}

// ── Report ────────────────────────────────────────────────────────────────────

fn print_outcomes(outcomes: &[CallOutcome]) {
    println!("Calls:");
    for outcome in outcomes {
        println!("{outcome}");
    }
    let rejected = outcomes.iter().filter(|o| o.result.is_err()).count();
    println!("{} accepted, {rejected} rejected", outcomes.len() - rejected);
    println!();
}

fn print_state<P: DispatchPolicy>(sim: &Sim<P>) {
    println!(
        "{:<10} {:<6} {:<6} {:<8} {:<8} {:<12} {}",
        "Elevator", "Floor", "Dir", "Doors", "Motion", "Status", "Queue"
    );
    println!("{}", "-".repeat(64));
    for car in sim.elevators() {
        let queue: Vec<String> = car.destination_floors.iter().copied().map(floor_label).collect();
        println!(
            "{:<10} {:<6} {:<6} {:<8} {:<8} {:<12} {}",
            car.id.as_str(),
            floor_label(car.current_floor),
            car.direction.as_str(),
            car.door_state.as_str(),
            car.motion_state.as_str(),
            car.status.as_str(),
            queue.join(" "),
        );
    }
    println!();
}
