//! Batch dice roller.
//!
//! Rolls physically simulated dice from the command line: each die is
//! dropped above the ground plane with a randomized throw impulse (the
//! ranges the interactive driver uses), stepped to rest, and read off.

use clap::Parser;
use rand::Rng;
use serde::Serialize;

use dice_core::die::Die;
use dice_core::events::{BounceEvent, ContactListener};
use dice_core::simulation::Simulation;
use dice_core::types::{DieShape, Vec3};

/// CLI for the dice physics simulation
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Dice expressions to roll (format: 2d6, 1d4, d6)
    #[arg(required = true)]
    expressions: Vec<String>,

    /// Maximum simulated seconds per roll attempt
    #[arg(short, long, default_value_t = 8.0)]
    time: f64,

    /// Output format
    #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
    output: String,

    /// Die size
    #[arg(long, default_value_t = 1.5)]
    size: f64,

    /// Drop height of the die center above the origin
    #[arg(long, default_value_t = 3.0)]
    drop_height: f64,

    /// Ground plane height
    #[arg(long, default_value_t = -2.0, allow_hyphen_values = true)]
    plane_y: f64,

    /// Number of times to repeat the whole roll set
    #[arg(long, default_value_t = 1)]
    batch: usize,

    /// Print bounce diagnostics to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy)]
struct DiceNotation {
    count: u32,
    shape: DieShape,
}

#[derive(Debug, Clone, Serialize)]
struct RollResult {
    die: String,
    value: u32,
}

#[derive(Debug, Clone, Serialize)]
struct RollReport {
    results: Vec<RollResult>,
    total: u32,
}

/// Parse dice notation like 2d6, 1d4, or d6 (count defaults to 1).
fn parse_notation(raw: &str) -> Result<DiceNotation, String> {
    let lower = raw.to_lowercase();
    let (count_str, sides_str) = lower
        .split_once('d')
        .ok_or_else(|| format!("invalid dice notation: {} (expected forms like 2d6)", raw))?;

    let count: u32 = if count_str.is_empty() {
        1
    } else {
        count_str
            .parse()
            .map_err(|_| format!("invalid count in dice notation: {}", raw))?
    };
    if count == 0 {
        return Err(format!("count must be greater than 0 in: {}", raw));
    }

    let sides: u32 = sides_str
        .parse()
        .map_err(|_| format!("invalid side count in dice notation: {}", raw))?;
    let shape = DieShape::from_sides(sides)
        .ok_or_else(|| format!("unsupported die d{}: only d4 and d6 are simulated", sides))?;

    Ok(DiceNotation { count, shape })
}

/// Listener that narrates each bounce, replacing the engine-internal
/// diagnostics the physics core deliberately does not print.
struct PrintListener;

impl ContactListener for PrintListener {
    fn on_bounce(&mut self, event: &BounceEvent) {
        eprintln!(
            "bounce: impulse {:.3}, energy {:.4} (linear {:.4}, angular {:.4})",
            event.impulse,
            event.total_energy(),
            event.linear_energy,
            event.angular_energy
        );
    }
}

/// Attempts per die before giving up on a roll that will not settle.
const ROLL_ATTEMPTS: usize = 5;

fn roll_once<R: Rng>(shape: DieShape, args: &Args, rng: &mut R) -> Result<u32, String> {
    for _ in 0..ROLL_ATTEMPTS {
        let mut die = Die::new(shape, args.size).map_err(|e| e.to_string())?;
        die.position = Vec3::new(0.0, args.drop_height, 0.0);

        let mut sim = Simulation::new(die);
        sim.plane_y = args.plane_y;

        // throw impulse ranges from the interactive driver
        let velocity = Vec3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(8.0..12.0),
            rng.gen_range(-5.0..5.0),
        );
        let angular_velocity = Vec3::new(
            rng.gen_range(-180.0..180.0),
            rng.gen_range(-180.0..180.0),
            rng.gen_range(-180.0..180.0),
        );
        sim.roll(velocity, angular_velocity).map_err(|e| e.to_string())?;

        let settled = if args.verbose {
            sim.run_to_rest_with(args.time, &mut PrintListener)
        } else {
            sim.run_to_rest(args.time)
        };
        if let Some(face) = settled {
            return Ok(face);
        }
    }
    Err(format!(
        "a {} did not settle within {} attempts of {}s",
        shape, ROLL_ATTEMPTS, args.time
    ))
}

fn run(args: &Args) -> Result<(), String> {
    let notations: Vec<DiceNotation> = args
        .expressions
        .iter()
        .map(|raw| parse_notation(raw))
        .collect::<Result<_, _>>()?;

    let mut rng = rand::thread_rng();
    let mut reports = Vec::new();

    for _ in 0..args.batch.max(1) {
        let mut results = Vec::new();
        for notation in &notations {
            for _ in 0..notation.count {
                let value = roll_once(notation.shape, args, &mut rng)?;
                results.push(RollResult {
                    die: notation.shape.to_string(),
                    value,
                });
            }
        }
        let total = results.iter().map(|r| r.value).sum();
        reports.push(RollReport { results, total });
    }

    match args.output.as_str() {
        "json" => {
            let rendered = if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0])
            } else {
                serde_json::to_string_pretty(&reports)
            };
            println!("{}", rendered.map_err(|e| e.to_string())?);
        }
        _ => {
            for (i, report) in reports.iter().enumerate() {
                if reports.len() > 1 {
                    println!("roll {}:", i + 1);
                }
                for result in &report.results {
                    println!("{}: {}", result.die, result.value);
                }
                println!("total: {}", report.total);
            }
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

// =============================================================================
// Tests
// =============================================================================
