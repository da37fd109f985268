//! Headless rally runner.
//!
//! Runs the simulation for a fixed number of ticks with a perfect-tracking
//! player policy and prints a run summary. Useful for eyeballing rally
//! statistics and for reproducing a trajectory from a seed.
//!
//! Usage:
//!   rally_sim [--seed N] [--ticks N] [--json]
//!
//! Set RUST_LOG=debug to see per-event logging from the core.

use rally_core::*;
use serde::Serialize;

struct RunConfig {
    seed: u64,
    ticks: u64,
    json: bool,
}

impl RunConfig {
    fn from_args() -> Result<Self, String> {
        let mut config = Self {
            seed: 12345,
            ticks: 10_000,
            json: false,
        };

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--seed" => {
                    let value = args.next().ok_or("--seed requires a value")?;
                    config.seed = value
                        .parse()
                        .map_err(|_| format!("invalid seed: {value}"))?;
                }
                "--ticks" => {
                    let value = args.next().ok_or("--ticks requires a value")?;
                    config.ticks = value
                        .parse()
                        .map_err(|_| format!("invalid tick count: {value}"))?;
                }
                "--json" => config.json = true,
                "--help" | "-h" => {
                    println!("Usage: rally_sim [--seed N] [--ticks N] [--json]");
                    std::process::exit(0);
                }
                other => return Err(format!("unknown argument: {other}")),
            }
        }
        Ok(config)
    }
}

#[derive(Debug, Serialize)]
struct RunSummary {
    seed: u64,
    ticks: u64,
    rallies: u64,
    wall_bounces: u64,
    player_hits: u64,
    ai_hits: u64,
    longest_rally_ticks: u64,
    final_state: Snapshot,
}

fn run(config: &RunConfig) -> RunSummary {
    let field = Field::new();
    let tuning = Config::new();
    let mut rng = GameRng::new(config.seed);
    let mut world = new_world(&field, &tuning, &mut rng);
    let mut events = Events::new();

    let mut rallies = 0;
    let mut wall_bounces = 0;
    let mut player_hits = 0;
    let mut ai_hits = 0;
    let mut longest_rally = 0;
    let mut rally_start = 0;

    for tick in 0..config.ticks {
        // Perfect-tracking player: pin the paddle center to the ball center
        let snap = snapshot(&world, &field, &tuning);
        let target = snap.ball_y + tuning.ball_size / 2.0 - tuning.paddle_height / 2.0;
        set_player_y(&mut world, &field, &tuning, target);

        advance(&mut world, &field, &tuning, &mut events, &mut rng);

        if events.ball_hit_wall {
            wall_bounces += 1;
        }
        if events.ball_hit_player {
            player_hits += 1;
        }
        if events.ball_hit_ai {
            ai_hits += 1;
        }
        if events.round_reset {
            rallies += 1;
            longest_rally = longest_rally.max(tick - rally_start);
            rally_start = tick;
            log::info!("rally {} ended at tick {}", rallies, tick);
        }
    }

    RunSummary {
        seed: config.seed,
        ticks: config.ticks,
        rallies,
        wall_bounces,
        player_hits,
        ai_hits,
        longest_rally_ticks: longest_rally.max(config.ticks - rally_start),
        final_state: snapshot(&world, &field, &tuning),
    }
}

fn main() {
    env_logger::init();

    let config = match RunConfig::from_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Usage: rally_sim [--seed N] [--ticks N] [--json]");
            std::process::exit(2);
        }
    };

    let summary = run(&config);

    if config.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("error: failed to serialize summary: {err}");
                std::process::exit(1);
            }
        }
    } else {
        println!("seed:            {}", summary.seed);
        println!("ticks:           {}", summary.ticks);
        println!("rallies:         {}", summary.rallies);
        println!("wall bounces:    {}", summary.wall_bounces);
        println!("player hits:     {}", summary.player_hits);
        println!("ai hits:         {}", summary.ai_hits);
        println!("longest rally:   {} ticks", summary.longest_rally_ticks);
        println!(
            "final ball:      ({:.1}, {:.1})",
            summary.final_state.ball_x, summary.final_state.ball_y
        );
    }
}
