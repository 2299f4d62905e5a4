//! dose-bench: headless benchmark and demo driver for the radiation pass.
//!
//! Usage:
//!   dose-bench run --ticks 100 --debris 200 --seed 42
//!   dose-bench run --ticks 10 --json

use std::process;

use roentgen_core::config::RadiationConfig;
use roentgen_sim::engine::{SimConfig, SimulationEngine};
use roentgen_sim::world_setup::{setup_station, spawn_debris_field};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "dose-bench: ROENTGEN radiation pass benchmark\n\
         \n\
         Commands:\n\
         \n\
         run       Build the station scenario and time the pass\n\
         \n\
           --ticks <N>    Number of ticks to run (default: 100)\n\
           --debris <N>   Extra debris-field sources to scatter (default: 0)\n\
           --seed <S>     Scenario rng seed (default: 42)\n\
           --json         Print the final pulse report as JSON\n\
         \n\
         Examples:\n\
         \n\
           dose-bench run --ticks 500 --debris 200\n\
           dose-bench run --ticks 1 --json\n"
    );
}

fn cmd_run(args: &[String]) {
    let mut ticks: u64 = 100;
    let mut debris: usize = 0;
    let mut seed: u64 = 42;
    let mut json = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--ticks" => {
                ticks = parse_value(args, &mut i, "--ticks");
            }
            "--debris" => {
                debris = parse_value(args, &mut i, "--debris");
            }
            "--seed" => {
                seed = parse_value(args, &mut i, "--seed");
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option: {other}");
                process::exit(1);
            }
        }
    }

    let mut engine = SimulationEngine::new(SimConfig {
        seed,
        radiation: RadiationConfig::default(),
    });
    let scenario = setup_station(&mut engine);
    if debris > 0 {
        spawn_debris_field(&mut engine, scenario.map, debris);
    }

    let mut elapsed = Vec::with_capacity(ticks as usize);
    let mut last = engine.tick();
    elapsed.push(last.elapsed_ms);
    for _ in 1..ticks {
        last = engine.tick();
        elapsed.push(last.elapsed_ms);
    }

    if json {
        match serde_json::to_string_pretty(&last) {
            Ok(out) => println!("{out}"),
            Err(err) => {
                eprintln!("Failed to serialize report: {err}");
                process::exit(1);
            }
        }
        return;
    }

    let min = elapsed.iter().copied().fold(f64::INFINITY, f64::min);
    let max = elapsed.iter().copied().fold(0.0, f64::max);
    let mean: f64 = elapsed.iter().sum::<f64>() / elapsed.len() as f64;

    println!("dose-bench: {ticks} ticks, seed {seed}");
    println!(
        "  world: {} sources, {} receivers, {} grids",
        last.source_count, last.receiver_count, last.grid_count
    );
    println!("  pass time: min {min:.3} ms, mean {mean:.3} ms, max {max:.3} ms");
    println!("  final exposures:");
    for exposure in &last.exposures {
        println!(
            "    receiver {:>4} at ({:>7.2}, {:>7.2}): {:.2} rads",
            exposure.receiver, exposure.position.x, exposure.position.y, exposure.exposure
        );
    }
}

/// Parse the value following a flag, exiting with a message on bad input.
fn parse_value<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> T {
    let Some(raw) = args.get(*i + 1) else {
        eprintln!("{flag} requires a value");
        process::exit(1);
    };
    match raw.parse() {
        Ok(value) => {
            *i += 2;
            value
        }
        Err(_) => {
            eprintln!("Invalid value for {flag}: {raw}");
            process::exit(1);
        }
    }
}
