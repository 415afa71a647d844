use std::io::BufRead;

use anyhow::Result;
use clap::Parser;
use log::warn;

use boxclash_app::cli::Cli;
use boxclash_app::state::LoopCommand;
use boxclash_app::{console, game_loop, logging};
use boxclash_core::enums::MatchResult;
use boxclash_core::state::MatchSnapshot;
use boxclash_sim::engine::SimConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let setup = cli.build_setup()?;
    let config = SimConfig {
        seed: cli.seed,
        time_scale: cli.time_scale,
    };

    if cli.realtime {
        return run_realtime(config, setup, cli.json);
    }

    let outcome = game_loop::run_headless(config, setup, cli.max_ticks)?;
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome.snapshot)?);
    } else {
        print_summary(&outcome.snapshot);
    }
    Ok(())
}

fn run_realtime(config: SimConfig, setup: boxclash_core::setup::MatchSetup, json: bool) -> Result<()> {
    let handle = game_loop::spawn_game_loop(config, setup)?;
    println!("commands: pause, resume, p, speed <x>, rematch, menu, quit");

    for line in std::io::stdin().lock().lines() {
        let line = line?;
        match console::parse_line(&line) {
            Ok(None) => {}
            Ok(Some(LoopCommand::Shutdown)) => break,
            Ok(Some(command)) => {
                if !handle.send(command) {
                    break;
                }
            }
            Err(err) => warn!("{err}"),
        }
        if let Some(snapshot) = handle.snapshot() {
            print_status(&snapshot);
        }
    }

    // The loop may already have exited; a closed channel is fine here.
    handle.send(LoopCommand::Shutdown);
    let final_snapshot = handle.snapshot();
    if handle.thread.join().is_err() {
        anyhow::bail!("game loop thread panicked");
    }

    if let Some(snapshot) = final_snapshot {
        if json {
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        } else {
            print_summary(&snapshot);
        }
    }
    Ok(())
}

fn print_status(snapshot: &MatchSnapshot) {
    println!(
        "tick {} ({:.1}s, x{}) {:?}: {} agents, {} projectiles, {} power-ups",
        snapshot.time.tick,
        snapshot.time.elapsed_secs,
        snapshot.time_scale,
        snapshot.phase,
        snapshot.agents.len(),
        snapshot.projectiles.len(),
        snapshot.power_ups.len(),
    );
}

fn print_summary(snapshot: &MatchSnapshot) {
    match &snapshot.result {
        Some(MatchResult::Victory { side, team_names }) => {
            println!("{} win ({side})", team_names.join(" & "));
        }
        Some(MatchResult::Draw) => println!("Draw"),
        None => println!("No result"),
    }

    let stats = &snapshot.stats;
    println!(
        "{} ticks, {:.1}s of match time",
        snapshot.time.tick, stats.match_time_secs
    );
    println!(
        "shots {} / hits {} / destroyed {}",
        stats.shots_fired, stats.projectile_hits, stats.agents_destroyed
    );
    if stats.power_ups_spawned > 0 {
        println!(
            "power-ups spawned {} / collected {}",
            stats.power_ups_spawned, stats.power_ups_collected
        );
    }
    for agent in &snapshot.agents {
        println!(
            "  agent {:>3} {} hp {:>5.1}",
            agent.id, agent.side, agent.hp
        );
    }
}
