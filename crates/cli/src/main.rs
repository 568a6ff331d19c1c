mod console;
mod render;

use anyhow::{bail, Context};
use console::ConsoleInteraction;
use cosmic_golf_autoplay::{run_autoplay, AutoplayConfig};
use cosmic_golf_core::{play_run, EventBus, GameConfig, RunOutcome, RunState};
use cosmic_golf_data::load_game_config;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

const DEFAULT_RUN_SEED: u64 = 0xC0FFEE;
const DEFAULT_ASSETS_DIR: &str = "assets";

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    seed: u64,
    assets: PathBuf,
    auto: bool,
    trace: Option<PathBuf>,
    clear: bool,
    help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            seed: DEFAULT_RUN_SEED,
            assets: PathBuf::from(DEFAULT_ASSETS_DIR),
            auto: false,
            trace: None,
            clear: true,
            help: false,
        }
    }
}

fn parse_cli_options(args: &[String]) -> anyhow::Result<CliOptions> {
    let mut options = CliOptions::default();
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--auto" => options.auto = true,
            "--no-clear" => options.clear = false,
            "--help" | "-h" => options.help = true,
            "--seed" => {
                let value = args.get(idx + 1).context("--seed needs a value")?;
                options.seed = value
                    .parse::<u64>()
                    .with_context(|| format!("invalid seed '{value}'"))?;
                idx += 1;
            }
            "--assets" => {
                let value = args.get(idx + 1).context("--assets needs a directory")?;
                options.assets = PathBuf::from(value);
                idx += 1;
            }
            "--trace" => {
                let value = args.get(idx + 1).context("--trace needs a path")?;
                options.trace = Some(PathBuf::from(value));
                idx += 1;
            }
            other => bail!("unknown option '{other}'"),
        }
        idx += 1;
    }
    Ok(options)
}

fn print_usage() {
    println!("usage: cosmic-golf [--seed N] [--assets DIR] [--auto] [--trace PATH] [--no-clear]");
    println!();
    println!("  --seed N       deck shuffle seed (default {DEFAULT_RUN_SEED})");
    println!("  --assets DIR   directory holding holes.json, rules.json and caddies.json");
    println!("  --auto         let the greedy autoplayer finish the run");
    println!("  --trace PATH   with --auto, write the decision trace as JSON");
    println!("  --no-clear     never clear the terminal between turns");
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args)?;
    if options.help {
        print_usage();
        return Ok(());
    }
    let config = load_game_config(&options.assets)
        .with_context(|| format!("load game data from {}", options.assets.display()))?;
    log::info!(
        "starting run: seed {}, {} holes",
        options.seed,
        config.hole_count()
    );
    if options.auto {
        run_auto(config, &options)
    } else {
        run_console(config, &options)
    }
}

fn run_auto(config: GameConfig, options: &CliOptions) -> anyhow::Result<()> {
    let autoplay = AutoplayConfig {
        seed: options.seed,
        ..AutoplayConfig::default()
    };
    let report = run_autoplay(config, autoplay).context("autoplay run")?;
    println!("{}", report.to_text_report());
    if let Some(path) = options.trace.as_ref() {
        report
            .write_trace(path)
            .with_context(|| format!("write trace to {}", path.display()))?;
        println!("trace written to {}", path.display());
    }
    Ok(())
}

fn run_console(config: GameConfig, options: &CliOptions) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let clear = options.clear && io::stdout().is_terminal();
    let mut player = ConsoleInteraction::new(stdin.lock(), io::stdout(), clear);
    player.say("Welcome to COSMIC GOLF!");
    player.say("Your goal is to complete all Holes by getting a score at or below the target.");
    let _ = player.read_line("Press Enter to start your run...");

    let mut run = RunState::new(config, options.seed);
    let mut events = EventBus::default();
    let outcome = play_run(&mut run, &mut player, &mut events).context("play run")?;
    for event in events.drain() {
        log::debug!("event: {event:?}");
    }

    if let RunOutcome::Completed { earnings } = outcome {
        player.say("");
        player.say(format!(
            "CONGRATULATIONS! You have completed your run! Total earnings: ${earnings}"
        ));
    }
    player.say("Thanks for playing Cosmic Golf!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|arg| arg.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let options = parse_cli_options(&[]).expect("parse");
        assert_eq!(options, CliOptions::default());
        assert_eq!(options.seed, DEFAULT_RUN_SEED);
        assert!(options.clear);
    }

    #[test]
    fn parses_every_flag() {
        let options = parse_cli_options(&args(&[
            "--seed",
            "42",
            "--assets",
            "data",
            "--auto",
            "--trace",
            "out/trace.json",
            "--no-clear",
        ]))
        .expect("parse");
        assert_eq!(options.seed, 42);
        assert_eq!(options.assets, PathBuf::from("data"));
        assert!(options.auto);
        assert_eq!(options.trace, Some(PathBuf::from("out/trace.json")));
        assert!(!options.clear);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_cli_options(&args(&["--seed"])).is_err());
        assert!(parse_cli_options(&args(&["--seed", "many"])).is_err());
        assert!(parse_cli_options(&args(&["--wat"])).is_err());
    }
}
