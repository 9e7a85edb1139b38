mod console;
mod input;
mod options;
pub mod persistence;
mod presenter;

pub use console::ConsoleObserver;
pub use input::Input;
pub use options::{parse_cli_options, CliOptions};

use anyhow::{Context, Result};
use jest_bots::{write_json, BotFactory, SimulationConfig, Simulator};
use jest_core::{
    DecisionHub, EventBus, Game, GameConfig, GameMode, SaveStore, StrategyKind, MAX_PLAYERS,
};
use persistence::FileSaveStore;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing_subscriber::{fmt, EnvFilter};

pub fn run_with_args(args: &[String]) -> Result<()> {
    init_tracing();
    let options = parse_cli_options(args).map_err(|err| anyhow::anyhow!(err))?;
    if options.help {
        options::print_help();
        return Ok(());
    }
    if options.auto {
        return run_auto(&options);
    }
    run_console(options)
}

/// Filter from `JEST_LOG`, then `RUST_LOG`, else `warn`. Logs go to stderr so
/// they never interleave with the table on stdout.
fn init_tracing() {
    let filter = std::env::var("JEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(jest_core::DEFAULT_SEED)
}

fn run_auto(options: &CliOptions) -> Result<()> {
    let defaults = SimulationConfig::default();
    let bots = if options.bots.len() >= 2 {
        options.bots.iter().copied().take(MAX_PLAYERS).collect()
    } else {
        defaults.bots
    };
    let config = SimulationConfig {
        seed: options.seed.unwrap_or(defaults.seed),
        games: options.games.max(1),
        bots,
        mode: options.mode,
        extension: options.extension,
    };
    let report = Simulator::new(config).run().context("run simulation")?;
    println!("{}", report.to_text_report());
    if let Some(path) = options.json.as_ref() {
        write_json(path, &report).with_context(|| format!("write report to {}", path.display()))?;
        println!("report written to {}", path.display());
    }
    Ok(())
}

enum Start {
    New(GameConfig),
    Load(String),
}

fn run_console(options: CliOptions) -> Result<()> {
    let input = Input::stdin();
    let store = options
        .saves
        .clone()
        .map(FileSaveStore::new)
        .unwrap_or_else(FileSaveStore::from_env);

    let start = if let Some(name) = options.load.clone() {
        Start::Load(name)
    } else if options.menu {
        match setup_menu(&input, &store, &options)? {
            Some(start) => start,
            None => return Ok(()),
        }
    } else {
        Start::New(config_from_options(&options))
    };

    let hub = DecisionHub::new(options.timeout);
    let mut events = EventBus::default();
    events.subscribe(ConsoleObserver::new(options.bot_delay));
    let mut game = match start {
        Start::New(config) => {
            let mut factory = BotFactory::new(config.seed).with_hub(hub.clone());
            Game::new(config, &mut factory, events).context("start game")?
        }
        Start::Load(name) => {
            let mut factory = BotFactory::new(clock_seed()).with_hub(hub.clone());
            Game::load(&store, &name, &mut factory, events)
                .with_context(|| format!("load save '{name}' from {}", store.dir().display()))?
        }
    };

    let names = game.players.iter().map(|player| player.name.clone()).collect();
    let _presenter = presenter::spawn(hub.attach(), input.clone(), names);
    let humans = game.players.iter().any(|player| !player.kind.is_bot());

    while game.has_next_round() {
        play_console_round(&mut game)?;
        if humans && game.has_next_round() && !offer_save(&input, &store, &mut game) {
            println!("Goodbye.");
            return Ok(());
        }
    }
    game.finish();
    Ok(())
}

/// Sinks already printed the round, so the queued copies are dropped.
fn play_console_round(game: &mut Game) -> Result<()> {
    game.play_round().context("play round")?;
    game.events().drain().for_each(drop);
    Ok(())
}

/// Between rounds: optionally save, then continue or quit. Returns false to quit.
fn offer_save(input: &Input, store: &FileSaveStore, game: &mut Game) -> bool {
    let Some(line) = input.line("Enter to continue, 's NAME' to save, 'q' to quit: ") else {
        return false;
    };
    match line.split_once(' ') {
        Some(("s", name)) if !name.trim().is_empty() => {
            game.save(store, name.trim());
            input
                .yes_no("Keep playing? [Y/n] ", true)
                .unwrap_or(false)
        }
        _ if line == "q" => false,
        _ => true,
    }
}

fn config_from_options(options: &CliOptions) -> GameConfig {
    let humans = options.humans.unwrap_or(1);
    GameConfig::from_counts(humans, options.bots.len(), &options.names, &options.bots)
        .with_mode(options.mode)
        .with_extension(options.extension)
        .with_seed(options.seed.unwrap_or_else(clock_seed))
}

fn setup_menu(input: &Input, store: &FileSaveStore, options: &CliOptions) -> Result<Option<Start>> {
    println!("=== Jest ===");
    println!("  1) New game");
    println!("  2) Load game");
    println!("  3) Quit");
    let Some(choice) = input.number("> ", 1, 3, 1) else {
        return Ok(None);
    };
    match choice {
        1 => Ok(new_game_menu(input, options).map(Start::New)),
        2 => {
            let saves = store
                .list()
                .map_err(|err| anyhow::anyhow!(err))
                .with_context(|| format!("list saves in {}", store.dir().display()))?;
            if saves.is_empty() {
                println!("No saves in {}.", store.dir().display());
                return Ok(new_game_menu(input, options).map(Start::New));
            }
            for (idx, name) in saves.iter().enumerate() {
                println!("  {}) {name}", idx + 1);
            }
            let Some(pick) = input.number("Save to load: ", 1, saves.len(), 1) else {
                return Ok(None);
            };
            Ok(saves.get(pick - 1).cloned().map(Start::Load))
        }
        _ => Ok(None),
    }
}

fn new_game_menu(input: &Input, options: &CliOptions) -> Option<GameConfig> {
    let humans = input.number("Human players [0-4, default 1]: ", 0, MAX_PLAYERS, 1)?;
    let mut names = Vec::with_capacity(humans);
    for idx in 0..humans {
        let name = input.line(&format!("Name of player {}: ", idx + 1))?;
        names.push(name);
    }
    let room = MAX_PLAYERS - humans;
    let min_bots = 2usize.saturating_sub(humans);
    let mut bots = Vec::new();
    if room > 0 {
        let count = input.number(
            &format!("Bots [{min_bots}-{room}, default {}]: ", min_bots.max(1).min(room)),
            min_bots,
            room,
            min_bots.max(1).min(room),
        )?;
        for idx in 0..count {
            let cheater = input.yes_no(&format!("Bot {} cheats? [y/N] ", idx + 1), false)?;
            bots.push(if cheater {
                StrategyKind::Cheater
            } else {
                StrategyKind::Random
            });
        }
    }
    let mode = input.number("Mode 0) classic 1) jester 2) clear [0]: ", 0, 2, 0)?;
    let extension = input.yes_no("Use the extension cards? [y/N] ", false)?;
    Some(
        GameConfig::from_counts(humans, bots.len(), &names, &bots)
            .with_mode(GameMode::from_index(mode as u8))
            .with_extension(extension)
            .with_seed(options.seed.unwrap_or_else(clock_seed)),
    )
}
