use jest_core::{GameMode, StrategyKind, DEFAULT_DECISION_TIMEOUT, MAX_PLAYERS};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct CliOptions {
    pub humans: Option<usize>,
    pub bots: Vec<StrategyKind>,
    pub names: Vec<String>,
    pub mode: GameMode,
    pub extension: bool,
    pub seed: Option<u64>,
    pub timeout: Duration,
    pub bot_delay: Duration,
    pub saves: Option<PathBuf>,
    pub load: Option<String>,
    pub auto: bool,
    pub games: u32,
    pub json: Option<PathBuf>,
    pub help: bool,
    /// No arguments at all: start from the setup menu.
    pub menu: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            humans: None,
            bots: Vec::new(),
            names: Vec::new(),
            mode: GameMode::Classic,
            extension: false,
            seed: None,
            timeout: DEFAULT_DECISION_TIMEOUT,
            bot_delay: Duration::from_millis(400),
            saves: None,
            load: None,
            auto: false,
            games: 1,
            json: None,
            help: false,
            menu: false,
        }
    }
}

pub fn parse_cli_options(args: &[String]) -> Result<CliOptions, String> {
    let mut options = CliOptions {
        menu: args.is_empty(),
        ..CliOptions::default()
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let flag = args[idx].as_str();
        match flag {
            "--auto" => options.auto = true,
            "--extension" | "-x" => options.extension = true,
            "--help" | "-h" => options.help = true,
            "--humans" => options.humans = Some(number(flag, value(args, &mut idx, flag)?)?),
            "--bots" => options.bots = parse_bots(value(args, &mut idx, flag)?)?,
            "--names" => options.names = split_list(value(args, &mut idx, flag)?),
            "--mode" => {
                let raw = value(args, &mut idx, flag)?;
                options.mode =
                    GameMode::parse(raw).ok_or_else(|| format!("unknown mode '{raw}'"))?;
            }
            "--seed" => options.seed = Some(number(flag, value(args, &mut idx, flag)?)?),
            "--timeout" => {
                options.timeout = Duration::from_secs(number(flag, value(args, &mut idx, flag)?)?)
            }
            "--bot-delay-ms" => {
                options.bot_delay =
                    Duration::from_millis(number(flag, value(args, &mut idx, flag)?)?)
            }
            "--saves" => options.saves = Some(PathBuf::from(value(args, &mut idx, flag)?)),
            "--load" => options.load = Some(value(args, &mut idx, flag)?.to_string()),
            "--games" => options.games = number(flag, value(args, &mut idx, flag)?)?,
            "--json" => options.json = Some(PathBuf::from(value(args, &mut idx, flag)?)),
            other => return Err(format!("unknown option '{other}'")),
        }
        idx += 1;
    }
    Ok(options)
}

fn value<'a>(args: &'a [String], idx: &mut usize, flag: &str) -> Result<&'a str, String> {
    *idx += 1;
    args.get(*idx)
        .map(String::as_str)
        .ok_or_else(|| format!("{flag} needs a value"))
}

fn number<T: std::str::FromStr>(flag: &str, raw: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("{flag} expects a number, got '{raw}'"))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// `--bots 2` seats two random bots; `--bots random,cheater` names each kind.
fn parse_bots(raw: &str) -> Result<Vec<StrategyKind>, String> {
    if let Ok(count) = raw.trim().parse::<usize>() {
        if count > MAX_PLAYERS {
            return Err(format!("--bots allows at most {MAX_PLAYERS} bots, got {count}"));
        }
        return Ok(vec![StrategyKind::Random; count]);
    }
    split_list(raw)
        .iter()
        .map(|item| match StrategyKind::from_tag(item) {
            StrategyKind::Human => Err(format!("unknown bot kind '{item}'")),
            kind => Ok(kind),
        })
        .collect()
}

pub fn print_help() {
    println!("Usage: jest [options]");
    println!();
    println!("  --humans N            human seats (0-4)");
    println!("  --bots LIST|N         bot kinds, e.g. random,cheater, or a count of random bots");
    println!("  --names A,B           human player names");
    println!("  --mode MODE           classic|jester|clear (or 0|1|2)");
    println!("  --extension, -x       add the BONUS, MALUS and GOLD cards");
    println!("  --seed N              shuffle seed");
    println!("  --timeout SECS        seconds a human has to answer (default 60)");
    println!("  --bot-delay-ms MS     pause after each bot move");
    println!("  --saves DIR           save directory (env JEST_SAVE_DIR, default saves/)");
    println!("  --load NAME           resume a saved game");
    println!("  --auto                play bots only and print a report");
    println!("  --games N             games to simulate with --auto");
    println!("  --json PATH           also write the --auto report as JSON");
    println!("  --help, -h            show this help");
    println!();
    println!("Logging: JEST_LOG or RUST_LOG (default warn).");
}
