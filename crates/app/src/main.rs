use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::model::{Difficulty, QuestionBank};
use services::{Clock, QuizLoopService};
use storage::{BundledStageSource, FileStageSource, StageSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidStagesPath { raw: String },
    InvalidLogFilter { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStagesPath { raw } => write!(f, "invalid --stages value: {raw:?}"),
            ArgsError::InvalidLogFilter { raw } => write!(f, "invalid --log filter: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    sound_enabled_on_launch: bool,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for DesktopApp {
    fn sound_enabled_on_launch(&self) -> bool {
        self.sound_enabled_on_launch
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Debug)]
struct Args {
    stages: Option<PathBuf>,
    sound: bool,
    log_filter: String,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- play  [--stages <file.json>] [--mute] [--log <filter>]");
    eprintln!("  cargo run -p app -- check [--stages <file.json>] [--log <filter>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --stages  bundled question bank");
    eprintln!("  --log     info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  MDQUIZ_STAGES, MDQUIZ_SOUND=off, MDQUIZ_LOG (or RUST_LOG)");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Play,
    Check,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "play" => Some(Self::Play),
            "check" => Some(Self::Check),
            _ => None,
        }
    }
}

impl Args {
    fn from_env() -> Self {
        let stages = std::env::var("MDQUIZ_STAGES")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let sound = std::env::var("MDQUIZ_SOUND")
            .map(|value| !matches!(value.trim(), "off" | "0" | "false"))
            .unwrap_or(true);
        let log_filter = std::env::var("MDQUIZ_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or_else(|_| "info".into());

        Self {
            stages,
            sound,
            log_filter,
        }
    }

    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self::from_env();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--stages" => {
                    let value = require_value(args, "--stages")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidStagesPath { raw: value });
                    }
                    parsed.stages = Some(PathBuf::from(value));
                }
                "--mute" => parsed.sound = false,
                "--log" => parsed.log_filter = require_value(args, "--log")?,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn source(&self) -> Box<dyn StageSource> {
        match &self.stages {
            Some(path) => Box::new(FileStageSource::new(path.clone())),
            None => Box::new(BundledStageSource),
        }
    }
}

fn init_tracing(filter: &str) -> Result<(), ArgsError> {
    let filter = EnvFilter::try_new(filter).map_err(|_| ArgsError::InvalidLogFilter {
        raw: filter.to_string(),
    })?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}

fn print_bank_report(origin: &str, bank: &QuestionBank) {
    println!("question bank: {origin}");
    println!("  stages:     {}", bank.len());
    println!("  max points: {}", bank.total_points());
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let count = bank
            .iter()
            .filter(|stage| stage.difficulty() == difficulty)
            .count();
        println!("  {:<10}  {count}", format!("{difficulty}:"));
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand means play.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Play,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Play,
        Some(first) => Command::from_arg(first).ok_or_else(|| {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            ArgsError::UnknownArg(first.to_string())
        })?,
    };

    if !argv.is_empty() && !argv[0].starts_with("--") {
        argv.remove(0);
    }

    let mut iter = argv.into_iter();
    let parsed = Args::parse(&mut iter).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    init_tracing(&parsed.log_filter)?;
    tracing::debug!(?cmd, ?parsed, "arguments parsed");

    let source = parsed.source();
    let quiz_loop = QuizLoopService::load(Clock::default(), source.as_ref()).await?;

    match cmd {
        Command::Check => {
            print_bank_report(&source.describe(), &quiz_loop.bank());
            tracing::info!(source = %source.describe(), "question bank check passed");
            Ok(())
        }
        Command::Play => {
            let app = DesktopApp {
                sound_enabled_on_launch: parsed.sound,
                quiz_loop: Arc::new(quiz_loop),
            };
            let app: Arc<dyn UiApp> = Arc::new(app);
            let context = build_app_context(&app);

            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Markdown Magic School")
                    .with_always_on_top(false),
            );

            tracing::info!(sound = parsed.sound, "opening desktop window");
            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
