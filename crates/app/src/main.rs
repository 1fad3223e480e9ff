use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use persona_core::model::Question;
use services::{Clock, QuestionBank, ShuffleSource, default_questions, load_questions};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidSeed { raw: String },
    EmptyPath { flag: &'static str },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidSeed { raw } => write!(f, "invalid --seed value: {raw}"),
            ArgsError::EmptyPath { flag } => write!(f, "{flag} must not be empty"),
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

fn require_path(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<PathBuf, ArgsError> {
    let value = require_value(args, flag)?;
    if value.trim().is_empty() {
        return Err(ArgsError::EmptyPath { flag });
    }
    Ok(PathBuf::from(value))
}

struct DesktopApp {
    questions: Arc<[Question]>,
    shuffle: ShuffleSource,
    export_dir: PathBuf,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> Arc<[Question]> {
        Arc::clone(&self.questions)
    }

    fn shuffle_source(&self) -> ShuffleSource {
        self.shuffle
    }

    fn clock(&self) -> Clock {
        Clock::default_clock()
    }

    fn export_dir(&self) -> PathBuf {
        self.export_dir.clone()
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Parsed {
    Run(Args),
    Help,
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    questions: Option<PathBuf>,
    export_dir: PathBuf,
    seed: Option<u64>,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <file.json>] [--export-dir <dir>] [--seed <u64>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions   built-in 10-question bank");
    eprintln!("  --export-dir  current directory");
    eprintln!("  --seed        random order on every run");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PERSONA_QUESTIONS, PERSONA_EXPORT_DIR, PERSONA_SEED, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Parsed, ArgsError> {
        let mut questions = env("PERSONA_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut export_dir = env("PERSONA_EXPORT_DIR")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let mut seed = env("PERSONA_SEED").and_then(|value| value.trim().parse::<u64>().ok());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" => questions = Some(require_path(args, "--questions")?),
                "--export-dir" => export_dir = require_path(args, "--export-dir")?,
                "--seed" => {
                    let value = require_value(args, "--seed")?;
                    let parsed: u64 = value
                        .trim()
                        .parse()
                        .map_err(|_| ArgsError::InvalidSeed { raw: value.clone() })?;
                    seed = Some(parsed);
                }
                "--help" | "-h" => return Ok(Parsed::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Parsed::Run(Self {
            questions,
            export_dir,
            seed,
        }))
    }

    fn shuffle_source(&self) -> ShuffleSource {
        self.seed.map_or(ShuffleSource::Thread, ShuffleSource::Seeded)
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let args = match parsed {
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
        Parsed::Run(args) => args,
    };

    let questions = match &args.questions {
        Some(path) => load_questions(path)?,
        None => default_questions()?,
    };
    let per_dimension = QuestionBank::new(questions.clone())?.per_dimension();
    tracing::info!(
        count = questions.len(),
        ?per_dimension,
        export_dir = %args.export_dir.display(),
        seeded = args.seed.is_some(),
        "starting persona"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questions: questions.into(),
        shuffle: args.shuffle_source(),
        export_dir: args.export_dir,
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Persona")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
