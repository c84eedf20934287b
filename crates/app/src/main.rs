use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{Clock, SessionLoop};
use storage::{JsonFileBank, QuestionBank};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_QUESTIONS: &str = "questions.json";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidPath { raw } => write!(f, "invalid --questions value: {raw:?}"),
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
    source_label: String,
    session_loop: Arc<SessionLoop>,
}

impl UiApp for DesktopApp {
    fn source_label(&self) -> String {
        self.source_label.clone()
    }

    fn session_loop(&self) -> Arc<SessionLoop> {
        Arc::clone(&self.session_loop)
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    questions: PathBuf,
    shuffle: bool,
}

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Run(Args),
    Help,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--questions <path>] [--shuffle]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --questions {DEFAULT_QUESTIONS}");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZ_QUESTIONS, QUIZ_SHUFFLE (1/true/yes), RUST_LOG");
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Args {
    /// Read flags, falling back to the environment for anything not given.
    fn parse(
        mut args: impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Command, ArgsError> {
        let mut questions = env("QUIZ_QUESTIONS")
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_QUESTIONS), PathBuf::from);
        let mut shuffle = env("QUIZ_SHUFFLE").is_some_and(|value| parse_flag(&value));

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--questions" | "-q" => {
                    let value = require_value(&mut args, "--questions")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidPath { raw: value });
                    }
                    questions = PathBuf::from(value);
                }
                "--shuffle" => shuffle = true,
                "--help" | "-h" => return Ok(Command::Help),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Command::Run(Self { questions, shuffle }))
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let command = Args::parse(std::env::args().skip(1), |key| std::env::var(key).ok())
        .map_err(|e| {
            eprintln!("{e}");
            print_usage();
            e
        })?;
    let args = match command {
        Command::Help => {
            print_usage();
            return Ok(());
        }
        Command::Run(args) => args,
    };

    init_tracing();

    let bank = JsonFileBank::new(&args.questions);
    let source_label = bank.describe();

    // Fail before the window opens if the file is unusable.
    let questions = bank.load().await.inspect_err(|err| {
        error!(source = %source_label, error = %err, "cannot load questions");
    })?;
    info!(
        source = %source_label,
        count = questions.len(),
        shuffle = args.shuffle,
        "questions loaded"
    );

    let session_loop =
        Arc::new(SessionLoop::new(Clock::default(), Arc::new(bank)).with_shuffle(args.shuffle));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        source_label,
        session_loop,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(WindowBuilder::new().with_title("Quiz"));

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> impl Iterator<Item = String> {
        items
            .iter()
            .map(|item| (*item).to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_without_flags_or_env() {
        let command = Args::parse(argv(&[]), no_env).unwrap();
        assert_eq!(
            command,
            Command::Run(Args {
                questions: PathBuf::from(DEFAULT_QUESTIONS),
                shuffle: false,
            })
        );
    }

    #[test]
    fn flags_override_environment() {
        let env = |key: &str| match key {
            "QUIZ_QUESTIONS" => Some("from-env.json".to_string()),
            "QUIZ_SHUFFLE" => Some("0".to_string()),
            _ => None,
        };
        let command = Args::parse(argv(&["--questions", "cli.json", "--shuffle"]), env).unwrap();
        assert_eq!(
            command,
            Command::Run(Args {
                questions: PathBuf::from("cli.json"),
                shuffle: true,
            })
        );
    }

    #[test]
    fn environment_is_used_when_flags_are_absent() {
        let env = |key: &str| match key {
            "QUIZ_QUESTIONS" => Some("trivia.json".to_string()),
            "QUIZ_SHUFFLE" => Some("yes".to_string()),
            _ => None,
        };
        let command = Args::parse(argv(&[]), env).unwrap();
        assert_eq!(
            command,
            Command::Run(Args {
                questions: PathBuf::from("trivia.json"),
                shuffle: true,
            })
        );
    }

    #[test]
    fn rejects_bad_arguments() {
        assert_eq!(
            Args::parse(argv(&["--questions"]), no_env),
            Err(ArgsError::MissingValue {
                flag: "--questions"
            })
        );
        assert_eq!(
            Args::parse(argv(&["--questions", " "]), no_env),
            Err(ArgsError::InvalidPath { raw: " ".into() })
        );
        assert_eq!(
            Args::parse(argv(&["--timer", "10"]), no_env),
            Err(ArgsError::UnknownArg("--timer".into()))
        );
        assert_eq!(Args::parse(argv(&["-h"]), no_env), Ok(Command::Help));
    }
}
