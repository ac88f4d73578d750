use std::sync::Arc;

use assessment_core::model::TrackId;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{AssessmentService, Clock};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

#[derive(Debug, thiserror::Error)]
enum ArgsError {
    #[error("{flag} requires a value")]
    MissingValue { flag: &'static str },
    #[error("unknown argument: {0}")]
    UnknownArg(String),
    #[error("invalid --track value: {raw}")]
    InvalidTrack { raw: String },
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    assessments: Arc<AssessmentService>,
    preselected_track: Option<TrackId>,
    open_assessment_on_launch: bool,
}

impl UiApp for DesktopApp {
    fn assessments(&self) -> Arc<AssessmentService> {
        Arc::clone(&self.assessments)
    }

    fn preselected_track(&self) -> Option<TrackId> {
        self.preselected_track.clone()
    }

    fn open_assessment_on_launch(&self) -> bool {
        self.open_assessment_on_launch
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--track <id>] [--assessment]");
    eprintln!("  cargo run -p app -- catalog");
    eprintln!();
    eprintln!("Tracks: startup, product, business");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ADW_TRACK, ADW_OPEN_ASSESSMENT=1, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Catalog,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "catalog" => Some(Self::Catalog),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    track: Option<TrackId>,
    open_assessment: bool,
}

impl Args {
    fn parse_ui(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut parsed = Self {
            track: match std::env::var("ADW_TRACK") {
                Ok(raw) if !raw.trim().is_empty() => Some(parse_track(raw)?),
                _ => None,
            },
            open_assessment: std::env::var("ADW_OPEN_ASSESSMENT")
                .is_ok_and(|value| matches!(value.trim(), "1" | "true" | "yes")),
        };

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--track" => {
                    let value = require_value(args, "--track")?;
                    parsed.track = Some(parse_track(value)?);
                }
                "--assessment" => parsed.open_assessment = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(parsed)
    }

    fn parse_catalog(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        match args.next() {
            None => Ok(Self::default()),
            Some(arg) => Err(ArgsError::UnknownArg(arg)),
        }
    }
}

fn parse_track(raw: String) -> Result<TrackId, ArgsError> {
    TrackId::new(raw.trim()).map_err(|_| ArgsError::InvalidTrack { raw })
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "app=info,services=info,ui=info".into()),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // No subcommand launches the UI.
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some("--help" | "-h") => {
            print_usage();
            return Ok(());
        }
        Some(first) if first.starts_with("--") => Command::Ui,
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
    let parsed = match cmd {
        Command::Ui => Args::parse_ui(&mut iter),
        Command::Catalog => Args::parse_catalog(&mut iter),
    }
    .map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    init_tracing();

    let assessments = Arc::new(AssessmentService::builtin(Clock::system())?);

    match cmd {
        Command::Ui => {
            if let Some(track) = parsed.track.as_ref() {
                assessments
                    .ensure_track(track)
                    .map_err(|_| ArgsError::InvalidTrack {
                        raw: track.to_string(),
                    })?;
            }
            info!(
                track = ?parsed.track,
                open_assessment = parsed.open_assessment,
                "launching desktop ui"
            );

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                assessments,
                preselected_track: parsed.track,
                open_assessment_on_launch: parsed.open_assessment,
            });
            let context = build_app_context(&app);

            // Some dev setups default the window to always-on-top.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("AllDazeWork")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Catalog => {
            println!("{}", assessments.export_catalog_json()?);
            Ok(())
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
