mod console;
mod nav;
mod render;
mod session;

use agrolens_core::{
    analysis::{Report, ScanKind},
    config::{self, Source},
    error::AgroError,
    i18n::TextResolver,
    language::{Language, LANGUAGES},
};
use clap::{Parser, Subcommand};
use serde::Serialize;
use console::{ConsoleSpeaker, FileCamera, StdinMicrophone};
use session::{Devices, Session};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "agrolens",
    version,
    about = "AgroLens: smart farming assistant"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Language code (en, te, hi, ur, kn, ta, mr). Defaults to the configured language.
    #[arg(short, long, global = true)]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a translation key.
    Translate {
        key: String,
    },
    /// List languages and their translation coverage.
    Languages {
        /// Print the list as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Show the navigation menu.
    Nav {
        /// Print the menu as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Ask the farming assistant one question.
    Ask {
        /// The question.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Voice chat: each stdin line is one utterance.
    Chat,
    /// Scan a crop photo.
    Scan {
        /// Photo to upload, or to serve as the camera frame with `--capture`.
        #[arg(required_unless_present = "sample")]
        image: Option<PathBuf>,
        /// Take the photo through the camera instead of uploading it.
        #[arg(long, conflicts_with = "sample")]
        capture: bool,
        /// Show a named sample result instead of analyzing a photo.
        #[arg(long)]
        sample: Option<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Analyze a soil photo.
    Soil {
        /// Photo to upload, or to serve as the camera frame with `--capture`.
        #[arg(required_unless_present = "sample")]
        image: Option<PathBuf>,
        /// Take the photo through the camera instead of uploading it.
        #[arg(long, conflicts_with = "sample")]
        capture: bool,
        /// Show a named sample result instead of analyzing a photo.
        #[arg(long)]
        sample: Option<String>,
        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (cfg, source) = config::load_with_source(&cli.config)?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.agrolens.log_level)),
        )
        .init();
    match &source {
        Source::File(path) => info!("config loaded from {}", path.display()),
        Source::Defaults(path) => {
            info!("config file not found at {}, using defaults", path.display())
        }
    }

    let camera = match &cli.command {
        Commands::Scan {
            image: Some(image), ..
        }
        | Commands::Soil {
            image: Some(image), ..
        } => FileCamera::new(image),
        _ => FileCamera::new(""),
    };
    let mut session = Session::from_config(
        &cfg,
        Devices {
            camera: Arc::new(camera),
            microphone: Arc::new(StdinMicrophone::default()),
            speaker: Arc::new(ConsoleSpeaker::default()),
        },
    )?;
    if let Some(code) = &cli.lang {
        session.set_language(code)?;
    }

    match cli.command {
        Commands::Translate { key } => {
            println!("{}", session.translate(&key));
        }
        Commands::Languages { json } => {
            let resolver = TextResolver::builtin();
            let total = resolver.keys().len();
            let rows: Vec<LanguageRow> = LANGUAGES
                .iter()
                .map(|language| LanguageRow {
                    language,
                    current: language.code == session.language().code,
                    translated: total - resolver.missing_keys(language.code).len(),
                    total,
                })
                .collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in &rows {
                    let marker = if row.current { "*" } else { " " };
                    println!(
                        "{marker} {} {:<3} {:<10} {}/{total}",
                        row.language.flag, row.language.code, row.language.name, row.translated
                    );
                }
            }
        }
        Commands::Nav { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&session.nav())?);
            } else {
                println!("{}", session.translate("app_name"));
                println!("{}\n", session.translate("tagline"));
                for item in session.nav() {
                    println!("  {:<16} {}", item.path, item.label);
                }
            }
        }
        Commands::Ask { message } => {
            if message.is_empty() {
                anyhow::bail!("no question provided. Usage: agrolens ask <question>");
            }
            session.ask(&message.join(" ")).await?;
        }
        Commands::Chat => {
            println!("{}", session.translate("chat_title"));
            session.greet();
            loop {
                match session.listen().await {
                    Ok(_) => {}
                    Err(AgroError::Io(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                    Err(AgroError::Device(_)) => {
                        eprintln!("{}", session.translate("microphone_denied"));
                        break;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Commands::Scan {
            image,
            capture,
            sample,
            json,
        } => {
            let input = ScanInput::from_args(image, capture, sample)?;
            run_scan(&session, ScanKind::Crop, input, json).await?
        }
        Commands::Soil {
            image,
            capture,
            sample,
            json,
        } => {
            let input = ScanInput::from_args(image, capture, sample)?;
            run_scan(&session, ScanKind::Soil, input, json).await?
        }
    }

    Ok(())
}

/// One row of the `languages` listing.
#[derive(Serialize)]
struct LanguageRow {
    #[serde(flatten)]
    language: &'static Language,
    current: bool,
    translated: usize,
    total: usize,
}

/// Where a scan's result comes from.
enum ScanInput {
    Upload(PathBuf),
    Capture,
    Sample(String),
}

impl ScanInput {
    fn from_args(
        image: Option<PathBuf>,
        capture: bool,
        sample: Option<String>,
    ) -> anyhow::Result<Self> {
        match (sample, capture, image) {
            (Some(name), _, _) => Ok(Self::Sample(name)),
            (None, true, _) => Ok(Self::Capture),
            (None, false, Some(path)) => Ok(Self::Upload(path)),
            (None, false, None) => anyhow::bail!("no image given. Pass a photo or --sample <name>"),
        }
    }
}

/// Produce a report for `kind` from `input` and print it.
async fn run_scan(
    session: &Session,
    kind: ScanKind,
    input: ScanInput,
    json: bool,
) -> anyhow::Result<()> {
    let outcome = match input {
        ScanInput::Sample(name) => session.show_sample(kind, &name).map(Some),
        ScanInput::Capture => {
            eprintln!("{}", session.translate(kind.progress_key()));
            session.capture(kind).await
        }
        ScanInput::Upload(image) => {
            let bytes = tokio::fs::read(&image)
                .await
                .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", image.display()))?;
            eprintln!("{}", session.translate(kind.progress_key()));
            session.analyze(kind, bytes).await
        }
    };
    let report: Report = match outcome {
        Ok(Some(r)) => r,
        Ok(None) => return Ok(()),
        Err(AgroError::Device(_)) => {
            anyhow::bail!("{}", session.translate("camera_denied"));
        }
        Err(e) => return Err(e.into()),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::report(session.context(), &report));
    }
    Ok(())
}
