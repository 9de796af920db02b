use std::{fs::File, path::PathBuf, process::ExitCode, sync::Mutex, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use quickopen::{Config, Session, download::Downloader, fs::LocalFs, ui::TerminalHost};

#[derive(Debug, Parser)]
#[command(name = "quickopen", version, about = "Navigate the filesystem and open files from a quick-pick menu")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Directory used when no path is given (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Tag listed entries File/Dir; costs one stat per entry
    #[arg(long, global = true)]
    annotate: bool,

    /// Command used to open files (defaults to $VISUAL, $EDITOR, then vi)
    #[arg(long, global = true)]
    editor: Option<String>,

    /// Seconds a transient message stays visible
    #[arg(long = "message-timeout", global = true, default_value_t = 5)]
    message_timeout_secs: u64,

    /// Write logs to this file instead of stderr
    #[arg(long = "log-file", global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Open a path interactively: files open, directories are listed
    Open { path: Option<PathBuf> },
    /// Open a typed path or URL, prompting when none is given
    Goto { target: Option<String> },
}

fn init_tracing(log_file: Option<&PathBuf>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).init();
        }
        None => builder.with_writer(std::io::stderr).init(),
    }
    Ok(())
}

fn build_config(cli: &Cli) -> Config {
    let mut config = Config::detect();
    if let Some(root) = &cli.root {
        config = config.with_root(root);
    }
    if let Some(editor) = &cli.editor {
        config.editor = editor.clone();
    }
    config.annotate_entries = cli.annotate;
    config.message_timeout = Duration::from_secs(cli.message_timeout_secs);
    config
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_ref())?;

    let config = build_config(&cli);
    debug!(?config, "starting");

    let downloader = Downloader::new(&config.temp_dir).context("building HTTP client")?;
    let mut host = TerminalHost::new(config.editor.clone());
    let mut session = Session::new(&config, &LocalFs, &mut host, &downloader);

    let result = match cli.command {
        Some(Command::Goto { target }) => session.open_typed(target).await,
        Some(Command::Open { path }) => session.quick_open(path.as_deref()).await,
        None => session.quick_open(None).await,
    };

    // errors have already been shown to the user
    match result {
        Ok(outcome) => {
            debug!(?outcome, "done");
            Ok(ExitCode::SUCCESS)
        }
        Err(_) => Ok(ExitCode::FAILURE),
    }
}
