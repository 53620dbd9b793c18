//! linestack demo
//!
//! Walks through every element kind: a select, two text inputs, a
//! progress bar and a summary table, all repainted in place below the
//! prompt.
//!
//! ```text
//! linestack              # run the demo
//! linestack --version
//! linestack --init-config   # write the default config file
//! ```
//!
//! Logs go to `~/.linestack/linestack.log`; stdout belongs to the UI.

use std::env;
use std::thread;
use std::time::Duration;

use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use linestack::{Config, ProgressBar, Select, Session, Table, TextInput, TextLabel};

/// Version string from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    eprintln!("linestack {} - inline terminal UI demo", VERSION);
    eprintln!();
    eprintln!("Usage: linestack [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --init-config         Write the default ~/.linestack/config.toml");
    eprintln!("  -v, --version         Show version");
    eprintln!("  -h, --help            Show this help");
    eprintln!();
    eprintln!("Keys:");
    eprintln!("  ↑/↓                   Move between choices");
    eprintln!("  Space                 Toggle a choice");
    eprintln!("  ←/→                   Move the text cursor");
    eprintln!("  Enter                 Confirm");
    eprintln!("  Ctrl+C                Quit");
    eprintln!();
    eprintln!("Configuration: ~/.linestack/config.toml");
}

fn init_logging(config: &Config) {
    let Some(dir) = Config::config_dir() else {
        return;
    };
    if std::fs::create_dir_all(&dir).is_err() {
        return;
    }

    // Open log file (append mode)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join("linestack.log"))
        .ok();

    if let Some(file) = log_file {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    }
}

fn main() -> anyhow::Result<()> {
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return Ok(());
            }
            "--init-config" => {
                Config::default().save().map_err(anyhow::Error::msg)?;
                eprintln!("Wrote default configuration");
                return Ok(());
            }
            "-v" | "--version" => {
                eprintln!("linestack {}", VERSION);
                return Ok(());
            }
            other => {
                eprintln!("Error: Unknown option: {}", other);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
        }
    }

    let config = Config::load();
    init_logging(&config);
    info!("linestack {} starting", VERSION);

    run_demo(&config)
}

fn run_demo(config: &Config) -> anyhow::Result<()> {
    let mut session = Session::new()?;
    if config.hide_cursor {
        session.set_cursor_visible(false)?;
    }

    session.register(TextLabel::new("How awesome is this?"))?;
    let select = session.register(
        Select::new([
            ("Pretty cool.", 0),
            ("Awesome", 1),
            ("Unbelievable?!?!", 2),
            ("Not that awesome", 3),
        ])
        .with_style(config.select.clone()),
    )?;
    let selection = session.read(select)?;

    let username = session.register(
        TextInput::new()
            .label("Username: ")
            .with_style(config.input.clone()),
    )?;
    let username = session.read(username)?;

    let password = session.register(
        TextInput::new()
            .label("Password: ")
            .echo(false)
            .with_style(config.input.clone()),
    )?;
    let password = session.read(password)?;

    let status = session.register(TextLabel::new("Saving..."))?;
    let bar = session.register(ProgressBar::with_style(config.progress.clone()))?;
    for step in 1..=20 {
        thread::sleep(Duration::from_millis(40));
        session.update(bar, |bar| bar.set_progress(step as f32 / 20.0))?;
    }
    session.update(status, |label| label.set_text("Saved."))?;

    let summary = session.register(Table::new().header(["Field", "Value"]))?;
    session.update(summary, |table| {
        table.push_row(["username".to_string(), username.clone()]);
        table.push_row(["password".to_string(), "*".repeat(password.chars().count())]);
        table.push_row(["selection".to_string(), format!("{:?}", selection)]);
    })?;

    session.close()?;
    info!("Demo finished");
    Ok(())
}
