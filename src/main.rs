use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::Parser;
use hotel_desk::{
    Args, Config, Console, Hotel, PersistenceError, RoomReport, config::DEFAULT_LOG_FILTER,
    persistence,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Entry point: parse flags, set up logging, then run the desk or print a snapshot
fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(&args);

    // Logs go to stderr so the menu on stdout stays readable
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!(
        data_file = %config.data_file.display(),
        user = %config.admin.username,
        "Configuration loaded"
    );

    let result = if args.snapshot {
        print_snapshot(&config)
    } else {
        run_desk(&config)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "Desk stopped");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Log in and run the menu on stdin/stdout
fn run_desk(config: &Config) -> io::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(
        Hotel::new(),
        config.data_file.clone(),
        stdin.lock(),
        io::stdout(),
    );

    if !console.login(&config.authenticator())? {
        return Ok(());
    }
    console.run()
}

/// Print the saved booking state as JSON
fn print_snapshot(config: &Config) -> io::Result<()> {
    let mut hotel = Hotel::new();
    match persistence::load(&mut hotel, &config.data_file) {
        Ok(_) | Err(PersistenceError::Unavailable { .. }) => {}
        Err(PersistenceError::Io { source, .. }) => return Err(source),
    }

    let json = RoomReport::snapshot_json(&hotel).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}")
}
