/* 3rd party libraries */
use clap::{Arg, Command};
use log::{info, warn};
use std::io::{self, BufRead, Write};

/* Custom libraries */
use elevator_dispatch::config::{self, Config, ConfigError};
use elevator_dispatch::unwrap_or_exit;
use elevator_dispatch::{ElevatorController, Mode};

enum Input {
    Start,
    Stop,
    Kill,
    Issue(i32, i32, i32),
    Status,
    Quit,
    Unknown(String),
}

/* Main */
fn main() -> io::Result<()> {
    let matches = Command::new("elevator")
        .about("Single elevator running a SCAN schedule over ten floors")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .takes_value(true)
                .default_value("config.toml")
                .help("Path to the configuration file"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print status reports as JSON"),
        )
        .get_matches();

    // Load the configuration
    let config_path = matches.value_of("config").unwrap_or("config.toml");
    let (config, config_error) = match config::load_config(config_path) {
        Ok(config) => (config, None),
        Err(ConfigError::Read(e)) => (Config::default(), Some(e)),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.logging.level.as_str()))
        .init();

    if let Some(e) = config_error {
        warn!("Could not read {} ({}), using defaults", config_path, e);
    }

    let json = matches.is_present("json");
    let controller = ElevatorController::new(&config.elevator);
    info!("Elevator ready, type `help` for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        match parse_input(&line) {
            Input::Start => writeln!(stdout, "{}", controller.start_elevator())?,
            Input::Stop => writeln!(stdout, "{}", controller.stop_elevator())?,
            Input::Kill => controller.force_stop(),
            Input::Issue(kind, start, destination) => {
                writeln!(stdout, "{}", controller.issue_request(kind, start, destination))?
            }
            Input::Status => {
                let snapshot = controller.snapshot();
                if json {
                    let report = unwrap_or_exit!(snapshot.to_json(), "Failed to serialize status");
                    writeln!(stdout, "{}", report)?;
                } else {
                    write!(stdout, "{}", snapshot)?;
                }
            }
            Input::Quit => break,
            Input::Unknown(cmd) => {
                if !cmd.is_empty() {
                    writeln!(stdout, "unknown command `{}`", cmd)?;
                }
                writeln!(
                    stdout,
                    "commands: start | stop | kill | issue <type 1-4> <start> <dest> | status | quit"
                )?;
            }
        }
        stdout.flush()?;
    }

    // Let the car finish its sweep before exiting
    if controller.snapshot().mode != Mode::Offline {
        let _ = controller.stop();
        info!("Waiting for passengers to be delivered");
    }
    controller.join();

    Ok(())
}

fn parse_input(line: &str) -> Input {
    let mut words = line.split_whitespace();
    match words.next() {
        Some("start") => Input::Start,
        Some("stop") => Input::Stop,
        Some("kill") => Input::Kill,
        Some("status") => Input::Status,
        Some("quit") | Some("exit") => Input::Quit,
        Some("help") => Input::Unknown(String::new()),
        Some("issue") => {
            let args: Result<Vec<i32>, _> = words.map(|w| w.parse::<i32>()).collect();
            match args.as_deref() {
                Ok(&[kind, start, destination]) => Input::Issue(kind, start, destination),
                _ => Input::Unknown(line.trim().to_string()),
            }
        }
        Some(other) => Input::Unknown(other.to_string()),
        None => Input::Unknown(String::new()),
    }
}
