//! Marquee DAQ front end
//!
//! Scrolls a greeting and an iteration counter across a bank of eight
//! seven-segment displays, then a closing message, then lights every
//! segment.
//!
//! # Usage
//!
//! ```bash
//! # Prompted for the configuration type (0 device, 4 simulator) and the
//! # number of iterations (0..=99)
//! marquee-daq
//!
//! # Custom messages, timing or switch script
//! marquee-daq --config demo.toml --log-level info
//! ```
//!
//! The run switch (channel 1) pauses the animation while off; the reset
//! switch (channel 0) restarts it from the beginning.

mod backend;
mod config;
mod delay;
mod prompt;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use colored::Colorize;
use log::{debug, info};
use marquee_core::{Session, SessionReport, SwitchGate};
use marquee_hal::Channel;

use backend::Backend;
use config::Settings;
use delay::StdDelay;

/// Exit status of a failed run
const PROGRAM_ERROR: u8 = 255;

/// Marquee DAQ front end
#[derive(Parser, Debug)]
#[command(name = "marquee-daq")]
#[command(version)]
#[command(about = "Scrolling seven-segment display driven by run and reset switches")]
struct Cli {
    /// Settings file (defaults to marquee.toml in the working directory, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    /// Exit without waiting for Enter
    #[arg(long)]
    no_pause: bool,

    /// Draw the simulator without colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level.as_str()))
        .init();

    let status = match run(&cli) {
        Ok(report) => {
            println!(
                "\n{} {} frame(s), {} restart(s), final counter {}",
                "Scroll finished:".green().bold(),
                report.frames,
                report.restarts,
                report.final_counter
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("\n{}\n", format!("{:#}", err).red());
            ExitCode::from(PROGRAM_ERROR)
        }
    };

    if !cli.no_pause {
        pause();
    }
    status
}

fn run(cli: &Cli) -> Result<SessionReport> {
    let settings = Settings::resolve(cli.config.as_deref()).context("Invalid Settings")?;
    let scroll = settings.scroll_config()?;
    debug!("Scroll configuration: {:?}", scroll);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let daq = prompt::config_type(&mut input, &mut output)?;
    let iterations = prompt::iterations(&mut input, &mut output)?;
    info!("Configuration {:?}, {} iteration(s)", daq, iterations);
    writeln!(output)?;

    let bank = Backend::open(daq, io::stdout(), !cli.no_color);
    let gate = SwitchGate::new(
        settings.switches.channel(Channel::Run),
        settings.switches.channel(Channel::Reset),
    );

    let mut session = Session::new(bank, gate, StdDelay, scroll);
    let report = session
        .run(iterations)
        .map_err(|e| anyhow!("Invalid Scrolling Configuration: {}", e))?;

    let (_, gate, _) = session.into_parts();
    let (run, reset) = gate.into_inner();
    debug!(
        "Switch reads: run {}, reset {}",
        run.reads(),
        reset.reads()
    );
    Ok(report)
}

fn pause() {
    print!("Press Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
