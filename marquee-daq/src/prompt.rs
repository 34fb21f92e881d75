//! Console prompts for the DAQ configuration and the iteration count
//!
//! Each prompt reads one line. The line must start with an integer; any text
//! after it is ignored.

use std::io::{BufRead, Write};

use marquee_core::counter::MAX_COUNTER;
use marquee_hal::DaqConfig;
use thiserror::Error;

/// Console input errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// Standard input closed or unreadable
    #[error("Exiting Program...")]
    Closed,
    /// Line does not start with an integer
    #[error("Invalid Input: Did Not Enter Integer...")]
    NotInteger,
    /// Integer is not a known configuration code
    #[error("Invalid Display Configuration...")]
    InvalidConfiguration,
    /// Integer is outside the iteration range
    #[error("Invalid Scrolling Configuration...")]
    InvalidIterations,
}

/// Ask for the DAQ configuration type
pub fn config_type<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<DaqConfig, InputError> {
    let prompt = format!(
        "Enter the Configuration Type: ({} for the Device, {} for the Simulator): ",
        DaqConfig::Device.as_u8(),
        DaqConfig::Simulator.as_u8()
    );
    let value = ask(input, output, &prompt)?;
    DaqConfig::from_code(value).ok_or(InputError::InvalidConfiguration)
}

/// Ask for the number of iterations
pub fn iterations<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<u8, InputError> {
    let prompt = format!(
        "Number of Iterations (Must Be Less Than or Equal To {}) : ",
        MAX_COUNTER
    );
    let value = ask(input, output, &prompt)?;
    u8::try_from(value)
        .ok()
        .filter(|n| *n <= MAX_COUNTER)
        .ok_or(InputError::InvalidIterations)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<i64, InputError> {
    write!(output, "{}", prompt).map_err(|_| InputError::Closed)?;
    output.flush().map_err(|_| InputError::Closed)?;

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => Err(InputError::Closed),
        Ok(_) => leading_integer(&line).ok_or(InputError::NotInteger),
    }
}

/// Parse the integer at the start of a line
///
/// Leading whitespace and an optional sign are accepted. Values beyond the
/// `i64` range saturate, which still fails every range check.
pub fn leading_integer(line: &str) -> Option<i64> {
    let line = line.trim_start();
    let (negative, rest) = match line.as_bytes().first() {
        Some(b'-') => (true, &line[1..]),
        Some(b'+') => (false, &line[1..]),
        _ => (false, line),
    };

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let magnitude = rest[..digits].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}
