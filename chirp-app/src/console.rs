//! Console input
//!
//! Stands in for the gesture sensor and the outside world: each stdin
//! line is a command. Runs on its own OS thread since stdin blocks.

use std::io::BufRead;

use log::{info, warn};

use chirp_core::gesture::{GestureSample, Location};

use crate::api::DryRunApi;
use crate::channels::SENSOR_CHANNEL;
use crate::store::SharedStore;

pub const HELP: &str = "\
commands:
  l | left            tap on the west side
  r | right           tap on the east side
  t | tap             tap with no location
  d | double          double tap
  dm <from> <text>    deliver a direct message
  account on|off      set the account status
  fail on|off         make sends fail
  latency <ms>        simulated send round trip
  q | quit            exit";

/// One console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Raw samples as the sensor would report them
    Gesture(Vec<GestureSample>),
    Inbound { from: String, text: String },
    Account(bool),
    Failing(bool),
    Latency(u32),
    Help,
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> Result<Command, &'static str> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    match word {
        "l" | "left" => Ok(Command::Gesture(vec![
            GestureSample::touch(Location::west()),
            GestureSample::tap(),
        ])),
        "r" | "right" => Ok(Command::Gesture(vec![
            GestureSample::touch(Location::east()),
            GestureSample::tap(),
        ])),
        "t" | "tap" => Ok(Command::Gesture(vec![GestureSample::tap()])),
        "d" | "double" => Ok(Command::Gesture(vec![GestureSample::double_tap()])),
        "dm" => {
            let (from, text) = rest.split_once(char::is_whitespace).ok_or("usage: dm <from> <text>")?;
            Ok(Command::Inbound {
                from: from.into(),
                text: text.trim().into(),
            })
        }
        "account" => parse_switch(rest).map(Command::Account),
        "fail" => parse_switch(rest).map(Command::Failing),
        "latency" => rest
            .parse()
            .map(Command::Latency)
            .map_err(|_| "usage: latency <ms>"),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        _ => Err("unknown command, try 'help'"),
    }
}

fn parse_switch(value: &str) -> Result<bool, &'static str> {
    match value {
        "on" | "true" | "1" => Ok(true),
        "off" | "false" | "0" => Ok(false),
        _ => Err("expected on or off"),
    }
}

/// Read commands until stdin closes
pub fn run(store: SharedStore, api: &'static DryRunApi) {
    info!("Console ready, type 'help' for commands");

    for line in std::io::stdin().lock().lines() {
        let Ok(line) = line else { break };
        if line.trim().is_empty() {
            continue;
        }

        match parse_command(&line) {
            Ok(Command::Gesture(samples)) => {
                for sample in samples {
                    if SENSOR_CHANNEL.try_send(sample).is_err() {
                        warn!("Sensor channel full, sample dropped");
                    }
                }
            }
            Ok(Command::Inbound { from, text }) => {
                let message = api.inject_inbound(&from, &text);
                info!("Inbound from {} queued (t={})", from, message.created_at);
            }
            Ok(Command::Account(initialized)) => {
                info!("Account initialized: {}", initialized);
                store.set_account(initialized);
            }
            Ok(Command::Failing(failing)) => {
                info!("Sends failing: {}", failing);
                api.set_failing(failing);
            }
            Ok(Command::Latency(ms)) => {
                info!("Send latency: {} ms", ms);
                api.set_latency_ms(ms);
            }
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Quit) => break,
            Err(e) => println!("{}", e),
        }
    }

    info!("Console closed, exiting");
    std::process::exit(0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directional_taps() {
        let Ok(Command::Gesture(samples)) = parse_command("left") else {
            panic!("expected gesture");
        };
        assert_eq!(samples.len(), 2);
        assert!(samples[0].location.west);
        assert!(samples[1].tap);

        assert_eq!(
            parse_command(" d "),
            Ok(Command::Gesture(vec![GestureSample::double_tap()]))
        );
    }

    #[test]
    fn test_inbound() {
        assert_eq!(
            parse_command("dm @friend see you at 6"),
            Ok(Command::Inbound {
                from: "@friend".into(),
                text: "see you at 6".into()
            })
        );
        assert!(parse_command("dm @friend").is_err());
    }

    #[test]
    fn test_switches() {
        assert_eq!(parse_command("account off"), Ok(Command::Account(false)));
        assert_eq!(parse_command("fail on"), Ok(Command::Failing(true)));
        assert!(parse_command("fail maybe").is_err());
        assert_eq!(parse_command("latency 12000"), Ok(Command::Latency(12_000)));
        assert!(parse_command("latency soon").is_err());
    }

    #[test]
    fn test_unknown() {
        assert!(parse_command("jump").is_err());
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }
}
