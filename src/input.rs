//! Interactive floor-button input.
//!
//! Reading stdin blocks, so a dedicated thread parses lines and forwards
//! presses over a crossbeam channel; a small async task polls that channel
//! into the core's press channel. Lines look like:
//!
//! ```text
//! 3          press the call button on floor 3
//! 3 up       press the up button on floor 3
//! 3 down     press the down button on floor 3
//! ```

use std::io::BufRead;
use std::thread;

use crossbeam_channel as cbc;
use tokio::sync::mpsc;
use tokio::time::sleep;

use crate::config;
use crate::messaging::Press;
use crate::print;
use crate::sim_state::CallKind;

/// Spawns the blocking stdin reader thread.
///
/// The returned channel disconnects on end of input, which lets the bridge
/// and with it the whole simulation shut down.
pub fn spawn_stdin_reader() -> cbc::Receiver<Press> {
    let (press_tx, press_rx) = cbc::unbounded::<Press>();

    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(_) => break,
            };
            match parse_line(&line) {
                Some(press) => {
                    if press_tx.send(press).is_err() {
                        break;
                    }
                }
                None => {
                    if !line.trim().is_empty() {
                        print::warn(format!(
                            "Could not read '{}', expected '<floor> [call|up|down]'",
                            line.trim()
                        ));
                    }
                }
            }
        }
    });

    press_rx
}

/// Polls the stdin channel into the core until either side closes.
pub async fn bridge(stdin_rx: cbc::Receiver<Press>, press_tx: mpsc::Sender<Press>) {
    loop {
        match stdin_rx.try_recv() {
            Ok(press) => {
                if press_tx.send(press).await.is_err() {
                    break;
                }
            }
            Err(cbc::TryRecvError::Empty) => {
                sleep(config::INPUT_POLL_PERIOD).await;
            }
            Err(cbc::TryRecvError::Disconnected) => break,
        }
    }
}

fn parse_line(line: &str) -> Option<Press> {
    let mut words = line.trim().split_whitespace();
    let floor: u8 = words.next()?.parse().ok()?;
    let kind = match words.next() {
        Some(word) => word.parse::<CallKind>().ok()?,
        None => CallKind::Call,
    };
    if words.next().is_some() {
        return None;
    }
    Some(Press { floor, kind })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_floor_as_call_button() {
        let press = parse_line("3").unwrap();
        assert_eq!(press.floor, 3);
        assert_eq!(press.kind, CallKind::Call);
    }

    #[test]
    fn parses_floor_with_direction() {
        let press = parse_line("  7 down ").unwrap();
        assert_eq!(press.floor, 7);
        assert_eq!(press.kind, CallKind::Down);
    }

    #[test]
    fn rejects_garbage_lines() {
        assert!(parse_line("lobby").is_none());
        assert!(parse_line("3 sideways").is_none());
        assert!(parse_line("3 up now").is_none());
        assert!(parse_line("").is_none());
    }
}
