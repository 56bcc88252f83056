//! ## Printing Module
//!
//! Terminal logging helpers for the simulation. Every function is gated by
//! a boolean in [`config`] so individual categories can be silenced from
//! the command line, and each category gets its own color so interleaved
//! output stays readable.

use ansi_term::Colour::{self, Cyan, Green, Purple, Red, White, Yellow};
use unicode_width::UnicodeWidthStr;

use crate::config;
use crate::sim_state::{CarBehaviour, SimulationState};

/// Prints an error message in red.
///
/// Gated by [`config::PRINT_ERR_ON`].
///
/// ## Terminal output
/// - "\[ERROR\]:   {msg}"
pub fn err(msg: String) {
    let print_stat = *config::PRINT_ERR_ON.lock().unwrap();
    if print_stat {
        println!("{}{}", Red.paint("[ERROR]:   "), Red.paint(msg));
    }
}

/// Prints a warning message in yellow.
///
/// Gated by [`config::PRINT_WARN_ON`].
///
/// ## Terminal output
/// - "\[WARNING\]: {msg}"
pub fn warn(msg: String) {
    let print_stat = *config::PRINT_WARN_ON.lock().unwrap();
    if print_stat {
        println!("{}{}", Yellow.paint("[WARNING]: "), Yellow.paint(msg));
    }
}

/// Prints a success message in green.
///
/// Gated by [`config::PRINT_OK_ON`].
///
/// ## Terminal output
/// - "\[OK\]:      {msg}"
pub fn ok(msg: String) {
    let print_stat = *config::PRINT_OK_ON.lock().unwrap();
    if print_stat {
        println!("{}{}", Green.paint("[OK]:      "), Green.paint(msg));
    }
}

/// Prints an informational message in cyan.
///
/// Gated by [`config::PRINT_INFO_ON`].
///
/// ## Terminal output
/// - "\[INFO\]:    {msg}"
pub fn info(msg: String) {
    let print_stat = *config::PRINT_INFO_ON.lock().unwrap();
    if print_stat {
        println!("{}{}", Cyan.paint("[INFO]:    "), Cyan.paint(msg));
    }
}

/// Prints a message in a caller-chosen color.
///
/// Gated by [`config::PRINT_ELSE_ON`].
pub fn color(msg: String, color: Colour) {
    let print_stat = *config::PRINT_ELSE_ON.lock().unwrap();
    if print_stat {
        println!("{}{}", color.paint("[CUSTOM]:  "), color.paint(msg));
    }
}

/// Draws the fleet status box: one row per car plus an occupancy and queue
/// summary line.
///
/// Gated by [`config::PRINT_FLEET_ON`]. Intended for human monitoring; the
/// renderer calls it after every settled arrival.
pub fn fleet(state: &SimulationState) {
    let print_stat = *config::PRINT_FLEET_ON.lock().unwrap();
    if !print_stat {
        return;
    }

    println!("┌──────┬───────┬────────┬─────────────┐");
    println!(
        "{}",
        White.bold().paint("│ Car  │ Floor │ Target │ State       │")
    );
    println!("├──────┼───────┼────────┼─────────────┤");

    for car in &state.cars {
        let target = match car.target_floor {
            Some(floor) => floor.to_string(),
            None => "-".to_string(),
        };
        let behaviour_text = pad_text(behaviour_label(car.behaviour), 11);
        let behaviour_cell = behaviour_color(car.behaviour).paint(behaviour_text);
        println!(
            "│ {} │ {} │ {} │ {} │",
            pad_text(&car.id.to_string(), 4),
            pad_text(&car.current_floor.to_string(), 5),
            pad_text(&target, 6),
            behaviour_cell
        );
    }

    println!("└──────┴───────┴────────┴─────────────┘");

    let occupied: Vec<String> = state
        .occupancy
        .iter()
        .enumerate()
        .filter(|(_, &occupied)| occupied)
        .map(|(floor, _)| floor.to_string())
        .collect();
    let occupied = if occupied.is_empty() {
        "none".to_string()
    } else {
        occupied.join(", ")
    };
    println!(
        "  occupied floors: {}   queued presses: {}\n",
        occupied,
        state.queue.len()
    );
}

fn behaviour_label(behaviour: CarBehaviour) -> &'static str {
    match behaviour {
        CarBehaviour::Idle => "Idle",
        CarBehaviour::Traveling => "Traveling",
        CarBehaviour::DoorOpening => "DoorOpening",
        CarBehaviour::DoorClosing => "DoorClosing",
    }
}

fn behaviour_color(behaviour: CarBehaviour) -> Colour {
    match behaviour {
        CarBehaviour::Idle => Green,
        CarBehaviour::Traveling => Yellow,
        CarBehaviour::DoorOpening | CarBehaviour::DoorClosing => Purple,
    }
}

/// Pads `text` with spaces up to `width` terminal columns.
fn pad_text(text: &str, width: usize) -> String {
    let visible = UnicodeWidthStr::width(text);
    if visible >= width {
        text.to_string()
    } else {
        format!("{}{}", text, " ".repeat(width - visible))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pad_text_fills_to_terminal_width() {
        assert_eq!(pad_text("ab", 4), "ab  ");
        assert_eq!(pad_text("abcd", 4), "abcd");
        assert_eq!(pad_text("abcde", 4), "abcde");
    }
}
