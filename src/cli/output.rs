//! Output formatting and progress bars for CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::tictactoe::{Board, Cell};

/// Render the board with row and column indices for console play.
///
/// Empty cells are shown blank so the grid reads like a paper game.
pub fn render_board(board: &Board) -> String {
    let mut out = String::from("   0   1   2\n");
    for row in 0..3 {
        out.push_str(&format!("{row}  "));
        for col in 0..3 {
            let symbol = match board.cell(row, col) {
                Cell::Empty => ' ',
                occupied => occupied.to_char(),
            };
            out.push(symbol);
            if col < 2 {
                out.push_str(" | ");
            }
        }
        out.push('\n');
        if row < 2 {
            out.push_str("  -----------\n");
        }
    }
    out
}

/// Create a progress bar for a simulation run
pub fn create_game_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:20} {}", format!("{}:", key), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board() {
        let board: Board = "X.O .X. ...".parse().unwrap();
        let rendered = render_board(&board);

        assert!(rendered.starts_with("   0   1   2\n"));
        assert!(rendered.contains("0  X |   | O"));
        assert!(rendered.contains("1    | X |  "));
        assert!(rendered.contains("  -----------"));
    }
}
