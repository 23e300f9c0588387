use std::io::{self, BufRead, Write};

use crossterm::{queue, style::Print};

use crate::model::Board;
use crate::renderer::Renderer;

const HELP_LINES: &[&str] = &[
    "help: Show this message",
    "u: Undo last action",
    "v: Add an empty vial",
];

/// Runs the interactive loop for one board until it is solved or the input
/// ends. Rendering and prompts go to `out`; commands come one per line from
/// `input`.
///
/// All selection state lives here. The board itself only ever sees whole
/// pour/add/undo operations; malformed commands and out-of-range indices are
/// absorbed with a message and never reach it.
pub fn play_board(
    board: &mut Board,
    renderer: &Renderer,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> io::Result<()> {
    let mut selected_vial: Option<usize> = None;
    let mut comment: Option<String> = None;

    loop {
        renderer.draw_board(out, board)?;

        if board.is_solved() {
            queue!(out, Print("Congratulations, you won!\n"))?;
            out.flush()?;
            return Ok(());
        }

        match selected_vial {
            None => {
                queue!(
                    out,
                    Print("Select a vial by typing the number to its left.\n"),
                    Print("Or, enter \"help\" for more commands.\n"),
                )?;
            }
            Some(index) => {
                queue!(
                    out,
                    Print(format!(
                        "Selected vial {}. Now, select a destination vial.\n",
                        index + 1
                    )),
                    Print("Or, enter \"c\" to cancel.\n"),
                )?;
            }
        }

        if let Some(text) = comment.take() {
            queue!(out, Print("\n"), Print(text), Print("\n"))?;
        }

        queue!(out, Print("> "))?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input: abandon this board.
            return Ok(());
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Vial numbers are displayed 1-based.
        if let Ok(number) = line.parse::<usize>() {
            let vial_index = match number.checked_sub(1) {
                Some(index) if index < board.get_num_vials() => index,
                _ => {
                    comment = Some("That vial does not exist".to_string());
                    continue;
                }
            };

            match selected_vial.take() {
                None => {
                    if board.is_vial_empty(vial_index) {
                        comment = Some("That vial is empty".to_string());
                    } else {
                        selected_vial = Some(vial_index);
                    }
                }
                Some(from_index) => {
                    // Picking the selected vial again just deselects it.
                    if from_index != vial_index {
                        board.pour(from_index, vial_index);
                    }
                }
            }
            continue;
        }

        match line.to_ascii_lowercase().as_str() {
            "c" => selected_vial = None,
            "v" => board.add_empty_vial(),
            "u" | "undo" => board.undo(),
            "help" => comment = Some(HELP_LINES.join("\n")),
            "xyzzy" => comment = Some("Nothing happens".to_string()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Vial;
    use std::io::Cursor;

    fn run(board: &mut Board, script: &str) -> String {
        let renderer = Renderer::with_width(80);
        let mut input = Cursor::new(script.to_string());
        let mut output = Vec::new();
        play_board(board, &renderer, &mut input, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    fn board(vial_size: usize, vials: &[&[u32]]) -> Board {
        Board::new(
            vial_size,
            vials.iter().map(|v| Vial::from_units(v.to_vec())).collect(),
        )
    }

    #[test]
    fn solved_board_wins_without_reading_input() {
        let mut b = board(2, &[&[1, 1], &[]]);
        let output = run(&mut b, "this input is never consumed");
        assert!(output.contains("Congratulations, you won!"));
    }

    #[test]
    fn pouring_to_completion_wins() {
        let mut b = board(2, &[&[1], &[1]]);
        let output = run(&mut b, "1\n2\n");
        assert!(output.contains("Congratulations, you won!"));
        assert!(b.is_solved());
        assert!(b.is_vial_empty(0));
    }

    #[test]
    fn out_of_range_and_non_numeric_input_is_rejected_with_feedback() {
        let mut b = board(2, &[&[1], &[2]]);
        let output = run(&mut b, "9\n0\nbogus\n");
        assert!(output.contains("That vial does not exist"));
        // Still unsolved and untouched.
        assert_eq!(b.get_vials()[0].get_units(), &[1]);
        assert_eq!(b.get_vials()[1].get_units(), &[2]);
    }

    #[test]
    fn selecting_an_empty_vial_is_rejected() {
        let mut b = board(2, &[&[], &[1]]);
        let output = run(&mut b, "1\n");
        assert!(output.contains("That vial is empty"));
    }

    #[test]
    fn selecting_the_same_vial_twice_deselects() {
        let mut b = board(2, &[&[1], &[1]]);
        let output = run(&mut b, "1\n1\n");
        assert!(!b.is_solved());
        assert!(output.contains("Selected vial 1."));
    }

    #[test]
    fn cancel_clears_the_selection() {
        let mut b = board(2, &[&[1], &[2]]);
        let output = run(&mut b, "1\nc\n");
        assert!(output.contains("Selected vial 1."));
        assert!(output.ends_with("> "));
        assert_eq!(b.get_vials()[0].get_units(), &[1]);
    }

    #[test]
    fn add_vial_and_undo_commands_reach_the_board() {
        let mut b = board(2, &[&[1], &[2]]);
        run(&mut b, "v\n");
        assert_eq!(b.get_num_vials(), 3);
        run(&mut b, "undo\n");
        assert_eq!(b.get_num_vials(), 2);
    }

    #[test]
    fn help_and_xyzzy_show_comments() {
        let mut b = board(2, &[&[1], &[2]]);
        let output = run(&mut b, "help\nxyzzy\n");
        assert!(output.contains("u: Undo last action"));
        assert!(output.contains("Nothing happens"));
    }
}
