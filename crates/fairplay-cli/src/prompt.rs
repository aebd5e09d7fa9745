//! Interactive move prompt.

use fairplay_core::{CommitAnnouncement, HumanMoveProvider, MoveSet, PlayerChoice, Result};
use std::io::{BufRead, Write};
use tracing::debug;

/// One line typed at the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuInput {
    Move(usize),
    Help,
    Exit,
}

fn parse_menu_input(line: &str, move_count: usize) -> Option<MenuInput> {
    let token = line.trim();
    if token == "?" {
        return Some(MenuInput::Help);
    }
    match token.parse::<usize>().ok()? {
        0 => Some(MenuInput::Exit),
        id if id <= move_count => Some(MenuInput::Move(id)),
        _ => None,
    }
}

/// Reads the human's move from a line-oriented stream.
///
/// Prints the commitment first, then the menu, and re-prompts until a valid
/// token arrives. `?` shows the help table. End of input counts as exit.
pub struct PromptPlayer<R, W> {
    input: R,
    output: W,
    help: String,
}

impl<R: BufRead, W: Write> PromptPlayer<R, W> {
    pub fn new(input: R, output: W, help: String) -> Self {
        Self {
            input,
            output,
            help,
        }
    }

    fn show_menu(&mut self, moves: &MoveSet) -> Result<()> {
        writeln!(self.output, "Available moves:")?;
        for m in moves.iter() {
            writeln!(self.output, "{} - {}", m.id(), m.name())?;
        }
        writeln!(self.output, "0 - exit")?;
        writeln!(self.output, "? - help")?;
        Ok(())
    }
}

impl<R: BufRead, W: Write> HumanMoveProvider for PromptPlayer<R, W> {
    fn choose_move(
        &mut self,
        announcement: &CommitAnnouncement,
        moves: &MoveSet,
    ) -> Result<PlayerChoice> {
        writeln!(self.output, "HMAC: {}", announcement.commitment)?;
        self.show_menu(moves)?;

        loop {
            write!(self.output, "Enter your move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("input closed at prompt");
                return Ok(PlayerChoice::Quit);
            }

            match parse_menu_input(&line, moves.len()) {
                Some(MenuInput::Move(id)) => return Ok(PlayerChoice::Move(id)),
                Some(MenuInput::Exit) => return Ok(PlayerChoice::Quit),
                Some(MenuInput::Help) => {
                    writeln!(self.output, "{}", self.help)?;
                    self.show_menu(moves)?;
                }
                None => debug!(input = line.trim(), "rejected menu input"),
            }
        }
    }
}
