use std::io::{self, BufRead, Write};

use minigames_common::games::tictactoe::{Position, TicTacToeWidget};
use minigames_common::log;

const HELP: &str = "enter a cell as \"x y\" (column then row), \"help\" or \"quit\"";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Click(Position),
    Help,
    Quit,
    Invalid(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line {
        "q" | "quit" | "exit" => return Command::Quit,
        "h" | "help" | "?" => return Command::Help,
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|part| !part.is_empty())
        .collect();
    match parts.as_slice() {
        [x, y] => match (x.parse::<usize>(), y.parse::<usize>()) {
            (Ok(x), Ok(y)) => Command::Click(Position::new(x, y)),
            _ => Command::Invalid(line.to_string()),
        },
        _ => Command::Invalid(line.to_string()),
    }
}

/// Plays one widget from a line-based input until quit or end of input.
/// The widget is repainted whenever the engine asked for a redraw; otherwise
/// only the latest status line is echoed.
pub fn run_tictactoe_game<R: BufRead, W: Write>(
    widget: &mut TicTacToeWidget,
    input: R,
    out: &mut W,
) -> io::Result<()> {
    writeln!(out, "{}", HELP)?;
    write_view(widget, out)?;

    for line in input.lines() {
        let line = line?;
        match parse_command(&line) {
            Command::Quit => break,
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Invalid(text) => {
                log!("unparsed input {:?}", text);
                writeln!(out, "could not read {:?}, {}", text, HELP)?;
            }
            Command::Click(pos) => {
                widget.click(pos);
                write_view(widget, out)?;
            }
        }
    }

    out.flush()
}

fn write_view<W: Write>(widget: &TicTacToeWidget, out: &mut W) -> io::Result<()> {
    if widget.take_redraw() {
        write!(out, "{}", widget.render())
    } else {
        writeln!(out, "{}", widget.ui().message_box())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minigames_common::games::SessionRng;
    use minigames_common::games::tictactoe::{Mark, TicTacToeOptions};

    fn widget(bot_go_first: bool) -> TicTacToeWidget {
        let options = TicTacToeOptions {
            bot_go_first,
            ..TicTacToeOptions::default()
        };
        TicTacToeWidget::new(options, SessionRng::new(8)).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("1 2"), Command::Click(Position::new(1, 2)));
        assert_eq!(parse_command(" 0,2 "), Command::Click(Position::new(0, 2)));
        assert_eq!(parse_command("2:1"), Command::Click(Position::new(2, 1)));
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("a b"), Command::Invalid("a b".to_string()));
        assert_eq!(parse_command("1"), Command::Invalid("1".to_string()));
        assert_eq!(parse_command("-1 0"), Command::Invalid("-1 0".to_string()));
    }

    #[test]
    fn test_run_plays_clicks_until_quit() {
        let mut widget = widget(false);
        let mut out = Vec::new();
        run_tictactoe_game(&mut widget, "1 1\nquit\n2 2\n".as_bytes(), &mut out).unwrap();

        assert_eq!(widget.game().board().mark_at(Position::new(1, 1)), Mark::PlayerOne);
        assert_eq!(widget.game().board().available_moves().len(), 7);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(">> You played cell 1:1"));
        assert!(text.contains(">> the bot played cell"));
    }

    #[test]
    fn test_run_reports_bad_input_and_occupied_cells() {
        let mut widget = widget(false);
        let mut out = Vec::new();
        run_tictactoe_game(&mut widget, "hello\n0 0\n0 0\n".as_bytes(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("could not read \"hello\""));
        assert!(text.contains("!!! You played occupied cell 0:0, please play another."));
    }
}
