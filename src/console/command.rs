use crate::chess::core::Square;
use crate::error::Result;

#[derive(Debug, PartialEq, Eq)]
pub(super) enum Command {
    Help,
    Start,
    Move { from: Square, to: Square },
    Status,
    Save,
    End,
    Quit,
    Unknown(String),
}

impl Command {
    /// Parses a single input line. Words are case-sensitive and separated by
    /// any whitespace.
    ///
    /// # Errors
    ///
    /// Fails only if a `move` names squares outside of the board.
    pub(super) fn parse(input: &str) -> Result<Self> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        Ok(match parts.as_slice() {
            ["help"] => Self::Help,
            ["start"] => Self::Start,
            ["move", from, to] => Self::Move {
                from: from.parse()?,
                to: to.parse()?,
            },
            ["status"] => Self::Status,
            ["save"] => Self::Save,
            ["end"] => Self::End,
            ["quit"] => Self::Quit,
            _ => Self::Unknown(input.trim().to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::Error;

    #[test]
    fn parse_simple() {
        assert_eq!(Command::parse("help"), Ok(Command::Help));
        assert_eq!(Command::parse("start\n"), Ok(Command::Start));
        assert_eq!(Command::parse("  status "), Ok(Command::Status));
        assert_eq!(Command::parse("save"), Ok(Command::Save));
        assert_eq!(Command::parse("end"), Ok(Command::End));
        assert_eq!(Command::parse("quit\r\n"), Ok(Command::Quit));
    }

    #[test]
    fn parse_move() {
        assert_eq!(
            Command::parse("move e2 e4\n"),
            Ok(Command::Move {
                from: Square::try_from("e2").unwrap(),
                to: Square::try_from("e4").unwrap(),
            })
        );
        assert_eq!(
            Command::parse("move   g8\tf6"),
            Ok(Command::Move {
                from: Square::try_from("g8").unwrap(),
                to: Square::try_from("f6").unwrap(),
            })
        );
    }

    #[test]
    fn parse_move_outside_board() {
        assert_eq!(
            Command::parse("move e2 e9"),
            Err(Error::InvalidCoordinate(
                "rank should be within '1'..='8', got '9'".to_string()
            ))
        );
        assert!(matches!(
            Command::parse("move z2 e4"),
            Err(Error::InvalidCoordinate(_))
        ));
    }

    #[test]
    fn unknown() {
        assert_eq!(
            Command::parse("move e2"),
            Ok(Command::Unknown("move e2".to_string()))
        );
        assert_eq!(
            Command::parse("start now"),
            Ok(Command::Unknown("start now".to_string()))
        );
        assert_eq!(
            Command::parse("resign\n"),
            Ok(Command::Unknown("resign".to_string()))
        );
        assert_eq!(Command::parse(""), Ok(Command::Unknown(String::new())));
    }
}
