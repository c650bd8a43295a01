use clap::Parser;

use crate::errors::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "phonebook",
    version,
    about = "Interactive phonebook over an in-memory contact store"
)]
pub struct Cli {
    /// Suppress the menu before each prompt (useful when piping choices)
    #[arg(long, env = "PHONEBOOK_NO_MENU")]
    pub no_menu: bool,
}

/// Menu actions, one per numbered choice on the main menu.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Insert,
    Search,
    DisplayAll,
    Delete,
    Update,
    Sort,
    Analyze,
    Exit,
}

pub fn parse_menu_choice(choice: &str) -> Result<Command, AppError> {
    match choice {
        "1" => Ok(Command::Insert),
        "2" => Ok(Command::Search),
        "3" => Ok(Command::DisplayAll),
        "4" => Ok(Command::Delete),
        "5" => Ok(Command::Update),
        "6" => Ok(Command::Sort),
        "7" => Ok(Command::Analyze),
        "8" => Ok(Command::Exit),
        _ => Err(AppError::ParseCommand(choice.to_string())),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn every_menu_number_parses() {
        assert_eq!(parse_menu_choice("1").unwrap(), Command::Insert);
        assert_eq!(parse_menu_choice("2").unwrap(), Command::Search);
        assert_eq!(parse_menu_choice("3").unwrap(), Command::DisplayAll);
        assert_eq!(parse_menu_choice("4").unwrap(), Command::Delete);
        assert_eq!(parse_menu_choice("5").unwrap(), Command::Update);
        assert_eq!(parse_menu_choice("6").unwrap(), Command::Sort);
        assert_eq!(parse_menu_choice("7").unwrap(), Command::Analyze);
        assert_eq!(parse_menu_choice("8").unwrap(), Command::Exit);
    }

    #[test]
    fn anything_else_is_a_parse_error() {
        assert!(matches!(
            parse_menu_choice("9"),
            Err(AppError::ParseCommand(_))
        ));
        assert!(matches!(
            parse_menu_choice("insert"),
            Err(AppError::ParseCommand(_))
        ));
        assert!(matches!(
            parse_menu_choice(""),
            Err(AppError::ParseCommand(_))
        ));
    }
}
