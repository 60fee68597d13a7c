use anyhow::Result;
use inquire::{InquireError, Text};
use wx_core::catalog;

#[derive(Debug, PartialEq, Eq)]
pub enum Entry {
    Quit,
    Valid(String),
    Invalid(String),
}

/// Classify one line of user input against the catalog.
pub fn interpret(raw: &str) -> Entry {
    let name = catalog::normalize_location(raw);
    if name == "quit" {
        Entry::Quit
    } else if catalog::find(&name).is_some() {
        Entry::Valid(name)
    } else {
        Entry::Invalid(name)
    }
}

pub fn location_list() -> String {
    catalog::names().collect::<Vec<_>>().join(", ")
}

/// Ask until a catalog name is entered. `None` means the user quit.
pub fn prompt_location() -> Result<Option<String>> {
    loop {
        let answer = match Text::new("Enter a location (or 'quit' to exit):").prompt() {
            Ok(answer) => answer,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => {
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };

        match interpret(&answer) {
            Entry::Quit => return Ok(None),
            Entry::Valid(name) => return Ok(Some(name)),
            Entry::Invalid(name) => {
                println!("{name} is not a valid location. Please choose from {}", location_list());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_is_case_insensitive() {
        assert_eq!(interpret("quit"), Entry::Quit);
        assert_eq!(interpret("  QUIT "), Entry::Quit);
    }

    #[test]
    fn known_names_are_normalized() {
        assert_eq!(interpret(" Phantom Ranch"), Entry::Valid("phantom ranch".into()));
    }

    #[test]
    fn unknown_names_are_reported_normalized() {
        assert_eq!(interpret("Moab "), Entry::Invalid("moab".into()));
        assert_eq!(interpret(""), Entry::Invalid(String::new()));
    }

    #[test]
    fn list_follows_catalog_order() {
        assert!(location_list().starts_with("death valley, castle valley, fishlake"));
    }
}
