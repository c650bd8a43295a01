pub mod command;
pub mod run;

pub use self::run::run_app;

use crate::domain::Contact;
use crate::errors::AppError;
use std::io::{self, Write};

// OUTPUT FUNCTIONS
pub fn show_menu() {
    println!();
    println!("1. Insert Contact");
    println!("2. Search Contact");
    println!("3. Display All Contacts");
    println!("4. Delete Contact");
    println!("5. Update Contact");
    println!("6. Sort Contacts");
    println!("7. Analyze Search Efficiency");
    println!("8. Exit");
}

pub fn prompt(text: &str) -> Result<Option<String>, AppError> {
    println!("{}", text);
    print!("> ");
    io::stdout().flush()?;
    get_input()
}

pub fn display_contact(contact: &Contact) -> String {
    format!("Name = {}, Phone Number = {}", contact.name, contact.phone)
}

// INPUT FUNCTIONS
/// Reads one trimmed line from stdin. `Ok(None)` means the input stream
/// has ended, which the shell treats like the Exit action.
pub fn get_input() -> Result<Option<String>, AppError> {
    let mut input = String::new();
    let bytes = io::stdin().read_line(&mut input)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim().to_string()))
}
