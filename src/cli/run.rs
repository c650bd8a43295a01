use clap::Parser;
use log::{debug, info};
use std::io::{self, Write};

use crate::cli::{
    self,
    command::{Cli, Command, parse_menu_choice},
};
use crate::errors::AppError;
use crate::store::ContactStore;
use crate::validation::validate_name;

/// The shell event loop: prompt, invoke one store operation, render the
/// result as a line of text. The store lives here and dies with the process.
pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut phonebook = ContactStore::new();

    info!("phonebook started; contacts live in memory only");

    loop {
        if !cli.no_menu {
            cli::show_menu();
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(choice) = cli::get_input()? else {
            break;
        };

        let command = match parse_menu_choice(&choice) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        debug!("dispatching menu choice {:?}", command);

        match command {
            Command::Insert => {
                let Some(name) = cli::prompt("Enter name:")? else {
                    break;
                };

                if !validate_name(&name) {
                    println!("Name cannot be empty.");
                    continue;
                }

                let Some(phone) = cli::prompt("Enter phone number:")? else {
                    break;
                };

                if let Err(e) = phonebook.insert(name.clone(), phone) {
                    println!("{}", e);
                    continue;
                }
                println!("Contact added: {}", name);
            }

            Command::Search => {
                let Some(name) = cli::prompt("Enter name to search:")? else {
                    break;
                };

                match phonebook.find_by_name(&name) {
                    Some(contact) => {
                        println!("Contact found: {}", cli::display_contact(contact))
                    }
                    None => println!("Contact not found."),
                }
            }

            Command::DisplayAll => {
                if phonebook.is_empty() {
                    println!("Phonebook is empty.");
                    continue;
                }

                for contact in phonebook.iter() {
                    println!("{}: {}", contact.name, contact.phone);
                }
            }

            Command::Delete => {
                let Some(name) = cli::prompt("Enter name to delete:")? else {
                    break;
                };

                match phonebook.delete_by_name(&name) {
                    Ok(removed) => println!("Contact deleted: {}", removed.name),
                    Err(AppError::NotFound(_)) => println!("Contact not found."),
                    Err(e) => return Err(e),
                }
            }

            Command::Update => {
                let Some(name) = cli::prompt("Enter name to update:")? else {
                    break;
                };

                // The new number is only requested after a successful lookup.
                if phonebook.find_by_name(&name).is_none() {
                    println!("Contact not found.");
                    continue;
                }

                let Some(phone) = cli::prompt("Enter new phone number:")? else {
                    break;
                };

                match phonebook.update_phone_by_name(&name, phone) {
                    Ok(()) => println!("Contact updated: {}", name),
                    Err(AppError::NotFound(_)) => println!("Contact not found."),
                    Err(e) => return Err(e),
                }
            }

            Command::Sort => {
                phonebook.sort_by_name();
                println!("Contacts sorted.");
            }

            Command::Analyze => {
                // Descriptive only; the linear scan is the documented behavior.
                println!("Search Time Complexity: O(n)");
            }

            Command::Exit => {
                println!("\nBye!");
                break;
            }
        }
    }

    info!("phonebook exiting; nothing to flush");
    Ok(())
}
