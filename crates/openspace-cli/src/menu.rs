//! Interactive terminal menu over the seating core.
//!
//! Thin adapter: reads choices from stdin, calls the core's mutation and
//! query operations, and prints their results. The core never prints.

use std::io::{self, BufRead, Write};
use std::path::Path;

use openspace_logic::Openspace;

use crate::files::{self, FileError};

/// Run the menu loop until the user exits or stdin closes.
pub fn run_menu(room: &mut Openspace, output: &Path) -> Result<(), FileError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        let Some(choice) = prompt(&mut lines, "Select an option: ")? else {
            break;
        };
        match choice.as_str() {
            "1" => print_room(room),
            "2" => print_counts(room),
            "3" => {
                let Some(name) = prompt(&mut lines, "Name of the new colleague: ")? else {
                    break;
                };
                if name.is_empty() {
                    println!("A name cannot be empty.");
                } else if room.assign_person(&name) {
                    println!("{name} has been seated.");
                } else if room.group_pending().iter().any(|pending| pending == &name) {
                    println!(
                        "{name} is waiting for company at an empty table \
                         (option 4 seats the pending group)."
                    );
                } else if room.is_person_seated(&name) {
                    println!("{name} is already seated.");
                } else {
                    println!("No seat available for {name}. Add a table first.");
                }
            }
            "4" => {
                if room.group_pending().is_empty() {
                    println!("Nobody is waiting for group seating.");
                } else {
                    room.seat_pending_group();
                    print_room(room);
                }
            }
            "5" => {
                let moves = room.eliminate_lonely_tables();
                if moves.is_empty() {
                    println!("Nobody could be moved.");
                } else {
                    for mv in &moves {
                        println!(
                            "{} was moved from table {} to table {}.",
                            mv.name, mv.from_table, mv.to_table
                        );
                    }
                    print_room(room);
                }
            }
            "6" => {
                let Some(raw) = prompt(&mut lines, "Seats at the new table: ")? else {
                    break;
                };
                match raw.parse::<usize>() {
                    Ok(capacity) if capacity >= 1 => {
                        room.add_table(capacity);
                        println!(
                            "Table {} with {capacity} seats added. \
                             No one has been assigned automatically.",
                            room.table_count()
                        );
                    }
                    _ => println!("Please enter a positive number."),
                }
            }
            "7" => {
                let Some(raw) = prompt(&mut lines, "Table number to remove: ")? else {
                    break;
                };
                match raw.parse::<usize>() {
                    Ok(index) => {
                        if room.remove_table(index) {
                            println!("Table {index} has been removed.");
                        } else {
                            println!(
                                "Table {index} could not be removed \
                                 (not empty or no such table)."
                            );
                        }
                    }
                    Err(_) => println!("Please enter a valid table number."),
                }
            }
            "8" => {
                let Some(name) = prompt(&mut lines, "Name to remove from the room: ")? else {
                    break;
                };
                if room.remove_person_from_room(&name) {
                    println!("{name} has been removed from the room.");
                } else {
                    println!("{name} was not found in the room.");
                }
            }
            "9" => {
                let Some(raw) = prompt(&mut lines, "Table number: ")? else {
                    break;
                };
                let Some(name) = prompt(&mut lines, "Name to remove: ")? else {
                    break;
                };
                match raw.parse::<usize>() {
                    Ok(index) => {
                        if room.remove_person_from_table(index, &name) {
                            println!("{name} has been removed from table {index}.");
                        } else {
                            println!("{name} was not found at table {index} (or no such table).");
                        }
                    }
                    Err(_) => println!("Please enter a valid table number."),
                }
            }
            "10" => {
                files::store_plan(room, output)?;
                println!("Seating plan saved to {}.", output.display());
            }
            "0" => break,
            other => println!("Unknown option: {other}"),
        }
    }
    Ok(())
}

fn print_menu() {
    println!();
    println!("OpenSpace Organizer");
    println!(" 1. Show current seating");
    println!(" 2. Show seat and people counts");
    println!(" 3. Add a colleague");
    println!(" 4. Seat the pending group");
    println!(" 5. Eliminate lonely tables");
    println!(" 6. Add a table");
    println!(" 7. Remove a table");
    println!(" 8. Remove a person from the room");
    println!(" 9. Remove a person from a table");
    println!("10. Save seating plan");
    println!(" 0. Exit");
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>, FileError> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_owned())),
        None => Ok(None),
    }
}

/// Print every table with its seats, flagging sole occupants, followed by
/// whoever is not seated.
pub fn print_room(room: &Openspace) {
    for (index, table) in room.tables().iter().enumerate() {
        println!("Table {}:", index + 1);
        for (seat_index, seat) in table.seats().iter().enumerate() {
            println!(
                "  Seat {}: {}",
                seat_index + 1,
                seat.occupant().unwrap_or(files::FREE_SENTINEL)
            );
        }
        if table.occupied_count() == 1 {
            if let Some(name) = table.occupants().next() {
                println!("  > {name} is sitting alone at this table.");
            }
        }
        println!();
    }

    let unseated = room.get_unseated_people();
    if !unseated.is_empty() {
        println!("Not currently seated:");
        for name in unseated {
            println!(" - {name}");
        }
    }
}

fn print_counts(room: &Openspace) {
    println!("Total seats: {}", room.total_capacity());
    println!("People in room: {}", room.total_people_in_room());
    println!("Free seats: {}", room.seats_left());
}

/// Summary printed right after a bulk organize.
pub fn print_organize_summary(room: &Openspace) {
    if room.sat_alone().is_empty() {
        println!(">>> No lonely persons detected.");
    } else {
        println!(">>> The following people had to sit alone (no other option):");
        for name in room.sat_alone() {
            println!(" - {name}");
        }
    }

    let free = room.seats_left();
    println!(
        ">>> {free} seat{} left in the room.",
        if free == 1 { "" } else { "s" }
    );

    if !room.unassigned().is_empty() {
        println!(">>> Could not assign the following people (no available seats):");
        for name in room.unassigned() {
            println!(" - {name}");
        }
    }
}
