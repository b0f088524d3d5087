//! Interactive menu shell.
//!
//! # Responsibility
//! - Drive the roster service through a numbered menu loop.
//! - Render records and collect operator field input.
//!
//! # Invariants
//! - Every menu action is followed by a save; exit saves once more, so the
//!   on-disk file stays a best-effort snapshot of the session.
//! - End of operator input exits the loop cleanly.

use crate::prompt::{self, PromptSource};
use log::{info, warn};
use staffbook_core::{format_wage, Employee, EmployeeFields, RosterService};
use std::io;

const MENU: [&str; 5] = [
    "1. View current employees",
    "2. Modify an employee",
    "3. Add a new employee",
    "4. Remove an employee",
    "5. Exit",
];

pub struct Shell<S: PromptSource> {
    service: RosterService,
    source: S,
}

impl<S: PromptSource> Shell<S> {
    pub fn new(service: RosterService, source: S) -> Self {
        Self { service, source }
    }

    /// Runs the menu loop until the operator exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu();
            let Some(selection) = prompt::ask_u32(&mut self.source, ">>> ")? else {
                break;
            };

            match selection {
                1 => self.view(),
                2 => self.modify()?,
                3 => self.add()?,
                4 => self.remove()?,
                5 => break,
                _ => {
                    println!("\nInput not valid. Please try again.");
                    continue;
                }
            }
            self.save_checked();
        }

        self.save_checked();
        info!("event=shell_exit module=shell status=ok");
        Ok(())
    }

    fn print_menu(&self) {
        println!("---------------------------------------");
        for entry in MENU {
            println!("{entry}");
        }
    }

    fn view(&self) {
        for employee in self.service.list() {
            print_employee(employee);
        }
    }

    fn modify(&mut self) -> io::Result<()> {
        self.view();
        loop {
            let Some(id) = prompt::ask_u32(&mut self.source, "Employee ID: ")? else {
                return Ok(());
            };
            let Some(current) = self.service.get(id).cloned() else {
                println!("Employee ID not valid. Please try again.");
                continue;
            };

            println!("------------------------------------");
            println!(
                "Press enter to keep current value. Any new input will be changed in the employees file."
            );

            let Some(first_name) = prompt::ask_text_with_default(
                &mut self.source,
                &format!("First Name ({}): ", current.first_name),
                &current.first_name,
            )?
            else {
                return Ok(());
            };
            let Some(last_name) = prompt::ask_text_with_default(
                &mut self.source,
                &format!("Last Name ({}): ", current.last_name),
                &current.last_name,
            )?
            else {
                return Ok(());
            };
            let Some(email) = prompt::ask_text_with_default(
                &mut self.source,
                &format!("Email ({}): ", current.email),
                &current.email,
            )?
            else {
                return Ok(());
            };
            let Some(hourly_wage) = prompt::ask_wage_with_default(
                &mut self.source,
                &format!("Hourly Wage ({}): ", format_wage(current.hourly_wage)),
                current.hourly_wage,
            )?
            else {
                return Ok(());
            };

            if let Err(err) = self.service.update(
                id,
                EmployeeFields {
                    first_name,
                    last_name,
                    email,
                    hourly_wage,
                },
            ) {
                warn!("event=shell_modify module=shell status=error id={id} error={err}");
                println!("{err}");
            }
            self.view();
            return Ok(());
        }
    }

    fn add(&mut self) -> io::Result<()> {
        let Some(first_name) = self.source.read_line("First Name: ")? else {
            return Ok(());
        };
        let Some(last_name) = self.source.read_line("Last Name: ")? else {
            return Ok(());
        };
        let Some(email) = self.source.read_line("Email: ")? else {
            return Ok(());
        };
        let Some(hourly_wage) = prompt::ask_wage(&mut self.source, "Hourly Wage: ")? else {
            return Ok(());
        };

        match self.service.add(EmployeeFields {
            first_name,
            last_name,
            email,
            hourly_wage,
        }) {
            Ok(_) => println!("\nNew employee has been added!"),
            Err(err) => {
                warn!("event=shell_add module=shell status=error error={err}");
                println!("{err}");
            }
        }
        Ok(())
    }

    fn remove(&mut self) -> io::Result<()> {
        println!("--------------------------------------------");
        self.view();
        loop {
            let Some(id) = prompt::ask_u32(&mut self.source, "\nEmployee ID: ")? else {
                return Ok(());
            };
            match self.service.remove(id) {
                Ok(()) => return Ok(()),
                Err(err) if err.is_not_found() => {
                    println!("Employee ID invalid. Please try again.");
                }
                Err(err) => {
                    warn!("event=shell_remove module=shell status=error id={id} error={err}");
                    println!("{err}");
                    return Ok(());
                }
            }
        }
    }

    fn save_checked(&mut self) {
        if let Err(err) = self.service.save() {
            warn!("event=shell_save module=shell status=error error={err}");
            eprintln!("warning: failed to save roster: {err}");
        }
    }
}

fn print_employee(employee: &Employee) {
    println!("\n--------------------------------");
    println!("ID: {}", employee.id);
    println!("Name: {}", employee.full_name());
    println!("Email: {}", employee.email);
    println!("Hourly Wage: ${:.2}", employee.hourly_wage);
}
