/*
 * Copyright (c) Peter Bjorklund. All rights reserved. https://github.com/nimble-rust/workspace
 * Licensed under the MIT License. See LICENSE in the project root for license information.
 */
mod settings;

use crate::settings::Storage;
use anyhow::{self, Context};
use easy_repl::{command, CommandStatus, Repl};
use err_rs::{ErrorLevel, ErrorLevelProvider};
use log::{error, info};
use parkade_lot::prelude::*;
use std::cell::RefCell;

type Lot = SpotAllocator<Box<dyn LotStore>>;

fn describe(result: &Result<Assignment, LotError>) -> String {
    match result {
        Ok(assignment) => format!("level: {}, spot: {}", assignment.level, assignment.spot),
        Err(err) => format!("error: {err}"),
    }
}

fn report(result: Result<Assignment, LotError>) {
    if let Err(err) = &result {
        if err.error_level() == ErrorLevel::Critical {
            error!("{err}");
        }
    }
    println!("{}", describe(&result));
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let storage = Storage::from_args(std::env::args().skip(1))?;
    info!("using storage {storage:?}");

    let shared_lot = RefCell::new(Lot::new(storage.open()));
    let lot = &shared_lot;

    let mut repl = Repl::builder()
        .add(
            "park",
            command! {
                "Park a vehicle",
                (vehicle: String) => |vehicle: String| {
                    report(lot.borrow_mut().assign(&vehicle));
                    Ok(CommandStatus::Done)
                }
            },
        )
        .add(
            "find",
            command! {
                "Find a vehicle",
                (vehicle: String) => |vehicle: String| {
                    report(lot.borrow().lookup(&vehicle));
                    Ok(CommandStatus::Done)
                }
            },
        )
        .add(
            "status",
            command! {
                "Show free spots and parked vehicles",
                () => || {
                    let lot = lot.borrow();
                    println!(
                        "free spots: {}/{}, parked vehicles: {}",
                        lot.available_count(),
                        lot.capacity(),
                        lot.parked_count()
                    );
                    Ok(CommandStatus::Done)
                }
            },
        )
        .add(
            "exit",
            command! {
                "Exit",
                () => || {
                    println!("Exiting...");
                    Ok(CommandStatus::Quit)
                }
            },
        )
        .build()
        .context("Failed to create repl")?;

    repl.run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn describes_assignments_and_errors() {
        let mut lot = SpotAllocator::in_memory();
        assert_eq!(describe(&lot.assign("car1")), "level: A, spot: 1");
        assert_eq!(
            describe(&lot.assign("car1")),
            "error: vehicle 'car1' is already parked"
        );
        assert_eq!(
            describe(&lot.lookup("car2")),
            "error: vehicle 'car2' not found in parking"
        );
    }
}
