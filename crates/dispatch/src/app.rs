use std::io::Write;

use dispatch_core::{
    command::{Command, Io},
    execute, try_execute, Receiver,
};
use dispatch_receivers::{car_manager, tesla_sales};
use itertools::Itertools;
use log::debug;

use crate::{error::AppResult, opts::Opts};

/// Runs the application for a set of parsed options.
pub(crate) fn run(opts: Opts, io: &mut Io) -> AppResult<()> {
    if opts.demo {
        return run_demo(io);
    }

    let receiver = opts.receiver.receiver();
    if opts.list {
        return list_actions(&receiver, io);
    }

    let command = opts.command();
    debug!("using receiver {:?} for {}", receiver, command.action);

    let result = match opts.strict {
        true => Some(try_execute(&receiver, &command)?),
        false => execute(&receiver, &command),
    };
    io.print_result(result.as_deref())?;
    Ok(())
}

/// Prints the receiver's actions as a single comma-separated line.
fn list_actions(receiver: &Receiver, io: &mut Io) -> AppResult<()> {
    writeln!(io.stdout, "{}", receiver.actions().iter().join(", "))?;
    Ok(())
}

/// Runs the scripted demonstration of both invocation styles.
fn run_demo(io: &mut Io) -> AppResult<()> {
    // Dispatcher attached to the receiver.
    let manager = car_manager();
    io.print_result(
        manager
            .execute("arrangeViewing", ["Ferrari", "14523"])
            .as_deref(),
    )?;

    // Free dispatcher with command records.
    let sales = tesla_sales();
    for command in [
        Command::new("requestInfo", ["Ferrari", "14523"]),
        Command::new("buyVehicle", ["TOYOTA", "2213"]),
    ] {
        io.print_result(execute(&sales, &command).as_deref())?;
    }

    Ok(())
}
