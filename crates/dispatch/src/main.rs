mod app;
mod error;
mod opts;
mod status;
mod utils;

use clap::Parser;
use dispatch_core::command::Io;

use crate::opts::Opts;

/// Entrypoint for the application.
pub fn main() {
    env_logger::init();

    let opts = Opts::parse();
    let mut io = Io::std();

    let code = match app::run(opts, &mut io) {
        Ok(()) => status::SUCCESS,
        Err(error) => {
            utils::print_error(&mut io, &error);
            status::GENERAL_ERROR
        }
    };

    std::process::exit(code);
}
