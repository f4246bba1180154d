use std::process::ExitCode;

use bytes_human::cmd::App;
use clap::Parser;
use console::style;

fn main() -> ExitCode {
    let app = App::parse();
    match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err:#}", style("error").red().bold());
            ExitCode::FAILURE
        }
    }
}
