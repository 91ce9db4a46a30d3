mod cli;
mod logging;
mod paths;
pub mod tui;

use anyhow::Result;
use clap::Parser; // needed for Cli::parse()
use std::io::{stdin, stdout};
use tracing::info;

use cli::opts::{Cli, Command};
use tui::app::TuiApp;

fn main() -> Result<()> {
    let args = Cli::parse();
    let session = args.session();

    match args.cmd.clone().unwrap_or(Command::Tui) {
        Command::Tui => {
            let log_file = args.log_file.clone().unwrap_or_else(paths::default_log_file);
            logging::init_file(&log_file)?;
            info!(seed = ?args.seed, "starting tui");
            let mut app = TuiApp::new(session);
            app.run()
        }
        Command::Console(c) => {
            match &args.log_file {
                Some(path) => logging::init_file(path)?,
                None => logging::init_stderr(),
            }
            info!(seed = ?args.seed, json = c.json, "starting console");
            let mut session = session;
            cli::console::run(&mut session, stdin().lock(), &mut stdout().lock(), c.json)
        }
    }
}
