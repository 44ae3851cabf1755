mod commands;
mod paths;
mod render;

use std::fs;
use std::fs::File;
use std::io;

use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};
use tokio::io::{AsyncBufReadExt, BufReader};

use artworks_lib::config::CatalogConfig;
use artworks_lib::error::Error;
use artworks_lib::pagination::Completion;
use artworks_lib::view::{CatalogView, Session, ViewEvent};
use artworks_lib::CatalogClient;

use commands::Command;

#[derive(Debug, thiserror::Error)]
enum ShellError {
    #[error(transparent)]
    Catalog(#[from] Error),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// Start logging into the cache directory. Without one, nothing is logged.
fn init_logging() {
    paths::rotate_logs();
    let Some(path) = paths::log_file() else { return };

    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match File::create(&path) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled, cannot create {}: {}", path.display(), e),
    }
}

fn open_session() -> Result<Session<CatalogClient>, Error> {
    let config = CatalogConfig::from_env()?;
    info!("catalog endpoint {}", config.endpoint);

    let client = CatalogClient::from_config(&config)?;
    let view = CatalogView::new(config.default_page_size)?;
    Ok(Session::new(client, view))
}

fn redraw(session: &Session<CatalogClient>) {
    let view = session.view();
    print!("\n{}", render::table(&view.table_props()));
    print!("{}", render::summary(&view.selection_summary()));
}

async fn run() -> Result<(), ShellError> {
    let mut session = open_session()?;
    println!("{}", commands::HELP);

    session.dispatch(ViewEvent::Mount).map_err(Error::from)?;
    redraw(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some((_, completion)) = session.next_completion() => {
                if completion != Completion::Stale {
                    redraw(&session);
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                let command = match commands::parse(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                match command {
                    Command::Quit => break,
                    Command::Help => {
                        println!("{}", commands::HELP);
                        continue;
                    }
                    _ => {}
                }

                let event = match command.to_event(&session.view().table_props()) {
                    Ok(Some(event)) => event,
                    Ok(None) => continue,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };

                match session.dispatch(event) {
                    Ok(_) => redraw(&session),
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    info!(
        "exiting with {} artworks selected",
        session.view().selection().count()
    );
    Ok(())
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    init_logging();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
