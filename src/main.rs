use clap::Parser;
use tracing_subscriber::EnvFilter;

use cafe_ctrl_rs::cli::{Cli, Command};
use cafe_ctrl_rs::error::Result;
use cafe_ctrl_rs::interface::{ConsoleUi, Ui, prompt_yes_no};
use cafe_ctrl_rs::session::Session;
use cafe_ctrl_rs::settings::Settings;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_settings(cli: &Cli) -> Result<Settings> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    Ok(match &cli.data_dir {
        Some(dir) => settings.with_data_dir(dir),
        None => settings,
    })
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = load_settings(&cli)?;
    let command = cli.command.unwrap_or_default();
    let mut ui = ConsoleUi;

    let mut session = Session::open(&settings, &mut ui);

    if let Command::DeleteDish { index, yes: false } = &command {
        if let Ok(dish) = session.menu().dish_at(*index) {
            let prompt = format!("Delete {} from the menu?", dish.name());
            if !prompt_yes_no(&prompt, false)? {
                println!("Nothing deleted.");
                return Ok(());
            }
        }
    }

    if let Err(e) = session.handle(command.into(), &mut ui) {
        ui.show(&format!("Error: {}", e));
    }

    session.shutdown(&mut ui)
}
