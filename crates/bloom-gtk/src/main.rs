use anyhow::Context as _;
use bloom_gtk::config;
use bloom_gtk::gui::app::{AppInit, AppModel};
use bloom_gtk::sys::runtime;
use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bloom", version, about, long_about = None)]
struct Cli {
    /// Config file to load and watch (defaults to the XDG config directory)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Write the sample config to the config path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if cli.write_default_config {
        config::write_default_config(&config_path)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path.clone(), tx);

    // GTK would reject our own flags, so it gets no arguments.
    let app = RelmApp::new("org.bloom.demo").with_args(Vec::new());

    app.run::<AppModel>(AppInit {
        config_path,
        config,
        rx,
    });
    Ok(())
}
