use circular_slider::config;
use circular_slider::gui::app::AppModel;
use circular_slider::sys::runtime;
use clap::Parser;
use relm4::prelude::*;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to load and watch (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default config if none exists, print its path and exit
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };

    if args.write_default_config {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);

    let (tx, rx) = async_channel::bounded(32);

    // Start Background Services
    runtime::start_background_services(config_path.clone(), tx);

    // GTK would reject our own flags, so it gets none
    let app = RelmApp::new("dev.circular_slider.Demo").with_args(Vec::new());

    app.run::<AppModel>((config, config_path, rx));
    Ok(())
}
