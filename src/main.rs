use anyhow::Result;
use clap::{App as ClapApp, Arg};
use keybind_reference::{app::App, config::Config, logger, ui::Theme};
use log::LevelFilter;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let theme_help = format!("Color theme ({})", Theme::available_themes().join(", "));
    let matches = ClapApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory containing config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("hyprland-config")
                .long("hyprland-config")
                .value_name("FILE")
                .help("Hyprland configuration to extract bindings from")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("theme")
                .short("t")
                .long("theme")
                .value_name("NAME")
                .help(&theme_help)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .help("Log debug messages and print the log on exit"),
        )
        .get_matches();

    let verbose = matches.is_present("verbose");
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log = logger::init(level)?;

    let mut config = Config::load(matches.value_of("config"))?;
    if let Some(path) = matches.value_of("hyprland-config") {
        config.hyprland_config = Some(PathBuf::from(path));
    }
    if let Some(theme) = matches.value_of("theme") {
        config.theme_name = theme.to_string();
    }

    let result = App::start(config, log.clone());

    if verbose {
        for entry in log.entries() {
            eprintln!("{}", entry);
        }
    }

    result
}
