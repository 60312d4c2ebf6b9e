#![windows_subsystem = "windows"]

use std::{error::Error, path::PathBuf, process, str::FromStr};

use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use safemed_gui::{
    app::{config::ConfigError, App, Config},
    dir::SafeMedDirectory,
    logger::setup_logger,
    VERSION,
};

#[derive(Debug, PartialEq, Eq)]
enum Arg {
    DatadirPath(SafeMedDirectory),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: safemed-gui [OPTIONS]

Options:
    --datadir <PATH>    Path of safemed datadir
    -v, --version       Display safemed-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate().skip(1) {
        if arg == "--datadir" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::DatadirPath(SafeMedDirectory::new(PathBuf::from(a))));
            } else {
                return Err("missing arg to --datadir".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown option '{}'", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let datadir = match args.as_slice() {
        [] => SafeMedDirectory::new_default()?,
        [Arg::DatadirPath(datadir)] => datadir.clone(),
        _ => {
            return Err("Unknown args combination".into());
        }
    };
    if !datadir.exists() {
        datadir.init()?;
    }

    let config = match Config::from_file(&datadir.gui_config_path()) {
        Ok(config) => config,
        Err(ConfigError::NotFound) => Config::default(),
        Err(e) => return Err(e.into()),
    };

    let log_level = if let Ok(l) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&l)?
    } else {
        config.log_level()?
    };
    setup_logger(log_level, &datadir)?;

    setup_panic_hook();

    let settings = Settings {
        id: Some("SafeMed".to_string()),
        antialiasing: false,
        ..Settings::default()
    };

    // A phone-shaped window.
    let window_settings = iced::window::Settings {
        size: Size {
            width: 420.0,
            height: 860.0,
        },
        min_size: Some(Size {
            width: 360.0,
            height: 640.0,
        }),
        position: iced::window::Position::Default,
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or("'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["safemed-gui".into(), "--meth".into()]).is_err());
        assert!(parse_args(vec!["safemed-gui".into(), "--datadir".into()]).is_err());
        assert_eq!(
            Some(vec![Arg::DatadirPath(SafeMedDirectory::new(
                PathBuf::from("/home/jane/.safemed")
            ))]),
            parse_args(vec![
                "safemed-gui".into(),
                "--datadir".into(),
                "/home/jane/.safemed".into()
            ])
            .ok()
        );
        assert_eq!(Some(vec![]), parse_args(vec!["safemed-gui".into()]).ok());
    }
}
