use std::{error::Error, io::Write, path::PathBuf, process};

use iced::{Settings, Size};
use tracing::error;

use notification_ui::{component::text, font};

use notification_gui::{
    app::App,
    config::{Config, ConfigError, DEFAULT_FILE_NAME},
    logger, VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    ConfigPath(PathBuf),
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
Usage: notification-gui [OPTIONS]

Options:
    --config <PATH>     Path of the configuration file (default: ./{})
    -v, --version       Display notification-gui version
    -h, --help          Print help
        "#,
            DEFAULT_FILE_NAME
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--config" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ConfigPath(PathBuf::from(a)));
            } else {
                return Err("missing arg to --config".into());
            }
        } else if arg.starts_with("--") {
            return Err(format!("unknown option {}", arg).into());
        }
    }

    Ok(res)
}

fn load_config(args: &[Arg]) -> Result<Config, Box<dyn Error>> {
    let (path, explicit) = match args {
        [] => (PathBuf::from(DEFAULT_FILE_NAME), false),
        [Arg::ConfigPath(path)] => (path.clone(), true),
        _ => return Err("Unknown args combination".into()),
    };
    match Config::from_file(&path) {
        Ok(config) => Ok(config),
        // Without an explicit path, a missing file means defaults.
        Err(ConfigError::NotFound) if !explicit => Ok(Config::default()),
        Err(e) => Err(format!("{}: {}", path.display(), e).into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = load_config(&args)?;

    let log_level = match logger::parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    logger::setup_logger(log_level)?;
    setup_panic_hook();

    let settings = Settings {
        id: Some("notification-gui".to_string()),
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 800.0,
            height: 600.0,
        },
        min_size: Some(Size {
            width: 400.0,
            height: 300.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(config))
    {
        log::error!("{}", e);
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
            .unwrap_or_else(|| "'unknown'");
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

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["--meth".into()]).is_err());
        assert!(parse_args(vec!["--config".into()]).is_err());
        assert_eq!(
            Some(vec![]),
            parse_args(vec!["notification-gui".into()]).ok()
        );
        assert_eq!(
            Some(vec![Arg::ConfigPath(PathBuf::from("hello.toml"))]),
            parse_args(
                "notification-gui --config hello.toml"
                    .split(' ')
                    .map(|a| a.to_string())
                    .collect()
            )
            .ok()
        );
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_config(&[Arg::ConfigPath(missing)]).is_err());

        let path = dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "theme = \"light\"\n").unwrap();
        let config = load_config(&[Arg::ConfigPath(path)]).unwrap();
        assert_eq!(config.theme(), notification_ui::theme::Theme::light());
    }
}
