#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, str::FromStr};

use iced::{Settings, Size};
use tracing::error;

use wallet_ui::{component::text, theme};

use wallet_gui::{
    app::{config::Config as AppConfig, wallet::Network, Error as AppError},
    dir::WalletDirectory,
    gui::{Config, GUI},
    logger::parse_log_level,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(WalletDirectory),
    Network(Network),
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
Usage: blockchain-wallet [OPTIONS]

Options:
    --datadir <PATH>    Path of the data directory
    -v, --version       Display blockchain-wallet version
    -h, --help          Print help
    --ethereum          Start on the Ethereum network
    --solana            Start on the Solana network
        "#
        );
        process::exit(1);
    }

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if arg == "--datadir" {
            match args.get(i + 1) {
                Some(a) if !a.starts_with("--") => {
                    res.push(Arg::DatadirPath(WalletDirectory::new(PathBuf::from(a))));
                    // The path is consumed with its flag.
                    i += 1;
                }
                _ => return Err("missing arg to --datadir".into()),
            }
        } else if arg.starts_with("--") {
            let network = Network::from_str(arg.trim_start_matches("--"))?;
            res.push(Arg::Network(network));
        }
        i += 1;
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let (datadir, network) = match args.as_slice() {
        [] => (WalletDirectory::new_default()?, None),
        [Arg::Network(network)] => (WalletDirectory::new_default()?, Some(*network)),
        [Arg::DatadirPath(datadir)] => (datadir.clone(), None),
        [Arg::DatadirPath(datadir), Arg::Network(network)]
        | [Arg::Network(network), Arg::DatadirPath(datadir)] => (datadir.clone(), Some(*network)),
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    if !datadir.exists() {
        datadir.init()?;
    }

    let app_config =
        AppConfig::load_or_default(&datadir.config_file()).map_err(AppError::from)?;
    let log_level = match parse_log_level()? {
        Some(level) => level,
        None => app_config.log_level().map_err(AppError::from)?,
    };
    let network = network.or(app_config.network).unwrap_or_default();

    setup_panic_hook();

    let settings = Settings {
        id: Some("BlockchainWallet".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: wallet_ui::font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        size: Size {
            width: 1200.0,
            height: 850.0,
        },
        position: iced::window::Position::Default,
        min_size: Some(Size {
            width: 800.0,
            height: 600.0,
        }),
        ..Default::default()
    };

    let config = Config::new(datadir, network, app_config.timings);
    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new((config, log_level)))
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

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        line.split(' ').map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_parse_args() {
        assert!(parse_args(vec!["--meth".into()]).is_err());
        assert!(parse_args(vec!["--datadir".into()]).is_err());
        assert!(parse_args(args("--datadir --solana")).is_err());
        assert!(parse_args(args("--solana --datadir --ethereum")).is_err());
        assert_eq!(
            Some(vec![Arg::Network(Network::Solana)]),
            parse_args(vec!["--solana".into()]).ok()
        );
        assert_eq!(
            Some(vec![Arg::DatadirPath(WalletDirectory::new(PathBuf::from(
                "hello"
            )))]),
            parse_args(args("--datadir hello")).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(WalletDirectory::new(PathBuf::from("hello"))),
                Arg::Network(Network::Ethereum)
            ]),
            parse_args(args("--datadir hello --ethereum")).ok()
        );
        assert_eq!(
            Some(vec![
                Arg::Network(Network::Solana),
                Arg::DatadirPath(WalletDirectory::new(PathBuf::from("hello"))),
            ]),
            parse_args(args("--solana --datadir hello")).ok()
        );
        // A path is never read as a network flag.
        assert_eq!(
            Some(vec![
                Arg::DatadirPath(WalletDirectory::new(PathBuf::from("solana"))),
                Arg::Network(Network::Ethereum),
            ]),
            parse_args(args("--datadir solana --ethereum")).ok()
        );
    }
}
