// SPDX-License-Identifier: MPL-2.0
use env_logger::fmt::Formatter;
use iced_lightbox::app::{self, Flags};
use iced_lightbox::domain::gesture::ViewerVariant;
use log::{LevelFilter, Record};
use std::io::Write;
use std::path::PathBuf;

const HELP: &str = "\
iced_lightbox

USAGE:
  iced_lightbox [OPTIONS] [PATH]

ARGS:
  PATH                    Image file or directory (defaults to the working directory)

OPTIONS:
  --lang <LOCALE>         Interface language, e.g. en-US or fr
  --config-dir <DIR>      Directory holding settings.toml
  --variant <VARIANT>     Viewer variant: auto, paged or single
  -h, --help              Print this help
";

fn main() -> iced::Result {
    setup_logger();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

/// Parses the command line. Returns `None` when help was requested.
fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let variant = args.opt_value_from_fn("--variant", parse_variant)?;
    let path = args.finish().into_iter().next().map(PathBuf::from);

    Ok(Some(Flags {
        lang,
        config_dir,
        variant,
        path,
    }))
}

fn parse_variant(value: &str) -> Result<ViewerVariant, String> {
    ViewerVariant::from_name(value)
        .ok_or_else(|| format!("unknown variant '{value}' (expected auto, paged or single)"))
}

/// Logs to stderr. `RUST_LOG` wins; otherwise this crate logs at debug level
/// in debug builds and warnings in release builds, other crates are silent.
fn setup_logger() {
    let mut builder = env_logger::Builder::new();

    if std::env::var("RUST_LOG").is_ok() {
        builder.parse_env("RUST_LOG");
    } else {
        builder.filter(None, LevelFilter::Off);
        if cfg!(debug_assertions) {
            builder.filter(Some("iced_lightbox"), LevelFilter::Debug);
        } else {
            builder.filter(Some("iced_lightbox"), LevelFilter::Warn);
        }
    }

    builder.format(|buf: &mut Formatter, record: &Record| {
        let module = record.module_path().unwrap_or("unknown");
        let level = buf.default_styled_level(record.level());
        let timestamp = buf.timestamp_micros();
        match record.line() {
            Some(line) => writeln!(buf, "{timestamp} {level} {module}:{line} {}", record.args()),
            None => writeln!(buf, "{timestamp} {level} {module} {}", record.args()),
        }
    });

    if let Err(err) = builder.try_init() {
        eprintln!("logger already initialized: {err}");
    }
}
