// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, paths};
use iced_toast::config::{self, ToastDefaults};
use iced_toast::{logging, prepare, Error, FontCatalog, ToastRequest};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Show a transient desktop toast notification.

USAGE:
  iced_toast [OPTIONS]

OPTIONS:
  --title <TEXT>        Title, at most 24 characters [default: Missing Title]
  --message <TEXT>      Message, at most 120 characters; \\n starts a new line
                        [default: Missing Message]
  --duration <SECS>     Seconds before the toast closes [default: 2]
  --color <#RRGGBB>     Background color [default: #424242]
  --position <NAME>     center, bottom-left, bottom-right, bottom-center,
                        upper-center, upper-left, upper-right
                        [default: bottom-right]
  --icon <PATH>         Image shown in the top-left corner
  --font <FAMILY>       Font family for title and message
  --config-dir <DIR>    Directory holding toast.toml
  --save-defaults       Store duration, color, position, font and icon as
                        defaults for later runs
  --list-fonts          Print the available font families and exit
  -h, --help            Print this help and exit

ENVIRONMENT:
  ICED_TOAST_CONFIG_DIR Config directory when --config-dir is not given
  RUST_LOG              Log filter [default: iced_toast=info]
";

/// Command line options. Unset values fall back to the config file, then
/// to the built-in defaults.
#[derive(Debug, Default)]
struct Flags {
    title: Option<String>,
    message: Option<String>,
    duration_secs: Option<u64>,
    color: Option<String>,
    position: Option<String>,
    icon: Option<PathBuf>,
    font: Option<String>,
    config_dir: Option<String>,
    save_defaults: bool,
    list_fonts: bool,
}

impl Flags {
    fn parse(args: &mut pico_args::Arguments) -> Result<Self, pico_args::Error> {
        Ok(Self {
            title: args.opt_value_from_str("--title")?,
            message: args.opt_value_from_str("--message")?,
            duration_secs: args.opt_value_from_str("--duration")?,
            color: args.opt_value_from_str("--color")?,
            position: args.opt_value_from_str("--position")?,
            icon: args.opt_value_from_str("--icon")?,
            font: args.opt_value_from_str("--font")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            save_defaults: args.contains("--save-defaults"),
            list_fonts: args.contains("--list-fonts"),
        })
    }

    /// Layers these flags over `defaults`.
    fn into_request(self, defaults: &ToastDefaults) -> ToastRequest {
        let mut request = defaults.request();
        if let Some(title) = self.title {
            request.title = title;
        }
        if let Some(message) = self.message {
            request.message = message.replace("\\n", "\n");
        }
        if let Some(secs) = self.duration_secs {
            request.duration_secs = secs;
        }
        if let Some(color) = self.color {
            request.color = color;
        }
        if let Some(position) = self.position {
            request.position = position;
        }
        if self.icon.is_some() {
            request.icon = self.icon;
        }
        if self.font.is_some() {
            request.font = self.font;
        }
        request
    }
}

fn main() -> ExitCode {
    logging::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return ExitCode::SUCCESS;
    }

    let flags = match Flags::parse(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };
    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }

    paths::init_cli_override(flags.config_dir.clone());
    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        tracing::warn!("{warning}");
    }

    let catalog = FontCatalog::system();
    if flags.list_fonts {
        for family in catalog.families() {
            println!("{family}");
        }
        return ExitCode::SUCCESS;
    }

    let save_defaults = flags.save_defaults;
    let request = flags.into_request(&config.defaults);
    let snapshot = ToastDefaults::from_request(&request);

    let toast = match prepare(request, &catalog) {
        Ok(toast) => toast,
        Err(Error::Validation(err)) => {
            eprintln!("error: {err}");
            return ExitCode::from(2);
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to prepare toast");
            return ExitCode::FAILURE;
        }
    };

    if save_defaults {
        config.defaults = snapshot;
        match config::save(&config) {
            Ok(()) => tracing::info!("saved toast defaults"),
            Err(err) => tracing::warn!(error = %err, "failed to save toast defaults"),
        }
    }

    match app::run(toast) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "toast window failed");
            ExitCode::FAILURE
        }
    }
}
