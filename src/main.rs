// SPDX-License-Identifier: MPL-2.0
use iced_reel::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
iced_reel

USAGE:
  iced_reel [OPTIONS] [FILE]

OPTIONS:
  -h, --help              Print this help
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --config-dir <DIR>      Directory holding settings.toml

ARGS:
  <FILE>                  Video to open on startup
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("iced_reel=info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!("ignoring --config-dir: {err}");
        None
    });
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir);

    app::run(Flags { lang, file_path })
}
