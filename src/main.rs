// SPDX-License-Identifier: MPL-2.0
use comic_daily::app::{self, Flags};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "comic_daily=info";

const HELP: &str = "\
AI Comic Daily News

USAGE:
  comic_daily [OPTIONS]

OPTIONS:
  --lang <LOCALE>        Interface language (e.g. en-US, fr)
  --config-dir <PATH>    Directory holding settings.toml
  --offline              Show the built-in sample edition
  -h, --help             Print this help

ENVIRONMENT:
  COMIC_DAILY_CONFIG_DIR   Config directory (overridden by --config-dir)
  TELEGRAM_BOT_TOKEN       Bot token used for sharing
  TELEGRAM_CHAT_ID         Chat receiving shared stories
  RUST_LOG                 Log filter (default: comic_daily=info)
";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    init_tracing();

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --lang value");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        tracing::warn!(error = %err, "ignoring invalid --config-dir value");
        None
    });
    let offline = args.contains("--offline");

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(Flags {
        lang,
        config_dir,
        offline,
    })
}
