// SPDX-License-Identifier: MPL-2.0
use iced_cardmaker::app::{self, config, paths, Flags};
use iced_cardmaker::logging;

const HELP: &str = "\
Thank-you card maker

USAGE:
  iced_cardmaker [OPTIONS]

OPTIONS:
  --lang <LOCALE>      UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        eprintln!("ignoring --lang: {err}");
        None
    });
    let config_dir: Option<String> = args
        .opt_value_from_str("--config-dir")
        .unwrap_or_else(|err| {
            eprintln!("ignoring --config-dir: {err}");
            None
        });

    paths::init_cli_overrides(config_dir);
    let (config, config_warning) = config::load();
    logging::init(config.general.log_level.as_deref());

    let remaining = args.finish();
    if !remaining.is_empty() {
        tracing::warn!(?remaining, "ignoring unknown arguments");
    }

    app::run(Flags {
        lang,
        config,
        config_warning,
    })
}
