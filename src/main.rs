// SPDX-License-Identifier: MPL-2.0
use shotlist::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: shotlist [OPTIONS] [SNAPSHOT]

Arguments:
  [SNAPSHOT]            Shot snapshot (TOML) to open

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{USAGE}");
        return Ok(());
    }

    let lang = optional_value(&mut args, "--lang");
    let config_dir = optional_value(&mut args, "--config-dir");
    let snapshot_path = args.finish().into_iter().next().map(PathBuf::from);

    app::run(Flags {
        lang,
        config_dir,
        snapshot_path,
    })
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        tracing::warn!(option = key, error = %err, "ignoring invalid command-line option");
        None
    })
}
