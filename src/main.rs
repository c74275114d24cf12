// SPDX-License-Identifier: MPL-2.0
use iced_resizer::app::{self, paths, Flags};

const HELP: &str = "\
iced_resizer - resize images with an aspect-ratio lock

USAGE:
    iced_resizer [OPTIONS] [IMAGE]

OPTIONS:
    -h, --help               Print this help
    --lang <LOCALE>          UI language (e.g. en-US, fr)
    --config-dir <DIR>       Directory holding settings.toml

ENVIRONMENT:
    ICED_RESIZER_CONFIG_DIR  Config directory when --config-dir is absent
    RUST_LOG                 Log filter (default: info)
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|arg| arg.into_string().ok());

    paths::init_cli_override(config_dir);

    app::run(Flags { lang, file_path })
}
