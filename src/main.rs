// SPDX-License-Identifier: MPL-2.0
use movie_finder::app::{self, paths, Flags};

const HELP: &str = "\
Movie Finder

USAGE:
  movie_finder [OPTIONS]

OPTIONS:
  -h, --help              Print this help
      --lang <LOCALE>     UI language (e.g. en-US, fr)
      --api-key <KEY>     OMDb API key (overrides OMDB_API_KEY and settings)
      --config-dir <DIR>  Directory holding settings.toml
  -v, --verbose           Print diagnostic events to stderr
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: parse_opt(&mut args, "--lang"),
        api_key: parse_opt(&mut args, "--api-key"),
        config_dir: parse_opt(&mut args, "--config-dir"),
        verbose: args.contains(["-v", "--verbose"]),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("Ignoring unexpected arguments: {rest:?}");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}

fn parse_opt(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            eprintln!("Invalid value for {key}: {error}");
            None
        }
    }
}
