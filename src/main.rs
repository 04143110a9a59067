// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};
use iced_folio::logging;

const HELP: &str = "\
iced_folio - portfolio gallery for a single artist

USAGE:
  iced_folio [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <LOCALE>      Interface language (e.g. en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml
      --i18n-dir <DIR>     Extra Fluent translation files
      --catalog <FILE>     Show the artworks of a TOML catalog
      --endpoint <URL>     Fetch artworks from a content backend

ENVIRONMENT:
  ICED_FOLIO_CONFIG_DIR     Same as --config-dir
  ICED_FOLIO_CONTENT_TOKEN  Bearer token for the content backend
  ICED_FOLIO_LOG            Log filter (e.g. iced_folio=debug)
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        catalog: args.opt_value_from_str("--catalog")?,
        endpoint: args.opt_value_from_str("--endpoint")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unexpected arguments");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    logging::init();

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

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}
