//! lang_detect - Print the detected preferred language
//!
//! Reads the system locale, constrains it to the supported set (en, de, zh)
//! and prints the resulting language code. Unsupported or absent locales
//! fall back to English; detection never fails.

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use rust_i18n::t;

use langctl::i18n::init_locale;
use langctl::language::SupportedLanguage;

rust_i18n::i18n!("locales", fallback = "en");

fn build_cli() -> Command {
    Command::new("lang_detect")
        .about(t!("help.lang_detect.about").to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("name")
                .long("name")
                .short('n')
                .help(t!("help.lang_detect.name").to_string())
                .action(ArgAction::SetTrue)
        )
}

fn main() -> Result<()> {
    init_locale();

    let matches = build_cli().get_matches();

    let lang = SupportedLanguage::detect();

    if matches.get_flag("name") {
        println!("{} ({})", lang.code(), lang.native_name());
    } else {
        println!("{}", lang.code());
    }

    Ok(())
}
