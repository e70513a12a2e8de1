//! lang_apply - Apply a language selection to a page document
//!
//! Loads a JSON page document, applies the given language (or the detected
//! preferred language when none is given), prints the resulting page state
//! and optionally writes the mutated document back out.

use anyhow::Result;
use clap::{Arg, Command};
use rust_i18n::t;
use std::path::PathBuf;

use langctl::i18n::init_locale;
use langctl::language::SupportedLanguage;
use langctl::page::Page;
use langctl::switcher::LanguageSwitcher;

rust_i18n::i18n!("locales", fallback = "en");

fn build_cli() -> Command {
    Command::new("lang_apply")
        .about(t!("help.lang_apply.about").to_string())
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("page")
                .help(t!("help.lang_apply.page").to_string())
                .required(true)
                .index(1)
        )
        .arg(
            Arg::new("lang")
                .help(t!("help.lang_apply.lang").to_string())
                .index(2)
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help(t!("help.lang_apply.output").to_string())
                .value_name("FILE")
        )
}

fn main() -> Result<()> {
    // Initialize the message locale from the system locale
    init_locale();

    let matches = build_cli().get_matches();

    let page_path = PathBuf::from(matches.get_one::<String>("page").unwrap());
    let lang = matches.get_one::<String>("lang").cloned();
    let output = matches.get_one::<String>("output").map(PathBuf::from);

    let page = Page::load(&page_path)?;
    let mut switcher = LanguageSwitcher::new(page);

    // An explicit language behaves like a button click: it is applied raw,
    // without validation against the supported set. Without one, run the
    // load-time sequence (detect, then apply).
    let code = match lang {
        Some(code) => code,
        None => SupportedLanguage::detect().code().to_string(),
    };
    switcher.apply_selection(&code);

    let page = switcher.into_document();

    println!("{}", t!("lang_apply.applied", code = &code));

    if !page.title.is_empty() {
        println!("{}", t!("lang_apply.label_title", title = &page.title));
    }

    let visible: Vec<&str> = page
        .elements
        .iter()
        .filter(|element| !element.is_title && !element.hidden)
        .map(|element| element.text.as_str())
        .collect();

    if visible.is_empty() {
        println!("{}", t!("lang_apply.no_visible"));
    } else {
        println!("{}", t!("lang_apply.label_visible"));
        for text in visible {
            println!("  {}", text);
        }
    }

    match page.buttons.iter().find(|button| button.active) {
        Some(button) => println!("{}", t!("lang_apply.label_active", id = &button.id)),
        None => println!("{}", t!("lang_apply.no_active")),
    }

    if let Some(output) = output {
        page.save(&output)?;
        println!("{}", t!("lang_apply.wrote_output", path = output.display().to_string()));
    }

    Ok(())
}
