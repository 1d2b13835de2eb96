use std::io;

use anyhow::{Context, Result};
use fc_char::character::{self, InputForm};
use fc_char::cli::{self, RuntimeOptions};
use fc_char::config::Config;
use fc_char::fonts::FontCatalog;
use fc_char::names::NameLookup;
use fc_char::report::write_report;
use fc_char::session::Session;

fn main() {
    // Process CLI arguments first (before logging init for cleaner output)
    let runtime_options = match cli::process_cli() {
        cli::CliResult::Exit(code) => std::process::exit(code),
        cli::CliResult::Continue(options) => options,
    };
    fc_char::debug::init_log_bridge(runtime_options.debug);

    log::info!("Starting fc-char v{}", fc_char::VERSION);

    if let Err(e) = run(&runtime_options) {
        eprintln!("fc-char: error: {e:#}");
        // On Linux, provide a hint when the error looks like a missing display server
        #[cfg(target_os = "linux")]
        {
            let msg = format!("{e:?}").to_lowercase();
            if msg.contains("display") || msg.contains("wayland") || msg.contains("x server") {
                eprintln!(
                    "fc-char: hint: no display server found; set DISPLAY or WAYLAND_DISPLAY, \
                     or pass --nodisplay"
                );
            }
        }
        std::process::exit(1);
    }
}

fn run(options: &RuntimeOptions) -> Result<()> {
    let config = match &options.config_path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;
    if fc_char::debug::is_enabled(log::Level::Debug) {
        log::debug!("Config: {:?}", config);
    }

    let character = character::resolve(&options.character)?;
    if character.is_null_literal() {
        println!("Glyph result was 0.");
    }
    log::debug!(
        "Character {} ({})",
        character,
        match character.form() {
            InputForm::Hex => "hex",
            InputForm::Literal => "literal",
        }
    );

    let names = NameLookup::from_config(&config);
    let catalog = FontCatalog::system();
    let session = Session::new(
        character,
        &names,
        &catalog,
        options.effective_include_fixed(&config),
        options.effective_max_fonts(&config),
    );

    if options.display {
        fc_char::app::run_preview(&session, &catalog, &config)?;
    }

    let stdout = io::stdout();
    write_report(&mut stdout.lock(), &session, options.report)?;

    Ok(())
}
