//! Command-line interface for fc-char.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::Parser;
use fc_char_config::Config;

use crate::report::ReportOptions;

/// fc-char - Find fonts containing a glyph and preview it in each
#[derive(Parser, Debug)]
#[command(name = "fc-char")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Hex code point (0x263A, 0X263A, U+263A) or a single literal character
    #[arg(value_name = "CHARACTER")]
    pub character: Option<OsString>,

    /// Don't display found glyphs
    #[arg(short = 'N', long)]
    pub nodisplay: bool,

    /// Maximum number of fonts to return/show (0 = no limit)
    #[arg(short = 'm', long, value_name = "#")]
    pub maxfonts: Option<usize>,

    /// Print debugging information to stderr
    #[arg(short, long)]
    pub debug: bool,

    /// Print unicode character name
    #[arg(short, long)]
    pub name: bool,

    /// Print unicode character annotation string
    #[arg(short, long)]
    pub annotation: bool,

    /// Print list of fonts with character
    #[arg(short, long)]
    pub print: bool,

    /// Include fixed-size fonts
    #[arg(short, long)]
    pub fixed: bool,

    /// Configuration file (default: ~/.config/fc-char/config.yaml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Raw character token, resolved later
    pub character: OsString,
    /// Show the preview window
    pub display: bool,
    /// Font cap from `--maxfonts`, `None` when not given
    pub max_fonts: Option<usize>,
    pub debug: bool,
    pub report: ReportOptions,
    /// `--fixed` was given
    pub include_fixed: bool,
    /// Config file override
    pub config_path: Option<PathBuf>,
}

impl RuntimeOptions {
    /// Font cap after applying the config default; `-m0` disables the cap.
    pub fn effective_max_fonts(&self, config: &Config) -> Option<usize> {
        self.max_fonts.or(config.max_fonts())
    }

    pub fn effective_include_fixed(&self, config: &Config) -> bool {
        self.include_fixed || config.include_fixed
    }
}

/// Result of CLI processing
#[derive(Debug, PartialEq, Eq)]
pub enum CliResult {
    /// Continue with normal startup
    Continue(RuntimeOptions),
    /// Exit with the given code (help, version or usage error)
    Exit(i32),
}

impl From<Cli> for CliResult {
    fn from(cli: Cli) -> Self {
        let Some(character) = cli.character else {
            eprintln!("Must supply a character value.");
            return CliResult::Exit(1);
        };

        CliResult::Continue(RuntimeOptions {
            character,
            display: !cli.nodisplay,
            max_fonts: cli.maxfonts,
            debug: cli.debug,
            report: ReportOptions {
                name: cli.name,
                annotation: cli.annotation,
                fonts: cli.print,
            },
            include_fixed: cli.fixed,
            config_path: cli.config,
        })
    }
}

/// Process the process arguments.
pub fn process_cli() -> CliResult {
    process_cli_from(std::env::args_os())
}

/// Process an explicit argument list (first item is the program name).
pub fn process_cli_from<I, T>(args: I) -> CliResult
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => cli.into(),
        Err(e) => {
            // Help and version go to stdout with exit code 0
            let _ = e.print();
            CliResult::Exit(e.exit_code())
        }
    }
}

/// Convenience for tests and callers holding string slices.
pub fn options_from<S: AsRef<OsStr>>(args: &[S]) -> CliResult {
    process_cli_from(args.iter().map(|a| a.as_ref().to_os_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(args: &[&str]) -> RuntimeOptions {
        match options_from(args) {
            CliResult::Continue(options) => options,
            other => panic!("expected options, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let opts = options(&["fc-char", "0x41"]);
        assert_eq!(opts.character, OsString::from("0x41"));
        assert!(opts.display);
        assert_eq!(opts.max_fonts, None);
        assert!(opts.report.is_empty());
        assert!(!opts.include_fixed);
    }

    #[test]
    fn test_short_flags() {
        let opts = options(&["fc-char", "-N", "-p", "-m2", "-n", "-a", "U+263A"]);
        assert!(!opts.display);
        assert_eq!(opts.max_fonts, Some(2));
        assert!(opts.report.name && opts.report.annotation && opts.report.fonts);
        // -p does not imply -f
        assert!(!opts.include_fixed);
    }

    #[test]
    fn test_long_flags() {
        let opts = options(&["fc-char", "--nodisplay", "--maxfonts=3", "--fixed", "A"]);
        assert!(!opts.display);
        assert_eq!(opts.max_fonts, Some(3));
        assert!(opts.include_fixed);
    }

    #[test]
    fn test_missing_character_exits_1() {
        assert_eq!(options_from(&["fc-char", "-N"]), CliResult::Exit(1));
    }

    #[test]
    fn test_help_exits_0() {
        assert_eq!(options_from(&["fc-char", "--help"]), CliResult::Exit(0));
    }

    #[test]
    fn test_config_overrides() {
        let config = Config {
            max_fonts: 4,
            include_fixed: true,
            ..Config::default()
        };
        let opts = options(&["fc-char", "A"]);
        assert_eq!(opts.effective_max_fonts(&config), Some(4));
        assert!(opts.effective_include_fixed(&config));

        let opts = options(&["fc-char", "-m0", "A"]);
        assert_eq!(opts.effective_max_fonts(&config), Some(0));
    }
}
