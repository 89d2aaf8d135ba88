use ampsync::config::{ColorMode, Config, Verbosity};

use crate::cli::{Cli, ColorWhen};
use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(
        json: bool,
        verbose: u8,
        quiet: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
    ) -> Self {
        Self::from_caps(json, verbose, quiet, cli_color, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        quiet: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbosity: Verbosity::from_flags(config.output.verbosity, verbose, quiet),
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Context used before config is loaded (early errors); flags still apply
    pub fn fallback(cli: &Cli) -> Self {
        Self::new(cli.json, cli.verbose, cli.quiet, cli.color, &Config::default())
    }

    pub fn is_quiet(&self) -> bool {
        self.verbosity == Verbosity::Quiet
    }

    pub fn is_verbose(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }

    pub fn is_debug(&self) -> bool {
        self.verbosity >= Verbosity::Debug
    }
}
