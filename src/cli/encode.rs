//! `barforge encode`: apply configuration, encode, print.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use barforge::{Symbol, SymbolConfig, SymbologySpec};
use clap::Args;

use crate::cli::common::{EccArg, FormatArg, InputModeArg, parse_symbology};
use crate::cli::utils::write_output;

/// Arguments for `barforge encode`.
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Symbology id or name (e.g. `8`, `code39`, `hibc128`).
    #[arg(long, short = 'b', value_parser = parse_symbology)]
    pub symbology: Option<SymbologySpec>,
    /// Data to encode.
    #[arg(long, short = 'd', conflicts_with = "from")]
    pub data: Option<String>,
    /// Read data from a file (`-` for stdin). Stdin is used when neither
    /// `--data` nor `--from` is given.
    #[arg(long = "from")]
    pub from: Option<PathBuf>,
    /// How to interpret the input bytes.
    #[arg(long, value_enum)]
    pub mode: Option<InputModeArg>,
    /// Append the optional check character.
    #[arg(long)]
    pub check_digit: bool,
    /// QR error-correction level.
    #[arg(long, value_enum)]
    pub ecc: Option<EccArg>,
    /// JSON configuration applied before the flags above.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value = "blocks")]
    pub format: FormatArg,
    /// Output file (`-` for stdout).
    #[arg(long, short = 'o', default_value = "-")]
    pub output: PathBuf,
}

impl EncodeArgs {
    /// Configuration file contents overlaid with command-line flags.
    fn config(&self) -> Result<SymbolConfig> {
        let mut config = match &self.config {
            Some(path) => SymbolConfig::from_file(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => SymbolConfig::default(),
        };
        if let Some(symbology) = &self.symbology {
            config.symbology = Some(symbology.clone());
        }
        if let Some(mode) = self.mode {
            config.input_mode = Some(barforge::InputModeSpec::Named(mode.into()));
        }
        if self.check_digit {
            config.check_digit = Some(true);
        }
        if let Some(ecc) = self.ecc {
            config.ecc_level = Some(ecc.into());
        }
        Ok(config)
    }
}

/// Execute an encode command.
pub fn handle(args: EncodeArgs) -> Result<()> {
    let mut symbol = Symbol::new();
    args.config()?
        .apply(&mut symbol)
        .context("invalid symbol configuration")?;

    let outcome = match (&args.data, &args.from) {
        (Some(data), _) => symbol.encode(data.as_bytes()),
        (None, Some(path)) => symbol.encode_file(path),
        (None, None) => symbol.encode_file("-"),
    };
    match outcome {
        Ok(Some(_)) => eprintln!("{}", symbol.error_message()),
        Ok(None) => {}
        Err(_) => bail!("{}", symbol.error_message()),
    }

    let content = match args.format.render_style() {
        Some(style) => {
            let mut out = symbol.render(style);
            if symbol.show_text && !symbol.text().is_empty() {
                out.push_str(symbol.text());
                out.push('\n');
            }
            out
        }
        None => {
            let mut json = serde_json::to_string_pretty(&symbol.report())?;
            json.push('\n');
            json
        }
    };
    write_output(&args.output, &content)
}
