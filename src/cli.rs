//! Command-line interface for the `idgen` binary.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, warn};

use crate::config::{AppConfig, GeneratorSettings};
use crate::error::IdGenError;
use crate::generator::Generator;

#[derive(Debug, Parser)]
#[command(name = "idgen")]
#[command(version)]
#[command(
    about = "Generate random identifiers",
    long_about = "Generate random identifiers from a configurable character set.\n\n\
                  Settings are read from config/default.toml, config/{IDGEN_PROFILE}.toml \
                  and IDGEN__GENERATOR__* environment variables; flags given here win."
)]
pub struct Cli {
    /// Number of identifiers to print
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Length of each identifier (defaults to the configured default length)
    #[arg(short = 'l', long)]
    pub length: Option<usize>,

    /// Characters to sample from
    #[arg(long)]
    pub charset: Option<String>,

    /// Default identifier length
    #[arg(long)]
    pub default_length: Option<usize>,

    /// Seed a reproducible source. Identifiers become predictable; use for fixtures only
    #[arg(long)]
    pub seed: Option<u64>,

    /// Directory holding default.toml and profile files
    #[arg(long, env = "IDGEN_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,
}

impl Cli {
    /// Generator settings given on the command line.
    #[must_use]
    pub fn settings(&self) -> GeneratorSettings {
        GeneratorSettings {
            charset: self.charset.clone(),
            default_length: self.default_length,
            seed: self.seed,
        }
    }
}

fn describe(err: IdGenError) -> anyhow::Error {
    let context = if err.is_construction_error() {
        "invalid generator options"
    } else {
        "invalid identifier length"
    };
    anyhow::Error::new(err).context(context)
}

/// Write `cli.count` identifiers to `out`, one per line.
///
/// Command-line overrides are applied after the configured ones.
///
/// # Errors
///
/// Returns an error if the merged options or the requested length are
/// rejected, or if writing to `out` fails.
pub fn generate(cli: &Cli, config: &AppConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let overrides = cli.settings();
    let mut options = config.generator.options();
    options.extend(overrides.options());

    let source = match overrides.seed.or(config.generator.seed) {
        Some(seed) => {
            warn!(seed, "Using a seeded source, identifiers are predictable");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let mut generator = Generator::new(source, options).map_err(describe)?;
    debug!(count = cli.count, length = ?cli.length, "Generating identifiers");

    for _ in 0..cli.count {
        let id = match cli.length {
            Some(length) => generator.new_id_with_length(length).map_err(describe)?,
            None => generator.new_id(),
        };
        writeln!(out, "{id}")?;
    }

    Ok(())
}
