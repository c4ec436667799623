//! # IDGen
//!
//! Random identifier generation for request IDs, test fixtures, temporary keys
//! and similar uses.
//!
//! A [`Generator`] is built once from a caller-supplied randomness source and
//! zero or more [`IdOption`]s, then asked repeatedly for fresh identifiers:
//!
//! - **Character set**: 62 case-sensitive alphanumerics unless overridden with
//!   [`with_charset`]. Must hold at least [`MIN_CHARSET_SIZE`] characters.
//! - **Default length**: 20 unless overridden with [`with_default_length`].
//!   Every accepted length, default or per-call, is at least [`MIN_LENGTH`].
//!
//! The crate generates no randomness of its own and makes no uniqueness or
//! security claims. Pass a cryptographically secure source when identifiers
//! must be unguessable; see [`source`].
//!
//! ```
//! use idgen::Generator;
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut generator = Generator::new(StdRng::from_os_rng(), [])?;
//! let request_id = generator.new_id();
//! let long_key = generator.new_id_with_length(40)?;
//! assert_eq!((request_id.len(), long_key.len()), (20, 40));
//! # Ok::<(), idgen::IdGenError>(())
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod generator;
pub mod options;
pub mod source;
pub mod sync;

pub use error::{IdGenError, Result};
pub use generator::Generator;
pub use options::{
    DEFAULT_CHARSET, DEFAULT_LENGTH, IdOption, MIN_CHARSET_SIZE, MIN_LENGTH, Options,
    with_charset, with_charset_chars, with_default_length,
};
pub use source::RandomSource;
pub use sync::SharedGenerator;

use tracing::debug;

use crate::cli::Cli;
use crate::config::AppConfig;

/// Run the `idgen` command line tool.
///
/// This function:
/// 1. Loads configuration from files and environment
/// 2. Initializes logging on stderr
/// 3. Writes the requested identifiers to stdout
///
/// # Errors
///
/// Returns an error if configuration cannot be loaded, the merged generator
/// options are rejected, or stdout cannot be written.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config_dir {
        Some(dir) => AppConfig::load_from(dir)?,
        None => AppConfig::load()?,
    };

    init_logging(&config);

    debug!(version = env!("CARGO_PKG_VERSION"), "Starting idgen");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    cli::generate(cli, &config, &mut out)
}

/// Initialize logging based on configuration.
fn init_logging(config: &AppConfig) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.observability.log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if config.observability.log_format == "json" {
        subscriber
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
