//! Table generator for `emoji_core`.
//!
//! Reads the Unicode `emoji-data.txt` file and writes the Rust source of
//! `emoji_core`'s generated tables module:
//!
//! ```text
//! emoji_gen emoji-data.txt -o compiler/emoji_core/src/tables/generated.rs
//! ```
//!
//! Pipeline: [`parse`] the data lines, collect them in a [`TableBuilder`],
//! then [`emit`] the finished tables.

mod builder;
mod config;
mod emit;
mod error;
mod parse;

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Once;

pub use builder::{BuiltTable, TableBuilder};
pub use config::{GenConfig, DEFAULT_UNICODE_VERSION, USAGE};
pub use emit::emit;
pub use error::GenError;
pub use parse::{parse, parse_line, Entry};

static TRACING_INIT: Once = Once::new();

/// Initialize the tracing subscriber.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set,
/// e.g. `RUST_LOG=emoji_gen=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Generate the tables module source from the contents of `emoji-data.txt`.
pub fn generate(data: &str, unicode_version: &str) -> Result<String, GenError> {
    let mut builder = TableBuilder::new();
    builder.extend(parse(data)?);
    let tables = builder.build()?;
    Ok(emit(&tables, unicode_version))
}

/// Read `config.input`, generate, and write the result.
pub fn run(config: &GenConfig) -> Result<(), GenError> {
    let data = fs::read_to_string(&config.input).map_err(|err| GenError::io(&config.input, err))?;
    let source = generate(&data, &config.unicode_version)?;

    match &config.output {
        Some(path) => {
            fs::write(path, &source).map_err(|err| GenError::io(path, err))?;
            tracing::info!(path = %path.display(), bytes = source.len(), "wrote tables");
        }
        None => {
            io::stdout()
                .lock()
                .write_all(source.as_bytes())
                .map_err(|err| GenError::io(Path::new("<stdout>"), err))?;
        }
    }
    Ok(())
}
