//! Command-line configuration.

use std::path::PathBuf;

use crate::GenError;

pub const USAGE: &str = "Usage: emoji_gen <emoji-data.txt> [-o <output.rs>] [--unicode-version=<v>]";

/// Unicode version named in the generated header when none is given.
pub const DEFAULT_UNICODE_VERSION: &str = "17.0";

/// What to read, where to write, and how to label the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    pub input: PathBuf,
    /// `None` writes to stdout.
    pub output: Option<PathBuf>,
    pub unicode_version: String,
}

impl GenConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        GenConfig {
            input: input.into(),
            output: None,
            unicode_version: DEFAULT_UNICODE_VERSION.to_owned(),
        }
    }

    /// Parse the arguments that follow the program name.
    pub fn from_args<I, S>(args: I) -> Result<Self, GenError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = None;
        let mut output = None;
        let mut unicode_version = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let arg = arg.as_ref();
            if arg == "-o" {
                let Some(path) = args.next() else {
                    return Err(usage("`-o` requires an output path"));
                };
                output = Some(PathBuf::from(path.as_ref()));
            } else if let Some(version) = arg.strip_prefix("--unicode-version=") {
                if version.is_empty() {
                    return Err(usage("`--unicode-version` requires a value"));
                }
                unicode_version = Some(version.to_owned());
            } else if arg.starts_with('-') {
                return Err(usage(&format!("unknown option `{arg}`")));
            } else if input.is_some() {
                return Err(usage(&format!("unexpected argument `{arg}`")));
            } else {
                input = Some(PathBuf::from(arg));
            }
        }

        let Some(input) = input else {
            return Err(usage("missing input file"));
        };
        Ok(GenConfig {
            input,
            output,
            unicode_version: unicode_version.unwrap_or_else(|| DEFAULT_UNICODE_VERSION.to_owned()),
        })
    }
}

fn usage(message: &str) -> GenError {
    GenError::Usage(message.to_owned())
}
