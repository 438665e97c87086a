//! `emoji_gen` CLI.

use emoji_gen::{GenConfig, USAGE};

fn main() {
    emoji_gen::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match GenConfig::from_args(&args) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if let Err(err) = emoji_gen::run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
