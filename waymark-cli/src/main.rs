//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = waymark_cli::run() {
        eprintln!("waymark: {err}");
        std::process::exit(1);
    }
}
