//! CLI entry point for the splitter.

use tracing_subscriber::EnvFilter;

fn main() {
    // Default to warnings from this crate only; RUST_LOG overrides.
    // Logs go to stderr so the chunk listing on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("xml_splitter=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = xml_splitter::cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
