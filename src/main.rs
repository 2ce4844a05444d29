use clap::Parser;
use qrz::cli::{run, Cli};
use tracing_subscriber::EnvFilter;

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping to `head` or `less` that exits early)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    init_tracing(cli.debug);

    if let Err(e) = run(cli) {
        qrz::output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `--debug` raises the default filter to `debug`; `RUST_LOG` still wins
/// when set.
fn init_tracing(debug: bool) {
    let default_filter = if debug { "qrz=debug" } else { "qrz=warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
