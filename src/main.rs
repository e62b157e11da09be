use clap::Parser;
use liftlog::Cli;
use std::io::Write;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(stdin = cli.reads_stdin(), path = %cli.log_file.display(), "liftlog debug log started");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match liftlog::run(&cli, &mut out).and_then(|n| {
        out.flush()?;
        Ok(n)
    }) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", liftlog::report(&err));
            ExitCode::FAILURE
        }
    }
}
