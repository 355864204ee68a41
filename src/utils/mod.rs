use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber
///
/// `default_level` applies unless `RUST_LOG` says otherwise. Logs go to
/// stderr so command output on stdout stays clean.
pub fn init_tracing(default_level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    // On Windows, disable ANSI colors to avoid garbage characters in console
    #[cfg(target_os = "windows")]
    let use_ansi = false;

    #[cfg(not(target_os = "windows"))]
    let use_ansi = true;

    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(default_level.into())
                    .from_env_lossy(),
            )
            .with_writer(std::io::stderr)
            .with_ansi(use_ansi)
            .with_line_number(true)
            .with_file(true)
            .finish(),
    )?;
    Ok(())
}
