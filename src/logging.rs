use env_logger::{Builder, Env, Target};
use std::{fs::OpenOptions, path::Path};

/// Routes `log` output to a file. The terminal is in raw mode on the
/// alternate screen while the game runs, so nothing may go to stdout/stderr.
///
/// Filtering follows `RUST_LOG`, defaulting to `info`.
pub fn init_file_logger(path: impl AsRef<Path>) -> color_eyre::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    Ok(())
}
