//! Console logger setup.
//!
//! All user-facing output goes through the `log` macros. Normal mode prints
//! bare messages; `--verbose` adds timestamps and levels. With `--logfile`
//! every line is also appended to a file with ANSI escapes removed.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::error::CliError;

/// Writes to stdout and to a log file, stripping colour codes for the file.
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stdout().write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stdout().flush()?;
        self.file.flush()
    }
}

pub(crate) fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. `RUST_LOG` overrides the chosen level.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = Builder::new();
    builder.filter_level(level_for(quiet, verbose));
    builder.parse_default_env();

    if verbose {
        builder.format(|buf, record| {
            writeln!(
                buf,
                "[{} {:<5} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        });
    } else {
        builder.format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    match logfile {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            builder.target(Target::Pipe(Box::new(TeeWriter { file })));
        }
        None => {
            builder.target(Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::logger(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(level_for(true, true), LevelFilter::Debug);
        assert_eq!(level_for(true, false), LevelFilter::Warn);
        assert_eq!(level_for(false, false), LevelFilter::Info);
    }

    #[test]
    fn tee_strips_ansi_for_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        let file = File::create(&path).unwrap();
        let mut tee = TeeWriter { file };

        tee.write_all(b"\x1b[32mok\x1b[0m done\n").unwrap();
        tee.flush().unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ok done\n");
    }
}
