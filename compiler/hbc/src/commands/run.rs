//! The `run` command: read a HighBasic file and execute it.

use hb_eval::{Runtime, SharedPrintHandler};

use super::{read_file, CommandError};

/// Options accepted by `hb run`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Dump the parsed statements before executing.
    pub debug: bool,
}

impl RunOptions {
    /// Parse run flags. Returns the options and the first non-flag argument.
    ///
    /// Unknown flags are reported as `Err(flag)`.
    pub fn parse<'a>(args: &'a [String]) -> Result<(Self, Option<&'a str>), &'a str> {
        let mut options = RunOptions::default();
        let mut path = None;
        for arg in args {
            if arg == "--debug" || arg == "-d" {
                options.debug = true;
            } else if arg.starts_with('-') {
                return Err(arg.as_str());
            } else if path.is_none() {
                path = Some(arg.as_str());
            }
        }
        Ok((options, path))
    }
}

/// Run a HighBasic source file with the standard library installed.
///
/// Program output goes through `output`; the binary passes a stdout
/// handler.
#[tracing::instrument(level = "debug", skip(output))]
pub fn run_file(
    path: &str,
    options: RunOptions,
    output: SharedPrintHandler,
) -> Result<(), CommandError> {
    let source = read_file(path)?;

    let mut runtime = Runtime::with_output(output)
        .with_standard_library()
        .with_debug(options.debug);

    runtime.do_string(&source)?;
    Ok(())
}
