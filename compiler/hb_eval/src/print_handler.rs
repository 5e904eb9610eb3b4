//! Output sink for `print` and `println`.
//!
//! Native output goes through a [`SharedPrintHandler`] rather than
//! straight to stdout, so tests and embedders can capture it. Write
//! failures (e.g. a closed pipe) are returned to the caller.

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// Where printed text ends up.
pub enum PrintHandler {
    /// Process stdout (default).
    Stdout,
    /// Any host-supplied writer, flushed after every `print`.
    Writer(Mutex<Box<dyn Write + Send>>),
    /// In-memory buffer, read back with [`PrintHandler::output`].
    Buffer(Mutex<String>),
    /// Discard everything.
    Silent,
}

impl PrintHandler {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) -> io::Result<()> {
        match self {
            PrintHandler::Stdout => writeln!(io::stdout().lock(), "{msg}"),
            PrintHandler::Writer(writer) => writeln!(writer.lock(), "{msg}"),
            PrintHandler::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
                Ok(())
            }
            PrintHandler::Silent => Ok(()),
        }
    }

    /// Write `msg` as-is.
    ///
    /// Writer-backed handlers are flushed, since the text has no newline
    /// to push it out of a line buffer.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        match self {
            PrintHandler::Stdout => write_flushed(&mut io::stdout().lock(), msg),
            PrintHandler::Writer(writer) => write_flushed(&mut **writer.lock(), msg),
            PrintHandler::Buffer(buf) => {
                buf.lock().push_str(msg);
                Ok(())
            }
            PrintHandler::Silent => Ok(()),
        }
    }

    /// Everything captured so far. Empty for every handler but the buffer.
    pub fn output(&self) -> String {
        match self {
            PrintHandler::Buffer(buf) => buf.lock().clone(),
            PrintHandler::Stdout | PrintHandler::Writer(_) | PrintHandler::Silent => String::new(),
        }
    }

    /// Drop captured output.
    pub fn clear(&self) {
        if let PrintHandler::Buffer(buf) = self {
            buf.lock().clear();
        }
    }
}

fn write_flushed(out: &mut dyn Write, msg: &str) -> io::Result<()> {
    out.write_all(msg.as_bytes())?;
    out.flush()
}

/// Print handler shared between a runtime and its native functions.
pub type SharedPrintHandler = Arc<PrintHandler>;

/// Handler writing to process stdout.
pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

/// Handler writing to `writer`.
pub fn writer_handler(writer: impl Write + Send + 'static) -> SharedPrintHandler {
    Arc::new(PrintHandler::Writer(Mutex::new(Box::new(writer))))
}

/// Handler capturing output in memory.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}

/// Handler discarding all output.
pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}


#[cfg(test)]
mod tests {
    use super::test_writers::{ClosedPipe, FailingFlush, Recorder};
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_captures_print_and_println() {
        let handler = buffer_handler();
        assert!(handler.print("hello").is_ok());
        assert!(handler.print(" ").is_ok());
        assert!(handler.println("world").is_ok());
        assert_eq!(handler.output(), "hello world\n");
    }

    #[test]
    fn buffer_clear() {
        let handler = buffer_handler();
        assert!(handler.println("x").is_ok());
        handler.clear();
        assert!(handler.output().is_empty());
    }

    #[test]
    fn silent_discards() {
        let handler = silent_handler();
        assert!(handler.println("x").is_ok());
        assert!(handler.print("y").is_ok());
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn stdout_captures_nothing() {
        assert_eq!(stdout_handler().output(), "");
    }

    #[test]
    fn writer_receives_text_and_print_flushes() {
        let recorder = Recorder::default();
        let handler = writer_handler(recorder.clone());
        assert!(handler.print("a").is_ok());
        assert!(handler.println("b").is_ok());
        assert_eq!(recorder.bytes.lock().as_slice(), b"ab\n");
        assert_eq!(*recorder.flushes.lock(), 1);
        assert_eq!(handler.output(), "");
    }

    #[test]
    fn write_failure_is_returned() {
        let handler = writer_handler(ClosedPipe);
        let err = handler.println("x").map_err(|e| e.kind());
        assert_eq!(err, Err(io::ErrorKind::BrokenPipe));
        let err = handler.print("x").map_err(|e| e.kind());
        assert_eq!(err, Err(io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn flush_failure_is_returned() {
        let handler = writer_handler(FailingFlush);
        let err = handler.print("x").map_err(|e| e.kind());
        assert_eq!(err, Err(io::ErrorKind::BrokenPipe));
    }
}
