//! Destinations for `print`, `println` and assertion reports.
//!
//! The driver prints to stdout; tests and embedders capture into a buffer.
//! Enum dispatch keeps the hot `print` path free of vtable calls.

use std::io::Write as _;

use parking_lot::Mutex;

pub enum PrintHandlerImpl {
    /// Writes to stdout, flushing after unterminated writes so prompts show
    /// before `input` blocks.
    Stdout,
    /// Captures everything written.
    Buffer(Mutex<String>),
    /// Discards output.
    Silent,
}

impl PrintHandlerImpl {
    pub fn print(&self, text: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                // A closed stdout is not an evaluation error.
                let _ = out.write_all(text.as_bytes()).and_then(|()| out.flush());
            }
            Self::Buffer(buf) => buf.lock().push_str(text),
            Self::Silent => {}
        }
    }

    pub fn println(&self, text: &str) {
        match self {
            Self::Stdout => {
                let mut out = std::io::stdout().lock();
                let _ = writeln!(out, "{text}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(text);
                buf.push('\n');
            }
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(buf) => buf.lock().clone(),
            Self::Stdout | Self::Silent => String::new(),
        }
    }

    /// Drain captured output.
    pub fn take_output(&self) -> String {
        match self {
            Self::Buffer(buf) => std::mem::take(&mut *buf.lock()),
            Self::Stdout | Self::Silent => String::new(),
        }
    }
}

/// Print handler shared between an interpreter and its host.
pub type SharedPrintHandler = std::sync::Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}

pub fn silent_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandlerImpl::Silent)
}
