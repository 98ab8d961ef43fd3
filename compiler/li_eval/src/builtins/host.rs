//! File primitives over a handle table owned by the interpreter.
//!
//! Handles are plain integers starting at 3, after the standard streams.
//! Nothing is closed automatically until the interpreter is dropped.

use std::fs::{File, OpenOptions};
use std::io::{Read as _, Write as _};

use rustc_hash::FxHashMap;

use super::{require_args, require_int, require_str};
use crate::errors::{host_error, EvalResult};
use crate::{Interpreter, Value};

const FIRST_HANDLE: i64 = 3;

pub(crate) struct HostFiles {
    open: FxHashMap<i64, File>,
    next: i64,
}

impl HostFiles {
    pub(crate) fn new() -> Self {
        HostFiles {
            open: FxHashMap::default(),
            next: FIRST_HANDLE,
        }
    }

    fn insert(&mut self, file: File) -> i64 {
        let handle = self.next;
        self.next += 1;
        self.open.insert(handle, file);
        handle
    }

    fn get(&mut self, op: &'static str, handle: i64) -> EvalResult<&mut File> {
        self.open
            .get_mut(&handle)
            .ok_or_else(|| host_error(op, format!("bad file handle {handle}")))
    }
}

/// `(open path)`: open an existing file for reading and writing.
pub(super) fn open(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("open", 1, args)?;
    let path = require_str("open", &args[0])?.trim();
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| host_error("open", format!("{path}: {e}")))?;
    Ok(Value::int(interp.files.insert(file)))
}

/// `(read handle count)`: up to `count` bytes, decoded lossily.
pub(super) fn read(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("read", 2, args)?;
    let handle = require_int("read", &args[0])?;
    let count = u64::try_from(require_int("read", &args[1])?.max(0)).unwrap_or(0);
    let file = interp.files.get("read", handle)?;
    let mut buf = Vec::new();
    file.take(count)
        .read_to_end(&mut buf)
        .map_err(|e| host_error("read", e))?;
    Ok(Value::string(&String::from_utf8_lossy(&buf)))
}

/// `(write handle text)`: returns the number of bytes written.
pub(super) fn write(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("write", 2, args)?;
    let handle = require_int("write", &args[0])?;
    let text = args[1].to_string();
    let file = interp.files.get("write", handle)?;
    let written = file
        .write(text.as_bytes())
        .map_err(|e| host_error("write", e))?;
    Ok(Value::int(i64::try_from(written).unwrap_or(i64::MAX)))
}

pub(super) fn close(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("close", 1, args)?;
    let handle = require_int("close", &args[0])?;
    interp
        .files
        .open
        .remove(&handle)
        .ok_or_else(|| host_error("close", format!("bad file handle {handle}")))?;
    Ok(Value::Null)
}
