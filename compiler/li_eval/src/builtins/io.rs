//! Printing, input, assertions, and small value utilities.

use tracing::{debug, warn};

use super::compare::all_equal;
use super::{require_args, require_number, require_str};
use crate::errors::{host_error, unknown_extension, wrong_arg_count, EvalResult};
use crate::{Interpreter, Value};

/// Write each argument with no separator and no newline.
pub(super) fn print(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    let text: String = args.iter().map(ToString::to_string).collect();
    interp.print_handler.print(&text);
    Ok(Value::Null)
}

/// Write each argument on its own line.
pub(super) fn println(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    for arg in args {
        interp.print_handler.println(&arg.to_string());
    }
    Ok(Value::Null)
}

/// `(input)` or `(input prompt)`: one line without its terminator, or
/// `null` at end of input.
pub(super) fn input(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    match args {
        [] => {}
        [prompt] => interp.print_handler.print(&prompt.to_string()),
        _ => return Err(wrong_arg_count("input", "0 or 1", args.len())),
    }
    match interp.input.read_line() {
        Ok(Some(line)) => Ok(Value::string(&line)),
        Ok(None) => Ok(Value::Null),
        Err(e) => Err(host_error("input", e)),
    }
}

/// Report when the arguments are not all equal. Never fails.
pub(super) fn assert(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    let holds = all_equal(args);
    if !holds {
        let shown: Vec<String> = args.iter().map(ToString::to_string).collect();
        let report = format!("Assert failed: {}", shown.join(" "));
        warn!(%report, "assertion failed");
        interp.print_handler.println(&report);
    }
    Ok(Value::bool(holds))
}

pub(super) fn round(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("round", 1, args)?;
    let n = require_number("round", &args[0])?;
    n.round().map(Value::int)
}

pub(super) fn type_of(_: &mut Interpreter, args: &[Value]) -> EvalResult {
    require_args("type", 1, args)?;
    Ok(Value::string(args[0].type_name()))
}

/// Merge the catalog of each named extension, localized for the dialect.
pub(super) fn import(interp: &mut Interpreter, args: &[Value]) -> EvalResult {
    for arg in args {
        let name = require_str("import", arg)?;
        let extension = interp
            .extensions
            .find(name)
            .ok_or_else(|| unknown_extension(name))?;
        let catalog = extension.catalog().localized(&interp.dialect);
        debug!(extension = name, entries = catalog.len(), "importing");
        interp.catalog.extend(catalog);
    }
    Ok(Value::Null)
}
