//! Parser tests.
//!
//! - `parser`: forms produced for valid source
//! - `errors`: fatal syntax errors and their spans

mod errors;
