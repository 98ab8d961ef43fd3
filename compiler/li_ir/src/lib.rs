//! Li IR - forms, spans and dialects
//!
//! Shared vocabulary between the parser (`li_parse`), the evaluator
//! (`li_eval`) and the driver (`lic`):
//! - [`Form`], the parsed tree, and its parts
//! - [`Span`], byte ranges for diagnostics
//! - [`Dialect`], the keyword and catalog-name tables of each surface language
//!
//! With the `json` feature, forms serialize to the JSON AST encoding.

mod dialect;
mod form;
#[cfg(feature = "json")]
mod json;
mod span;

pub use dialect::{Dialect, Keywords, BODY_KEY, IF_HEAD, LIT_KEY, LOOP_HEAD, PARAMS_KEY};
pub use form::{
    write_float, Bindings, Branch, CallForm, Conditional, Form, FunctionDef, LoopForm, Program,
};
pub use span::Span;
