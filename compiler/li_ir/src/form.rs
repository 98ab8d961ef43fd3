//! Parsed Li forms.
//!
//! A [`Form`] is one node of the tree the parser produces. Forms are built
//! once and never mutated; the evaluator walks them by reference and function
//! values share their [`FunctionDef`] through an `Rc`.

use std::fmt::{self, Write as _};
use std::rc::Rc;

use crate::dialect::Dialect;

/// One node of parsed Li source.
#[derive(Clone, Debug, PartialEq)]
pub enum Form {
    Null,
    Int(i64),
    Float(f64),
    /// Identifier resolved against the catalog, then the environment.
    Name(String),
    /// String literal, already unescaped.
    Str(String),
    /// `[a b c]`
    List(Vec<Form>),
    /// `{k: v ...}` map literal.
    Map(Bindings),
    /// `k: v`, or the merged bindings of a block.
    Bind(Bindings),
    /// `def(a b) { ... }`
    Function(Rc<FunctionDef>),
    /// `f(a b)` or `(f a b)`
    Call(CallForm),
    If(Conditional),
    Loop(Box<LoopForm>),
}

impl Form {
    pub fn name(name: impl Into<String>) -> Self {
        Form::Name(name.into())
    }

    pub fn string(text: impl Into<String>) -> Self {
        Form::Str(text.into())
    }

    pub fn call(head: Form, args: Vec<Form>) -> Self {
        Form::Call(CallForm {
            head: Box::new(head),
            args,
        })
    }

    pub fn function(params: Vec<String>, body: Vec<Form>) -> Self {
        Form::Function(Rc::new(FunctionDef { params, body }))
    }

    pub fn bind(key: impl Into<String>, value: Form) -> Self {
        Form::Bind(Bindings::single(key, value))
    }

    /// Short description of the form kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Form::Null => "null",
            Form::Int(_) | Form::Float(_) => "number",
            Form::Name(_) => "name",
            Form::Str(_) => "string",
            Form::List(_) => "list literal",
            Form::Map(_) => "map literal",
            Form::Bind(_) => "binding",
            Form::Function(_) => "function literal",
            Form::Call(_) => "call",
            Form::If(_) => "conditional",
            Form::Loop(_) => "loop",
        }
    }
}

/// Ordered `name: form` pairs.
///
/// Insertion order is kept; inserting an existing key replaces its value in
/// place, which is how later top-level bindings override earlier ones.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Bindings {
    entries: Vec<(String, Form)>,
}

/// A parsed source file: the merged top-level bindings.
pub type Program = Bindings;

impl Bindings {
    pub fn new() -> Self {
        Bindings::default()
    }

    pub fn single(key: impl Into<String>, value: Form) -> Self {
        Bindings {
            entries: vec![(key.into(), value)],
        }
    }

    pub fn insert(&mut self, key: String, value: Form) {
        if let Some(slot) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Merge `other` into `self`, entry by entry.
    pub fn merge(&mut self, other: Bindings) {
        for (key, value) in other.entries {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&Form> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Form)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl FromIterator<(String, Form)> for Bindings {
    fn from_iter<I: IntoIterator<Item = (String, Form)>>(iter: I) -> Self {
        let mut bindings = Bindings::new();
        for (key, value) in iter {
            bindings.insert(key, value);
        }
        bindings
    }
}

impl IntoIterator for Bindings {
    type Item = (String, Form);
    type IntoIter = std::vec::IntoIter<(String, Form)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Body of a function literal.
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDef {
    pub params: Vec<String>,
    pub body: Vec<Form>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CallForm {
    pub head: Box<Form>,
    pub args: Vec<Form>,
}

impl CallForm {
    /// Name used when wrapping errors raised by this call.
    pub fn label(&self) -> String {
        match &*self.head {
            Form::Name(name) => name.clone(),
            other => other.to_string(),
        }
    }
}

/// A condition and the statements it guards.
#[derive(Clone, Debug, PartialEq)]
pub struct Branch {
    pub condition: Form,
    pub body: Vec<Form>,
}

/// `if c {..} elif c {..} else {..}`
#[derive(Clone, Debug, PartialEq)]
pub struct Conditional {
    pub branches: Vec<Branch>,
    pub otherwise: Option<Vec<Form>>,
}

/// `while c {..} else {..}`
#[derive(Clone, Debug, PartialEq)]
pub struct LoopForm {
    pub branch: Branch,
    pub otherwise: Option<Vec<Form>>,
}

/// Write a float so it always reads back as a float: `2.0`, not `2`.
pub fn write_float(out: &mut impl fmt::Write, value: f64) -> fmt::Result {
    if value.is_finite() && value.fract() == 0.0 {
        write!(out, "{value:.1}")
    } else {
        write!(out, "{value}")
    }
}

fn write_escaped(out: &mut impl fmt::Write, text: &str) -> fmt::Result {
    out.write_char('"')?;
    for c in text.chars() {
        match c {
            '\n' => out.write_str("\\n")?,
            '"' => out.write_str("\\\"")?,
            '\\' => out.write_str("\\\\")?,
            c => out.write_char(c)?,
        }
    }
    out.write_char('"')
}

fn write_spaced(f: &mut fmt::Formatter<'_>, forms: &[Form]) -> fmt::Result {
    for (i, form) in forms.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{form}")?;
    }
    Ok(())
}

fn write_block(f: &mut fmt::Formatter<'_>, body: &[Form]) -> fmt::Result {
    if body.is_empty() {
        return f.write_str("{}");
    }
    f.write_str("{ ")?;
    write_spaced(f, body)?;
    f.write_str(" }")
}

fn write_entries(f: &mut fmt::Formatter<'_>, bindings: &Bindings) -> fmt::Result {
    for (i, (key, value)) in bindings.iter().enumerate() {
        if i > 0 {
            f.write_char(' ')?;
        }
        write!(f, "{key}: {value}")?;
    }
    Ok(())
}

/// Renders canonical (English) source that parses back to the same form.
impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dialect = Dialect::english();
        let keywords = dialect.keywords();
        match self {
            Form::Null => f.write_str("null"),
            Form::Int(v) => write!(f, "{v}"),
            Form::Float(v) => write_float(f, *v),
            Form::Name(name) => f.write_str(name),
            Form::Str(text) => write_escaped(f, text),
            Form::List(items) => {
                f.write_char('[')?;
                write_spaced(f, items)?;
                f.write_char(']')
            }
            Form::Map(bindings) => {
                f.write_char('{')?;
                write_entries(f, bindings)?;
                f.write_char('}')
            }
            Form::Bind(bindings) => write_entries(f, bindings),
            Form::Function(def) => {
                write!(f, "{}({}) ", keywords.function, def.params.join(" "))?;
                write_block(f, &def.body)
            }
            Form::Call(call) => {
                f.write_char('(')?;
                write!(f, "{}", call.head)?;
                for arg in &call.args {
                    write!(f, " {arg}")?;
                }
                f.write_char(')')
            }
            Form::If(cond) => {
                for (i, branch) in cond.branches.iter().enumerate() {
                    let word = if i == 0 {
                        keywords.conditional
                    } else {
                        keywords.alternative
                    };
                    if i > 0 {
                        f.write_char(' ')?;
                    }
                    write!(f, "{word} {} ", branch.condition)?;
                    write_block(f, &branch.body)?;
                }
                if let Some(body) = &cond.otherwise {
                    write!(f, " {} ", keywords.fallback)?;
                    write_block(f, body)?;
                }
                Ok(())
            }
            Form::Loop(lp) => {
                write!(f, "{} {} ", keywords.repeat, lp.branch.condition)?;
                write_block(f, &lp.branch.body)?;
                if let Some(body) = &lp.otherwise {
                    write!(f, " {} ", keywords.fallback)?;
                    write_block(f, body)?;
                }
                Ok(())
            }
        }
    }
}
