//! Li numbers: integers, floats and booleans.
//!
//! Integer arithmetic is checked; any float operand makes the result a float.
//! Booleans take part in arithmetic as `0` and `1`.

use std::cmp::Ordering;
use std::fmt;

use crate::errors::{division_by_zero, integer_overflow, EvalError};

#[derive(Clone, Copy, Debug)]
pub enum Number {
    Int(i64),
    Float(f64),
    Bool(bool),
}

/// Operands promoted to a common representation.
enum Pair {
    Ints(i64, i64),
    Floats(f64, f64),
}

impl Number {
    #[inline]
    fn promote(self, other: Number) -> Pair {
        match (self.as_int(), other.as_int()) {
            (Some(a), Some(b)) => Pair::Ints(a, b),
            _ => Pair::Floats(self.as_f64(), other.as_f64()),
        }
    }

    /// Integer view; `None` for floats.
    #[inline]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Number::Int(v) => Some(v),
            Number::Bool(b) => Some(i64::from(b)),
            Number::Float(_) => None,
        }
    }

    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(v) => v as f64,
            Number::Float(v) => v,
            Number::Bool(b) => f64::from(u8::from(b)),
        }
    }

    pub fn is_zero(self) -> bool {
        match self {
            Number::Int(v) => v == 0,
            Number::Float(v) => v == 0.0,
            Number::Bool(b) => !b,
        }
    }

    pub fn add(self, other: Number) -> Result<Number, EvalError> {
        match self.promote(other) {
            Pair::Ints(a, b) => a
                .checked_add(b)
                .map(Number::Int)
                .ok_or_else(|| integer_overflow("+")),
            Pair::Floats(a, b) => Ok(Number::Float(a + b)),
        }
    }

    pub fn sub(self, other: Number) -> Result<Number, EvalError> {
        match self.promote(other) {
            Pair::Ints(a, b) => a
                .checked_sub(b)
                .map(Number::Int)
                .ok_or_else(|| integer_overflow("-")),
            Pair::Floats(a, b) => Ok(Number::Float(a - b)),
        }
    }

    pub fn mul(self, other: Number) -> Result<Number, EvalError> {
        match self.promote(other) {
            Pair::Ints(a, b) => a
                .checked_mul(b)
                .map(Number::Int)
                .ok_or_else(|| integer_overflow("*")),
            Pair::Floats(a, b) => Ok(Number::Float(a * b)),
        }
    }

    /// True division: the result is always a float.
    pub fn div(self, other: Number) -> Result<Number, EvalError> {
        if other.is_zero() {
            return Err(division_by_zero());
        }
        Ok(Number::Float(self.as_f64() / other.as_f64()))
    }

    /// Numeric ordering across representations. `None` only involves NaN.
    pub fn compare(self, other: Number) -> Option<Ordering> {
        match self.promote(other) {
            Pair::Ints(a, b) => Some(a.cmp(&b)),
            Pair::Floats(a, b) => a.partial_cmp(&b),
        }
    }

    /// Round half to even, as an integer.
    #[allow(clippy::cast_possible_truncation)]
    pub fn round(self) -> Result<i64, EvalError> {
        match self {
            Number::Float(v) => {
                let rounded = v.round_ties_even();
                // i64::MAX as f64 rounds up to 2^63, which is out of range.
                if rounded.is_finite() && rounded >= -(2f64.powi(63)) && rounded < 2f64.powi(63) {
                    Ok(rounded as i64)
                } else {
                    Err(integer_overflow("round"))
                }
            }
            other => Ok(other.as_int().unwrap_or_default()),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        self.compare(*other) == Some(Ordering::Equal)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(v) => write!(f, "{v}"),
            Number::Float(v) => li_ir::write_float(f, *v),
            Number::Bool(b) => write!(f, "{b}"),
        }
    }
}
