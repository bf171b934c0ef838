//! # Number
//!
//! The numeric value flowing through the calculator.
//!
//! A number is either an integer or a float. Integer inputs stay integers
//! through add/subtract/multiply; mixing in a float promotes the result.
//! Equality is numeric across the two variants (`Int(3) == Float(3.0)`),
//! while `Display` keeps the variant visible (`"3"` vs `"3.0"`).

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Sub};

use super::error::{CalcError, CalcResult};

/// Decimal places kept for a non-integral square root
const SQRT_DECIMALS: i32 = 2;

/// An integer or floating-point value
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Whole number
    Int(i64),
    /// Floating-point number
    Float(f64),
}

impl Number {
    /// Value as a float (lossy for integers beyond 2^53)
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// The integer payload, if this is an `Int`
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::Float(_) => None,
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Number::Int(_))
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// True for `0`, `0.0` and `-0.0`
    pub fn is_zero(&self) -> bool {
        match *self {
            Number::Int(i) => i == 0,
            Number::Float(f) => f == 0.0,
        }
    }

    /// Strictly below zero. `-0.0` and NaN are not negative.
    pub fn is_negative(&self) -> bool {
        match *self {
            Number::Int(i) => i < 0,
            Number::Float(f) => f < 0.0,
        }
    }

    // ========================================================================
    // OPERATIONS THAT CAN FAIL OR CHANGE TYPE
    // ========================================================================

    /// Divide by `rhs`
    ///
    /// Fails on a zero divisor. A division with no remainder yields an
    /// `Int`; anything else yields the float quotient.
    pub fn divide(self, rhs: Number) -> CalcResult<Number> {
        if rhs.is_zero() {
            return Err(CalcError::InvalidArgument("divided by 0".to_string()));
        }

        match (self, rhs) {
            (Number::Int(a), Number::Int(b)) => match (a.checked_rem(b), a.checked_div(b)) {
                (Some(0), Some(q)) => Ok(Number::Int(q)),
                // Remainder, or i64::MIN / -1
                _ => Ok(Number::Float(a as f64 / b as f64)),
            },
            (a, b) => {
                let (a, b) = (a.as_f64(), b.as_f64());
                let quotient = a / b;
                if a % b == 0.0 {
                    if let Some(whole) = integral(quotient) {
                        return Ok(Number::Int(whole));
                    }
                }
                Ok(Number::Float(quotient))
            }
        }
    }

    /// Raise to the power `exponent`
    ///
    /// Always a float, including for integer operands (`pow(3, 3)` is `27.0`).
    pub fn pow(self, exponent: Number) -> Number {
        Number::Float(self.as_f64().powf(exponent.as_f64()))
    }

    /// Square root
    ///
    /// Fails on negative input. An integral root comes back as `Int`,
    /// otherwise the root is rounded to two decimal places.
    pub fn sqrt(self) -> CalcResult<Number> {
        if self.is_negative() {
            return Err(CalcError::InvalidArgument(
                "square root of a negative number".to_string(),
            ));
        }

        let root = self.as_f64().sqrt();
        Ok(match integral(root) {
            Some(whole) => Number::Int(whole),
            None => Number::Float(round_to(root, SQRT_DECIMALS)),
        })
    }
}

/// Whole-number value of `value`, if it has no fraction and fits an `i64`
fn integral(value: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        Some(value as i64)
    } else {
        None
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

// ============================================================================
// ARITHMETIC
// ============================================================================

macro_rules! int_or_float_op {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Number) -> Number {
                match (self, rhs) {
                    (Number::Int(a), Number::Int(b)) => a
                        .$checked(b)
                        .map(Number::Int)
                        .unwrap_or_else(|| Number::Float(a as f64 $op b as f64)),
                    (a, b) => Number::Float(a.as_f64() $op b.as_f64()),
                }
            }
        }
    };
}

int_or_float_op!(Add, add, checked_add, +);
int_or_float_op!(Sub, sub, checked_sub, -);
int_or_float_op!(Mul, mul, checked_mul, *);

// ============================================================================
// COMPARISON
// ============================================================================

impl PartialEq for Number {
    fn eq(&self, other: &Number) -> bool {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => a == b,
            (a, b) => a.as_f64() == b.as_f64(),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Number) -> Option<Ordering> {
        match (*self, *other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value.into())
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(v) => f.write_str(&format_float(v)),
        }
    }
}

/// Shortest round-trip text for a float, always carrying a fraction
///
/// Fixed notation is used while the decimal exponent is in `-4..=15`;
/// outside that range the value is written as `d.ddde±XX`.
fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` gives the shortest digits that round-trip, e.g. "6.799999999999999e-1"
    let scientific = format!("{:e}", value.abs());
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let sign = if value < 0.0 { "-" } else { "" };

    let body = if (-4..=15).contains(&exponent) {
        // Digits before the decimal point
        let point = exponent + 1;
        if point <= 0 {
            format!("0.{}{}", "0".repeat(point.unsigned_abs() as usize), digits)
        } else if point as usize >= digits.len() {
            format!("{}{}.0", digits, "0".repeat(point as usize - digits.len()))
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{}.{}", whole, fraction)
        }
    } else {
        let (lead, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{}.{}e{}{:02}", lead, rest, exp_sign, exponent.unsigned_abs())
    };

    format!("{}{}", sign, body)
}
