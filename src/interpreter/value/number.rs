use std::fmt::Display;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_to_i64_exact,
};

/// Time units that convert into each other, with their factor in seconds.
///
/// Ordered from the largest unit to the smallest; the detailed format walks
/// them in this order.
pub const TIME_UNITS: [(&str, f64); 4] = [("d", 86_400.0), ("h", 3_600.0), ("m", 60.0), ("s", 1.0)];

/// Returns the factor in seconds of a time unit, or `None` for any other unit
/// (including no unit at all).
///
/// # Example
/// ```
/// use symcalc::interpreter::value::number::time_factor;
///
/// assert_eq!(time_factor(Some("h")), Some(3600.0));
/// assert_eq!(time_factor(Some("deg")), None);
/// assert_eq!(time_factor(None), None);
/// ```
#[must_use]
pub fn time_factor(unit: Option<&str>) -> Option<f64> {
    let unit = unit?;
    TIME_UNITS.iter()
              .find(|(name, _)| *name == unit)
              .map(|(_, factor)| *factor)
}

/// A concrete scalar, optionally tagged with a unit label.
///
/// Units are opaque strings. The only conversions known are between the
/// [`TIME_UNITS`]; any other composite unit is built by string composition
/// (`"1/s"`, `"m/s"`).
#[derive(Debug, Clone, PartialEq)]
pub struct Number {
    /// The numeric value.
    pub value: f64,
    /// The unit label, if any.
    pub unit:  Option<String>,
}

impl Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.unit {
            Some(unit) => write!(f, "{} {unit}", format_float(self.value)),
            None => write!(f, "{}", format_float(self.value)),
        }
    }
}

impl Number {
    /// Constructs a number without a unit.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self { value, unit: None }
    }

    /// Constructs a number tagged with `unit`.
    #[must_use]
    pub fn with_unit_label(value: f64, unit: impl Into<String>) -> Self {
        Self { value,
               unit: Some(unit.into()) }
    }

    /// Attaches a unit to a number that has none.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnitAlreadySet` if the number already carries a
    /// unit.
    ///
    /// # Example
    /// ```
    /// use symcalc::interpreter::value::number::Number;
    ///
    /// let tagged = Number::new(2.0).with_unit("s").unwrap();
    /// assert_eq!(tagged.to_string(), "2 s");
    /// assert!(tagged.with_unit("m").is_err());
    /// ```
    pub fn with_unit(&self, unit: &str) -> EvalResult<Self> {
        if let Some(existing) = &self.unit {
            return Err(RuntimeError::UnitAlreadySet { unit: existing.clone() });
        }
        Ok(Self::with_unit_label(self.value, unit))
    }

    /// Adds two numbers.
    ///
    /// Equal units (or no unit on both sides) combine directly. Two different
    /// time units are converted to seconds and the result is tagged `"s"`.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnitMismatch` for any other unit combination.
    pub fn try_add(&self, other: &Self) -> EvalResult<Self> {
        if self.unit == other.unit {
            return Ok(Self { value: self.value + other.value,
                             unit:  self.unit.clone(), });
        }

        match (time_factor(self.unit.as_deref()), time_factor(other.unit.as_deref())) {
            (Some(left), Some(right)) => {
                Ok(Self::with_unit_label(self.value * left + other.value * right, "s"))
            },
            _ => Err(RuntimeError::UnitMismatch { details: format!("cannot add '{other}' to '{self}'") }),
        }
    }

    /// Subtracts `other` by adding its negation, so the unit rules of
    /// [`Number::try_add`] apply unchanged.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnitMismatch` for incompatible units.
    pub fn try_sub(&self, other: &Self) -> EvalResult<Self> {
        self.try_add(&Self::new(-1.0).try_mul(other)?)
    }

    /// Multiplies two numbers. The result keeps whichever unit is present.
    ///
    /// # Errors
    /// Returns `RuntimeError::UnitMismatch` if both operands carry a unit.
    pub fn try_mul(&self, other: &Self) -> EvalResult<Self> {
        if self.unit.is_some() && other.unit.is_some() {
            return Err(RuntimeError::UnitMismatch { details: format!("cannot multiply '{self}' by '{other}'") });
        }
        Ok(Self { value: self.value * other.value,
                  unit:  self.unit.clone().or_else(|| other.unit.clone()), })
    }

    /// Divides two numbers, composing the units as strings.
    ///
    /// | dividend | divisor | result unit |
    /// |----------|---------|-------------|
    /// | `u`      | `u`     | none        |
    /// | none     | `u`     | `1/u`       |
    /// | `u`      | none    | `u`         |
    /// | `u1`     | `u2`    | `u1/u2`     |
    ///
    /// Division by zero follows IEEE semantics.
    #[must_use]
    pub fn div(&self, other: &Self) -> Self {
        let unit = match (&self.unit, &other.unit) {
            (left, right) if left == right => None,
            (None, Some(right)) => Some(format!("1/{right}")),
            (Some(left), None) => Some(left.clone()),
            (Some(left), Some(right)) => Some(format!("{left}/{right}")),
            (None, None) => None,
        };
        Self { value: self.value / other.value,
               unit }
    }

    /// Remainder of the bare values; units are dropped.
    #[must_use]
    pub fn modulo(&self, other: &Self) -> Self {
        Self::new(self.value % other.value)
    }

    /// Power of the bare values; units are dropped.
    #[must_use]
    pub fn power(&self, exponent: &Self) -> Self {
        Self::new(self.value.powf(exponent.value))
    }

    /// Formats the number, expanding a value in seconds into a breakdown.
    ///
    /// For the unit `"s"` the first line is the composite breakdown
    /// (`"2d 9h 29m 19s"`), followed by one line per time unit with the value
    /// converted to it. Any other number, and any non-finite value, uses its
    /// plain format.
    ///
    /// # Example
    /// ```
    /// use symcalc::interpreter::value::number::Number;
    ///
    /// let n = Number::with_unit_label(5400.0, "s");
    /// assert_eq!(n.detailed_format(), "0d 1h 30m 0s\n0.0625 d\n1.5 h\n90 m\n5400 s");
    /// assert_eq!(Number::new(2.5).detailed_format(), "2.5");
    /// ```
    #[must_use]
    pub fn detailed_format(&self) -> String {
        if self.unit.as_deref() != Some("s") || !self.value.is_finite() {
            return self.to_string();
        }

        let mut remainder = self.value;
        let mut breakdown = Vec::with_capacity(TIME_UNITS.len());
        for (name, factor) in TIME_UNITS {
            breakdown.push(format!("{}{name}", format_float((remainder / factor).floor())));
            remainder %= factor;
        }

        let conversions = TIME_UNITS.iter()
                                    .map(|(name, factor)| {
                                        format!("{} {name}", format_float(self.value / factor))
                                    })
                                    .collect::<Vec<_>>();

        format!("{}\n{}", breakdown.join(" "), conversions.join("\n"))
    }
}

/// Formats a float the way the calculator prints numbers.
///
/// Integral values print as integer literals, infinities and NaN print as
/// `Infinity`, `-Infinity` and `NaN`, and everything else uses the shortest
/// representation that round-trips.
///
/// # Example
/// ```
/// use symcalc::interpreter::value::number::format_float;
///
/// assert_eq!(format_float(4.0), "4");
/// assert_eq!(format_float(-0.0), "0");
/// assert_eq!(format_float(0.5), "0.5");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-Infinity");
/// ```
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    f64_to_i64_exact(value).map_or_else(|| value.to_string(), |n| n.to_string())
}
