//! Scalar-or-array numeric values with element-wise broadcast.
//!
//! Every physical quantity flowing through a cycle analysis is a [`Field`]:
//! either a single value or a one-dimensional array of values evaluated over
//! a flight envelope. Arithmetic is element-wise; a scalar broadcasts against
//! an array of any length, while two arrays must have the same length.
//!
//! Branch-sensitive formulas use [`Field::select`] so that each element is
//! classified independently instead of branching once for the whole array.

use crate::error::{TcError, TcResult};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Field {
    Scalar(f64),
    Array(Vec<f64>),
}

impl Field {
    pub fn scalar(value: f64) -> Self {
        Field::Scalar(value)
    }

    pub fn array(values: impl Into<Vec<f64>>) -> Self {
        Field::Array(values.into())
    }

    /// `None` for a scalar, `Some(len)` for an array.
    pub fn shape(&self) -> Option<usize> {
        match self {
            Field::Scalar(_) => None,
            Field::Array(values) => Some(values.len()),
        }
    }

    /// Element at `i` under broadcast indexing: a scalar yields the same
    /// value for every index.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds for an array field.
    pub fn at(&self, i: usize) -> f64 {
        match self {
            Field::Scalar(value) => *value,
            Field::Array(values) => values[i],
        }
    }

    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Field::Scalar(value) => Some(*value),
            Field::Array(_) => None,
        }
    }

    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Field::Scalar(value) => vec![*value],
            Field::Array(values) => values.clone(),
        }
    }

    /// Common array length of several fields, or `None` if all are scalar.
    ///
    /// # Errors
    ///
    /// Returns [`TcError::ShapeMismatch`] when two arrays disagree in length.
    pub fn broadcast_shape<'a, I>(fields: I, what: &'static str) -> TcResult<Option<usize>>
    where
        I: IntoIterator<Item = &'a Field>,
    {
        let mut shape: Option<usize> = None;
        for field in fields {
            if let Some(n) = field.shape() {
                match shape {
                    None => shape = Some(n),
                    Some(m) if m == n => {}
                    Some(m) => {
                        return Err(TcError::ShapeMismatch {
                            what,
                            expected: m,
                            got: n,
                        });
                    }
                }
            }
        }
        Ok(shape)
    }

    pub fn map(&self, f: impl Fn(f64) -> f64) -> Field {
        match self {
            Field::Scalar(value) => Field::Scalar(f(*value)),
            Field::Array(values) => Field::Array(values.iter().map(|&v| f(v)).collect()),
        }
    }

    /// Element-wise combination of two fields under broadcast.
    ///
    /// # Errors
    ///
    /// Returns [`TcError::ShapeMismatch`] when both are arrays of different
    /// lengths.
    pub fn zip_with(&self, other: &Field, f: impl Fn(f64, f64) -> f64) -> TcResult<Field> {
        match (self, other) {
            (Field::Scalar(a), Field::Scalar(b)) => Ok(Field::Scalar(f(*a, *b))),
            (Field::Scalar(a), Field::Array(b)) => {
                Ok(Field::Array(b.iter().map(|&bv| f(*a, bv)).collect()))
            }
            (Field::Array(a), Field::Scalar(b)) => {
                Ok(Field::Array(a.iter().map(|&av| f(av, *b)).collect()))
            }
            (Field::Array(a), Field::Array(b)) => {
                if a.len() != b.len() {
                    return Err(TcError::ShapeMismatch {
                        what: "element-wise operation",
                        expected: a.len(),
                        got: b.len(),
                    });
                }
                Ok(Field::Array(
                    a.iter().zip(b).map(|(&av, &bv)| f(av, bv)).collect(),
                ))
            }
        }
    }

    /// Element-wise conditional: where `mask` is non-zero take `when_true`,
    /// otherwise `when_false`. The array equivalent of a per-element `if`.
    pub fn select(mask: &Field, when_true: &Field, when_false: &Field) -> TcResult<Field> {
        let shape = Field::broadcast_shape([mask, when_true, when_false], "select")?;
        let pick = |i: usize| {
            if mask.at(i) != 0.0 {
                when_true.at(i)
            } else {
                when_false.at(i)
            }
        };
        match shape {
            None => Ok(Field::Scalar(pick(0))),
            Some(n) => Ok(Field::Array((0..n).map(pick).collect())),
        }
    }

    /// Element-wise `self < other` as a 1.0/0.0 mask for [`Field::select`].
    pub fn lt(&self, other: &Field) -> TcResult<Field> {
        self.zip_with(other, |a, b| if a < b { 1.0 } else { 0.0 })
    }

    pub fn powf(&self, exponent: f64) -> Field {
        self.map(|v| v.powf(exponent))
    }

    pub fn sqrt(&self) -> Field {
        self.map(f64::sqrt)
    }

    pub fn all(&self, pred: impl Fn(f64) -> bool) -> bool {
        match self {
            Field::Scalar(value) => pred(*value),
            Field::Array(values) => values.iter().all(|&v| pred(v)),
        }
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Scalar(value)
    }
}

impl From<Vec<f64>> for Field {
    fn from(values: Vec<f64>) -> Self {
        Field::Array(values)
    }
}

impl From<&[f64]> for Field {
    fn from(values: &[f64]) -> Self {
        Field::Array(values.to_vec())
    }
}

// Arithmetic operators assume shapes already agree (callers validate with
// `broadcast_shape` at their entry points) and panic on disagreement, as
// element-wise numeric containers conventionally do.
macro_rules! impl_field_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl core::ops::$trait<&Field> for &Field {
            type Output = Field;
            fn $method(self, rhs: &Field) -> Field {
                self.zip_with(rhs, |a, b| a $op b)
                    .expect("field shapes must agree; validate with broadcast_shape first")
            }
        }

        impl core::ops::$trait<Field> for Field {
            type Output = Field;
            fn $method(self, rhs: Field) -> Field {
                &self $op &rhs
            }
        }

        impl core::ops::$trait<&Field> for Field {
            type Output = Field;
            fn $method(self, rhs: &Field) -> Field {
                &self $op rhs
            }
        }

        impl core::ops::$trait<Field> for &Field {
            type Output = Field;
            fn $method(self, rhs: Field) -> Field {
                self $op &rhs
            }
        }

        impl core::ops::$trait<f64> for &Field {
            type Output = Field;
            fn $method(self, rhs: f64) -> Field {
                self.map(|a| a $op rhs)
            }
        }

        impl core::ops::$trait<f64> for Field {
            type Output = Field;
            fn $method(self, rhs: f64) -> Field {
                self.map(|a| a $op rhs)
            }
        }

        impl core::ops::$trait<&Field> for f64 {
            type Output = Field;
            fn $method(self, rhs: &Field) -> Field {
                rhs.map(|b| self $op b)
            }
        }

        impl core::ops::$trait<Field> for f64 {
            type Output = Field;
            fn $method(self, rhs: Field) -> Field {
                rhs.map(|b| self $op b)
            }
        }
    };
}

impl_field_binop!(Add, add, +);
impl_field_binop!(Sub, sub, -);
impl_field_binop!(Mul, mul, *);
impl_field_binop!(Div, div, /);

impl core::ops::Neg for &Field {
    type Output = Field;
    fn neg(self) -> Field {
        self.map(|v| -v)
    }
}

impl core::ops::Neg for Field {
    type Output = Field;
    fn neg(self) -> Field {
        self.map(|v| -v)
    }
}
