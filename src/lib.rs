//! Generic arithmetic over exact rationals and complex numbers.
//!
//! Values are tagged with their numeric family ([`Kind`]) and binary operators
//! are resolved through an [`OpTable`]. Two dispatch strategies are offered:
//! [`apply`] looks up the exact `(operator, lhs, rhs)` triple, while
//! [`coerce_apply`] first promotes one operand through a [`CoercionTable`]
//! so only same-family implementations are needed.

use thiserror::Error;

pub mod rational;
pub mod complex;
pub mod value;
pub mod table;
pub mod coercion;
pub mod dispatch;

pub use rational::{Rational, add_rational, sub_rational, mul_rational, div_rational};
pub use complex::{
    ComplexParts, ComplexRectangular, ComplexPolar,
    add_complex, sub_complex, mul_complex, div_complex,
    add_complex_and_rational, sub_complex_and_rational, mul_complex_and_rational,
    add_rational_and_complex, sub_rational_and_complex, mul_rational_and_complex,
};
pub use value::{Value, Kind, type_tag};
pub use table::{Op, OpTable, BinaryFn};
pub use coercion::{CoercionTable, CoercionFn, rational_to_complex};
pub use dispatch::{Dispatcher, apply, coerce_apply};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in rational arithmetic")]
    Overflow,

    #[error("Failed to cast Rational to Float")]
    RationalCast,

    #[error("Unsupported operation '{op}' between {lhs} and {rhs}")]
    UnsupportedOperation { op: Op, lhs: Kind, rhs: Kind },

    #[error("Unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("Cannot coerce {from} to {to}: unsupported source")]
    UnsupportedCoercionSource { from: Kind, to: Kind },

    #[error("No coercion possible between {from} and {to}")]
    NoCoercion { from: Kind, to: Kind },
}

pub type ArithResult<T> = Result<T, ArithError>;

#[doc(hidden)]
pub use paste;
