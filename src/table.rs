use std::{collections::HashMap, fmt};

use log::trace;
use strum::{Display, EnumCount, EnumIter, EnumString};

use crate::{
    complex::*,
    rational::*,
    value::{Kind, Value},
    ArithError, ArithResult,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    /// Parses one of `add`, `sub`, `mul`, `div`.
    pub fn from_name(name: &str) -> ArithResult<Self> {
        name.parse().map_err(|_| ArithError::UnknownOperator(name.to_owned()))
    }
}

pub type BinaryFn = fn(&Value, &Value) -> ArithResult<Value>;

/// Lifts a family function's return type into a dispatch result.
#[doc(hidden)]
pub trait IntoValueResult {
    fn into_value_result(self) -> ArithResult<Value>;
}

macro_rules! into_value_result {
    ($($kind:ty)*) => {
        $(
            impl IntoValueResult for $kind {
                fn into_value_result(self) -> ArithResult<Value> {
                    Ok(Value::from(self))
                }
            }

            impl IntoValueResult for ArithResult<$kind> {
                fn into_value_result(self) -> ArithResult<Value> {
                    self.map(Value::from)
                }
            }
        )*
    };
}

into_value_result!(Rational ComplexRectangular ComplexPolar);

/// Registers `$func` for `($op, $lhs, $rhs)`, wrapping it in an adapter that
/// unpacks both operands from [`Value`].
#[macro_export]
macro_rules! declare_op {
    ($table:expr, $op:ident, $lhs:ident, $rhs:ident, $func:path) => {$crate::paste::paste!{{
        fn adapter(x: &$crate::Value, y: &$crate::Value) -> $crate::ArithResult<$crate::Value> {
            match (x.[<as_ $lhs>](), y.[<as_ $rhs>]()) {
                (Some(a), Some(b)) => $crate::table::lift($func(a, b)),
                _ => Err($crate::ArithError::UnsupportedOperation {
                    op: $crate::Op::$op, lhs: x.kind(), rhs: y.kind()
                }),
            }
        }
        $table.register($crate::Op::$op, $crate::Kind::[<$lhs:camel>], $crate::Kind::[<$rhs:camel>], adapter);
    }}};
}

#[doc(hidden)]
pub fn lift<T: IntoValueResult>(x: T) -> ArithResult<Value> {
    x.into_value_result()
}

/// Maps `(operator, lhs tag, rhs tag)` to the function implementing it.
#[derive(Clone, Default)]
pub struct OpTable {
    entries: HashMap<(Op, Kind, Kind), BinaryFn>,
}

impl OpTable {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Same-family entries for every operator, plus the cross-family
    /// add, sub and mul. Cross-family division is left unregistered.
    pub fn standard() -> Self {
        let mut table = Self {
            entries: HashMap::with_capacity(Op::COUNT * Kind::COUNT * Kind::COUNT),
        };

        declare_op!(table, Add, rational, rational, add_rational);
        declare_op!(table, Sub, rational, rational, sub_rational);
        declare_op!(table, Mul, rational, rational, mul_rational);
        declare_op!(table, Div, rational, rational, div_rational);

        declare_op!(table, Add, complex, complex, add_complex);
        declare_op!(table, Sub, complex, complex, sub_complex);
        declare_op!(table, Mul, complex, complex, mul_complex);
        declare_op!(table, Div, complex, complex, div_complex);

        declare_op!(table, Add, complex, rational, add_complex_and_rational);
        declare_op!(table, Sub, complex, rational, sub_complex_and_rational);
        declare_op!(table, Mul, complex, rational, mul_complex_and_rational);
        declare_op!(table, Add, rational, complex, add_rational_and_complex);
        declare_op!(table, Sub, rational, complex, sub_rational_and_complex);
        declare_op!(table, Mul, rational, complex, mul_rational_and_complex);

        table
    }

    /// Returns the previously registered function, if any.
    pub fn register(&mut self, op: Op, lhs: Kind, rhs: Kind, func: BinaryFn) -> Option<BinaryFn> {
        trace!("registering {} for ({}, {})", op, lhs, rhs);
        self.entries.insert((op, lhs, rhs), func)
    }

    pub fn get(&self, op: Op, lhs: Kind, rhs: Kind) -> Option<BinaryFn> {
        self.entries.get(&(op, lhs, rhs)).copied()
    }

    pub fn supports(&self, op: Op, lhs: Kind, rhs: Kind) -> bool {
        self.entries.contains_key(&(op, lhs, rhs))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for OpTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
