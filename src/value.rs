use std::{fmt, ops::*};

use strum::{AsRefStr, Display, EnumCount, EnumIter};

use crate::{
    complex::{ComplexParts, ComplexPolar, ComplexRectangular},
    dispatch::coerce_apply,
    rational::Rational,
    table::Op,
    ArithError,
};

/// The numeric family a value belongs to, used as a dispatch key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, EnumCount, EnumIter, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Kind {
    Rational,
    Complex,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Rational(Rational),
    Rectangular(ComplexRectangular),
    Polar(ComplexPolar),
}

/// Returns the tag of `x`. Both complex representations share [`Kind::Complex`].
pub fn type_tag(x: &Value) -> Kind {
    x.kind()
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Rational(_) => Kind::Rational,
            Self::Rectangular(_) | Self::Polar(_) => Kind::Complex,
        }
    }

    pub fn as_rational(&self) -> Option<&Rational> {
        match self {
            Self::Rational(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_complex(&self) -> Option<&dyn ComplexParts> {
        match self {
            Self::Rectangular(z) => Some(z),
            Self::Polar(z) => Some(z),
            Self::Rational(_) => None,
        }
    }

    /// Rationals compare exactly, complex values by parts within `eps`
    /// regardless of representation.
    pub fn approx_eq(&self, other: &Value, eps: f64) -> bool {
        match (self, other) {
            (Self::Rational(a), Self::Rational(b)) => a == b,
            (a, b) => match (a.as_complex(), b.as_complex()) {
                (Some(a), Some(b)) => a.approx_eq(b, eps),
                _ => false,
            }
        }
    }

    pub fn repr(&self) -> String {
        match self {
            Self::Rational(r) => r.repr(),
            Self::Rectangular(z) => z.repr(),
            Self::Polar(z) => z.repr(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rational(r) => write!(f, "{}", r),
            Self::Rectangular(z) => write!(f, "{}", z),
            Self::Polar(z) => write!(f, "{}", z),
        }
    }
}

macro_rules! value_from {
    ($variant:ident, $($kind:ty)*) => {
        $(
            impl From<$kind> for Value {
                fn from(x: $kind) -> Self {
                    Self::$variant(x.into())
                }
            }
        )*
    };
}

value_from!(Rational, Rational i8 i16 i32 i64 u8 u16 u32);
value_from!(Rectangular, ComplexRectangular);
value_from!(Polar, ComplexPolar);

// Operators go through the coercing dispatcher, so `&rational + &complex`
// promotes the rational first.
macro_rules! impl_numeric_op {
    ($optrait:ident, $fnname:ident, $op:ident) => {
        impl $optrait for &Value {
            type Output = Result<Value, ArithError>;
            fn $fnname(self, other: Self) -> Self::Output {
                coerce_apply(Op::$op, self, other)
            }
        }

        impl $optrait for Value {
            type Output = Result<Value, ArithError>;
            fn $fnname(self, other: Self) -> Self::Output {
                coerce_apply(Op::$op, &self, &other)
            }
        }
    }
}

impl_numeric_op!(Add, add, Add);
impl_numeric_op!(Sub, sub, Sub);
impl_numeric_op!(Mul, mul, Mul);
impl_numeric_op!(Div, div, Div);
