use std::{collections::HashMap, fmt};

use log::trace;

use crate::{
    complex::ComplexRectangular,
    value::{Kind, Value},
    ArithError, ArithResult,
};

pub type CoercionFn = fn(&Value) -> ArithResult<Value>;

/// Promotes a rational to a rectangular complex with no imaginary part.
pub fn rational_to_complex(x: &Value) -> ArithResult<Value> {
    match x {
        Value::Rational(r) => Ok(ComplexRectangular::new(r.to_f64()?, 0.0).into()),
        v => Err(ArithError::UnsupportedCoercionSource { from: v.kind(), to: Kind::Complex }),
    }
}

/// Directed conversions between families, keyed by `(source, target)`.
#[derive(Clone, Default)]
pub struct CoercionTable {
    entries: HashMap<(Kind, Kind), CoercionFn>,
}

impl CoercionTable {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Only rational to complex. The reverse would lose the imaginary part.
    pub fn standard() -> Self {
        let mut table = Self::new();
        table.register(Kind::Rational, Kind::Complex, rational_to_complex);
        table
    }

    pub fn register(&mut self, from: Kind, to: Kind, func: CoercionFn) -> Option<CoercionFn> {
        trace!("registering coercion {} -> {}", from, to);
        self.entries.insert((from, to), func)
    }

    pub fn get(&self, from: Kind, to: Kind) -> Option<CoercionFn> {
        self.entries.get(&(from, to)).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for CoercionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.entries.keys()).finish()
    }
}
