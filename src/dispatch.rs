use std::borrow::Cow;

use lazy_static::lazy_static;
use log::{debug, trace};

use crate::{
    coercion::CoercionTable,
    table::{Op, OpTable},
    value::Value,
    ArithError, ArithResult,
};

lazy_static! {
    static ref STANDARD: Dispatcher = Dispatcher::standard();
}

/// Resolves binary operators on tagged values through an [`OpTable`],
/// optionally promoting operands through a [`CoercionTable`] first.
#[derive(Clone, Debug, Default)]
pub struct Dispatcher {
    ops: OpTable,
    coercions: CoercionTable,
}

impl Dispatcher {
    pub fn new(ops: OpTable, coercions: CoercionTable) -> Self {
        Self { ops, coercions }
    }

    pub fn standard() -> Self {
        Self::new(OpTable::standard(), CoercionTable::standard())
    }

    pub fn ops(&self) -> &OpTable {
        &self.ops
    }

    pub fn coercions(&self) -> &CoercionTable {
        &self.coercions
    }

    /// Looks up the exact `(op, tag(x), tag(y))` entry. Every supported
    /// pairing must be registered; no coercion is attempted.
    pub fn apply(&self, op: Op, x: &Value, y: &Value) -> ArithResult<Value> {
        let (lhs, rhs) = (x.kind(), y.kind());
        match self.ops.get(op, lhs, rhs) {
            Some(func) => {
                trace!("apply {} ({}, {})", op, lhs, rhs);
                func(x, y)
            }
            None => {
                debug!("apply: no implementation of {} for ({}, {})", op, lhs, rhs);
                Err(ArithError::UnsupportedOperation { op, lhs, rhs })
            }
        }
    }

    /// Brings both operands into one family, then applies the same-family
    /// entry for `op`.
    ///
    /// When the tags differ, a coercion from `x`'s family to `y`'s is tried
    /// first, then the reverse. Only one hop is taken. If neither direction
    /// is registered the result is [`ArithError::NoCoercion`] and no
    /// arithmetic is performed.
    pub fn coerce_apply(&self, op: Op, x: &Value, y: &Value) -> ArithResult<Value> {
        let (tx, ty) = (x.kind(), y.kind());
        let (x, y, tag) = if tx == ty {
            (Cow::Borrowed(x), Cow::Borrowed(y), tx)
        } else if let Some(coerce) = self.coercions.get(tx, ty) {
            debug!("coerce_apply {}: promoting lhs {} -> {}", op, tx, ty);
            (Cow::Owned(coerce(x)?), Cow::Borrowed(y), ty)
        } else if let Some(coerce) = self.coercions.get(ty, tx) {
            debug!("coerce_apply {}: promoting rhs {} -> {}", op, ty, tx);
            (Cow::Borrowed(x), Cow::Owned(coerce(y)?), tx)
        } else {
            debug!("coerce_apply {}: no coercion between {} and {}", op, tx, ty);
            return Err(ArithError::NoCoercion { from: tx, to: ty })
        };

        let func = self.ops.get(op, tag, tag)
            .ok_or(ArithError::UnsupportedOperation { op, lhs: tag, rhs: tag })?;
        trace!("coerce_apply {} ({}, {})", op, tag, tag);
        func(&x, &y)
    }
}

/// [`Dispatcher::apply`] on the standard tables.
pub fn apply(op: Op, x: &Value, y: &Value) -> ArithResult<Value> {
    STANDARD.apply(op, x, y)
}

/// [`Dispatcher::coerce_apply`] on the standard tables.
pub fn coerce_apply(op: Op, x: &Value, y: &Value) -> ArithResult<Value> {
    STANDARD.coerce_apply(op, x, y)
}
