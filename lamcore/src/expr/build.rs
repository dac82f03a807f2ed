//! Ergonomic constructors for expression trees.
//!
//! Free-function builders mirror the node shapes one-to-one; [`bind`] adds
//! the scoping sugar for introducing a fresh binder together with its
//! abstraction.

use crate::binder::Binder;
use crate::error::LamResult;
use crate::expr::Expr;
use crate::host::{HostFn, HostValue};

/// Build a leaf referencing `binder`.
#[inline]
pub fn var(binder: Binder) -> Expr {
    Expr::Var(binder)
}

/// Build an abstraction with binder `arg` and body `body`.
#[inline]
pub fn lam(arg: Binder, body: Expr) -> Expr {
    Expr::Lambda {
        arg,
        body: Box::new(body),
    }
}

/// Build an application of `func` to `arg`.
#[inline]
pub fn app(func: Expr, arg: Expr) -> Expr {
    Expr::Call {
        func: Box::new(func),
        arg: Box::new(arg),
    }
}

/// Build a host-value leaf from raw bytes.
#[inline]
pub fn host_value(bytes: impl AsRef<[u8]>) -> Expr {
    Expr::HostValue(HostValue::new(bytes))
}

/// Register a host callback as an expression leaf.
#[inline]
pub fn host_fn(
    label: &'static str,
    callback: impl Fn(&[u8]) -> LamResult<Expr> + 'static,
) -> Expr {
    Expr::HostFn(HostFn::new(label, callback))
}

/// Introduce a fresh binder scoped through `body`.
///
/// `bind(|x| app(var(x), var(x)))` builds `λx. x x` without naming the
/// binder out-of-line.
pub fn bind(body: impl FnOnce(Binder) -> Expr) -> Expr {
    let arg = Binder::fresh();
    lam(arg, body(arg))
}

impl Expr {
    /// Call this expression with the given argument: `self(arg)`.
    #[inline]
    pub fn apply(self, arg: Expr) -> Expr {
        app(self, arg)
    }
}

impl From<Binder> for Expr {
    fn from(binder: Binder) -> Expr {
        Expr::Var(binder)
    }
}
