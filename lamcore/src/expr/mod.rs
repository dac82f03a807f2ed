//! Expression trees: one recursive sum type and its structural operations.
//!
//! Role
//! - Provide a single expression language covering pure lambda terms plus
//!   two opaque host leaves (values and callbacks).
//! - Children are exclusively owned; duplication is always a deep copy, so
//!   no two live trees ever share a mutable subtree and no locking
//!   discipline exists anywhere in the crate.
//!
//! Example
//! ```
//! use lamcore::prelude::*;
//!
//! let x = Binder::fresh();
//! let id = lam(x, var(x));
//! assert_eq!(id.type_(), ExprType::Lambda);
//! assert!(id.clone() == id);
//! ```

pub mod build;
pub mod pretty;
pub mod variant;

use smallvec::SmallVec;
use strum::EnumIs;

use crate::binder::Binder;
use crate::expr::variant::ExprType;
use crate::host::{HostFn, HostValue};

/// A lambda-calculus expression with opaque host leaves.
///
/// Equality semantics
/// - [`PartialEq`] compares by structure: same constructors, same binder
///   identities, pairwise-equal children. Host values compare by payload;
///   host functions by callback identity (see [`HostFn`]).
#[derive(Debug, Clone, EnumIs)]
pub enum Expr {
    /// Occurrence of a bound variable.
    Var(Binder),

    /// A function literal. `arg` scopes every [`Expr::Var`] inside `body`
    /// that was introduced by this abstraction.
    Lambda {
        /// The binder this abstraction introduces.
        arg: Binder,
        /// The abstraction body, exclusively owned.
        body: Box<Expr>,
    },

    /// A pending or already-reduced function call.
    Call {
        /// Function position, exclusively owned.
        func: Box<Expr>,
        /// Argument position, exclusively owned.
        arg: Box<Expr>,
    },

    /// An atomic value produced by host code.
    HostValue(HostValue),

    /// A host-implemented function.
    HostFn(HostFn),
}

impl Expr {
    /// Return the discriminant identifying the kind of this node.
    #[inline]
    pub fn type_(&self) -> ExprType {
        match self {
            Expr::Var(_) => ExprType::Var,
            Expr::Lambda { .. } => ExprType::Lambda,
            Expr::Call { .. } => ExprType::Call,
            Expr::HostValue(_) => ExprType::HostValue,
            Expr::HostFn(_) => ExprType::HostFn,
        }
    }

    /// Rewrite every occurrence of `old` reachable through this tree to
    /// `new`, including the introducing [`Expr::Lambda`] binder.
    ///
    /// Global uniqueness of fresh identifiers means `old` has at most one
    /// introduction site, so the walk never has to reason about shadowing.
    pub fn rename(&mut self, old: Binder, new: Binder) {
        match self {
            Expr::Var(b) => {
                if *b == old {
                    *b = new;
                }
            }
            Expr::Lambda { arg, body } => {
                if *arg == old {
                    *arg = new;
                }
                body.rename(old, new);
            }
            Expr::Call { func, arg } => {
                func.rename(old, new);
                arg.rename(old, new);
            }
            Expr::HostValue(_) | Expr::HostFn(_) => {}
        }
    }

    /// Whether `b` occurs free in this expression.
    ///
    /// Does not descend into an abstraction that rebinds `b`; that cannot
    /// arise for freshly minted binders, but hand-built trees may alias them.
    pub fn occurs_free(&self, b: Binder) -> bool {
        let mut stack: SmallVec<[&Expr; 12]> = SmallVec::new();
        stack.push(self);

        while let Some(node) = stack.pop() {
            match node {
                Expr::Var(v) if *v == b => return true,
                Expr::Var(_) | Expr::HostValue(_) | Expr::HostFn(_) => {}
                Expr::Lambda { arg, body } => {
                    if *arg != b {
                        stack.push(body.as_ref());
                    }
                }
                Expr::Call { func, arg } => {
                    stack.push(func.as_ref());
                    stack.push(arg.as_ref());
                }
            }
        }

        false
    }
}

impl PartialEq for Expr {
    /// Run structural equality comparison between two expressions. Expect
    /// O(n) complexity in the number of nodes in the worst case.
    fn eq(&self, other: &Self) -> bool {
        let mut stack: SmallVec<[(&Expr, &Expr); 12]> = SmallVec::new();
        stack.push((self, other));

        // Iterate until we find a mismatch or exhaust the stack
        while let Some((a, b)) = stack.pop() {
            // Quick path: exactly the same node
            if std::ptr::eq(a, b) {
                continue;
            }

            match (a, b) {
                (Expr::Var(x), Expr::Var(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (
                    Expr::Lambda { arg: xa, body: xb },
                    Expr::Lambda { arg: ya, body: yb },
                ) => {
                    if xa != ya {
                        return false;
                    }
                    stack.push((xb.as_ref(), yb.as_ref()));
                }
                (
                    Expr::Call { func: xf, arg: xa },
                    Expr::Call { func: yf, arg: ya },
                ) => {
                    stack.push((xf.as_ref(), yf.as_ref()));
                    stack.push((xa.as_ref(), ya.as_ref()));
                }
                (Expr::HostValue(x), Expr::HostValue(y)) => {
                    if x != y {
                        return false;
                    }
                }
                (Expr::HostFn(x), Expr::HostFn(y)) => {
                    if x != y {
                        return false;
                    }
                }
                _ => return false,
            }
        }

        true
    }
}

impl Eq for Expr {}
