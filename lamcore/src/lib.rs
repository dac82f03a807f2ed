//! Lamcore: a normal-order reduction engine for the untyped lambda calculus.
//!
//! The crate exposes one recursive expression language ([`expr::Expr`]) over
//! pure lambda terms plus two opaque host leaves — values and callbacks —
//! and an engine ([`reduce`]) that rewrites a tree to its normal form by
//! repeated capture-avoiding beta-reduction.
//!
//! Design shape
//!  - Expressions are owned trees; children are boxed and never shared, so
//!    duplication is always a deep copy and no locking discipline exists.
//!  - Binder identifiers are opaque integers from a process-wide counter,
//!    never reused; scope is resolved by identity, not by name.
//!  - Reduction is leftmost-outermost and fully recursing; one pass can
//!    chain several beta-steps at the same spine position, and
//!    [`reduce::evaluate`] iterates passes to a fixed point.
//!  - Host callbacks are invoked synchronously when a host function meets a
//!    host value in application position; each callback enforces its own
//!    payload contract.
//!
//! Example
//! ```
//! use lamcore::prelude::*;
//!
//! // (λx. x) applied to a host value reduces to that value.
//! let x = Binder::fresh();
//! let id = lam(x, var(x));
//! let result = evaluate(id.apply(host_value(7u64.to_le_bytes()))).unwrap();
//! assert_eq!(result.type_(), ExprType::HostValue);
//! ```

/// Binder identifiers and the process-wide fresh-id counter.
pub mod binder;
/// Central error enum and result alias.
pub mod error;
/// Expressions API: the sum type, builders, and pretty-printing.
pub mod expr;
/// Opaque host-side leaves: values and callbacks.
pub mod host;
/// Substitution and the reduce-to-normal-form driver.
pub mod reduce;

pub mod prelude {
    //! Convenient re-exports for end users.
    //!
    //! - The [`Expr`](crate::expr::Expr) tree and its discriminants
    //! - Free-function builders and the [`bind`](crate::expr::build::bind)
    //!   scoping sugar
    //! - Pretty-printing via [`PrettyExpr`](crate::expr::pretty::PrettyExpr)
    //! - The reduction entry points and error types
    pub use crate::binder::Binder;
    pub use crate::error::{LamError, LamResult};
    pub use crate::expr::{
        Expr,
        build::{app, bind, host_fn, host_value, lam, var},
        pretty::PrettyExpr,
        variant::ExprType,
    };
    pub use crate::host::{HostFn, HostValue, decode_u64};
    pub use crate::reduce::{
        Reduction, apply, evaluate, evaluate_bounded, reduce_once, substitute,
    };
}
