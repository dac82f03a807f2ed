use strum::EnumIs;
use thiserror::Error;

use crate::expr::variant::ExprType;

/// Errors raised by the reduction engine.
///
/// Both kinds are calculus-level contract violations with no local recovery:
/// they propagate out of `apply`/`evaluate` and abort that evaluation. There
/// is no partial-result semantics.
#[derive(Debug, Clone, PartialEq, Eq, EnumIs, Error)]
pub enum LamError {
    /// An application step was attempted on a pairing that is neither an
    /// abstraction applied to an argument nor a host function applied to a
    /// host value.
    #[error(
        "Cannot apply an expression of kind `{func}` to an argument of kind `{arg}`. Only lambda abstractions may be applied to arbitrary arguments, and host functions only to host values."
    )]
    TypeMismatch { func: ExprType, arg: ExprType },

    /// A host callback received a payload that does not match the shape it
    /// expects. Each registered callback enforces its own contract.
    #[error("Host function `{label}` rejected its payload: {reason}")]
    HostContractViolation { label: &'static str, reason: String },
}

pub type LamResult<T> = Result<T, LamError>;
