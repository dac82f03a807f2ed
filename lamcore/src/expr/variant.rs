use strum::{Display, EnumIter};

/// Discriminant identifying the outer constructor of an
/// [`Expr`](crate::expr::Expr) node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum ExprType {
    // Leaves
    Var,
    HostValue,
    HostFn,

    // Binding
    Lambda,

    // Binary
    Call,
}
