//! Substitution and the reduce-to-normal-form driver.
//!
//! Role
//! - Capture-avoiding substitution over owned trees.
//! - A leftmost-outermost, fully-recursing reduction pass, iterated to a
//!   fixed point by [`evaluate`].
//!
//! Ownership
//! - Every entry point consumes its expression arguments. Anything that must
//!   survive a call is deep-copied by the caller first; the engine never
//!   mutates a subtree reachable from two places.

use std::collections::HashMap;

use log::{debug, trace};
use strum::EnumIs;

use crate::binder::Binder;
use crate::error::{LamError, LamResult};
use crate::expr::Expr;
use crate::expr::build::{app, lam};

/// Replace every free occurrence of `target` inside `body` with a copy of
/// `replacement`.
///
/// Both trees are consumed. Each spliced copy has the binders introduced
/// inside `replacement` re-minted, so splicing at several occurrences never
/// duplicates a binder id and spliced-in binders never collide with binders
/// already in scope at the insertion point; free references inside the
/// replacement are preserved as-is.
pub fn substitute(body: Expr, target: Binder, replacement: Expr) -> Expr {
    subst(body, target, &replacement)
}

fn subst(body: Expr, target: Binder, replacement: &Expr) -> Expr {
    match body {
        Expr::Var(b) if b == target => refresh_binders(replacement.clone()),

        // Host leaves contain no binders; a non-matching variable was never
        // going to be affected.
        leaf @ (Expr::Var(_) | Expr::HostValue(_) | Expr::HostFn(_)) => leaf,

        Expr::Lambda { arg, mut body } => {
            // A binder aliased by a free reference in the replacement would
            // capture it; rename the abstraction away first. Freshly minted
            // binders are unique, so this only fires for hand-built trees.
            if replacement.occurs_free(arg) {
                let renamed = Binder::fresh();
                body.rename(arg, renamed);
                lam(renamed, subst(*body, target, replacement))
            } else {
                lam(arg, subst(*body, target, replacement))
            }
        }

        Expr::Call { func, arg } => app(
            subst(*func, target, replacement),
            subst(*arg, target, replacement),
        ),
    }
}

/// Re-mint every binder introduced inside `e`, rewriting its occurrences.
///
/// References to binders introduced outside `e` are left untouched.
fn refresh_binders(e: Expr) -> Expr {
    fn go(e: Expr, fresh: &mut HashMap<Binder, Binder>) -> Expr {
        match e {
            Expr::Var(b) => Expr::Var(fresh.get(&b).copied().unwrap_or(b)),
            Expr::Lambda { arg, body } => {
                let renamed = Binder::fresh();
                let shadowed = fresh.insert(arg, renamed);
                let body = go(*body, fresh);
                match shadowed {
                    Some(prev) => {
                        fresh.insert(arg, prev);
                    }
                    None => {
                        fresh.remove(&arg);
                    }
                }
                lam(renamed, body)
            }
            Expr::Call { func, arg } => app(go(*func, fresh), go(*arg, fresh)),
            leaf @ (Expr::HostValue(_) | Expr::HostFn(_)) => leaf,
        }
    }

    go(e, &mut HashMap::new())
}

/// Perform one application step.
///
/// The only legal pairings are an abstraction applied to an arbitrary
/// argument and a host function applied to a host value; anything else is a
/// [`LamError::TypeMismatch`]. The calculus has no runtime recovery for an
/// ill-typed application, so the error aborts the evaluation that reached it.
pub fn apply(func: Expr, arg: Expr) -> LamResult<Expr> {
    match (func, arg) {
        (Expr::Lambda { arg: binder, body }, value) => Ok(substitute(*body, binder, value)),
        (Expr::HostFn(host), Expr::HostValue(value)) => host.invoke(value.bytes()),
        (func, arg) => Err(LamError::TypeMismatch {
            func: func.type_(),
            arg: arg.type_(),
        }),
    }
}

/// Beta-step budget threaded through a pass.
enum Fuel {
    Unlimited,
    Limited(usize),
}

impl Fuel {
    /// Consume one step; `false` means the budget is spent.
    fn take(&mut self) -> bool {
        match self {
            Fuel::Unlimited => true,
            Fuel::Limited(0) => false,
            Fuel::Limited(n) => {
                *n -= 1;
                true
            }
        }
    }
}

#[derive(Default)]
struct PassState {
    /// At least one redex fired during the pass.
    progressed: bool,
    /// A redex was found but the step budget refused it.
    stalled: bool,
}

fn is_redex(func: &Expr, arg: &Expr) -> bool {
    func.is_lambda() || (func.is_host_fn() && arg.is_host_value())
}

fn reduce_pass(e: Expr, state: &mut PassState, fuel: &mut Fuel) -> LamResult<Expr> {
    match e {
        leaf @ (Expr::Var(_) | Expr::HostValue(_) | Expr::HostFn(_)) => Ok(leaf),

        Expr::Lambda { arg, body } => Ok(lam(arg, reduce_pass(*body, state, fuel)?)),

        Expr::Call { func, arg } => {
            // Normalize both operands first, then chase the spine: applying
            // may expose another redex at the same position (currying), and
            // chaining those here means one pass instead of one pass each.
            let mut node = app(
                reduce_pass(*func, state, fuel)?,
                reduce_pass(*arg, state, fuel)?,
            );
            loop {
                match node {
                    Expr::Call { func, arg } if is_redex(&func, &arg) => {
                        if !fuel.take() {
                            state.stalled = true;
                            return Ok(Expr::Call { func, arg });
                        }
                        state.progressed = true;
                        node = apply(*func, *arg)?;
                    }
                    done => return Ok(done),
                }
            }
        }
    }
}

/// Run one full reduction pass over `e`, returning the reduced tree and
/// whether any redex fired.
///
/// The pass recurses everywhere in leftmost-outermost order: abstraction
/// bodies are reduced, and for an application both operands are reduced
/// before the node itself is examined. Note that a single pass may itself
/// fail to terminate on terms whose spine keeps re-exposing a redex in
/// place (Ω-style loops); callers needing a guarantee of return use
/// [`evaluate_bounded`].
pub fn reduce_once(e: Expr) -> LamResult<(Expr, bool)> {
    let mut state = PassState::default();
    let e = reduce_pass(e, &mut state, &mut Fuel::Unlimited)?;
    Ok((e, state.progressed))
}

/// Reduce `e` to normal form.
///
/// Repeats full passes until one reports no progress. Terminates iff the
/// term has a normal form under this strategy; a divergent term loops
/// forever — a property of the input, not an engine defect. There is no
/// implicit termination detection.
pub fn evaluate(mut e: Expr) -> LamResult<Expr> {
    let mut fuel = Fuel::Unlimited;
    let mut pass = 0usize;
    loop {
        let mut state = PassState::default();
        e = reduce_pass(e, &mut state, &mut fuel)?;
        pass += 1;
        trace!("reduction pass {pass}: progressed = {}", state.progressed);
        if !state.progressed {
            return Ok(e);
        }
    }
}

/// Outcome of a fuel-bounded evaluation.
#[derive(Debug, Clone, PartialEq, EnumIs)]
pub enum Reduction {
    /// A fixed point was reached; the carried expression is in normal form.
    Normal(Expr),
    /// The step budget ran out first; the carried expression is the
    /// partially-reduced term.
    Exhausted(Expr),
}

impl Reduction {
    /// The carried expression, regardless of outcome.
    pub fn into_expr(self) -> Expr {
        match self {
            Reduction::Normal(e) | Reduction::Exhausted(e) => e,
        }
    }
}

/// Reduce `e`, spending at most `max_steps` beta/host application steps.
///
/// This changes observable semantics relative to [`evaluate`]: a term whose
/// normal form needs more steps than the budget comes back
/// [`Reduction::Exhausted`] with the partially-reduced term instead of
/// blocking. The engine still performs no termination detection of its own;
/// the budget is the only thing standing between a divergent term and an
/// endless loop.
pub fn evaluate_bounded(mut e: Expr, max_steps: usize) -> LamResult<Reduction> {
    let mut fuel = Fuel::Limited(max_steps);
    let mut pass = 0usize;
    loop {
        let mut state = PassState::default();
        e = reduce_pass(e, &mut state, &mut fuel)?;
        pass += 1;
        trace!(
            "reduction pass {pass}: progressed = {}, stalled = {}",
            state.progressed, state.stalled
        );
        if state.stalled {
            debug!("step budget of {max_steps} exhausted before reaching a normal form");
            return Ok(Reduction::Exhausted(e));
        }
        if !state.progressed {
            return Ok(Reduction::Normal(e));
        }
    }
}
