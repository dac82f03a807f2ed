use lamcore::prelude::*;

// Church encodings used throughout; each call mints fresh binders.

fn church_true() -> Expr {
    bind(|x| bind(|_y| var(x)))
}

fn church_false() -> Expr {
    bind(|_x| bind(|y| var(y)))
}

fn church_not() -> Expr {
    bind(|v| app(app(var(v), church_false()), church_true()))
}

fn church_and() -> Expr {
    bind(|a| bind(|b| app(app(var(a), var(b)), church_false())))
}

fn church_or() -> Expr {
    bind(|a| bind(|b| app(app(var(a), church_true()), var(b))))
}

fn church_zero() -> Expr {
    bind(|_s| bind(|z| var(z)))
}

fn church_succ() -> Expr {
    // λw. λy. λx. y ((w y) x)
    bind(|w| bind(|y| bind(|x| app(var(y), app(app(var(w), var(y)), var(x))))))
}

fn host_increment() -> Expr {
    host_fn("inc", |bytes: &[u8]| {
        let value = decode_u64("inc", bytes)?;
        Ok(host_value((value + 1).to_le_bytes()))
    })
}

fn as_u64(e: &Expr) -> u64 {
    match e {
        Expr::HostValue(v) => v.to_u64().expect("eight-byte payload"),
        other => panic!("expected a host value, got {other}"),
    }
}

/// Apply a Church boolean to two distinguishing host values and report which
/// one it selects.
fn observe_bool(b: Expr) -> bool {
    let picked = evaluate(app(
        app(b, host_value(1u64.to_le_bytes())),
        host_value(0u64.to_le_bytes()),
    ))
    .unwrap();
    as_u64(&picked) == 1
}

#[test]
fn identity_returns_its_argument() {
    let id = bind(|x| var(x));
    let result = evaluate(app(id, host_value(7u64.to_le_bytes()))).unwrap();
    assert_eq!(as_u64(&result), 7);
}

#[test]
fn church_numeral_round_trip() {
    let three = app(
        church_succ(),
        app(church_succ(), app(church_succ(), church_zero())),
    );
    let counted = app(
        app(three, host_increment()),
        host_value(0u64.to_le_bytes()),
    );

    let normal = evaluate(counted).unwrap();
    assert_eq!(as_u64(&normal), 3);
}

#[test]
fn booleans_are_observably_correct() {
    assert!(observe_bool(church_true()));
    assert!(!observe_bool(church_false()));

    assert!(!observe_bool(app(app(church_and(), church_true()), church_false())));
    assert!(observe_bool(app(app(church_and(), church_true()), church_true())));
    assert!(observe_bool(app(app(church_or(), church_false()), church_true())));
    assert!(!observe_bool(app(app(church_or(), church_false()), church_false())));
    assert!(!observe_bool(app(church_not(), church_true())));
}

#[test]
fn normal_forms_are_fixed_points() {
    let terms = [
        app(app(church_and(), church_true()), church_false()),
        app(church_succ(), church_zero()),
        bind(|x| var(x)),
        host_value(5u64.to_le_bytes()),
    ];
    for term in terms {
        let once = evaluate(term).unwrap();
        let twice = evaluate(once.clone()).unwrap();
        assert_eq!(once, twice, "a normal form must reduce to itself");
    }
}

#[test]
fn one_pass_chains_redexes_at_the_same_spine() {
    // ((λa. λb. a) v) w collapses to v in a single pass: the first
    // application exposes the second at the same position.
    let v = host_value(1u64.to_le_bytes());
    let w = host_value(2u64.to_le_bytes());
    let k = bind(|a| bind(|_b| var(a)));

    let (reduced, progressed) = reduce_once(app(app(k, v.clone()), w)).unwrap();
    assert!(progressed);
    assert_eq!(reduced, v);
}

#[test]
fn reduce_once_reports_no_progress_on_normal_forms() {
    let (reduced, progressed) = reduce_once(bind(|x| var(x))).unwrap();
    assert!(!progressed);
    assert!(reduced.is_lambda());
}

#[test]
fn open_terms_reduce_to_stuck_normal_forms() {
    let free = Binder::fresh();
    let id = bind(|x| var(x));

    let normal = evaluate(app(var(free), app(id, host_value([7])))).unwrap();
    assert_eq!(normal, app(var(free), host_value([7])));
}

#[test]
fn divergent_terms_exhaust_the_step_budget() {
    // Y applied to the identity has no normal form under this strategy; the
    // engine must keep finding work until the budget refuses it.
    let y = bind(|f| {
        app(
            bind(|x| app(var(f), app(var(x), var(x)))),
            bind(|x| app(var(f), app(var(x), var(x)))),
        )
    });
    let identity = bind(|x| var(x));

    let outcome = evaluate_bounded(app(y, identity), 256).unwrap();
    assert!(outcome.is_exhausted(), "no implicit termination detection");
}

#[test]
fn terminating_terms_finish_within_a_generous_budget() {
    let three = app(
        church_succ(),
        app(church_succ(), app(church_succ(), church_zero())),
    );
    let counted = app(
        app(three, host_increment()),
        host_value(0u64.to_le_bytes()),
    );

    let outcome = evaluate_bounded(counted, 10_000).unwrap();
    assert!(outcome.is_normal());
    assert_eq!(as_u64(&outcome.into_expr()), 3);
}

#[test]
fn zero_budget_reduces_nothing() {
    let id = bind(|x| var(x));
    let term = app(id, host_value([1]));
    let copy = term.clone();

    let outcome = evaluate_bounded(term, 0).unwrap();
    assert!(outcome.is_exhausted());
    assert_eq!(outcome.into_expr(), copy);
}

#[test]
fn applying_a_host_value_is_a_type_mismatch() {
    let err = apply(host_value([1]), host_value([2])).unwrap_err();
    assert!(err.is_type_mismatch());

    // A host function applied to anything but a host value is equally ill-typed.
    let err = apply(host_increment(), bind(|x| var(x))).unwrap_err();
    assert!(err.is_type_mismatch());
}

#[test]
fn host_contract_violations_abort_evaluation() {
    // Three bytes where the incrementer expects eight.
    let term = app(host_increment(), host_value([1, 2, 3]));

    let err = evaluate(term).unwrap_err();
    assert!(err.is_host_contract_violation());
}

#[test]
fn host_functions_chain_through_church_numerals() {
    // succ(succ(0)) via two nested host applications.
    let two = app(church_succ(), app(church_succ(), church_zero()));
    let counted = evaluate(app(
        app(two, host_increment()),
        host_value(0u64.to_le_bytes()),
    ))
    .unwrap();
    assert_eq!(as_u64(&counted), 2);
}
