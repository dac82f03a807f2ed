use lamcore::prelude::*;

#[test]
fn names_are_assigned_on_first_occurrence() {
    // λa. λb. b a — the outer binder is seen first and gets `a`.
    let s = bind(|x| bind(|y| app(var(y), var(x)))).pretty_string();
    assert_eq!(s, "(λa. (λb. b a))");
}

#[test]
fn names_are_reused_on_later_occurrences() {
    let s = bind(|x| app(var(x), var(x))).pretty_string();
    assert_eq!(s, "(λa. a a)");
}

#[test]
fn free_variables_get_names_too() {
    let x = Binder::fresh();
    let y = Binder::fresh();
    assert_eq!(app(var(x), var(y)).pretty_string(), "a b");
}

#[test]
fn application_parenthesizes_only_right_nested_applications() {
    let a = Binder::fresh();
    let b = Binder::fresh();
    let c = Binder::fresh();

    // Left-associativity is implicit...
    assert_eq!(app(app(var(a), var(b)), var(c)).pretty_string(), "a b c");
    // ...and a right operand that is itself an application is grouped.
    assert_eq!(app(var(a), app(var(b), var(c))).pretty_string(), "a (b c)");
}

#[test]
fn abstractions_render_parenthesized() {
    let id = bind(|x| var(x));
    assert_eq!(id.clone().pretty_string(), "(λa. a)");
    assert_eq!(app(id, host_value([0])).pretty_string(), "(λa. a) [1 bytes]");
}

#[test]
fn host_leaves_render_opaquely() {
    assert_eq!(host_value(0u64.to_le_bytes()).pretty_string(), "[8 bytes]");

    let inc = host_fn("inc", |bytes: &[u8]| {
        let value = decode_u64("inc", bytes)?;
        Ok(host_value((value + 1).to_le_bytes()))
    });
    assert_eq!(inc.pretty_string(), "<inc>");

    let anon = host_fn("", |_bytes: &[u8]| Ok(host_value([])));
    assert_eq!(anon.pretty_string(), "<fun>");
}

#[test]
fn many_binders_overflow_into_numbered_names() {
    // 27 nested abstractions exhaust a..z; the innermost becomes v0.
    let mut binders = Vec::new();
    for _ in 0..27 {
        binders.push(Binder::fresh());
    }
    let mut body = var(*binders.last().unwrap());
    for b in binders.iter().rev() {
        body = lam(*b, body);
    }

    let s = body.pretty_string();
    assert!(s.starts_with("(λa."));
    assert!(s.contains("λv0. v0"));
}

#[test]
fn display_matches_pretty_string() {
    let e = bind(|x| app(var(x), host_value([1, 2])));
    assert_eq!(format!("{e}"), e.pretty_string());
}
