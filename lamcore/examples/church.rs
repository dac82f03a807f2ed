use lamcore::prelude::*;

fn church_true() -> Expr {
    bind(|x| bind(|_y| var(x)))
}

fn church_false() -> Expr {
    bind(|_x| bind(|y| var(y)))
}

fn church_and() -> Expr {
    bind(|a| bind(|b| app(app(var(a), var(b)), church_false())))
}

fn church_zero() -> Expr {
    bind(|_s| bind(|z| var(z)))
}

fn church_succ() -> Expr {
    bind(|w| bind(|y| bind(|x| app(var(y), app(app(var(w), var(y)), var(x))))))
}

fn host_increment() -> Expr {
    host_fn("inc", |bytes: &[u8]| {
        let value = decode_u64("inc", bytes)?;
        Ok(host_value((value + 1).to_le_bytes()))
    })
}

fn main() -> LamResult<()> {
    // Booleans: and(true, false) picks the second of two host values.
    let and_tf = app(app(church_and(), church_true()), church_false());
    let picked = evaluate(app(
        app(and_tf, host_value(1u64.to_le_bytes())),
        host_value(0u64.to_le_bytes()),
    ))?;
    println!("and(true, false) selects: {picked}");

    // Numerals: three = succ (succ (succ zero)), normalized.
    let three = app(
        church_succ(),
        app(church_succ(), app(church_succ(), church_zero())),
    );
    let normal = evaluate(three.clone())?;
    normal.pretty_print().ok();
    println!();

    // Feeding the numeral a host incrementer and a starting value counts it.
    let counted = evaluate(app(
        app(three, host_increment()),
        host_value(0u64.to_le_bytes()),
    ))?;
    match &counted {
        Expr::HostValue(v) => println!("three counts to: {}", v.to_u64().unwrap()),
        other => println!("unexpected normal form: {other}"),
    }

    Ok(())
}
