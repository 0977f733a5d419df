use super::*;
use crate::Ident;
use pretty_assertions::assert_eq;

#[test]
fn test_expression_sorts() {
    assert_eq!(Exp::num(1.0).sort(), Sort::ArithExp);
    assert_eq!(Exp::sum(Exp::num(1.0), Exp::num(2.0)).sort(), Sort::ArithExp);
    assert_eq!(Exp::equals(Exp::num(1.0), Exp::num(2.0)).sort(), Sort::BoolExp);
    assert_eq!(Exp::not(Exp::id("b")).sort(), Sort::BoolExp);
    assert_eq!(Exp::id("x").sort(), Sort::Ident);
    assert_eq!(Exp::reference(Exp::num(0.0)).sort(), Sort::Exp);
    assert_eq!(Exp::constant(Exp::num(0.0)).sort(), Sort::Exp);
}

#[test]
fn test_term_sort_and_head() {
    let cmd: Term = Cmd::assign("x", Exp::num(1.0)).into();
    assert_eq!(cmd.sort(), Sort::Cmd);
    assert_eq!(cmd.head(), "Assign");

    let dec: Term = Dec::bind("x", Exp::reference(Exp::num(1.0))).into();
    assert_eq!(dec.sort(), Sort::Dec);
    assert_eq!(dec.head(), "Bind");

    let exp: Term = Exp::mul(Exp::num(2.0), Exp::num(4.0)).into();
    assert_eq!(exp.head(), "Mul");
}

#[test]
fn test_bool_exp_rejects_arithmetic_head() {
    let err = BoolExp::new(Exp::num(1.0)).unwrap_err();
    assert_eq!(err.expected, Sort::BoolExp);
    assert_eq!(err.found, Sort::ArithExp);

    // Identifiers are expressions, but not boolean-sorted ones.
    assert!(BoolExp::try_from(Exp::id("flag")).is_err());
}

#[test]
fn test_bool_exp_accepts_eq_and_not() {
    let eq = BoolExp::new(Exp::equals(Exp::id("y"), Exp::num(0.0))).unwrap();
    assert_eq!(eq, BoolExp::equals(Exp::id("y"), Exp::num(0.0)));

    let not = BoolExp::new(Exp::not(eq.clone().into_exp())).unwrap();
    assert_eq!(not.as_exp(), &Exp::not(eq.into_exp()));
}

#[test]
fn test_loop_keeps_condition_and_body() {
    let body = Cmd::assign("y", Exp::sub(Exp::id("y"), Exp::num(1.0)));
    let cmd = Cmd::looping(BoolExp::not(Exp::equals(Exp::id("y"), Exp::num(0.0))), body.clone());
    let Cmd::Loop(lp) = cmd else {
        panic!("expected a loop");
    };
    assert_eq!(lp.body, body);
    assert_eq!(lp.cond.as_exp().head(), "Not");
}

#[test]
fn test_ident_borrows_as_str() {
    let id = Ident::from("x");
    let names: std::collections::HashSet<Ident> = [id.clone()].into_iter().collect();
    assert!(names.contains("x"));
    assert_eq!(id.to_string(), "x");
}
