//! Sort-checked term assembly.
//!
//! One function per composite grammar rule. Operands arrive as untyped
//! [`Term`]s (e.g. from a front end) and are checked position by position;
//! the first misplaced operand is reported as a [`MalformedTerm`].
//!
//! ```text
//! let exp = build::sum(build::num(1.0), build::mul(build::num(2.0), build::num(4.0))?)?;
//! assert!(build::mul(cmd, build::num(1.0)).is_err());
//! ```

use crate::{BoolExp, Cmd, Dec, Exp, Ident, MalformedTerm, Sort, Term};

/// Result of assembling a term.
pub type BuildResult = Result<Term, MalformedTerm>;

fn expect_exp(constructor: &'static str, position: usize, term: Term) -> Result<Exp, MalformedTerm> {
    match term {
        Term::Exp(exp) => Ok(exp),
        other => Err(MalformedTerm::new(constructor, position, Sort::Exp, other.sort())),
    }
}

fn expect_ident(constructor: &'static str, position: usize, term: Term) -> Result<Ident, MalformedTerm> {
    match term {
        Term::Exp(Exp::Id(name)) => Ok(name),
        other => Err(MalformedTerm::new(constructor, position, Sort::Ident, other.sort())),
    }
}

fn expect_bool(constructor: &'static str, position: usize, term: Term) -> Result<BoolExp, MalformedTerm> {
    let found = term.sort();
    match term {
        Term::Exp(exp) if found == Sort::BoolExp => BoolExp::new(exp),
        _ => Err(MalformedTerm::new(constructor, position, Sort::BoolExp, found)),
    }
}

fn expect_cmd(constructor: &'static str, position: usize, term: Term) -> Result<Cmd, MalformedTerm> {
    match term {
        Term::Cmd(cmd) => Ok(cmd),
        other => Err(MalformedTerm::new(constructor, position, Sort::Cmd, other.sort())),
    }
}

fn expect_dec(constructor: &'static str, position: usize, term: Term) -> Result<Dec, MalformedTerm> {
    match term {
        Term::Dec(dec) => Ok(dec),
        other => Err(MalformedTerm::new(constructor, position, Sort::Dec, other.sort())),
    }
}

// Leaves

pub fn num(value: f64) -> Term {
    Exp::num(value).into()
}

pub fn id(name: impl Into<Ident>) -> Term {
    Exp::id(name).into()
}

// Expressions

pub fn sum(e1: Term, e2: Term) -> BuildResult {
    Ok(Exp::sum(expect_exp("Sum", 0, e1)?, expect_exp("Sum", 1, e2)?).into())
}

pub fn sub(e1: Term, e2: Term) -> BuildResult {
    Ok(Exp::sub(expect_exp("Sub", 0, e1)?, expect_exp("Sub", 1, e2)?).into())
}

pub fn mul(e1: Term, e2: Term) -> BuildResult {
    Ok(Exp::mul(expect_exp("Mul", 0, e1)?, expect_exp("Mul", 1, e2)?).into())
}

pub fn eq(e1: Term, e2: Term) -> BuildResult {
    Ok(Exp::equals(expect_exp("Eq", 0, e1)?, expect_exp("Eq", 1, e2)?).into())
}

pub fn not(e: Term) -> BuildResult {
    Ok(Exp::not(expect_exp("Not", 0, e)?).into())
}

pub fn reference(e: Term) -> BuildResult {
    Ok(Exp::reference(expect_exp("Ref", 0, e)?).into())
}

pub fn constant(e: Term) -> BuildResult {
    Ok(Exp::constant(expect_exp("Cns", 0, e)?).into())
}

// Commands

pub fn assign(target: Term, e: Term) -> BuildResult {
    Ok(Cmd::assign(expect_ident("Assign", 0, target)?, expect_exp("Assign", 1, e)?).into())
}

pub fn looping(cond: Term, body: Term) -> BuildResult {
    Ok(Cmd::looping(expect_bool("Loop", 0, cond)?, expect_cmd("Loop", 1, body)?).into())
}

pub fn cseq(c1: Term, c2: Term) -> BuildResult {
    Ok(Cmd::seq(expect_cmd("CSeq", 0, c1)?, expect_cmd("CSeq", 1, c2)?).into())
}

pub fn block(decls: Term, body: Term) -> BuildResult {
    Ok(Cmd::block(expect_dec("Blk", 0, decls)?, expect_cmd("Blk", 1, body)?).into())
}

// Declarations

pub fn bind(target: Term, e: Term) -> BuildResult {
    Ok(Dec::bind(expect_ident("Bind", 0, target)?, expect_exp("Bind", 1, e)?).into())
}

pub fn dseq(d1: Term, d2: Term) -> BuildResult {
    Ok(Dec::seq(expect_dec("DSeq", 0, d1)?, expect_dec("DSeq", 1, d2)?).into())
}
