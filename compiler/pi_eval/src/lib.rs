//! Pi Eval - Small-step automaton for Pi terms.
//!
//! Evaluation is driven by two stacks: a control stack of pending terms and
//! resume markers, and a value stack of intermediate results. Each step pops
//! one control entry and applies one rewrite rule.
//!
//! # Architecture
//!
//! Three machines, each wrapping the previous one:
//! - `ExpMachine`: arithmetic and boolean expressions
//! - `CmdMachine`: identifiers, assignment, sequencing, loops
//!   (adds `Environment` and `Store`)
//! - `DecMachine`: references, bindings, blocks (adds `LocationLedger`)
//!
//! A layer's `dispatch` handles its own terms and markers and forwards the
//! rest inward. All three implement [`Automaton`].
//!
//! # Logging
//!
//! Steps are traced at `trace` level, block entry/exit at `debug`. Call
//! [`init_tracing`] and set `RUST_LOG=pi_eval=trace` to see them.

mod automaton;
mod builder;
mod cmd;
mod control;
mod dec;
mod environment;
mod errors;
mod exp;
mod ledger;
mod operators;
mod value;

#[cfg(test)]
mod tests;

use std::sync::Once;

pub use automaton::{Automaton, Progress, Stacks};
pub use builder::{BlockCleanup, MachineBuilder, MachineConfig};
pub use cmd::CmdMachine;
pub use control::{CmdMarker, Control, DecMarker, ExpMarker, Marker};
pub use dec::DecMachine;
pub use environment::{Environment, Store};
pub use errors::{EvalError, EvalResult};
pub use exp::ExpMachine;
pub use ledger::LocationLedger;
pub use value::{Bindings, Loc, Value, ValueKind};

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber for the automaton.
///
/// Does nothing unless `RUST_LOG` is set, and only ever runs once.
/// Enable with `RUST_LOG=pi_eval=debug` or `RUST_LOG=pi_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
