//! `MachineBuilder` for creating `DecMachine` instances with a configuration
//! and a pre-seeded environment/store.

use pi_ir::Ident;

use crate::dec::DecMachine;
use crate::errors::EvalResult;
use crate::value::Value;

/// Which locations a block reclaims from the store when it exits.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum BlockCleanup {
    /// Remove every location recorded in the ledger right after the block's
    /// declarations, including locations of enclosing blocks. Matches the
    /// reference rewrite rules; only sound for a single, non-nested block.
    #[default]
    PostDeclarationLedger,
    /// Remove only the locations allocated by this block's declarations.
    OwnDeclarations,
}

/// Machine configuration.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct MachineConfig {
    pub block_cleanup: BlockCleanup,
}

/// Builder for [`DecMachine`].
///
/// ```text
/// let mut machine = MachineBuilder::new()
///     .block_cleanup(BlockCleanup::OwnDeclarations)
///     .variable("y", 2.0)
///     .build()?;
/// ```
#[derive(Clone, Debug, Default)]
pub struct MachineBuilder {
    config: MachineConfig,
    variables: Vec<(Ident, Value)>,
}

impl MachineBuilder {
    pub fn new() -> Self {
        MachineBuilder::default()
    }

    #[must_use]
    pub fn config(mut self, config: MachineConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn block_cleanup(mut self, policy: BlockCleanup) -> Self {
        self.config.block_cleanup = policy;
        self
    }

    /// Pre-declare a variable: it gets a fresh location holding `value`.
    /// Variables are allocated in the order they are added.
    #[must_use]
    pub fn variable(mut self, name: impl Into<Ident>, value: impl Into<Value>) -> Self {
        self.variables.push((name.into(), value.into()));
        self
    }

    pub fn build(self) -> EvalResult<DecMachine> {
        let mut machine = DecMachine::with_config(self.config);
        for (name, value) in self.variables {
            machine.declare(name, value)?;
        }
        Ok(machine)
    }
}
