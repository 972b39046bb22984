//! Lazy reverse generation of accepted inputs.

use super::{Configuration, Machine, StateValue};
use crate::tape::Symbol;

/// Lazy iterator over the input tapes a machine accepts.
///
/// Runs a depth-first search over the predecessor relation, seeded at
/// ⟨`Accept`, empty unbounded tape⟩. Whenever the walk reaches a
/// configuration a forward parse would begin from, the tape's input
/// projection is yielded — provided no cell still carries an output
/// symbol. Exploration continues behind every yield: a start
/// configuration can itself have predecessors when rules re-enter the
/// start state.
///
/// # Why depth-first
///
/// Predecessors are generated on demand and each costs an index probe,
/// so iterative deepening would recompute them once per depth level,
/// and a breadth-first frontier grows exponentially with depth. The
/// stack here is bounded by the tape budget times the branching of the
/// index lookups, and accepted tapes that sit deep along a narrow
/// branch — a password machine's single witness — surface after a
/// number of probes proportional to the path, not to the alphabet
/// raised to the tape length.
///
/// The search carries no visited set; a machine whose rules cycle
/// without touching the tape can stall the stream between yields, and
/// the tape budget is the only cut-off.
pub struct Generate<'m, S, I, O> {
    pending: Vec<Configuration<'m, S, I, O>>,
    max_tape_len: usize,
    finished: bool,
}

impl<'m, S: StateValue, I: Symbol, O: Symbol> Generate<'m, S, I, O> {
    pub(crate) fn new(machine: &'m Machine<S, I, O>, max_tape_len: usize) -> Self {
        Generate {
            pending: vec![Configuration::for_generating(machine)],
            max_tape_len,
            finished: false,
        }
    }

    /// Advance to the next accepted input.
    fn advance(&mut self) -> Option<Vec<I>> {
        while let Some(config) = self.pending.pop() {
            self.pending.extend(config.predecessors(self.max_tape_len));

            if config.is_initial() {
                // Output residue at the start state means the branch
                // reconstructed a tape no caller could have supplied;
                // it is discarded, not yielded.
                if let Some(input) = config.tape().input_cells() {
                    return Some(input);
                }
            }
        }

        self.finished = true;
        None
    }
}

impl<S: StateValue, I: Symbol, O: Symbol> Iterator for Generate<'_, S, I, O> {
    type Item = Vec<I>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            None
        } else {
            self.advance()
        }
    }
}
