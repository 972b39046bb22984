//! Machine configurations: one instant of a computation.

use super::{Direction, Machine, MachineState, StateValue};
use crate::tape::{Symbol, Tape, TapeSymbol};

/// A snapshot ⟨machine, state, tape⟩.
///
/// Configurations are persistent values: stepping forwards or
/// enumerating predecessors produces fresh configurations and leaves
/// the receiver untouched, so search branches never interfere.
#[derive(Debug, Clone)]
pub struct Configuration<'m, S, I, O> {
    machine: &'m Machine<S, I, O>,
    state: MachineState<S>,
    tape: Tape<I, O>,
}

impl<'m, S: StateValue, I: Symbol, O: Symbol> Configuration<'m, S, I, O> {
    /// The configuration a forward parse starts from: the start state
    /// over a bounded tape holding `input`.
    pub fn for_parsing(machine: &'m Machine<S, I, O>, input: impl IntoIterator<Item = I>) -> Self {
        Configuration {
            machine,
            state: MachineState::Running(machine.start_state().clone()),
            tape: Tape::bounded(input),
        }
    }

    /// The configuration reverse generation starts from: `Accept` over
    /// an empty unbounded tape.
    pub fn for_generating(machine: &'m Machine<S, I, O>) -> Self {
        Configuration {
            machine,
            state: MachineState::Accept,
            tape: Tape::unbounded(),
        }
    }

    /// The machine state at this instant.
    pub fn state(&self) -> &MachineState<S> {
        &self.state
    }

    /// The tape at this instant.
    pub fn tape(&self) -> &Tape<I, O> {
        &self.tape
    }

    /// Apply one forward step.
    ///
    /// Terminal configurations step to themselves. A running state with
    /// no rule for `(state, head)` terminates in `Reject`. Otherwise
    /// the rule's write is applied when it actually changes the cell,
    /// the head moves, and the machine adopts the rule's next state.
    ///
    /// # Panics
    ///
    /// Panics when the head reads nothing, which cannot happen on the
    /// bounded tapes built by [`Configuration::for_parsing`] — the head
    /// always reaches a marker before running out of cells.
    pub fn step(&self) -> Self {
        let MachineState::Running(state) = &self.state else {
            return self.clone();
        };
        let head = self
            .tape
            .head()
            .expect("forward step over the edge of an unbounded tape");

        let Some(rule) = self.machine.forward_rule(state, &head) else {
            return Configuration {
                machine: self.machine,
                state: MachineState::Reject,
                tape: self.tape.clone(),
            };
        };

        let mut tape = self.tape.clone();
        if let Some(output) = rule.write() {
            if head != TapeSymbol::Output(output.clone()) {
                tape = tape.write(output.clone());
            }
        }
        let tape = match rule.direction() {
            Direction::Left => tape.move_left(),
            Direction::Right => tape.move_right(),
            Direction::Hold => tape,
        };

        Configuration {
            machine: self.machine,
            state: rule.next_state(),
            tape,
        }
    }

    /// Step until the machine halts and return the terminal state.
    pub fn run(&self) -> MachineState<S> {
        let mut current = self.clone();
        while !current.state.is_terminal() {
            current = current.step();
        }
        current.state
    }

    /// Every configuration that reaches this one in a single forward
    /// step, bounded by tape size.
    ///
    /// For each candidate rule from the reverse index the motion is
    /// undone (the head walks back to where the rule fired), the
    /// symbol the rule read is restored under the head — markers latch
    /// the matching boundary instead — and the rule's source state is
    /// adopted. Predecessors whose tape outgrows `max_tape_len` are
    /// dropped.
    pub fn predecessors(&self, max_tape_len: usize) -> Vec<Self> {
        let left = self.tape.left();
        let head = self.tape.head();
        let right = self.tape.right();
        let candidates = self.machine.predecessor_candidates(
            &self.state,
            left.as_ref(),
            head.as_ref(),
            right.as_ref(),
        );

        let mut out = Vec::with_capacity(candidates.len());
        for &index in candidates.iter() {
            let rule = self.machine.rule(index);
            let undone = match rule.direction() {
                Direction::Right => self.tape.move_left(),
                Direction::Left => self.tape.move_right(),
                Direction::Hold => self.tape.clone(),
            };
            let tape = match rule.read() {
                TapeSymbol::LeftEnd => undone.bind_left(),
                TapeSymbol::RightEnd => undone.bind_right(),
                cell => undone.overlay(cell.clone()),
            };
            if tape.size() <= max_tape_len {
                out.push(Configuration {
                    machine: self.machine,
                    state: MachineState::Running(rule.state().clone()),
                    tape,
                });
            }
        }
        out
    }

    /// Whether this configuration is where a forward parse would begin:
    /// the machine sits in its start state with no writable cell left
    /// of the head.
    pub fn is_initial(&self) -> bool {
        matches!(&self.state, MachineState::Running(state) if state == self.machine.start_state())
            && self.tape.left_writable().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::MachineState::{Accept, Running};
    use crate::machine::Transition;
    use crate::tape::TapeSymbol::Input;

    /// Accepts exactly the tape `[a]`, rewriting it on the way through.
    fn single_a() -> Machine<&'static str, char, char> {
        Machine::new(
            "s",
            vec![
                Transition::middle("s", Input('a'), Some('x'), Direction::Right, Some(Running("e"))),
                Transition::at_right_end("e", Direction::Hold, Some(Accept)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_forward_steps_to_accept() {
        let machine = single_a();
        let start = Configuration::for_parsing(&machine, ['a']);
        assert_eq!(start.state(), &Running("s"));

        let mid = start.step();
        assert_eq!(mid.state(), &Running("e"));
        assert_eq!(mid.tape().left(), Some(TapeSymbol::Output('x')));

        let done = mid.step();
        assert_eq!(done.state(), &Accept);

        // Terminal configurations are fixed points.
        assert_eq!(done.step().state(), &Accept);

        // The starting configuration was never touched.
        assert_eq!(start.tape().head(), Some(Input('a')));
    }

    #[test]
    fn test_missing_rule_rejects() {
        let machine = single_a();
        let config = Configuration::for_parsing(&machine, ['b']);
        assert_eq!(config.run(), MachineState::Reject);
    }

    #[test]
    fn test_predecessors_reconstruct_the_read_cell() {
        let machine = single_a();

        // Walk back from the accept seed: first restore the right
        // marker, then undo the rewrite of 'a'.
        let seed = Configuration::for_generating(&machine);
        let before_accept = seed.predecessors(1);
        assert_eq!(before_accept.len(), 1);
        assert_eq!(before_accept[0].state(), &Running("e"));
        assert_eq!(before_accept[0].tape().head(), Some(TapeSymbol::RightEnd));

        let before_rewrite = before_accept[0].predecessors(1);
        assert_eq!(before_rewrite.len(), 1);
        assert_eq!(before_rewrite[0].state(), &Running("s"));
        assert_eq!(before_rewrite[0].tape().head(), Some(Input('a')));
        assert!(before_rewrite[0].is_initial());
    }

    #[test]
    fn test_predecessors_prune_over_budget() {
        let machine = single_a();
        let seed = Configuration::for_generating(&machine);
        let before_accept = seed.predecessors(0);
        // Restoring the marker costs nothing, but restoring 'a' would
        // grow the tape past the bound.
        assert_eq!(before_accept.len(), 1);
        assert!(before_accept[0].predecessors(0).is_empty());
    }
}
