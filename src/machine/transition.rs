//! Transition rules.

use super::MachineState;
use crate::tape::{Symbol, TapeSymbol};

/// Head motion performed after a rule fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Move the head one cell to the left.
    Left,
    /// Move the head one cell to the right.
    Right,
    /// Keep the head where it is.
    Hold,
}

/// A single deterministic rule.
///
/// A transition is identified by its `from` key — the pair of the state
/// it fires in and the symbol it reads. It optionally writes an output
/// symbol over the cell, moves the head, and optionally changes state;
/// omitting the write leaves the cell untouched (an `Input` cell stays
/// an `Input` cell bit for bit), and omitting the next state stays in
/// the current one.
///
/// Three shapes exist, each with its own constructor:
///
/// - [`Transition::middle`] reads a writable cell and is unrestricted;
/// - [`Transition::at_left_end`] fires on the left marker, cannot
///   write, and may only move right or hold;
/// - [`Transition::at_right_end`] mirrors it on the right marker.
///
/// Writes take an `O` directly, so a rule that overwrites a cell with
/// an input symbol cannot be expressed. The marker restrictions are
/// enforced when the rules are handed to
/// [`Machine::new`](super::Machine::new).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition<S, I, O> {
    state: S,
    read: TapeSymbol<I, O>,
    write: Option<O>,
    direction: Direction,
    next: Option<MachineState<S>>,
}

impl<S: Clone, I: Symbol, O: Symbol> Transition<S, I, O> {
    /// A rule firing on a writable cell.
    pub fn middle(
        state: S,
        read: TapeSymbol<I, O>,
        write: Option<O>,
        direction: Direction,
        next: Option<MachineState<S>>,
    ) -> Self {
        Transition {
            state,
            read,
            write,
            direction,
            next,
        }
    }

    /// A rule firing with the head on the left marker.
    pub fn at_left_end(state: S, direction: Direction, next: Option<MachineState<S>>) -> Self {
        Transition {
            state,
            read: TapeSymbol::LeftEnd,
            write: None,
            direction,
            next,
        }
    }

    /// A rule firing with the head on the right marker.
    pub fn at_right_end(state: S, direction: Direction, next: Option<MachineState<S>>) -> Self {
        Transition {
            state,
            read: TapeSymbol::RightEnd,
            write: None,
            direction,
            next,
        }
    }

    /// The state this rule fires in.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The symbol this rule reads.
    pub fn read(&self) -> &TapeSymbol<I, O> {
        &self.read
    }

    /// The output this rule writes, if any.
    pub fn write(&self) -> Option<&O> {
        self.write.as_ref()
    }

    /// The head motion.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The symbol left under the head once the rule has fired: the
    /// written output if there is one, otherwise the read symbol.
    pub fn leave(&self) -> TapeSymbol<I, O> {
        match &self.write {
            Some(output) => TapeSymbol::Output(output.clone()),
            None => self.read.clone(),
        }
    }

    /// The state the machine is in once the rule has fired.
    pub fn next_state(&self) -> MachineState<S> {
        match &self.next {
            Some(next) => next.clone(),
            None => MachineState::Running(self.state.clone()),
        }
    }
}
