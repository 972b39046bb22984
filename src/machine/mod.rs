//! Machines: rule tables, execution, and reverse generation.
//!
//! A [`Machine`] pairs a start state with a deterministic rule table
//! and exposes the two executions that share it: [`Machine::parse`]
//! classifies an input tape, [`Machine::generate`] enumerates the
//! tapes the machine accepts by running the rules backwards from
//! `Accept`.

mod configuration;
mod generate;
mod index;
mod transition;

pub use configuration::Configuration;
pub use generate::Generate;
pub use transition::{Direction, Transition};

use crate::tape::{Symbol, TapeSymbol};
use index::ReverseIndex;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::{Arc, OnceLock};
use thiserror::Error;

/// Marker trait for user state values.
///
/// Anything equatable, hashable and debuggable qualifies; the trait is
/// implemented automatically.
pub trait StateValue: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> StateValue for T {}

/// Where a machine stands: halted in `Accept` or `Reject`, or still
/// running in a user-supplied state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MachineState<S> {
    /// Terminal success.
    Accept,
    /// Terminal failure.
    Reject,
    /// A non-terminal user state.
    Running(S),
}

impl<S> MachineState<S> {
    /// True for `Accept` and `Reject`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MachineState::Running(_))
    }

    /// True for `Accept`.
    pub fn is_accept(&self) -> bool {
        matches!(self, MachineState::Accept)
    }
}

/// Rule-table validation failures. All of them are construction-time;
/// nothing fails once a machine exists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MachineError<S: fmt::Debug, I: fmt::Debug, O: fmt::Debug> {
    /// Two rules share a `(state, read)` key.
    #[error("duplicate rule for state {state:?} reading {read:?}")]
    DuplicateTransition {
        /// The state both rules fire in.
        state: S,
        /// The symbol both rules read.
        read: TapeSymbol<I, O>,
    },
    /// A rule reading an end marker carries a write.
    #[error("rule {0:?} writes over an end marker")]
    MarkerWrite(Transition<S, I, O>),
    /// A rule reading an end marker moves off the tape.
    #[error("rule {0:?} moves off the end of the tape")]
    MarkerEscape(Transition<S, I, O>),
}

/// A deterministic linear-bounded machine.
///
/// Immutable after construction. The reverse-transition index and the
/// per-configuration candidate cache are memoised internally; both are
/// populated on demand and are safe under concurrent readers, so one
/// machine can serve parses and generations from several threads at
/// once.
///
/// # Example
///
/// ```
/// use retroparse::prelude::*;
///
/// // Accepts runs of the letter `a`, the empty run included.
/// let machine: Machine<&str, char, char> = Machine::new(
///     "scan",
///     vec![
///         Transition::middle(
///             "scan",
///             TapeSymbol::Input('a'),
///             None,
///             Direction::Right,
///             None,
///         ),
///         Transition::at_right_end("scan", Direction::Hold, Some(MachineState::Accept)),
///     ],
/// )
/// .unwrap();
///
/// assert!(machine.parse(['a', 'a']));
/// assert!(!machine.parse(['b']));
///
/// let mut tapes: Vec<Vec<char>> = machine.generate(2).collect();
/// tapes.sort();
/// assert_eq!(tapes, vec![vec![], vec!['a'], vec!['a', 'a']]);
/// ```
pub struct Machine<S, I, O> {
    start: S,
    transitions: Vec<Transition<S, I, O>>,
    forward: FxHashMap<(S, TapeSymbol<I, O>), usize>,
    reverse: OnceLock<ReverseIndex<S, I, O>>,
    lookup_cache: RwLock<FxHashMap<LookupKey<S, I, O>, Arc<[usize]>>>,
}

/// Cache key for a reverse lookup: post state plus the three observed
/// cells around the head.
type LookupKey<S, I, O> = (
    MachineState<S>,
    Option<TapeSymbol<I, O>>,
    Option<TapeSymbol<I, O>>,
    Option<TapeSymbol<I, O>>,
);

impl<S: StateValue, I: Symbol, O: Symbol> Machine<S, I, O> {
    /// Build a machine from a start state and its rules.
    ///
    /// Fails fast on a duplicate `(state, read)` key and on malformed
    /// marker rules; see [`MachineError`].
    pub fn new(
        start: S,
        transitions: impl IntoIterator<Item = Transition<S, I, O>>,
    ) -> Result<Self, MachineError<S, I, O>> {
        let transitions: Vec<_> = transitions.into_iter().collect();

        let mut forward = FxHashMap::default();
        for (index, rule) in transitions.iter().enumerate() {
            match rule.read() {
                TapeSymbol::LeftEnd => {
                    if rule.write().is_some() {
                        return Err(MachineError::MarkerWrite(rule.clone()));
                    }
                    if rule.direction() == Direction::Left {
                        return Err(MachineError::MarkerEscape(rule.clone()));
                    }
                }
                TapeSymbol::RightEnd => {
                    if rule.write().is_some() {
                        return Err(MachineError::MarkerWrite(rule.clone()));
                    }
                    if rule.direction() == Direction::Right {
                        return Err(MachineError::MarkerEscape(rule.clone()));
                    }
                }
                _ => {}
            }

            let key = (rule.state().clone(), rule.read().clone());
            if forward.insert(key, index).is_some() {
                return Err(MachineError::DuplicateTransition {
                    state: rule.state().clone(),
                    read: rule.read().clone(),
                });
            }
        }

        Ok(Machine {
            start,
            transitions,
            forward,
            reverse: OnceLock::new(),
            lookup_cache: RwLock::new(FxHashMap::default()),
        })
    }

    /// The state a forward parse begins in.
    pub fn start_state(&self) -> &S {
        &self.start
    }

    /// The rule table, in definition order.
    pub fn transitions(&self) -> &[Transition<S, I, O>] {
        &self.transitions
    }

    /// Run the machine forwards over `input` and report acceptance.
    pub fn parse(&self, input: impl IntoIterator<Item = I>) -> bool {
        Configuration::for_parsing(self, input).run().is_accept()
    }

    /// Lazily enumerate the accepted input tapes of at most
    /// `max_tape_len` cells, in depth-first discovery order.
    ///
    /// The stream is driven on demand: taking a prefix explores only
    /// what that prefix needed. Machines accepting infinitely many
    /// tapes are fine — the tape budget is what makes the stream
    /// finite.
    pub fn generate(&self, max_tape_len: usize) -> Generate<'_, S, I, O> {
        Generate::new(self, max_tape_len)
    }

    pub(crate) fn rule(&self, index: usize) -> &Transition<S, I, O> {
        &self.transitions[index]
    }

    pub(crate) fn forward_rule(
        &self,
        state: &S,
        read: &TapeSymbol<I, O>,
    ) -> Option<&Transition<S, I, O>> {
        let key = (state.clone(), read.clone());
        self.forward.get(&key).map(|&index| &self.transitions[index])
    }

    /// Candidate predecessor rules for a post-configuration, memoised
    /// per `(state, left, head, right)` observation.
    pub(crate) fn predecessor_candidates(
        &self,
        state: &MachineState<S>,
        left: Option<&TapeSymbol<I, O>>,
        head: Option<&TapeSymbol<I, O>>,
        right: Option<&TapeSymbol<I, O>>,
    ) -> Arc<[usize]> {
        let key = (state.clone(), left.cloned(), head.cloned(), right.cloned());
        if let Some(hit) = self.lookup_cache.read().get(&key) {
            return hit.clone();
        }

        let computed: Arc<[usize]> = self
            .reverse_index()
            .candidates(state, left, head, right)
            .into();
        self.lookup_cache
            .write()
            .entry(key)
            .or_insert(computed)
            .clone()
    }

    fn reverse_index(&self) -> &ReverseIndex<S, I, O> {
        self.reverse
            .get_or_init(|| ReverseIndex::build(&self.transitions))
    }
}

impl<S: StateValue, I: Symbol, O: Symbol> Clone for Machine<S, I, O> {
    fn clone(&self) -> Self {
        // The memoised caches stay behind; they repopulate on demand.
        Machine {
            start: self.start.clone(),
            transitions: self.transitions.clone(),
            forward: self.forward.clone(),
            reverse: OnceLock::new(),
            lookup_cache: RwLock::new(FxHashMap::default()),
        }
    }
}

impl<S, I, O> fmt::Debug for Machine<S, I, O>
where
    S: fmt::Debug,
    I: fmt::Debug,
    O: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("start", &self.start)
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}
