//! Reverse-transition index.
//!
//! Forward rules answer "what happens next from `(state, read)`"; the
//! reverse index answers the inverse question: given a configuration
//! *after* some rule fired — the post state plus the three tape cells
//! around the head — which rules could have produced it?
//!
//! Rules are grouped by their effective next state, then by head
//! motion, then by the symbol they leave under the head after firing.
//! The last level is what makes reverse search tractable: a candidate
//! is only returned when the symbol it left behind matches the symbol
//! actually on the tape, so alphabets never fan out blindly. A machine
//! that forces 62¹⁰ forward probes typically has a handful of matching
//! predecessors per configuration in reverse.

use crate::machine::{Direction, MachineState, Transition};
use crate::tape::{Symbol, TapeSymbol};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// Transition indices kept small-vector-resident; most buckets hold a
/// couple of rules.
type Bucket = SmallVec<[usize; 4]>;

/// Rules that share a next state and a head motion, split by the symbol
/// they leave behind.
#[derive(Debug)]
struct SymbolBuckets<I, O> {
    grouped: FxHashMap<TapeSymbol<I, O>, Bucket>,
    all: Bucket,
}

// Hand-rolled so that `Default` does not demand `I: Default`.
impl<I, O> Default for SymbolBuckets<I, O> {
    fn default() -> Self {
        SymbolBuckets {
            grouped: FxHashMap::default(),
            all: Bucket::new(),
        }
    }
}

impl<I: Symbol, O: Symbol> SymbolBuckets<I, O> {
    fn insert(&mut self, leave: TapeSymbol<I, O>, index: usize) {
        self.grouped.entry(leave).or_default().push(index);
        self.all.push(index);
    }

    /// The rules compatible with an observed cell: exact leave-symbol
    /// matches when the cell is known, every rule when the tape has no
    /// cell there to constrain against.
    fn select(&self, cell: Option<&TapeSymbol<I, O>>) -> &[usize] {
        match cell {
            Some(symbol) => self
                .grouped
                .get(symbol)
                .map(|bucket| bucket.as_slice())
                .unwrap_or(&[]),
            None => self.all.as_slice(),
        }
    }
}

#[derive(Debug)]
struct DirectionTable<I, O> {
    moved_left: SymbolBuckets<I, O>,
    moved_right: SymbolBuckets<I, O>,
    held: SymbolBuckets<I, O>,
}

impl<I, O> Default for DirectionTable<I, O> {
    fn default() -> Self {
        DirectionTable {
            moved_left: SymbolBuckets::default(),
            moved_right: SymbolBuckets::default(),
            held: SymbolBuckets::default(),
        }
    }
}

/// The full reverse index, keyed by effective next state.
///
/// Built once per machine from the rule list (a pure transformation)
/// and memoised behind a `OnceLock`.
#[derive(Debug)]
pub(crate) struct ReverseIndex<S, I, O> {
    by_next: FxHashMap<MachineState<S>, DirectionTable<I, O>>,
}

impl<S: Clone + Eq + std::hash::Hash, I: Symbol, O: Symbol> ReverseIndex<S, I, O> {
    pub fn build(transitions: &[Transition<S, I, O>]) -> Self {
        let mut by_next: FxHashMap<MachineState<S>, DirectionTable<I, O>> = FxHashMap::default();
        for (index, rule) in transitions.iter().enumerate() {
            let table = by_next.entry(rule.next_state()).or_default();
            let buckets = match rule.direction() {
                Direction::Left => &mut table.moved_left,
                Direction::Right => &mut table.moved_right,
                Direction::Hold => &mut table.held,
            };
            buckets.insert(rule.leave(), index);
        }
        ReverseIndex { by_next }
    }

    /// Every rule that could have produced the post-configuration
    /// `(state, left, head, right)`, as indices into the rule list.
    ///
    /// Three families combine:
    ///
    /// 1. rules that moved *right* into the head — they wrote what is
    ///    now the cell to the left, so they are filtered by `left`;
    ///    excluded entirely when the head sits on the left marker,
    ///    which cannot be entered from outside;
    /// 2. rules that moved *left* into the head — symmetric, filtered
    ///    by `right`, excluded on the right marker;
    /// 3. rules that held — they wrote the head cell itself, filtered
    ///    by `head`.
    pub fn candidates(
        &self,
        state: &MachineState<S>,
        left: Option<&TapeSymbol<I, O>>,
        head: Option<&TapeSymbol<I, O>>,
        right: Option<&TapeSymbol<I, O>>,
    ) -> Vec<usize> {
        let Some(table) = self.by_next.get(state) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        if head != Some(&TapeSymbol::LeftEnd) {
            out.extend_from_slice(table.moved_right.select(left));
        }
        if head != Some(&TapeSymbol::RightEnd) {
            out.extend_from_slice(table.moved_left.select(right));
        }
        out.extend_from_slice(table.held.select(head));
        out
    }
}
