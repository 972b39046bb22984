//! Tape symbols and the persistent, head-positioned tape.
//!
//! A [`Tape`] is a zipper over the machine's writable cells: the cells
//! strictly left of the head (nearest first), an optional cell under the
//! head, and the cells strictly right of the head. The two end markers
//! are never stored; they are synthesised by the boundary-aware reads
//! ([`Tape::head`], [`Tape::left`], [`Tape::right`]) once the matching
//! boundary flag has been latched.
//!
//! Every operation returns a fresh tape value. The halves are
//! `Arc`-shared lists, so moving, writing and binding are O(1) in both
//! time and memory regardless of tape length — the property that keeps
//! reverse search affordable when thousands of sibling tapes are alive
//! at once.

mod list;

use list::List;
use std::fmt;
use std::hash::Hash;

/// Marker trait for tape symbol payloads.
///
/// Input and output alphabets may use any equatable, hashable value
/// type; the trait is implemented automatically for every type that
/// qualifies.
pub trait Symbol: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Symbol for T {}

/// A symbol as observed by a read head.
///
/// The two markers flank the writable region and are never written; a
/// writable cell holds either an `Input` (present on the initial tape,
/// read-only) or an `Output` (the only kind a transition may write).
/// The alphabets are disjoint kinds even when `I` and `O` are the same
/// Rust type: `Input('x')` and `Output('x')` are different symbols.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TapeSymbol<I, O> {
    /// The sentinel to the left of the leftmost writable cell.
    LeftEnd,
    /// The sentinel to the right of the rightmost writable cell.
    RightEnd,
    /// An input-alphabet symbol.
    Input(I),
    /// An output-alphabet symbol.
    Output(O),
}

impl<I, O> TapeSymbol<I, O> {
    /// True for the two end markers.
    pub fn is_marker(&self) -> bool {
        matches!(self, TapeSymbol::LeftEnd | TapeSymbol::RightEnd)
    }
}

/// Head-positioned sequence of writable cells between two optional end
/// markers.
///
/// Two flavours exist: [`Tape::bounded`] latches both markers up front
/// and is what forward parsing runs on; [`Tape::unbounded`] starts with
/// no cells and no markers, and is grown and bound lazily by reverse
/// search as rules constrain it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape<I, O> {
    /// Cells strictly left of the head, nearest first.
    left: List<TapeSymbol<I, O>>,
    /// The writable cell under the head; `None` when the head sits on a
    /// marker or beyond the current extent.
    head: Option<TapeSymbol<I, O>>,
    /// Cells strictly right of the head, nearest first.
    right: List<TapeSymbol<I, O>>,
    size: usize,
    left_bound: bool,
    right_bound: bool,
}

impl<I: Symbol, O: Symbol> Tape<I, O> {
    /// A tape holding `input` with both markers latched and the head on
    /// the first cell (or on the right marker when `input` is empty).
    pub fn bounded(input: impl IntoIterator<Item = I>) -> Self {
        let mut cells = input.into_iter().map(TapeSymbol::Input);
        let head = cells.next();
        let rest: Vec<_> = cells.collect();
        let size = rest.len() + usize::from(head.is_some());

        let mut right = List::new();
        for cell in rest.into_iter().rev() {
            right = right.push(cell);
        }

        Tape {
            left: List::new(),
            head,
            right,
            size,
            left_bound: true,
            right_bound: true,
        }
    }

    /// An empty tape with neither marker latched.
    pub fn unbounded() -> Self {
        Tape {
            left: List::new(),
            head: None,
            right: List::new(),
            size: 0,
            left_bound: false,
            right_bound: false,
        }
    }

    /// The writable cell under the head, if the head is on one.
    pub fn head_writable(&self) -> Option<&TapeSymbol<I, O>> {
        self.head.as_ref()
    }

    /// The nearest writable cell strictly left of the head.
    pub fn left_writable(&self) -> Option<&TapeSymbol<I, O>> {
        self.left.first()
    }

    /// The nearest writable cell strictly right of the head.
    pub fn right_writable(&self) -> Option<&TapeSymbol<I, O>> {
        self.right.first()
    }

    /// The symbol the head reads: the cell under it, or the marker it
    /// has run into on a bounded side.
    ///
    /// On a tape with no writable cell at all, the right marker wins —
    /// the head of a freshly bounded empty tape sits at the left
    /// marker's neighbour, which is the right marker. The precedence is
    /// unobservable on any non-empty tape.
    pub fn head(&self) -> Option<TapeSymbol<I, O>> {
        match &self.head {
            Some(cell) => Some(cell.clone()),
            None if self.right_bound && self.right.is_empty() => Some(TapeSymbol::RightEnd),
            None if self.left_bound && self.left.is_empty() => Some(TapeSymbol::LeftEnd),
            None => None,
        }
    }

    /// The symbol left of the head, falling back to the left marker
    /// when that side is bounded and has no writable cell.
    pub fn left(&self) -> Option<TapeSymbol<I, O>> {
        match self.left.first() {
            Some(cell) => Some(cell.clone()),
            None if self.left_bound => Some(TapeSymbol::LeftEnd),
            None => None,
        }
    }

    /// The symbol right of the head, falling back to the right marker
    /// when that side is bounded and has no writable cell.
    pub fn right(&self) -> Option<TapeSymbol<I, O>> {
        match self.right.first() {
            Some(cell) => Some(cell.clone()),
            None if self.right_bound => Some(TapeSymbol::RightEnd),
            None => None,
        }
    }

    /// Replace the head cell with `Output(output)`.
    ///
    /// Writing onto an empty head position materialises a new cell and
    /// grows [`Tape::size`] by one.
    pub fn write(&self, output: O) -> Self {
        self.overlay(TapeSymbol::Output(output))
    }

    /// Place an arbitrary non-marker symbol under the head.
    ///
    /// This is how predecessor reconstruction re-materialises the cell
    /// a rule read before it fired — the only path by which `Input`
    /// cells appear on a reverse-built tape.
    pub(crate) fn overlay(&self, symbol: TapeSymbol<I, O>) -> Self {
        debug_assert!(!symbol.is_marker(), "markers are never stored in cells");
        Tape {
            size: self.size + usize::from(self.head.is_none()),
            head: Some(symbol),
            left: self.left.clone(),
            right: self.right.clone(),
            left_bound: self.left_bound,
            right_bound: self.right_bound,
        }
    }

    /// Shift the head one cell to the left.
    ///
    /// Off the left extent the head position becomes empty; the former
    /// head cell, if any, is now the nearest right neighbour.
    pub fn move_left(&self) -> Self {
        let right = match &self.head {
            Some(cell) => self.right.push(cell.clone()),
            None => self.right.clone(),
        };
        Tape {
            head: self.left.first().cloned(),
            left: self.left.rest(),
            right,
            size: self.size,
            left_bound: self.left_bound,
            right_bound: self.right_bound,
        }
    }

    /// Shift the head one cell to the right. Mirror of
    /// [`Tape::move_left`].
    pub fn move_right(&self) -> Self {
        let left = match &self.head {
            Some(cell) => self.left.push(cell.clone()),
            None => self.left.clone(),
        };
        Tape {
            head: self.right.first().cloned(),
            right: self.right.rest(),
            left,
            size: self.size,
            left_bound: self.left_bound,
            right_bound: self.right_bound,
        }
    }

    /// Latch the left boundary. Monotonic: once bound, always bound.
    pub fn bind_left(&self) -> Self {
        Tape {
            left_bound: true,
            ..self.clone()
        }
    }

    /// Latch the right boundary. Monotonic.
    pub fn bind_right(&self) -> Self {
        Tape {
            right_bound: true,
            ..self.clone()
        }
    }

    /// Number of writable cells.
    pub fn size(&self) -> usize {
        self.size
    }

    /// All writable cells, left to right. O(size).
    pub fn cells(&self) -> Vec<TapeSymbol<I, O>> {
        let mut out: Vec<_> = self.left.iter().cloned().collect();
        out.reverse();
        out.extend(self.head.clone());
        out.extend(self.right.iter().cloned());
        out
    }

    /// Project the cells to their input values, left to right.
    ///
    /// Returns `None` when any cell still holds an `Output` — a tape
    /// with output residue is not a machine input.
    pub fn input_cells(&self) -> Option<Vec<I>> {
        self.cells()
            .into_iter()
            .map(|cell| match cell {
                TapeSymbol::Input(value) => Some(value),
                _ => None,
            })
            .collect()
    }
}
