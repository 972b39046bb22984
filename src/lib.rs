//! # retroparse
//!
//! Forward parsing and reverse generation for deterministic
//! linear-bounded machines.
//!
//! A linear-bounded machine — a Turing machine whose tape cannot grow
//! past a caller-supplied budget — is built once from a rule table and
//! then drives two executions over the same rules:
//!
//! - **parse** runs the machine forwards over an input tape and
//!   reports acceptance;
//! - **generate** runs the rules *backwards* from the accept state and
//!   lazily streams every input tape the machine would accept, up to a
//!   tape-length bound.
//!
//! Reverse execution inverts a relation that is not generally
//! injective: many configurations can precede one. The generator
//! stays fast anyway because candidate predecessors are indexed by the
//! symbol each rule leaves on the tape, so only rules consistent with
//! the cells already reconstructed are ever tried — a machine guarding
//! a 10-character alphanumeric secret exposes a 62¹⁰ forward search
//! space but only a handful of reverse candidates per configuration.
//!
//! The machine class is the classical one:
//!
//! > Kuroda, S.-Y. "Classes of languages and linear-bounded
//! > automata." Information and Control 7.2 (1964): 207–223.
//!
//! ## Example
//!
//! ```
//! use retroparse::prelude::*;
//!
//! // Alternating bits: no two adjacent cells are equal.
//! let machine: Machine<&str, char, char> = Machine::new(
//!     "any",
//!     vec![
//!         Transition::middle(
//!             "any",
//!             TapeSymbol::Input('0'),
//!             None,
//!             Direction::Right,
//!             Some(MachineState::Running("after0")),
//!         ),
//!         Transition::middle(
//!             "any",
//!             TapeSymbol::Input('1'),
//!             None,
//!             Direction::Right,
//!             Some(MachineState::Running("after1")),
//!         ),
//!         Transition::middle(
//!             "after0",
//!             TapeSymbol::Input('1'),
//!             None,
//!             Direction::Right,
//!             Some(MachineState::Running("after1")),
//!         ),
//!         Transition::middle(
//!             "after1",
//!             TapeSymbol::Input('0'),
//!             None,
//!             Direction::Right,
//!             Some(MachineState::Running("after0")),
//!         ),
//!         Transition::at_right_end("any", Direction::Hold, Some(MachineState::Accept)),
//!         Transition::at_right_end("after0", Direction::Hold, Some(MachineState::Accept)),
//!         Transition::at_right_end("after1", Direction::Hold, Some(MachineState::Accept)),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(machine.parse("0101".chars()));
//! assert!(!machine.parse("0110".chars()));
//!
//! // Every accepted tape of at most three cells, discovered in
//! // reverse.
//! let mut tapes: Vec<String> = machine
//!     .generate(3)
//!     .map(|tape| tape.into_iter().collect())
//!     .collect();
//! tapes.sort();
//! assert_eq!(tapes, ["", "0", "01", "010", "1", "10", "101"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod machine;
pub mod tape;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::machine::{
        Configuration, Direction, Generate, Machine, MachineError, MachineState, StateValue,
        Transition,
    };
    pub use crate::tape::{Symbol, Tape, TapeSymbol};
}
