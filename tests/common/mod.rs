//! Machines shared across the integration suites.
//!
//! Each builder returns a small machine exercising a different corner
//! of the rule space: the palindrome checker erases from both ends,
//! the alternating checker never writes, the Bach checker counts by
//! repeated erasure passes, and the password checker forces reverse
//! search through a search space that is hopeless forwards.

#![allow(dead_code)]

use retroparse::machine::Direction::{Hold, Left, Right};
use retroparse::machine::MachineState::{Accept, Running};
use retroparse::prelude::*;
use retroparse::tape::TapeSymbol::Input;

pub type CharMachine = Machine<&'static str, char, char>;

/// Palindromes over `{0, 1}`.
///
/// Erases the leftmost cell, scans right to the matching end, erases
/// it too, walks back and repeats; mismatches fall off the rule table
/// and reject.
pub fn palindrome() -> CharMachine {
    Machine::new(
        "next",
        vec![
            // Pick the leftmost unerased cell.
            Transition::middle("next", Input('0'), Some('x'), Right, Some(Running("seek0"))),
            Transition::middle("next", Input('1'), Some('x'), Right, Some(Running("seek1"))),
            Transition::middle("next", TapeSymbol::Output('x'), None, Hold, Some(Accept)),
            Transition::at_right_end("next", Hold, Some(Accept)),
            // Scan right for the far end of the unerased region.
            Transition::middle("seek0", Input('0'), None, Right, None),
            Transition::middle("seek0", Input('1'), None, Right, None),
            Transition::middle("seek0", TapeSymbol::Output('x'), None, Left, Some(Running("match0"))),
            Transition::at_right_end("seek0", Left, Some(Running("match0"))),
            Transition::middle("seek1", Input('0'), None, Right, None),
            Transition::middle("seek1", Input('1'), None, Right, None),
            Transition::middle("seek1", TapeSymbol::Output('x'), None, Left, Some(Running("match1"))),
            Transition::at_right_end("seek1", Left, Some(Running("match1"))),
            // The rightmost unerased cell must mirror the erased one.
            Transition::middle("match0", Input('0'), Some('x'), Left, Some(Running("back"))),
            Transition::middle("match0", TapeSymbol::Output('x'), None, Hold, Some(Accept)),
            Transition::middle("match1", Input('1'), Some('x'), Left, Some(Running("back"))),
            Transition::middle("match1", TapeSymbol::Output('x'), None, Hold, Some(Accept)),
            // Walk back to the left edge of the unerased region.
            Transition::middle("back", Input('0'), None, Left, None),
            Transition::middle("back", Input('1'), None, Left, None),
            Transition::middle("back", TapeSymbol::Output('x'), None, Right, Some(Running("next"))),
            Transition::at_left_end("back", Right, Some(Running("next"))),
        ],
    )
    .unwrap()
}

/// Strings over `{0, 1}` with no two adjacent equal cells.
pub fn alternating() -> CharMachine {
    Machine::new(
        "any",
        vec![
            Transition::middle("any", Input('0'), None, Right, Some(Running("after0"))),
            Transition::middle("any", Input('1'), None, Right, Some(Running("after1"))),
            Transition::middle("after0", Input('1'), None, Right, Some(Running("after1"))),
            Transition::middle("after1", Input('0'), None, Right, Some(Running("after0"))),
            Transition::at_right_end("any", Hold, Some(Accept)),
            Transition::at_right_end("after0", Hold, Some(Accept)),
            Transition::at_right_end("after1", Hold, Some(Accept)),
        ],
    )
    .unwrap()
}

/// Strings over `{A, B, C}` with equal counts of all three letters.
///
/// Each pass erases one `A`, one `B` and one `C`; once no `A` remains
/// the verify sweep insists the whole tape is erased.
pub fn bach() -> CharMachine {
    let erased = || TapeSymbol::Output('x');
    Machine::new(
        "a",
        vec![
            // Erase the first A of the pass.
            Transition::middle("a", Input('A'), Some('x'), Left, Some(Running("ra"))),
            Transition::middle("a", Input('B'), None, Right, None),
            Transition::middle("a", Input('C'), None, Right, None),
            Transition::middle("a", erased(), None, Right, None),
            Transition::at_right_end("a", Left, Some(Running("verify"))),
            Transition::middle("ra", Input('B'), None, Left, None),
            Transition::middle("ra", Input('C'), None, Left, None),
            Transition::middle("ra", erased(), None, Left, None),
            Transition::at_left_end("ra", Right, Some(Running("b"))),
            // Then one B.
            Transition::middle("b", Input('B'), Some('x'), Left, Some(Running("rb"))),
            Transition::middle("b", Input('A'), None, Right, None),
            Transition::middle("b", Input('C'), None, Right, None),
            Transition::middle("b", erased(), None, Right, None),
            Transition::middle("rb", Input('A'), None, Left, None),
            Transition::middle("rb", Input('C'), None, Left, None),
            Transition::middle("rb", erased(), None, Left, None),
            Transition::at_left_end("rb", Right, Some(Running("c"))),
            // Then one C.
            Transition::middle("c", Input('C'), Some('x'), Left, Some(Running("rc"))),
            Transition::middle("c", Input('A'), None, Right, None),
            Transition::middle("c", Input('B'), None, Right, None),
            Transition::middle("c", erased(), None, Right, None),
            Transition::middle("rc", Input('A'), None, Left, None),
            Transition::middle("rc", Input('B'), None, Left, None),
            Transition::middle("rc", erased(), None, Left, None),
            Transition::at_left_end("rc", Right, Some(Running("a"))),
            // No A left: everything else must be erased too. On the
            // empty tape the leftward move out of "a" stays pinned on
            // the right marker, so verify accepts from either end.
            Transition::middle("verify", erased(), None, Left, None),
            Transition::at_left_end("verify", Hold, Some(Accept)),
            Transition::at_right_end("verify", Hold, Some(Accept)),
        ],
    )
    .unwrap()
}

/// The secret the password machine guards: 10 characters drawn from
/// the 62-letter alphanumeric alphabet.
pub const PASSWORD: &str = "aB3dE5gH7j";

/// Accepts exactly [`PASSWORD`].
///
/// Forward search over all length-10 alphanumeric tapes would wade
/// through 62¹⁰ candidates; reverse search walks the single accepting
/// path.
pub fn password() -> Machine<u8, char, char> {
    let mut rules: Vec<Transition<u8, char, char>> = PASSWORD
        .chars()
        .enumerate()
        .map(|(position, letter)| {
            Transition::middle(
                position as u8,
                Input(letter),
                None,
                Right,
                Some(Running(position as u8 + 1)),
            )
        })
        .collect();
    rules.push(Transition::at_right_end(
        PASSWORD.len() as u8,
        Hold,
        Some(Accept),
    ));
    Machine::new(0, rules).unwrap()
}

/// Accepts the empty tape and nothing else.
pub fn empty_only() -> CharMachine {
    Machine::new(
        "s",
        vec![Transition::at_right_end("s", Hold, Some(Accept))],
    )
    .unwrap()
}
