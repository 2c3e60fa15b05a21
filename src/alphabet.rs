// SPDX-License-Identifier: Parity-7.0.0 OR PolyForm-Noncommercial-1.0.0
//! The two component label sets.
//!
//! Slots are addressed either positionally (`x y z w`) or as colors (`r g b a`). Both sets name
//! the same storage: `x` and `r` are slot 0, `w` and `a` are slot 3. A single accessor name
//! never mixes the two sets.

/// A component label set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `x y z w`
    Position,
    /// `r g b a`
    Color,
}

impl Alphabet {
    pub const ALL: [Alphabet; 2] = [Alphabet::Position, Alphabet::Color];

    pub const fn labels(self) -> [char; 4] {
        match self {
            Alphabet::Position => ['x', 'y', 'z', 'w'],
            Alphabet::Color => ['r', 'g', 'b', 'a'],
        }
    }

    /// The label for `slot`, or `None` past slot 3.
    pub const fn label(self, slot: usize) -> Option<char> {
        if slot < 4 {
            Some(self.labels()[slot])
        } else {
            None
        }
    }

    /// Which alphabet `label` belongs to, and the slot it names.
    pub fn classify(label: char) -> Option<(Alphabet, usize)> {
        Alphabet::ALL.into_iter().find_map(|alphabet| {
            alphabet
                .labels()
                .iter()
                .position(|&c| c == label)
                .map(|slot| (alphabet, slot))
        })
    }
}
