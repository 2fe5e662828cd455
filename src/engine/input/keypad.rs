// Key matrix layout and the scanner interface

use std::fmt;

/// Number of rows and columns on the key matrix
pub const KEYPAD_SIZE: usize = 4;

/// Printed legend of the 4x4 keypad, indexed by `[row][col]`
pub const KEY_LEGEND: [[char; KEYPAD_SIZE]; KEYPAD_SIZE] = [
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
];

/// Key that submits the typed answer
pub const SUBMIT_KEY: char = 'A';

/// Key that erases the typed answer
pub const CLEAR_KEY: char = '*';

/// Physical position of a key on the matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPosition {
    pub row: u8,
    pub col: u8,
}

impl KeyPosition {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Character printed on this key, `None` outside the matrix
    pub fn legend(&self) -> Option<char> {
        KEY_LEGEND
            .get(self.row as usize)
            .and_then(|row| row.get(self.col as usize))
            .copied()
    }

    /// Find the key carrying the given legend character
    pub fn of_legend(key: char) -> Option<Self> {
        KEY_LEGEND.iter().enumerate().find_map(|(row, keys)| {
            keys.iter()
                .position(|&k| k == key)
                .map(|col| Self::new(row as u8, col as u8))
        })
    }
}

impl fmt::Display for KeyPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.legend() {
            Some(key) => write!(f, "'{}' (r{} c{})", key, self.row, self.col),
            None => write!(f, "? (r{} c{})", self.row, self.col),
        }
    }
}

/// Debounced key matrix scanner
///
/// Called once per loop tick. Must not block and reports at most one press
/// per call.
pub trait KeyScanner {
    fn scan(&mut self) -> Option<KeyPosition>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_lookup() {
        assert_eq!(KeyPosition::new(0, 0).legend(), Some('1'));
        assert_eq!(KeyPosition::new(0, 3).legend(), Some(SUBMIT_KEY));
        assert_eq!(KeyPosition::new(3, 0).legend(), Some(CLEAR_KEY));
        assert_eq!(KeyPosition::new(3, 1).legend(), Some('0'));
    }

    #[test]
    fn test_legend_outside_matrix() {
        assert_eq!(KeyPosition::new(4, 0).legend(), None);
        assert_eq!(KeyPosition::new(0, 7).legend(), None);
    }

    #[test]
    fn test_of_legend_inverts_legend() {
        for row in 0..KEYPAD_SIZE as u8 {
            for col in 0..KEYPAD_SIZE as u8 {
                let position = KeyPosition::new(row, col);
                let key = position.legend().unwrap();
                assert_eq!(KeyPosition::of_legend(key), Some(position));
            }
        }
        assert_eq!(KeyPosition::of_legend('x'), None);
    }

    #[test]
    fn test_no_duplicate_legends() {
        let mut seen = std::collections::HashSet::new();
        for key in KEY_LEGEND.iter().flatten() {
            assert!(seen.insert(*key), "Duplicate legend {key}");
        }
    }
}
