//! The 7-bit rule key.

use std::fmt;

/// Address of one rule-table entry: `central<<6 | xpair<<4 | ypair<<2 | zpair`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleKey(u8);

impl RuleKey {
    /// Number of distinct keys.
    pub const COUNT: usize = 128;

    /// Build a key from the central state and three pair codes.
    ///
    /// Each pair code must be in `0..4`.
    #[inline]
    pub fn new(central: bool, x_pair: u8, y_pair: u8, z_pair: u8) -> Self {
        debug_assert!(
            x_pair < 4 && y_pair < 4 && z_pair < 4,
            "pair codes must be 2-bit: ({x_pair}, {y_pair}, {z_pair})"
        );
        Self(((central as u8) << 6) | (x_pair << 4) | (y_pair << 2) | z_pair)
    }

    /// Key with the given numeric value, or `None` if it is not below 128.
    pub fn from_index(index: u8) -> Option<Self> {
        (usize::from(index) < Self::COUNT).then_some(Self(index))
    }

    /// Numeric value of the key.
    #[inline]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// State of the central cell.
    pub fn central(self) -> bool {
        (self.0 >> 6) & 1 == 1
    }

    /// X pair code.
    pub fn x_pair(self) -> u8 {
        (self.0 >> 4) & 0b11
    }

    /// Y pair code.
    pub fn y_pair(self) -> u8 {
        (self.0 >> 2) & 0b11
    }

    /// Z pair code.
    pub fn z_pair(self) -> u8 {
        self.0 & 0b11
    }

    /// Every key in ascending order.
    pub fn all() -> impl Iterator<Item = RuleKey> {
        (0..Self::COUNT as u8).map(Self)
    }
}

impl fmt::Display for RuleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{:02b}{:02b}{:02b}",
            self.central() as u8,
            self.x_pair(),
            self.y_pair(),
            self.z_pair()
        )
    }
}
