//! The 128-entry rule table.

use std::fmt;

use rand::Rng;
use toroid_core::RuleError;

use crate::key::RuleKey;

/// Length of the wire encoding of a rule table.
pub const RULE_BYTES: usize = 16;

/// A complete transition function: 128 boolean entries indexed by [`RuleKey`].
///
/// Entry `i` is bit `i` of the underlying `u128`. Rule tables are
/// immutable values with no identity; two tables with the same bits are
/// interchangeable.
///
/// # Examples
///
/// ```
/// use toroid_rule::RuleTable;
///
/// let rule = RuleTable::from_eca_number(90);
/// let bytes = rule.to_bytes();
/// assert_eq!(RuleTable::from_bytes(&bytes).unwrap(), rule);
///
/// // Rule 90 is XOR of left and right: (l=1, c=0, r=0) lives.
/// assert!(rule.lives(false, 0b10, 0, 0));
/// assert!(!rule.lives(false, 0b11, 0, 0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RuleTable(u128);

impl RuleTable {
    /// Table whose entry `i` is bit `i` of `bits`.
    pub const fn from_raw_bits(bits: u128) -> Self {
        Self(bits)
    }

    /// Decode the 16-byte wire encoding.
    ///
    /// Entry `i` is byte `i / 8`, bit `i % 8`. Returns
    /// `Err(RuleError::MalformedEncoding)` unless `bytes` is exactly 16
    /// bytes long.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, RuleError> {
        let array: [u8; RULE_BYTES] = bytes
            .try_into()
            .map_err(|_| RuleError::MalformedEncoding { len: bytes.len() })?;
        Ok(Self(u128::from_le_bytes(array)))
    }

    /// Build a table by evaluating `f` for every key.
    pub fn from_fn(mut f: impl FnMut(RuleKey) -> bool) -> Self {
        RuleKey::all()
            .filter(|&key| f(key))
            .fold(Self(0), |table, key| table.with_entry(key, true))
    }

    /// Draw every entry independently from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random())
    }

    /// Encode as 16 bytes, the inverse of [`from_bytes`](Self::from_bytes).
    pub fn to_bytes(self) -> [u8; RULE_BYTES] {
        self.0.to_le_bytes()
    }

    /// The raw 128-bit value.
    pub const fn bits(self) -> u128 {
        self.0
    }

    /// The entry at `key`.
    #[inline]
    pub fn entry(self, key: RuleKey) -> bool {
        (self.0 >> key.index()) & 1 == 1
    }

    /// A copy of this table with the entry at `key` replaced.
    #[must_use]
    pub fn with_entry(self, key: RuleKey, alive: bool) -> Self {
        let mask = 1u128 << key.index();
        if alive {
            Self(self.0 | mask)
        } else {
            Self(self.0 & !mask)
        }
    }

    /// Whether a cell with this central state and these pair codes is alive
    /// in the next generation.
    #[inline]
    pub fn lives(self, central: bool, x_pair: u8, y_pair: u8, z_pair: u8) -> bool {
        let key = RuleKey::new(central, x_pair, y_pair, z_pair);
        // The key is already 7-bit; the reduction keeps any future key
        // derivation inside the table.
        (self.0 >> (key.index() % RuleKey::COUNT)) & 1 == 1
    }

    /// Number of keys that map to alive.
    pub fn live_entry_count(self) -> u32 {
        self.0.count_ones()
    }
}

impl fmt::Display for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", self.0)
    }
}

impl TryFrom<&[u8]> for RuleTable {
    type Error = RuleError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}
