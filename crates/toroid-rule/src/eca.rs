//! Elementary cellular automata embedded in the 3-axis rule space.
//!
//! A classic ECA rule number `n` maps each 3-cell neighborhood
//! `(left, center, right)` to bit `(l<<2)|(c<<1)|r` of `n` (Wolfram's
//! numbering). The 1D embedding reads the X axis only: the left neighbor
//! is the X predecessor, the right neighbor is the X successor, and the Y
//! and Z pair codes are forced to 0. Only the 8 keys of that form are
//! populated; the other 120 entries stay dead and are never addressed by
//! a one-axis session.

use crate::key::RuleKey;
use crate::table::RuleTable;

/// Common elementary rule numbers.
pub mod presets {
    /// Rule 30: chaotic.
    pub const RULE_30: u8 = 30;
    /// Rule 90: XOR of both neighbors, draws a Sierpinski triangle.
    pub const RULE_90: u8 = 90;
    /// Rule 110: Turing complete.
    pub const RULE_110: u8 = 110;
    /// Rule 184: traffic flow.
    pub const RULE_184: u8 = 184;
    /// Rule 250: simple growth.
    pub const RULE_250: u8 = 250;
}

/// Next state of the center cell under Wolfram rule `n`.
pub fn wolfram_transition(n: u8, left: bool, center: bool, right: bool) -> bool {
    let neighborhood = ((left as u8) << 2) | ((center as u8) << 1) | right as u8;
    (n >> neighborhood) & 1 == 1
}

/// Key addressed by a one-axis session for this neighborhood.
pub fn eca_key(left: bool, center: bool, right: bool) -> RuleKey {
    let x_pair = ((left as u8) << 1) | right as u8;
    RuleKey::new(center, x_pair, 0, 0)
}

impl RuleTable {
    /// Embed Wolfram rule `n` in the 128-entry table.
    pub fn from_eca_number(n: u8) -> Self {
        let mut table = RuleTable::default();
        for neighborhood in 0u8..8 {
            let left = neighborhood & 0b100 != 0;
            let center = neighborhood & 0b010 != 0;
            let right = neighborhood & 0b001 != 0;
            table = table.with_entry(
                eca_key(left, center, right),
                wolfram_transition(n, left, center, right),
            );
        }
        table
    }
}
