//! Currency constants

use crate::Amount;

/// Smallest-unit multiple for one whole coin (8 decimal places).
pub const COIN: Amount = 100_000_000;
