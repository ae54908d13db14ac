//! Random secrets for the scripted opponent.

use rand::Rng;
use tracing::{debug, instrument};

use crate::code::{CODE_LENGTH, Code};

/// Draws a uniformly random code.
///
/// Runs the first three steps of a Fisher–Yates shuffle over the digits
/// 0–9, which yields an ordered sample without replacement in constant
/// time.
#[instrument(skip(rng))]
pub fn random_code<R: Rng>(rng: &mut R) -> Code {
    let mut pool: [u8; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    for i in 0..CODE_LENGTH {
        let j = rng.random_range(i..pool.len());
        pool.swap(i, j);
    }

    let mut digits = [0u8; CODE_LENGTH];
    digits.copy_from_slice(&pool[..CODE_LENGTH]);
    let code = Code::from_digits_unchecked(digits);
    debug!("Opponent secret drawn");
    code
}
