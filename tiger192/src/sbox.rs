use byte_tools::read_u64v_le;
use log::debug;

use crate::compress::compress;
use crate::consts::{BLOCK_LEN, DEFAULT_PASSES, DEFAULT_SEED, INITIAL_STATE, SBOX_LEN, SBOX_PASSES};

/// Every byte set to one.
const FILL: u64 = 0x0101_0101_0101_0101;

/// The Tiger substitution table: four sub-tables of 256 words each.
///
/// Building a table runs a few thousand compressions, so build it once and
/// hand out `&SBox` to every [`Generator`](crate::Generator) that needs it.
/// The table never changes after construction.
#[derive(Clone, PartialEq, Eq)]
pub struct SBox {
    table: [u64; SBOX_LEN],
}

impl SBox {
    /// Generates the published Tiger S-box.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED, SBOX_PASSES)
    }

    /// Generates an S-box from an arbitrary seed.
    ///
    /// Only the first 64 bytes of `seed` are used; shorter seeds are padded
    /// with zeros. `passes` is the number of times every table position is
    /// visited.
    pub fn with_seed(seed: &[u8], passes: usize) -> Self {
        debug!("generating Tiger S-box from {}-byte seed, {} passes", seed.len(), passes);

        let mut table = [0u64; SBOX_LEN];
        for (i, entry) in table.iter_mut().enumerate() {
            *entry = FILL * (i as u64 & 0xFF);
        }

        let work = seed_block(seed);
        let mut state = INITIAL_STATE;
        let mut phase = 2;

        for _ in 0..passes {
            for i in 0..256 {
                for sub in (0..SBOX_LEN).step_by(256) {
                    phase += 1;
                    if phase == 3 {
                        phase = 0;
                        compress(&mut state, &work, &table, DEFAULT_PASSES);
                    }
                    for lane in 0..8 {
                        let other = sub + state_byte(&state, 8 * phase + lane) as usize;
                        swap_lane(&mut table, sub + i, other, lane);
                    }
                }
            }
        }

        SBox { table }
    }

    /// The raw table; sub-table `k` occupies `256 * k..256 * (k + 1)`.
    pub fn table(&self) -> &[u64; SBOX_LEN] {
        &self.table
    }
}

impl Default for SBox {
    fn default() -> Self {
        Self::new()
    }
}

impl_opaque_debug!(SBox);

/// Decodes up to 64 seed bytes into the message block used while mixing.
fn seed_block(seed: &[u8]) -> [u64; 8] {
    let mut bytes = [0u8; BLOCK_LEN];
    let n = seed.len().min(BLOCK_LEN);
    bytes[..n].copy_from_slice(&seed[..n]);

    let mut work = [0u64; 8];
    read_u64v_le(&mut work, &bytes);
    work
}

/// Byte `n` of the state viewed as 24 little-endian bytes.
#[inline]
fn state_byte(state: &[u64; 3], n: usize) -> u8 {
    (state[n / 8] >> (8 * (n % 8))) as u8
}

/// Exchanges byte `lane` of entries `p` and `q`.
#[inline]
fn swap_lane(table: &mut [u64; SBOX_LEN], p: usize, q: usize, lane: usize) {
    let mask = 0xFFu64 << (8 * lane);
    let (bp, bq) = (table[p] & mask, table[q] & mask);
    table[p] = (table[p] & !mask) | bq;
    table[q] = (table[q] & !mask) | bp;
}
