use core::num::Wrapping;

use crate::consts::{DEFAULT_PASSES, SBOX_LEN, SCHEDULE_0, SCHEDULE_1};

/// Byte `n` of `word`, counting from the least significant end.
#[inline(always)]
fn byte(word: u64, n: u32) -> usize {
    (word >> (8 * n)) as u8 as usize
}

/// Runs the Tiger compression function over one decoded message block,
/// folding the result back into `state`.
///
/// `passes` below three behaves like three; callers clamp before getting here.
pub(crate) fn compress(state: &mut [u64; 3], block: &[u64; 8], sbox: &[u64; SBOX_LEN], passes: usize) {
    let [s0, s1, s2] = *state;
    let (mut a, mut b, mut c) = (Wrapping(s0), Wrapping(s1), Wrapping(s2));
    let [mut x0, mut x1, mut x2, mut x3, mut x4, mut x5, mut x6, mut x7] = block.map(Wrapping);

    compress!(sbox, passes, a, b, c, [x0, x1, x2, x3, x4, x5, x6, x7]);

    state[0] = (a ^ Wrapping(s0)).0;
    state[1] = (b - Wrapping(s1)).0;
    state[2] = (c + Wrapping(s2)).0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::INITIAL_STATE;
    use crate::SBox;

    const BLOCK: [u64; 8] = [1, 2, 3, 4, 5, 6, 7, 8];

    #[test]
    fn extra_passes_change_the_output() {
        let sbox = SBox::new();

        let mut three = INITIAL_STATE;
        compress(&mut three, &BLOCK, sbox.table(), 3);
        let mut four = INITIAL_STATE;
        compress(&mut four, &BLOCK, sbox.table(), 4);

        assert_ne!(three, four);
    }

    #[test]
    fn fewer_than_three_passes_run_three() {
        let sbox = SBox::new();

        let mut clamped = INITIAL_STATE;
        compress(&mut clamped, &BLOCK, sbox.table(), 1);
        let mut three = INITIAL_STATE;
        compress(&mut three, &BLOCK, sbox.table(), 3);

        assert_eq!(clamped, three);
    }

    #[test]
    fn every_state_word_depends_on_every_block_word() {
        let sbox = SBox::new();
        let mut base = INITIAL_STATE;
        compress(&mut base, &BLOCK, sbox.table(), 3);

        for i in 0..8 {
            let mut block = BLOCK;
            block[i] ^= 1 << 63;
            let mut state = INITIAL_STATE;
            compress(&mut state, &block, sbox.table(), 3);
            for w in 0..3 {
                assert_ne!(state[w], base[w], "word {} unaffected by block word {}", w, i);
            }
        }
    }
}
