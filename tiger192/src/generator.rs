use block_buffer::BlockBuffer;
use byte_tools::{read_u64v_le, write_u64v_le};
use digest::generic_array::typenum::{U24, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};
use log::{debug, trace};

use crate::compress::compress;
use crate::consts::{BLOCK_LEN, DEFAULT_PASSES, INITIAL_STATE};
use crate::output::Digest;
use crate::sbox::SBox;

type Block = GenericArray<u8, U64>;

const ZEROS: [u8; BLOCK_LEN] = [0; BLOCK_LEN];

/// Which marker byte starts the message padding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Padding {
    /// Original Tiger, marker `0x01`.
    Tiger,
    /// Tiger2, marker `0x80` as in MD4-style hashes.
    Tiger2,
}

impl Padding {
    /// First padding byte appended after the message.
    pub fn marker(self) -> u8 {
        match self {
            Padding::Tiger => 0x01,
            Padding::Tiger2 => 0x80,
        }
    }
}

impl Default for Padding {
    fn default() -> Self {
        Padding::Tiger
    }
}

/// Streaming Tiger192 hasher.
///
/// A generator borrows the [`SBox`] it was created with and owns everything
/// else, so any number of generators can hash independent inputs against one
/// table at the same time.
///
/// Once [`finalize`](Generator::finalize) has been called the generator only
/// hands out the same digest again; feeding it more input panics until it is
/// [`reset`](Generator::reset).
#[derive(Clone)]
pub struct Generator<'a> {
    sbox: &'a SBox,
    buffer: BlockBuffer<U64>,
    count: u64,
    passes: usize,
    padding: Padding,
    finalized: bool,
    state: [u64; 3],
}

fn compress_block(state: &mut [u64; 3], block: &Block, sbox: &SBox, passes: usize) {
    let mut words = [0u64; 8];
    read_u64v_le(&mut words, block);
    compress(state, &words, sbox.table(), passes);
}

impl<'a> Generator<'a> {
    /// Classic Tiger with three passes.
    pub fn new(sbox: &'a SBox) -> Self {
        Self::with_config(sbox, DEFAULT_PASSES, Padding::Tiger)
    }

    /// Tiger2 padding with three passes.
    pub fn tiger2(sbox: &'a SBox) -> Self {
        Self::with_config(sbox, DEFAULT_PASSES, Padding::Tiger2)
    }

    /// Classic Tiger with `passes` compression passes (at least three).
    pub fn with_passes(sbox: &'a SBox, passes: usize) -> Self {
        Self::with_config(sbox, passes, Padding::Tiger)
    }

    /// Fully configured generator. Pass counts below three are raised to
    /// three rather than weakening the hash.
    pub fn with_config(sbox: &'a SBox, passes: usize, padding: Padding) -> Self {
        if passes < DEFAULT_PASSES {
            debug!("raising Tiger pass count from {} to {}", passes, DEFAULT_PASSES);
        }
        Generator {
            sbox,
            buffer: BlockBuffer::default(),
            count: 0,
            passes: passes.max(DEFAULT_PASSES),
            padding,
            finalized: false,
            state: INITIAL_STATE,
        }
    }

    /// Compression passes applied to every block.
    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Padding convention chosen at construction.
    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Whether this generator uses Tiger2 padding.
    pub fn is_tiger2(&self) -> bool {
        self.padding == Padding::Tiger2
    }

    /// Whether `finalize` has run since construction or the last reset.
    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Bytes absorbed so far. After finalization this includes the padding.
    pub fn byte_count(&self) -> u64 {
        self.count
    }

    /// Starts a fresh computation, keeping the S-box, pass count and padding.
    pub fn reset(&mut self) -> &mut Self {
        self.state = INITIAL_STATE;
        self.buffer.reset();
        self.count = 0;
        self.finalized = false;
        self
    }

    /// Feeds `data` into the hash.
    ///
    /// # Panics
    ///
    /// Panics if the generator has been finalized and not reset since.
    pub fn update<T: AsRef<[u8]>>(&mut self, data: T) -> &mut Self {
        assert!(!self.finalized, "Tiger generator updated after finalize; reset it first");
        self.absorb(data.as_ref());
        self
    }

    /// Feeds a single byte into the hash.
    ///
    /// # Panics
    ///
    /// Panics if the generator has been finalized and not reset since.
    pub fn update_byte(&mut self, value: u8) -> &mut Self {
        self.update([value])
    }

    /// Pads the message, compresses the last block and returns the digest.
    ///
    /// Calling this again returns the same digest without touching the state.
    pub fn finalize(&mut self) -> Digest {
        if !self.finalized {
            trace!("finalizing Tiger digest over {} bytes", self.count);

            let bit_len = self.count.wrapping_mul(8);
            self.absorb(&[self.padding.marker()]);

            let remain = BLOCK_LEN - (self.count % BLOCK_LEN as u64) as usize;
            if remain >= 8 {
                self.absorb(&ZEROS[..remain - 8]);
            } else {
                // no room left for the length; it goes in an extra block
                self.absorb(&ZEROS[..remain]);
                self.absorb(&ZEROS[..BLOCK_LEN - 8]);
            }

            let mut len_bytes = [0u8; 8];
            write_u64v_le(&mut len_bytes, &[bit_len]);
            self.absorb(&len_bytes);

            debug_assert_eq!(self.count % BLOCK_LEN as u64, 0, "padding left a partial block");
            self.finalized = true;
        }
        Digest::from_state(&self.state)
    }

    fn absorb(&mut self, data: &[u8]) {
        let state = &mut self.state;
        let sbox = self.sbox;
        let passes = self.passes;
        self.buffer.input(data, |block| compress_block(state, block, sbox, passes));
        self.count += data.len() as u64;
    }
}

impl_opaque_debug!(Generator<'_>);

impl<'a> BlockInput for Generator<'a> {
    type BlockSize = U64;
}

impl<'a> Input for Generator<'a> {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        self.update(input);
    }
}

impl<'a> FixedOutput for Generator<'a> {
    type OutputSize = U24;

    fn fixed_result(mut self) -> GenericArray<u8, U24> {
        GenericArray::clone_from_slice(self.finalize().as_bytes())
    }
}

impl<'a> Reset for Generator<'a> {
    fn reset(&mut self) {
        Generator::reset(self);
    }
}

/// Writing to a finalized generator fails with `ErrorKind::Other` instead
/// of panicking like [`Generator::update`].
#[cfg(feature = "std")]
impl<'a> std::io::Write for Generator<'a> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.finalized {
            return Err(std::io::Error::new(
                std::io::ErrorKind::Other,
                "Tiger generator already finalized",
            ));
        }
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
