/// Chaining value every hash computation (and S-box generation) starts from.
pub const INITIAL_STATE: [u64; 3] = [0x0123456789ABCDEF, 0xFEDCBA9876543210, 0xF096A5B4C3B2E187];

pub const SCHEDULE_0: u64 = 0xA5A5A5A5A5A5A5A5;
pub const SCHEDULE_1: u64 = 0x0123456789ABCDEF;

/// Number of 64-bit words in an S-box: four sub-tables of 256 entries.
pub const SBOX_LEN: usize = 4 * 256;

/// Seed of the published Tiger S-box.
pub const DEFAULT_SEED: &[u8; 64] = b"Tiger - A Fast New Hash Function, by Ross Anderson and Eli Biham";

/// Passes used to generate the published S-box.
pub const SBOX_PASSES: usize = 5;

/// Compression passes per block. Also the lowest count a generator accepts.
pub const DEFAULT_PASSES: usize = 3;

pub const BLOCK_LEN: usize = 64;
pub const DIGEST_LEN: usize = 24;
