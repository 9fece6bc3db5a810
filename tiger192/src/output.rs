use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::Index;
use core::slice;
use core::str::FromStr;

use byte_tools::{read_u64v_le, write_u64v_le};

use crate::consts::DIGEST_LEN;
use crate::error::ParseDigestError;

/// A Tiger192 hash value.
///
/// The bytes are the three final state words, each written little-endian,
/// so a digest is the same on every host. Comparison is byte-lexicographic
/// and the textual form is 48 uppercase hex digits, byte 0 first.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// Number of bytes in a digest.
    pub const LEN: usize = DIGEST_LEN;

    pub(crate) fn from_state(state: &[u64; 3]) -> Self {
        let mut bytes = [0u8; DIGEST_LEN];
        write_u64v_le(&mut bytes, state);
        Digest(bytes)
    }

    /// Wraps 24 raw bytes, e.g. a digest loaded from storage.
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    pub const fn len(&self) -> usize {
        DIGEST_LEN
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    pub fn into_bytes(self) -> [u8; DIGEST_LEN] {
        self.0
    }

    pub fn iter(&self) -> slice::Iter<'_, u8> {
        self.0.iter()
    }

    /// Folds the digest into a machine word for use as a hash-table key.
    ///
    /// The three little-endian words are XORed together and, on hosts
    /// narrower than 64 bits, the halves are XORed again until the value
    /// fits in a `usize`. This has nothing to do with the strength of the
    /// digest itself.
    pub fn scalar_hash(&self) -> usize {
        let mut words = [0u64; 3];
        read_u64v_le(&mut words, &self.0);

        let mut folded = words[0] ^ words[1] ^ words[2];
        let mut width = u64::BITS;
        while width > usize::BITS {
            width /= 2;
            folded ^= folded >> width;
        }
        folded as usize
    }
}

impl Hash for Digest {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.scalar_hash());
    }
}

impl Index<usize> for Digest {
    type Output = u8;

    fn index(&self, index: usize) -> &u8 {
        &self.0[index]
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a Digest {
    type Item = &'a u8;
    type IntoIter = slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<[u8; DIGEST_LEN]> for Digest {
    fn from(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::UpperHex::fmt(self, f)
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({:X})", self)
    }
}

impl FromStr for Digest {
    type Err = ParseDigestError;

    /// Parses 48 hex digits in either case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 * DIGEST_LEN {
            return Err(ParseDigestError::InvalidLength(s.len()));
        }

        let mut bytes = [0u8; DIGEST_LEN];
        for (index, character) in s.char_indices() {
            let nibble = character
                .to_digit(16)
                .ok_or(ParseDigestError::InvalidCharacter { character, index })?;
            bytes[index / 2] = (bytes[index / 2] << 4) | nibble as u8;
        }
        Ok(Digest(bytes))
    }
}
