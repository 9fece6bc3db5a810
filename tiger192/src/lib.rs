//! The [Tiger][1] hash function, in its original and Tiger2 padding
//! variants, with the S-box generated from a seed instead of compiled in.
//!
//! # Usage
//!
//! ```rust
//! use tiger192::{Generator, SBox};
//!
//! // the published table; build it once and share it
//! let sbox = SBox::new();
//!
//! let digest = Generator::new(&sbox).update(b"abc").finalize();
//! assert_eq!(digest.to_string(), "2AAB1484E8C158F2BFB8C5FF41B57A525129131C957B5F93");
//!
//! let digest = Generator::tiger2(&sbox).update(b"abc").finalize();
//! assert_eq!(digest.to_string(), "F68D7BC5AF4B43A06E048D7829560D4A9415658BB0B1F3BF");
//! ```
//!
//! A [`Generator`] also implements the `Input`, `FixedOutput` and `Reset`
//! traits of the [`digest`] crate.
//!
//! [1]: https://en.wikipedia.org/wiki/Tiger_(hash_function)

#![no_std]
#[cfg(any(feature = "std", test))]
extern crate std;
#[macro_use]
extern crate opaque_debug;

pub use digest;

#[macro_use]
mod macros;
mod compress;
mod consts;
mod error;
mod generator;
mod output;
mod sbox;

pub use consts::{DEFAULT_PASSES, DEFAULT_SEED, SBOX_PASSES};
pub use error::ParseDigestError;
pub use generator::{Generator, Padding};
pub use output::Digest;
pub use sbox::SBox;

/// Classic Tiger over `data` with three passes.
pub fn tiger(sbox: &SBox, data: &[u8]) -> Digest {
    Generator::new(sbox).update(data).finalize()
}

/// Tiger2 over `data` with three passes.
pub fn tiger2(sbox: &SBox, data: &[u8]) -> Digest {
    Generator::tiger2(sbox).update(data).finalize()
}
