//! # multiformats
//!
//! Unsigned varints, a multicodec code table and self-describing multihashes
//! for `no_std` environments.
//!
//! The table is an ordinary value: build it once with
//! [`CodeTable::multicodec`] (or your own rows through
//! [`CodeTable::builder`]) and share it by reference.

#![deny(
  clippy::missing_errors_doc,
  clippy::missing_panics_doc,
  clippy::missing_safety_doc
)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
#[cfg(test)]
extern crate rand;

pub mod codes;
pub mod error;
pub mod hash;
pub mod multihash;
pub mod table;
pub mod varint;

pub use error::{
  Error,
  Result,
};
pub use hash::{
  Code,
  MultihashDigest,
  UnsupportedCode,
};
pub use multihash::Multihash;
pub use table::{
  CodeTable,
  CodeTableBuilder,
  Entry,
};

#[cfg(feature = "multibase")]
pub use multibase;
