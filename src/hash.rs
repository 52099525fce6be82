use crate::{
  codes,
  error::{
    Error,
    Result,
  },
  multihash::Multihash,
  table::CodeTable,
};
use sp_std::convert::TryFrom;

#[cfg(any(feature = "sha1", feature = "sha2", feature = "sha3"))]
use digest::Digest;

/// A multicodec code naming a hash function this crate does not compute.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnsupportedCode(pub u64);

impl From<UnsupportedCode> for Error {
  fn from(e: UnsupportedCode) -> Self { Error::UnsupportedHash(e.0) }
}

/// Hash functions that can produce a [`Multihash`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Code {
  /// The input itself, unhashed.
  Identity,
  #[cfg(feature = "sha1")]
  Sha1,
  #[cfg(feature = "sha2")]
  Sha2_256,
  #[cfg(feature = "sha2")]
  Sha2_512,
  #[cfg(feature = "sha3")]
  Sha3_224,
  #[cfg(feature = "sha3")]
  Sha3_256,
  #[cfg(feature = "sha3")]
  Sha3_384,
  #[cfg(feature = "sha3")]
  Sha3_512,
  #[cfg(feature = "sha3")]
  Keccak256,
  #[cfg(feature = "blake2b")]
  Blake2b256,
  #[cfg(feature = "blake2b")]
  Blake2b512,
  #[cfg(feature = "blake2s")]
  Blake2s256,
  #[cfg(feature = "blake3")]
  Blake3_256,
}

impl From<Code> for u64 {
  fn from(code: Code) -> Self {
    match code {
      Code::Identity => codes::IDENTITY,
      #[cfg(feature = "sha1")]
      Code::Sha1 => codes::SHA1,
      #[cfg(feature = "sha2")]
      Code::Sha2_256 => codes::SHA2_256,
      #[cfg(feature = "sha2")]
      Code::Sha2_512 => codes::SHA2_512,
      #[cfg(feature = "sha3")]
      Code::Sha3_224 => codes::SHA3_224,
      #[cfg(feature = "sha3")]
      Code::Sha3_256 => codes::SHA3_256,
      #[cfg(feature = "sha3")]
      Code::Sha3_384 => codes::SHA3_384,
      #[cfg(feature = "sha3")]
      Code::Sha3_512 => codes::SHA3_512,
      #[cfg(feature = "sha3")]
      Code::Keccak256 => codes::KECCAK_256,
      #[cfg(feature = "blake2b")]
      Code::Blake2b256 => codes::BLAKE2B_256,
      #[cfg(feature = "blake2b")]
      Code::Blake2b512 => codes::BLAKE2B_512,
      #[cfg(feature = "blake2s")]
      Code::Blake2s256 => codes::BLAKE2S_256,
      #[cfg(feature = "blake3")]
      Code::Blake3_256 => codes::BLAKE3,
    }
  }
}

impl TryFrom<u64> for Code {
  type Error = UnsupportedCode;

  fn try_from(code: u64) -> core::result::Result<Self, Self::Error> {
    match code {
      codes::IDENTITY => Ok(Code::Identity),
      #[cfg(feature = "sha1")]
      codes::SHA1 => Ok(Code::Sha1),
      #[cfg(feature = "sha2")]
      codes::SHA2_256 => Ok(Code::Sha2_256),
      #[cfg(feature = "sha2")]
      codes::SHA2_512 => Ok(Code::Sha2_512),
      #[cfg(feature = "sha3")]
      codes::SHA3_224 => Ok(Code::Sha3_224),
      #[cfg(feature = "sha3")]
      codes::SHA3_256 => Ok(Code::Sha3_256),
      #[cfg(feature = "sha3")]
      codes::SHA3_384 => Ok(Code::Sha3_384),
      #[cfg(feature = "sha3")]
      codes::SHA3_512 => Ok(Code::Sha3_512),
      #[cfg(feature = "sha3")]
      codes::KECCAK_256 => Ok(Code::Keccak256),
      #[cfg(feature = "blake2b")]
      codes::BLAKE2B_256 => Ok(Code::Blake2b256),
      #[cfg(feature = "blake2b")]
      codes::BLAKE2B_512 => Ok(Code::Blake2b512),
      #[cfg(feature = "blake2s")]
      codes::BLAKE2S_256 => Ok(Code::Blake2s256),
      #[cfg(feature = "blake3")]
      codes::BLAKE3 => Ok(Code::Blake3_256),
      _ => Err(UnsupportedCode(code)),
    }
  }
}

impl Code {
  /// Resolves a hash function by its table name, e.g. `sha2-256`.
  ///
  /// # Errors
  ///
  /// Returns `Error::UnknownName` if `table` has no such name and
  /// `Error::UnsupportedHash` if the code is not one this crate computes.
  pub fn from_name(table: &CodeTable, name: &str) -> Result<Self> {
    let code = table.code_of(name)?;
    Ok(Self::try_from(code)?)
  }

  /// # Errors
  ///
  /// Returns `Error::UnknownCode` if `table` does not list this code.
  pub fn name(self, table: &CodeTable) -> Result<&str> {
    table.name_of(self.into())
  }

  /// Digest length in bytes, or `None` when it follows the input.
  pub fn digest_size(self) -> Option<usize> {
    match self {
      Code::Identity => None,
      #[cfg(feature = "sha1")]
      Code::Sha1 => Some(20),
      #[cfg(feature = "sha2")]
      Code::Sha2_256 => Some(32),
      #[cfg(feature = "sha2")]
      Code::Sha2_512 => Some(64),
      #[cfg(feature = "sha3")]
      Code::Sha3_224 => Some(28),
      #[cfg(feature = "sha3")]
      Code::Sha3_256 | Code::Keccak256 => Some(32),
      #[cfg(feature = "sha3")]
      Code::Sha3_384 => Some(48),
      #[cfg(feature = "sha3")]
      Code::Sha3_512 => Some(64),
      #[cfg(feature = "blake2b")]
      Code::Blake2b256 => Some(32),
      #[cfg(feature = "blake2b")]
      Code::Blake2b512 => Some(64),
      #[cfg(feature = "blake2s")]
      Code::Blake2s256 => Some(32),
      #[cfg(feature = "blake3")]
      Code::Blake3_256 => Some(32),
    }
  }
}

/// Hashing into a [`Multihash`].
pub trait MultihashDigest {
  /// Hashes `input` and wraps the digest with this function's code.
  fn digest(&self, input: &[u8]) -> Multihash;
}

impl MultihashDigest for Code {
  fn digest(&self, input: &[u8]) -> Multihash {
    let digest = match self {
      Code::Identity => input.to_vec(),
      #[cfg(feature = "sha1")]
      Code::Sha1 => sha1::Sha1::digest(input).to_vec(),
      #[cfg(feature = "sha2")]
      Code::Sha2_256 => sha_2::Sha256::digest(input).to_vec(),
      #[cfg(feature = "sha2")]
      Code::Sha2_512 => sha_2::Sha512::digest(input).to_vec(),
      #[cfg(feature = "sha3")]
      Code::Sha3_224 => sha_3::Sha3_224::digest(input).to_vec(),
      #[cfg(feature = "sha3")]
      Code::Sha3_256 => sha_3::Sha3_256::digest(input).to_vec(),
      #[cfg(feature = "sha3")]
      Code::Sha3_384 => sha_3::Sha3_384::digest(input).to_vec(),
      #[cfg(feature = "sha3")]
      Code::Sha3_512 => sha_3::Sha3_512::digest(input).to_vec(),
      #[cfg(feature = "sha3")]
      Code::Keccak256 => sha_3::Keccak256::digest(input).to_vec(),
      #[cfg(feature = "blake2b")]
      Code::Blake2b256 => blake2b_simd::Params::new()
        .hash_length(32)
        .hash(input)
        .as_bytes()
        .to_vec(),
      #[cfg(feature = "blake2b")]
      Code::Blake2b512 => blake2b_simd::Params::new()
        .hash_length(64)
        .hash(input)
        .as_bytes()
        .to_vec(),
      #[cfg(feature = "blake2s")]
      Code::Blake2s256 => blake2s_simd::Params::new()
        .hash_length(32)
        .hash(input)
        .as_bytes()
        .to_vec(),
      #[cfg(feature = "blake3")]
      Code::Blake3_256 => blake3::hash(input).as_bytes().to_vec(),
    };
    Multihash::wrap(u64::from(*self), &digest)
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;

  fn table() -> CodeTable { CodeTable::multicodec().unwrap() }

  fn all() -> Vec<Code> {
    let mut codes = vec![Code::Identity];
    #[cfg(feature = "sha1")]
    codes.push(Code::Sha1);
    #[cfg(feature = "sha2")]
    codes.extend(&[Code::Sha2_256, Code::Sha2_512]);
    #[cfg(feature = "sha3")]
    codes.extend(&[
      Code::Sha3_224,
      Code::Sha3_256,
      Code::Sha3_384,
      Code::Sha3_512,
      Code::Keccak256,
    ]);
    #[cfg(feature = "blake2b")]
    codes.extend(&[Code::Blake2b256, Code::Blake2b512]);
    #[cfg(feature = "blake2s")]
    codes.push(Code::Blake2s256);
    #[cfg(feature = "blake3")]
    codes.push(Code::Blake3_256);
    codes
  }

  #[test]
  fn every_code_is_in_the_table() {
    let t = table();
    for code in all() {
      let name = code.name(&t).unwrap();
      assert_eq!(Code::from_name(&t, name), Ok(code));
      assert_eq!(t.entry_by_name(name).map(|e| e.tag()), Some("multihash"));
    }
  }

  #[test]
  fn codes_round_trip() {
    for code in all() {
      assert_eq!(Code::try_from(u64::from(code)), Ok(code));
    }
  }

  #[test]
  fn unsupported_codes() {
    let t = table();
    assert_eq!(Code::try_from(0xd5), Err(UnsupportedCode(0xd5)));
    assert_eq!(Code::from_name(&t, "md5"), Err(Error::UnsupportedHash(0xd5)));
    assert_eq!(
      Code::from_name(&t, "md6"),
      Err(Error::UnknownName(String::from("md6")))
    );
  }

  #[test]
  fn digests_have_their_declared_size() {
    for code in all() {
      let mh = code.digest(b"hello world");
      assert_eq!(mh.code(), u64::from(code));
      match code.digest_size() {
        Some(size) => assert_eq!(mh.size(), size),
        None => assert_eq!(mh.digest(), b"hello world"),
      }
    }
  }

  #[cfg(feature = "sha2")]
  #[test]
  fn sha2_256_known_answer() {
    let mh = Code::Sha2_256.digest(b"foo");
    assert_eq!(
      hex::encode(mh.digest()),
      "2c26b46b68ffc68ff99b453c1d30413413422d706483bfa0f98a5e886266e7ae"
    );
    assert_eq!(&mh.to_bytes()[..2], &[0x12, 0x20]);
  }

  #[cfg(feature = "sha1")]
  #[test]
  fn sha1_known_answer() {
    let mh = Code::Sha1.digest(b"foo");
    assert_eq!(
      hex::encode(mh.to_bytes()),
      "11140beec7b5ea3f0fdbc95d0dd47f3c5bc275da8a33"
    );
  }

  #[cfg(feature = "blake2b")]
  #[test]
  fn blake2b_256_prefix_is_three_bytes() {
    let bytes = Code::Blake2b256.digest(b"foo").to_bytes();
    assert_eq!(&bytes[..4], &[0xa0, 0xe4, 0x02, 0x20]);
    assert_eq!(bytes.len(), 4 + 32);
  }
}
