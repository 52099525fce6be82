use crate::{
  error::{
    Error,
    Result,
  },
  table::CodeTable,
  varint,
};
use alloc::{
  string::ToString,
  vec::Vec,
};
use bytecursor::ByteCursor;
use sp_std::{
  convert::TryFrom,
  fmt,
};

#[cfg(feature = "multibase")]
use alloc::string::String;
#[cfg(feature = "multibase")]
use multibase::Base;

#[cfg(feature = "serde-codec")]
mod codec;

/// A self-describing digest: `varint(code) || varint(len) || digest`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
  feature = "scale-codec",
  derive(parity_scale_codec::Decode, parity_scale_codec::Encode)
)]
pub struct Multihash {
  code: u64,
  digest: Vec<u8>,
}

impl Multihash {
  /// Wraps an already computed digest.
  pub fn wrap(code: u64, digest: &[u8]) -> Self {
    Self { code, digest: digest.to_vec() }
  }

  /// Wraps a digest under the code `table` assigns to `name`.
  ///
  /// # Errors
  ///
  /// Returns `Error::UnknownName` if `table` has no such name.
  pub fn wrap_named(
    table: &CodeTable,
    name: &str,
    digest: &[u8],
  ) -> Result<Self> {
    Ok(Self::wrap(table.code_of(name)?, digest))
  }

  pub fn code(&self) -> u64 { self.code }

  pub fn digest(&self) -> &[u8] { &self.digest }

  /// Length of the digest in bytes.
  pub fn size(&self) -> usize { self.digest.len() }

  /// Length of the binary form.
  pub fn encoded_len(&self) -> usize {
    varint::encoded_len(self.code)
      + varint::encoded_len(self.digest.len() as u64)
      + self.digest.len()
  }

  /// # Errors
  ///
  /// Returns `Error::UnknownCode` if `table` does not list this code.
  pub fn name<'a>(&self, table: &'a CodeTable) -> Result<&'a str> {
    table.name_of(self.code)
  }

  pub fn to_bytes(&self) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(self.encoded_len());
    bytes.extend_from_slice(&varint::encode(self.code));
    bytes.extend_from_slice(&varint::encode(self.digest.len() as u64));
    bytes.extend_from_slice(&self.digest);
    bytes
  }

  /// Parses a multihash from the front of `bytes`, returning it together
  /// with the number of bytes it occupied.
  ///
  /// # Errors
  ///
  /// Returns the varint errors of either header field, and
  /// `Error::InvalidDigestLength` if fewer digest bytes follow than the
  /// header declares.
  pub fn from_bytes_prefix(bytes: &[u8]) -> Result<(Self, usize)> {
    let (code, code_len) = varint::decode(bytes)?;
    let (size, size_len) = varint::decode(&bytes[code_len..])?;
    let start = code_len + size_len;
    let available = bytes.len() - start;
    let size = usize::try_from(size).map_err(|_| Error::Overflow)?;
    if size > available {
      return Err(Error::InvalidDigestLength {
        expected: size,
        actual: available,
      });
    }
    let digest = bytes[start..start + size].to_vec();
    Ok((Self { code, digest }, start + size))
  }

  /// Parses a multihash that must span all of `bytes`.
  ///
  /// # Errors
  ///
  /// As [`Multihash::from_bytes_prefix`], plus `Error::TrailingBytes` if
  /// anything follows the digest.
  pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
    let (mh, used) = Self::from_bytes_prefix(bytes)?;
    match bytes.len() - used {
      0 => Ok(mh),
      n => Err(Error::TrailingBytes(n)),
    }
  }

  /// Reads a multihash at the cursor position.
  ///
  /// # Errors
  ///
  /// Returns the varint errors of either header field, and
  /// `Error::InvalidDigestLength` if the cursor holds fewer digest bytes than
  /// the header declares.
  pub fn read(r: &mut ByteCursor) -> Result<Self> {
    let code = varint::read_u64(r)?;
    let size = varint::read_u64(r)?;
    let size = usize::try_from(size).map_err(|_| Error::Overflow)?;
    let position = usize::try_from(r.position()).unwrap_or(usize::MAX);
    let available = r.get_ref().len().saturating_sub(position);
    if size > available {
      return Err(Error::InvalidDigestLength {
        expected: size,
        actual: available,
      });
    }
    let mut digest = vec![0; size];
    r.read_exact(&mut digest).map_err(|_| Error::Truncated)?;
    Ok(Self { code, digest })
  }

  /// Writes the binary form at the cursor position.
  ///
  /// # Errors
  ///
  /// Returns `Error::ByteCursor` if the cursor rejects the write.
  pub fn write(&self, w: &mut ByteCursor) -> Result<()> {
    varint::write_u64(w, self.code)?;
    varint::write_u64(w, self.digest.len() as u64)?;
    w.write(&self.digest).map_err(|e| Error::ByteCursor(e.to_string()))?;
    Ok(())
  }

  /// Renders the binary form in `base`, prefixed with the base's code
  /// character.
  #[cfg(feature = "multibase")]
  pub fn to_string_of_base(&self, base: Base) -> String {
    multibase::encode(base, self.to_bytes())
  }

  /// Parses a multibase string holding a multihash.
  ///
  /// # Errors
  ///
  /// Returns `Error::Multibase` if the text is not valid multibase, and the
  /// errors of [`Multihash::from_bytes`] for the decoded bytes.
  #[cfg(feature = "multibase")]
  pub fn from_multibase(text: &str) -> Result<Self> {
    let (_, bytes) = multibase::decode(text)?;
    Self::from_bytes(&bytes)
  }
}

impl TryFrom<&[u8]> for Multihash {
  type Error = Error;

  fn try_from(bytes: &[u8]) -> Result<Self> { Self::from_bytes(bytes) }
}

impl From<Multihash> for Vec<u8> {
  fn from(mh: Multihash) -> Self { mh.to_bytes() }
}

impl fmt::Debug for Multihash {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "Multihash({:#x}, ", self.code)?;
    for byte in &self.digest {
      write!(f, "{:02x}", byte)?;
    }
    write!(f, ")")
  }
}

#[cfg(feature = "multibase")]
impl fmt::Display for Multihash {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.to_string_of_base(Base::Base58Btc))
  }
}
