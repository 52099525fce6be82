use alloc::string::String;
#[cfg(feature = "multibase")]
use alloc::string::ToString;
use sp_std::fmt;

/// Type alias to use this library's [`Error`] type in a `Result`.
pub type Result<T> = core::result::Result<T, Error>;

/// Error types
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
  /// A value or an encoding exceeds 64 bits, or a varint is not minimal.
  Overflow,
  /// The input ended before a terminating varint byte.
  Truncated,
  /// No table entry has this name.
  UnknownName(String),
  /// No table entry has this code.
  UnknownCode(u64),
  /// A table was built with a repeated name or code.
  DuplicateTableEntry { name: String, code: u64 },
  /// The code does not name a hash function this crate can compute.
  UnsupportedHash(u64),
  /// A multihash declares more digest bytes than are present.
  InvalidDigestLength { expected: usize, actual: usize },
  /// Bytes were left over after a complete value.
  TrailingBytes(usize),
  /// The underlying `ByteCursor` refused a write.
  ByteCursor(String),
  /// The multibase string could not be decoded.
  #[cfg(feature = "multibase")]
  Multibase(String),
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    use self::Error::*;
    match self {
      Overflow => write!(f, "varint overflows 64 bits or is not minimal"),
      Truncated => write!(f, "input ended inside a varint"),
      UnknownName(name) => write!(f, "unknown code name `{}`", name),
      UnknownCode(code) => write!(f, "unknown code {:#x}", code),
      DuplicateTableEntry { name, code } => {
        write!(f, "duplicate table entry `{}` ({:#x})", name, code)
      }
      UnsupportedHash(code) => write!(f, "unsupported hash code {:#x}", code),
      InvalidDigestLength { expected, actual } => write!(
        f,
        "digest declares {} bytes but {} are available",
        expected, actual
      ),
      TrailingBytes(n) => write!(f, "{} trailing bytes", n),
      ByteCursor(e) => write!(f, "byte cursor: {}", e),
      #[cfg(feature = "multibase")]
      Multibase(e) => write!(f, "multibase: {}", e),
    }
  }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "multibase")]
impl From<multibase::Error> for Error {
  fn from(error: multibase::Error) -> Self {
    Error::Multibase(error.to_string())
  }
}
