//! Unsigned LEB128 varints as used throughout multiformats.
//!
//! A value is split into 7-bit groups, least significant group first. Every
//! byte but the last has its high bit set. Encodings are always minimal and
//! decoding rejects anything that is not.

use crate::error::{
  Error,
  Result,
};
use alloc::{
  string::ToString,
  vec::Vec,
};
use bytecursor::ByteCursor;
use sp_std::convert::TryFrom;

/// Maximum encoded length of a `u64`.
pub const MAX_LEN: usize = 10;

const CONTINUE: u8 = 0x80;
const PAYLOAD: u8 = 0x7f;

/// Returns true if `byte` terminates a varint.
#[inline]
pub fn is_last(byte: u8) -> bool { byte & CONTINUE == 0 }

/// Number of bytes `encode(value)` produces.
pub fn encoded_len(value: u64) -> usize {
  let bits = 64 - value.leading_zeros() as usize;
  if bits == 0 { 1 } else { (bits + 6) / 7 }
}

/// Encodes `value` into `buf` and returns the used prefix.
pub fn encode_into(mut value: u64, buf: &mut [u8; MAX_LEN]) -> &[u8] {
  let mut i = 0;
  while value >= u64::from(CONTINUE) {
    buf[i] = (value as u8) | CONTINUE;
    value >>= 7;
    i += 1;
  }
  buf[i] = value as u8;
  &buf[..=i]
}

/// Encodes `value` as a minimal varint.
pub fn encode(value: u64) -> Vec<u8> {
  let mut buf = [0; MAX_LEN];
  encode_into(value, &mut buf).to_vec()
}

/// Encodes a wide integer, which must still fit in 64 bits.
///
/// # Errors
///
/// Returns `Error::Overflow` if `value` is larger than `u64::MAX`.
pub fn encode_u128(value: u128) -> Result<Vec<u8>> {
  let value = u64::try_from(value).map_err(|_| Error::Overflow)?;
  Ok(encode(value))
}

/// Decodes a varint from the front of `bytes`, returning the value and the
/// number of bytes it occupied. Anything after the terminating byte is left
/// for the caller.
///
/// # Errors
///
/// Returns `Error::Truncated` if `bytes` ends before a terminating byte, and
/// `Error::Overflow` if the varint needs more than 64 bits or is not minimal.
pub fn decode(bytes: &[u8]) -> Result<(u64, usize)> {
  let mut value: u64 = 0;
  for (i, &byte) in bytes.iter().enumerate() {
    let group = u64::from(byte & PAYLOAD);
    // the tenth group holds only bit 63
    if i == MAX_LEN - 1 && (!is_last(byte) || group > 1) {
      return Err(Error::Overflow);
    }
    value |= group << (7 * i);
    if is_last(byte) {
      if byte == 0 && i > 0 {
        return Err(Error::Overflow);
      }
      return Ok((value, i + 1));
    }
  }
  Err(Error::Truncated)
}

/// Reads a varint from `r`, advancing it past the bytes consumed.
///
/// On error the cursor is left after the last byte inspected.
///
/// # Errors
///
/// Same conditions as [`decode`].
pub fn read_u64(r: &mut ByteCursor) -> Result<u64> {
  let mut buf = [0u8; MAX_LEN];
  for i in 0..MAX_LEN {
    if r.read(&mut buf[i..=i]) != 1 {
      return Err(Error::Truncated);
    }
    if is_last(buf[i]) {
      return decode(&buf[..=i]).map(|(value, _)| value);
    }
  }
  Err(Error::Overflow)
}

/// Writes `value` as a varint at the cursor position.
///
/// # Errors
///
/// Returns `Error::ByteCursor` if the cursor rejects the write.
pub fn write_u64(w: &mut ByteCursor, value: u64) -> Result<()> {
  let mut buf = [0; MAX_LEN];
  w.write(encode_into(value, &mut buf))
    .map_err(|e| Error::ByteCursor(e.to_string()))?;
  Ok(())
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::rand::Rng;
  use quickcheck::{
    Arbitrary,
    Gen,
  };

  /// A `u64` with a uniformly chosen bit width, so every encoded length
  /// shows up about as often as every other.
  #[derive(Debug, Clone, Copy)]
  pub struct AWide(pub u64);

  impl Arbitrary for AWide {
    fn arbitrary(g: &mut Gen) -> Self {
      let mut rng = rand::thread_rng();
      let bits = rng.gen_range(0..=64u32);
      let x = u64::arbitrary(g);
      AWide(if bits == 64 { x } else { x & ((1u64 << bits) - 1) })
    }
  }

  #[test]
  fn known_encodings() {
    assert_eq!(encode(0), vec![0x00]);
    assert_eq!(encode(1), vec![0x01]);
    assert_eq!(encode(127), vec![0x7f]);
    assert_eq!(encode(128), vec![0x80, 0x01]);
    assert_eq!(encode(300), vec![0xac, 0x02]);
    assert_eq!(encode(16384), vec![0x80, 0x80, 0x01]);
    // blake2b-256
    assert_eq!(encode(0xb220), vec![0xa0, 0xe4, 0x02]);
    assert_eq!(encode(u64::MAX), vec![
      0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01
    ]);
  }

  #[test]
  fn known_decodings() {
    assert_eq!(decode(&[0x00]), Ok((0, 1)));
    assert_eq!(decode(&[0x7f]), Ok((127, 1)));
    assert_eq!(decode(&[0xac, 0x02]), Ok((300, 2)));
    assert_eq!(decode(&[0xac, 0x02, 0xff, 0xff]), Ok((300, 2)));
    assert_eq!(
      decode(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]),
      Ok((u64::MAX, 10))
    );
  }

  #[test]
  fn empty_input_is_truncated() {
    assert_eq!(decode(&[]), Err(Error::Truncated));
    assert_eq!(decode(&[0x80]), Err(Error::Truncated));
    assert_eq!(decode(&[0xff, 0xff, 0xff]), Err(Error::Truncated));
  }

  #[test]
  fn too_many_groups_overflow() {
    let mut bytes = vec![0x80; 11];
    bytes.push(0x00);
    assert_eq!(decode(&bytes), Err(Error::Overflow));
    // ten continuation bytes are already one too many
    assert_eq!(decode(&[0x80; 10]), Err(Error::Overflow));
  }

  #[test]
  fn tenth_group_beyond_bit_63_overflows() {
    let mut bytes = vec![0xff; 9];
    bytes.push(0x02);
    assert_eq!(decode(&bytes), Err(Error::Overflow));
  }

  #[test]
  fn non_minimal_overflows() {
    assert_eq!(decode(&[0x80, 0x00]), Err(Error::Overflow));
    assert_eq!(decode(&[0x81, 0x00]), Err(Error::Overflow));
    assert_eq!(decode(&[0xac, 0x82, 0x00]), Err(Error::Overflow));
  }

  #[test]
  fn wide_values() {
    assert_eq!(encode_u128(300), Ok(vec![0xac, 0x02]));
    assert_eq!(encode_u128(u128::from(u64::MAX)), Ok(encode(u64::MAX)));
    assert_eq!(encode_u128(u128::from(u64::MAX) + 1), Err(Error::Overflow));
  }

  #[test]
  fn cursor_reads_consecutive_varints() {
    let mut bytes = encode(300);
    bytes.extend(encode(1));
    bytes.extend(encode(0xb220));
    let mut bc = ByteCursor::new(bytes);
    assert_eq!(read_u64(&mut bc), Ok(300));
    assert_eq!(bc.position(), 2);
    assert_eq!(read_u64(&mut bc), Ok(1));
    assert_eq!(read_u64(&mut bc), Ok(0xb220));
    assert_eq!(bc.position(), 6);
    assert_eq!(read_u64(&mut bc), Err(Error::Truncated));
  }

  #[test]
  fn cursor_rejects_what_decode_rejects() {
    let mut bc = ByteCursor::new(vec![0x80, 0x00]);
    assert_eq!(read_u64(&mut bc), Err(Error::Overflow));
    let mut bc = ByteCursor::new(vec![0x80; 12]);
    assert_eq!(read_u64(&mut bc), Err(Error::Overflow));
    let mut bc = ByteCursor::new(vec![0xac]);
    assert_eq!(read_u64(&mut bc), Err(Error::Truncated));
  }

  #[test]
  fn cursor_past_the_end_is_truncated() {
    let mut bc = ByteCursor::new(vec![0xac, 0x02]);
    bc.set_position(10);
    assert_eq!(read_u64(&mut bc), Err(Error::Truncated));
    bc.set_position(2);
    assert_eq!(read_u64(&mut bc), Err(Error::Truncated));
  }

  #[test]
  fn cursor_width_edges() {
    let mut bc = ByteCursor::new(encode(1 << 63));
    assert_eq!(read_u64(&mut bc), Ok(1 << 63));
    assert_eq!(bc.position(), 10);
    let mut bytes = vec![0xff; 11];
    bytes.push(0x00);
    let mut bc = ByteCursor::new(bytes);
    assert_eq!(read_u64(&mut bc), Err(Error::Overflow));
    let mut bc = ByteCursor::new(vec![0xff, 0x80, 0x00]);
    assert_eq!(read_u64(&mut bc), Err(Error::Overflow));
  }

  #[quickcheck]
  fn round_trip(x: AWide) -> bool {
    let bytes = encode(x.0);
    decode(&bytes) == Ok((x.0, bytes.len()))
  }

  #[quickcheck]
  fn cursor_round_trip(xs: Vec<u64>) -> bool {
    let mut bc = ByteCursor::new(Vec::new());
    for x in &xs {
      if write_u64(&mut bc, *x).is_err() {
        return false;
      }
    }
    bc.set_position(0);
    xs.iter().all(|x| read_u64(&mut bc) == Ok(*x))
  }

  #[quickcheck]
  fn minimal(x: AWide) -> bool {
    let bytes = encode(x.0);
    bytes.len() == encoded_len(x.0)
      && (bytes.len() == 1 || bytes[bytes.len() - 1] != 0)
  }

  #[quickcheck]
  fn strict_prefixes_are_truncated(x: AWide) -> bool {
    let bytes = encode(x.0);
    (0..bytes.len()).all(|n| decode(&bytes[..n]) == Err(Error::Truncated))
  }

  #[quickcheck]
  fn matches_unsigned_varint(x: AWide) -> bool {
    let mut buf = unsigned_varint::encode::u64_buffer();
    let theirs = unsigned_varint::encode::u64(x.0, &mut buf);
    encode(x.0).as_slice() == theirs
  }

  #[quickcheck]
  fn unsigned_varint_reads_ours(x: AWide) -> bool {
    let bytes = encode(x.0);
    match unsigned_varint::decode::u64(&bytes) {
      Ok((value, rest)) => value == x.0 && rest.is_empty(),
      Err(_) => false,
    }
  }
}
