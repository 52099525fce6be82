use super::Multihash;
use alloc::vec::Vec;
use core::fmt;
use serde::{
  de,
  de::Error as SerdeError,
  ser,
  Deserialize,
  Serialize,
};

impl Serialize for Multihash {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where S: ser::Serializer {
    serializer.serialize_bytes(&self.to_bytes())
  }
}

impl<'de> Deserialize<'de> for Multihash {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where D: de::Deserializer<'de> {
    deserializer.deserialize_bytes(BytesVisitor)
  }
}

// Formats without a native byte type hand the binary form over as a
// sequence of integers.
struct BytesVisitor;

impl<'de> de::Visitor<'de> for BytesVisitor {
  type Value = Multihash;

  fn expecting(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
    fmt.write_str("the binary form of a multihash")
  }

  fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
  where E: de::Error {
    Multihash::from_bytes(v).map_err(SerdeError::custom)
  }

  fn visit_byte_buf<E>(self, v: Vec<u8>) -> Result<Self::Value, E>
  where E: de::Error {
    self.visit_bytes(&v)
  }

  fn visit_seq<V>(self, mut visitor: V) -> Result<Self::Value, V::Error>
  where V: de::SeqAccess<'de> {
    let mut bytes: Vec<u8> = Vec::new();
    while let Some(byte) = visitor.next_element()? {
      bytes.push(byte);
    }
    Multihash::from_bytes(&bytes).map_err(SerdeError::custom)
  }
}

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::error::Error;

  #[test]
  fn json_round_trip() {
    let mh = Multihash::wrap(0x12, &[0xab; 32]);
    let json = serde_json::to_string(&mh).unwrap();
    assert!(json.starts_with("[18,32,171"));
    let back: Multihash = serde_json::from_str(&json).unwrap();
    assert_eq!(back, mh);
  }

  #[test]
  fn json_rejects_short_digest() {
    let err = serde_json::from_str::<Multihash>("[18,32,1,2,3]").unwrap_err();
    let expected =
      Error::InvalidDigestLength { expected: 32, actual: 3 }.to_string();
    assert!(err.to_string().contains(&expected));
  }

  #[quickcheck]
  fn json_round_trips(mh: Multihash) -> bool {
    match serde_json::to_vec(&mh) {
      Ok(json) => serde_json::from_slice::<Multihash>(&json).ok() == Some(mh),
      Err(_) => false,
    }
  }
}
