//! The compiled-in multicodec table.
//!
//! Rows carry the same columns as the multicodec CSV: name, tag, code and a
//! description. `CodeTable::multicodec` loads them.

pub const IDENTITY: u64 = 0x00;
pub const SHA1: u64 = 0x11;
pub const SHA2_256: u64 = 0x12;
pub const SHA2_512: u64 = 0x13;
pub const SHA3_512: u64 = 0x14;
pub const SHA3_384: u64 = 0x15;
pub const SHA3_256: u64 = 0x16;
pub const SHA3_224: u64 = 0x17;
pub const KECCAK_256: u64 = 0x1b;
pub const BLAKE3: u64 = 0x1e;
pub const RAW: u64 = 0x55;
pub const DAG_PB: u64 = 0x70;
pub const DAG_CBOR: u64 = 0x71;
pub const DAG_JSON: u64 = 0x0129;
pub const BLAKE2B_256: u64 = 0xb220;
pub const BLAKE2B_512: u64 = 0xb240;
pub const BLAKE2S_256: u64 = 0xb260;

/// `(name, tag, code, description)`
pub type Row = (&'static str, &'static str, u64, &'static str);

#[rustfmt::skip]
pub static MULTICODEC_TABLE: &[Row] = &[
  ("identity", "multihash", IDENTITY, "raw binary"),
  ("cidv1", "cid", 0x01, "CIDv1"),
  ("cidv2", "cid", 0x02, "CIDv2"),
  ("cidv3", "cid", 0x03, "CIDv3"),
  ("ip4", "multiaddr", 0x04, ""),
  ("tcp", "multiaddr", 0x06, ""),
  ("sha1", "multihash", SHA1, ""),
  ("sha2-256", "multihash", SHA2_256, ""),
  ("sha2-512", "multihash", SHA2_512, ""),
  ("sha3-512", "multihash", SHA3_512, ""),
  ("sha3-384", "multihash", SHA3_384, ""),
  ("sha3-256", "multihash", SHA3_256, ""),
  ("sha3-224", "multihash", SHA3_224, ""),
  ("shake-128", "multihash", 0x18, ""),
  ("shake-256", "multihash", 0x19, ""),
  ("keccak-224", "multihash", 0x1a, "keccak has variable output length"),
  ("keccak-256", "multihash", KECCAK_256, ""),
  ("keccak-384", "multihash", 0x1c, ""),
  ("keccak-512", "multihash", 0x1d, ""),
  ("blake3", "multihash", BLAKE3, "BLAKE3 has a default 32 byte output length"),
  ("sha2-384", "multihash", 0x20, ""),
  ("dccp", "multiaddr", 0x21, ""),
  ("murmur3-x64-64", "hash", 0x22, "the first 64 bits of a murmur3-x64-128"),
  ("murmur3-32", "hash", 0x23, ""),
  ("ip6", "multiaddr", 0x29, ""),
  ("ip6zone", "multiaddr", 0x2a, ""),
  ("path", "namespace", 0x2f, "path component"),
  ("multicodec", "multiformat", 0x30, ""),
  ("multihash", "multiformat", 0x31, ""),
  ("multiaddr", "multiformat", 0x32, ""),
  ("multibase", "multiformat", 0x33, ""),
  ("dns", "multiaddr", 0x35, ""),
  ("dns4", "multiaddr", 0x36, ""),
  ("dns6", "multiaddr", 0x37, ""),
  ("dnsaddr", "multiaddr", 0x38, ""),
  ("protobuf", "serialization", 0x50, "Protocol Buffers"),
  ("cbor", "serialization", 0x51, "CBOR"),
  ("raw", "ipld", RAW, "raw binary"),
  ("dbl-sha2-256", "multihash", 0x56, ""),
  ("rlp", "serialization", 0x60, "recursive length prefix"),
  ("bencode", "serialization", 0x63, "bencode"),
  ("dag-pb", "ipld", DAG_PB, "MerkleDAG protobuf"),
  ("dag-cbor", "ipld", DAG_CBOR, "MerkleDAG cbor"),
  ("libp2p-key", "ipld", 0x72, "Libp2p Public Key"),
  ("git-raw", "ipld", 0x78, "Raw Git object"),
  ("torrent-info", "ipld", 0x7b, "Torrent file info field (bencoded)"),
  ("torrent-file", "ipld", 0x7c, "Torrent file (bencoded)"),
  ("leofcoin-block", "ipld", 0x81, "Leofcoin Block"),
  ("leofcoin-tx", "ipld", 0x82, "Leofcoin Transaction"),
  ("leofcoin-pr", "ipld", 0x83, "Leofcoin Peer Reputation"),
  ("sctp", "multiaddr", 0x84, ""),
  ("dag-jose", "ipld", 0x85, "MerkleDAG JOSE"),
  ("dag-cose", "ipld", 0x86, "MerkleDAG COSE"),
  ("eth-block", "ipld", 0x90, "Ethereum Block (RLP)"),
  ("eth-block-list", "ipld", 0x91, "Ethereum Block List (RLP)"),
  ("eth-tx-trie", "ipld", 0x92, "Ethereum Transaction Trie (Eth-Trie)"),
  ("eth-tx", "ipld", 0x93, "Ethereum Transaction (RLP)"),
  ("eth-tx-receipt-trie", "ipld", 0x94, "Ethereum Transaction Receipt Trie (Eth-Trie)"),
  ("eth-tx-receipt", "ipld", 0x95, "Ethereum Transaction Receipt (RLP)"),
  ("eth-state-trie", "ipld", 0x96, "Ethereum State Trie (Eth-Secure-Trie)"),
  ("eth-account-snapshot", "ipld", 0x97, "Ethereum Account Snapshot (RLP)"),
  ("eth-storage-trie", "ipld", 0x98, "Ethereum Contract Storage Trie (Eth-Secure-Trie)"),
  ("bitcoin-block", "ipld", 0xb0, "Bitcoin Block"),
  ("bitcoin-tx", "ipld", 0xb1, "Bitcoin Tx"),
  ("zcash-block", "ipld", 0xc0, "Zcash Block"),
  ("zcash-tx", "ipld", 0xc1, "Zcash Tx"),
  ("stellar-block", "ipld", 0xd0, "Stellar Block"),
  ("stellar-tx", "ipld", 0xd1, "Stellar Tx"),
  ("md4", "multihash", 0xd4, ""),
  ("md5", "multihash", 0xd5, ""),
  ("decred-block", "ipld", 0xe0, "Decred Block"),
  ("decred-tx", "ipld", 0xe1, "Decred Tx"),
  ("ipld-ns", "namespace", 0xe2, "IPLD path"),
  ("ipfs-ns", "namespace", 0xe3, "IPFS path"),
  ("swarm-ns", "namespace", 0xe4, "Swarm path"),
  ("ipns-ns", "namespace", 0xe5, "IPNS path"),
  ("zeronet", "namespace", 0xe6, "ZeroNet site address"),
  ("secp256k1-pub", "key", 0xe7, "Secp256k1 public key"),
  ("bls12_381-g1-pub", "key", 0xea, "BLS12-381 public key in the G1 field"),
  ("bls12_381-g2-pub", "key", 0xeb, "BLS12-381 public key in the G2 field"),
  ("x25519-pub", "key", 0xec, "Curve25519 public key"),
  ("ed25519-pub", "key", 0xed, "Ed25519 public key"),
  ("dash-block", "ipld", 0xf0, "Dash Block"),
  ("dash-tx", "ipld", 0xf1, "Dash Tx"),
  ("swarm-manifest", "ipld", 0xfa, "Swarm Manifest"),
  ("swarm-feed", "ipld", 0xfb, "Swarm Feed"),
  ("udp", "multiaddr", 0x0111, ""),
  ("p2p-webrtc-star", "multiaddr", 0x0113, ""),
  ("p2p-webrtc-direct", "multiaddr", 0x0114, ""),
  ("p2p-stardust", "multiaddr", 0x0115, ""),
  ("p2p-circuit", "multiaddr", 0x0122, ""),
  ("dag-json", "ipld", DAG_JSON, "MerkleDAG json"),
  ("udt", "multiaddr", 0x012d, ""),
  ("utp", "multiaddr", 0x012e, ""),
  ("unix", "multiaddr", 0x0190, ""),
  ("p2p", "multiaddr", 0x01a5, "libp2p"),
  ("https", "multiaddr", 0x01bb, ""),
  ("onion", "multiaddr", 0x01bc, ""),
  ("onion3", "multiaddr", 0x01bd, ""),
  ("garlic64", "multiaddr", 0x01be, "I2P base64 (raw public key)"),
  ("garlic32", "multiaddr", 0x01bf, "I2P base32 (hashed public key or encoded public key/checksum+optional secret)"),
  ("tls", "multiaddr", 0x01c0, ""),
  ("quic", "multiaddr", 0x01cc, ""),
  ("ws", "multiaddr", 0x01dd, ""),
  ("wss", "multiaddr", 0x01de, ""),
  ("p2p-websocket-star", "multiaddr", 0x01df, ""),
  ("http", "multiaddr", 0x01e0, ""),
  ("json", "ipld", 0x0200, "JSON (UTF-8-encoded)"),
  ("messagepack", "serialization", 0x0201, "MessagePack"),
  ("libp2p-peer-record", "libp2p", 0x0301, "libp2p peer record type"),
  ("sha2-256-trunc254-padded", "multihash", 0x1012, "SHA2-256 with the two most significant bits from the last byte zeroed"),
  ("ripemd-128", "multihash", 0x1052, ""),
  ("ripemd-160", "multihash", 0x1053, ""),
  ("ripemd-256", "multihash", 0x1054, ""),
  ("ripemd-320", "multihash", 0x1055, ""),
  ("x11", "multihash", 0x1100, ""),
  ("sm3-256", "multihash", 0x534d, ""),
  ("blake2b-128", "multihash", 0xb210, ""),
  ("blake2b-160", "multihash", 0xb214, ""),
  ("blake2b-224", "multihash", 0xb21c, ""),
  ("blake2b-256", "multihash", BLAKE2B_256, ""),
  ("blake2b-384", "multihash", 0xb230, ""),
  ("blake2b-512", "multihash", BLAKE2B_512, ""),
  ("blake2s-128", "multihash", 0xb250, ""),
  ("blake2s-160", "multihash", 0xb254, ""),
  ("blake2s-224", "multihash", 0xb25c, ""),
  ("blake2s-256", "multihash", BLAKE2S_256, ""),
];
