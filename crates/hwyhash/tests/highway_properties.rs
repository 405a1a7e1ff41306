//! Property-based tests for the HighwayHash engine.
//!
//! These tests verify invariants that must hold for all inputs, not just
//! specific test vectors. Uses proptest for randomized input generation.

use std::io::Cursor;

use hwyhash::io::{DigestReader, DigestWriter};
use hwyhash::{Digest as _, FastHash as _, Highway64, Highway128, Highway256, HighwayHasher, Key};
use proptest::prelude::*;

const STD_KEY: Key = Key([
  0x0706_0504_0302_0100,
  0x0F0E_0D0C_0B0A_0908,
  0x1716_1514_1312_1110,
  0x1F1E_1D1C_1B1A_1918,
]);

fn pattern(len: usize) -> Vec<u8> {
  (0..len).map(|i| (((i * 17) + (i >> 8)) & 0xFF) as u8).collect()
}

// Test Strategies

/// Generate arbitrary byte vectors up to 8KB.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
  prop::collection::vec(any::<u8>(), 0..8192)
}

/// Generate multiple split points for chunked testing.
fn arb_splits(len: usize, count: usize) -> impl Strategy<Value = Vec<usize>> {
  prop::collection::vec(0..=len, count).prop_map(move |mut splits| {
    splits.sort();
    splits.push(len);
    splits.dedup();
    splits
  })
}

fn oneshot(key: Key, data: &[u8]) -> (u64, [u64; 2], [u64; 4]) {
  (
    Highway64::hash_with_seed(key, data),
    Highway128::hash_with_seed(key, data),
    Highway256::hash_with_seed(key, data),
  )
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(500))]

  #[test]
  fn multi_incremental_equals_oneshot(key in any::<[u64; 4]>(), data in arb_data(), splits in arb_splits(8192, 5)) {
    let key = Key(key);
    let (h64, h128, h256) = oneshot(key, &data);

    let mut hasher = HighwayHasher::new(key);
    let mut prev = 0;
    for &split in &splits {
      let split = split.min(data.len());
      if split > prev {
        hasher.append(&data[prev..split]);
        prev = split;
      }
    }
    if prev < data.len() {
      hasher.append(&data[prev..]);
    }

    prop_assert_eq!(hasher.finalize64(), h64);
    prop_assert_eq!(hasher.finalize128(), h128);
    prop_assert_eq!(hasher.finalize256(), h256);
  }

  #[test]
  fn reset_restores_keyed_state(key in any::<[u64; 4]>(), noise in arb_data(), data in arb_data()) {
    let key = Key(key);
    let mut hasher = HighwayHasher::new(key);
    hasher.append(&noise);
    hasher.reset();
    hasher.append(&data);
    prop_assert_eq!(hasher.finalize64(), Highway64::hash_with_seed(key, &data));
  }

  #[test]
  fn finalize_is_non_destructive(key in any::<[u64; 4]>(), head in arb_data(), tail in arb_data()) {
    let key = Key(key);
    let mut hasher = HighwayHasher::new(key);
    hasher.append(&head);
    let first = hasher.finalize64();
    prop_assert_eq!(hasher.finalize64(), first);

    hasher.append(&tail);
    let mut whole = head.clone();
    whole.extend_from_slice(&tail);
    prop_assert_eq!(hasher.finalize64(), Highway64::hash_with_seed(key, &whole));
  }

  #[test]
  fn vectored_update_matches_contiguous(data in arb_data(), split in 0..8192usize) {
    let split = split.min(data.len());
    let (a, b) = data.split_at(split);

    let mut hasher = Highway256::with_key(STD_KEY);
    hasher.update_vectored(&[a, b]);

    let mut contiguous = Highway256::with_key(STD_KEY);
    contiguous.update(&data);

    prop_assert_eq!(hasher.finalize(), contiguous.finalize());
  }

  #[test]
  fn digest_widths_agree_on_prefix_state(key in any::<[u64; 4]>(), data in arb_data()) {
    // All three widths run the same absorption; only finalization differs.
    let key = Key(key);
    let mut h = HighwayHasher::new(key);
    h.append(&data);
    let (h64, h128, h256) = oneshot(key, &data);
    prop_assert_eq!(h.finalize64(), h64);
    prop_assert_eq!(h.finalize128(), h128);
    prop_assert_eq!(h.finalize256(), h256);
  }
}

#[test]
fn key_changes_the_digest() {
  let data = pattern(64);
  let flipped = Key([STD_KEY.0[0] ^ 1, STD_KEY.0[1] ^ 1, STD_KEY.0[2] ^ 1, STD_KEY.0[3] ^ 1]);
  assert_eq!(Highway64::hash_with_seed(flipped, &data), 0x296D_51BC_AB47_8424);
  assert_ne!(
    Highway64::hash_with_seed(flipped, &data),
    Highway64::hash_with_seed(STD_KEY, &data)
  );
}

#[test]
fn packet_order_changes_the_digest() {
  let data = pattern(64);
  let mut swapped = Vec::with_capacity(64);
  swapped.extend_from_slice(&data[32..]);
  swapped.extend_from_slice(&data[..32]);
  assert_eq!(Highway64::hash_with_seed(STD_KEY, &swapped), 0x54D5_163F_2DD5_286B);
  assert_ne!(
    Highway64::hash_with_seed(STD_KEY, &swapped),
    Highway64::hash_with_seed(STD_KEY, &data)
  );
}

#[test]
fn tail_bit_changes_the_digest() {
  let data = pattern(33);
  let mut flipped = data.clone();
  flipped[32] ^= 0x80;
  assert_eq!(Highway64::hash_with_seed(STD_KEY, &flipped), 0xC572_C074_64FB_577A);
  assert_ne!(
    Highway64::hash_with_seed(STD_KEY, &flipped),
    Highway64::hash_with_seed(STD_KEY, &data)
  );
}

#[test]
fn key_parsing_enforces_exact_length() {
  for len in [0usize, 1, 31, 33, 64] {
    let err = Key::from_bytes(&vec![0xAB; len]).unwrap_err();
    assert_eq!(err.len(), len, "wrong reported length for input of {len} bytes");
  }

  let key = Key::from_bytes(&[7u8; 32]).expect("32-byte keys parse");
  assert_eq!(key.to_bytes(), [7u8; 32]);
  assert_eq!(Key::from([7u8; 32]), key);
}

#[test]
fn default_key_matches_unseeded_hash() {
  let data = pattern(100);
  assert_eq!(Highway64::hash(&data), Highway64::hash_with_seed(Key::default(), &data));
}

#[test]
fn reader_hashes_bytes_in_transit() {
  let data = pattern(1000);
  let expected = Highway64::hash_with_seed(STD_KEY, &data).to_le_bytes();

  let mut reader = DigestReader::with_hasher(Cursor::new(data), Highway64::with_key(STD_KEY));
  std::io::copy(&mut reader, &mut std::io::sink()).expect("copy from cursor");
  assert_eq!(reader.digest(), expected);
}

#[test]
fn writer_hashes_bytes_in_transit() {
  use std::io::Write as _;

  let data = pattern(1000);
  let mut expected_hasher = Highway256::with_key(STD_KEY);
  expected_hasher.update(&data);

  let mut writer = DigestWriter::with_hasher(Vec::new(), Highway256::with_key(STD_KEY));
  writer.write_all(&data).expect("write to vec");
  let (sink, digest) = writer.into_parts();
  assert_eq!(sink, data);
  assert_eq!(digest, expected_hasher.finalize());
}

#[test]
fn unkeyed_reader_uses_default_state() {
  let data = pattern(77);
  let mut reader = Highway64::reader(Cursor::new(data.clone()));
  std::io::copy(&mut reader, &mut std::io::sink()).expect("copy from cursor");
  assert_eq!(reader.digest(), Highway64::hash(&data).to_le_bytes());
}

#[test]
fn kernel_name_is_a_known_kernel() {
  assert!(matches!(hwyhash::kernel_name(), "portable" | "avx2"));
}
