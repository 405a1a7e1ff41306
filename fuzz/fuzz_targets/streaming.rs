//! Fuzz target for the streaming HighwayHash API.
//!
//! Tests that arbitrary sequences of append calls produce the same digests
//! as hashing the whole input at once.

#![no_main]

use arbitrary::Arbitrary;
use hwyhash::{FastHash as _, Highway64, Highway128, Highway256, HighwayHasher, Key};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  key: [u64; 4],
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

fuzz_target!(|input: Input| {
  let key = Key(input.key);
  let data = &input.data;

  let expected64 = Highway64::hash_with_seed(key, data);
  let expected128 = Highway128::hash_with_seed(key, data);
  let expected256 = Highway256::hash_with_seed(key, data);

  let mut hasher = HighwayHasher::new(key);
  let mut offset = 0;
  let mut chunk_idx = 0;

  while offset < data.len() {
    let chunk_size = if input.chunk_sizes.is_empty() {
      1
    } else {
      (input.chunk_sizes[chunk_idx % input.chunk_sizes.len()] % 256).max(1)
    };

    let end = (offset + chunk_size).min(data.len());
    hasher.append(&data[offset..end]);
    offset = end;
    chunk_idx += 1;
  }

  assert_eq!(hasher.finalize64(), expected64, "highway64 streaming mismatch");
  assert_eq!(hasher.finalize128(), expected128, "highway128 streaming mismatch");
  assert_eq!(hasher.finalize256(), expected256, "highway256 streaming mismatch");

  // Rewinding must reproduce the one-shot digest as well.
  hasher.reset();
  hasher.append(data);
  assert_eq!(hasher.finalize64(), expected64, "highway64 reset mismatch");
});
