//! Differential fuzzing against the official `highway` crate.
//!
//! The first 32 bytes of the input (zero-padded when shorter) become the
//! key; the rest is hashed at every digest width.

#![no_main]

use highway::HighwayHash as _;
use hwyhash::{FastHash as _, Highway64, Highway128, Highway256, HighwayHasher, Key};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &[u8]| {
  let mut key_bytes = [0u8; 32];
  let split = input.len().min(32);
  key_bytes[..split].copy_from_slice(&input[..split]);
  let key = Key::from(key_bytes);
  let data = &input[split..];

  test_highway64_differential(key, data);
  test_highway128_differential(key, data);
  test_highway256_differential(key, data);
});

fn test_highway64_differential(key: Key, data: &[u8]) {
  let ours = Highway64::hash_with_seed(key, data);

  let mut reference = highway::HighwayHasher::new(highway::Key(key.0));
  reference.append(data);
  let reference = reference.finalize64();

  assert_eq!(
    ours,
    reference,
    "highway64 differential mismatch: ours={ours:#018x}, reference={reference:#018x}, len={}",
    data.len()
  );

  // Self-consistency check: streaming should match one-shot
  let mut hasher = HighwayHasher::new(key);
  hasher.append(data);
  assert_eq!(hasher.finalize64(), ours, "highway64 self-consistency mismatch");
}

fn test_highway128_differential(key: Key, data: &[u8]) {
  let ours = Highway128::hash_with_seed(key, data);

  let mut reference = highway::HighwayHasher::new(highway::Key(key.0));
  reference.append(data);
  let reference = reference.finalize128();

  assert_eq!(
    ours,
    reference,
    "highway128 differential mismatch: ours={ours:x?}, reference={reference:x?}, len={}",
    data.len()
  );
}

fn test_highway256_differential(key: Key, data: &[u8]) {
  let ours = Highway256::hash_with_seed(key, data);

  let mut reference = highway::HighwayHasher::new(highway::Key(key.0));
  reference.append(data);
  let reference = reference.finalize256();

  assert_eq!(
    ours,
    reference,
    "highway256 differential mismatch: ours={ours:x?}, reference={reference:x?}, len={}",
    data.len()
  );
}
