//! Cross-kernel equivalence fuzzing.
//!
//! Verifies that ALL available packet kernels on the current platform produce
//! identical digests for any input. This catches:
//!
//! - SIMD kernel bugs (boundary conditions, alignment handling, endianness)
//! - Forced kernel selection issues
//! - Kernel-specific edge cases (small buffers, unaligned data, etc.)
//!
//! The portable scalar kernel is the oracle. All SIMD kernels must match it
//! exactly.

#![no_main]

use hwyhash::__internal::kernel_test::{run_all_highway_kernels, verify_highway_kernels};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  let results = run_all_highway_kernels(data);

  // All kernels must produce identical results
  if results.len() >= 2 {
    let expected = results[0].digest;
    for result in &results[1..] {
      assert_eq!(
        result.digest,
        expected,
        "highwayhash kernel mismatch: {} diverged from {}, len={}",
        result.name,
        results[0].name,
        data.len()
      );
    }
  }

  // Paranoid check: verify against the verification function
  verify_highway_kernels(data).expect("highwayhash kernel verification failed");
});
