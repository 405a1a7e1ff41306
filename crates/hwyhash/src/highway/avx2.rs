//! HighwayHash x86_64 AVX2 packet kernel.
//!
//! The four 64-bit lanes of each state vector map onto one 256-bit
//! register, so a packet round is a handful of vector adds, one
//! `vpmuludq` per multiplier, and byte shuffles for the zipper merge.
//! Only bulk packet absorption runs here; remainder handling and
//! finalization stay portable.
//!
//! # Safety
//!
//! The inner kernel requires AVX2. Dispatch and the kernel harness select
//! it only after capability detection.

#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::x86_64::*;

use super::{LaneState, PACKET_LEN};

/// Zipper merge as a per-128-bit-lane byte shuffle. Each half of the
/// register holds one (merge0, merge1) lane pair.
const ZIPPER_LO: i64 = 0x000F_010E_0502_0C03;
const ZIPPER_HI: i64 = 0x0708_0609_0D0A_040B;

pub(crate) fn update_packets(state: &mut LaneState, packets: &[[u8; PACKET_LEN]]) {
  // SAFETY: dispatch and the kernel harness only hand out this kernel
  // when AVX2 was detected.
  unsafe { update_packets_inner(state, packets) }
}

#[target_feature(enable = "avx2")]
unsafe fn update_packets_inner(state: &mut LaneState, packets: &[[u8; PACKET_LEN]]) {
  let zipper = _mm256_set_epi64x(ZIPPER_HI, ZIPPER_LO, ZIPPER_HI, ZIPPER_LO);

  let mut v0 = _mm256_loadu_si256(state.v0.as_ptr().cast());
  let mut v1 = _mm256_loadu_si256(state.v1.as_ptr().cast());
  let mut mul0 = _mm256_loadu_si256(state.mul0.as_ptr().cast());
  let mut mul1 = _mm256_loadu_si256(state.mul1.as_ptr().cast());

  for packet in packets {
    let lanes = _mm256_loadu_si256(packet.as_ptr().cast());
    v1 = _mm256_add_epi64(v1, _mm256_add_epi64(lanes, mul0));
    mul0 = _mm256_xor_si256(mul0, _mm256_mul_epu32(v1, _mm256_srli_epi64(v0, 32)));
    v0 = _mm256_add_epi64(v0, mul1);
    mul1 = _mm256_xor_si256(mul1, _mm256_mul_epu32(v0, _mm256_srli_epi64(v1, 32)));
    v0 = _mm256_add_epi64(v0, _mm256_shuffle_epi8(v1, zipper));
    v1 = _mm256_add_epi64(v1, _mm256_shuffle_epi8(v0, zipper));
  }

  _mm256_storeu_si256(state.v0.as_mut_ptr().cast(), v0);
  _mm256_storeu_si256(state.v1.as_mut_ptr().cast(), v1);
  _mm256_storeu_si256(state.mul0.as_mut_ptr().cast(), mul0);
  _mm256_storeu_si256(state.mul1.as_mut_ptr().cast(), mul1);
}
