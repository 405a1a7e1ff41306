//! HighwayHash (keyed, **NOT CRYPTO**).
//!
//! HighwayHash mixes four 64-bit lanes with multiplications and byte
//! permutations, absorbing input in 32-byte packets. It is a *keyed* hash
//! designed to defend hash tables and fingerprints against collision
//! attacks on untrusted inputs, and yields 64-, 128-, or 256-bit digests
//! from a single pass. It is not a cryptographic MAC.

#![allow(clippy::indexing_slicing)] // Tight lane and packet indexing

use traits::{Digest, FastHash, InvalidKeyLength};

#[cfg(target_arch = "x86_64")]
pub(crate) mod avx2;
#[doc(hidden)]
pub mod dispatch;
pub(crate) mod kernels;

use self::kernels::UpdateFn;

/// Packet size in bytes: one 64-bit lane per state lane.
pub(crate) const PACKET_LEN: usize = 32;

const INIT0: [u64; 4] = [
  0xDBE6_D5D5_FE4C_CE2F,
  0xA409_3822_299F_31D0,
  0x1319_8A2E_0370_7344,
  0x243F_6A88_85A3_08D3,
];
const INIT1: [u64; 4] = [
  0x3BD3_9E10_CB0E_F593,
  0xC0AC_F169_B5F1_8A8C,
  0xBE54_66CF_34E9_0C6C,
  0x4528_21E6_38D0_1377,
];

/// 256-bit HighwayHash key as four little-endian 64-bit words.
///
/// The all-zero default mirrors the zero default seed of other keyed
/// hashes in this family; real deployments should use a secret key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Key(pub [u64; 4]);

impl Key {
  /// Parses a key from exactly 32 little-endian bytes.
  ///
  /// # Errors
  ///
  /// Returns [`InvalidKeyLength`] for any other input length.
  pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvalidKeyLength> {
    let bytes: &[u8; 32] = bytes.try_into().map_err(|_| InvalidKeyLength::new(bytes.len()))?;
    Ok(Self::from(*bytes))
  }

  /// The key as 32 little-endian bytes.
  #[must_use]
  pub fn to_bytes(self) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(8).zip(self.0) {
      chunk.copy_from_slice(&word.to_le_bytes());
    }
    out
  }
}

impl From<[u64; 4]> for Key {
  #[inline]
  fn from(words: [u64; 4]) -> Self {
    Self(words)
  }
}

impl From<[u8; 32]> for Key {
  fn from(bytes: [u8; 32]) -> Self {
    let (words, _) = bytes.as_chunks::<8>();
    Self([
      u64::from_le_bytes(words[0]),
      u64::from_le_bytes(words[1]),
      u64::from_le_bytes(words[2]),
      u64::from_le_bytes(words[3]),
    ])
  }
}

/// Swap the 32-bit halves of a lane.
#[inline(always)]
const fn rot32(x: u64) -> u64 {
  x.rotate_right(32)
}

/// Rotate both 32-bit halves of a lane left by `count`.
#[inline(always)]
const fn rotate_halves(x: u64, count: u32) -> u64 {
  let lo = (x as u32).rotate_left(count);
  let hi = ((x >> 32) as u32).rotate_left(count);
  ((hi as u64) << 32) | lo as u64
}

// The zipper redistributes high (poorly mixed) multiply bytes into the
// neighbouring lane pair. Each output byte position is fed by exactly one
// source byte, so the ORs never carry.
#[inline(always)]
const fn zipper_merge0(v1: u64, v0: u64) -> u64 {
  (((v0 & 0x0000_0000_FF00_0000) | (v1 & 0x0000_00FF_0000_0000)) >> 24)
    | (((v0 & 0x0000_FF00_0000_0000) | (v1 & 0x00FF_0000_0000_0000)) >> 16)
    | (v0 & 0x0000_0000_00FF_0000)
    | ((v0 & 0x0000_0000_0000_FF00) << 32)
    | ((v1 & 0xFF00_0000_0000_0000) >> 8)
    | (v0 << 56)
}

#[inline(always)]
const fn zipper_merge1(v1: u64, v0: u64) -> u64 {
  (((v1 & 0x0000_0000_FF00_0000) | (v0 & 0x0000_00FF_0000_0000)) >> 24)
    | (v1 & 0x0000_0000_00FF_0000)
    | ((v1 & 0x0000_FF00_0000_0000) >> 16)
    | ((v1 & 0x0000_0000_0000_FF00) << 24)
    | ((v0 & 0x00FF_0000_0000_0000) >> 8)
    | ((v1 & 0x0000_0000_0000_00FF) << 48)
    | (v0 & 0xFF00_0000_0000_0000)
}

/// The four-lane mixing state: accumulators `v0`/`v1` plus the
/// message-dependent multipliers `mul0`/`mul1`.
#[derive(Clone, Copy)]
pub(crate) struct LaneState {
  v0: [u64; 4],
  v1: [u64; 4],
  mul0: [u64; 4],
  mul1: [u64; 4],
}

impl LaneState {
  fn new(key: &Key) -> Self {
    let mut state = Self {
      v0: [0; 4],
      v1: [0; 4],
      mul0: INIT0,
      mul1: INIT1,
    };
    for i in 0..4 {
      state.v0[i] = INIT0[i] ^ key.0[i];
      state.v1[i] = INIT1[i] ^ rot32(key.0[i]);
    }
    state
  }

  #[inline(always)]
  fn update(&mut self, lanes: [u64; 4]) {
    for i in 0..4 {
      self.v1[i] = self.v1[i].wrapping_add(self.mul0[i]).wrapping_add(lanes[i]);
      self.mul0[i] ^= (self.v1[i] & 0xFFFF_FFFF).wrapping_mul(self.v0[i] >> 32);
      self.v0[i] = self.v0[i].wrapping_add(self.mul1[i]);
      self.mul1[i] ^= (self.v0[i] & 0xFFFF_FFFF).wrapping_mul(self.v1[i] >> 32);
    }
    self.v0[0] = self.v0[0].wrapping_add(zipper_merge0(self.v1[1], self.v1[0]));
    self.v0[1] = self.v0[1].wrapping_add(zipper_merge1(self.v1[1], self.v1[0]));
    self.v0[2] = self.v0[2].wrapping_add(zipper_merge0(self.v1[3], self.v1[2]));
    self.v0[3] = self.v0[3].wrapping_add(zipper_merge1(self.v1[3], self.v1[2]));
    self.v1[0] = self.v1[0].wrapping_add(zipper_merge0(self.v0[1], self.v0[0]));
    self.v1[1] = self.v1[1].wrapping_add(zipper_merge1(self.v0[1], self.v0[0]));
    self.v1[2] = self.v1[2].wrapping_add(zipper_merge0(self.v0[3], self.v0[2]));
    self.v1[3] = self.v1[3].wrapping_add(zipper_merge1(self.v0[3], self.v0[2]));
  }

  #[inline(always)]
  fn update_packet(&mut self, packet: &[u8; PACKET_LEN]) {
    let (lanes, _) = packet.as_chunks::<8>();
    self.update([
      u64::from_le_bytes(lanes[0]),
      u64::from_le_bytes(lanes[1]),
      u64::from_le_bytes(lanes[2]),
      u64::from_le_bytes(lanes[3]),
    ]);
  }

  /// Absorbs the final 1..=31 bytes.
  ///
  /// The length is injected into `v0` and rotates the halves of `v1`, then
  /// the bytes are spread over a zero packet: whole 32-bit words at the
  /// front, the last 1..=3 bytes sampled into bytes 16..19, and for
  /// lengths of 16 or more the final four bytes into bytes 28..32.
  fn update_remainder(&mut self, remainder: &[u8]) {
    debug_assert!(!remainder.is_empty() && remainder.len() < PACKET_LEN);
    let size = remainder.len();
    let size_mod4 = size & 3;
    let packed = ((size as u64) << 32) | size as u64;
    for lane in &mut self.v0 {
      *lane = lane.wrapping_add(packed);
    }
    for lane in &mut self.v1 {
      *lane = rotate_halves(*lane, size as u32);
    }

    let mut packet = [0u8; PACKET_LEN];
    packet[..size - size_mod4].copy_from_slice(&remainder[..size - size_mod4]);
    if size & 16 != 0 {
      packet[28..32].copy_from_slice(&remainder[size - 4..]);
    } else if size_mod4 != 0 {
      let last = &remainder[size - size_mod4..];
      packet[16] = last[0];
      packet[17] = last[size_mod4 >> 1];
      packet[18] = last[size_mod4 - 1];
    }
    self.update_packet(&packet);
  }

  #[inline(always)]
  fn permute_and_update(&mut self) {
    self.update([
      rot32(self.v0[2]),
      rot32(self.v0[3]),
      rot32(self.v0[0]),
      rot32(self.v0[1]),
    ]);
  }

  fn finalize64(mut self) -> u64 {
    for _ in 0..4 {
      self.permute_and_update();
    }
    self.v0[0]
      .wrapping_add(self.v1[0])
      .wrapping_add(self.mul0[0])
      .wrapping_add(self.mul1[0])
  }

  fn finalize128(mut self) -> [u64; 2] {
    for _ in 0..6 {
      self.permute_and_update();
    }
    [
      self.v0[0]
        .wrapping_add(self.mul0[0])
        .wrapping_add(self.v1[2])
        .wrapping_add(self.mul1[2]),
      self.v0[1]
        .wrapping_add(self.mul0[1])
        .wrapping_add(self.v1[3])
        .wrapping_add(self.mul1[3]),
    ]
  }

  fn finalize256(mut self) -> [u64; 4] {
    for _ in 0..10 {
      self.permute_and_update();
    }
    let (r0, r1) = modular_reduction(
      self.v1[1].wrapping_add(self.mul1[1]),
      self.v1[0].wrapping_add(self.mul1[0]),
      self.v0[1].wrapping_add(self.mul0[1]),
      self.v0[0].wrapping_add(self.mul0[0]),
    );
    let (r2, r3) = modular_reduction(
      self.v1[3].wrapping_add(self.mul1[3]),
      self.v1[2].wrapping_add(self.mul1[2]),
      self.v0[3].wrapping_add(self.mul0[3]),
      self.v0[2].wrapping_add(self.mul0[2]),
    );
    [r0, r1, r2, r3]
  }
}

/// Reduces the 256-bit value `a3:a2:a1:a0` modulo a degree-130 polynomial,
/// returning the low and high 64 bits of the 128-bit result.
#[inline]
const fn modular_reduction(a3_unmasked: u64, a2: u64, a1: u64, a0: u64) -> (u64, u64) {
  let a3 = a3_unmasked & 0x3FFF_FFFF_FFFF_FFFF;
  let m0 = a0 ^ (a2 << 1) ^ (a2 << 2);
  let m1 = a1 ^ ((a3 << 1) | (a2 >> 63)) ^ ((a3 << 2) | (a2 >> 62));
  (m0, m1)
}

fn update_packets_portable(state: &mut LaneState, packets: &[[u8; PACKET_LEN]]) {
  for packet in packets {
    state.update_packet(packet);
  }
}

fn keyed_state(key: &Key, data: &[u8]) -> LaneState {
  let update = dispatch::active().update;
  let mut state = LaneState::new(key);
  let (packets, tail) = data.as_chunks::<PACKET_LEN>();
  if !packets.is_empty() {
    update(&mut state, packets);
  }
  if !tail.is_empty() {
    state.update_remainder(tail);
  }
  state
}

#[inline]
fn hash64(key: &Key, data: &[u8]) -> u64 {
  keyed_state(key, data).finalize64()
}

#[inline]
fn hash128(key: &Key, data: &[u8]) -> [u64; 2] {
  keyed_state(key, data).finalize128()
}

#[inline]
fn hash256(key: &Key, data: &[u8]) -> [u64; 4] {
  keyed_state(key, data).finalize256()
}

pub(crate) fn le_bytes16(words: [u64; 2]) -> [u8; 16] {
  let mut out = [0u8; 16];
  for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
    chunk.copy_from_slice(&word.to_le_bytes());
  }
  out
}

pub(crate) fn le_bytes32(words: [u64; 4]) -> [u8; 32] {
  let mut out = [0u8; 32];
  for (chunk, word) in out.chunks_exact_mut(8).zip(words) {
    chunk.copy_from_slice(&word.to_le_bytes());
  }
  out
}

/// Streaming HighwayHash state.
///
/// Whole 32-byte packets are absorbed eagerly through the kernel resolved
/// at construction; up to 31 residual bytes wait in an inline buffer. The
/// `finalize*` methods pad a copy of the state, so one stream can yield
/// any output width and `append` may continue afterwards.
#[derive(Clone)]
pub struct HighwayHasher {
  key: Key,
  state: LaneState,
  buf: [u8; PACKET_LEN],
  buf_len: usize,
  update_packets: UpdateFn,
}

impl HighwayHasher {
  /// Creates a hasher keyed with `key`.
  #[must_use]
  pub fn new(key: Key) -> Self {
    Self {
      key,
      state: LaneState::new(&key),
      buf: [0; PACKET_LEN],
      buf_len: 0,
      update_packets: dispatch::active().update,
    }
  }

  /// The key this hasher was created with.
  #[must_use]
  pub fn key(&self) -> Key {
    self.key
  }

  /// Absorbs `data` into the stream.
  pub fn append(&mut self, data: &[u8]) {
    let mut data = data;
    if self.buf_len > 0 {
      let take = (PACKET_LEN - self.buf_len).min(data.len());
      let (head, rest) = data.split_at(take);
      self.buf[self.buf_len..self.buf_len + take].copy_from_slice(head);
      self.buf_len += take;
      data = rest;
      if self.buf_len == PACKET_LEN {
        let packet = self.buf;
        (self.update_packets)(&mut self.state, core::slice::from_ref(&packet));
        self.buf_len = 0;
      }
    }

    let (packets, tail) = data.as_chunks::<PACKET_LEN>();
    if !packets.is_empty() {
      (self.update_packets)(&mut self.state, packets);
    }
    if !tail.is_empty() {
      self.buf[..tail.len()].copy_from_slice(tail);
      self.buf_len = tail.len();
    }
  }

  fn tail_state(&self) -> LaneState {
    let mut state = self.state;
    if self.buf_len > 0 {
      state.update_remainder(&self.buf[..self.buf_len]);
    }
    state
  }

  /// The 64-bit hash of the bytes appended so far.
  #[must_use]
  pub fn finalize64(&self) -> u64 {
    self.tail_state().finalize64()
  }

  /// The 128-bit hash of the bytes appended so far, as two 64-bit words.
  #[must_use]
  pub fn finalize128(&self) -> [u64; 2] {
    self.tail_state().finalize128()
  }

  /// The 256-bit hash of the bytes appended so far, as four 64-bit words.
  #[must_use]
  pub fn finalize256(&self) -> [u64; 4] {
    self.tail_state().finalize256()
  }

  /// Clears the stream, keeping the key.
  pub fn reset(&mut self) {
    self.state = LaneState::new(&self.key);
    self.buf_len = 0;
  }
}

impl core::hash::Hasher for HighwayHasher {
  #[inline]
  fn finish(&self) -> u64 {
    self.finalize64()
  }

  #[inline]
  fn write(&mut self, bytes: &[u8]) {
    self.append(bytes);
  }
}

/// Streaming 64-bit HighwayHash.
#[derive(Clone)]
pub struct Highway64 {
  inner: HighwayHasher,
}

/// Streaming 128-bit HighwayHash.
#[derive(Clone)]
pub struct Highway128 {
  inner: HighwayHasher,
}

/// Streaming 256-bit HighwayHash.
#[derive(Clone)]
pub struct Highway256 {
  inner: HighwayHasher,
}

impl Highway64 {
  /// Creates a hasher keyed with `key`.
  #[must_use]
  pub fn with_key(key: Key) -> Self {
    Self {
      inner: HighwayHasher::new(key),
    }
  }
}

impl Highway128 {
  /// Creates a hasher keyed with `key`.
  #[must_use]
  pub fn with_key(key: Key) -> Self {
    Self {
      inner: HighwayHasher::new(key),
    }
  }
}

impl Highway256 {
  /// Creates a hasher keyed with `key`.
  #[must_use]
  pub fn with_key(key: Key) -> Self {
    Self {
      inner: HighwayHasher::new(key),
    }
  }
}

impl Default for Highway64 {
  /// A hasher with the all-zero key; prefer [`Highway64::with_key`].
  fn default() -> Self {
    Self::with_key(Key::default())
  }
}

impl Default for Highway128 {
  /// A hasher with the all-zero key; prefer [`Highway128::with_key`].
  fn default() -> Self {
    Self::with_key(Key::default())
  }
}

impl Default for Highway256 {
  /// A hasher with the all-zero key; prefer [`Highway256::with_key`].
  fn default() -> Self {
    Self::with_key(Key::default())
  }
}

impl Digest for Highway64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = [u8; 8];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.inner.append(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    self.inner.finalize64().to_le_bytes()
  }

  #[inline]
  fn reset(&mut self) {
    self.inner.reset();
  }
}

impl Digest for Highway128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u8; 16];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.inner.append(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    le_bytes16(self.inner.finalize128())
  }

  #[inline]
  fn reset(&mut self) {
    self.inner.reset();
  }
}

impl Digest for Highway256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

  #[inline]
  fn new() -> Self {
    Self::default()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    self.inner.append(data);
  }

  #[inline]
  fn finalize(&self) -> Self::Output {
    le_bytes32(self.inner.finalize256())
  }

  #[inline]
  fn reset(&mut self) {
    self.inner.reset();
  }
}

impl FastHash for Highway64 {
  const OUTPUT_SIZE: usize = 8;
  type Output = u64;
  type Seed = Key;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash64(&seed, data)
  }
}

impl FastHash for Highway128 {
  const OUTPUT_SIZE: usize = 16;
  type Output = [u64; 2];
  type Seed = Key;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash128(&seed, data)
  }
}

impl FastHash for Highway256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u64; 4];
  type Seed = Key;

  #[inline]
  fn hash_with_seed(seed: Self::Seed, data: &[u8]) -> Self::Output {
    hash256(&seed, data)
  }
}
