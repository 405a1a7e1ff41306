//! Digest rendering without allocation.
//!
//! Digest bytes render as lowercase hex; 64-bit values render as unsigned
//! decimal, with [`low32`]/[`high32`] accessors for callers that split the
//! value into 32-bit halves. Both formatters write into fixed inline
//! buffers so they work on `no_std` targets.

use core::fmt;

/// Lowercase hex rendering of up to 32 digest bytes.
#[derive(Clone, Copy)]
pub struct Hex {
  buf: [u8; 64],
  len: usize,
}

impl Hex {
  /// The rendered string.
  #[must_use]
  pub fn as_str(&self) -> &str {
    let bytes = self.buf.get(..self.len).unwrap_or_default();
    core::str::from_utf8(bytes).unwrap_or("")
  }
}

impl fmt::Display for Hex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for Hex {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Hex").field(&self.as_str()).finish()
  }
}

/// Unsigned decimal rendering of a 64-bit value.
#[derive(Clone, Copy)]
pub struct Decimal {
  buf: [u8; 20],
  len: usize,
}

impl Decimal {
  /// The rendered string.
  #[must_use]
  pub fn as_str(&self) -> &str {
    let bytes = self.buf.get(..self.len).unwrap_or_default();
    core::str::from_utf8(bytes).unwrap_or("")
  }
}

impl fmt::Display for Decimal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl fmt::Debug for Decimal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Decimal").field(&self.as_str()).finish()
  }
}

const fn hex_digit(nibble: u8) -> u8 {
  if nibble < 10 { b'0' + nibble } else { b'a' + (nibble - 10) }
}

/// Renders digest bytes as lowercase hex.
///
/// Bytes are emitted in the order given, so for little-endian digest
/// output the result matches the byte-wise hex of the digest. Input
/// beyond 32 bytes is ignored.
#[must_use]
pub fn hex(digest: &[u8]) -> Hex {
  let mut buf = [0u8; 64];
  let mut len = 0;
  for (pair, &byte) in buf.chunks_exact_mut(2).zip(digest.iter()) {
    if let [hi, lo] = pair {
      *hi = hex_digit(byte >> 4);
      *lo = hex_digit(byte & 0xF);
      len += 2;
    }
  }
  Hex { buf, len }
}

/// Renders a 64-bit hash as an unsigned decimal string.
#[must_use]
pub fn decimal(value: u64) -> Decimal {
  let mut buf = [0u8; 20];
  let mut digits = 0;
  let mut v = value;
  for slot in buf.iter_mut().rev() {
    *slot = b'0' + (v % 10) as u8;
    digits += 1;
    v /= 10;
    if v == 0 {
      break;
    }
  }
  let total = buf.len();
  buf.copy_within(total - digits.., 0);
  Decimal { buf, len: digits }
}

/// The low 32 bits of a 64-bit hash.
#[inline]
#[must_use]
pub const fn low32(value: u64) -> u32 {
  value as u32
}

/// The high 32 bits of a 64-bit hash.
#[inline]
#[must_use]
pub const fn high32(value: u64) -> u32 {
  (value >> 32) as u32
}
