//! Error types for hashing operations.
//!
//! Minimal error types shared by the workspace. Individual crates may define
//! additional errors as needed.

use core::fmt;

/// Key material has the wrong length.
///
/// Returned when constructing a keyed hasher from a byte slice whose length
/// does not match the algorithm's key size. Carries the offending length so
/// callers can report what they were handed.
///
/// # Examples
///
/// ```
/// use traits::InvalidKeyLength;
///
/// fn parse_key(bytes: &[u8]) -> Result<[u8; 32], InvalidKeyLength> {
///   bytes.try_into().map_err(|_| InvalidKeyLength::new(bytes.len()))
/// }
///
/// assert!(parse_key(&[0u8; 32]).is_ok());
/// assert_eq!(parse_key(&[0u8; 31]).unwrap_err().len(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct InvalidKeyLength {
  len: usize,
}

impl InvalidKeyLength {
  /// Create a new error recording the rejected length.
  ///
  /// This is the only way to construct this error from outside the crate,
  /// ensuring forward compatibility if fields are added in the future.
  #[inline]
  #[must_use]
  pub const fn new(len: usize) -> Self {
    Self { len }
  }

  /// The rejected key length in bytes.
  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }
}

impl Default for InvalidKeyLength {
  #[inline]
  fn default() -> Self {
    Self::new(0)
  }
}

impl fmt::Display for InvalidKeyLength {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "invalid key length: {} bytes", self.len)
  }
}

impl core::error::Error for InvalidKeyLength {}
