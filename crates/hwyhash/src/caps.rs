//! CPU capability detection for kernel dispatch.
//!
//! [`Caps`] is a small feature bitset answering one question per bit: can
//! this machine legally run the corresponding kernel? Detection unions
//! compile-time target features with runtime probing (on `std`), so
//! `-C target-feature=+avx2` builds dispatch correctly even without `std`.

/// CPU capabilities relevant to hash kernel selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub(crate) struct Caps(u64);

impl Caps {
  /// Empty capability set (portable kernel only).
  pub(crate) const NONE: Self = Self(0);

  /// AVX2 256-bit integer SIMD (x86_64).
  pub(crate) const AVX2: Self = Self(1);

  /// Check if all features in `required` are present.
  #[inline(always)]
  #[must_use]
  pub(crate) const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub(crate) const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }
}

/// Capabilities promised by the compilation target.
#[inline]
#[must_use]
const fn caps_static() -> Caps {
  #[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
  {
    Caps::AVX2
  }
  #[cfg(not(all(target_arch = "x86_64", target_feature = "avx2")))]
  {
    Caps::NONE
  }
}

/// Detect the capabilities of the current machine.
///
/// With `std` this probes the CPU at runtime; without it only
/// compile-time target features are reported.
#[must_use]
pub(crate) fn detect() -> Caps {
  let mut caps = caps_static();

  #[cfg(all(target_arch = "x86_64", feature = "std"))]
  {
    if std::arch::is_x86_feature_detected!("avx2") {
      caps = caps.union(Caps::AVX2);
    }
  }

  caps
}
