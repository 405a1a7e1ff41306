use crate::caps::Caps;

use super::{LaneState, PACKET_LEN};

/// Bulk absorption of whole 32-byte packets into the lane state.
pub type UpdateFn = fn(&mut LaneState, &[[u8; PACKET_LEN]]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum HighwayKernelId {
  Portable = 0,
  #[cfg(target_arch = "x86_64")]
  Avx2 = 1,
}

/// Every kernel compiled into this build.
#[cfg(target_arch = "x86_64")]
pub const ALL: &[HighwayKernelId] = &[HighwayKernelId::Portable, HighwayKernelId::Avx2];
/// Every kernel compiled into this build.
#[cfg(not(target_arch = "x86_64"))]
pub const ALL: &[HighwayKernelId] = &[HighwayKernelId::Portable];

impl HighwayKernelId {
  #[inline]
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Portable => "portable",
      #[cfg(target_arch = "x86_64")]
      Self::Avx2 => "avx2",
    }
  }
}

#[must_use]
pub fn update_fn(id: HighwayKernelId) -> UpdateFn {
  match id {
    HighwayKernelId::Portable => super::update_packets_portable,
    #[cfg(target_arch = "x86_64")]
    HighwayKernelId::Avx2 => super::avx2::update_packets,
  }
}

#[inline]
#[must_use]
pub const fn required_caps(id: HighwayKernelId) -> Caps {
  match id {
    HighwayKernelId::Portable => Caps::NONE,
    #[cfg(target_arch = "x86_64")]
    HighwayKernelId::Avx2 => Caps::AVX2,
  }
}
