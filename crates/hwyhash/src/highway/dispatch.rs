use crate::{cache::OnceCache, caps};

use super::kernels::{self, HighwayKernelId, UpdateFn};

#[derive(Clone, Copy)]
pub(crate) struct ActiveKernel {
  pub(crate) update: UpdateFn,
  pub(crate) name: &'static str,
}

static ACTIVE: OnceCache<ActiveKernel> = OnceCache::new();

#[inline]
#[must_use]
const fn preferred() -> HighwayKernelId {
  #[cfg(target_arch = "x86_64")]
  {
    HighwayKernelId::Avx2
  }
  #[cfg(not(target_arch = "x86_64"))]
  {
    HighwayKernelId::Portable
  }
}

#[inline]
#[must_use]
fn resolve(id: HighwayKernelId, caps: caps::Caps) -> HighwayKernelId {
  if caps.has(kernels::required_caps(id)) {
    id
  } else {
    HighwayKernelId::Portable
  }
}

#[inline]
#[must_use]
pub(crate) fn active() -> ActiveKernel {
  ACTIVE.get_or_init(|| {
    let id = resolve(preferred(), caps::detect());
    ActiveKernel {
      update: kernels::update_fn(id),
      name: id.as_str(),
    }
  })
}

/// Name of the packet kernel selected for this process.
#[inline]
#[must_use]
pub fn kernel_name() -> &'static str {
  active().name
}
