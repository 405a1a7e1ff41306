//! One-shot cache for resolved kernel dispatch.
//!
//! Feature detection runs once per process; the winning kernel is stored
//! here and every later lookup is a plain load. On `std` builds this is
//! [`std::sync::OnceLock`]. On `no_std` targets with atomics we run a
//! small state machine over an `AtomicU8`. Targets without atomics fall
//! back to re-running the init closure on every call, which stays correct
//! because detection is deterministic.

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
use core::sync::atomic::{AtomicU8, Ordering};

/// Caches a `Copy` value produced by a one-time initializer.
pub(crate) struct OnceCache<T: Copy> {
  #[cfg(feature = "std")]
  inner: std::sync::OnceLock<T>,

  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  state: AtomicU8,
  #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
  value: core::cell::UnsafeCell<core::mem::MaybeUninit<T>>,

  #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
  _marker: core::marker::PhantomData<*const T>,
}

#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const UNINIT: u8 = 0;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const INITING: u8 = 1;
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
const READY: u8 = 2;

// SAFETY: the only interior mutation is the single publish inside
// `get_or_init`, ordered by the `state` atomic: the value is written
// exactly once while `state == INITING` and read only after observing
// `READY` with acquire ordering. `T: Copy + Send + Sync` keeps the
// stored value itself safe to share.
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}
#[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send> Send for OnceCache<T> {}

// SAFETY: on no-atomic targets (thumbv6m) the cache holds no state at all
// and the target is single-threaded.
#[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send + Sync> Sync for OnceCache<T> {}
#[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
#[allow(unsafe_code)]
unsafe impl<T: Copy + Send> Send for OnceCache<T> {}

impl<T: Copy> OnceCache<T> {
  /// Creates an empty cache.
  #[must_use]
  pub(crate) const fn new() -> Self {
    #[cfg(feature = "std")]
    {
      Self { inner: std::sync::OnceLock::new() }
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      Self {
        state: AtomicU8::new(UNINIT),
        value: core::cell::UnsafeCell::new(core::mem::MaybeUninit::uninit()),
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      Self { _marker: core::marker::PhantomData }
    }
  }

  /// Returns the cached value, running `f` to produce it on first use.
  ///
  /// `f` may run more than once under contention (or on every call on
  /// targets without atomics); it must be deterministic.
  pub(crate) fn get_or_init(&self, f: impl Fn() -> T) -> T {
    #[cfg(feature = "std")]
    {
      *self.inner.get_or_init(f)
    }

    #[cfg(all(not(feature = "std"), target_has_atomic = "8"))]
    {
      if self.state.load(Ordering::Acquire) == READY {
        // SAFETY: READY was observed with acquire ordering, so the
        // release store that published the value happens-before here.
        #[allow(unsafe_code)]
        return unsafe { (*self.value.get()).assume_init() };
      }

      let computed = f();
      match self.state.compare_exchange(
        UNINIT,
        INITING,
        Ordering::AcqRel,
        Ordering::Acquire,
      ) {
        Ok(_) => {
          // SAFETY: the CAS won, so this thread exclusively owns the slot
          // until it stores READY below.
          #[allow(unsafe_code)]
          unsafe {
            (*self.value.get()).write(computed);
          }
          self.state.store(READY, Ordering::Release);
          computed
        }
        Err(_) => {
          while self.state.load(Ordering::Acquire) != READY {
            core::hint::spin_loop();
          }
          // SAFETY: READY observed with acquire ordering, as above.
          #[allow(unsafe_code)]
          unsafe {
            (*self.value.get()).assume_init()
          }
        }
      }
    }

    #[cfg(all(not(feature = "std"), not(target_has_atomic = "8")))]
    {
      f()
    }
  }
}

impl<T: Copy> Default for OnceCache<T> {
  fn default() -> Self {
    Self::new()
  }
}
