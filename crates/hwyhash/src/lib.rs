//! Keyed HighwayHash digests in 64-, 128- and 256-bit widths (**NOT CRYPTO**).
//!
//! This crate is `no_std` compatible and has zero library dependencies outside
//! the hwyhash workspace. Dev-only dependencies are used for oracle testing
//! and benchmarking.
//!
//! Packet absorption is dispatched once per process to the widest SIMD kernel
//! the host supports and falls back to a portable scalar kernel everywhere
//! else. [`kernel_name`] reports which one was picked.
//!
//! # Modules
//!
//! - [`encode`] - Allocation-free digest rendering (hex, decimal, halves).
//! - [`io`] - `Read`/`Write` adapters that hash bytes as they pass through.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod cache;
mod caps;
pub mod encode;
mod highway;
#[cfg(feature = "std")]
pub mod io;

pub use highway::dispatch::kernel_name;
pub use highway::{Highway64, Highway128, Highway256, HighwayHasher, Key};
pub use traits::{Digest, FastHash, InvalidKeyLength};

// Test-only surface for the fuzz harness. Not part of the public API.
#[cfg(feature = "std")]
#[doc(hidden)]
pub mod __internal {
  pub use crate::highway::kernel_test;
}
