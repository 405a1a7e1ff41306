//! Core hashing traits for the hwyhash workspace.
//!
//! This crate provides the foundational traits that the hwyhash
//! implementations conform to. It is `no_std` compatible and has zero
//! dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Digest`] | Streaming fixed-output digests | HighwayHash 64/128/256 |
//! | [`FastHash`] | One-shot seeded hashing (**NOT CRYPTO**) | HighwayHash with a 256-bit key |
//!
//! # Error Types
//!
//! - [`InvalidKeyLength`] - Key material has the wrong length
//!
//! # I/O Adapters
//!
//! With the `std` feature, [`io`] provides [`DigestReader`](io::DigestReader)
//! and [`DigestWriter`](io::DigestWriter) wrappers that hash bytes as they
//! flow through `std::io` streams.
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod digest;
mod fast_hash;

pub mod error;
#[cfg(feature = "std")]
pub mod io;

pub use digest::Digest;
pub use error::InvalidKeyLength;
pub use fast_hash::FastHash;
