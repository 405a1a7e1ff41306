//! I/O adapters for streaming HighwayHash over readers and writers.
//!
//! Re-exports [`DigestReader`] and [`DigestWriter`], which wrap
//! [`std::io::Read`] and [`std::io::Write`] implementations and hash
//! every byte actually transferred. Pair them with
//! [`DigestReader::with_hasher`] to thread a keyed hasher through I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use hwyhash::{Highway64, Key};
//! use hwyhash::io::DigestReader;
//! use std::fs::File;
//! use std::io::Read;
//!
//! let file = File::open("data.bin")?;
//! let mut reader = DigestReader::with_hasher(file, Highway64::with_key(Key::default()));
//! let mut contents = Vec::new();
//! reader.read_to_end(&mut contents)?;
//! println!("hash: {:?}", reader.digest());
//! ```

pub use traits::io::{DigestReader, DigestWriter};
