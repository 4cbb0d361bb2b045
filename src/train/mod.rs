//! # Train Module
//!
//! A train is a circular sequence of cars. Each car carries one light that is
//! either on or off, drawn at random when the train is built. Positions wrap:
//! car `i` and car `i + len` are the same car, as is car `i - len`.
//!
//! Discovery strategies never see a [`Train`] directly. They receive a
//! [`CarAccess`], which can read and flip lights but cannot report a length.
//!
//! ## Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use train_counter::train::{CarAccess, Train};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut train = Train::new(12, &mut rng)?;
//!
//! let first = train.light(0);
//! train.flip(12);
//! assert_eq!(train.light(0), first.flipped());
//! # Ok(())
//! # }
//! ```

mod train_impl;

pub use train_impl::*;
