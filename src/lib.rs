#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Error, Result};

mod statistics;
pub use statistics::{Statistics, chebyshevs_theorem};

mod mode;
pub use mode::Mode;

mod frequency;
pub use frequency::{FrequencyClass, FrequencyTable, RenderOptions};

mod summary;
pub use summary::{Describe, FiveNumberSummary};
