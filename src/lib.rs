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

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::{RingBuffer, helper};

mod traits;
pub use traits::Accumulator;

mod running;
pub use running::{
    LagDifference, RunningMaximum, RunningMinimum, RunningProduct, RunningRange, RunningSum,
};

mod config;
pub use config::ScanOptions;

mod error;
pub use error::{Error, Result};

mod outcome;
pub use outcome::{Outcome, Warning};

mod cumulative;
pub use cumulative::{cummax, cummin, cumprod, cumsum, cumsum_with_missing};

mod difference;
pub use difference::{diff, diff_lag, diff_with_missing};

mod range;
pub use range::{range, range_with_missing};

mod variance;
pub use variance::variance;

mod missing;
pub use missing::{from_nan_coded, to_nan_coded};
