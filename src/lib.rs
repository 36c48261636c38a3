//! Counts the numbers below `10^x` whose decimal digits never decrease or
//! never increase from left to right.
//!
//! ```
//! use num_bigint::BigUint;
//!
//! assert_eq!(incdec::compute_total(3).unwrap(), BigUint::from(475u32));
//! assert!(incdec::compute_total(-1).unwrap_err().is_invalid_argument());
//! ```

pub mod cli;
pub mod config;
pub mod count;
pub mod error;
pub mod format;
pub mod output;
pub mod utils;

pub use count::{
    binomial::binomial,
    total::{compute_total, Breakdown, ExponentRange},
};
pub use error::CountError;
