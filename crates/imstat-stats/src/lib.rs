//! imstat-stats - Descriptive statistics over integer samples
//!
//! This crate turns a sample (one decimal integer per line) into:
//!
//! - **Central tendency**: mean, median
//! - **Order statistics**: min, max, range, interquartile range
//! - **Dispersion**: population variance, standard deviation
//!
//! # Design
//!
//! Every operation is a pure function of its input. The free functions take
//! the raw lines and treat an unparsable line as zero; [`Sample::parse`]
//! lets the caller pick a [`ParsePolicy`] instead and reports bad lines in
//! a [`ParseReport`]. Order statistics on an empty sample return
//! [`StatsError::EmptySample`]; mean and variance return 0.

pub mod error;
pub mod moments;
pub mod order;
pub mod sample;
pub mod summary;

pub use error::{Result, StatsError};
pub use moments::*;
pub use order::*;
pub use sample::{ParseDiagnostic, ParsePolicy, ParseReport, Sample};
pub use summary::*;
