//! Income record modelling for personal finance applications.
//!
//! This library provides [IncomeRecord], a validated record of money
//! received from a single source on a particular date. Amounts use exact
//! decimal arithmetic so that sums over many records never accumulate
//! floating-point drift.

#![warn(missing_docs)]

use rust_decimal::Decimal;

mod income;

pub use income::IncomeRecord;

/// The errors that may occur when creating or modifying an income record.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A negative amount was used to create or update an income record.
    ///
    /// Income records money received, therefore negative amounts are not
    /// allowed.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(Decimal),

    /// An empty or whitespace-only string was used as an income source.
    #[error("Income source cannot be empty")]
    EmptySource,
}
