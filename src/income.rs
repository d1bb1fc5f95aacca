//! This file defines [IncomeRecord], a validated record of money received
//! from a single source on a particular date.

use std::fmt::Display;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

use crate::Error;

/// A single instance of money received.
///
/// An income record holds a non-negative amount, a non-empty source label
/// and the date the money was received. The fields are private so that a
/// record can only be created or modified through functions that uphold
/// those rules. Deserialization and [IncomeRecord::new_unchecked] skip the
/// checks, so they should only be given data that was valid when it was
/// stored.
///
/// ```
/// use income_record::IncomeRecord;
/// use rust_decimal_macros::dec;
/// use time::macros::date;
///
/// let record = IncomeRecord::new(dec!(1500.00), "Job", date!(2024 - 01 - 15)).unwrap();
///
/// assert_eq!(record.to_string(), "Amount = 1500.00, Source = Job, Date = 2024-01-15.");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    amount: Decimal,
    source: String,
    date: Date,
}

impl IncomeRecord {
    /// Create an income record.
    ///
    /// The amount is checked before the source, so if both are invalid the
    /// error refers to the amount. The source is stored as given, including
    /// any surrounding whitespace. Any date is accepted, including dates in
    /// the future.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::NegativeAmount] if `amount` is less than zero,
    /// - [Error::EmptySource] if `source` is empty or only whitespace.
    pub fn new(amount: Decimal, source: &str, date: Date) -> Result<Self, Error> {
        validate_amount(amount)?;
        validate_source(source)?;

        Ok(Self {
            amount,
            source: source.to_string(),
            date,
        })
    }

    /// Create an income record without validation.
    ///
    /// The caller should ensure that the amount is not negative and that the
    /// source is not empty.
    ///
    /// This function has `_unchecked` in the name but is not `unsafe`, because if an invariant is violated it will cause incorrect behaviour but not affect memory safety.
    pub fn new_unchecked(amount: Decimal, source: &str, date: Date) -> Self {
        Self {
            amount,
            source: source.to_string(),
            date,
        }
    }

    /// The amount of money received.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Where the money came from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// When the money was received.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Set the amount of money received.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::NegativeAmount] if `amount` is
    /// less than zero. The record keeps its previous amount in that case.
    pub fn set_amount(&mut self, amount: Decimal) -> Result<(), Error> {
        validate_amount(amount)?;
        self.amount = amount;

        Ok(())
    }

    /// Set where the money came from.
    ///
    /// The source is stored as given, including any surrounding whitespace.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptySource] if `source` is
    /// empty or only whitespace. The record keeps its previous source in
    /// that case.
    pub fn set_source(&mut self, source: &str) -> Result<(), Error> {
        validate_source(source)?;
        self.source = source.to_string();

        Ok(())
    }

    /// Set when the money was received.
    ///
    /// Any date is accepted, including dates in the future.
    pub fn set_date(&mut self, date: Date) {
        self.date = date;
    }

    /// Replace every field of the record at once.
    ///
    /// Both new values are validated before either is assigned, so the
    /// record is left untouched when this function returns an error.
    ///
    /// # Errors
    ///
    /// This function will return a:
    /// - [Error::NegativeAmount] if `amount` is less than zero,
    /// - [Error::EmptySource] if `source` is empty or only whitespace.
    pub fn set_all(&mut self, amount: Decimal, source: &str, date: Date) -> Result<(), Error> {
        validate_amount(amount)?;
        validate_source(source)?;

        self.amount = amount;
        self.source = source.to_string();
        self.date = date;

        Ok(())
    }
}

impl Default for IncomeRecord {
    /// Create a placeholder income record of zero money from no source,
    /// dated today.
    ///
    /// The empty source bypasses the check in [IncomeRecord::new], so the
    /// placeholder should be filled in before it is fed into any business
    /// logic. A warning is logged each time one is created.
    fn default() -> Self {
        tracing::warn!("placeholder income record created with an empty source");

        Self::new_unchecked(Decimal::ZERO, "", OffsetDateTime::now_utc().date())
    }
}

impl Display for IncomeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Amount = {}, Source = {}, Date = {}.",
            self.amount, self.source, self.date
        )
    }
}

fn validate_amount(amount: Decimal) -> Result<(), Error> {
    if amount < Decimal::ZERO {
        Err(Error::NegativeAmount(amount))
    } else {
        Ok(())
    }
}

fn validate_source(source: &str) -> Result<(), Error> {
    if source.trim().is_empty() {
        Err(Error::EmptySource)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod new_income_record_tests {
    use rust_decimal_macros::dec;
    use time::macros::date;

    use crate::{Error, income::IncomeRecord};

    #[test]
    fn new_succeeds_on_valid_fields() {
        let amount = dec!(1500.00);
        let source = "Job";
        let date = date!(2024 - 01 - 15);

        let record = IncomeRecord::new(amount, source, date).unwrap();

        assert_eq!(record.amount(), amount);
        assert_eq!(record.source(), source);
        assert_eq!(record.date(), date);
    }

    #[test]
    fn new_succeeds_on_zero_amount() {
        let record = IncomeRecord::new(dec!(0), "Refund", date!(2023 - 12 - 31));

        assert!(record.is_ok());
    }

    #[test]
    fn new_succeeds_on_future_date() {
        let record = IncomeRecord::new(dec!(250), "Invoice", date!(2999 - 01 - 01));

        assert!(record.is_ok());
    }

    #[test]
    fn new_fails_on_negative_amount() {
        let record = IncomeRecord::new(dec!(-5), "Job", date!(2023 - 01 - 01));

        assert_eq!(record, Err(Error::NegativeAmount(dec!(-5))));
    }

    #[test]
    fn new_fails_on_empty_source() {
        let record = IncomeRecord::new(dec!(100), "", date!(2023 - 01 - 01));

        assert_eq!(record, Err(Error::EmptySource));
    }

    #[test]
    fn new_fails_on_just_whitespace_source() {
        let record = IncomeRecord::new(dec!(100), "   ", date!(2023 - 01 - 01));

        assert_eq!(record, Err(Error::EmptySource));
    }

    #[test]
    fn new_checks_amount_before_source() {
        let record = IncomeRecord::new(dec!(-1), "  ", date!(2023 - 01 - 01));

        assert_eq!(record, Err(Error::NegativeAmount(dec!(-1))));
    }

    #[test]
    fn new_keeps_surrounding_whitespace_in_source() {
        let record = IncomeRecord::new(dec!(100), "  Refund  ", date!(2023 - 01 - 01)).unwrap();

        assert_eq!(record.source(), "  Refund  ");
    }
}
