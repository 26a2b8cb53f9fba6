//! Rounding and averaging helpers shared by every engine.

use crate::error::{CoreError, in_range};
use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds to the cent, half away from zero.
pub fn round_currency(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole currency unit, half away from zero.
pub fn round_whole(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Arithmetic mean, or `Ok(None)` for an empty input.
///
/// A sum that leaves the `Decimal` range is reported as `OutOfRange` against
/// `field`.
pub fn mean<I>(field: &str, values: I) -> Result<Option<Decimal>, CoreError>
where
    I: IntoIterator<Item = Decimal>,
{
    let mut sum = Decimal::ZERO;
    let mut count = 0u64;
    for value in values {
        sum = in_range(field, sum.checked_add(value))?;
        count += 1;
    }
    if count == 0 {
        return Ok(None);
    }
    in_range(field, sum.checked_div(Decimal::from(count))).map(Some)
}
