use configuration::MedianPolicy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Median of a set of values, or `None` if it is empty.
///
/// For an even count the two middle elements are resolved according to
/// `policy`; an odd count always yields the single middle element.
pub fn median(values: &[Decimal], policy: MedianPolicy) -> Option<Decimal> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort();

    let len = sorted.len();
    if len % 2 == 1 {
        return Some(sorted[len / 2]);
    }

    let lower = sorted[len / 2 - 1];
    let upper = sorted[len / 2];
    Some(match policy {
        MedianPolicy::LowerMiddle => lower,
        MedianPolicy::UpperMiddle => upper,
        MedianPolicy::Mean => midpoint(lower, upper),
    })
}

/// Halfway between `lower <= upper`, without leaving the `Decimal` range.
fn midpoint(lower: Decimal, upper: Decimal) -> Decimal {
    if lower.is_sign_negative() == upper.is_sign_negative() {
        lower + (upper - lower) / dec!(2)
    } else {
        (lower + upper) / dec!(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> Vec<Decimal> {
        vec![dec!(400), dec!(100), dec!(300), dec!(200)]
    }

    #[test]
    fn even_count_tie_break_follows_policy() {
        assert_eq!(median(&prices(), MedianPolicy::LowerMiddle), Some(dec!(200)));
        assert_eq!(median(&prices(), MedianPolicy::UpperMiddle), Some(dec!(300)));
        assert_eq!(median(&prices(), MedianPolicy::Mean), Some(dec!(250)));
    }

    #[test]
    fn odd_count_ignores_policy() {
        let values = [dec!(5), dec!(1), dec!(3)];
        for policy in [MedianPolicy::LowerMiddle, MedianPolicy::UpperMiddle, MedianPolicy::Mean] {
            assert_eq!(median(&values, policy), Some(dec!(3)));
        }
    }

    #[test]
    fn mean_of_middles_stays_in_range_at_the_extremes() {
        let values = [Decimal::MAX, Decimal::MAX];
        assert_eq!(median(&values, MedianPolicy::Mean), Some(Decimal::MAX));
        let values = [Decimal::MIN, Decimal::MAX];
        assert_eq!(median(&values, MedianPolicy::Mean), Some(Decimal::ZERO));
    }

    #[test]
    fn empty_has_no_median() {
        assert_eq!(median(&[], MedianPolicy::LowerMiddle), None);
    }
}
