//! Property-based tests for greedy coin change
//!
//! These check the counter against the closed-form greedy formula and the
//! breakdown against the amount it was made from.

#[cfg(test)]
mod tests {
    use crate::core::change::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_count_matches_closed_form(n in 0u64..10_000_000) {
            let expected = n / 25 + (n % 25) / 10 + (n % 25 % 10) / 5 + (n % 25 % 10 % 5);
            prop_assert_eq!(count_coins(n), expected);
        }

        #[test]
        fn test_breakdown_adds_up_to_amount(n in any::<u64>()) {
            let breakdown = make_change(n);
            prop_assert_eq!(breakdown.value(), n);
        }

        #[test]
        fn test_smaller_coins_never_sum_to_a_larger_one(n in 0u64..1_000_000) {
            let breakdown = make_change(n);
            prop_assert!(breakdown.count(Coin::Dime) < 3);
            prop_assert!(breakdown.count(Coin::Nickel) < 2);
            prop_assert!(breakdown.count(Coin::Penny) < 5);
            prop_assert!(breakdown.count(Coin::Dime) * 10 + breakdown.count(Coin::Nickel) * 5 < 25);
        }

        #[test]
        fn test_adding_a_quarter_adds_one_coin(n in 0u64..1_000_000) {
            prop_assert_eq!(count_coins(n + 25), count_coins(n) + 1);
        }

        #[test]
        fn test_validate_accepts_exactly_non_negative(value in any::<i64>()) {
            match validate_change_owed(value) {
                Ok(cents) => {
                    prop_assert!(value >= 0);
                    prop_assert_eq!(cents as i64, value);
                }
                Err(message) => {
                    prop_assert!(value < 0);
                    prop_assert!(message.contains("negative"));
                }
            }
        }
    }
}
