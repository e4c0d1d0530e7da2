//! Employee State Insurance contribution calculation.
//!
//! ESI applies only while gross salary is at or below the eligibility
//! threshold. The threshold is a hard cliff: one rupee above it the
//! contribution drops to zero, it does not phase out.

use rust_decimal::Decimal;

use crate::config::EsiConfig;

/// Computes the monthly employee ESI contribution.
///
/// Returns `gross_salary * rate` when gross salary is at or below the
/// configured threshold, and zero otherwise.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_esi;
/// use payroll_engine::config::EsiConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = EsiConfig {
///     rate: Decimal::from_str("0.0075").unwrap(),
///     gross_threshold: Decimal::from(21000),
/// };
/// assert_eq!(
///     calculate_esi(Decimal::from(18000), &config),
///     Decimal::from_str("135.0000").unwrap()
/// );
/// assert_eq!(calculate_esi(Decimal::from(22000), &config), Decimal::ZERO);
/// ```
pub fn calculate_esi(gross_salary: Decimal, config: &EsiConfig) -> Decimal {
    if gross_salary <= config.gross_threshold {
        gross_salary * config.rate
    } else {
        Decimal::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_config() -> EsiConfig {
        EsiConfig {
            rate: dec("0.0075"),
            gross_threshold: dec("21000"),
        }
    }

    #[test]
    fn test_esi_below_threshold() {
        let config = create_test_config();
        assert_eq!(calculate_esi(dec("18000"), &config), dec("135"));
    }

    #[test]
    fn test_esi_at_threshold_still_applies() {
        let config = create_test_config();
        assert_eq!(calculate_esi(dec("21000"), &config), dec("157.50"));
    }

    #[test]
    fn test_esi_above_threshold_is_zero() {
        let config = create_test_config();
        assert_eq!(calculate_esi(dec("21000.01"), &config), Decimal::ZERO);
        assert_eq!(calculate_esi(dec("92000"), &config), Decimal::ZERO);
    }

    #[test]
    fn test_esi_of_zero_gross_is_zero() {
        let config = create_test_config();
        assert_eq!(calculate_esi(Decimal::ZERO, &config), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_esi_is_exact_rate_at_or_below_threshold(gross in 0u32..=21_000) {
            let config = create_test_config();
            let gross = Decimal::from(gross);
            prop_assert_eq!(calculate_esi(gross, &config), gross * dec("0.0075"));
        }

        #[test]
        fn prop_esi_is_zero_above_threshold(gross in 21_001u32..1_000_000) {
            let config = create_test_config();
            prop_assert_eq!(calculate_esi(Decimal::from(gross), &config), Decimal::ZERO);
        }
    }
}
