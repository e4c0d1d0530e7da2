//! Provident Fund contribution calculation.
//!
//! The employee PF contribution is a fixed rate of basic salary, capped at
//! a statutory monthly ceiling regardless of how large basic grows.

use rust_decimal::Decimal;

use crate::config::ProvidentFundConfig;

/// Computes the monthly employee Provident Fund contribution.
///
/// The contribution is `basic * rate`, capped at the configured monthly
/// ceiling. With the shipped configuration (12%, cap 1800) the cap binds
/// for any basic salary above 15000.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_provident_fund;
/// use payroll_engine::config::ProvidentFundConfig;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = ProvidentFundConfig {
///     rate: Decimal::from_str("0.12").unwrap(),
///     monthly_cap: Decimal::from(1800),
/// };
/// assert_eq!(
///     calculate_provident_fund(Decimal::from(50000), &config),
///     Decimal::from(1800)
/// );
/// ```
pub fn calculate_provident_fund(basic: Decimal, config: &ProvidentFundConfig) -> Decimal {
    (basic * config.rate).min(config.monthly_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_config() -> ProvidentFundConfig {
        ProvidentFundConfig {
            rate: dec("0.12"),
            monthly_cap: dec("1800"),
        }
    }

    #[test]
    fn test_pf_below_cap_is_rate_of_basic() {
        let config = create_test_config();
        assert_eq!(calculate_provident_fund(dec("10000"), &config), dec("1200.00"));
    }

    #[test]
    fn test_pf_at_cap_boundary() {
        // 15000 * 0.12 == 1800 exactly, the cap does not yet bind.
        let config = create_test_config();
        assert_eq!(calculate_provident_fund(dec("15000"), &config), dec("1800.00"));
    }

    #[test]
    fn test_pf_above_cap_is_capped() {
        let config = create_test_config();
        assert_eq!(calculate_provident_fund(dec("50000"), &config), dec("1800"));
        assert_eq!(calculate_provident_fund(dec("500000"), &config), dec("1800"));
    }

    #[test]
    fn test_pf_of_zero_basic_is_zero() {
        let config = create_test_config();
        assert_eq!(calculate_provident_fund(Decimal::ZERO, &config), Decimal::ZERO);
    }

    proptest! {
        #[test]
        fn prop_pf_never_exceeds_cap(basic in 0u32..1_000_000) {
            let config = create_test_config();
            let pf = calculate_provident_fund(Decimal::from(basic), &config);
            prop_assert!(pf <= config.monthly_cap);
            prop_assert!(pf >= Decimal::ZERO);
        }

        #[test]
        fn prop_pf_is_monotonically_non_decreasing(basic in 0u32..1_000_000, step in 0u32..100_000) {
            let config = create_test_config();
            let lower = calculate_provident_fund(Decimal::from(basic), &config);
            let higher = calculate_provident_fund(Decimal::from(basic + step), &config);
            prop_assert!(higher >= lower);
        }
    }
}
