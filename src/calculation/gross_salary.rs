//! Gross salary aggregation.
//!
//! Gross salary is the exact sum of the five monthly salary components;
//! there is no rounding anywhere in the aggregation.

use rust_decimal::Decimal;

use crate::models::SalaryStructure;

/// Computes the monthly gross salary from a salary structure.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_gross_salary;
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let salary = SalaryStructure {
///     basic: Decimal::from(50000),
///     hra: Decimal::from(20000),
///     conveyance_allowance: Decimal::from(5000),
///     special_allowance: Decimal::from(15000),
///     medical_allowance: Decimal::from(2000),
/// };
/// assert_eq!(calculate_gross_salary(&salary), Decimal::from(92000));
/// ```
pub fn calculate_gross_salary(salary: &SalaryStructure) -> Decimal {
    salary.basic
        + salary.hra
        + salary.conveyance_allowance
        + salary.special_allowance
        + salary.medical_allowance
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn salary(basic: &str, hra: &str, conveyance: &str, special: &str, medical: &str) -> SalaryStructure {
        SalaryStructure {
            basic: dec(basic),
            hra: dec(hra),
            conveyance_allowance: dec(conveyance),
            special_allowance: dec(special),
            medical_allowance: dec(medical),
        }
    }

    #[test]
    fn test_gross_is_sum_of_components() {
        let salary = salary("50000", "20000", "5000", "15000", "2000");
        assert_eq!(calculate_gross_salary(&salary), dec("92000"));
    }

    #[test]
    fn test_gross_of_all_zero_components() {
        let salary = salary("0", "0", "0", "0", "0");
        assert_eq!(calculate_gross_salary(&salary), Decimal::ZERO);
    }

    #[test]
    fn test_gross_preserves_fractional_amounts() {
        let salary = salary("10000.50", "4000.25", "1000.10", "500.10", "250.05");
        assert_eq!(calculate_gross_salary(&salary), dec("15751.00"));
    }

    proptest! {
        #[test]
        fn prop_gross_equals_component_sum(
            basic in 0u32..500_000,
            hra in 0u32..200_000,
            conveyance in 0u32..50_000,
            special in 0u32..200_000,
            medical in 0u32..50_000,
        ) {
            let salary = SalaryStructure {
                basic: Decimal::from(basic),
                hra: Decimal::from(hra),
                conveyance_allowance: Decimal::from(conveyance),
                special_allowance: Decimal::from(special),
                medical_allowance: Decimal::from(medical),
            };

            let expected = Decimal::from(basic)
                + Decimal::from(hra)
                + Decimal::from(conveyance)
                + Decimal::from(special)
                + Decimal::from(medical);
            prop_assert_eq!(calculate_gross_salary(&salary), expected);
        }
    }
}
