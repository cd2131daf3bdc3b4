use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::tax_bracket::{BracketSchedule, TaxBracket};

/// Flat payroll levy (Social Security plus Medicare) applied up to a wage cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayrollLevy {
    pub rate: Decimal,
    pub wage_cap: Decimal,
}

impl PayrollLevy {
    pub fn levy_on(
        &self,
        income: Decimal,
    ) -> Decimal {
        self.rate * income.min(self.wage_cap)
    }
}

impl Default for PayrollLevy {
    fn default() -> Self {
        Self {
            rate: dec!(0.0765),
            wage_cap: dec!(168600),
        }
    }
}

/// The full set of rate tables a household's wages are taxed under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxTables {
    pub federal: BracketSchedule,
    pub state: BracketSchedule,
    pub local: BracketSchedule,
    pub payroll: PayrollLevy,
}

impl TaxTables {
    /// 2024 married-filing-jointly federal brackets with New York State and
    /// New York City resident schedules.
    pub fn nyc_2024() -> Self {
        let federal = BracketSchedule::from_trusted(vec![
            TaxBracket::capped(dec!(23200), dec!(0.10)),
            TaxBracket::capped(dec!(94300), dec!(0.12)),
            TaxBracket::capped(dec!(201050), dec!(0.22)),
            TaxBracket::capped(dec!(383900), dec!(0.24)),
            TaxBracket::capped(dec!(487450), dec!(0.32)),
            TaxBracket::capped(dec!(731200), dec!(0.35)),
            TaxBracket::unbounded(dec!(0.37)),
        ]);

        let state = BracketSchedule::from_trusted(vec![
            TaxBracket::capped(dec!(17150), dec!(0.04)),
            TaxBracket::capped(dec!(23600), dec!(0.045)),
            TaxBracket::capped(dec!(27900), dec!(0.0525)),
            TaxBracket::capped(dec!(43000), dec!(0.059)),
            TaxBracket::capped(dec!(161550), dec!(0.0621)),
            TaxBracket::capped(dec!(323200), dec!(0.0649)),
            TaxBracket::capped(dec!(2155350), dec!(0.0685)),
            TaxBracket::unbounded(dec!(0.109)),
        ]);

        let local = BracketSchedule::from_trusted(vec![
            TaxBracket::capped(dec!(21600), dec!(0.03078)),
            TaxBracket::capped(dec!(45000), dec!(0.03762)),
            TaxBracket::capped(dec!(90000), dec!(0.03819)),
            TaxBracket::unbounded(dec!(0.03876)),
        ]);

        Self {
            federal,
            state,
            local,
            payroll: PayrollLevy::default(),
        }
    }
}

impl Default for TaxTables {
    fn default() -> Self {
        Self::nyc_2024()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn built_in_schedules_pass_validation() {
        let tables = TaxTables::nyc_2024();

        for schedule in [&tables.federal, &tables.state, &tables.local] {
            assert!(BracketSchedule::new(schedule.brackets().to_vec()).is_ok());
        }
    }

    #[test]
    fn payroll_levy_below_cap_applies_to_full_income() {
        let levy = PayrollLevy::default();

        assert_eq!(levy.levy_on(dec!(100000)), dec!(7650));
    }

    #[test]
    fn payroll_levy_stops_at_wage_cap() {
        let levy = PayrollLevy::default();

        assert_eq!(levy.levy_on(dec!(500000)), dec!(0.0765) * dec!(168600));
    }

    #[test]
    fn nyc_2024_federal_first_bracket_is_ten_percent() {
        let tables = TaxTables::nyc_2024();

        assert_eq!(tables.federal.tax_on(dec!(23200)), dec!(2320));
    }
}
