//! Monthly fixed-cost configuration.
//!
//! The configuration is a flat set of named line items. Its total is always
//! derived from the lines on demand and is never stored alongside them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::forecast::ForecastError;
use crate::limits::MAX_MONEY_AMOUNT;
use salonops_shared::types::round_currency;

/// Declares the configuration struct and the matching line enum from a single
/// list, so the two can never disagree about which lines exist.
macro_rules! fixed_cost_lines {
    ($( $(#[doc = $doc:expr])* $field:ident => $variant:ident ),+ $(,)?) => {
        /// Recurring monthly operating expenses independent of sales volume.
        ///
        /// `Default` is the all-zero configuration used before anything has
        /// been saved. Missing lines deserialize as zero.
        #[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
        #[serde(default)]
        pub struct FixedCostsConfiguration {
            $( $(#[doc = $doc])* pub $field: Decimal, )+
        }

        /// Names one line item of [`FixedCostsConfiguration`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum FixedCostLine {
            $( $(#[doc = $doc])* $variant, )+
        }

        impl FixedCostLine {
            /// Every line, in presentation order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Wire and column name of the line.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($field),)+
                }
            }
        }

        impl FixedCostsConfiguration {
            /// Returns the amount configured for `line`.
            #[must_use]
            pub const fn amount(&self, line: FixedCostLine) -> Decimal {
                match line {
                    $(FixedCostLine::$variant => self.$field,)+
                }
            }

            fn amount_mut(&mut self, line: FixedCostLine) -> &mut Decimal {
                match line {
                    $(FixedCostLine::$variant => &mut self.$field,)+
                }
            }
        }
    };
}

fixed_cost_lines! {
    /// Occupancy: rent.
    rent => Rent,
    /// Occupancy: utilities.
    utilities => Utilities,
    /// Occupancy: telephone.
    telephone => Telephone,
    /// Occupancy: repairs and maintenance.
    maintenance => Maintenance,
    /// Local advertising.
    advertising => Advertising,
    /// Insurance premiums.
    insurance => Insurance,
    /// Accounting and legal fees.
    professional_fees => ProfessionalFees,
    /// Front-desk wages.
    receptionist_labor => ReceptionistLabor,
    /// Payroll tax on front-desk wages.
    receptionist_payroll_tax => ReceptionistPayrollTax,
    /// Travel.
    travel => Travel,
    /// Meals and entertainment.
    meals_entertainment => MealsEntertainment,
    /// Staff training.
    training => Training,
    /// Taxes and licenses.
    taxes_licenses => TaxesLicenses,
    /// Loan repayments.
    debt_service => DebtService,
    /// Postage.
    postage => Postage,
    /// Point-of-sale system subscription.
    pos_system => PosSystem,
    /// Donations and promotional giveaways.
    donations_promotional => DonationsPromotional,
    /// Store supplies.
    store_supplies => StoreSupplies,
    /// Office supplies.
    office_supplies => OfficeSupplies,
    /// Other software subscriptions.
    software => Software,
    /// Anything not covered above.
    other => Other,
}

impl FixedCostsConfiguration {
    /// Sum of every line item.
    #[must_use]
    pub fn total_monthly_fixed_costs(&self) -> Decimal {
        FixedCostLine::ALL
            .iter()
            .map(|line| self.amount(*line))
            .sum()
    }

    /// Returns a copy with the given lines replaced.
    ///
    /// Lines absent from `overrides` keep their prior value.
    #[must_use]
    pub fn with_overrides(&self, overrides: &BTreeMap<FixedCostLine, Decimal>) -> Self {
        let mut merged = self.clone();
        for (line, amount) in overrides {
            *merged.amount_mut(*line) = *amount;
        }
        merged
    }

    /// Returns a copy with every line rounded to cents.
    #[must_use]
    pub fn rounded(&self) -> Self {
        let mut rounded = self.clone();
        for line in FixedCostLine::ALL {
            let slot = rounded.amount_mut(*line);
            *slot = round_currency(*slot);
        }
        rounded
    }

    /// Iterates `(line, amount)` pairs in presentation order.
    pub fn lines(&self) -> impl Iterator<Item = (FixedCostLine, Decimal)> + '_ {
        FixedCostLine::ALL
            .iter()
            .map(move |line| (*line, self.amount(*line)))
    }

    /// Checks that every line lies in `[0, MAX_MONEY_AMOUNT]`.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::NegativeFixedCost` or
    /// `ForecastError::FixedCostAboveMaximum` for the first offending line.
    pub fn validate(&self) -> Result<(), ForecastError> {
        for (line, value) in self.lines() {
            if value < Decimal::ZERO {
                return Err(ForecastError::NegativeFixedCost { line, value });
            }
            if value > MAX_MONEY_AMOUNT {
                return Err(ForecastError::FixedCostAboveMaximum {
                    line,
                    value,
                    max: MAX_MONEY_AMOUNT,
                });
            }
        }
        Ok(())
    }
}

impl std::fmt::Display for FixedCostLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FixedCostLine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|line| line.as_str() == s)
            .ok_or_else(|| format!("Unknown fixed cost line: {s}"))
    }
}
