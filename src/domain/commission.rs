use super::money::{Amount, Money};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// How a single commission leg is charged.
///
/// Rules are expected to return a non-negative value for every positive
/// amount; the evaluator does not check this.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommissionRule {
    #[default]
    Free,
    Fixed {
        fee: i64,
    },
    /// `max(floor(amount * rate), minimum)`.
    Percent {
        rate: Decimal,
        #[serde(default)]
        minimum: i64,
    },
    /// Arbitrary policy supplied in code.
    #[serde(skip)]
    Custom(fn(i64) -> i64),
}

impl CommissionRule {
    pub fn percent(rate: Decimal, minimum: i64) -> Self {
        Self::Percent { rate, minimum }
    }

    pub fn evaluate(&self, amount: Amount) -> Money {
        let value = amount.value();
        let commission = match *self {
            Self::Free => 0,
            Self::Fixed { fee } => fee,
            Self::Percent { rate, minimum } => Decimal::from(value)
                .checked_mul(rate)
                .and_then(|fee| fee.floor().to_i64())
                .unwrap_or(i64::MAX)
                .max(minimum),
            Self::Custom(f) => f(value),
        };
        Money::new(commission)
    }
}

/// The bank's tariff: one rule per commission leg.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct Commissions {
    /// Charged when the source card belongs to the bank.
    pub from_inner: CommissionRule,
    /// Charged when the destination card belongs to the bank.
    pub to_inner: CommissionRule,
    /// Charged when neither card belongs to the bank.
    pub from_outer_to_outer: CommissionRule,
}

impl Commissions {
    /// A tariff that charges nothing on any leg.
    pub fn free() -> Self {
        Self {
            from_inner: CommissionRule::Free,
            to_inner: CommissionRule::Free,
            from_outer_to_outer: CommissionRule::Free,
        }
    }
}

impl Default for Commissions {
    fn default() -> Self {
        Self {
            from_inner: CommissionRule::percent(dec!(0.005), 10_00),
            to_inner: CommissionRule::Free,
            from_outer_to_outer: CommissionRule::percent(dec!(0.015), 30_00),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amount(value: i64) -> Amount {
        Amount::new(value).unwrap()
    }

    #[test]
    fn test_percent_floor_dominates_small_amounts() {
        let rule = CommissionRule::percent(dec!(0.005), 10_00);
        assert_eq!(rule.evaluate(amount(500_00)), Money::new(10_00));
    }

    #[test]
    fn test_percent_rate_dominates_large_amounts() {
        let rule = CommissionRule::percent(dec!(0.005), 10_00);
        assert_eq!(rule.evaluate(amount(1_000_000_00)), Money::new(500_000));
    }

    #[test]
    fn test_percent_rounds_down() {
        let rule = CommissionRule::percent(dec!(0.015), 0);
        // 1.5% of 333 = 4.995
        assert_eq!(rule.evaluate(amount(333)), Money::new(4));
    }

    #[test]
    fn test_percent_saturates_on_overflow() {
        let rule = CommissionRule::percent(dec!(10), 0);
        assert_eq!(rule.evaluate(amount(i64::MAX)), Money::new(i64::MAX));
    }

    #[test]
    fn test_fixed_free_and_custom() {
        assert_eq!(CommissionRule::Free.evaluate(amount(100)), Money::ZERO);
        assert_eq!(
            CommissionRule::Fixed { fee: 42 }.evaluate(amount(100)),
            Money::new(42)
        );
        assert_eq!(
            CommissionRule::Custom(|v| v / 10).evaluate(amount(100)),
            Money::new(10)
        );
    }

    #[test]
    fn test_commissions_from_json() {
        let json = r#"{
            "from_inner": { "kind": "percent", "rate": "0.01", "minimum": 500 },
            "from_outer_to_outer": { "kind": "fixed", "fee": 3000 }
        }"#;
        let commissions: Commissions = serde_json::from_str(json).unwrap();

        assert_eq!(commissions.from_inner.evaluate(amount(100_00)), Money::new(500));
        assert_eq!(commissions.to_inner.evaluate(amount(100_00)), Money::ZERO);
        assert_eq!(
            commissions.from_outer_to_outer.evaluate(amount(100_00)),
            Money::new(3000)
        );
    }

    #[test]
    fn test_custom_rule_is_not_serializable() {
        let rule = CommissionRule::Custom(|v| v);
        assert!(serde_json::to_string(&rule).is_err());
    }
}
