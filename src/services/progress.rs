//! Balance-versus-goal arithmetic behind the dashboard and goal pages.
//!
//! Every input arrives as raw form text. Anything that does not parse as a
//! finite number becomes [`Amount::Fallback`], so these functions never fail.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::fmt;

/// A form-derived number, or the zero substituted when it could not be computed.
///
/// The two zeros render differently: a computed zero shows as `0.0`, a
/// fallback as `0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Amount {
    Value(f64),
    Fallback,
}

impl Default for Amount {
    fn default() -> Self {
        Amount::Value(0.0)
    }
}

impl Amount {
    pub fn value(self) -> f64 {
        match self {
            Amount::Value(value) => value,
            Amount::Fallback => 0.0,
        }
    }

    pub fn rounded(self) -> Amount {
        match self {
            Amount::Value(value) => Amount::Value(round2(value)),
            Amount::Fallback => Amount::Fallback,
        }
    }

    /// Progress of this balance towards `goal`; a fallback unless both
    /// parsed and the goal is positive.
    pub fn progress_towards(self, goal: Amount) -> Amount {
        match (self, goal) {
            (Amount::Value(balance), Amount::Value(goal)) if goal > 0.0 => {
                Amount::Value(progress(balance, goal))
            }
            _ => Amount::Fallback,
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Amount::Value(value) => f.write_str(&format_amount(*value)),
            Amount::Fallback => f.write_str("0"),
        }
    }
}

/// Parses a form amount. Absent means zero; unparsable or non-finite text
/// gives [`Amount::Fallback`].
pub fn parse_amount(raw: Option<&str>) -> Amount {
    let Some(raw) = raw else {
        return Amount::default();
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Amount::Value(value),
        _ => Amount::Fallback,
    }
}

/// Rounds to two decimals, half to even on the exact binary value.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    if value.abs() < 0.005 {
        return 0.0_f64.copysign(value);
    }

    match Decimal::from_f64_retain(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven)
            .to_f64()
            .unwrap_or(value),
        // Outside Decimal's range every f64 is already a whole number.
        None => value,
    }
}

/// Percentage of `goal` covered by `balance`, rounded to two decimals.
/// Zero when the goal is not positive.
pub fn progress(balance: f64, goal: f64) -> f64 {
    if goal > 0.0 {
        round2(balance / goal * 100.0)
    } else {
        0.0
    }
}

/// Renders a float the way the pages show it: shortest round-trip digits,
/// always a decimal part (`500.0`), and exponents outside `1e-4..1e16`
/// written as `1e+16` / `1.5e-05`.
pub fn format_amount(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        let text = if value > 0.0 { "inf" } else { "-inf" };
        return text.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    if (-4..16).contains(&exponent) {
        let point = exponent + 1;
        let body = if point <= 0 {
            format!("0.{}{}", "0".repeat((-point) as usize), digits)
        } else if point as usize >= digits.len() {
            format!("{}{}.0", digits, "0".repeat(point as usize - digits.len()))
        } else {
            let (whole, fraction) = digits.split_at(point as usize);
            format!("{}.{}", whole, fraction)
        };
        format!("{}{}", sign, body)
    } else {
        let exponent_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}{}e{}{:02}",
            sign,
            mantissa,
            exponent_sign,
            exponent.abs()
        )
    }
}

/// Raw dashboard form fields.
#[derive(Debug, Default, Deserialize)]
pub struct ProgressForm {
    pub balance: Option<String>,
    pub goal: Option<String>,
}

/// Raw goal results form fields.
#[derive(Debug, Default, Deserialize)]
pub struct GoalForm {
    pub balance: Option<String>,
    #[serde(rename = "retirementGoal")]
    pub retirement_goal: Option<String>,
    #[serde(rename = "homePurchaseGoal")]
    pub home_purchase_goal: Option<String>,
    #[serde(rename = "targetYear1")]
    pub target_year1: Option<String>,
    #[serde(rename = "targetYear2")]
    pub target_year2: Option<String>,
}

/// A balance measured against a single goal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ProgressQuery {
    pub balance: Amount,
    pub goal: Amount,
}

impl From<&ProgressForm> for ProgressQuery {
    fn from(form: &ProgressForm) -> Self {
        Self {
            balance: parse_amount(form.balance.as_deref()),
            goal: parse_amount(form.goal.as_deref()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardSummary {
    pub balance: Amount,
    pub progress: Amount,
}

impl DashboardSummary {
    pub fn from_query(query: ProgressQuery) -> Self {
        Self {
            balance: query.balance.rounded(),
            progress: query.balance.progress_towards(query.goal),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GoalResults {
    pub retirement_goal: Amount,
    pub home_purchase_goal: Amount,
    pub target_year1: String,
    pub target_year2: String,
    pub status1: Amount,
    pub status2: Amount,
}

impl GoalResults {
    pub fn compute(form: &GoalForm) -> Self {
        let balance = parse_amount(form.balance.as_deref());
        let retirement_goal = parse_amount(form.retirement_goal.as_deref());
        let home_purchase_goal = parse_amount(form.home_purchase_goal.as_deref());

        Self {
            retirement_goal: retirement_goal.rounded(),
            home_purchase_goal: home_purchase_goal.rounded(),
            target_year1: form.target_year1.clone().unwrap_or_default(),
            target_year2: form.target_year2.clone().unwrap_or_default(),
            status1: balance.progress_towards(retirement_goal),
            status2: balance.progress_towards(home_purchase_goal),
        }
    }
}
