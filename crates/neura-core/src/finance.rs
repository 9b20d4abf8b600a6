//! Finance ledger entries, totals and the savings-goal planner.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinanceKind {
    #[serde(alias = "entrada")]
    Income,
    #[serde(alias = "saida")]
    Expense,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceEntry {
    #[serde(rename = "type")]
    pub kind: FinanceKind,
    pub description: String,
    pub value: f64,
    pub date: DateTime<Utc>,
}

impl FinanceEntry {
    /// `None` for a blank description or a non-positive value.
    pub fn new(
        kind: FinanceKind,
        description: &str,
        value: f64,
        date: DateTime<Utc>,
    ) -> Option<Self> {
        let description = description.trim();
        if description.is_empty() || !value.is_finite() || value <= 0.0 {
            return None;
        }
        Some(Self {
            kind,
            description: description.to_string(),
            value,
            date,
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FinanceSummary {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl FinanceSummary {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FinanceEntry>) -> Self {
        let (income, expense) =
            entries
                .into_iter()
                .fold((0.0, 0.0), |(inc, exp), e| match e.kind {
                    FinanceKind::Income => (inc + e.value, exp),
                    FinanceKind::Expense => (inc, exp + e.value),
                });
        Self {
            income,
            expense,
            balance: income - expense,
        }
    }
}

/// Result of planning a savings target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FinanceGoal {
    PerMonth {
        target: f64,
        deadline: NaiveDate,
        months: i32,
        per_month: f64,
    },
    /// Deadline is not in the future.
    NeedsFutureDeadline,
}

impl FinanceGoal {
    pub fn message(&self) -> String {
        match self {
            FinanceGoal::PerMonth {
                target,
                deadline,
                per_month,
                ..
            } => format!(
                "To reach {} by {}, you need to bring in {} per month on average.",
                format_currency(*target),
                deadline.format("%d/%m/%Y"),
                format_currency(*per_month)
            ),
            FinanceGoal::NeedsFutureDeadline => {
                "Set a future deadline to calculate the financial plan.".to_string()
            }
        }
    }
}

/// Whole months to the deadline, counting the current partial month.
pub fn months_until(today: NaiveDate, deadline: NaiveDate) -> i32 {
    (deadline.year() - today.year()) * 12 + (deadline.month() as i32 - today.month() as i32) + 1
}

/// Plan a monthly amount. `None` when the target is not a positive number.
pub fn plan_finance_goal(
    target: f64,
    deadline: NaiveDate,
    today: NaiveDate,
) -> Option<FinanceGoal> {
    if !target.is_finite() || target <= 0.0 {
        return None;
    }
    let months = months_until(today, deadline);
    if months <= 0 {
        return Some(FinanceGoal::NeedsFutureDeadline);
    }
    Some(FinanceGoal::PerMonth {
        target,
        deadline,
        months,
        per_month: target / months as f64,
    })
}

/// Brazilian real, pt-BR grouping: `R$ 1.234,56`.
pub fn format_currency(value: f64) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn three_months_ahead_counts_four() {
        let goal = plan_finance_goal(1200.0, date(2024, 4, 15), date(2024, 1, 15)).unwrap();
        match goal {
            FinanceGoal::PerMonth {
                months, per_month, ..
            } => {
                assert_eq!(months, 4);
                assert_eq!(per_month, 300.0);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn same_month_counts_one() {
        assert_eq!(months_until(date(2024, 1, 15), date(2024, 1, 2)), 1);
    }

    #[test]
    fn past_deadline_needs_guidance() {
        let goal = plan_finance_goal(500.0, date(2023, 12, 31), date(2024, 1, 15)).unwrap();
        assert_eq!(goal, FinanceGoal::NeedsFutureDeadline);
        assert!(goal.message().contains("future deadline"));
    }

    #[test]
    fn crosses_year_boundary() {
        assert_eq!(months_until(date(2024, 11, 1), date(2025, 2, 1)), 4);
    }

    #[test]
    fn zero_target_is_ignored() {
        assert!(plan_finance_goal(0.0, date(2025, 1, 1), date(2024, 1, 1)).is_none());
        assert!(plan_finance_goal(f64::NAN, date(2025, 1, 1), date(2024, 1, 1)).is_none());
    }

    #[test]
    fn summary_balances_income_and_expense() {
        let now = Utc::now();
        let entries = vec![
            FinanceEntry::new(FinanceKind::Income, "Freela", 1500.0, now).unwrap(),
            FinanceEntry::new(FinanceKind::Expense, "Rent", 900.0, now).unwrap(),
            FinanceEntry::new(FinanceKind::Expense, "Food", 250.5, now).unwrap(),
        ];
        let s = FinanceSummary::from_entries(&entries);
        assert_eq!(s.income, 1500.0);
        assert_eq!(s.expense, 1150.5);
        assert_eq!(s.balance, 349.5);
    }

    #[test]
    fn entry_validation() {
        let now = Utc::now();
        assert!(FinanceEntry::new(FinanceKind::Income, "", 10.0, now).is_none());
        assert!(FinanceEntry::new(FinanceKind::Income, "x", 0.0, now).is_none());
        assert!(FinanceEntry::new(FinanceKind::Income, "x", -3.0, now).is_none());
    }

    #[test]
    fn legacy_kind_names_parse() {
        let k: FinanceKind = serde_json::from_str(r#""entrada""#).unwrap();
        assert_eq!(k, FinanceKind::Income);
        let k: FinanceKind = serde_json::from_str(r#""saida""#).unwrap();
        assert_eq!(k, FinanceKind::Expense);
    }

    #[test]
    fn currency_format() {
        assert_eq!(format_currency(0.0), "R$ 0,00");
        assert_eq!(format_currency(300.0), "R$ 300,00");
        assert_eq!(format_currency(1234.5), "R$ 1.234,50");
        assert_eq!(format_currency(1234567.891), "R$ 1.234.567,89");
        assert_eq!(format_currency(-50.0), "-R$ 50,00");
    }
}
