//! Accumulated category totals produced by the aggregator.

use crate::model::{Amount, Category};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Totals for the four top-level categories of one monthly sheet. Every total starts at zero.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct MonthlyTotals {
    pub income: Amount,
    pub expense: Amount,
    pub saving: Amount,
    pub invest: Amount,
}

impl MonthlyTotals {
    /// Adds `amount` to the total for `category`.
    pub fn add(&mut self, category: Category, amount: Amount) {
        *self.total_mut(category) += amount;
    }

    pub fn get(&self, category: Category) -> Amount {
        match category {
            Category::Income => self.income,
            Category::Expense => self.expense,
            Category::Saving => self.saving,
            Category::Invest => self.invest,
        }
    }

    fn total_mut(&mut self, category: Category) -> &mut Amount {
        match category {
            Category::Income => &mut self.income,
            Category::Expense => &mut self.expense,
            Category::Saving => &mut self.saving,
            Category::Invest => &mut self.invest,
        }
    }
}

impl fmt::Display for MonthlyTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = Category::ALL
            .iter()
            .map(|&c| format!("{c} {}", self.get(c)))
            .collect();
        write!(f, "{}", parts.join(" / "))
    }
}

/// Totals keyed by detail label, for a single top-level category. Entries only exist for labels
/// that received at least one amount.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DetailTotals(BTreeMap<String, Amount>);

impl DetailTotals {
    /// Adds `amount` to the entry for `detail`, creating it at zero first if needed.
    pub fn add(&mut self, detail: impl Into<String>, amount: Amount) {
        *self.0.entry(detail.into()).or_default() += amount;
    }

    pub fn get(&self, detail: &str) -> Option<Amount> {
        self.0.get(detail).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
