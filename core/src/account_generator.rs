//! Synthetic accounts sized from a client's portfolio value.
//!
//! Nothing here is persisted. Each call draws a fresh set, so two
//! requests for the same client almost never agree.
//!
//! Sizing rules:
//!   - Account count comes from one of four portfolio bands.
//!   - Only the first min(count, 5) templates are used.
//!   - Each balance is its template share of the WHOLE portfolio,
//!     jittered by ±15%. Shares are not drawn from a shared pool.

use crate::{
    rng::GeneratorRng,
    transaction_generator::Transaction,
    types::round_cents,
};
use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AccountTemplate {
    pub account_type: &'static str,
    pub prefix:       &'static str,
    pub balance_share: f64,
}

/// Canonical account templates, in selection order.
pub const ACCOUNT_TEMPLATES: [AccountTemplate; 5] = [
    AccountTemplate { account_type: "Business Checking",  prefix: "CHK", balance_share: 0.15 },
    AccountTemplate { account_type: "Business Savings",   prefix: "SAV", balance_share: 0.25 },
    AccountTemplate { account_type: "Money Market",       prefix: "MM",  balance_share: 0.30 },
    AccountTemplate { account_type: "Investment Account", prefix: "INV", balance_share: 0.20 },
    AccountTemplate { account_type: "Credit Line",        prefix: "LOC", balance_share: 0.10 },
];

/// (minimum portfolio value, min accounts, max accounts), richest first.
const ACCOUNT_COUNT_BANDS: [(f64, i64, i64); 4] = [
    (100_000_000.0, 6, 13),
    ( 50_000_000.0, 4, 9),
    ( 10_000_000.0, 3, 6),
    (f64::NEG_INFINITY, 2, 4),
];

/// Total jitter width applied to a base balance (±half of this).
const BALANCE_JITTER: f64 = 0.3;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Low carries double weight.
const RISK_LEVEL_DRAW: [RiskLevel; 4] = [
    RiskLevel::Low,
    RiskLevel::Low,
    RiskLevel::Medium,
    RiskLevel::High,
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: String,
    pub number: String,
    pub balance: f64,
    pub available_balance: f64,
    pub monthly_volume: f64,
    pub monthly_inflows: f64,
    pub monthly_outflows: f64,
    pub inflow_count: u32,
    pub outflow_count: u32,
    pub last_transaction: NaiveDateTime,
    pub risk_level: RiskLevel,
    pub risk_score: u32,
    pub recent_transactions: Vec<Transaction>,
    pub risk_factors: Vec<String>,
}

/// Inclusive account-count band for a portfolio value.
pub fn account_count_range(portfolio_value: f64) -> (i64, i64) {
    ACCOUNT_COUNT_BANDS
        .iter()
        .find(|(floor, _, _)| portfolio_value >= *floor)
        .map(|&(_, lo, hi)| (lo, hi))
        // NaN compares false against every floor.
        .unwrap_or((2, 4))
}

/// Draw the accounts for one client.
pub fn generate_accounts(
    client_name: &str,
    portfolio_value: f64,
    now: NaiveDateTime,
    rng: &mut GeneratorRng,
) -> Vec<Account> {
    let (lo, hi) = account_count_range(portfolio_value);
    let count = rng.int_inclusive(lo, hi) as usize;

    ACCOUNT_TEMPLATES
        .iter()
        .take(count.min(ACCOUNT_TEMPLATES.len()))
        .enumerate()
        .map(|(i, template)| build_account(i + 1, template, client_name, portfolio_value, now, rng))
        .collect()
}

fn build_account(
    ordinal: usize,
    template: &AccountTemplate,
    client_name: &str,
    portfolio_value: f64,
    now: NaiveDateTime,
    rng: &mut GeneratorRng,
) -> Account {
    let base = portfolio_value * template.balance_share;
    let balance = (base + rng.uniform(-0.5, 0.5) * base * BALANCE_JITTER).max(0.0);

    let number = format!("{}{}", template.prefix, rng.int_inclusive(100_000, 999_999));
    let available_balance = balance * rng.uniform(0.8, 1.0);
    let monthly_volume = balance * rng.uniform(0.1, 0.4);
    let monthly_inflows = balance * rng.uniform(0.05, 0.2);
    let monthly_outflows = balance * rng.uniform(0.03, 0.15);
    let inflow_count = rng.int_inclusive(10, 40) as u32;
    let outflow_count = rng.int_inclusive(8, 33) as u32;
    let last_transaction = now - Duration::days(rng.int_inclusive(0, 7));
    let risk_level = *rng.pick(&RISK_LEVEL_DRAW);
    let risk_score = rng.int_inclusive(30, 70) as u32;

    Account {
        id: format!("acc_{ordinal}"),
        name: format!("{} - {client_name}", template.account_type),
        account_type: template.account_type.to_string(),
        number,
        balance: round_cents(balance),
        available_balance: round_cents(available_balance),
        monthly_volume: round_cents(monthly_volume),
        monthly_inflows: round_cents(monthly_inflows),
        monthly_outflows: round_cents(monthly_outflows),
        inflow_count,
        outflow_count,
        last_transaction,
        risk_level,
        risk_score,
        recent_transactions: Vec::new(),
        risk_factors: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 10)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn bands_switch_at_their_floors() {
        assert_eq!(account_count_range(100_000_000.0), (6, 13));
        assert_eq!(account_count_range(99_999_999.99), (4, 9));
        assert_eq!(account_count_range(50_000_000.0), (4, 9));
        assert_eq!(account_count_range(10_000_000.0), (3, 6));
        assert_eq!(account_count_range(9_999_999.0), (2, 4));
        assert_eq!(account_count_range(0.0), (2, 4));
        assert_eq!(account_count_range(-5.0), (2, 4));
        assert_eq!(account_count_range(f64::NAN), (2, 4));
    }

    #[test]
    fn large_books_always_get_all_five_templates() {
        let mut rng = GeneratorRng::from_seed(1);
        for _ in 0..50 {
            let accounts = generate_accounts("Big Co", 250_000_000.0, noon(), &mut rng);
            assert_eq!(accounts.len(), 5);
            let types: Vec<_> = accounts.iter().map(|a| a.account_type.as_str()).collect();
            assert_eq!(
                types,
                ["Business Checking", "Business Savings", "Money Market", "Investment Account", "Credit Line"]
            );
        }
    }

    #[test]
    fn small_books_take_a_prefix_of_the_templates() {
        let mut rng = GeneratorRng::from_seed(2);
        for _ in 0..50 {
            let accounts = generate_accounts("Small Co", 1_000_000.0, noon(), &mut rng);
            assert!((2..=4).contains(&accounts.len()));
            assert_eq!(accounts[0].account_type, "Business Checking");
            assert_eq!(accounts[1].account_type, "Business Savings");
        }
    }

    #[test]
    fn ids_names_and_numbers_follow_the_template() {
        let mut rng = GeneratorRng::from_seed(3);
        let accounts = generate_accounts("Johnson Manufacturing LLC", 28_650_000.0, noon(), &mut rng);
        for (i, (account, template)) in accounts.iter().zip(ACCOUNT_TEMPLATES.iter()).enumerate() {
            assert_eq!(account.id, format!("acc_{}", i + 1));
            assert_eq!(account.name, format!("{} - Johnson Manufacturing LLC", template.account_type));
            let digits = account.number.strip_prefix(template.prefix).unwrap();
            assert_eq!(digits.len(), 6);
            assert!(digits.parse::<u32>().unwrap() >= 100_000);
            assert!(account.recent_transactions.is_empty());
            assert!(account.risk_factors.is_empty());
        }
    }

    #[test]
    fn balance_stays_within_fifteen_percent_of_share() {
        let mut rng = GeneratorRng::from_seed(4);
        let p = 40_000_000.0;
        for _ in 0..100 {
            for (account, template) in generate_accounts("X", p, noon(), &mut rng)
                .iter()
                .zip(ACCOUNT_TEMPLATES.iter())
            {
                let base = p * template.balance_share;
                assert!(account.balance >= base * 0.85 - 0.01, "{} too low", account.balance);
                assert!(account.balance <= base * 1.15 + 0.01, "{} too high", account.balance);
                assert!(account.available_balance <= account.balance + 0.01);
                assert!(account.available_balance >= account.balance * 0.8 - 0.01);
            }
        }
    }

    #[test]
    fn negative_portfolio_clamps_to_zero() {
        let mut rng = GeneratorRng::from_seed(5);
        for account in generate_accounts("Debtor", -1_000_000.0, noon(), &mut rng) {
            assert_eq!(account.balance, 0.0);
            assert_eq!(account.available_balance, 0.0);
            assert_eq!(account.monthly_volume, 0.0);
        }
    }

    #[test]
    fn last_transaction_is_within_a_week() {
        let mut rng = GeneratorRng::from_seed(6);
        for _ in 0..50 {
            for account in generate_accounts("X", 5_000_000.0, noon(), &mut rng) {
                let age = noon() - account.last_transaction;
                assert!(age >= Duration::zero() && age <= Duration::days(7));
                assert!((30..=70).contains(&account.risk_score));
                assert!((10..=40).contains(&account.inflow_count));
                assert!((8..=33).contains(&account.outflow_count));
            }
        }
    }

    #[test]
    fn serializes_with_external_field_names() {
        let mut rng = GeneratorRng::from_seed(7);
        let accounts = generate_accounts("X", 5_000_000.0, noon(), &mut rng);
        let json = serde_json::to_value(&accounts[0]).unwrap();
        assert_eq!(json["type"], "Business Checking");
        assert!(json.get("availableBalance").is_some());
        assert!(json.get("lastTransaction").is_some());
        assert!(json["riskLevel"].is_string());
        assert_eq!(json["recentTransactions"], serde_json::json!([]));
    }
}
