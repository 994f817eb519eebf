//! Term deposit manager
//!
//! Deposits lock funds for a number of days in exchange for interest and
//! mature when the sync height reaches their unlock height. Maturity is
//! computed lazily on every read against the caller-supplied current height,
//! so no extra background thread is involved.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::error::{WalletError, WalletResult};
use crate::network::term_days_to_blocks;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepositStatus {
    Locked,
    Unlocked,
    Spent,
}

impl DepositStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DepositStatus::Locked => "locked",
            DepositStatus::Unlocked => "unlocked",
            DepositStatus::Spent => "spent",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Deposit {
    pub id: String,
    pub amount: u64,
    pub term_days: u32,
    pub rate: f64,
    pub interest: u64,
    pub unlock_height: u64,
    pub creating_tx_hash: String,
    pub creating_height: u64,
    pub creating_time: DateTime<Utc>,
    pub spending_tx_hash: Option<String>,
    pub spending_height: Option<u64>,
    pub spending_time: Option<DateTime<Utc>>,
    spent: bool,
}

impl Deposit {
    /// Status as of the given chain height. `locked -> unlocked` is purely a
    /// function of height; `spent` is terminal.
    pub fn status_at(&self, current_height: u64) -> DepositStatus {
        if self.spent {
            DepositStatus::Spent
        } else if current_height >= self.unlock_height {
            DepositStatus::Unlocked
        } else {
            DepositStatus::Locked
        }
    }
}

/// Annualized interest rate for a deposit term.
pub fn rate_for_term(term_days: u32) -> f64 {
    match term_days {
        0..=30 => 0.05,
        31..=90 => 0.08,
        91..=180 => 0.12,
        _ => 0.15,
    }
}

/// Interest in atomic units, truncated: `amount * rate * term / 365`.
pub fn interest_for(amount: u64, term_days: u32) -> u64 {
    let rate = rate_for_term(term_days);
    (amount as f64 * rate * term_days as f64 / 365.0) as u64
}

#[derive(Debug, Default)]
pub struct DepositManager {
    deposits: Vec<Deposit>,
}

impl DepositManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a deposit locked until `current_height + term_days` worth of
    /// blocks. The funds debit and the creating transaction record are the
    /// manager's responsibility; this registers the deposit itself.
    pub fn create(
        &mut self,
        amount: u64,
        term_days: u32,
        current_height: u64,
        creating_tx_hash: String,
    ) -> &Deposit {
        let deposit = Deposit {
            id: Uuid::new_v4().to_string(),
            amount,
            term_days,
            rate: rate_for_term(term_days),
            interest: interest_for(amount, term_days),
            unlock_height: current_height + term_days_to_blocks(term_days),
            creating_tx_hash,
            creating_height: current_height,
            creating_time: Utc::now(),
            spending_tx_hash: None,
            spending_height: None,
            spending_time: None,
            spent: false,
        };
        log::info!(
            "Deposit created: {} ({} atomic units, {} days, unlocks at {})",
            deposit.id,
            deposit.amount,
            deposit.term_days,
            deposit.unlock_height
        );
        self.deposits.push(deposit);
        self.deposits.last().expect("just pushed")
    }

    /// Withdraw a matured deposit. Only valid from `unlocked`; a spent
    /// deposit stays spent, so a second withdrawal fails.
    pub fn withdraw(
        &mut self,
        deposit_id: &str,
        current_height: u64,
        spending_tx_hash: String,
    ) -> WalletResult<&Deposit> {
        let deposit = self
            .deposits
            .iter_mut()
            .find(|d| d.id == deposit_id)
            .ok_or_else(|| WalletError::NotFound(format!("deposit {deposit_id}")))?;

        if deposit.status_at(current_height) != DepositStatus::Unlocked {
            return Err(WalletError::NotUnlocked(deposit_id.to_string()));
        }

        deposit.spent = true;
        deposit.spending_tx_hash = Some(spending_tx_hash);
        deposit.spending_height = Some(current_height);
        deposit.spending_time = Some(Utc::now());
        log::info!("Deposit withdrawn: {}", deposit_id);
        Ok(deposit)
    }

    pub fn get(&self, deposit_id: &str) -> Option<&Deposit> {
        self.deposits.iter().find(|d| d.id == deposit_id)
    }

    pub fn list(&self) -> &[Deposit] {
        &self.deposits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const XFG_100: u64 = 1_000_000_000;

    #[test]
    fn rate_tiers() {
        assert_eq!(rate_for_term(1), 0.05);
        assert_eq!(rate_for_term(30), 0.05);
        assert_eq!(rate_for_term(31), 0.08);
        assert_eq!(rate_for_term(90), 0.08);
        assert_eq!(rate_for_term(91), 0.12);
        assert_eq!(rate_for_term(180), 0.12);
        assert_eq!(rate_for_term(181), 0.15);
        assert_eq!(rate_for_term(200), 0.15);
    }

    #[test]
    fn interest_truncates_to_atomic_units() {
        // 100 XFG at 5% for 30 days: 1e9 * 0.05 * 30 / 365
        assert_eq!(interest_for(XFG_100, 30), 4_109_589);
        // 100 XFG at 15% for 200 days
        assert_eq!(interest_for(XFG_100, 200), 82_191_780);
    }

    #[test]
    fn unlock_height_uses_blocks_per_day() {
        let mut manager = DepositManager::new();
        let deposit = manager.create(XFG_100, 30, 1_000, "hash".into());
        assert_eq!(deposit.unlock_height, 1_000 + 30 * 180);
        assert_eq!(deposit.status_at(1_000), DepositStatus::Locked);
    }

    #[test]
    fn withdraw_before_maturity_fails() {
        let mut manager = DepositManager::new();
        let id = manager.create(XFG_100, 30, 0, "hash".into()).id.clone();

        let err = manager.withdraw(&id, 100, "spend".into()).unwrap_err();
        assert!(matches!(err, WalletError::NotUnlocked(_)));
        assert_eq!(manager.get(&id).unwrap().status_at(100), DepositStatus::Locked);
    }

    #[test]
    fn withdraw_succeeds_exactly_once_after_maturity() {
        let mut manager = DepositManager::new();
        let id = manager.create(XFG_100, 30, 0, "hash".into()).id.clone();
        let unlock = manager.get(&id).unwrap().unlock_height;

        assert_eq!(manager.get(&id).unwrap().status_at(unlock), DepositStatus::Unlocked);

        let deposit = manager.withdraw(&id, unlock, "spend".into()).unwrap();
        assert_eq!(deposit.spending_height, Some(unlock));
        assert_eq!(manager.get(&id).unwrap().status_at(unlock), DepositStatus::Spent);

        let err = manager.withdraw(&id, unlock + 1, "again".into()).unwrap_err();
        assert!(matches!(err, WalletError::NotUnlocked(_)));
    }

    #[test]
    fn withdraw_unknown_deposit_fails() {
        let mut manager = DepositManager::new();
        assert!(matches!(
            manager.withdraw("nope", 0, "spend".into()),
            Err(WalletError::NotFound(_))
        ));
    }
}
