//! Transaction ledger
//!
//! Balance plus the append-only transaction history. Outgoing transfers are
//! created here; incoming ones are supplied by the sync collaborator through
//! `record_incoming`. All mutation happens on the command path while the
//! manager holds the wallet slot, so the ledger itself is single-threaded.

use chrono::Utc;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{WalletError, WalletResult};
use crate::network::NOMINAL_FEE;

/// One entry in the wallet history. Negative amounts are outgoing.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    pub id: String,
    pub hash: String,
    pub amount: i64,
    pub fee: u64,
    pub height: u64,
    pub timestamp: u64,
    pub confirmations: u32,
    pub is_confirmed: bool,
    pub is_pending: bool,
    pub payment_id: Option<String>,
    pub destination_addresses: Vec<String>,
    pub source_addresses: Vec<String>,
    pub unlock_time: Option<u64>,
}

#[derive(Debug, Default)]
pub struct TransactionLedger {
    balance: u64,
    unlocked_balance: u64,
    total_received: u64,
    total_sent: u64,
    records: Vec<TransactionRecord>,
}

impl TransactionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance(&self) -> u64 {
        self.balance
    }

    pub fn unlocked_balance(&self) -> u64 {
        self.unlocked_balance
    }

    pub fn total_received(&self) -> u64 {
        self.total_received
    }

    pub fn total_sent(&self) -> u64 {
        self.total_sent
    }

    pub fn transaction_count(&self) -> u32 {
        self.records.len() as u32
    }

    /// Send `amount` atomic units to `address`.
    ///
    /// On success the balance and unlocked balance both drop by exactly
    /// `amount` and one pending outgoing record is appended. On failure the
    /// ledger is untouched.
    pub fn send_transaction(
        &mut self,
        own_address: &str,
        address: &str,
        amount: u64,
        payment_id: Option<String>,
        _mixin: u64,
    ) -> WalletResult<String> {
        self.debit(amount)?;
        self.total_sent += amount;

        let record = TransactionRecord {
            id: Uuid::new_v4().to_string(),
            hash: new_tx_hash(),
            amount: -(amount as i64),
            fee: NOMINAL_FEE,
            height: 0,
            timestamp: Utc::now().timestamp() as u64,
            confirmations: 0,
            is_confirmed: false,
            is_pending: true,
            payment_id,
            destination_addresses: vec![address.to_string()],
            source_addresses: vec![own_address.to_string()],
            unlock_time: None,
        };
        let hash = record.hash.clone();
        log::info!("Transaction sent: {} ({} atomic units)", hash, amount);
        self.records.push(record);
        Ok(hash)
    }

    /// Ingest an externally supplied incoming transfer (sync collaborator).
    pub fn record_incoming(&mut self, own_address: &str, amount: u64, height: u64) -> String {
        self.credit(amount);
        self.total_received += amount;

        let record = TransactionRecord {
            id: Uuid::new_v4().to_string(),
            hash: new_tx_hash(),
            amount: amount as i64,
            fee: 0,
            height,
            timestamp: Utc::now().timestamp() as u64,
            confirmations: 1,
            is_confirmed: true,
            is_pending: false,
            payment_id: None,
            destination_addresses: vec![own_address.to_string()],
            source_addresses: Vec::new(),
            unlock_time: None,
        };
        let hash = record.hash.clone();
        self.records.push(record);
        hash
    }

    /// Append an already-built record (deposit creation/withdrawal plumbing)
    pub fn append(&mut self, record: TransactionRecord) {
        self.records.push(record);
    }

    /// Page through history, most recent first. Ordering is stable: records
    /// are returned in reverse insertion order.
    pub fn get_transactions(&self, limit: u64, offset: u64) -> Vec<&TransactionRecord> {
        self.records
            .iter()
            .rev()
            .skip(offset as usize)
            .take(limit as usize)
            .collect()
    }

    pub fn get_by_hash(&self, hash: &str) -> Option<&TransactionRecord> {
        self.records.iter().find(|r| r.hash == hash)
    }

    pub fn get_by_id(&self, id: &str) -> Option<&TransactionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Fee is fixed in this core; real estimation is delegated to the
    /// external transaction-construction library.
    pub fn estimate_fee(&self, _address: &str, _amount: u64, _mixin: u64) -> u64 {
        NOMINAL_FEE
    }

    /// Remove `amount` from the balance, keeping `unlocked <= balance`.
    pub fn debit(&mut self, amount: u64) -> WalletResult<()> {
        if amount > self.balance {
            return Err(WalletError::InsufficientFunds {
                available: self.balance,
                required: amount,
            });
        }
        self.balance -= amount;
        self.unlocked_balance = self.unlocked_balance.saturating_sub(amount);
        Ok(())
    }

    /// Add `amount` to both balance and unlocked balance.
    pub fn credit(&mut self, amount: u64) {
        self.balance = self.balance.saturating_add(amount);
        self.unlocked_balance = self.unlocked_balance.saturating_add(amount);
    }
}

/// Provisional transaction hash: 64 hex chars, unique per call.
pub fn new_tx_hash() -> String {
    hex::encode(Sha256::digest(Uuid::new_v4().as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "fire_self";
    const DEST: &str = "fire_dest";

    fn funded(amount: u64) -> TransactionLedger {
        let mut ledger = TransactionLedger::new();
        ledger.record_incoming(ADDR, amount, 100);
        ledger
    }

    #[test]
    fn send_reduces_balances_and_appends_pending_record() {
        let mut ledger = funded(5_000);
        let hash = ledger
            .send_transaction(ADDR, DEST, 2_000, Some("p1".into()), 3)
            .unwrap();

        assert_eq!(ledger.balance(), 3_000);
        assert_eq!(ledger.unlocked_balance(), 3_000);
        assert_eq!(ledger.transaction_count(), 2);

        let record = ledger.get_by_hash(&hash).unwrap();
        assert_eq!(record.amount, -2_000);
        assert!(record.is_pending);
        assert!(!record.is_confirmed);
        assert_eq!(record.confirmations, 0);
        assert_eq!(record.destination_addresses, vec![DEST.to_string()]);
    }

    #[test]
    fn overspend_leaves_ledger_unchanged() {
        let mut ledger = funded(1_000);
        let err = ledger
            .send_transaction(ADDR, DEST, 1_001, None, 3)
            .unwrap_err();

        assert!(matches!(
            err,
            WalletError::InsufficientFunds {
                available: 1_000,
                required: 1_001
            }
        ));
        assert_eq!(ledger.balance(), 1_000);
        assert_eq!(ledger.unlocked_balance(), 1_000);
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn unlocked_balance_never_exceeds_balance() {
        let mut ledger = funded(10_000);
        ledger.send_transaction(ADDR, DEST, 4_000, None, 3).unwrap();
        ledger.credit(500);
        assert!(ledger.unlocked_balance() <= ledger.balance());
    }

    #[test]
    fn pagination_is_most_recent_first() {
        let mut ledger = funded(10_000);
        let h1 = ledger.send_transaction(ADDR, DEST, 1, None, 3).unwrap();
        let h2 = ledger.send_transaction(ADDR, DEST, 2, None, 3).unwrap();

        let page = ledger.get_transactions(2, 0);
        assert_eq!(page[0].hash, h2);
        assert_eq!(page[1].hash, h1);

        let rest = ledger.get_transactions(10, 2);
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn lookups_by_hash_and_id() {
        let mut ledger = funded(1_000);
        let hash = ledger.send_transaction(ADDR, DEST, 10, None, 3).unwrap();
        let id = ledger.get_by_hash(&hash).unwrap().id.clone();

        assert!(ledger.get_by_id(&id).is_some());
        assert!(ledger.get_by_hash("missing").is_none());
    }

    #[test]
    fn fee_is_fixed() {
        let ledger = TransactionLedger::new();
        assert_eq!(ledger.estimate_fee(DEST, 123, 3), NOMINAL_FEE);
    }
}
