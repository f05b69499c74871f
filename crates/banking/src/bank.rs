use banca_core::{AccountId, BankId, DomainError, DomainResult, Entity};

use crate::account::Account;
use crate::money::Money;

/// A named, ordered collection of accounts.
///
/// Every stored account back-references this bank by [`BankId`]; registration
/// through [`Bank::add_account`] is the only way in.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    id: BankId,
    name: String,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: BankId::new(),
            name: name.into(),
            accounts: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Accounts in registration order.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: AccountId) -> Option<&Account> {
        self.accounts.iter().find(|a| *a.id() == id)
    }

    pub fn account_mut(&mut self, id: AccountId) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| *a.id() == id)
    }

    /// First registered account owned by `owner`.
    pub fn find_by_owner(&self, owner: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.owner() == owner)
    }

    pub fn accounts_of<'a>(&'a self, owner: &'a str) -> impl Iterator<Item = &'a Account> + 'a {
        self.accounts.iter().filter(move |a| a.owner() == owner)
    }

    /// Whether `account` back-references this bank.
    pub fn holds(&self, account: &Account) -> bool {
        account.bank() == Some(self.id)
    }

    /// Sum of all registered balances.
    pub fn total_deposits(&self) -> DomainResult<Money> {
        self.accounts
            .iter()
            .try_fold(Money::ZERO, |total, a| total.checked_add(a.balance()))
    }

    /// Register `account`, linking it back to this bank, and return its id.
    ///
    /// No duplicate check: registering a clone of an already registered account
    /// adds a second entry. That entry gets a fresh id, so every returned id
    /// addresses exactly one entry.
    pub fn add_account(&mut self, mut account: Account) -> AccountId {
        if self.position(account.id_typed()).is_ok() {
            account.reassign_id();
        }
        account.attach_to(self.id);
        let id = account.id_typed();
        tracing::debug!(bank_id = %self.id, account_id = %id, owner = account.owner(), "account registered");
        self.accounts.push(account);
        id
    }

    /// Move `amount` from `source` to `destination`: debit, then credit.
    ///
    /// A failed debit (e.g. [`DomainError::InsufficientFunds`]) is returned as
    /// is and neither account changes.
    pub fn transfer(
        &self,
        source: &mut Account,
        destination: &mut Account,
        amount: Money,
    ) -> DomainResult<()> {
        let before = source.balance();
        source.debit(amount)?;
        if let Err(err) = destination.credit(amount) {
            source.restore_balance(before);
            return Err(err);
        }

        tracing::debug!(
            bank_id = %self.id,
            from = %source.id_typed(),
            to = %destination.id_typed(),
            %amount,
            "transfer completed"
        );
        Ok(())
    }

    /// Transfer between two registered accounts, addressed by id.
    ///
    /// Unknown ids fail with [`DomainError::NotFound`] before anything moves.
    /// `from == to` debits and re-credits the same account.
    pub fn transfer_between(
        &mut self,
        from: AccountId,
        to: AccountId,
        amount: Money,
    ) -> DomainResult<()> {
        let source = self.position(from)?;
        let destination = self.position(to)?;

        let before = self.accounts[source].balance();
        self.accounts[source].debit(amount)?;
        if let Err(err) = self.accounts[destination].credit(amount) {
            self.accounts[source].restore_balance(before);
            return Err(err);
        }

        tracing::debug!(bank_id = %self.id, %from, %to, %amount, "transfer completed");
        Ok(())
    }

    fn position(&self, id: AccountId) -> DomainResult<usize> {
        self.accounts
            .iter()
            .position(|a| *a.id() == id)
            .ok_or_else(DomainError::not_found)
    }
}

impl Entity for Bank {
    type Id = BankId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
