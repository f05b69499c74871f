use banca_core::{AccountId, BankId, DomainError, DomainResult, Entity};

use crate::money::Money;

/// An account holder's balance.
///
/// The balance only moves through [`Account::debit`] and [`Account::credit`],
/// and a debit never takes it below zero.
///
/// Equality is by value: two accounts are equal when owner and balance match,
/// regardless of their ids or the bank they are registered with.
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,
    owner: String,
    balance: Money,
    bank: Option<BankId>,
}

impl Account {
    pub fn new(owner: impl Into<String>, initial_balance: Money) -> Self {
        Self {
            id: AccountId::new(),
            owner: owner.into(),
            balance: initial_balance,
            bank: None,
        }
    }

    pub fn id_typed(&self) -> AccountId {
        self.id
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = owner.into();
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Bank this account is registered with, if any.
    pub fn bank(&self) -> Option<BankId> {
        self.bank
    }

    /// Withdraw `amount`.
    ///
    /// Fails with [`DomainError::InsufficientFunds`] when `amount` exceeds the
    /// balance; debiting the exact balance leaves zero.
    pub fn debit(&mut self, amount: Money) -> DomainResult<()> {
        let amount = amount.ensure_positive()?;

        if amount > self.balance {
            tracing::warn!(
                account_id = %self.id,
                %amount,
                balance = %self.balance,
                "debit rejected: insufficient funds"
            );
            return Err(DomainError::InsufficientFunds);
        }

        self.balance = self.balance.checked_sub(amount)?;
        tracing::debug!(account_id = %self.id, %amount, balance = %self.balance, "account debited");
        Ok(())
    }

    /// Deposit `amount`. Zero and negative amounts are rejected.
    pub fn credit(&mut self, amount: Money) -> DomainResult<()> {
        let amount = amount.ensure_positive()?;

        self.balance = self.balance.checked_add(amount)?;
        tracing::debug!(account_id = %self.id, %amount, balance = %self.balance, "account credited");
        Ok(())
    }

    pub(crate) fn attach_to(&mut self, bank: BankId) {
        self.bank = Some(bank);
    }

    /// Give a cloned account its own identity.
    pub(crate) fn reassign_id(&mut self) {
        self.id = AccountId::new();
    }

    /// Undo a debit whose paired credit failed.
    pub(crate) fn restore_balance(&mut self, balance: Money) {
        self.balance = balance;
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.owner == other.owner && self.balance == other.balance
    }
}

impl Eq for Account {}

impl Entity for Account {
    type Id = AccountId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};
    use rust_decimal::Decimal;

    fn money(s: &str) -> Money {
        Money::parse(s).unwrap()
    }

    #[fixture]
    fn renzo() -> Account {
        Account::new("Renzo", money("1000.2354"))
    }

    #[rstest]
    fn new_account_exposes_owner_and_balance(renzo: Account) {
        assert_eq!(renzo.owner(), "Renzo");
        assert_eq!(renzo.balance(), money("1000.2354"));
        assert!(renzo.balance().is_positive());
        assert_eq!(renzo.bank(), None);
    }

    #[rstest]
    fn debit_subtracts_exactly(mut renzo: Account) {
        renzo.debit(Money::from_units(100)).unwrap();
        assert_eq!(renzo.balance().amount().trunc(), Decimal::from(900));
        assert_eq!(renzo.balance().to_string(), "900.2354");
    }

    #[rstest]
    fn credit_adds_exactly(mut renzo: Account) {
        renzo.credit(Money::from_units(100)).unwrap();
        assert_eq!(renzo.balance().amount().trunc(), Decimal::from(1100));
        assert_eq!(renzo.balance().to_string(), "1100.2354");
    }

    #[rstest]
    fn overdraft_is_rejected_without_mutation(mut renzo: Account) {
        let err = renzo.debit(Money::from_units(1500)).unwrap_err();
        assert_eq!(err, DomainError::InsufficientFunds);
        assert_eq!(err.to_string(), "Insufficient funds");
        assert_eq!(renzo.balance().to_string(), "1000.2354");
    }

    #[rstest]
    #[case("100")]
    #[case("200")]
    #[case("300")]
    #[case("500")]
    #[case("700")]
    #[case("1000.2353")]
    fn debit_within_balance_leaves_it_positive(mut renzo: Account, #[case] amount: &str) {
        renzo.debit(money(amount)).unwrap();
        assert!(renzo.balance().is_positive());
        assert_eq!(
            renzo.balance(),
            money("1000.2354").checked_sub(money(amount)).unwrap()
        );
    }

    #[rstest]
    fn debit_of_whole_balance_zeroes_it(mut renzo: Account) {
        renzo.debit(money("1000.2354")).unwrap();
        assert!(renzo.balance().is_zero());
    }

    #[rstest]
    #[case("200", "100", "100")]
    #[case("250", "200", "50")]
    #[case("510", "500", "10")]
    #[case("750", "700", "50")]
    #[case("1000.2354", "1000.2354", "0")]
    fn debit_table(#[case] opening: &str, #[case] amount: &str, #[case] expected: &str) {
        let mut account = Account::new("Joel", money(opening));
        account.debit(money(amount)).unwrap();
        assert_eq!(account.balance(), money(expected));
    }

    #[rstest]
    #[case("0")]
    #[case("-1")]
    #[case("-0.0001")]
    fn non_positive_amounts_are_rejected(mut renzo: Account, #[case] amount: &str) {
        assert!(matches!(renzo.debit(money(amount)), Err(DomainError::Validation(_))));
        assert!(matches!(renzo.credit(money(amount)), Err(DomainError::Validation(_))));
        assert_eq!(renzo.balance(), money("1000.2354"));
    }

    #[test]
    fn accounts_compare_by_owner_and_balance() {
        let a = Account::new("Pepito Rojas", money("8900.9997"));
        let b = Account::new("Pepito Rojas", money("8900.9997"));
        assert_ne!(a.id_typed(), b.id_typed());
        assert_eq!(a, b);

        assert_ne!(a, Account::new("Pepito", money("8900.9997")));
        assert_ne!(a, Account::new("Pepito Rojas", money("8900.9996")));
    }

    #[test]
    fn owner_can_be_renamed() {
        let mut account = Account::new("Luca", money("10"));
        account.set_owner("Lucas");
        assert_eq!(account.owner(), "Lucas");
    }

    fn amount_strategy() -> impl Strategy<Value = Money> {
        (1i64..10_000_000_000i64).prop_map(|n| Money::new(Decimal::new(n, 4)))
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a debit within the balance subtracts exactly.
        #[test]
        fn debit_within_balance_subtracts(balance in amount_strategy(), m in amount_strategy()) {
            prop_assume!(m <= balance);
            let mut account = Account::new("Prop", balance);
            account.debit(m).unwrap();
            prop_assert_eq!(account.balance(), balance.checked_sub(m).unwrap());
        }

        /// Property: a debit above the balance fails and mutates nothing.
        #[test]
        fn debit_above_balance_is_rejected(balance in amount_strategy(), m in amount_strategy()) {
            prop_assume!(m > balance);
            let mut account = Account::new("Prop", balance);
            prop_assert_eq!(account.debit(m), Err(DomainError::InsufficientFunds));
            prop_assert_eq!(account.balance(), balance);
        }

        /// Property: a positive credit adds exactly.
        #[test]
        fn credit_adds(balance in amount_strategy(), m in amount_strategy()) {
            let mut account = Account::new("Prop", balance);
            account.credit(m).unwrap();
            prop_assert_eq!(account.balance(), balance.checked_add(m).unwrap());
        }
    }
}
