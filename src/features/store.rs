use super::account::{Account, AccountNumber};

/// Keeps every open account for the lifetime of one teller session.
/// Insertion order is preserved and is the display order.
#[derive(Debug, Default)]
pub struct Store {
    accounts: Vec<Account>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new account. Account numbers are not checked for
    /// uniqueness; a duplicate is simply shadowed by the earlier entry.
    pub fn append(&mut self, account: Account) {
        self.accounts.push(account);
    }

    /// Linear scan in insertion order; returns the first match.
    /// The reference aliases the stored record, so mutations through it
    /// are visible to subsequent lookups.
    pub fn find_by_number(&mut self, number: AccountNumber) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|a| a.number() == number)
    }

    /// Removes the first account with the given number, reporting whether
    /// one was found. Remaining accounts keep their relative order.
    pub fn remove_by_number(&mut self, number: AccountNumber) -> bool {
        match self.accounts.iter().position(|a| a.number() == number) {
            Some(index) => {
                self.accounts.remove(index);
                true
            }
            None => false,
        }
    }

    /// All accounts in insertion order, for display.
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
