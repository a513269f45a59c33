mod account;
mod store;

pub use self::{
    account::{Account, AccountError, AccountNumber, AccountResult},
    store::Store,
};
