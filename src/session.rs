use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use log::{debug, warn};
use rust_decimal::Decimal;

use crate::features::{Account, AccountError, AccountNumber, Store};

const MENU: &str = "\
==========  BANK MANAGEMENT SYSTEM  ==========
1. Create New Account
2. Display All Accounts
3. Deposit Money
4. Withdraw Money
5. Check Balance
6. Close Account
7. Update Account
8. Exit
==============================================";

/// Whether the menu loop keeps prompting after the current operation.
enum Flow {
    Continue,
    Quit,
}

/// One operator session: a menu loop over an input and output stream,
/// driving a single [`Store`] until the operator exits.
///
/// Generic over the streams so the whole loop runs against in-memory
/// buffers in tests.
pub struct Session<R, W> {
    input: R,
    output: W,
    store: Store,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            store: Store::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Runs the menu loop until the operator picks Exit or input runs out.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            writeln!(self.output, "\n{MENU}")?;
            let choice = prompt_parsed::<i32, _, _>(
                &mut self.input,
                &mut self.output,
                "Enter your choice: ",
                "menu choice",
            )?;
            let Some(choice) = choice else {
                break;
            };
            debug!("menu choice {choice}");

            let flow = match choice {
                1 => self.create_account()?,
                2 => {
                    self.display_all()?;
                    Flow::Continue
                }
                3 => self.deposit()?,
                4 => self.withdraw()?,
                5 => self.check_balance()?,
                6 => self.close_account()?,
                7 => self.update_account()?,
                8 => {
                    writeln!(self.output, "\nThank you for using the Bank System!")?;
                    Flow::Quit
                }
                _ => {
                    writeln!(self.output, "Invalid Choice! Try Again.")?;
                    Flow::Continue
                }
            };

            if let Flow::Quit = flow {
                break;
            }
        }
        Ok(())
    }

    fn create_account(&mut self) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt_number("\nEnter Account Number: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(holder) = prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter Account Holder Name: ",
        )?
        else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter Account Type (Saving/Current): ",
        )?
        else {
            return Ok(Flow::Quit);
        };
        let Some(balance) = self.prompt_amount("Enter Initial Deposit: ")? else {
            return Ok(Flow::Quit);
        };

        self.store
            .append(Account::new(number, holder, kind.trim(), balance));
        debug!("created account {number}");
        writeln!(self.output, "\nAccount Created Successfully!")?;
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> anyhow::Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "\nNo Accounts Found!")?;
            return Ok(());
        }
        writeln!(self.output, "\nAll Accounts:")?;
        for account in self.store.accounts() {
            writeln!(self.output, "{account}")?;
        }
        Ok(())
    }

    fn deposit(&mut self) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt_number("Enter Account Number: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(account) = self.store.find_by_number(number) else {
            return self.not_found(number);
        };
        let Some(amount) = prompt_parsed::<Decimal, _, _>(
            &mut self.input,
            &mut self.output,
            "Enter Amount to Deposit: ",
            "amount",
        )?
        else {
            return Ok(Flow::Quit);
        };

        account.deposit(amount);
        debug!("deposited {amount} into account {number}");
        writeln!(self.output, "Amount Deposited Successfully!")?;
        Ok(Flow::Continue)
    }

    fn withdraw(&mut self) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt_number("Enter Account Number: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(account) = self.store.find_by_number(number) else {
            return self.not_found(number);
        };
        let Some(amount) = prompt_parsed::<Decimal, _, _>(
            &mut self.input,
            &mut self.output,
            "Enter Amount to Withdraw: ",
            "amount",
        )?
        else {
            return Ok(Flow::Quit);
        };

        match account.withdraw(amount) {
            Ok(()) => {
                debug!("withdrew {amount} from account {number}");
                writeln!(self.output, "Withdrawal Successful!")?;
            }
            Err(e) => {
                warn!("{e}");
                writeln!(self.output, "Insufficient Balance!")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn check_balance(&mut self) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt_number("Enter Account Number: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(account) = self.store.find_by_number(number) else {
            return self.not_found(number);
        };
        let balance = account.balance();
        writeln!(self.output, "Current Balance: {balance}")?;
        Ok(Flow::Continue)
    }

    fn close_account(&mut self) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt_number("Enter Account Number to Close: ")? else {
            return Ok(Flow::Quit);
        };
        if !self.store.remove_by_number(number) {
            return self.not_found(number);
        }
        debug!("closed account {number}");
        writeln!(self.output, "Account Closed Successfully!")?;
        Ok(Flow::Continue)
    }

    fn update_account(&mut self) -> anyhow::Result<Flow> {
        let Some(number) = self.prompt_number("Enter Account Number: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(account) = self.store.find_by_number(number) else {
            return self.not_found(number);
        };
        let Some(holder) = prompt_line(
            &mut self.input,
            &mut self.output,
            "Enter new Account Holder Name: ",
        )?
        else {
            return Ok(Flow::Quit);
        };
        let Some(kind) = prompt_line(&mut self.input, &mut self.output, "Enter new Account Type: ")?
        else {
            return Ok(Flow::Quit);
        };

        account.update(holder, kind.trim());
        debug!("updated account {number}");
        writeln!(self.output, "Account Updated Successfully!")?;
        Ok(Flow::Continue)
    }

    fn prompt_number(&mut self, prompt: &str) -> anyhow::Result<Option<AccountNumber>> {
        prompt_parsed::<AccountNumber, _, _>(
            &mut self.input,
            &mut self.output,
            prompt,
            "account number",
        )
    }

    fn prompt_amount(&mut self, prompt: &str) -> anyhow::Result<Option<Decimal>> {
        prompt_parsed::<Decimal, _, _>(&mut self.input, &mut self.output, prompt, "amount")
    }

    fn not_found(&mut self, number: AccountNumber) -> anyhow::Result<Flow> {
        warn!("{}", AccountError::NotFound(number));
        writeln!(self.output, "Account Not Found!")?;
        Ok(Flow::Continue)
    }
}

/// Prints a prompt and reads one line, with the trailing newline stripped.
/// Returns `None` once the input stream is exhausted.
fn prompt_line<R, W>(input: &mut R, output: &mut W, prompt: &str) -> anyhow::Result<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}

/// Prompts for one value and parses it. Malformed input has no recovery
/// path; the parse failure propagates and ends the session.
fn prompt_parsed<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &str,
) -> anyhow::Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    R: BufRead,
    W: Write,
{
    match prompt_line(input, output, prompt)? {
        Some(line) => {
            let value = line
                .trim()
                .parse::<T>()
                .with_context(|| format!("malformed {field}: {line:?}"))?;
            Ok(Some(value))
        }
        None => Ok(None),
    }
}
