use std::io::Cursor;

use bank_teller::session::Session;

/// Feeds a scripted line of input per prompt and returns everything the
/// session printed.
fn run_script(script: &str) -> String {
    let mut out = Vec::new();
    let mut session = Session::new(Cursor::new(script.as_bytes()), &mut out);
    session.run().expect("session should not fail");
    String::from_utf8(out).expect("session output was not valid UTF-8")
}

#[test]
fn create_then_check_balance_returns_initial_deposit() {
    let output = run_script("1\n101\nAlice\nSaving\n100.0\n5\n101\n8\n");

    assert!(output.contains("Account Created Successfully!"));
    assert!(output.contains("Current Balance: 100.0"));
}

#[test]
fn deposit_is_added_to_balance() {
    // Create #101 "Alice" Saving 100.0, deposit 50.0, check balance.
    let output = run_script("1\n101\nAlice\nSaving\n100.0\n3\n101\n50.0\n5\n101\n8\n");

    assert!(output.contains("Amount Deposited Successfully!"));
    assert!(output.contains("Current Balance: 150.0"));
}

#[test]
fn overdraft_withdrawal_is_rejected_and_balance_unchanged() {
    // Create #202 "Bob" Current 20.0, try to withdraw 30.0.
    let output = run_script("1\n202\nBob\nCurrent\n20.0\n4\n202\n30.0\n5\n202\n8\n");

    assert!(output.contains("Insufficient Balance!"));
    assert!(!output.contains("Withdrawal Successful!"));
    assert!(output.contains("Current Balance: 20.0"));
}

#[test]
fn covered_withdrawal_reduces_balance() {
    let output = run_script("1\n300\nCarol\nSaving\n75.5\n4\n300\n25.5\n5\n300\n8\n");

    assert!(output.contains("Withdrawal Successful!"));
    assert!(output.contains("Current Balance: 50.0"));
}

#[test]
fn closing_one_account_leaves_the_other_listed() {
    // Create #1 and #2, close #1, display all.
    let output =
        run_script("1\n1\nAlice\nSaving\n10.0\n1\n2\nBob\nCurrent\n20.0\n6\n1\n2\n8\n");

    assert!(output.contains("Account Closed Successfully!"));
    assert!(output.contains("Account Number: 2"));
    assert!(!output.contains("Account Number: 1\n"));
}

#[test]
fn display_with_no_accounts_reports_none_found() {
    let output = run_script("2\n8\n");

    assert!(output.contains("No Accounts Found!"));
}

#[test]
fn display_lists_accounts_in_insertion_order_with_full_details() {
    let output = run_script("1\n1\nAlice\nSaving\n10.0\n1\n2\nBob\nCurrent\n20.0\n2\n8\n");

    let alice = output.find("Account Holder: Alice").expect("Alice listed");
    let bob = output.find("Account Holder: Bob").expect("Bob listed");
    assert!(alice < bob);
    assert!(output.contains("Account Type: Saving"));
    assert!(output.contains("Balance: 10.0"));
    assert!(output.contains("Account Type: Current"));
    assert!(output.contains("Balance: 20.0"));
}

#[test]
fn unknown_account_number_reports_not_found_everywhere() {
    // Deposit, withdraw, check balance, close and update against an empty store.
    let output = run_script("3\n9\n4\n9\n5\n9\n6\n9\n7\n9\n8\n");

    assert_eq!(output.matches("Account Not Found!").count(), 5);
}

#[test]
fn update_overwrites_holder_and_kind_but_not_balance() {
    let output = run_script("1\n7\nAlice\nSaving\n100.0\n7\n7\nBob Smith\nCurrent\n2\n8\n");

    assert!(output.contains("Account Updated Successfully!"));
    assert!(output.contains("Account Holder: Bob Smith"));
    assert!(output.contains("Account Type: Current"));
    assert!(output.contains("Balance: 100.0"));
    assert!(!output.contains("Account Holder: Alice"));
}

#[test]
fn holder_name_keeps_interior_spaces() {
    let output = run_script("1\n11\nMary Jane Watson\nSaving\n5.0\n2\n8\n");

    assert!(output.contains("Account Holder: Mary Jane Watson"));
}

#[test]
fn duplicate_numbers_are_allowed_and_first_match_wins() {
    // Two accounts share #5; the deposit lands on the first one only.
    let output = run_script(
        "1\n5\nFirst\nSaving\n100.0\n1\n5\nSecond\nCurrent\n100.0\n3\n5\n50.0\n2\n8\n",
    );

    let first = output.find("Account Holder: First").expect("First listed");
    let second = output.find("Account Holder: Second").expect("Second listed");
    assert!(first < second);
    assert!(output.contains("Balance: 150.0"));
    assert!(output.contains("Balance: 100.0"));
}

#[test]
fn negative_deposit_passes_through_unchecked() {
    let output = run_script("1\n42\nEve\nSaving\n100.0\n3\n42\n-30.0\n5\n42\n8\n");

    assert!(output.contains("Amount Deposited Successfully!"));
    assert!(output.contains("Current Balance: 70.0"));
}

#[test]
fn invalid_menu_choice_reprompts() {
    let output = run_script("9\n0\n-1\n8\n");

    assert_eq!(output.matches("Invalid Choice! Try Again.").count(), 3);
    assert!(output.contains("Thank you for using the Bank System!"));
}

#[test]
fn exit_choice_prints_farewell() {
    let output = run_script("8\n");

    assert!(output.trim_end().ends_with("Thank you for using the Bank System!"));
}

#[test]
fn end_of_input_terminates_the_loop_gracefully() {
    // Script runs out without ever picking Exit.
    let output = run_script("1\n101\nAlice\nSaving\n100.0\n");

    assert!(output.contains("Account Created Successfully!"));
    assert!(!output.contains("Thank you for using the Bank System!"));
}

#[test]
fn malformed_amount_ends_the_session_with_an_error() {
    let mut out = Vec::new();
    let mut session = Session::new(
        Cursor::new(b"1\n101\nAlice\nSaving\nabc\n".as_slice()),
        &mut out,
    );
    let err = session.run().unwrap_err();
    assert!(err.to_string().contains("malformed amount"));
}

#[test]
fn store_state_matches_the_transcript() {
    let mut out = Vec::new();
    let mut session = Session::new(
        Cursor::new(b"1\n1\nAlice\nSaving\n10.0\n1\n2\nBob\nCurrent\n20.0\n6\n1\n8\n".as_slice()),
        &mut out,
    );
    session.run().expect("session should not fail");

    let accounts = session.store().accounts();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].number(), 2.into());
    assert_eq!(accounts[0].holder(), "Bob");
}
