//! Bank ledger example: two customers, one savings and one checking account
//! each, and a pair of transfers.
//!
//! Run with `RUST_LOG=debug cargo run --example bank_demo` to see ledger logs.

use bank_ledger::{Account, Ledger, LedgerError};
use bigdecimal::BigDecimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut bank = Ledger::new("ABC Bank");
    println!("Opening {}\n", bank.name());

    let john = "John Doe";
    let jane = "Jane Smith";

    bank.add_customer(john);
    bank.add_customer(jane);

    let john_savings = bank.add_account(Account::savings(john, BigDecimal::from(1000)))?;
    let john_checking = bank.add_account(Account::checking(john, BigDecimal::from(500)))?;
    bank.add_account(Account::savings(jane, BigDecimal::from(2000)))?;
    bank.add_account(Account::checking(jane, BigDecimal::from(1000)))?;

    for account in bank.accounts() {
        println!(
            "  {} - {:?}: {}",
            account.owner(),
            account.kind(),
            account.check_balance()
        );
    }
    println!();

    bank.perform_transaction(john, jane, BigDecimal::from(200))?;
    bank.perform_transaction(jane, john, BigDecimal::from(300))?;

    println!("Transactions for {}:", john);
    for transaction in bank.get_transactions(john) {
        println!("  {}", transaction);
    }
    println!();

    match bank.perform_transaction("Ghost", jane, BigDecimal::from(50)) {
        Err(LedgerError::AccountNotFound(owner)) => println!("No account for {}", owner),
        other => println!("Unexpected result: {:?}", other),
    }
    if let Err(err) = bank.perform_transaction(john, jane, BigDecimal::from(1_000_000)) {
        println!("Rejected: {}", err);
    }
    println!();

    if let Some(interest) = bank
        .account(&john_savings)
        .and_then(Account::calculate_interest)
    {
        println!("Interest on {}'s savings: {}", john, interest);
    }
    if let Some(account) = bank.account_mut(&john_checking) {
        if let Some(fee) = account.deduct_transaction_fee() {
            println!(
                "Charged {} fee on {}'s checking, balance now {}",
                fee,
                john,
                account.check_balance()
            );
        }
    }

    Ok(())
}
