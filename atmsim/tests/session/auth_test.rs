use atmsim::prelude::*;
use rust_decimal_macros::dec;

use crate::common::{init_logging, instant_atm, scripted_console, transcript, visa_card};

#[test]
fn three_wrong_pins_lock_the_card_out() {
    init_logging();
    let atm = instant_atm(CardIssuer::BankOfAmerica);
    let mut card = visa_card(CardIssuer::AmericanExpress, dec!(100)).unwrap();
    let mut console = scripted_console(["0000", "1111", "2222"]);

    let outcome = atm.run(&mut card, &mut console).unwrap();
    assert_eq!(outcome, SessionOutcome::LockedOut);

    let out = transcript(&console);
    let two = out.find("2 attempt(s) left").expect("first warning");
    let one = out.find("1 attempt(s) left").expect("second warning");
    assert!(two < one);
    assert!(!out.contains("0 attempt(s) left"));
    assert!(out.contains("maximum number of PIN entry attempts"));
    assert!(!out.contains("MENU"));
    assert_eq!(card.balance(), dec!(100));
}

#[test]
fn correct_pin_after_a_miss_opens_the_menu() {
    init_logging();
    let atm = instant_atm(CardIssuer::BankOfAmerica);
    let mut card = visa_card(CardIssuer::AmericanExpress, dec!(100)).unwrap();
    let mut console = scripted_console(["0000", "7594", "5"]);

    let outcome = atm.run(&mut card, &mut console).unwrap();
    assert_eq!(outcome, SessionOutcome::Exited);

    let out = transcript(&console);
    assert!(out.contains("Welcome to \"Bank of America\" ATM."));
    assert!(out.contains("2 attempt(s) left"));
    assert!(out.contains("MENU"));
    assert!(out.contains("Thank you for using \"Bank of America\" ATM."));
}

#[test]
fn malformed_pin_entries_do_not_cost_attempts() {
    let atm = instant_atm(CardIssuer::BankOfAmerica);
    let mut card = visa_card(CardIssuer::AmericanExpress, dec!(100)).unwrap();
    let mut console = scripted_console(["12", "abcd", "75941", "7594", "5"]);

    let outcome = atm.run(&mut card, &mut console).unwrap();
    assert_eq!(outcome, SessionOutcome::Exited);

    let out = transcript(&console);
    assert_eq!(out.matches("Invalid card PIN").count(), 3);
    assert!(!out.contains("attempt(s) left"));
}

#[test]
fn custom_attempt_limit() {
    let atm = Atm::with_config(
        CardIssuer::Chase,
        AtmConfig::default()
            .max_pin_attempts(5)
            .delay(ProcessingDelay::none()),
    )
    .unwrap();
    let mut card = visa_card(CardIssuer::Chase, dec!(1)).unwrap();
    let mut console = scripted_console(["0000", "0000", "0000", "0000", "0000"]);

    assert_eq!(
        atm.run(&mut card, &mut console).unwrap(),
        SessionOutcome::LockedOut
    );
    let out = transcript(&console);
    assert!(out.contains("4 attempt(s) left"));
    assert!(out.contains("1 attempt(s) left"));
}

#[test]
fn running_out_of_input_during_pin_entry() {
    let atm = instant_atm(CardIssuer::Chase);
    let mut card = visa_card(CardIssuer::Chase, dec!(1)).unwrap();
    let mut console = scripted_console(["0000"]);
    assert!(matches!(
        atm.run(&mut card, &mut console),
        Err(Error::InputClosed)
    ));
}
