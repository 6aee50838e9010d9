use atmsim::{CardIssuer, Error};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::common::visa_card;

#[test]
fn deposit_and_withdraw_examples() {
    let mut card = visa_card(CardIssuer::Chase, dec!(100)).unwrap();

    assert!(matches!(card.deposit(dec!(0)), Err(Error::InvalidArgument(_))));
    assert!(matches!(card.deposit(dec!(-1)), Err(Error::InvalidArgument(_))));
    card.deposit(dec!(50)).unwrap();
    assert_eq!(card.balance(), dec!(150));

    let mut card = visa_card(CardIssuer::Chase, dec!(100)).unwrap();
    assert!(matches!(card.withdraw(dec!(0)), Err(Error::InvalidArgument(_))));
    assert!(matches!(card.withdraw(dec!(150)), Err(Error::InsufficientFunds)));
    assert_eq!(card.balance(), dec!(100));
    card.withdraw(dec!(40)).unwrap();
    assert_eq!(card.balance(), dec!(60));
}

#[test]
fn withdrawing_everything_leaves_zero() {
    let mut card = visa_card(CardIssuer::Chase, dec!(0.01)).unwrap();
    card.withdraw(dec!(0.01)).unwrap();
    assert!(card.balance().is_zero());
    assert!(matches!(card.withdraw(dec!(0.01)), Err(Error::InsufficientFunds)));
}

#[test]
fn deposit_past_the_decimal_range_is_rejected() {
    let mut card = visa_card(CardIssuer::Chase, dec!(10000)).unwrap();
    assert!(matches!(card.deposit(Decimal::MAX), Err(Error::InvalidArgument(_))));
    assert_eq!(card.balance(), dec!(10000));

    let mut card = visa_card(CardIssuer::Chase, Decimal::MAX).unwrap();
    assert!(matches!(card.deposit(dec!(1)), Err(Error::InvalidArgument(_))));
    card.withdraw(Decimal::MAX).unwrap();
    assert!(card.balance().is_zero());
}

fn cents(n: u64) -> Decimal {
    Decimal::new(n as i64, 2)
}

proptest! {
    #[test]
    fn balance_never_goes_negative(start in 0u64..1_000_000, ops in prop::collection::vec((any::<bool>(), 0u64..200_000), 0..40)) {
        let mut card = visa_card(CardIssuer::Citi, cents(start)).unwrap();
        for (is_deposit, amount) in ops {
            let before = card.balance();
            let res = if is_deposit {
                card.deposit(cents(amount))
            } else {
                card.withdraw(cents(amount))
            };
            if res.is_err() {
                prop_assert_eq!(card.balance(), before);
            }
            prop_assert!(card.balance() >= Decimal::ZERO);
        }
    }

    #[test]
    fn deposit_then_withdraw_restores_balance(start in 0u64..1_000_000, amount in 1u64..1_000_000) {
        let mut card = visa_card(CardIssuer::Citi, cents(start)).unwrap();
        card.deposit(cents(amount)).unwrap();
        card.withdraw(cents(amount)).unwrap();
        prop_assert_eq!(card.balance(), cents(start));
    }
}
