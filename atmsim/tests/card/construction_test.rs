use atmsim::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::common::fixtures::{self, PIN};

#[test]
fn representative_numbers_are_accepted_and_normalized() {
    for (network, raw) in fixtures::valid_numbers() {
        let card = Card::new(CardIssuer::Citi, network, raw, PIN, CardOptions::default())
            .unwrap_or_else(|e| panic!("{:?} {:?} rejected: {}", network, raw, e));
        assert!(card.number().as_str().bytes().all(|b| b.is_ascii_digit()));
        assert_eq!(card.network(), network);
    }
}

#[test]
fn numbers_outside_the_network_format_are_rejected() {
    for (network, raw) in fixtures::invalid_numbers() {
        let res = Card::new(CardIssuer::Citi, network, raw, PIN, CardOptions::default());
        assert!(
            matches!(res, Err(Error::InvalidArgument(_))),
            "{:?} {:?} accepted",
            network,
            raw
        );
    }
}

#[test]
fn a_number_valid_for_one_network_fails_for_another() {
    let amex = "378282246310005";
    assert!(Card::new(CardIssuer::Chase, CardNetwork::AmericanExpress, amex, PIN, CardOptions::default()).is_ok());
    for network in [CardNetwork::Visa, CardNetwork::Mastercard, CardNetwork::DinersClub, CardNetwork::Discover] {
        assert!(Card::new(CardIssuer::Chase, network, amex, PIN, CardOptions::default()).is_err());
    }
}

#[test]
fn fields_round_trip() -> anyhow::Result<()> {
    let card = CardBuilder::new(
        CardIssuer::WellsFargo,
        CardNetwork::Mastercard,
        "5555 5555 5555 4444",
        "0001",
    )
    .name("Platinum")
    .cardholder_name("Ada Lovelace")
    .initial_balance(dec!(12.34))
    .build()?;

    assert_eq!(card.issuer(), CardIssuer::WellsFargo);
    assert_eq!(card.network(), CardNetwork::Mastercard);
    assert_eq!(card.number().as_str(), "5555555555554444");
    assert!(card.pin().matches("0001"));
    assert_eq!(card.name().as_str(), "Platinum");
    assert_eq!(card.cardholder_name().as_str(), "Ada Lovelace");
    assert_eq!(card.balance(), dec!(12.34));
    Ok(())
}

#[test]
fn omitted_options_take_defaults() {
    let card = CardBuilder::new(CardIssuer::Discover, CardNetwork::Discover, "6011111111111117", "9999")
        .build()
        .unwrap();
    assert_eq!(card.name().as_str(), "Undefined");
    assert_eq!(card.cardholder_name().as_str(), "Undefined");
    assert_eq!(card.balance(), Decimal::ZERO);
}

#[test]
fn invalid_pin_and_names_are_rejected() {
    let number = "4375675924806971";
    for pin in ["", "123", "12345", "12a4", " 123"] {
        let res = CardBuilder::new(CardIssuer::Citi, CardNetwork::Visa, number, pin).build();
        assert!(matches!(res, Err(Error::InvalidArgument(_))), "pin {:?}", pin);
    }
    for name in ["", "Go", "gold", "GOLD", "Gold1", "Gold card"] {
        let res = CardBuilder::new(CardIssuer::Citi, CardNetwork::Visa, number, PIN)
            .name(name)
            .build();
        assert!(matches!(res, Err(Error::InvalidArgument(_))), "name {:?}", name);
    }
    for holder in ["John", "john williams", "John Williams Jr", "Jo Williams", "John W"] {
        let res = CardBuilder::new(CardIssuer::Citi, CardNetwork::Visa, number, PIN)
            .cardholder_name(holder)
            .build();
        assert!(matches!(res, Err(Error::InvalidArgument(_))), "holder {:?}", holder);
    }
}

#[test]
fn rendering_masks_the_number() {
    let card = CardBuilder::new(CardIssuer::AmericanExpress, CardNetwork::Visa, "4375675924806971", PIN)
        .build()
        .unwrap();
    assert_eq!(card.number().masked(), "************6971");
    let text = card.to_string();
    assert!(text.contains("Card issuer: American Express"));
    assert!(text.contains("Card network: Visa"));
    assert!(text.contains("Card number: ************6971"));
    assert!(text.contains("Card name: Undefined"));
    assert!(text.contains("Cardholder name: Undefined"));
    assert!(!text.contains(PIN));
}
