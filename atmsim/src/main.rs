//! atmsim - terminal ATM simulator
//!
//! Issues one card from the command line (or `ATMSIM_*` environment
//! variables) and runs a single ATM session on stdin/stdout.
//!
//! Usage:
//!   cargo run -p atmsim -- --bank chase --pin 1234

use std::io;

use anyhow::Context;
use clap::Parser;
use log::info;
use rust_decimal::Decimal;

use atmsim::prelude::*;

/// Command-line options
#[derive(Parser, Debug)]
#[command(name = "atmsim")]
#[command(about = "Single-session ATM simulator", long_about = None)]
#[command(version)]
struct Cli {
    /// Bank operating the ATM
    #[arg(long, env = "ATMSIM_BANK", default_value = "bank-of-america")]
    bank: CardIssuer,

    /// Bank that issued the card
    #[arg(long, env = "ATMSIM_ISSUER", default_value = "american-express")]
    issuer: CardIssuer,

    /// Payment network of the card
    #[arg(long, env = "ATMSIM_NETWORK", default_value = "visa")]
    network: CardNetwork,

    /// Card number; spaces, dashes, commas and underscores are ignored
    #[arg(long, env = "ATMSIM_NUMBER", default_value = "4375 6759 2480 6971")]
    number: String,

    /// Four-digit card PIN
    #[arg(long, env = "ATMSIM_PIN", default_value = "7594")]
    pin: String,

    /// Card product name; empty leaves it undefined
    #[arg(long, env = "ATMSIM_CARD_NAME", default_value = "Ultimate")]
    card_name: String,

    /// Cardholder's first and last name; empty leaves it undefined
    #[arg(long, env = "ATMSIM_HOLDER", default_value = "John Williams")]
    holder: String,

    /// Opening balance of the card
    #[arg(long, env = "ATMSIM_BALANCE", default_value = "10000")]
    balance: Decimal,

    /// Commission in percent for cards issued by other banks
    #[arg(long, env = "ATMSIM_COMMISSION", default_value = "5")]
    commission: Decimal,

    /// PIN attempts before the card is locked out
    #[arg(long, env = "ATMSIM_ATTEMPTS", default_value_t = atmsim::constants::DEFAULT_PIN_ATTEMPTS)]
    attempts: u32,

    /// Skip the simulated processing delay
    #[arg(long, env = "ATMSIM_NO_DELAY")]
    no_delay: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let mut options = CardOptions::default().initial_balance(cli.balance);
    options.name = Some(cli.card_name).filter(|s| !s.is_empty());
    options.cardholder_name = Some(cli.holder).filter(|s| !s.is_empty());

    let mut card = Card::new(cli.issuer, cli.network, &cli.number, &cli.pin, options)
        .context("could not issue the card")?;

    let delay = if cli.no_delay {
        ProcessingDelay::none()
    } else {
        ProcessingDelay::default()
    };
    let config = AtmConfig::default()
        .max_pin_attempts(cli.attempts)
        .commission_percent(cli.commission)
        .delay(delay);
    let atm = Atm::with_config(cli.bank, config).context("invalid ATM configuration")?;

    let mut console = Console::new(LineInput::stdin(), io::stdout().lock());
    let outcome = atm.run(&mut card, &mut console)?;
    info!("exiting after {:?}", outcome);

    Ok(())
}
