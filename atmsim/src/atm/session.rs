// atmsim/src/atm/session.rs

use std::io::Write;
use std::marker::PhantomData;

use log::{debug, info, warn};
use rust_decimal::Decimal;

use crate::atm::menu::MenuOption;
use crate::atm::{Atm, SessionOutcome};
use crate::card::Card;
use crate::console::Console;
use crate::input::InputSource;
use crate::utils::{format_money, with_commission};
use crate::Result;

/// Type-state markers
pub struct Authenticating;
pub struct MenuLoop;

/// One customer session at an ATM. The PIN has to be accepted before the
/// menu becomes reachable, which the state parameter enforces at compile
/// time.
pub struct Session<'a, I, W, State = Authenticating> {
    atm: &'a Atm,
    card: &'a mut Card,
    console: &'a mut Console<I, W>,
    commission_percent: Decimal,
    _state: PhantomData<State>,
}

/// Result of the PIN check.
pub enum Authentication<'a, I, W> {
    Granted(Session<'a, I, W, MenuLoop>),
    LockedOut,
}

impl<'a, I: InputSource, W: Write> Session<'a, I, W, Authenticating> {
    pub fn new(atm: &'a Atm, card: &'a mut Card, console: &'a mut Console<I, W>) -> Self {
        Self {
            atm,
            card,
            console,
            commission_percent: Decimal::ZERO,
            _state: PhantomData,
        }
    }

    /// Ask for the PIN until it matches or the attempts run out.
    pub fn authenticate(self) -> Result<Authentication<'a, I, W>> {
        self.console.line(format_args!(
            "\nWelcome to \"{}\" ATM.",
            self.atm.bank().label()
        ))?;
        self.console.prompt("Enter your card PIN code: ")?;

        let mut attempts_left = self.atm.config().max_pin_attempts;
        loop {
            let entered = self.console.read_pin()?;
            if self.card.pin().matches(&entered) {
                break;
            }

            attempts_left = attempts_left.saturating_sub(1);
            if attempts_left == 0 {
                warn!(
                    "PIN attempts exhausted, card {} locked out",
                    self.card.number().masked()
                );
                self.console.line(
                    "The maximum number of PIN entry attempts has been exceeded. \
                     Access to your bank account is temporarily restricted. \
                     For further actions, contact technical support.",
                )?;
                return Ok(Authentication::LockedOut);
            }
            warn!("incorrect PIN, {} attempt(s) left", attempts_left);
            self.console.prompt(format_args!(
                "You entered the incorrect PIN code. You have {} attempt(s) left. Try again: ",
                attempts_left
            ))?;
        }

        let commission_percent = self.atm.commission_for(self.card);
        info!(
            "card {} authenticated, commission {}%",
            self.card.number().masked(),
            commission_percent
        );

        Ok(Authentication::Granted(Session {
            atm: self.atm,
            card: self.card,
            console: self.console,
            commission_percent,
            _state: PhantomData,
        }))
    }
}

impl<'a, I: InputSource, W: Write> Session<'a, I, W, MenuLoop> {
    /// Commission applied to top-ups and withdrawals for this session.
    pub fn commission_percent(&self) -> Decimal {
        self.commission_percent
    }

    /// Show the menu and dispatch selections until the user exits.
    pub fn run_menu(mut self) -> Result<SessionOutcome> {
        loop {
            self.console.line("\nMENU")?;
            for option in MenuOption::ALL {
                self.console.line(option)?;
            }
            self.console.prompt("\nChoose the option: ")?;

            let selected = self.console.read_option()?;
            match MenuOption::from_number(selected) {
                Some(option) => {
                    debug!("menu option {:?}", option);
                    match option {
                        MenuOption::TopUp => self.top_up()?,
                        MenuOption::Withdraw => self.withdraw()?,
                        MenuOption::Balance => self.show_balance()?,
                        MenuOption::AccountInfo => self.show_info()?,
                        MenuOption::Exit => {
                            self.console.line(format_args!(
                                "\nThank you for using \"{}\" ATM.",
                                self.atm.bank().label()
                            ))?;
                            return Ok(SessionOutcome::Exited);
                        }
                    }
                }
                None => {
                    self.console.line("Wrong option. Try again.")?;
                    continue;
                }
            }

            self.console.prompt("\nPress any button to proceed. ")?;
            self.console.read_ack()?;
        }
    }

    fn top_up(&mut self) -> Result<()> {
        let credited = loop {
            self.console.prompt("Please, enter an amount to top up: ")?;
            let amount = self.console.read_amount()?;
            let deposited = with_commission(amount, self.commission_percent)
                .and_then(|net| self.card.deposit(net).map(|()| net));
            match deposited {
                Ok(net) => break net,
                Err(e) if e.is_domain() => self.console.line(&e)?,
                Err(e) => return Err(e),
            }
        };

        self.processing()?;
        self.console.line(format_args!(
            "Your balance was successfully topped up by {} with {}% commission.",
            format_money(credited),
            self.commission_percent
        ))?;
        self.console.line(format_args!(
            "\nYour current balance: {}.",
            format_money(self.card.balance())
        ))
    }

    // The balance is debited by the amount entered; the commission-adjusted
    // figure is only reported.
    fn withdraw(&mut self) -> Result<()> {
        if self.card.balance().is_zero() {
            return self
                .console
                .line("\nWithdrawal isn't available while balance is 0.00$.");
        }

        let reported = loop {
            self.console.prompt("Please, enter an amount to withdraw: ")?;
            let amount = self.console.read_amount()?;
            let withdrawn = with_commission(amount, self.commission_percent)
                .and_then(|net| self.card.withdraw(amount).map(|()| net));
            match withdrawn {
                Ok(net) => break net,
                Err(e) if e.is_domain() => self.console.line(&e)?,
                Err(e) => return Err(e),
            }
        };

        self.processing()?;
        self.console.line(format_args!(
            "You successfully withdrew {} with {}% commission from your account.",
            format_money(reported),
            self.commission_percent
        ))?;
        self.console.line(format_args!(
            "Your current balance: {}.",
            format_money(self.card.balance())
        ))
    }

    fn show_balance(&mut self) -> Result<()> {
        self.processing()?;
        self.console.line(format_args!(
            "Your bank account balance: {}.",
            format_money(self.card.balance())
        ))
    }

    fn show_info(&mut self) -> Result<()> {
        self.processing()?;
        self.console.line(self.card.info())
    }

    fn processing(&mut self) -> Result<()> {
        self.console.line("Please, wait...\n")?;
        self.atm.config().delay.pause();
        Ok(())
    }
}
