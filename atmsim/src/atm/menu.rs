use std::fmt;

/// Entries of the main menu, numbered as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    TopUp = 1,
    Withdraw = 2,
    Balance = 3,
    AccountInfo = 4,
    Exit = 5,
}

impl MenuOption {
    pub const ALL: [MenuOption; 5] = [
        MenuOption::TopUp,
        MenuOption::Withdraw,
        MenuOption::Balance,
        MenuOption::AccountInfo,
        MenuOption::Exit,
    ];

    pub fn from_number(n: i64) -> Option<Self> {
        Self::ALL.iter().copied().find(|o| *o as i64 == n)
    }

    pub fn description(&self) -> &'static str {
        match self {
            MenuOption::TopUp => "Top up your bank account.",
            MenuOption::Withdraw => "Withdraw money from your bank account.",
            MenuOption::Balance => "Check bank account balance.",
            MenuOption::AccountInfo => "View bank account information.",
            MenuOption::Exit => "Exit.",
        }
    }
}

impl fmt::Display for MenuOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", *self as u8, self.description())
    }
}
