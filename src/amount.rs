//! Amount Input Session
//!
//! One clamped integer edited through stepper buttons or the text field.
//! The submit target is a parameter of the show call, so the banking panel
//! can reuse the amount window without touching any shared submit path.

pub const MIN_AMOUNT: u32 = 1;
pub const MAX_AMOUNT: u32 = 999_999;

/// Clamp to the valid range. Idempotent.
pub fn clamp_amount(value: i64) -> u32 {
    value.clamp(MIN_AMOUNT as i64, MAX_AMOUNT as i64) as u32
}

/// Banking action the amount window can collect a value for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BankAction {
    Deposit,
    Withdraw,
}

impl BankAction {
    pub fn endpoint_value(self) -> &'static str {
        match self {
            BankAction::Deposit => "deposit",
            BankAction::Withdraw => "withdraw",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            BankAction::Deposit => "Deposit Cash to Bank",
            BankAction::Withdraw => "Withdraw from Bank",
        }
    }
}

/// Where a confirmed amount goes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmountTarget {
    /// Plain `amountSubmit` callback
    #[default]
    Submit,
    /// `bankingAction` callback with the given action
    Banking(BankAction),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AmountSession {
    pub title: String,
    pub value: u32,
    pub target: AmountTarget,
}

impl Default for AmountSession {
    fn default() -> Self {
        Self {
            title: String::new(),
            value: MIN_AMOUNT,
            target: AmountTarget::Submit,
        }
    }
}

impl AmountSession {
    pub fn open(title: String, initial: Option<u32>, target: AmountTarget) -> Self {
        Self {
            title,
            value: clamp_amount(initial.unwrap_or(MIN_AMOUNT) as i64),
            target,
        }
    }

    /// Stepper buttons; clamped on every mutation
    pub fn step(&mut self, delta: i64) {
        self.value = clamp_amount(self.value as i64 + delta);
    }

    /// Manual edit of the input field. Non-numeric input leaves the value
    /// unchanged.
    pub fn set_from_input(&mut self, raw: &str) {
        if let Ok(parsed) = raw.trim().parse::<i64>() {
            self.value = clamp_amount(parsed);
        }
    }

    /// A submit is only emitted for a positive value
    pub fn submittable(&self) -> bool {
        self.value >= MIN_AMOUNT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp_amount(-5), MIN_AMOUNT);
        assert_eq!(clamp_amount(0), MIN_AMOUNT);
        assert_eq!(clamp_amount(1), 1);
        assert_eq!(clamp_amount(500), 500);
        assert_eq!(clamp_amount(999_999), MAX_AMOUNT);
        assert_eq!(clamp_amount(10_000_000), MAX_AMOUNT);
    }

    #[test]
    fn clamp_is_idempotent() {
        for n in [-10i64, 0, 1, 42, 999_999, 1_000_000, i64::MAX] {
            let once = clamp_amount(n);
            assert_eq!(clamp_amount(once as i64), once);
        }
    }

    #[test]
    fn stepping_stays_in_range() {
        let mut session = AmountSession::open("Amount".into(), Some(1), AmountTarget::Submit);
        session.step(-1);
        assert_eq!(session.value, MIN_AMOUNT);
        session.step(10);
        assert_eq!(session.value, 11);
        session.value = MAX_AMOUNT;
        session.step(1);
        assert_eq!(session.value, MAX_AMOUNT);
    }

    #[test]
    fn manual_edit_parses_and_clamps() {
        let mut session = AmountSession::default();
        session.set_from_input(" 250 ");
        assert_eq!(session.value, 250);
        session.set_from_input("not a number");
        assert_eq!(session.value, 250);
        session.set_from_input("2000000");
        assert_eq!(session.value, MAX_AMOUNT);
        session.set_from_input("-3");
        assert_eq!(session.value, MIN_AMOUNT);
    }

    #[test]
    fn open_clamps_initial_amount() {
        let session = AmountSession::open("Amount".into(), Some(0), AmountTarget::Submit);
        assert_eq!(session.value, MIN_AMOUNT);
        let session = AmountSession::open("Amount".into(), None, AmountTarget::Submit);
        assert_eq!(session.value, MIN_AMOUNT);
    }
}
