//! Fixed-point SEM amounts.
//!
//! An [`Amount`] is a non-negative count of nano-SEM, the base quantum of the
//! currency: one SEM is 10^9 nano-SEM. Amounts are stored as `u64` and all
//! arithmetic is checked — there are no operator impls that could wrap
//! silently, and over- and underflow are distinct errors because the executor
//! classifies them as fatal rather than as transaction failures.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of nano-SEM in one SEM.
pub const NANO_PER_SEM: u64 = 1_000_000_000;

/// Checked-arithmetic failures on [`Amount`].
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount arithmetic overflow")]
    ArithmeticOverflow,

    #[error("amount arithmetic underflow")]
    ArithmeticUnderflow,
}

/// A non-negative currency quantity in nano-SEM.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Amount(u64);

impl Amount {
    /// The additive identity.
    pub const ZERO: Self = Self(0);

    /// The largest representable amount.
    pub const MAX: Self = Self(u64::MAX);

    pub const fn from_nano(nano: u64) -> Self {
        Self(nano)
    }

    pub const fn nano(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    pub fn sum(self, other: Self) -> Result<Self, AmountError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(AmountError::ArithmeticOverflow)
    }

    /// Checked subtraction. Fails when `other > self`.
    pub fn sub(self, other: Self) -> Result<Self, AmountError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(AmountError::ArithmeticUnderflow)
    }
}

/// Currency denominations.
///
/// `SEM.of(5)` is five whole SEM; `NANO_SEM.of(5)` is five base quanta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Unit {
    NanoSem,
    Sem,
}

/// The base quantum: `NANO_SEM.of(n)` holds exactly `n` nano-SEM.
pub const NANO_SEM: Unit = Unit::NanoSem;
/// One whole coin: `SEM.of(n)` holds `n * 10^9` nano-SEM.
pub const SEM: Unit = Unit::Sem;

impl Unit {
    /// Nano-SEM per one of this unit.
    pub const fn multiplier(self) -> u64 {
        match self {
            Unit::NanoSem => 1,
            Unit::Sem => NANO_PER_SEM,
        }
    }

    /// `units` of this denomination as an [`Amount`].
    ///
    /// # Panics
    ///
    /// Panics if the result exceeds the representable range. Protocol
    /// constants and test fixtures are the intended callers; arithmetic on
    /// runtime values goes through [`Amount::sum`] / [`Amount::sub`].
    pub const fn of(self, units: u64) -> Amount {
        match units.checked_mul(self.multiplier()) {
            Some(nano) => Amount(nano),
            None => panic!("amount exceeds the representable range"),
        }
    }
}

/// Rejected input to [`Amount::from_str`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("invalid SEM amount `{0}`")]
pub struct ParseAmountError(pub String);

impl fmt::Display for Amount {
    /// Decimal SEM with no trailing zeros, e.g. `5.000000001` or `1000`.
    /// The output parses back to the identical amount.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / NANO_PER_SEM;
        let frac = self.0 % NANO_PER_SEM;
        if frac == 0 {
            return write!(f, "{}", whole);
        }
        let mut digits = format!("{:09}", frac);
        while digits.ends_with('0') {
            digits.pop();
        }
        write!(f, "{}.{}", whole, digits)
    }
}

impl FromStr for Amount {
    type Err = ParseAmountError;

    /// Exact decimal SEM: an integer part and up to nine fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let reject = || ParseAmountError(s.to_string());
        let (whole, frac) = match s.split_once('.') {
            Some((whole, frac)) => (whole, frac),
            None => (s, ""),
        };
        if whole.is_empty() || !whole.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject());
        }
        if s.contains('.') && (frac.is_empty() || frac.len() > 9) {
            return Err(reject());
        }
        if !frac.bytes().all(|b| b.is_ascii_digit()) {
            return Err(reject());
        }

        let whole: u64 = whole.parse().map_err(|_| reject())?;
        let mut frac_nano: u64 = 0;
        for b in frac.bytes() {
            frac_nano = frac_nano * 10 + u64::from(b - b'0');
        }
        frac_nano *= 10u64.pow(9 - frac.len() as u32);

        whole
            .checked_mul(NANO_PER_SEM)
            .and_then(|nano| nano.checked_add(frac_nano))
            .map(Amount)
            .ok_or_else(reject)
    }
}
