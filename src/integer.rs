//! A non-negative decimal integer of any length, one digit per node.
//!
//! The head of the digit list holds the most significant digit and the tail the least
//! significant, so `"007"` is kept as the three digits `0, 0, 7`.
//!
//! `+` panics if the sum needs more digits than the operands' bound allows; use
//! [`BigInteger::checked_add`] to get [`Error::CapacityExceeded`] instead.

use crate::{BoundedList, Error, Iter, Result, DEFAULT_MAX_LEN,};
use std::{
    fmt,
    iter::Copied,
    ops::Add,
    str::FromStr,
};
use tracing::debug;

/// An arbitrary precision non-negative decimal integer.
#[derive(Clone, Debug, Default,)]
pub struct BigInteger {
    /// The decimal digits, most significant at the head.
    digits: BoundedList<u8,>,
    /// Sign flag; no operation sets it.
    negative: bool,
}

impl BigInteger {
    /// Returns an empty [`BigInteger`] bounded by [`DEFAULT_MAX_LEN`] digits.
    #[inline]
    pub const fn new() -> Self { Self::with_max_len(DEFAULT_MAX_LEN,) }
    /// Returns an empty [`BigInteger`] which holds at most `max_len` digits.
    ///
    /// # Params
    ///
    /// max_len --- The maximum number of digits.
    #[inline]
    pub const fn with_max_len(max_len: usize,) -> Self {
        Self { digits: BoundedList::with_max_len(max_len,), negative: false, }
    }
    /// Parses a string of ASCII decimal digits into a [`BigInteger`] of at most
    /// `max_len` digits.
    ///
    /// The whole string is validated before any digit is stored.
    ///
    /// # Params
    ///
    /// number --- The decimal digits, most significant first.
    /// max_len --- The maximum number of digits.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidDigit`] at the first character outside `'0'..='9'`.
    /// * [`Error::CapacityExceeded`] if `number` has more than `max_len` digits.
    pub fn parse_bounded(number: &str, max_len: usize,) -> Result<Self> {
        if let Some((position, found,)) = number.chars().enumerate().find(|(_, c,)| !c.is_ascii_digit()) {
            debug!(position, ?found, "rejected non-numeric input");
            return Err(Error::InvalidDigit { position, found, })
        }

        let mut integer = Self::with_max_len(max_len,);
        for byte in number.bytes() {
            integer.digits.ensure_room()?;
            integer.digits.link_back(byte - b'0',);
        }

        Ok(integer)
    }
    /// Returns the number of digits.
    #[inline]
    pub fn len(&self,) -> usize { self.digits.len() }
    /// `true` if there are no digits.
    #[inline]
    pub fn is_empty(&self,) -> bool { self.digits.is_empty() }
    /// Returns the maximum number of digits.
    #[inline]
    pub fn max_len(&self,) -> usize { self.digits.max_len() }
    /// Always `false`; negative values are not produced by any operation.
    #[inline]
    pub fn is_negative(&self,) -> bool { self.negative }
    /// Returns an iterator over the digits, most significant first.
    #[inline]
    pub fn digits(&self,) -> Copied<Iter<'_, u8,>,> { self.digits.iter().copied() }
    /// Adds two [`BigInteger`]s, returning the sum as a new [`BigInteger`].
    ///
    /// Both operands are walked from their least significant digit and every sum digit
    /// is pushed onto the head of the result. The sum may hold as many digits as the
    /// larger bound of the two operands.
    ///
    /// # Params
    ///
    /// rhs --- The value to add.
    ///
    /// # Errors
    ///
    /// * [`Error::CapacityExceeded`] if the sum needs more digits than its bound.
    pub fn checked_add(&self, rhs: &Self,) -> Result<Self> {
        let mut sum = Self::with_max_len(self.max_len().max(rhs.max_len(),),);
        let mut lhs_at = self.digits.back_view();
        let mut rhs_at = rhs.digits.back_view();
        let mut carry = false;

        while lhs_at.is_some() || rhs_at.is_some() {
            let mut digit = lhs_at.map_or(0, |at| *at,)
                + rhs_at.map_or(0, |at| *at,)
                + u8::from(carry,);

            carry = digit >= 10;
            if carry { digit -= 10 }

            sum.digits.ensure_room()?;
            sum.digits.link_front(digit,);

            lhs_at = lhs_at.and_then(|at| at.prev(),);
            rhs_at = rhs_at.and_then(|at| at.prev(),);
        }

        if carry {
            sum.digits.ensure_room()?;
            sum.digits.link_front(1,);
        }

        debug!(lhs = self.len(), rhs = rhs.len(), sum = sum.len(), "added integers");
        Ok(sum)
    }
}

impl FromStr for BigInteger {
    type Err = Error;

    #[inline]
    fn from_str(number: &str,) -> Result<Self> {
        Self::parse_bounded(number, DEFAULT_MAX_LEN,)
    }
}

impl<'a, 'b,> Add<&'b BigInteger,> for &'a BigInteger {
    type Output = BigInteger;

    /// # Panics
    ///
    /// * If the sum needs more digits than the larger bound of the operands.
    fn add(self, rhs: &'b BigInteger,) -> Self::Output {
        match self.checked_add(rhs,) {
            Ok(sum) => sum,
            Err(e) => panic!("`BigInteger` addition overflowed: {}", e),
        }
    }
}

impl Add for BigInteger {
    type Output = BigInteger;

    #[inline]
    fn add(self, rhs: BigInteger,) -> Self::Output { &self + &rhs }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, fmt: &mut fmt::Formatter,) -> fmt::Result {
        self.digits().try_for_each(|digit| write!(fmt, "{}", digit,))
    }
}
