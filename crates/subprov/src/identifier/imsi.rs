use crate::{Error, Result};
use core::{fmt, str::FromStr};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Literal prefix carried by every subscriber identifier.
pub const IMSI_PREFIX: &str = "imsi-";

/// Width of the leading operator segment (MCC + MNC).
pub const LEADING_DIGITS: usize = 5;

/// Width of the trailing subscriber number.
pub const SUBSCRIBER_DIGITS: usize = 10;

/// Largest value the trailing subscriber number can hold.
pub const MAX_SUBSCRIBER_NUMBER: u64 = 9_999_999_999;

const MIN_DIGITS: usize = LEADING_DIGITS + SUBSCRIBER_DIGITS;

/// A parsed subscriber identifier of the form `imsi-PPPPP[M...]NNNNNNNNNN`.
///
/// The identifier is split into three segments:
///
/// - a 5-digit leading segment (network/operator code),
/// - an optional middle segment of arbitrary digit count,
/// - a 10-digit trailing subscriber number.
///
/// Only the subscriber number ever changes when deriving successors; the
/// leading and middle segments are carried through verbatim.
///
/// # Example
///
/// ```
/// use subprov::Imsi;
///
/// let imsi: Imsi = "imsi-208930000000001".parse().unwrap();
/// assert_eq!(imsi.leading(), "20893");
/// assert_eq!(imsi.middle(), "");
/// assert_eq!(imsi.subscriber_number(), 1);
/// assert_eq!(imsi.next().unwrap().to_string(), "imsi-208930000000002");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Imsi {
    leading: String,
    middle: String,
    subscriber: u64,
}

impl Imsi {
    /// Parses a structured identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedIdentifier`] when the prefix is missing, fewer
    /// than 15 characters follow it, or any of them is not an ASCII digit.
    pub fn parse(id: &str) -> Result<Self> {
        let malformed = |reason| Error::MalformedIdentifier {
            id: id.to_string(),
            reason,
        };

        let digits = id
            .strip_prefix(IMSI_PREFIX)
            .ok_or_else(|| malformed("must start with 'imsi-'"))?;

        if digits.len() < MIN_DIGITS {
            return Err(malformed("must have at least 15 digits after 'imsi-'"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("must contain only digits after 'imsi-'"));
        }

        // All bytes are ASCII digits from here on, so byte offsets are char
        // boundaries.
        let split = digits.len() - SUBSCRIBER_DIGITS;
        let subscriber = digits[split..]
            .parse::<u64>()
            .map_err(|_| malformed("invalid subscriber number"))?;

        Ok(Self {
            leading: digits[..LEADING_DIGITS].to_string(),
            middle: digits[LEADING_DIGITS..split].to_string(),
            subscriber,
        })
    }

    /// Returns the identifier whose subscriber number is one greater.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the subscriber number would need more
    /// than 10 digits.
    pub fn next(&self) -> Result<Self> {
        match self.subscriber.checked_add(1) {
            Some(next) if next <= MAX_SUBSCRIBER_NUMBER => Ok(Self {
                leading: self.leading.clone(),
                middle: self.middle.clone(),
                subscriber: next,
            }),
            _ => Err(Error::Overflow {
                id: self.to_string(),
            }),
        }
    }

    /// The 5-digit operator segment.
    pub fn leading(&self) -> &str {
        &self.leading
    }

    /// The digits between the operator segment and the subscriber number.
    /// Empty for 15-digit identifiers.
    pub fn middle(&self) -> &str {
        &self.middle
    }

    /// The trailing subscriber number as an integer.
    pub const fn subscriber_number(&self) -> u64 {
        self.subscriber
    }

    /// Iterates over this identifier and its successors, stopping after the
    /// last representable subscriber number.
    pub fn iter(&self) -> ImsiSequence {
        ImsiSequence {
            next: Some(self.clone()),
        }
    }
}

impl fmt::Display for Imsi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{IMSI_PREFIX}{}{}{:0width$}",
            self.leading,
            self.middle,
            self.subscriber,
            width = SUBSCRIBER_DIGITS
        )
    }
}

impl FromStr for Imsi {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Imsi {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::parse(value)
    }
}

impl Serialize for Imsi {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Imsi {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> core::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Iterator over consecutive identifiers, see [`Imsi::iter`].
#[derive(Clone, Debug)]
pub struct ImsiSequence {
    next: Option<Imsi>,
}

impl Iterator for ImsiSequence {
    type Item = Imsi;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next().ok();
        Some(current)
    }
}

/// Derives the identifier following `id`.
///
/// This is the string-in, string-out form of [`Imsi::next`]. It performs no
/// I/O and cannot detect whether the result is already provisioned.
///
/// # Errors
///
/// - [`Error::MalformedIdentifier`] if `id` is not a structured identifier.
/// - [`Error::Overflow`] if the subscriber number is already `9999999999`.
pub fn next_identifier(id: &str) -> Result<String> {
    Ok(Imsi::parse(id)?.next()?.to_string())
}
