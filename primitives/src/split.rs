use {
  crate::{fmt_fixed, Address},
  serde::{Deserialize, Serialize},
  std::fmt::Display,
  thiserror::Error,
};

/// Fixed-point denominator of split percentages, represents 100%.
pub const TOTAL_UNITS: u32 = 1_000_000_000;

/// Number of decimal places implied by [`TOTAL_UNITS`].
const TOTAL_UNITS_DECIMALS: u32 = 9;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PercentError {
  #[error("Split percent {0} exceeds the total of {} units", TOTAL_UNITS)]
  OutOfRange(u32),
}

/// A fraction of a whole expressed in parts per [`TOTAL_UNITS`].
///
/// The value is always within `0..=TOTAL_UNITS`, this is checked
/// on construction and when deserializing.
#[derive(
  Debug,
  Default,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  PartialOrd,
  Ord,
  Serialize,
  Deserialize,
)]
#[serde(try_from = "u32", into = "u32")]
pub struct SplitPercent(u32);

impl SplitPercent {
  pub const ZERO: SplitPercent = SplitPercent(0);
  pub const FULL: SplitPercent = SplitPercent(TOTAL_UNITS);

  pub fn new(units: u32) -> Result<Self, PercentError> {
    match units <= TOTAL_UNITS {
      true => Ok(Self(units)),
      false => Err(PercentError::OutOfRange(units)),
    }
  }

  pub fn units(&self) -> u32 {
    self.0
  }

  /// The share of `amount` this percent entitles to, rounded down.
  ///
  /// Never overflows: the whole part of `amount / TOTAL_UNITS` is scaled
  /// first and the remainder, which is below `TOTAL_UNITS`, separately.
  pub fn of(&self, amount: u128) -> u128 {
    let total = TOTAL_UNITS as u128;
    let units = self.0 as u128;
    (amount / total) * units + (amount % total) * units / total
  }

  /// Exact decimal fraction of the whole, `0.5` for half.
  pub fn as_fraction(&self) -> String {
    fmt_fixed(self.0 as u128, TOTAL_UNITS_DECIMALS)
  }
}

impl TryFrom<u32> for SplitPercent {
  type Error = PercentError;

  fn try_from(value: u32) -> Result<Self, Self::Error> {
    Self::new(value)
  }
}

impl From<SplitPercent> for u32 {
  fn from(p: SplitPercent) -> Self {
    p.0
  }
}

impl Display for SplitPercent {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_fraction())
  }
}

/// A percentage-based allocation of a distributable amount.
///
/// When `project_id` is set, the share is paid into that project instead
/// of the beneficiary, and when `allocator` is set it is handed to the
/// allocator contract. Both are carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Split {
  pub beneficiary: Address,
  pub percent: SplitPercent,

  #[serde(default)]
  pub prefer_claimed: bool,

  /// Unix timestamp until which the split cannot be changed, 0 if unlocked.
  #[serde(default)]
  pub locked_until: u64,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub project_id: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub allocator: Option<Address>,
}

impl Split {
  pub fn new(beneficiary: impl Into<Address>, percent: SplitPercent) -> Self {
    Self {
      beneficiary: beneficiary.into(),
      percent,
      prefer_claimed: false,
      locked_until: 0,
      project_id: None,
      allocator: None,
    }
  }
}

/// The distribution a group of splits applies to.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SplitGroup {
  /// ETH paid out of the project balance.
  Payouts,

  /// Project tokens set aside from every issuance.
  ReservedTokens,
}

impl SplitGroup {
  /// Numeric group identifier used by the splits store contract.
  pub fn id(&self) -> u64 {
    match self {
      SplitGroup::Payouts => 1,
      SplitGroup::ReservedTokens => 2,
    }
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      SplitGroup::Payouts => "payouts",
      SplitGroup::ReservedTokens => "reserved-tokens",
    }
  }
}

impl Display for SplitGroup {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.write_str(self.as_str())
  }
}
