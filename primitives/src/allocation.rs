use {
  crate::{Address, Split, SplitPercent},
  serde::{Deserialize, Serialize},
};

/// One line of a resolved distribution: a split together with the
/// absolute amount it receives out of the distributed total.
///
/// This is a derived value and never persisted. The project owner's
/// remainder shows up as a regular allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedAllocation {
  pub beneficiary: Address,
  pub percent: SplitPercent,

  /// Share of the total in its smallest unit, rounded down.
  pub amount: u128,

  pub prefer_claimed: bool,
  pub locked_until: u64,
  pub project_id: Option<u64>,
  pub allocator: Option<Address>,
}

impl ResolvedAllocation {
  pub fn new(split: &Split, amount: u128) -> Self {
    Self {
      beneficiary: split.beneficiary.clone(),
      percent: split.percent,
      amount,
      prefer_claimed: split.prefer_claimed,
      locked_until: split.locked_until,
      project_id: split.project_id,
      allocator: split.allocator.clone(),
    }
  }
}
