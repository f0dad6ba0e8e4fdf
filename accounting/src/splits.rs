use {
  thiserror::Error,
  tracing::{debug, warn},
  treasury_primitives::{
    Address,
    ResolvedAllocation,
    Split,
    SplitPercent,
    TOTAL_UNITS,
  },
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error(
    "Split percents add up to {0} units, more than the total of {}",
    TOTAL_UNITS
  )]
  PercentOverflow(u64),
}

/// Sum of all split percents in units of [`TOTAL_UNITS`].
pub fn declared_total(splits: &[Split]) -> u64 {
  splits.iter().map(|s| s.percent.units() as u64).sum()
}

/// The split implicitly owed to the project owner when the configured
/// splits add up to less than 100%.
///
/// Returns `None` when nothing is left over. Fails when the splits
/// claim more than 100%, that configuration is never clamped.
pub fn owner_remainder(
  splits: &[Split],
  owner: &Address,
) -> Result<Option<Split>, Error> {
  let declared = declared_total(splits);
  let remainder = (TOTAL_UNITS as u64)
    .checked_sub(declared)
    .ok_or(Error::PercentOverflow(declared))?;

  if remainder == 0 {
    return Ok(None);
  }

  // remainder is at most TOTAL_UNITS here, so it is a valid percent.
  let percent = SplitPercent::new(remainder as u32)
    .map_err(|_| Error::PercentOverflow(declared))?;

  Ok(Some(Split::new(owner.clone(), percent)))
}

/// Resolves a split configuration against the amount being distributed.
///
/// Every split gets `floor(total_amount * percent / TOTAL_UNITS)`. If the
/// splits don't cover the whole, the project owner's remainder is
/// appended as the last allocation so the table always adds up to 100%
/// of intent. Amounts lost to rounding down stay undistributed.
pub fn expand(
  splits: &[Split],
  total_amount: u128,
  owner: &Address,
) -> Result<Vec<ResolvedAllocation>, Error> {
  let remainder = match owner_remainder(splits, owner) {
    Ok(remainder) => remainder,
    Err(e) => {
      warn!("refusing to expand splits: {e}");
      return Err(e);
    }
  };

  let allocations: Vec<_> = splits
    .iter()
    .chain(remainder.iter())
    .map(|split| ResolvedAllocation::new(split, split.percent.of(total_amount)))
    .collect();

  if let Some(owner_split) = remainder {
    debug!(
      "owner {} receives the remaining {} of the distribution",
      owner_split.beneficiary, owner_split.percent
    );
  }

  let allocated: u128 = allocations.iter().map(|a| a.amount).sum();
  if allocated < total_amount {
    debug!(
      "{} of {total_amount} units left undistributed after rounding",
      total_amount - allocated
    );
  }

  Ok(allocations)
}
