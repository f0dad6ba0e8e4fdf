mod address;
mod allocation;
mod math;
mod split;
mod tier;

pub use {
  address::Address,
  allocation::ResolvedAllocation,
  math::{fmt_fixed, mul_div},
  split::{PercentError, Split, SplitGroup, SplitPercent, TOTAL_UNITS},
  tier::RewardTier,
};
