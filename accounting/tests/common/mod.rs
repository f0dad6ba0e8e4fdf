use {
  rand::{rngs::StdRng, Rng, SeedableRng},
  treasury_primitives::{RewardTier, Split, SplitPercent, TOTAL_UNITS},
};

/// Deterministic rng so failures are reproducible.
pub fn rng() -> StdRng {
  StdRng::seed_from_u64(0x5eed)
}

pub fn tier(name: &str, floor: f64) -> RewardTier {
  RewardTier::new(name, floor)
}

pub fn split(beneficiary: &str, units: u32) -> Split {
  Split::new(beneficiary, SplitPercent::new(units).expect("valid percent"))
}

/// Random tier set with floors drawn from a small pool so that
/// ties are frequent.
pub fn random_tiers(rng: &mut StdRng) -> Vec<RewardTier> {
  const FLOORS: [f64; 6] = [0.0, 0.05, 0.1, 1.0, 2.5, 10.0];
  let count = rng.gen_range(0..12);
  (0..count)
    .map(|i| tier(&format!("tier-{i}"), FLOORS[rng.gen_range(0..FLOORS.len())]))
    .collect()
}

/// Random split group whose percents never exceed the total.
pub fn random_splits(rng: &mut StdRng) -> Vec<Split> {
  let mut budget = TOTAL_UNITS;
  let count = rng.gen_range(0..8);
  let mut splits = Vec::with_capacity(count);
  for i in 0..count {
    let units = rng.gen_range(0..=budget);
    budget -= units;
    splits.push(split(&format!("0x{i:040x}"), units));
  }

  // sometimes hand out everything that's left
  if rng.gen_bool(0.3) && budget > 0 {
    splits.push(split("0xfull", budget));
  }
  splits
}
