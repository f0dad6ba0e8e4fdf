use {
  std::cmp::Ordering,
  thiserror::Error,
  tracing::debug,
  treasury_primitives::RewardTier,
};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
  #[error("Contribution must be a finite non-negative amount, got {0}")]
  InvalidAmount(f64),

  #[error("Tier {name:?} has an invalid contribution floor {floor}")]
  InvalidFloor { name: String, floor: f64 },
}

/// Ordering key of a tier. `-0.0` and `0.0` compare equal under `<=`,
/// so they must also share a position in the canonical order.
fn floor_key(tier: &RewardTier) -> f64 {
  match tier.contribution_floor == 0.0 {
    true => 0.0,
    false => tier.contribution_floor,
  }
}

/// Tiers in ascending order of their contribution floor. Tiers with equal
/// floors keep their relative input order.
fn canonical_order(tiers: &[RewardTier]) -> Vec<&RewardTier> {
  let mut ordered: Vec<_> = tiers.iter().collect();
  ordered.sort_by(|a, b| floor_key(a).total_cmp(&floor_key(b)));
  ordered
}

/// Returns a copy of `tiers` sorted by contribution floor, lowest first.
///
/// The sort is stable, tiers sharing a floor stay in the order they were
/// given in. The input is left untouched so the same tier set can be
/// reused across resolutions.
pub fn sort_tiers(tiers: &[RewardTier]) -> Vec<RewardTier> {
  canonical_order(tiers).into_iter().cloned().collect()
}

/// Finds the single reward tier a contribution of `amount` qualifies for.
///
/// A tier is eligible when its floor is at or below the amount, and out of
/// all eligible tiers only the one with the highest floor is awarded. When
/// several eligible tiers share that floor, the first one in the order
/// returned by [`sort_tiers`] wins, which is the first one in input order.
///
/// Returns `Ok(None)` when no tier is eligible, including when `tiers`
/// is empty. Fails when the amount or any tier floor is negative, NaN
/// or infinite.
pub fn resolve_tier(
  tiers: &[RewardTier],
  amount: f64,
) -> Result<Option<&RewardTier>, Error> {
  if !amount.is_finite() || amount < 0.0 {
    return Err(Error::InvalidAmount(amount));
  }

  let invalid = tiers
    .iter()
    .find(|t| !t.contribution_floor.is_finite() || t.contribution_floor < 0.0);
  if let Some(tier) = invalid {
    return Err(Error::InvalidFloor {
      name: tier.name.clone(),
      floor: tier.contribution_floor,
    });
  }

  let mut awarded: Option<&RewardTier> = None;
  let eligible = canonical_order(tiers)
    .into_iter()
    .filter(|tier| tier.contribution_floor <= amount);

  for tier in eligible {
    match awarded {
      Some(current)
        if floor_key(tier).total_cmp(&floor_key(current))
          != Ordering::Greater => {}
      _ => awarded = Some(tier),
    }
  }

  match awarded {
    Some(tier) => debug!(
      "contribution of {amount} qualifies for tier {:?} (floor {})",
      tier.name, tier.contribution_floor
    ),
    None => debug!("contribution of {amount} qualifies for no reward tier"),
  }

  Ok(awarded)
}

/// Whether a contribution of `amount` earns any reward at all.
pub fn is_eligible(tiers: &[RewardTier], amount: f64) -> Result<bool, Error> {
  Ok(resolve_tier(tiers, amount)?.is_some())
}

/// Extracts the IPFS content identifier from a tier token URI stored on
/// chain in the `ipfs/<cid>` form.
///
/// The CID is the second `/` separated segment. URIs without one yield
/// `None`.
pub fn cid_of_token_uri(uri: &str) -> Option<&str> {
  uri.split('/').nth(1).filter(|cid| !cid.is_empty())
}

/// CIDs of all token URIs that carry one, in input order.
pub fn tier_cids<'a>(uris: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
  uris.into_iter().filter_map(cid_of_token_uri).collect()
}

#[cfg(test)]
mod tests {
  use {
    super::{cid_of_token_uri, resolve_tier, sort_tiers, tier_cids, Error},
    treasury_primitives::RewardTier,
  };

  fn tiers() -> Vec<RewardTier> {
    vec![
      RewardTier::new("Popcorn Banny", 0.1),
      RewardTier::new("Penguin", 1.0),
      RewardTier::new("Astronaut", 10.0),
    ]
  }

  #[test]
  fn resolves_highest_eligible_tier() -> anyhow::Result<()> {
    let tiers = tiers();

    let tier = resolve_tier(&tiers, 0.5)?.map(|t| t.name.as_str());
    assert_eq!(tier, Some("Popcorn Banny"));

    let tier = resolve_tier(&tiers, 15.0)?.map(|t| t.name.as_str());
    assert_eq!(tier, Some("Astronaut"));

    assert_eq!(resolve_tier(&tiers, 0.05)?, None);
    Ok(())
  }

  #[test]
  fn floor_is_inclusive() -> anyhow::Result<()> {
    let tiers = tiers();
    let tier = resolve_tier(&tiers, 1.0)?.map(|t| t.name.as_str());
    assert_eq!(tier, Some("Penguin"));
    Ok(())
  }

  #[test]
  fn order_of_input_does_not_matter() -> anyhow::Result<()> {
    let mut reversed = tiers();
    reversed.reverse();
    let tier = resolve_tier(&reversed, 3.0)?.map(|t| t.name.as_str());
    assert_eq!(tier, Some("Penguin"));
    Ok(())
  }

  #[test]
  fn empty_tiers_resolve_to_none() -> anyhow::Result<()> {
    assert_eq!(resolve_tier(&[], 100.0)?, None);
    Ok(())
  }

  #[test]
  fn rejects_invalid_amounts() {
    let tiers = tiers();
    assert_eq!(resolve_tier(&tiers, -1.0), Err(Error::InvalidAmount(-1.0)));
    assert!(resolve_tier(&tiers, f64::NAN).is_err());
    assert!(resolve_tier(&tiers, f64::INFINITY).is_err());
  }

  #[test]
  fn rejects_out_of_range_floors() {
    for floor in [-0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
      let mut tiers = tiers();
      tiers.push(RewardTier::new("broken", floor));

      match resolve_tier(&tiers, 5.0) {
        Err(Error::InvalidFloor { name, floor: got }) => {
          assert_eq!(name, "broken");
          assert_eq!(got.to_bits(), floor.to_bits());
        }
        other => panic!("expected an invalid floor error, got {other:?}"),
      }
    }
  }

  #[test]
  fn signed_zero_floors_tie_in_input_order() -> anyhow::Result<()> {
    let tiers = vec![RewardTier::new("neg", -0.0), RewardTier::new("pos", 0.0)];
    let tier = resolve_tier(&tiers, 0.0)?.map(|t| t.name.as_str());
    assert_eq!(tier, Some("neg"));

    let names: Vec<_> =
      sort_tiers(&tiers).into_iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["neg", "pos"]);

    let reversed: Vec<_> = tiers.iter().rev().cloned().collect();
    let tier = resolve_tier(&reversed, 0.0)?.map(|t| t.name.as_str());
    assert_eq!(tier, Some("pos"));
    Ok(())
  }

  #[test]
  fn sort_is_stable_and_leaves_input_alone() {
    let input = vec![
      RewardTier::new("b1", 2.0),
      RewardTier::new("a", 1.0),
      RewardTier::new("b2", 2.0),
      RewardTier::new("zero", 0.0),
    ];
    let sorted = sort_tiers(&input);

    let names: Vec<_> = sorted.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["zero", "a", "b1", "b2"]);
    assert_eq!(input[0].name, "b1");
  }

  #[test]
  fn token_uri_cids() {
    assert_eq!(cid_of_token_uri("ipfs/QmAbc"), Some("QmAbc"));
    assert_eq!(cid_of_token_uri("ipfs/"), None);
    assert_eq!(cid_of_token_uri("QmAbc"), None);
    assert_eq!(
      tier_cids(["ipfs/Qm1", "broken", "ipfs/Qm2"]),
      vec!["Qm1", "Qm2"]
    );
  }
}
