use serde::{Deserialize, Serialize};

/// An NFT reward granted to payers contributing at least
/// `contribution_floor` in a single payment.
///
/// Tiers are mutually exclusive, a payer only receives the highest
/// tier their contribution qualifies for. Everything except the floor
/// is display metadata read from IPFS and is carried through as is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardTier {
  pub name: String,

  /// Minimum contribution, in ETH, required to qualify for this tier.
  pub contribution_floor: f64,

  /// Cap on the number of rewards that can be issued, `None` when
  /// unbounded. Not enforced off-chain.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub max_supply: Option<u64>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub external_link: Option<String>,

  /// Token URI as stored on chain, usually `ipfs/<cid>`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub token_uri: Option<String>,
}

impl RewardTier {
  pub fn new(name: impl Into<String>, contribution_floor: f64) -> Self {
    Self {
      name: name.into(),
      contribution_floor,
      max_supply: None,
      description: None,
      image_url: None,
      external_link: None,
      token_uri: None,
    }
  }

  pub fn with_max_supply(self, max_supply: u64) -> Self {
    Self {
      max_supply: Some(max_supply),
      ..self
    }
  }
}
