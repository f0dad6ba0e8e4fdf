use {
  clap::{Parser, Subcommand, ValueEnum},
  std::path::PathBuf,
  treasury_accounting::{ProjectRef, Quoting},
  treasury_primitives::{Address, SplitGroup},
};

/// Treasury accounting tools
///
/// Resolves NFT reward tiers, expands payout and reserved token splits
/// into allocation tables and computes issuance and voting figures shown
/// by the project pages.
#[derive(Debug, Parser)]
pub struct SystemSettings {
  #[clap(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Find the reward tier a contribution qualifies for
  Tier(TierSettings),

  /// Expand a split group and print it as CSV
  Splits(SplitSettings),

  /// Compute the project tokens a payer receives
  Issuance(IssuanceSettings),

  /// Compute the voting power of a staked position
  Voting(VotingSettings),
}

#[derive(Debug, Parser)]
pub struct TierSettings {
  /// JSON file with the list of reward tiers
  #[clap(long, short, value_name = "FILE")]
  pub tiers: PathBuf,

  /// Contribution in ETH
  #[clap(long, short, value_name = "ETH")]
  pub amount: f64,

  /// Also print all tiers in canonical order
  #[clap(long)]
  pub list: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupArg {
  Payouts,
  ReservedTokens,
}

impl From<GroupArg> for SplitGroup {
  fn from(g: GroupArg) -> Self {
    match g {
      GroupArg::Payouts => SplitGroup::Payouts,
      GroupArg::ReservedTokens => SplitGroup::ReservedTokens,
    }
  }
}

#[derive(Debug, Parser)]
pub struct SplitSettings {
  /// JSON file with the list of splits
  #[clap(long, short, value_name = "FILE")]
  pub splits: PathBuf,

  /// Amount being distributed, in its smallest unit
  #[clap(long, short = 'n', default_value = "0", value_name = "AMOUNT")]
  pub total: u128,

  /// Project owner receiving whatever the splits leave over
  #[clap(long, short, value_name = "ADDRESS")]
  owner: String,

  /// Which distribution the splits belong to
  #[clap(long, short, value_enum, default_value = "payouts")]
  pub group: GroupArg,

  /// Quote fields containing delimiters (RFC 4180)
  #[clap(long)]
  pub quote: bool,

  /// Project handle, used for the export file name
  #[clap(long, value_name = "HANDLE", conflicts_with = "project_id")]
  handle: Option<String>,

  /// Project id, used for the export file name when there is no handle
  #[clap(long, value_name = "ID", default_value = "0")]
  project_id: u64,

  /// Funding cycle number, used for the export file name
  #[clap(long, short = 'c', default_value = "1", value_name = "NUMBER")]
  pub funding_cycle: u64,
}

impl SplitSettings {
  pub fn owner(&self) -> Address {
    Address::new(self.owner.as_str())
  }

  pub fn quoting(&self) -> Quoting {
    match self.quote {
      true => Quoting::Rfc4180,
      false => Quoting::Never,
    }
  }

  pub fn project(&self) -> ProjectRef {
    match &self.handle {
      Some(handle) => ProjectRef::Handle(handle.clone()),
      None => ProjectRef::Id(self.project_id),
    }
  }
}

#[derive(Debug, Parser)]
pub struct IssuanceSettings {
  /// Funding cycle weight, tokens per ETH with 18 decimals
  #[clap(long, short, value_name = "WAD")]
  pub weight: u128,

  /// Reserved rate out of 10000
  #[clap(long, short, default_value = "0", value_name = "RATE")]
  pub reserved_rate: u16,

  /// Payment amount in wei
  #[clap(long, short, value_name = "WEI")]
  pub amount: u128,
}

#[derive(Debug, Parser)]
pub struct VotingSettings {
  /// Number of staked tokens
  #[clap(long, short, value_name = "TOKENS")]
  pub tokens: u128,

  /// Seconds left in the lock
  #[clap(long, short, value_name = "SECONDS")]
  pub remaining: u64,

  /// Longest lock duration allowed, in seconds
  #[clap(long, short, value_name = "SECONDS")]
  pub max_lock: u64,
}
