use {
  crate::settings::{
    Command,
    IssuanceSettings,
    SplitSettings,
    SystemSettings,
    TierSettings,
    VotingSettings,
  },
  anyhow::Context,
  clap::Parser,
  serde::de::DeserializeOwned,
  std::{fs, path::Path},
  tracing::info,
  tracing_subscriber::EnvFilter,
  treasury_accounting::{
    expand,
    export_filename,
    lock_days,
    payer_tokens,
    resolve_tier,
    sort_tiers,
    to_csv,
    to_rows,
    voting_power,
  },
  treasury_primitives::{fmt_fixed, RewardTier, Split, SplitGroup},
};

mod settings;

fn load<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
  let bytes = fs::read(path)
    .with_context(|| format!("reading {}", path.display()))?;
  serde_json::from_slice(&bytes)
    .with_context(|| format!("decoding {}", path.display()))
}

fn tier(opts: &TierSettings) -> anyhow::Result<()> {
  let tiers: Vec<RewardTier> = load(&opts.tiers)?;
  info!("loaded {} reward tiers", tiers.len());

  if opts.list {
    for tier in sort_tiers(&tiers) {
      println!("{}\t{}", tier.contribution_floor, tier.name);
    }
  }

  match resolve_tier(&tiers, opts.amount)? {
    Some(tier) => println!("{}", serde_json::to_string_pretty(tier)?),
    None => println!("none"),
  }
  Ok(())
}

fn splits(opts: &SplitSettings) -> anyhow::Result<()> {
  let splits: Vec<Split> = load(&opts.splits)?;
  let group: SplitGroup = opts.group.into();
  info!("loaded {} {group} splits", splits.len());

  let allocations = expand(&splits, opts.total, &opts.owner())
    .with_context(|| format!("expanding {}", opts.splits.display()))?;

  info!(
    "suggested export file name: {}.csv",
    export_filename(&opts.project(), group, opts.funding_cycle)
  );

  print!("{}", to_csv(&to_rows(&allocations), opts.quoting()));
  Ok(())
}

fn issuance(opts: &IssuanceSettings) -> anyhow::Result<()> {
  let tokens = payer_tokens(opts.weight, opts.reserved_rate, opts.amount)?;
  info!(
    "paying {} ETH at reserved rate {}",
    fmt_fixed(opts.amount, 18),
    opts.reserved_rate
  );
  println!("{}", fmt_fixed(tokens, 18));
  Ok(())
}

fn voting(opts: &VotingSettings) -> anyhow::Result<()> {
  let power = voting_power(opts.tokens, opts.remaining, opts.max_lock)?;
  info!(
    "{} tokens locked for {} of {} days",
    opts.tokens,
    lock_days(opts.remaining),
    lock_days(opts.max_lock)
  );
  println!("{power}");
  Ok(())
}

fn main() -> anyhow::Result<()> {
  // logs go to stderr so that stdout stays a clean CSV/JSON stream
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let opts = SystemSettings::parse();
  info!("Treasury options: {opts:?}");

  match &opts.command {
    Command::Tier(opts) => tier(opts),
    Command::Splits(opts) => splits(opts),
    Command::Issuance(opts) => issuance(opts),
    Command::Voting(opts) => voting(opts),
  }
}
