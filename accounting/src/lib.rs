mod distribution;
mod export;
mod issuance;
mod rewards;
mod splits;
mod voting;

pub use {
  distribution::distributable,
  export::{export_filename, to_csv, to_rows, ProjectRef, Quoting, CSV_HEADER},
  issuance::{
    payer_tokens,
    Error as IssuanceError,
    MAX_RESERVED_RATE,
    WAD,
  },
  rewards::{
    cid_of_token_uri,
    is_eligible,
    resolve_tier,
    sort_tiers,
    tier_cids,
    Error as RewardError,
  },
  splits::{declared_total, expand, owner_remainder, Error as SplitError},
  voting::{lock_days, voting_power, Error as VotingError, SECONDS_PER_DAY},
};
