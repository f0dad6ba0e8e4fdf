use {thiserror::Error, treasury_primitives::mul_div};

pub const SECONDS_PER_DAY: u64 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Maximum lock duration must be greater than zero")]
  ZeroMaxLock,

  #[error("Lock of {remaining}s exceeds the maximum lock of {max}s")]
  LockTooLong { remaining: u64, max: u64 },

  #[error("Voting power overflows")]
  Overflow,
}

/// Voting weight of `tokens` staked with `lock_remaining` seconds left
/// out of a maximum lock of `max_lock` seconds:
///
/// `tokens * lock_remaining / max_lock`, rounded down.
///
/// Power decays linearly as the lock runs out, a stake half way through
/// a maximum lock carries half the power.
pub fn voting_power(
  tokens: u128,
  lock_remaining: u64,
  max_lock: u64,
) -> Result<u128, Error> {
  if max_lock == 0 {
    return Err(Error::ZeroMaxLock);
  }
  if lock_remaining > max_lock {
    return Err(Error::LockTooLong {
      remaining: lock_remaining,
      max: max_lock,
    });
  }

  mul_div(tokens, lock_remaining as u128, max_lock as u128)
    .ok_or(Error::Overflow)
}

/// Lock duration in days, for display.
pub fn lock_days(seconds: u64) -> f64 {
  seconds as f64 / SECONDS_PER_DAY as f64
}

#[cfg(test)]
mod tests {
  use super::{lock_days, voting_power, Error, SECONDS_PER_DAY};

  #[test]
  fn power_decays_linearly() -> anyhow::Result<()> {
    let max = 20 * SECONDS_PER_DAY;
    assert_eq!(voting_power(200, max, max)?, 200);
    assert_eq!(voting_power(200, max / 2, max)?, 100);
    assert_eq!(voting_power(200, 5 * SECONDS_PER_DAY, max)?, 50);
    assert_eq!(voting_power(200, 0, max)?, 0);
    Ok(())
  }

  #[test]
  fn invalid_locks() {
    assert_eq!(voting_power(1, 0, 0), Err(Error::ZeroMaxLock));
    assert_eq!(
      voting_power(1, 11, 10),
      Err(Error::LockTooLong {
        remaining: 11,
        max: 10
      })
    );
  }

  #[test]
  fn days() {
    assert_eq!(lock_days(864_000), 10.0);
    assert_eq!(lock_days(43_200), 0.5);
  }
}
