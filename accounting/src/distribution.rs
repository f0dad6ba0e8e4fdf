/// Amount that can be paid out right now: what is left of the cycle's
/// distribution limit, capped by the balance actually held.
///
/// Zero means there is nothing to distribute.
pub fn distributable(limit: u128, used: u128, balance: u128) -> u128 {
  limit.saturating_sub(used).min(balance)
}
