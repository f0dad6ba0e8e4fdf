use {thiserror::Error, tracing::debug, treasury_primitives::mul_div};

/// Fixed-point scale of ETH amounts and funding cycle weights.
pub const WAD: u128 = 1_000_000_000_000_000_000;

/// Reserved rate denominator, a reserved rate of this value withholds
/// every issued token from the payer.
pub const MAX_RESERVED_RATE: u16 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  #[error("Reserved rate {0} exceeds the maximum of {}", MAX_RESERVED_RATE)]
  InvalidReservedRate(u16),

  #[error("Token issuance overflows for the given weight and amount")]
  Overflow,
}

/// Number of project tokens (18 decimals) a payer receives for paying
/// `amount` wei into a funding cycle with the given `weight`.
///
/// The cycle mints `weight` tokens per whole ETH, of which the
/// `reserved_rate` share is set aside for reserved token splits and the
/// rest goes to the payer. Rounds down at every step.
pub fn payer_tokens(
  weight: u128,
  reserved_rate: u16,
  amount: u128,
) -> Result<u128, Error> {
  if reserved_rate > MAX_RESERVED_RATE {
    return Err(Error::InvalidReservedRate(reserved_rate));
  }

  let minted = mul_div(weight, amount, WAD).ok_or(Error::Overflow)?;
  let payer_share = (MAX_RESERVED_RATE - reserved_rate) as u128;
  let tokens = mul_div(minted, payer_share, MAX_RESERVED_RATE as u128)
    .ok_or(Error::Overflow)?;

  debug!("{amount} wei mints {minted} tokens, {tokens} of them to the payer");
  Ok(tokens)
}
