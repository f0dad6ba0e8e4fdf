use {
  serde::{Deserialize, Serialize},
  std::{
    convert::Infallible,
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
};

/// Identifies the recipient of funds or tokens.
///
/// This is usually a wallet or contract address as read from chain, but
/// it is treated as an opaque identifier and never validated here. Splits
/// that redirect to another project or to a custom allocator still carry
/// a beneficiary, it is just not the one that ends up holding the funds.
#[derive(
  Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
  pub fn new(value: impl Into<String>) -> Self {
    Self(value.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl AsRef<str> for Address {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl Deref for Address {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.0)
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address({})", self.0)
  }
}

impl From<Address> for String {
  fn from(addr: Address) -> Self {
    addr.0
  }
}

impl From<&str> for Address {
  fn from(value: &str) -> Self {
    Self(value.to_owned())
  }
}

impl From<String> for Address {
  fn from(value: String) -> Self {
    Self(value)
  }
}

impl FromStr for Address {
  type Err = Infallible;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self(s.to_owned()))
  }
}
