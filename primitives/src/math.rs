const LOW_64: u128 = u64::MAX as u128;

/// Full 256-bit product of two 128-bit values as `(high, low)` halves.
fn widening_mul(a: u128, b: u128) -> (u128, u128) {
  let (a_hi, a_lo) = (a >> 64, a & LOW_64);
  let (b_hi, b_lo) = (b >> 64, b & LOW_64);

  let lo_lo = a_lo * b_lo;
  let lo_hi = a_lo * b_hi;
  let hi_lo = a_hi * b_lo;
  let hi_hi = a_hi * b_hi;

  // sum of three values below 2^64 each, cannot overflow
  let mid = (lo_lo >> 64) + (lo_hi & LOW_64) + (hi_lo & LOW_64);
  let low = (lo_lo & LOW_64) | (mid << 64);
  let high = hi_hi + (lo_hi >> 64) + (hi_lo >> 64) + (mid >> 64);
  (high, low)
}

/// Computes `floor(a * b / denom)` exactly, the product is carried in
/// 256 bits so no intermediate value can overflow.
///
/// Returns `None` only when `denom` is zero or the quotient itself does
/// not fit in a `u128`.
pub fn mul_div(a: u128, b: u128, denom: u128) -> Option<u128> {
  if denom == 0 {
    return None;
  }

  let (high, low) = widening_mul(a, b);
  if high >= denom {
    return None;
  }

  // shift-subtract long division, `rem < denom` holds between steps
  let mut rem = high;
  let mut quotient = 0u128;
  for bit in (0..128).rev() {
    let carry = rem >> 127;
    rem = (rem << 1) | ((low >> bit) & 1);
    quotient <<= 1;
    if carry == 1 || rem >= denom {
      rem = rem.wrapping_sub(denom);
      quotient |= 1;
    }
  }
  Some(quotient)
}

/// Renders a fixed-point integer with `decimals` implied decimal places
/// as an exact decimal string. Trailing zeros of the fractional part are
/// dropped, and so is the decimal point when nothing is left after it.
///
/// `fmt_fixed(500_000_000, 9)` gives `"0.5"`, `fmt_fixed(3 * 10^18, 18)`
/// gives `"3"`. `decimals` must not exceed 38.
pub fn fmt_fixed(value: u128, decimals: u32) -> String {
  if decimals == 0 {
    return value.to_string();
  }

  let scale = 10u128.pow(decimals);
  let int = value / scale;
  let frac = value % scale;
  if frac == 0 {
    return int.to_string();
  }

  let frac = format!("{:0width$}", frac, width = decimals as usize);
  format!("{int}.{}", frac.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
  use super::{fmt_fixed, mul_div, widening_mul};

  #[test]
  fn mul_div_exact_floor() {
    assert_eq!(mul_div(100, 500_000_000, 1_000_000_000), Some(50));
    assert_eq!(mul_div(7, 1, 3), Some(2));
    assert_eq!(mul_div(0, 5, 3), Some(0));
    assert_eq!(mul_div(5, 3, 0), None);
  }

  #[test]
  fn mul_div_avoids_intermediate_overflow() {
    // a * b alone is far above u128::MAX
    let a = u128::MAX / 2;
    assert_eq!(mul_div(a, 1_000_000_000, 1_000_000_000), Some(a));
    assert_eq!(mul_div(a, 3, 1), None);
  }

  #[test]
  fn mul_div_large_remainders() {
    const WAD: u128 = 1_000_000_000_000_000_000;
    // (a % denom) * b alone overflows 128 bits here
    let weight = 1_000_000 * WAD + WAD / 2;
    assert_eq!(
      mul_div(weight, 1_000 * WAD, WAD),
      Some(1_000_000_500 * WAD)
    );
    let big = u128::MAX / WAD;
    assert_eq!(mul_div(WAD - 1, big, WAD - 1), Some(big));

    let max = u128::MAX;
    assert_eq!(mul_div(max, max, max), Some(max));
    assert_eq!(mul_div(max, max - 1, max), Some(max - 1));
    assert_eq!(mul_div(u128::MAX, 2, 2), Some(u128::MAX));
    assert_eq!(mul_div(1 << 127, 4, 2), None);
  }

  #[test]
  fn widening_product_halves() {
    assert_eq!(widening_mul(0, u128::MAX), (0, 0));
    assert_eq!(widening_mul(1 << 64, 1 << 64), (1, 0));
    assert_eq!(widening_mul(u128::MAX, u128::MAX), (u128::MAX - 1, 1));
    assert_eq!(widening_mul(u128::MAX, 2), (1, u128::MAX - 1));
  }

  #[test]
  fn fixed_point_rendering() {
    assert_eq!(fmt_fixed(500_000_000, 9), "0.5");
    assert_eq!(fmt_fixed(1, 9), "0.000000001");
    assert_eq!(fmt_fixed(1_000_000_000, 9), "1");
    assert_eq!(fmt_fixed(333_333_333, 9), "0.333333333");
    assert_eq!(fmt_fixed(0, 9), "0");
    assert_eq!(fmt_fixed(1_250_000_000_000_000_000, 18), "1.25");
    assert_eq!(fmt_fixed(42, 0), "42");
  }
}
