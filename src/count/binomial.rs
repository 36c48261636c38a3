use num_bigint::BigUint;
use num_traits::One;

use crate::error::{CountError, Result};

/// Computes `C(n, k)` exactly.
///
/// Accumulates `result * (n - i + 1) / i` for `i` in `1..=k`. The product is
/// always divisible by `i` at that step, so the multiply has to come first.
pub fn binomial(n: u64, k: u64) -> Result<BigUint> {
    if k > n {
        return Err(CountError::ChooseOutOfRange { n, k });
    }
    if k == 0 || k == n {
        return Ok(BigUint::one());
    }

    let k = k.min(n - k);
    tracing::trace!(n, k, "accumulating binomial coefficient");

    let mut result = BigUint::one();
    for i in 1..=k {
        result *= n - i + 1;
        result /= i;
    }

    Ok(result)
}
