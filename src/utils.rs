use num_bigint::BigUint;
use num_traits::Zero;

pub fn count_digits(n: &BigUint) -> usize {
    if n.is_zero() {
        return 1;
    }
    n.to_str_radix(10).len()
}
