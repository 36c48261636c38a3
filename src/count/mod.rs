pub mod binomial;
pub mod total;
