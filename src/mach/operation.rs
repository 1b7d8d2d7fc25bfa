use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Fixed-width unsigned arithmetic. Add, subtract and multiply wrap.
pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.wrapping_add(rhs))
    }

    pub fn subtract(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.wrapping_sub(rhs))
    }

    pub fn multiply(lhs: Val, rhs: Val) -> Result<Val> {
        Ok(lhs.wrapping_mul(rhs))
    }

    pub fn divide(lhs: Val, rhs: Val) -> Result<Val> {
        match lhs.checked_div(rhs) {
            Some(n) => Ok(n),
            None => Err(error!(DivisionByZero)),
        }
    }
}
