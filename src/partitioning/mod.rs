pub mod segregate;
pub mod sort_colors;

use crate::error::{Result, TwoPointerError};

/// Rejects the first element `>= limit` before any mutation happens.
pub(crate) fn check_domain(arr: &[u8], limit: u8, allowed: &'static str) -> Result<()> {
    match arr.iter().position(|&v| v >= limit) {
        Some(index) => Err(TwoPointerError::InvalidValue { index, value: arr[index], allowed }),
        None => Ok(()),
    }
}
