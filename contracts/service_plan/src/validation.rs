use crate::error::Error;

/// Check plan terms before they are published.
///
/// A zero period would make every payment due immediately; a negative price
/// cannot be settled by a token transfer.
pub fn validate_plan(period: u64, price: i128) -> Result<(), Error> {
    if period == 0 {
        return Err(Error::InvalidPeriod);
    }
    if price < 0 {
        return Err(Error::InvalidPrice);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_plan() {
        assert_eq!(validate_plan(30 * 86_400, 100_000_000), Ok(()));
    }

    #[test]
    fn test_free_plan_is_valid() {
        assert_eq!(validate_plan(86_400, 0), Ok(()));
    }

    #[test]
    fn test_zero_period() {
        assert_eq!(validate_plan(0, 100), Err(Error::InvalidPeriod));
    }

    #[test]
    fn test_negative_price() {
        assert_eq!(validate_plan(86_400, -1), Err(Error::InvalidPrice));
    }
}
