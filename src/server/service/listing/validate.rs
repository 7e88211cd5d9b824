use crate::server::{
    error::validation::ValidationError,
    model::listing::ListingState,
};

/// Longest listing name accepted.
pub const MAX_NAME_LENGTH: usize = 255;

pub fn name(name: String) -> Result<String, ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyField { field: "name" });
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name",
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(name)
}

pub fn price(price: i64) -> Result<i64, ValidationError> {
    if price < 0 {
        return Err(ValidationError::NegativeValue { field: "price" });
    }

    Ok(price)
}

/// Zero deactivates, anything positive is an active counter.
pub fn listing_time(listing_time: i32) -> Result<ListingState, ValidationError> {
    if listing_time < 0 {
        return Err(ValidationError::NegativeValue {
            field: "listing_time",
        });
    }

    Ok(ListingState::from_listing_time(listing_time))
}
