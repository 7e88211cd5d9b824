
use super::*;

use sea_orm::{EntityTrait, PaginatorTrait};
use shiptrader_test_utils::prelude::*;

use crate::{
    model::listing::ListingOrdering,
    server::error::validation::ValidationError,
};

fn create_dto(name: &str, price: i64, starship_class: &str) -> CreateListingDto {
    CreateListingDto {
        name: name.to_string(),
        price,
        starship_class: starship_class.to_string(),
        listing_time: None,
    }
}

async fn listing_count(test: &TestContext) -> Result<u64, TestError> {
    Ok(entity::prelude::Listing::find().count(&test.db).await?)
}
