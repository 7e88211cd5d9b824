
use super::*;

use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder};
use shiptrader_test_utils::{
    constant::{TEST_FEED_PATH, TEST_USER_AGENT},
    prelude::*,
};

fn http_client() -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(TEST_USER_AGENT)
        .build()
        .expect("failed to build HTTP client")
}

async fn starships(test: &TestContext) -> Result<Vec<StarshipModel>, TestError> {
    Ok(entity::prelude::Starship::find()
        .order_by_asc(entity::starship::Column::Id)
        .all(&test.db)
        .await?)
}

async fn starship_count(test: &TestContext) -> Result<u64, TestError> {
    Ok(entity::prelude::Starship::find().count(&test.db).await?)
}
