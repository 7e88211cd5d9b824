use crate::TestContext;

pub mod data;
pub mod factory;
pub mod mockito;

impl TestContext {
    pub fn starship<'a>(&'a mut self) -> StarshipFixtures<'a> {
        StarshipFixtures { setup: self }
    }
}

pub struct StarshipFixtures<'a> {
    pub setup: &'a mut TestContext,
}
