/// Attributes of a starship as parsed from the import feed.
///
/// Two records describe the same catalog row when every field matches.
#[derive(Clone, Debug, PartialEq)]
pub struct NewStarship {
    pub starship_class: String,
    pub manufacturer: String,
    pub length: f64,
    pub hyperdrive_rating: f64,
    pub cargo_capacity: i64,
    pub crew: i32,
    pub passengers: i32,
}
