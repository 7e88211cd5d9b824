use serde::{
    de::{DeserializeOwned, IntoDeserializer},
    Deserialize, Deserializer, Serialize,
};
use utoipa::{IntoParams, ToSchema};

/// A sale listing as returned by the API
///
/// `ship_type` is the catalog ID of the listed starship. Listings are created with a
/// starship class name instead, see [`CreateListingDto`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ListingDto {
    pub id: i32,
    pub name: String,
    pub ship_type: i32,
    pub price: i64,
    pub listing_time: i32,
}

impl From<entity::listing::Model> for ListingDto {
    fn from(listing: entity::listing::Model) -> Self {
        Self {
            id: listing.id,
            name: listing.name,
            ship_type: listing.ship_type,
            price: listing.price,
            listing_time: listing.listing_time,
        }
    }
}

/// Request body for creating a listing
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateListingDto {
    pub name: String,
    pub price: i64,
    /// Class name of the starship being sold, resolved against the catalog
    pub starship_class: String,
    /// Activation counter, defaults to 1 (active)
    #[serde(default)]
    pub listing_time: Option<i32>,
}

/// Request body for updating a listing
///
/// Absent fields keep their current value. `starship_class` is accepted for symmetry with
/// [`CreateListingDto`] but never changes which starship a listing refers to.
#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateListingDto {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<i64>,
    /// `0` deactivates the listing, any positive value reactivates it
    #[serde(default)]
    pub listing_time: Option<i32>,
    #[serde(default)]
    pub starship_class: Option<String>,
}

/// Sort keys accepted by the listing index, a leading `-` sorts descending
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ListingOrdering {
    #[serde(rename = "price")]
    PriceAsc,
    #[serde(rename = "-price")]
    PriceDesc,
    #[serde(rename = "listing_time")]
    ListingTimeAsc,
    #[serde(rename = "-listing_time")]
    ListingTimeDesc,
}

/// Query parameters accepted by the listing index
#[derive(Clone, Debug, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingQueryParams {
    /// Sort order, insertion order when absent
    #[param(inline)]
    #[serde(default, deserialize_with = "empty_as_none")]
    pub ordering: Option<ListingOrdering>,
    /// Only return listings whose starship has exactly this class name
    #[serde(
        rename = "ship_type__starship_class",
        default,
        deserialize_with = "empty_as_none"
    )]
    pub starship_class: Option<String>,
}

/// An empty query value (`?ordering=`) means the parameter was not given.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Option::<String>::deserialize(deserializer)?.as_deref() {
        None | Some("") => Ok(None),
        Some(value) => T::deserialize(value.into_deserializer()).map(Some),
    }
}
