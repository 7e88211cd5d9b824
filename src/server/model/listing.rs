/// Activation state of a listing, derived from its `listing_time` counter.
///
/// The counter is what gets persisted; this is the view code should branch on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListingState {
    /// Visible in the listing index.
    Active { listing_time: i32 },
    /// Hidden from the index but still addressable by ID.
    Inactive,
}

impl ListingState {
    pub fn from_listing_time(listing_time: i32) -> Self {
        if listing_time > 0 {
            Self::Active { listing_time }
        } else {
            Self::Inactive
        }
    }

    /// The counter value that represents this state.
    pub fn listing_time(&self) -> i32 {
        match self {
            Self::Active { listing_time } => *listing_time,
            Self::Inactive => 0,
        }
    }
}

/// A validated listing ready to be inserted, with its starship already resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewListing {
    pub name: String,
    pub ship_type: i32,
    pub price: i64,
    pub state: ListingState,
}

/// Validated field changes for an existing listing, `None` leaves a field untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListingChanges {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub state: Option<ListingState>,
}

impl ListingChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.state.is_none()
    }
}
