//! Stylist domain entities

use uuid::Uuid;

use crate::domain::{DomainError, DomainResult, Image};
use crate::shared::unix_now;

/// Stylist profile record, one per owning user.
#[derive(Debug, Clone, PartialEq)]
pub struct Stylist {
    pub id: String,
    /// Owning user (one-to-one)
    pub user_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Stylist {
    /// New profile for `user_id` with a generated id and both timestamps set to now.
    pub fn new(user_id: impl Into<String>) -> Self {
        let now = unix_now();
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }

    /// Decode a raw identifier into the store's canonical id form.
    ///
    /// Failure is an `InvalidId`, which callers surface as an internal error.
    pub fn decode_id(raw: &str) -> DomainResult<String> {
        Uuid::parse_str(raw)
            .map(|id| id.to_string())
            .map_err(|e| DomainError::InvalidId(format!("{raw:?}: {e}")))
    }
}

/// A priced offering, attached to a stylist by back-reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency_symbol: String,
    pub currency_name: String,
    pub stylist_id: String,
}

/// Service fields as submitted with a new profile, before the parent id exists.
#[derive(Debug, Clone, PartialEq)]
pub struct NewService {
    pub name: String,
    pub price: f64,
    pub currency_symbol: String,
    pub currency_name: String,
}

impl NewService {
    /// Tag this service with its parent stylist.
    pub fn attach_to(self, stylist_id: &str) -> Service {
        Service {
            id: Uuid::new_v4().to_string(),
            name: self.name,
            price: self.price,
            currency_symbol: self.currency_symbol,
            currency_name: self.currency_name,
            stylist_id: stylist_id.to_string(),
        }
    }
}

/// Read-time aggregate: the stylist record plus every child whose
/// back-reference equals its id.
#[derive(Debug, Clone)]
pub struct StylistProfile {
    pub stylist: Stylist,
    pub services: Vec<Service>,
    pub images: Vec<Image>,
}

impl StylistProfile {
    /// Splice independently loaded children onto the root.
    ///
    /// Children whose back-reference does not match are dropped.
    pub fn assemble(stylist: Stylist, services: Vec<Service>, images: Vec<Image>) -> Self {
        let services = services
            .into_iter()
            .filter(|s| s.stylist_id == stylist.id)
            .collect();
        let images = images
            .into_iter()
            .filter(|i| i.stylist_id == stylist.id)
            .collect();
        Self {
            stylist,
            services,
            images,
        }
    }
}
