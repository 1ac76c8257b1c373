//! Image domain entity

use uuid::Uuid;

use crate::shared::unix_now;

/// Classification tag stored in the `type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Stylist,
}

impl ImageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stylist => "stylist",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "stylist" => Some(Self::Stylist),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: String,
    pub kind: ImageKind,
    /// Opaque public URL returned by the media uploader
    pub url: String,
    pub stylist_id: String,
    pub created_at: i64,
}

impl Image {
    pub fn new_stylist_image(url: impl Into<String>, stylist_id: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: ImageKind::Stylist,
            url: url.into(),
            stylist_id: stylist_id.into(),
            created_at: unix_now(),
        }
    }
}
