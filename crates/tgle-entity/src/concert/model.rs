//! Concert entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tgle_core::types::ConcertId;

/// A concert listing as published by a ticketing site.
///
/// Date-like fields are kept as the free-form strings the sites publish.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Concert {
    /// Unique concert identifier.
    pub concert_id: ConcertId,
    /// Genre/category reference.
    pub category_id: Option<i64>,
    /// Title.
    pub concert_name: String,
    /// Poster image URL.
    pub concert_img: Option<String>,
    /// Description.
    pub concert_info: Option<String>,
    /// Performance date(s).
    pub concert_date: Option<String>,
    /// When ticket sales open.
    pub ticketing_date: Option<String>,
    /// Where tickets are sold.
    pub ticketing_url: Option<String>,
    /// Calendar text.
    pub calender: Option<String>,
    /// Running time.
    pub play_time: Option<String>,
    /// Venue.
    pub location_name: Option<String>,
    /// Age rating.
    pub ratings: Option<String>,
    /// When the row was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new concert.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateConcert {
    pub category_id: Option<i64>,
    pub concert_name: String,
    pub concert_img: Option<String>,
    pub concert_info: Option<String>,
    pub concert_date: Option<String>,
    pub ticketing_date: Option<String>,
    pub ticketing_url: Option<String>,
    pub calender: Option<String>,
    pub play_time: Option<String>,
    pub location_name: Option<String>,
    pub ratings: Option<String>,
}

impl CreateConcert {
    /// Build the stored row from this input.
    pub fn into_concert(self, concert_id: ConcertId, created_at: DateTime<Utc>) -> Concert {
        Concert {
            concert_id,
            category_id: self.category_id,
            concert_name: self.concert_name,
            concert_img: self.concert_img,
            concert_info: self.concert_info,
            concert_date: self.concert_date,
            ticketing_date: self.ticketing_date,
            ticketing_url: self.ticketing_url,
            calender: self.calender,
            play_time: self.play_time,
            location_name: self.location_name,
            ratings: self.ratings,
            created_at,
        }
    }
}
