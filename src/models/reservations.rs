use chrono::{DateTime, NaiveDate, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub vehicle_id: ObjectId,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Opaque code handed to the customer, generated at booking time.
    pub confirmation_code: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /api/reservations. The vehicle id arrives as the
/// hex string form of an ObjectId.
#[derive(Debug, Deserialize)]
pub struct NewReservation {
    pub vehicle_id: String,
    pub customer_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
