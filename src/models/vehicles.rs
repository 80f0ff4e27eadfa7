use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: f64,
    /// Public relative path returned by the upload endpoint, e.g.
    /// `/images/autos/my-car-1-1700000000000.png`.
    pub image_path: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Request body for POST /api/vehicles.
#[derive(Debug, Deserialize)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub price_per_day: f64,
    pub image_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vehicle_survives_a_bson_round_trip() {
        let vehicle = Vehicle {
            id: None,
            make: "Skoda".to_string(),
            model: "Octavia".to_string(),
            year: 2021,
            price_per_day: 45.0,
            image_path: Some("/images/autos/skoda-octavia-1700000000000.jpg".to_string()),
            created_at: Utc::now(),
        };

        let doc = mongodb::bson::to_document(&vehicle).expect("to bson");
        assert!(doc.get("_id").is_none(), "unset id must not be serialized");

        let back: Vehicle = mongodb::bson::from_document(doc).expect("from bson");
        assert_eq!(back.make, "Skoda");
        assert_eq!(back.image_path, vehicle.image_path);
    }
}
