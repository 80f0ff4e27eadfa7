use serde::Deserialize;

/// Query string for GET /api/reservations.
#[derive(Debug, Deserialize)]
pub struct ReservationsQuery {
    /// Restricts the listing to one vehicle (hex ObjectId).
    pub vehicle_id: Option<String>,
}
