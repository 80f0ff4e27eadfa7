use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::models::reservations::Reservation;

pub const RESERVATIONS_COLLECTION: &str = "reservations";

fn collection(db: &Database) -> Collection<Reservation> {
    db.collection(RESERVATIONS_COLLECTION)
}

/// Inserts a new reservation and returns it with the generated id.
pub async fn insert_reservation(
    db: &Database,
    mut reservation: Reservation,
) -> mongodb::error::Result<Reservation> {
    let result = collection(db).insert_one(&reservation).await?;
    reservation.id = result.inserted_id.as_object_id();
    Ok(reservation)
}

/// Loads all reservations.
pub async fn load_all_reservations(db: &Database) -> mongodb::error::Result<Vec<Reservation>> {
    collection(db).find(doc! {}).await?.try_collect().await
}

/// Loads the reservations booked against one vehicle.
pub async fn load_reservations_for_vehicle(
    db: &Database,
    vehicle_id: ObjectId,
) -> mongodb::error::Result<Vec<Reservation>> {
    collection(db)
        .find(doc! { "vehicle_id": vehicle_id })
        .await?
        .try_collect()
        .await
}
