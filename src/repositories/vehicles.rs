use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Collection, Database};

use crate::models::vehicles::Vehicle;

pub const VEHICLES_COLLECTION: &str = "vehicles";

fn collection(db: &Database) -> Collection<Vehicle> {
    db.collection(VEHICLES_COLLECTION)
}

/// Inserts a new vehicle document and returns it with the generated id.
pub async fn insert_vehicle(
    db: &Database,
    mut vehicle: Vehicle,
) -> mongodb::error::Result<Vehicle> {
    let result = collection(db).insert_one(&vehicle).await?;
    vehicle.id = result.inserted_id.as_object_id();
    Ok(vehicle)
}

/// Loads all vehicle documents.
pub async fn load_all_vehicles(db: &Database) -> mongodb::error::Result<Vec<Vehicle>> {
    collection(db).find(doc! {}).await?.try_collect().await
}

/// Finds a vehicle by its id.
pub async fn find_vehicle_by_id(
    db: &Database,
    id: ObjectId,
) -> mongodb::error::Result<Option<Vehicle>> {
    collection(db).find_one(doc! { "_id": id }).await
}

/// Deletes a vehicle document by its id, returning how many were removed.
pub async fn delete_vehicle_by_id(db: &Database, id: ObjectId) -> mongodb::error::Result<u64> {
    let result = collection(db).delete_one(doc! { "_id": id }).await?;
    Ok(result.deleted_count)
}
