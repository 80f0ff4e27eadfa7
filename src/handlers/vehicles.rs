use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use mongodb::Database;

use crate::errors::ApiError;
use crate::models::vehicles::{NewVehicle, Vehicle};
use crate::repositories::vehicles::{
    delete_vehicle_by_id, find_vehicle_by_id, insert_vehicle, load_all_vehicles,
};
use crate::storage::ImageStorage;

/// GET /api/vehicles
/// Returns the whole catalog.
pub async fn list_vehicles(db: web::Data<Database>) -> Result<HttpResponse, ApiError> {
    let vehicles = load_all_vehicles(&db).await?;
    Ok(HttpResponse::Ok().json(vehicles))
}

/// POST /api/vehicles
/// Creates a catalog entry; `image_path` is the relative path previously
/// returned by the upload endpoint.
pub async fn create_vehicle(
    db: web::Data<Database>,
    body: web::Json<NewVehicle>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    if body.make.trim().is_empty() || body.model.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "make and model are required".to_string(),
        ));
    }
    if body.price_per_day <= 0.0 {
        return Err(ApiError::BadRequest(
            "price_per_day must be positive".to_string(),
        ));
    }

    let vehicle = Vehicle {
        id: None,
        make: body.make,
        model: body.model,
        year: body.year,
        price_per_day: body.price_per_day,
        image_path: body.image_path,
        created_at: Utc::now(),
    };

    let vehicle = insert_vehicle(&db, vehicle).await?;
    info!("created vehicle {} {}", vehicle.make, vehicle.model);

    Ok(HttpResponse::Ok().json(vehicle))
}

/// GET /api/vehicles/{id}
pub async fn get_vehicle(
    db: web::Data<Database>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&id)?;
    let vehicle = find_vehicle_by_id(&db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("vehicle {} not found", id)))?;

    Ok(HttpResponse::Ok().json(vehicle))
}

/// DELETE /api/vehicles/{id}
/// Removes the vehicle document and its stored image, if it has one.
pub async fn delete_vehicle(
    db: web::Data<Database>,
    storage: web::Data<ImageStorage>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = parse_object_id(&id)?;
    let vehicle = find_vehicle_by_id(&db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("vehicle {} not found", id)))?;

    if let Some(image_path) = &vehicle.image_path {
        if let Some(file_name) = image_path.rsplit('/').next() {
            // The document is going away either way; a leftover image is
            // only worth a warning.
            if let Err(e) = storage.delete_image(file_name) {
                warn!("could not remove image for vehicle {}: {}", id, e);
            }
        }
    }

    delete_vehicle_by_id(&db, id).await?;
    info!("deleted vehicle {}", id);

    Ok(HttpResponse::Ok().json("Vehicle deleted successfully"))
}

/// Parses the hex ObjectId from a path segment.
pub fn parse_object_id(raw: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("invalid id: {}", raw)))
}
