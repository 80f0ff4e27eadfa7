use actix_web::{web, HttpResponse};
use chrono::Utc;
use log::info;
use mongodb::Database;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::handlers::vehicles::parse_object_id;
use crate::models::reservations::{NewReservation, Reservation};
use crate::repositories::reservations::{
    insert_reservation, load_all_reservations, load_reservations_for_vehicle,
};
use crate::repositories::vehicles::find_vehicle_by_id;
use crate::requests::query::ReservationsQuery;

/// GET /api/reservations
/// Lists reservations, optionally filtered by `?vehicle_id=<hex id>`.
pub async fn list_reservations(
    db: web::Data<Database>,
    query: web::Query<ReservationsQuery>,
) -> Result<HttpResponse, ApiError> {
    let reservations = match &query.vehicle_id {
        Some(raw) => {
            let vehicle_id = parse_object_id(raw)?;
            load_reservations_for_vehicle(&db, vehicle_id).await?
        }
        None => load_all_reservations(&db).await?,
    };

    Ok(HttpResponse::Ok().json(reservations))
}

/// POST /api/reservations
/// Books a vehicle for a date range and returns the reservation together
/// with its confirmation code.
pub async fn create_reservation(
    db: web::Data<Database>,
    body: web::Json<NewReservation>,
) -> Result<HttpResponse, ApiError> {
    let body = body.into_inner();

    if body.customer_name.trim().is_empty() {
        return Err(ApiError::BadRequest("customer_name is required".to_string()));
    }
    if body.end_date <= body.start_date {
        return Err(ApiError::BadRequest(
            "end_date must be after start_date".to_string(),
        ));
    }

    let vehicle_id = parse_object_id(&body.vehicle_id)?;
    find_vehicle_by_id(&db, vehicle_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("vehicle {} not found", vehicle_id)))?;

    let reservation = Reservation {
        id: None,
        vehicle_id,
        customer_name: body.customer_name,
        start_date: body.start_date,
        end_date: body.end_date,
        confirmation_code: Uuid::new_v4().to_string(),
        created_at: Utc::now(),
    };

    let reservation = insert_reservation(&db, reservation).await?;
    info!(
        "created reservation {} for vehicle {}",
        reservation.confirmation_code, vehicle_id
    );

    Ok(HttpResponse::Ok().json(reservation))
}
