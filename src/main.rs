use actix_web::{web, App, HttpServer};

use car_rental::config::Config;
use car_rental::database;
use car_rental::handlers;
use car_rental::storage::ImageStorage;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    dotenv::dotenv().ok();

    let config = Config::from_env();
    let db = database::connect(&config)
        .await
        .map_err(|e| std::io::Error::other(format!("database connection failed: {}", e)))?;
    let storage = ImageStorage::new(&config.upload_dir, &config.public_image_prefix);
    let bind_addr = config.bind_addr.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(web::Data::new(storage.clone()))
            .service(
                web::scope("/api/vehicles")
                    .route("", web::get().to(handlers::vehicles::list_vehicles))
                    .route("", web::post().to(handlers::vehicles::create_vehicle))
                    .route("/{id}", web::get().to(handlers::vehicles::get_vehicle))
                    .route("/{id}", web::delete().to(handlers::vehicles::delete_vehicle)),
            )
            .service(
                web::scope("/api/reservations")
                    .route("", web::get().to(handlers::reservations::list_reservations))
                    .route(
                        "",
                        web::post().to(handlers::reservations::create_reservation),
                    ),
            )
            .route("/api/uploads", web::post().to(handlers::uploads::upload_image))
            .route(
                "/images/autos/{name}",
                web::get().to(handlers::uploads::serve_image),
            )
    })
    .bind(bind_addr.as_str())?
    .run()
    .await
}
