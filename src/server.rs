use actix_web::{App, HttpServer};
use std::env;
use std::error::Error;

use panchangam::config;

use crate::routes;

/// Starts the HTTP server on the given port.
pub async fn http_server() -> Result<(), Box<dyn Error>> {
    config::init();

    let host = env::var("SERVER_HOST").unwrap_or_else(|_| String::from("127.0.0.1"));
    let port = env::var("SERVER_PORT")
        .unwrap_or_else(|_| String::from("8080"))
        .parse::<u16>()
        .expect("PORT must be a valid number");

    tracing::info!(%host, %port, "starting server");

    HttpServer::new(move || App::new().configure(routes::init))
        .bind((host, port))?
        .run()
        .await?;

    Ok(())
}
