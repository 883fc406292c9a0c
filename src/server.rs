use actix_web::middleware::from_fn;
use actix_web::{App, HttpServer};
use log::info;

use crate::api;
use crate::config::Config;
use crate::middleware::json_body;

// Brings the process from a resolved Config to a listening server: build the
// app, install the body parser, register the routes, bind, announce, serve.
pub async fn run(config: Config) -> std::io::Result<()> {
    let server = HttpServer::new(|| {
        App::new()
            .wrap(from_fn(json_body))
            .configure(api::config)
    })
    // The port string is bound verbatim; a value that does not name a port
    // surfaces here as the bind error.
    .bind(format!("0.0.0.0:{}", config.port))?;

    info!("Server is running on http://localhost:{}", config.port);

    server.run().await
}
