use dotenv::dotenv;
use env_logger::Env;

mod api;
mod config;
mod errors;
mod middleware;
mod models;
mod server;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = config::Config::from_env();

    server::run(config).await
}
