use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::Result;
use dotenvy::dotenv;
use octofit::{
    config::config::Config,
    core::server::create_server,
    database::{
        connect::{connect_database, run_migrations},
        seed::seed_sample_data,
    },
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    dotenv().ok();

    let config = Config::load_envs().expect("Failed to load envs");

    // `octofit seed` wipes and repopulates the database, then exits.
    if env::args().nth(1).as_deref() == Some("seed") {
        let db_conn = connect_database(config).await?;
        run_migrations(&db_conn).await?;
        seed_sample_data(&db_conn).await?;
        return Ok(());
    }

    let port: u16 = config.port;
    let server_ip_str: String = config.server_ip.clone();
    let server_ip: IpAddr = server_ip_str.parse().unwrap_or(IpAddr::from([0, 0, 0, 0]));
    let addr = SocketAddr::new(server_ip, port);
    let (server, _db_conn) = create_server(config).await?;

    let server = axum_server::bind(addr).serve(server.into_make_service());
    info!("Server starting on {}", addr);

    if let Err(e) = server.await {
        error!("Server failed: {}", e);
    }

    Ok(())
}
