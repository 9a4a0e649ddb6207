#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use estimate_schedule::{ScheduleOptions, http_api, logging};

    logging::init("info");

    let addr: SocketAddr = std::env::var("ESTIMATE_SCHEDULE_HTTP_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()?;

    let defaults = match std::env::var("ESTIMATE_SCHEDULE_OPTIONS") {
        Ok(path) => ScheduleOptions::from_json_file(path)?,
        Err(_) => ScheduleOptions::default(),
    };

    println!("estimate-schedule HTTP API listening on http://{addr}");
    http_api::serve(addr, defaults).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
