use marketdata_admin::prelude::*;
use std::env;
use std::error::Error;

// Usage: toggle_interval <configuration-id> <interval> <on|off>
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let args: Vec<String> = env::args().skip(1).collect();
    let [id, interval, state] = args.as_slice() else {
        error!("Usage: toggle_interval <configuration-id> <1m|5m|15m|1h|4h|1d> <on|off>");
        return Ok(());
    };
    let interval: Interval = interval.parse()?;
    let is_active = state == "on";

    let client = Client::new(Config::new())?;
    if !client.auth().is_authenticated() {
        warn!("No stored session, set MARKETDATA_SESSION_FILE and run list_catalog first");
        return Ok(());
    }

    let response = client
        .market_data()
        .toggle_interval(id, interval, is_active)
        .await?;
    info!(
        "{}",
        response
            .message
            .unwrap_or_else(|| format!("{interval} set to {state} for {id}"))
    );

    if let Some(config) = client
        .market_data()
        .get_configuration_by_id(id)
        .await?
        .into_data()
    {
        info!("Now collecting: {}", serde_json::to_string(&config.active_intervals())?);
    }

    Ok(())
}
