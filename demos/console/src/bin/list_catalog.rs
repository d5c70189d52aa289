use marketdata_admin::prelude::*;
use std::env;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_logger();

    let cfg = Config::new();
    info!("Loaded config → {}", cfg.rest_api.base_url);
    let client = Client::new(cfg)?;

    if !client.auth().is_authenticated() {
        let email = env::var("MARKETDATA_ADMIN_EMAIL").unwrap_or_default();
        let password = env::var("MARKETDATA_ADMIN_PASSWORD").unwrap_or_default();
        info!("Logging in as {}...", email);
        match client.auth().login(&email, &password).await {
            Ok(data) => info!(
                "✅ Authentication successful. Admin: {}",
                data.user.is_some_and(|u| u.is_system_admin)
            ),
            Err(e) => {
                error!("Authentication failed: {e}");
                return Err(Box::new(e) as Box<dyn Error>);
            }
        }
    } else {
        info!("Reusing stored session");
    }

    let symbols = client.symbols().get_all_symbols().await?.data_or_default();
    info!("{} symbol(s) in the catalog", symbols.len());
    for symbol in &symbols {
        info!(
            "{:<12} {}/{} active={}",
            symbol.symbol, symbol.base_asset, symbol.quote_asset, symbol.is_active
        );
    }

    let configurations = client
        .market_data()
        .get_all_configurations()
        .await?
        .data_or_default();
    for config in &configurations {
        let intervals: Vec<&str> = config
            .active_intervals()
            .iter()
            .map(Interval::as_str)
            .collect();
        info!(
            "{} on {}: [{}]",
            config.symbol_name.as_deref().unwrap_or(&config.symbol_id),
            config.exchange,
            intervals.join(", ")
        );
    }

    let unconfigured = available_symbols(&symbols, &configurations, DEFAULT_EXCHANGE);
    info!(
        "{} symbol(s) not yet configured on {}",
        unconfigured.len(),
        DEFAULT_EXCHANGE
    );

    Ok(())
}
