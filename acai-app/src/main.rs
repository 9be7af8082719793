use acai_app::{seed, Config, Session};
use acai_core::TracingNotifier;
use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;

    let default_filter = config
        .logging
        .filter
        .clone()
        .unwrap_or_else(|| "acai_app=debug,acai_catalog=debug,acai_core=info".into());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rules = &config.business_rules;
    let session = if config.seed.load_mock_data {
        tracing::info!("Loading sample catalogue");
        Session::seeded(TracingNotifier, rules)?
    } else {
        Session::new(TracingNotifier, rules)
    };

    let summary = session.summary();
    tracing::info!(
        products = summary.product_count,
        average_margin = summary.average_margin,
        most_profitable = summary
            .most_profitable
            .as_ref()
            .map(|top| top.name.as_str())
            .unwrap_or("N/A"),
        "Products"
    );
    for product in session.price_list().products() {
        tracing::info!(
            name = %product.name,
            unit_cost = product.unit_cost(),
            sale_price = product.sale_price(),
            profit = product.profit(),
            margin = product.margin_percentage(),
            tier = ?session.tier_of(product),
            "product"
        );
    }

    for product in session.cost_book().products() {
        tracing::info!(
            name = %product.name,
            cost_lines = product.cost_lines().len(),
            unit_cost = product.unit_cost(),
            "costed product"
        );
    }

    if config.seed.load_mock_data {
        let dashboard = seed::sample_dashboard()?;
        let report = serde_json::to_string_pretty(&dashboard.to_report())?;
        tracing::info!("Dashboard report:\n{}", report);
    }

    Ok(())
}
