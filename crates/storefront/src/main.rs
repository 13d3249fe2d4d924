//! Shopfront demo - drives one shopping session against the mock services.
//!
//! Restores or creates a session with the demo account, loads the catalog,
//! searches it, fills a cart and checks out, logging each step. Configuration
//! comes from the environment (see `shopfront::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::process::ExitCode;

use secrecy::ExposeSecret;
use tracing::{error, info};

use shopfront::config::StorefrontConfig;
use shopfront::error::AppError;
use shopfront::flows::{cart, catalog, checkout, search::SearchDebouncer, session};
use shopfront::forms::LoginForm;
use shopfront::routes::Route;
use shopfront::state::AppState;
use shopfront::telemetry;

#[tokio::main]
#[allow(clippy::print_stderr)]
async fn main() -> ExitCode {
    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Sentry first, so the tracing layer has a client to forward to
    let _sentry_guard = telemetry::init(&config.telemetry);

    let state = AppState::new(config);
    match run(&state).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            e.report();
            error!(message = %e.user_message(), "Demo session failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(state: &AppState) -> Result<(), AppError> {
    if session::hydrate(state)?.is_none() {
        let demo = &state.config().demo_account;
        let form = LoginForm::new(demo.email.clone(), demo.password.expose_secret());
        session::login(state, &form).await?;
    }
    info!(route = %state.resolve(Route::Root).route(), "Signed in");

    catalog::load(state).await?;
    state.read(|s| {
        let range = s.catalog.pagination().range();
        info!(
            first = range.first,
            last = range.last,
            total = range.total,
            categories = ?s.catalog.available_categories(),
            "Catalog ready"
        );
    });

    let search = SearchDebouncer::new(state.clone());
    if let Err(e) = search.input("shirt").await {
        error!(error = %e, "Search task failed");
    }
    for product in catalog::visible_products(state) {
        info!(id = %product.id, title = %product.title, price = %product.price, "Match");
        cart::add_to_cart(state, product);
    }
    search.clear();
    catalog::clear_filters(state);

    if let Some(product) = catalog::visible_products(state).into_iter().next() {
        let id = product.id;
        cart::add_to_cart(state, product);
        cart::update_quantity(state, id, 2)?;
    }

    let summary = checkout::summary(state);
    info!(
        items = summary.item_count,
        subtotal = %summary.subtotal,
        tax = %summary.tax,
        total = %summary.total,
        currency = summary.total.currency_code.code(),
        "Checkout summary"
    );

    let receipt = checkout::place_order(state).await?;
    info!(
        order_id = %receipt.confirmation.order_id,
        redirect = %receipt.redirect,
        "{}",
        receipt.notice
    );

    session::logout(state)?;
    Ok(())
}
