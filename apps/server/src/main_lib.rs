use std::sync::Arc;

use crate::config::Config;
use tither_core::{
    donations::{DonationService, DonationServiceTrait},
    donors::{DonorService, DonorServiceTrait},
    funds::{FundService, FundServiceTrait},
    ledger::{LedgerCalculator, LedgerService, LedgerServiceTrait},
    organizations::{OrganizationService, OrganizationServiceTrait},
};
use tither_storage_sqlite::{
    db, DonationRepository, DonorRepository, FundRepository, LedgerRepository,
    OrganizationRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub organization_service: Arc<dyn OrganizationServiceTrait>,
    pub fund_service: Arc<dyn FundServiceTrait>,
    pub donor_service: Arc<dyn DonorServiceTrait>,
    pub donation_service: Arc<dyn DonationServiceTrait>,
    pub ledger_service: Arc<dyn LedgerServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("TITHER_LOG_FORMAT").unwrap_or_else(|_| "json".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("text") {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    } else {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = db::spawn_writer(pool.clone());

    let organization_repository =
        Arc::new(OrganizationRepository::new(pool.clone(), writer.clone()));
    let fund_repository = Arc::new(FundRepository::new(pool.clone(), writer.clone()));
    let donor_repository = Arc::new(DonorRepository::new(pool.clone(), writer.clone()));
    let donation_repository = Arc::new(DonationRepository::new(pool.clone(), writer.clone()));
    let ledger_repository = Arc::new(LedgerRepository::new(pool.clone()));

    let fund_service: Arc<dyn FundServiceTrait> =
        Arc::new(FundService::new(fund_repository.clone()));
    let organization_service: Arc<dyn OrganizationServiceTrait> =
        Arc::new(OrganizationService::new(organization_repository.clone()));
    let donor_service: Arc<dyn DonorServiceTrait> =
        Arc::new(DonorService::new(donor_repository));
    let donation_service: Arc<dyn DonationServiceTrait> = Arc::new(DonationService::new(
        donation_repository,
        organization_repository,
        fund_repository,
    ));

    let calculator = LedgerCalculator::new(config.reporting_tz, config.donor_thresholds);
    let ledger_service: Arc<dyn LedgerServiceTrait> =
        Arc::new(LedgerService::new(ledger_repository, calculator));

    Ok(Arc::new(AppState {
        organization_service,
        fund_service,
        donor_service,
        donation_service,
        ledger_service,
    }))
}
