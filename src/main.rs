use return_notifications::{
    adapters::mock::{
        ContractorDirectory as MockContractorDirectory, EmailTransport as MockEmailTransport,
        MessageFormatter as MockMessageFormatter, RecipientSettings as MockRecipientSettings,
        SmsTransport as MockSmsTransport, StatusCatalog as MockStatusCatalog, seed_demo_data,
    },
    adapters::postgres::{
        PostgresContractorDirectory, PostgresMessageFormatter, PostgresRecipientSettings,
        PostgresStatusCatalog,
    },
    api::{handlers::AppState, router::create_router},
    application::return_status::ServiceDependencies,
    config::Config,
};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "return_notifications=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load()?;

    // Email and SMS delivery are simulated in every mode
    let email_transport = Arc::new(MockEmailTransport::new());
    let sms_transport = Arc::new(MockSmsTransport::new());

    let service_deps = match &config.database_url {
        Some(database_url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .connect(database_url)
                .await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Connected to database");

            ServiceDependencies {
                contractor_directory: Arc::new(PostgresContractorDirectory::new(pool.clone())),
                status_catalog: Arc::new(PostgresStatusCatalog::new(pool.clone())),
                recipient_settings: Arc::new(PostgresRecipientSettings::new(pool.clone())),
                message_formatter: Arc::new(PostgresMessageFormatter::new(pool)),
                email_transport,
                sms_transport,
            }
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory adapters with demo data");

            let contractor_directory = MockContractorDirectory::new();
            let recipient_settings = MockRecipientSettings::new();
            seed_demo_data(&contractor_directory, &recipient_settings);

            ServiceDependencies {
                contractor_directory: Arc::new(contractor_directory),
                status_catalog: Arc::new(MockStatusCatalog::with_reference_statuses()),
                recipient_settings: Arc::new(recipient_settings),
                message_formatter: Arc::new(MockMessageFormatter::with_default_templates()),
                email_transport,
                sms_transport,
            }
        }
    };

    let app_state = Arc::new(AppState { service_deps });
    let app = create_router(app_state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
