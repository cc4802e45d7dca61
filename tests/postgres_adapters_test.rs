mod common;

use return_notifications::adapters::postgres::{
    PostgresContractorDirectory, PostgresMessageFormatter, PostgresRecipientSettings,
    PostgresStatusCatalog,
};
use return_notifications::domain::{ContractorId, ContractorRole, GOODS_RETURN_PERMIT, StatusId};
use return_notifications::ports::{
    ContractorDirectory, MessageFormatter, MessageParams, RecipientSettings, StatusCatalog,
};
use serial_test::serial;
use sqlx::PgPool;

const RESELLER: i64 = 9001;
const CLIENT: i64 = 9002;
const EMPLOYEE: i64 = 9003;

/// Reset and seed the rows these tests own
async fn seed(pool: &PgPool) {
    for statement in [
        "DELETE FROM reseller_permitted_emails WHERE reseller_id = 9001",
        "DELETE FROM reseller_mail_settings WHERE reseller_id = 9001",
        "DELETE FROM message_templates WHERE key = 'testGreeting'",
        "DELETE FROM contractors WHERE id IN (9002, 9003)",
        "DELETE FROM contractors WHERE id = 9001",
        "INSERT INTO contractors (id, name, role) VALUES (9001, 'Acme', 'seller')",
        "INSERT INTO contractors (id, name, role, reseller_id, email, mobile) \
         VALUES (9002, 'Jane', 'customer', 9001, 'jane@example.test', '+15550100')",
        "INSERT INTO contractors (id, name, role) VALUES (9003, 'Carl', 'employee')",
        "INSERT INTO reseller_mail_settings (reseller_id, sender_email) \
         VALUES (9001, 'returns@acme.test')",
        "INSERT INTO reseller_permitted_emails (reseller_id, permit, email) VALUES \
         (9001, 'tsGoodsReturn', 'staff@acme.test'), \
         (9001, 'tsGoodsReturn', 'lead@acme.test'), \
         (9001, 'otherPermit', 'other@acme.test')",
        "INSERT INTO message_templates (key, reseller_id, template) VALUES \
         ('testGreeting', 0, 'Hello {NAME}'), \
         ('testGreeting', 9001, 'Welcome to Acme, {NAME}')",
    ] {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to seed test data");
    }
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_contractor_directory_filters_by_role() {
    let pool = common::create_test_pool().await;
    seed(&pool).await;
    let directory = PostgresContractorDirectory::new(pool.clone());

    let client = directory
        .find_by_id(ContractorRole::Customer, ContractorId::new(CLIENT))
        .await
        .expect("Failed to find client")
        .expect("client exists");
    assert_eq!(client.name, "Jane");
    assert_eq!(client.reseller_id, Some(ContractorId::new(RESELLER)));
    assert_eq!(client.contact_mobile(), Some("+15550100"));

    let as_employee = directory
        .find_by_id(ContractorRole::Employee, ContractorId::new(CLIENT))
        .await
        .expect("Failed to query");
    assert!(as_employee.is_none());

    let employee = directory
        .find_by_id(ContractorRole::Employee, ContractorId::new(EMPLOYEE))
        .await
        .expect("Failed to query");
    assert!(employee.is_some());
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_status_catalog_has_reference_statuses() {
    let pool = common::create_test_pool().await;
    let catalog = PostgresStatusCatalog::new(pool);

    let pending = catalog
        .find_by_id(StatusId::new(1))
        .await
        .expect("Failed to query")
        .expect("status exists");
    assert_eq!(pending.name, "Pending");

    let missing = catalog
        .find_by_id(StatusId::new(-1))
        .await
        .expect("Failed to query");
    assert!(missing.is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_recipient_settings_scope_by_permit() {
    let pool = common::create_test_pool().await;
    seed(&pool).await;
    let settings = PostgresRecipientSettings::new(pool);
    let reseller = ContractorId::new(RESELLER);

    let sender = settings
        .sender_email(reseller)
        .await
        .expect("Failed to query");
    assert_eq!(sender.as_deref(), Some("returns@acme.test"));

    let emails = settings
        .permitted_emails(reseller, GOODS_RETURN_PERMIT)
        .await
        .expect("Failed to query");
    assert_eq!(emails, vec!["lead@acme.test", "staff@acme.test"]);

    let none = settings
        .sender_email(ContractorId::new(CLIENT))
        .await
        .expect("Failed to query");
    assert!(none.is_none());
}

#[tokio::test]
#[serial]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn test_message_formatter_prefers_reseller_template() {
    let pool = common::create_test_pool().await;
    seed(&pool).await;
    let formatter = PostgresMessageFormatter::new(pool);
    let params = MessageParams::from([("NAME".to_string(), "Jane".to_string())]);

    let own = formatter
        .render("testGreeting", Some(&params), ContractorId::new(RESELLER))
        .await
        .expect("Failed to render");
    assert_eq!(own, "Welcome to Acme, Jane");

    let fallback = formatter
        .render("testGreeting", Some(&params), ContractorId::new(CLIENT))
        .await
        .expect("Failed to render");
    assert_eq!(fallback, "Hello Jane");

    let unknown = formatter
        .render("noSuchKey", None, ContractorId::new(RESELLER))
        .await
        .expect("Failed to render");
    assert_eq!(unknown, "noSuchKey");
}
