use super::{ContractorDirectory, RecipientSettings};
use crate::domain::{Contractor, ContractorId, GOODS_RETURN_PERMIT};

pub const DEMO_RESELLER_ID: i64 = 1;
pub const DEMO_CLIENT_ID: i64 = 7;
pub const DEMO_CREATOR_ID: i64 = 3;
pub const DEMO_EXPERT_ID: i64 = 4;

pub const DEMO_SENDER_EMAIL: &str = "returns@demo-reseller.test";
pub const DEMO_STAFF_EMAIL: &str = "staff@demo-reseller.test";

/// Seed the in-memory collaborators used when no database is configured
///
/// Reseller 1 owns client 7 (reachable by email and SMS). Employees 3 and 4
/// act as creator and expert, and one staff address holds the goods-return
/// permit.
pub fn seed_demo_data(directory: &ContractorDirectory, settings: &RecipientSettings) {
    directory.add(Contractor::seller(DEMO_RESELLER_ID, "Demo Reseller"));
    directory.add(
        Contractor::customer(DEMO_CLIENT_ID, "Dana Client", DEMO_RESELLER_ID)
            .with_email("client@demo.test")
            .with_mobile("+15550100"),
    );
    directory.add(Contractor::employee(DEMO_CREATOR_ID, "Carl Creator"));
    directory.add(Contractor::employee(DEMO_EXPERT_ID, "Erin Expert"));

    let reseller_id = ContractorId::new(DEMO_RESELLER_ID);
    settings.set_sender(reseller_id, DEMO_SENDER_EMAIL);
    settings.add_permitted(reseller_id, GOODS_RETURN_PERMIT, DEMO_STAFF_EMAIL);
}
