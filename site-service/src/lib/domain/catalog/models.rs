use uuid::Uuid;

/// Offering listed in the public services catalog.
///
/// Catalog entries are maintained directly in the database; the API only
/// reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOffering {
    pub id: Uuid,
    pub service: String,
    pub description: String,
    pub price: String,
    pub provider: String,
}
