use serde::{Deserialize, Serialize};

/// A chemical product as known to the data store.
///
/// Products are shared between users; a watch-list entry only references one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier (UUID v4 text for products created by this app).
    pub id: String,
    pub name: String,
    /// Location of the product's Safety Data Sheet PDF, if one is known.
    pub sds_url: Option<String>,
}
