//! Request and response payloads exchanged between the browser client, the
//! backend, and the external SDS parsing service.

use crate::error::RegisterError;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/watch-list`.
///
/// Only `product_name` is required. Empty optional strings are treated as
/// absent. `vendor` is accepted because the form collects it, but it is not
/// stored: products have no vendor column and the inline snapshot never has
/// one, so vendor only ever comes from parsed SDS metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddChemicalRequest {
    pub product_name: String,
    #[serde(default)]
    pub sds_url: Option<String>,
    #[serde(default)]
    pub vendor: Option<String>,
    #[serde(default)]
    pub issue_date: Option<String>,
    #[serde(default)]
    pub hazardous: bool,
    #[serde(default)]
    pub dangerous_good: bool,
    #[serde(default)]
    pub dg_class: Option<String>,
    #[serde(default)]
    pub packing_group: Option<String>,
}

impl AddChemicalRequest {
    /// Trims every text field, turns blanks into `None`, and rejects a
    /// missing product name.
    pub fn validate(self) -> Result<Self, RegisterError> {
        let product_name = self.product_name.trim().to_string();
        if product_name.is_empty() {
            return Err(RegisterError::Validation(
                "Product name is required".to_string(),
            ));
        }
        Ok(Self {
            product_name,
            sds_url: non_blank(self.sds_url),
            vendor: non_blank(self.vendor),
            issue_date: non_blank(self.issue_date),
            hazardous: self.hazardous,
            dangerous_good: self.dangerous_good,
            dg_class: non_blank(self.dg_class),
            packing_group: non_blank(self.packing_group),
        })
    }
}

/// Response of a successful add.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddChemicalResponse {
    pub product_id: String,
    pub entry_id: i64,
    /// `false` when an existing product with the same name was reused.
    pub created_product: bool,
}

/// Body of `POST /api/update-sds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSdsRequest {
    pub product_id: String,
    #[serde(default)]
    pub pdf_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSdsResponse {
    pub success: bool,
}

/// Outbound body of `POST {backend}/parse-sds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSdsRequest {
    pub product_id: String,
}

/// Error body used by every API endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_blank_names() {
        let req = AddChemicalRequest {
            product_name: "   ".into(),
            ..Default::default()
        };
        assert!(matches!(req.validate(), Err(RegisterError::Validation(_))));
    }

    #[test]
    fn validate_trims_and_drops_blank_optionals() {
        let req = AddChemicalRequest {
            product_name: "  Acetone ".into(),
            sds_url: Some("".into()),
            dg_class: Some(" 3 ".into()),
            packing_group: Some("  ".into()),
            ..Default::default()
        };
        let req = req.validate().unwrap();
        assert_eq!(req.product_name, "Acetone");
        assert_eq!(req.sds_url, None);
        assert_eq!(req.dg_class.as_deref(), Some("3"));
        assert_eq!(req.packing_group, None);
    }

    #[test]
    fn add_request_uses_camel_case_and_defaults() {
        let req: AddChemicalRequest =
            serde_json::from_str(r#"{"productName":"Toluene","dangerousGood":true,"dgClass":"3"}"#)
                .unwrap();
        assert_eq!(req.product_name, "Toluene");
        assert!(req.dangerous_good);
        assert!(!req.hazardous);
        assert_eq!(req.dg_class.as_deref(), Some("3"));
        assert_eq!(req.sds_url, None);
    }

    #[test]
    fn update_request_accepts_a_missing_pdf_url() {
        let req: UpdateSdsRequest = serde_json::from_str(r#"{"productId":"p-1"}"#).unwrap();
        assert_eq!(req.product_id, "p-1");
        assert_eq!(req.pdf_url, None);
    }

    #[test]
    fn parse_request_is_snake_case() {
        let body = serde_json::to_string(&ParseSdsRequest {
            product_id: "p-1".into(),
        })
        .unwrap();
        assert_eq!(body, r#"{"product_id":"p-1"}"#);
    }
}
