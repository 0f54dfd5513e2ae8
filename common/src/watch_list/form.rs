//! State of the collapsible "Add Chemical" form.

use crate::error::RegisterError;
use crate::requests::AddChemicalRequest;

/// Values offered by the packing group selector.
pub const PACKING_GROUPS: [&str; 3] = ["I", "II", "III"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    ProductName,
    SdsUrl,
    Vendor,
    IssueDate,
    DgClass,
    PackingGroup,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddChemicalForm {
    pub open: bool,
    pub product_name: String,
    pub sds_url: String,
    pub vendor: String,
    pub issue_date: String,
    pub hazardous: bool,
    pub dangerous_good: bool,
    pub dg_class: String,
    pub packing_group: String,
}

impl AddChemicalForm {
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Collapses the form; typed values survive until the next reset.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::ProductName => &self.product_name,
            FormField::SdsUrl => &self.sds_url,
            FormField::Vendor => &self.vendor,
            FormField::IssueDate => &self.issue_date,
            FormField::DgClass => &self.dg_class,
            FormField::PackingGroup => &self.packing_group,
        }
    }

    pub fn set_field(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::ProductName => &mut self.product_name,
            FormField::SdsUrl => &mut self.sds_url,
            FormField::Vendor => &mut self.vendor,
            FormField::IssueDate => &mut self.issue_date,
            FormField::DgClass => &mut self.dg_class,
            FormField::PackingGroup => &mut self.packing_group,
        };
        *slot = value;
    }

    /// Builds a validated request. Fails without touching the network when
    /// the product name is blank.
    pub fn to_request(&self) -> Result<AddChemicalRequest, RegisterError> {
        AddChemicalRequest {
            product_name: self.product_name.clone(),
            sds_url: Some(self.sds_url.clone()),
            vendor: Some(self.vendor.clone()),
            issue_date: Some(self.issue_date.clone()),
            hazardous: self.hazardous,
            dangerous_good: self.dangerous_good,
            dg_class: Some(self.dg_class.clone()),
            packing_group: Some(self.packing_group.clone()),
        }
        .validate()
    }

    /// Clears every field and collapses the form.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
