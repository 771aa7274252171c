//! Query filters for collection endpoints.
//!
//! A filter flattens to key/value query parameters; unset fields are omitted.

/// Filter for transaction listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterTransactions {
    /// e.g. `CREATED`, `SUCCEEDED`, `FAILED`.
    pub status: Option<String>,
    /// e.g. `PAYIN`, `PAYOUT`, `TRANSFER`.
    pub transaction_type: Option<String>,
    /// e.g. `REGULAR`, `REFUND`, `REPUDIATION`.
    pub nature: Option<String>,
    pub result_code: Option<String>,
    /// Unix timestamp, exclusive upper bound on creation date.
    pub before_date: Option<i64>,
    /// Unix timestamp, exclusive lower bound on creation date.
    pub after_date: Option<i64>,
}

impl FilterTransactions {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        push(&mut params, "Status", self.status.as_deref());
        push(&mut params, "Type", self.transaction_type.as_deref());
        push(&mut params, "Nature", self.nature.as_deref());
        push(&mut params, "ResultCode", self.result_code.as_deref());
        push_date(&mut params, "BeforeDate", self.before_date);
        push_date(&mut params, "AfterDate", self.after_date);
        params
    }
}

/// Filter for KYC document listings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterKycDocuments {
    /// e.g. `VALIDATION_ASKED`, `VALIDATED`, `REFUSED`.
    pub status: Option<String>,
    /// e.g. `IDENTITY_PROOF`, `ADDRESS_PROOF`.
    pub document_type: Option<String>,
    pub before_date: Option<i64>,
    pub after_date: Option<i64>,
}

impl FilterKycDocuments {
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        push(&mut params, "Status", self.status.as_deref());
        push(&mut params, "Type", self.document_type.as_deref());
        push_date(&mut params, "BeforeDate", self.before_date);
        push_date(&mut params, "AfterDate", self.after_date);
        params
    }
}

fn push(params: &mut Vec<(String, String)>, key: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        params.push((key.to_string(), value.to_string()));
    }
}

fn push_date(params: &mut Vec<(String, String)>, key: &str, value: Option<i64>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}
