//! Wire types shared by the server and its clients.
//!
//! Field names are camelCase on the wire; that is the contract the existing
//! ops/portal frontends were built against.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod transaction_type {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionTypeNew {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionTypeUpdate {
        pub name: String,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionTypeView {
        pub id: String,
        pub name: String,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    /// Shortened reference shape used where only identity matters (for
    /// example inside by-activity listings).
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionTypeRef {
        pub id: String,
        pub name: String,
    }
}

pub mod activity {
    use super::*;
    use crate::sub_activity::SubActivityView;

    /// Create payload. Every field is required; absence is reported per
    /// field, which is why they are all optional at the serde layer.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ActivityNew {
        pub act_srl: Option<String>,
        pub activity_transaction_type: Option<String>,
        pub activity_name_en: Option<String>,
        pub activity_name_ar: Option<String>,
        pub activity_code: Option<String>,
        pub portal_activity_name_en: Option<String>,
        pub portal_activity_name_ar: Option<String>,
        pub is_with_items: Option<bool>,
        pub finance_effect: Option<bool>,
        pub sign: Option<bool>,
        pub is_ops_active: Option<bool>,
        pub is_portal_active: Option<bool>,
        pub is_in_order_screen: Option<bool>,
        pub is_active: Option<bool>,
    }

    /// Partial update payload; omitted fields keep their stored value.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ActivityUpdate {
        pub act_srl: Option<String>,
        pub activity_transaction_type: Option<String>,
        pub activity_name_en: Option<String>,
        pub activity_name_ar: Option<String>,
        pub activity_code: Option<String>,
        pub portal_activity_name_en: Option<String>,
        pub portal_activity_name_ar: Option<String>,
        pub is_with_items: Option<bool>,
        pub finance_effect: Option<bool>,
        pub sign: Option<bool>,
        pub is_ops_active: Option<bool>,
        pub is_portal_active: Option<bool>,
        pub is_in_order_screen: Option<bool>,
        pub is_active: Option<bool>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ActivityView {
        pub id: String,
        pub act_srl: String,
        pub activity_transaction_type: String,
        pub activity_name_en: String,
        pub activity_name_ar: String,
        pub activity_code: String,
        pub portal_activity_name_en: String,
        pub portal_activity_name_ar: String,
        pub is_with_items: bool,
        pub finance_effect: bool,
        pub sign: bool,
        pub is_ops_active: bool,
        pub is_portal_active: bool,
        pub is_in_order_screen: bool,
        pub is_active: bool,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    /// [`ActivityView`] plus the resolved reverse lookup of sub-activities.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ActivityDetail {
        #[serde(flatten)]
        pub activity: ActivityView,
        pub sub_activities: Vec<SubActivityView>,
    }
}

pub mod sub_activity {
    use super::*;
    use crate::activity::ActivityView;
    use crate::transaction_type::{TransactionTypeRef, TransactionTypeView};

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SubActivityNew {
        pub transaction_type: Option<String>,
        pub activity: Option<String>,
        /// One of `manual`, `fixed`, `perItem`, `perLocation`.
        pub pricing_method: Option<String>,
        pub portal_item_name_en: Option<String>,
        pub portal_item_name_ar: Option<String>,
        pub is_active: Option<bool>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SubActivityUpdate {
        pub transaction_type: Option<String>,
        pub activity: Option<String>,
        pub pricing_method: Option<String>,
        pub portal_item_name_en: Option<String>,
        pub portal_item_name_ar: Option<String>,
        pub is_active: Option<bool>,
    }

    /// Flat shape with raw reference ids, used for create/update responses
    /// and inside an activity's `subActivities`.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SubActivityView {
        pub id: String,
        pub transaction_type: String,
        pub activity: String,
        pub pricing_method: String,
        pub portal_item_name_en: String,
        pub portal_item_name_ar: String,
        pub is_active: bool,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    /// Read shape with both references resolved into embedded documents.
    /// Either may be `null` when the referenced row was deleted later.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SubActivityDetail {
        pub id: String,
        pub transaction_type: Option<TransactionTypeView>,
        pub activity: Option<ActivityView>,
        pub pricing_method: String,
        pub portal_item_name_en: String,
        pub portal_item_name_ar: String,
        pub is_active: bool,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }

    /// Projection returned by the by-activity listing: no `activity` field
    /// (the caller supplied it) and the transaction type shortened to a ref.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct SubActivitySummary {
        pub id: String,
        pub portal_item_name_en: String,
        pub portal_item_name_ar: String,
        pub pricing_method: String,
        pub is_active: bool,
        pub transaction_type: Option<TransactionTypeRef>,
        pub created_at: DateTime<Utc>,
        pub updated_at: DateTime<Utc>,
    }
}
