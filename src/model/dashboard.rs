//! Report dashboards (read-only seed records).

use serde::{Deserialize, Serialize};

use super::Choice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportCategory {
    Sales,
    Marketing,
    Finance,
    Operations,
    Product,
}

impl Choice for ReportCategory {
    const ALL: &'static [Self] = &[Self::Sales, Self::Marketing, Self::Finance, Self::Operations, Self::Product];

    fn value(self) -> &'static str {
        match self {
            Self::Sales => "sales",
            Self::Marketing => "marketing",
            Self::Finance => "finance",
            Self::Operations => "operations",
            Self::Product => "product",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Finance => "Finance",
            Self::Operations => "Operations",
            Self::Product => "Product",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub category: ReportCategory,
    pub created_at: String,
    pub updated_at: String,
    pub is_public: bool,
    pub views: u32,
}
