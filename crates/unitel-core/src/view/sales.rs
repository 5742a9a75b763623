use crate::snapshot::Sales;

use super::PLACEHOLDER;

#[derive(Debug, Clone, PartialEq)]
pub struct SalesView {
    pub total: String,
    pub companies: String,
    pub public: String,
}

impl SalesView {
    pub fn project(sales: &Sales) -> Self {
        Self {
            total: sales.total.to_string(),
            companies: sales.companies.to_string(),
            public: sales.public.to_string(),
        }
    }

    pub(crate) fn placeholder() -> Self {
        Self {
            total: PLACEHOLDER.to_string(),
            companies: PLACEHOLDER.to_string(),
            public: PLACEHOLDER.to_string(),
        }
    }
}
