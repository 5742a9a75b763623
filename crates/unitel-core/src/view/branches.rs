use crate::snapshot::Branch;

use super::{Badge, BadgeStyle};

/// Status value that gets the active badge.
const ACTIVE_STATUS: &str = "ATIVA";

#[derive(Debug, Clone, PartialEq)]
pub struct BranchRow {
    /// `#N` when the backend numbers its branches.
    pub id: Option<String>,
    pub name: String,
    pub sales: String,
    pub customers_served: String,
    pub status: Badge,
}

impl BranchRow {
    pub fn project(branch: &Branch) -> Self {
        let style = if branch.status == ACTIVE_STATUS {
            BadgeStyle::Active
        } else {
            BadgeStyle::Inactive
        };

        Self {
            id: branch.id.map(|id| format!("#{}", id)),
            name: branch.name.clone(),
            sales: format!("{} vendas", branch.sales),
            customers_served: format!("{} atendidos", branch.customers_served),
            status: Badge::new(branch.status.clone(), style),
        }
    }
}

pub fn project_branches(branches: &[Branch]) -> Vec<BranchRow> {
    branches.iter().map(BranchRow::project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn branch(name: &str, status: &str) -> Branch {
        Branch {
            id: None,
            name: name.to_string(),
            sales: 12,
            customers_served: 30,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_status_badge_is_binary() {
        let rows = project_branches(&[
            branch("Sede", "ATIVA"),
            branch("Kilamba", "INATIVA"),
            branch("Viana", "EM_OBRAS"),
        ]);

        assert_eq!(rows[0].status.style, BadgeStyle::Active);
        assert_eq!(rows[1].status.style, BadgeStyle::Inactive);
        assert_eq!(rows[2].status.style, BadgeStyle::Inactive);
        assert_eq!(rows[2].status.label, "EM_OBRAS");
    }

    #[test]
    fn test_row_text() {
        let row = BranchRow::project(&branch("Sede", "ATIVA"));
        assert_eq!(row.name, "Sede");
        assert_eq!(row.sales, "12 vendas");
        assert_eq!(row.customers_served, "30 atendidos");
        assert!(row.id.is_none());
    }

    #[test]
    fn test_numbered_branch() {
        let mut numbered = branch("Sede", "ATIVA");
        numbered.id = Some(3);
        assert_eq!(BranchRow::project(&numbered).id.as_deref(), Some("#3"));
    }
}
