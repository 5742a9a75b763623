use crate::snapshot::{Queue, QueuedCustomer};

use super::{Badge, BadgeStyle, PLACEHOLDER};

pub const EMPTY_QUEUE_MESSAGE: &str = "Nenhum cliente na fila";

/// Customer type value that gets the company badge.
const COMPANY_KIND: &str = "EMPRESA";

#[derive(Debug, Clone, PartialEq)]
pub struct QueueView {
    pub size: String,
    /// Header badge, e.g. `3 clientes`.
    pub badge: String,
    /// `size/max` when the backend reports its capacity.
    pub capacity: Option<String>,
    pub body: QueueBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueueBody {
    /// Single placeholder row.
    Empty { message: &'static str },
    Rows(Vec<QueueRow>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueueRow {
    pub position: String,
    pub customer: String,
    pub kind: Badge,
    pub priority: String,
    pub wait: String,
}

impl QueueView {
    pub fn project(queue: &Queue) -> Self {
        let body = if queue.customers.is_empty() {
            QueueBody::Empty {
                message: EMPTY_QUEUE_MESSAGE,
            }
        } else {
            QueueBody::Rows(queue.customers.iter().map(QueueRow::project).collect())
        };

        Self {
            size: queue.size.to_string(),
            badge: format!("{} clientes", queue.size),
            capacity: queue.capacity.map(|max| format!("{}/{}", queue.size, max)),
            body,
        }
    }

    pub(crate) fn placeholder() -> Self {
        Self {
            size: PLACEHOLDER.to_string(),
            badge: format!("{} clientes", PLACEHOLDER),
            capacity: None,
            body: QueueBody::Empty {
                message: EMPTY_QUEUE_MESSAGE,
            },
        }
    }
}

impl QueueRow {
    pub fn project(customer: &QueuedCustomer) -> Self {
        let style = if customer.kind == COMPANY_KIND {
            BadgeStyle::Company
        } else {
            BadgeStyle::Public
        };

        Self {
            position: format!("#{}", customer.position),
            customer: format!("Cliente {}", customer.id),
            kind: Badge::new(customer.kind.clone(), style),
            priority: customer.priority.to_string(),
            wait: format_wait(customer.wait_minutes, customer.wait_seconds),
        }
    }
}

/// Seconds under a minute, otherwise minutes with one decimal.
pub fn format_wait(minutes: f64, seconds: f64) -> String {
    if minutes < 1.0 {
        format!("{}s", seconds)
    } else {
        format!("{:.1}min", minutes)
    }
}
