use serde::{Deserialize, Serialize};

/// Full dashboard state returned by `GET /api/dashboard`.
///
/// Replaced wholesale on every successful fetch. Required keys fail
/// deserialization when missing; values are otherwise taken as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(rename = "estoque")]
    pub inventory: Inventory,
    #[serde(rename = "rh")]
    pub staffing: Staffing,
    #[serde(rename = "vendas")]
    pub sales: Sales,
    #[serde(rename = "fila")]
    pub queue: Queue,
    #[serde(rename = "agencias")]
    pub branches: Branches,
}

/// SIM card stock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(rename = "disponiveis")]
    pub available: i64,
    pub total: i64,
    #[serde(rename = "vendidos")]
    pub sold: i64,
    #[serde(rename = "cartoes")]
    pub cards: Vec<SoldCard>,
    #[serde(
        rename = "percentual",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub percent_sold: Option<f64>,
}

/// A sold card, in the order the backend appended it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoldCard {
    pub id: i64,
    /// `YYYY-MM-DD HH:MM:SS`; the backend sends an empty string when unknown.
    #[serde(rename = "hora_venda", default)]
    pub sold_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staffing {
    #[serde(rename = "ativos")]
    pub active: i64,
    #[serde(rename = "limite")]
    pub limit: i64,
    #[serde(rename = "vagas", default, skip_serializing_if = "Option::is_none")]
    pub vacancies: Option<i64>,
    #[serde(
        rename = "total_contratacoes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_hired: Option<i64>,
    #[serde(
        rename = "total_demissoes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total_fired: Option<i64>,
    /// Occupancy as computed by the backend.
    #[serde(rename = "percentual", default, skip_serializing_if = "Option::is_none")]
    pub percent_active: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sales {
    pub total: i64,
    #[serde(rename = "empresas")]
    pub companies: i64,
    #[serde(rename = "publico")]
    pub public: i64,
    #[serde(rename = "turnos")]
    pub shifts: ShiftTotals,
}

/// Sales per time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShiftTotals {
    #[serde(rename = "manha")]
    pub morning: i64,
    #[serde(rename = "tarde")]
    pub afternoon: i64,
    #[serde(rename = "noite")]
    pub evening: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Queue {
    #[serde(rename = "tamanho")]
    pub size: i64,
    #[serde(rename = "max", default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
    #[serde(rename = "clientes")]
    pub customers: Vec<QueuedCustomer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueuedCustomer {
    pub id: i64,
    #[serde(rename = "posicao")]
    pub position: i64,
    /// `EMPRESA` or `PUBLICO`; kept verbatim.
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "prioridade")]
    pub priority: i64,
    #[serde(rename = "espera_minutos")]
    pub wait_minutes: f64,
    #[serde(rename = "espera_segundos")]
    pub wait_seconds: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branches {
    #[serde(
        rename = "total_agencias",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub total: Option<i64>,
    #[serde(rename = "agencias")]
    pub branches: Vec<Branch>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "vendas")]
    pub sales: i64,
    #[serde(rename = "clientes_atendidos")]
    pub customers_served: i64,
    /// `ATIVA` or `INATIVA`; kept verbatim.
    pub status: String,
}

impl SoldCard {
    /// Time-of-day portion of the sale timestamp, if one is known.
    pub fn time_of_day(&self) -> Option<&str> {
        let sold_at = self.sold_at.as_deref()?.trim();
        if sold_at.is_empty() {
            return None;
        }
        sold_at.split_once(' ').map(|(_, time)| time)
    }
}
