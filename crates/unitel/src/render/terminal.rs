//! Full-frame terminal renderer.
//!
//! Every update redraws the whole dashboard from the last view, the current
//! error line and the toast stack. Interactive frames clear the screen first
//! and use ANSI colors; plain frames are pipeable text.

use std::fmt::Write as _;
use std::io::Write;

use tracing::warn;

use unitel_core::dashboard::DashboardRenderer;
use unitel_core::notify::{Toast, ToastKind, ToastPhase};
use unitel_core::view::{
    Badge, BadgeStyle, BorderTone, DashboardView, PLACEHOLDER, Progress, QueueBody,
    RecentCardsView,
};

use super::ansi::{BLUE, BOLD, CLEAR_SCREEN, DIM, GREEN, MAGENTA, RED, RESET, YELLOW};
use super::chart::ChartCanvas;
use super::lock;
use super::table::{Cell, TableFormatter};

/// Width of the progress bars in the headline rows.
const PROGRESS_WIDTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStyle {
    /// Single pipeable frame, no escape codes.
    Plain,
    /// Live view: clear screen, colors, command hint.
    Interactive,
}

pub struct TerminalRenderer {
    out: Box<dyn Write + Send>,
    canvas: ChartCanvas,
    style: FrameStyle,
    view: DashboardView,
    error: Option<String>,
    toasts: Vec<Toast>,
}

impl TerminalRenderer {
    pub fn new(out: Box<dyn Write + Send>, canvas: ChartCanvas, style: FrameStyle) -> Self {
        Self {
            out,
            canvas,
            style,
            view: DashboardView::placeholder(),
            error: None,
            toasts: Vec::new(),
        }
    }

    fn redraw(&mut self) {
        let chart = lock(&self.canvas).clone();
        let frame = compose_frame(
            &self.view,
            &chart,
            self.error.as_deref(),
            &self.toasts,
            self.style,
        );

        let prefix = match self.style {
            FrameStyle::Interactive => CLEAR_SCREEN,
            FrameStyle::Plain => "",
        };

        let result = write!(self.out, "{}{}", prefix, frame).and_then(|_| self.out.flush());
        if let Err(e) = result {
            warn!(event = "cli.render.write_failed", error = %e);
        }
    }
}

impl DashboardRenderer for TerminalRenderer {
    fn render(&mut self, view: &DashboardView) {
        self.view = view.clone();
        self.error = None;
        self.redraw();
    }

    fn show_error(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.redraw();
    }

    fn show_toasts(&mut self, toasts: &[Toast]) {
        self.toasts = toasts.to_vec();
        self.redraw();
    }
}

/// Build one complete frame.
pub fn compose_frame(
    view: &DashboardView,
    chart: &[String],
    error: Option<&str>,
    toasts: &[Toast],
    style: FrameStyle,
) -> String {
    let color = style == FrameStyle::Interactive;
    let paint = |code: &str, text: &str| {
        if color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    };

    let mut frame = String::new();

    let _ = writeln!(frame, "{}", paint(BOLD, "UNITEL · Painel de Operações"));
    match &view.api_version {
        Some(version) => {
            let _ = writeln!(frame, "Atualizado: {}  (API {})", view.timestamp, version);
        }
        None => {
            let _ = writeln!(frame, "Atualizado: {}", view.timestamp);
        }
    }
    if let Some(message) = error {
        let _ = writeln!(frame, "{}", paint(RED, &format!("⚠ {}", message)));
    }
    frame.push('\n');

    // Headline counters
    let inventory = &view.inventory;
    let available_code = match inventory.border {
        BorderTone::Danger => RED,
        BorderTone::Warning => YELLOW,
        BorderTone::Default => "",
    };
    let available = if available_code.is_empty() {
        inventory.available.clone()
    } else {
        paint(available_code, &inventory.available)
    };
    let mut inventory_line = format!(
        "Estoque       {} disponíveis de {}  {} {} vendidos",
        available,
        inventory.total,
        progress_bar(inventory.sold),
        percent_label(inventory.sold)
    );
    if let Some(reported) = &inventory.reported_percent {
        let _ = write!(inventory_line, "  (servidor: {})", reported);
    }
    let _ = writeln!(frame, "{}", inventory_line);

    let staffing = &view.staffing;
    let mut staffing_line = format!(
        "Funcionários  {}/{} ativos  {} {}",
        staffing.active,
        staffing.limit,
        progress_bar(staffing.occupancy),
        percent_label(staffing.occupancy)
    );
    for (label, value) in [
        ("vagas", &staffing.vacancies),
        ("contratações", &staffing.total_hired),
        ("demissões", &staffing.total_fired),
        ("servidor", &staffing.reported_percent),
    ] {
        if let Some(value) = value {
            let _ = write!(staffing_line, "  {}: {}", label, value);
        }
    }
    let _ = writeln!(frame, "{}", staffing_line);

    let sales = &view.sales;
    let _ = writeln!(
        frame,
        "Vendas        {} total  {} empresas  {} público",
        sales.total, sales.companies, sales.public
    );

    let queue = &view.queue;
    let mut queue_line = format!("Fila          {} ({})", queue.size, queue.badge);
    if let Some(capacity) = &queue.capacity {
        let _ = write!(queue_line, "  capacidade {}", capacity);
    }
    let _ = writeln!(frame, "{}", queue_line);

    // Sales by shift
    let _ = writeln!(frame, "\n{}", paint(BOLD, "Vendas por turno"));
    if chart.is_empty() {
        let _ = writeln!(frame, "  {}", PLACEHOLDER);
    } else {
        for line in chart {
            let _ = writeln!(frame, "{}", line);
        }
    }

    // Queue table
    let _ = writeln!(frame, "\n{}", paint(BOLD, "Fila de atendimento"));
    match &queue.body {
        QueueBody::Empty { message } => {
            let _ = writeln!(frame, "  {}", message);
        }
        QueueBody::Rows(rows) => {
            let headers = ["Posição", "Cliente", "Tipo", "Prioridade", "Espera"];
            let cells: Vec<Vec<Cell>> = rows
                .iter()
                .map(|row| {
                    vec![
                        row.position.clone().into(),
                        row.customer.clone().into(),
                        badge_cell(&row.kind, style),
                        row.priority.clone().into(),
                        row.wait.clone().into(),
                    ]
                })
                .collect();
            push_table(&mut frame, &headers, &cells);
        }
    }

    // Recent cards
    let _ = writeln!(frame, "\n{}", paint(BOLD, "Últimos cartões vendidos"));
    match &view.recent_cards {
        RecentCardsView::Empty { message } => {
            let _ = writeln!(frame, "  {}", message);
        }
        RecentCardsView::Cards(cards) => {
            for card in cards {
                let _ = writeln!(frame, "  {}  {}", card.label, card.time);
            }
        }
    }

    // Branches
    let branches_title = match &view.branch_count {
        Some(count) => format!("Agências ({})", count),
        None => "Agências".to_string(),
    };
    let _ = writeln!(frame, "\n{}", paint(BOLD, &branches_title));
    if view.branches.is_empty() {
        let _ = writeln!(frame, "  {}", PLACEHOLDER);
    } else {
        let numbered = view.branches.iter().any(|b| b.id.is_some());
        let mut headers = vec!["Agência", "Vendas", "Atendidos", "Status"];
        if numbered {
            headers.insert(0, "Nº");
        }
        let cells: Vec<Vec<Cell>> = view
            .branches
            .iter()
            .map(|branch| {
                let mut row: Vec<Cell> = vec![
                    branch.name.clone().into(),
                    branch.sales.clone().into(),
                    branch.customers_served.clone().into(),
                    badge_cell(&branch.status, style),
                ];
                if numbered {
                    row.insert(0, branch.id.clone().unwrap_or_default().into());
                }
                row
            })
            .collect();
        push_table(&mut frame, &headers, &cells);
    }

    if !toasts.is_empty() {
        frame.push('\n');
        for toast in toasts {
            let (icon, code) = match toast.kind {
                ToastKind::Success => ("✅", GREEN),
                ToastKind::Error => ("❌", RED),
                ToastKind::Info => ("ℹ️", BLUE),
            };
            let code = if toast.phase == ToastPhase::Leaving {
                DIM
            } else {
                code
            };
            let _ = writeln!(
                frame,
                "{}",
                paint(code, &format!("{} {}", icon, toast.message))
            );
        }
    }

    if style == FrameStyle::Interactive {
        let _ = writeln!(
            frame,
            "\n{}",
            paint(DIM, "[c] contratar  [d] demitir  [r] atualizar  [q] sair")
        );
    }

    frame
}

/// Interactive frames color badges by style. Plain frames bracket the
/// highlighted styles (company customers, active branches).
fn badge_cell(badge: &Badge, style: FrameStyle) -> Cell {
    match style {
        FrameStyle::Interactive => {
            let code = match badge.style {
                BadgeStyle::Company => BLUE,
                BadgeStyle::Public => MAGENTA,
                BadgeStyle::Active => GREEN,
                BadgeStyle::Inactive => RED,
            };
            Cell::styled(badge.label.clone(), code)
        }
        FrameStyle::Plain => match badge.style {
            BadgeStyle::Company | BadgeStyle::Active => format!("[{}]", badge.label).into(),
            BadgeStyle::Public | BadgeStyle::Inactive => badge.label.clone().into(),
        },
    }
}

fn push_table(frame: &mut String, headers: &[&str], rows: &[Vec<Cell>]) {
    for line in TableFormatter::new(headers, rows).lines(headers, rows) {
        let _ = writeln!(frame, "{}", line);
    }
}

/// Fixed-width bar. Values above 100% draw a full bar; the label keeps the
/// real number.
fn progress_bar(progress: Progress) -> String {
    let filled = progress
        .percent()
        .map(|p| (p.clamp(0.0, 100.0) / 100.0 * PROGRESS_WIDTH as f64).round() as usize)
        .unwrap_or(0);
    format!(
        "[{}{}]",
        "█".repeat(filled),
        "░".repeat(PROGRESS_WIDTH - filled)
    )
}

fn percent_label(progress: Progress) -> String {
    progress
        .rounded()
        .map(|p| format!("{}%", p))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use crate::render::test_support;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl SharedBuf {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn plain(view: &DashboardView) -> String {
        compose_frame(view, &[], None, &[], FrameStyle::Plain)
    }

    #[test]
    fn test_plain_frame_sections() {
        let view = DashboardView::project(&test_support::snapshot());
        let frame = plain(&view);

        assert!(frame.contains("Atualizado: 2025-03-14 10:15:30\n"));
        assert!(frame.contains("Estoque       12 disponíveis de 100"));
        assert!(frame.contains("88% vendidos"));
        assert!(frame.contains("Funcionários  6/10 ativos"));
        assert!(frame.contains("vagas: 4"));
        assert!(!frame.contains("contratações:"));
        assert!(frame.contains("Vendas        88 total  30 empresas  58 público"));
        assert!(frame.contains("Fila          1 (1 clientes)  capacidade 1/200"));
        assert!(frame.contains("│ #1      │ Cliente 17 │ [EMPRESA] │ 9          │ 2.3min │"));
        assert!(frame.contains("  Cartão #007  10:05:09\n  Cartão #006  10:01:02"));
        assert!(frame.contains("Agências\n"));
        assert!(frame.contains("│ Agência Talatona │ 28 vendas │ 31 atendidos │ INATIVA │"));
        assert!(!frame.contains('\x1b'));
        assert!(!frame.contains("[c] contratar"));
    }

    #[test]
    fn test_badge_styles_are_distinguishable() {
        let view = DashboardView::project(&test_support::snapshot());

        let interactive = compose_frame(&view, &[], None, &[], FrameStyle::Interactive);
        assert!(interactive.contains(&format!("{}ATIVA  {}", GREEN, RESET)));
        assert!(interactive.contains(&format!("{}INATIVA{}", RED, RESET)));
        assert!(interactive.contains(&format!("{}EMPRESA{}", BLUE, RESET)));

        let plain = plain(&view);
        assert!(plain.contains("│ [ATIVA] │"));
        assert!(plain.contains("│ INATIVA │"));
    }

    #[test]
    fn test_optional_backend_fields_are_shown() {
        let mut snapshot = test_support::snapshot();
        snapshot.api_version = Some("1.0".to_string());
        snapshot.inventory.percent_sold = Some(88.0);
        snapshot.staffing.percent_active = Some(60.0);
        snapshot.branches.total = Some(2);
        snapshot.branches.branches[0].id = Some(1);
        snapshot.branches.branches[1].id = Some(2);

        let frame = plain(&DashboardView::project(&snapshot));

        assert!(frame.contains("Atualizado: 2025-03-14 10:15:30  (API 1.0)"));
        assert!(frame.contains("88% vendidos  (servidor: 88.0%)"));
        assert!(frame.contains("servidor: 60.0%"));
        assert!(frame.contains("Agências (2)"));
        assert!(frame.contains("│ Nº │ Agência"));
        assert!(frame.contains("│ #2 │ Agência Talatona"));
    }

    #[test]
    fn test_placeholder_frame() {
        let frame = plain(&DashboardView::placeholder());
        assert!(frame.contains("Atualizado: -"));
        assert!(frame.contains("Nenhum cliente na fila"));
        assert!(frame.contains("Nenhum cartão vendido"));
        assert!(frame.contains("[░░░░░░░░░░░░░░░░░░░░] - vendidos"));
    }

    #[test]
    fn test_progress_bar_caps_but_label_does_not() {
        let progress = Progress::of(150, 100);
        assert_eq!(progress_bar(progress), format!("[{}]", "█".repeat(20)));
        assert_eq!(percent_label(progress), "150%");
    }

    #[test]
    fn test_low_stock_is_highlighted() {
        let view = DashboardView::project(&test_support::snapshot());
        let frame = compose_frame(&view, &[], None, &[], FrameStyle::Interactive);
        assert!(frame.contains(&format!("{}12{}", YELLOW, RESET)));
        assert!(frame.contains("[c] contratar"));
    }

    #[test]
    fn test_renderer_keeps_view_on_error() {
        let buf = SharedBuf::default();
        let mut renderer = TerminalRenderer::new(
            Box::new(buf.clone()),
            ChartCanvas::default(),
            FrameStyle::Plain,
        );

        renderer.render(&DashboardView::project(&test_support::snapshot()));
        renderer.show_error("Falha ao carregar dados do servidor");

        let text = buf.text();
        let last_frame = text.rsplit("UNITEL · Painel de Operações").next().unwrap();
        assert!(last_frame.contains("⚠ Falha ao carregar dados do servidor"));
        assert!(last_frame.contains("12 disponíveis"));
    }

    #[test]
    fn test_renderer_draws_toasts_and_chart() {
        let buf = SharedBuf::default();
        let canvas = ChartCanvas::default();
        canvas.lock().unwrap().push("  Manhã ███".to_string());
        let mut renderer =
            TerminalRenderer::new(Box::new(buf.clone()), canvas, FrameStyle::Interactive);

        renderer.show_toasts(&[Toast {
            id: 1,
            message: "Funcionário demitido".to_string(),
            kind: ToastKind::Success,
            phase: ToastPhase::Visible,
        }]);

        let text = buf.text();
        assert!(text.starts_with(CLEAR_SCREEN));
        assert!(text.contains("  Manhã ███"));
        assert!(text.contains(&format!("{}✅ Funcionário demitido{}", GREEN, RESET)));
    }
}
