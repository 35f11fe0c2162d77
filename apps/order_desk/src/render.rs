//! Plain-text rendering of the order detail view for the terminal.

use std::fmt::Write as _;

use client_core::{view::OrderPanel, OrderDetailsView};
use shared::domain::Operator;

pub fn render_view(view: &OrderDetailsView) -> String {
    match view {
        OrderDetailsView::Ready(panel) => render_panel(panel),
        other => other.message().unwrap_or_default(),
    }
}

fn render_panel(panel: &OrderPanel) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  [{}] [{}]",
        panel.title, panel.status_label, panel.priority_label
    );
    let _ = writeln!(out, "  Cliente:          {}", panel.client_name);
    let _ = writeln!(out, "  Fecha creación:   {}", panel.created_at);
    let _ = writeln!(out, "  Fecha límite:     {}", panel.deadline);
    let _ = writeln!(out, "  Cajas:            {}", panel.total_boxes);
    let _ = writeln!(out, "  Operario:         {}", panel.assigned_operator);
    let _ = writeln!(out, "  Progreso:         {}", panel.progress);

    let _ = writeln!(out, "\nProductos ({})", panel.items_badge);
    for product in &panel.products {
        let _ = writeln!(out, "  - {} x{}", product.heading, product.requested_quantity);
        let _ = writeln!(out, "    {}", product.codes);
        let _ = writeln!(
            out,
            "    Ubicación: {} | Talla: {} | Color: {} | Estado: {}",
            product.location, product.size, product.color, product.status
        );
    }

    let form = &panel.assignment;
    let _ = writeln!(out, "\n{}", form.title);
    if let Some(current) = &form.current_operator {
        let _ = writeln!(out, "  Operario actual: {current}");
    }
    if let Some(banner) = form.success_banner {
        let _ = writeln!(out, "  {banner}");
    }
    if let Some(error) = &form.error_banner {
        let _ = writeln!(out, "  Error: {error}");
    }

    let summary = &panel.summary;
    let _ = writeln!(out, "\nResumen");
    let _ = writeln!(out, "  Total Items:       {}", summary.total_items);
    let _ = writeln!(out, "  Items Completados: {}", summary.completed_items);
    let _ = writeln!(out, "  Progreso:          {}", summary.progress);
    let _ = write!(out, "  Productos Únicos:  {}", summary.unique_products);
    out
}

pub fn render_operators(operators: &[Operator]) -> String {
    if operators.is_empty() {
        return "No hay operarios activos".to_string();
    }
    operators
        .iter()
        .map(|operator| format!("{:>5}  {} ({})", operator.id, operator.name, operator.code))
        .collect::<Vec<_>>()
        .join("\n")
}
