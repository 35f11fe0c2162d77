//! Display values derived from a [`ViewState`] snapshot.

use shared::{
    display::format_date,
    domain::{Operator, OperatorId, Order, Product, ProductId},
};

use crate::controller::{LoadState, ViewState};

pub const UNASSIGNED_LABEL: &str = "Sin asignar";

#[derive(Debug, Clone, PartialEq)]
pub enum OrderDetailsView {
    Loading,
    Failed(String),
    NotFound,
    Ready(Box<OrderPanel>),
}

impl OrderDetailsView {
    pub fn from_state(state: &ViewState) -> Self {
        match &state.order {
            LoadState::Loading => Self::Loading,
            LoadState::Idle if state.order_id.is_some() => Self::Loading,
            LoadState::Idle => Self::NotFound,
            LoadState::Failed(message) => Self::Failed(message.clone()),
            LoadState::Loaded(order) => Self::Ready(Box::new(OrderPanel::new(order, state))),
        }
    }

    pub fn message(&self) -> Option<String> {
        match self {
            Self::Loading => Some("Cargando detalles de la orden...".to_string()),
            Self::Failed(message) => Some(format!("Error: {message}")),
            Self::NotFound => Some("No se encontró la orden".to_string()),
            Self::Ready(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderPanel {
    pub title: String,
    pub status_label: String,
    pub status_class: &'static str,
    pub priority_label: String,
    pub priority_class: &'static str,
    pub client_name: String,
    pub created_at: String,
    pub deadline: String,
    pub total_boxes: u32,
    pub assigned_operator: String,
    pub progress: String,
    pub items_badge: String,
    pub products: Vec<ProductLine>,
    pub assignment: AssignmentForm,
    pub summary: OrderSummary,
}

impl OrderPanel {
    fn new(order: &Order, state: &ViewState) -> Self {
        let assigned = order.has_operator_assigned();
        Self {
            title: format!("Orden #{}", order.number),
            status_label: order.status.to_uppercase(),
            status_class: order.status_code.css_class(),
            priority_label: order.priority.label().to_string(),
            priority_class: order.priority.severity(),
            client_name: order.client_name.clone(),
            created_at: format_date(&order.created_at),
            deadline: order.deadline.clone(),
            total_boxes: order.total_boxes,
            assigned_operator: match (&order.assigned_operator, assigned) {
                (Some(name), true) => name.clone(),
                _ => UNASSIGNED_LABEL.to_string(),
            },
            progress: format!(
                "{} de {} items ({:.1}%)",
                order.completed_items, order.total_items, order.progress_percent
            ),
            items_badge: format!("{} items", order.total_items),
            products: order.products.iter().map(ProductLine::from).collect(),
            assignment: AssignmentForm::new(order, state),
            summary: OrderSummary {
                total_items: order.total_items,
                completed_items: order.completed_items,
                progress: format!("{:.1}%", order.progress_percent),
                unique_products: order.products.len(),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductLine {
    pub id: ProductId,
    pub heading: String,
    pub codes: String,
    pub location: String,
    pub size: String,
    pub color: String,
    pub completed: bool,
    pub status: String,
    pub requested_quantity: u32,
}

impl From<&Product> for ProductLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            heading: format!("{} - {}", product.name, product.description),
            codes: format!("SKU: {} | EAN: {}", product.sku, product.ean),
            location: product.location.clone(),
            size: product.size.clone(),
            color: product.color.clone(),
            completed: product.status.is_completed(),
            status: format!(
                "{} ({}/{})",
                product.status.label(),
                product.fulfilled_quantity,
                product.requested_quantity
            ),
            requested_quantity: product.requested_quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperatorOption {
    pub id: OperatorId,
    pub label: String,
    pub selected: bool,
}

impl OperatorOption {
    fn new(operator: &Operator, selected: Option<OperatorId>) -> Self {
        Self {
            id: operator.id,
            label: format!("{} ({})", operator.name, operator.code),
            selected: selected == Some(operator.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentForm {
    pub reassign: bool,
    pub title: &'static str,
    pub current_operator: Option<String>,
    pub select_label: &'static str,
    pub placeholder: &'static str,
    pub select_enabled: bool,
    pub options: Vec<OperatorOption>,
    pub submit_enabled: bool,
    pub submit_label: &'static str,
    pub success_banner: Option<&'static str>,
    pub error_banner: Option<String>,
}

impl AssignmentForm {
    fn new(order: &Order, state: &ViewState) -> Self {
        let reassign = order.has_operator_assigned();
        let assignment = &state.assignment;
        Self {
            reassign,
            title: if reassign {
                "Reasignar Operario"
            } else {
                "Asignar Operario"
            },
            current_operator: if reassign {
                order.assigned_operator.clone()
            } else {
                None
            },
            select_label: if reassign {
                "Cambiar a otro operario"
            } else {
                "Selecciona un operario disponible"
            },
            placeholder: if state.loading_operators {
                "Cargando operarios..."
            } else {
                "Selecciona un operario"
            },
            select_enabled: !state.loading_operators && !state.operators.is_empty(),
            options: state
                .operators
                .iter()
                .map(|operator| OperatorOption::new(operator, state.selected_operator))
                .collect(),
            submit_enabled: state.can_submit(),
            submit_label: match (assignment.submitting, reassign) {
                (true, _) => "Asignando...",
                (false, true) => "Reasignar Operario",
                (false, false) => "Asignar Orden",
            },
            success_banner: match (assignment.success, assignment.reassigned) {
                (false, _) => None,
                (true, true) => Some("¡Operario reasignado correctamente!"),
                (true, false) => Some("¡Operario asignado correctamente!"),
            },
            error_banner: assignment.error.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderSummary {
    pub total_items: u32,
    pub completed_items: u32,
    pub progress: String,
    pub unique_products: usize,
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
