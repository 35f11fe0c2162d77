//! State machine behind the order detail view: order and operator loaders plus
//! the assign/reassign workflow.

use std::{
    sync::{Arc, Weak},
    time::Duration,
};

use shared::domain::{Operator, OperatorId, Order, OrderId};
use tokio::{
    sync::{broadcast, Mutex},
    task::JoinHandle,
};
use tracing::{debug, error, info, warn};

use crate::{api::OrdersApi, view::OrderDetailsView};

/// How long the assignment success banner stays up.
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);

const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> LoadState<T> {
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignmentState {
    pub submitting: bool,
    pub error: Option<String>,
    pub success: bool,
    /// Whether the last successful submission replaced an existing operator.
    pub reassigned: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub order_id: Option<OrderId>,
    pub order: LoadState<Order>,
    pub operators: Vec<Operator>,
    pub loading_operators: bool,
    pub selected_operator: Option<OperatorId>,
    pub assignment: AssignmentState,
}

impl ViewState {
    pub fn can_submit(&self) -> bool {
        self.selected_operator.is_some() && !self.assignment.submitting
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    OrderLoaded(OrderId),
    OrderFailed { order_id: OrderId, message: String },
    OperatorsLoaded { count: usize },
    OperatorsFailed(String),
    OperatorPreselected(OperatorId),
    AssignmentSucceeded {
        order_id: OrderId,
        operator_id: OperatorId,
    },
    AssignmentFailed(String),
    SuccessDismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing selected or a submission already in flight; no request sent.
    Skipped,
    Assigned,
    Failed,
}

/// Finds the operator the order is currently assigned to. Prefers the
/// operator id when the backend sends one and falls back to an exact display
/// name match, taking the first hit when names collide.
pub fn preselected_operator(order: &Order, operators: &[Operator]) -> Option<OperatorId> {
    if operators.is_empty() || !order.has_operator_assigned() {
        return None;
    }

    if let Some(id) = order.assigned_operator_id {
        if operators.iter().any(|operator| operator.id == id) {
            return Some(id);
        }
    }

    let name = order.assigned_operator.as_deref()?;
    let mut matches = operators.iter().filter(|operator| operator.name == name);
    let first = matches.next()?;
    if matches.next().is_some() {
        warn!(
            order_id = order.id.0,
            operator_name = name,
            "several operators share the assigned name; preselecting the first"
        );
    }
    Some(first.id)
}

struct Inner {
    state: ViewState,
    order_generation: u64,
    operators_requested: bool,
    dismiss_task: Option<JoinHandle<()>>,
}

impl Inner {
    fn cancel_dismiss(&mut self) {
        if let Some(task) = self.dismiss_task.take() {
            task.abort();
        }
    }

    fn reconcile_selection(&mut self) -> Option<OperatorId> {
        let order = self.state.order.loaded()?;
        let id = preselected_operator(order, &self.state.operators)?;
        if self.state.selected_operator == Some(id) {
            return None;
        }
        self.state.selected_operator = Some(id);
        Some(id)
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        self.cancel_dismiss();
    }
}

pub struct OrderDetailsController {
    api: Arc<dyn OrdersApi>,
    inner: Arc<Mutex<Inner>>,
    events: broadcast::Sender<ViewEvent>,
    success_display: Duration,
}

impl OrderDetailsController {
    pub fn new(api: Arc<dyn OrdersApi>) -> Self {
        Self::with_success_display(api, SUCCESS_DISPLAY)
    }

    pub fn with_success_display(api: Arc<dyn OrdersApi>, success_display: Duration) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            api,
            inner: Arc::new(Mutex::new(Inner {
                state: ViewState::default(),
                order_generation: 0,
                operators_requested: false,
                dismiss_task: None,
            })),
            events,
            success_display,
        }
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<ViewEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> ViewState {
        self.inner.lock().await.state.clone()
    }

    pub async fn view(&self) -> OrderDetailsView {
        OrderDetailsView::from_state(&self.inner.lock().await.state)
    }

    pub async fn can_submit(&self) -> bool {
        self.inner.lock().await.state.can_submit()
    }

    /// Mounts the view: loads the order for `order_id` and the operator list
    /// concurrently.
    pub async fn mount(&self, order_id: Option<OrderId>) {
        futures::join!(self.set_order_id(order_id), self.load_operators());
    }

    /// Records a new order identifier and loads it. Unchanged or absent
    /// identifiers do not trigger a fetch.
    pub async fn set_order_id(&self, order_id: Option<OrderId>) {
        {
            let mut inner = self.inner.lock().await;
            if inner.state.order_id == order_id {
                return;
            }
            inner.state.order_id = order_id;
            // Any load still in flight belongs to the previous identifier, and
            // so does the selection.
            inner.order_generation += 1;
            inner.state.selected_operator = None;
            inner.state.order = match order_id {
                Some(_) => LoadState::Loading,
                None => LoadState::Idle,
            };
        }

        if order_id.is_some() {
            self.load_order().await;
        }
    }

    /// Fetches the current order. Only the most recently started load may
    /// write its result.
    pub async fn load_order(&self) {
        let (order_id, generation) = {
            let mut inner = self.inner.lock().await;
            let Some(order_id) = inner.state.order_id else {
                return;
            };
            inner.order_generation += 1;
            inner.state.order = LoadState::Loading;
            (order_id, inner.order_generation)
        };

        let result = self.api.fetch_order(order_id).await;

        let mut inner = self.inner.lock().await;
        if inner.order_generation != generation {
            debug!(order_id = order_id.0, "discarding stale order response");
            return;
        }

        match result {
            Ok(order) => {
                info!(order_id = order_id.0, products = order.products.len(), "order loaded");
                inner.state.order = LoadState::Loaded(order);
                self.emit(ViewEvent::OrderLoaded(order_id));
                if let Some(id) = inner.reconcile_selection() {
                    self.emit(ViewEvent::OperatorPreselected(id));
                }
            }
            Err(err) => {
                let message = err.to_string();
                error!(order_id = order_id.0, error = %message, "failed to load order");
                inner.state.order = LoadState::Failed(message.clone());
                self.emit(ViewEvent::OrderFailed { order_id, message });
            }
        }
    }

    /// Fetches the active operators once per controller. Failures leave the
    /// list empty without affecting the rest of the view.
    pub async fn load_operators(&self) {
        {
            let mut inner = self.inner.lock().await;
            if inner.operators_requested {
                return;
            }
            inner.operators_requested = true;
            inner.state.loading_operators = true;
        }

        let result = self.api.list_active_operators().await;

        let mut inner = self.inner.lock().await;
        inner.state.loading_operators = false;
        match result {
            Ok(operators) => {
                let count = operators.len();
                debug!(count, "active operators loaded");
                inner.state.operators = operators;
                self.emit(ViewEvent::OperatorsLoaded { count });
                if let Some(id) = inner.reconcile_selection() {
                    self.emit(ViewEvent::OperatorPreselected(id));
                }
            }
            Err(err) => {
                let message = err.to_string();
                warn!(error = %message, "failed to load operators");
                self.emit(ViewEvent::OperatorsFailed(message));
            }
        }
    }

    /// Form edit. Leaves any success or error banner as it is.
    pub async fn select_operator(&self, operator_id: Option<OperatorId>) {
        self.inner.lock().await.state.selected_operator = operator_id;
    }

    pub async fn submit_assignment(&self) -> SubmitOutcome {
        let (order_id, operator_id, reassigning) = {
            let mut inner = self.inner.lock().await;
            if !inner.state.can_submit() {
                return SubmitOutcome::Skipped;
            }
            let (Some(order_id), Some(operator_id)) =
                (inner.state.order_id, inner.state.selected_operator)
            else {
                return SubmitOutcome::Skipped;
            };
            let reassigning = inner
                .state
                .order
                .loaded()
                .is_some_and(Order::has_operator_assigned);

            inner.cancel_dismiss();
            inner.state.assignment.submitting = true;
            inner.state.assignment.error = None;
            inner.state.assignment.success = false;
            (order_id, operator_id, reassigning)
        };

        info!(
            order_id = order_id.0,
            operator_id = operator_id.0,
            reassigning,
            "submitting operator assignment"
        );
        let result = self.api.assign_operator(order_id, operator_id).await;

        let mut inner = self.inner.lock().await;
        inner.state.assignment.submitting = false;
        match result {
            Ok(order) => {
                if inner.state.order_id == Some(order_id) {
                    inner.state.order = LoadState::Loaded(order);
                } else {
                    warn!(
                        order_id = order_id.0,
                        "order changed during assignment; keeping the newer order"
                    );
                }
                inner.state.assignment.success = true;
                inner.state.assignment.reassigned = reassigning;
                inner.state.selected_operator = None;
                inner.dismiss_task = Some(self.schedule_success_dismiss());
                self.emit(ViewEvent::AssignmentSucceeded {
                    order_id,
                    operator_id,
                });
                SubmitOutcome::Assigned
            }
            Err(err) => {
                let message = err.to_string();
                warn!(order_id = order_id.0, error = %message, "operator assignment failed");
                inner.state.assignment.error = Some(message.clone());
                self.emit(ViewEvent::AssignmentFailed(message));
                SubmitOutcome::Failed
            }
        }
    }

    /// Cancels the pending success-banner timer, if any.
    pub async fn shutdown(&self) {
        self.inner.lock().await.cancel_dismiss();
    }

    fn schedule_success_dismiss(&self) -> JoinHandle<()> {
        let inner: Weak<Mutex<Inner>> = Arc::downgrade(&self.inner);
        let events = self.events.clone();
        let deadline = tokio::time::Instant::now() + self.success_display;
        tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let Some(inner) = inner.upgrade() else {
                return;
            };
            let mut inner = inner.lock().await;
            inner.state.assignment.success = false;
            inner.dismiss_task = None;
            let _ = events.send(ViewEvent::SuccessDismissed);
        })
    }

    fn emit(&self, event: ViewEvent) {
        let _ = self.events.send(event);
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
