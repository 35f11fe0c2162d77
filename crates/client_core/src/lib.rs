//! Client side of the order detail view: the warehouse API client, the
//! order/operator assignment controller, and the display values derived from
//! its state.

pub mod api;
pub mod controller;
pub mod error;
pub mod view;

pub use api::{HttpOrdersApi, OrdersApi, DEFAULT_API_BASE_URL};
pub use controller::{
    preselected_operator, AssignmentState, LoadState, OrderDetailsController, SubmitOutcome,
    ViewEvent, ViewState, SUCCESS_DISPLAY,
};
pub use error::{ClientError, RequestContext};
pub use view::OrderDetailsView;
