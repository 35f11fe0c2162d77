use std::fmt;

use reqwest::StatusCode;
use thiserror::Error;

/// Which call against the backing API failed; selects the user-facing
/// prefix for status-based messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestContext {
    OrderDetail,
    OperatorList,
    AssignOperator,
}

impl RequestContext {
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Self::OrderDetail => "Error al cargar el detalle de la orden",
            Self::OperatorList => "Error al cargar operarios",
            Self::AssignOperator => "Error al asignar operario",
        }
    }

    /// Only the assignment call surfaces the server's `detail` text.
    pub fn reads_error_detail(self) -> bool {
        matches!(self, Self::AssignOperator)
    }
}

impl fmt::Display for RequestContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OrderDetail => "order_detail",
            Self::OperatorList => "operator_list",
            Self::AssignOperator => "assign_operator",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}", status_message(.context, .status, .detail))]
    Status {
        context: RequestContext,
        status: StatusCode,
        detail: Option<String>,
    },
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    #[error("{}: invalid response body: {source}", .context.failure_prefix())]
    Decode {
        context: RequestContext,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid API base url '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    pub fn status(context: RequestContext, status: StatusCode, detail: Option<String>) -> Self {
        Self::Status {
            context,
            status,
            detail,
        }
    }

    pub fn http_status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_message(context: &RequestContext, status: &StatusCode, detail: &Option<String>) -> String {
    if let Some(detail) = detail {
        return detail.clone();
    }
    let reason = status.canonical_reason().unwrap_or_default();
    format!("{}: {} {}", context.failure_prefix(), status.as_u16(), reason)
        .trim_end()
        .to_string()
}
