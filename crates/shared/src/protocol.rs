use serde::{Deserialize, Serialize};

use crate::domain::OperatorId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignOperatorRequest {
    pub operator_id: OperatorId,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorListQuery {
    pub activo: bool,
}

impl OperatorListQuery {
    pub fn active_only() -> Self {
        Self { activo: true }
    }
}
