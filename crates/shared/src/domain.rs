use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

id_newtype!(OrderId);
id_newtype!(ProductId);
id_newtype!(OperatorId);

/// Deadline text the backend sends for orders without a due date.
pub const NO_DEADLINE: &str = "Sin fecha límite";

/// Declares a wire code enum that keeps unrecognized codes verbatim in an
/// `Other` variant instead of failing to decode the whole record.
macro_rules! wire_code {
    ($name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn as_code(&self) -> &str {
                match self {
                    $(Self::$variant => $code,)+
                    Self::Other(raw) => raw,
                }
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                match value.as_str() {
                    $($code => Self::$variant,)+
                    _ => Self::Other(value),
                }
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::from(value.to_string())
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_code().to_string()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_code())
            }
        }
    };
}

wire_code!(StatusCode {
    Pending => "PENDING",
    Assigned => "ASSIGNED",
    InPicking => "IN_PICKING",
    Picked => "PICKED",
    Packing => "PACKING",
    Ready => "READY",
    Shipped => "SHIPPED",
    Cancelled => "CANCELLED",
});

wire_code!(PriorityCode {
    High => "HIGH",
    Urgent => "URGENT",
    Normal => "NORMAL",
    Low => "LOW",
});

wire_code!(ProductStatus {
    Completed => "COMPLETED",
    Pending => "PENDING",
});

impl Default for StatusCode {
    fn default() -> Self {
        Self::Pending
    }
}

impl Default for PriorityCode {
    fn default() -> Self {
        Self::Normal
    }
}

impl Default for ProductStatus {
    fn default() -> Self {
        Self::Pending
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(rename = "nombre", default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "descripcion", default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ean: String,
    #[serde(rename = "ubicacion", default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(rename = "talla", default, deserialize_with = "null_as_default")]
    pub size: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub color: String,
    #[serde(rename = "cantidad_solicitada", default, deserialize_with = "null_as_default")]
    pub requested_quantity: u32,
    #[serde(rename = "cantidad_servida", default, deserialize_with = "null_as_default")]
    pub fulfilled_quantity: u32,
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub status: ProductStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "numero_orden", default, deserialize_with = "null_as_default")]
    pub number: String,
    #[serde(rename = "nombre_cliente", default, deserialize_with = "null_as_default")]
    pub client_name: String,
    #[serde(rename = "fecha_creacion", default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(rename = "fecha_limite", default, deserialize_with = "null_as_default")]
    pub deadline: String,
    #[serde(rename = "total_cajas", default, deserialize_with = "null_as_default")]
    pub total_boxes: u32,
    /// Free-text operator name; may hold one of the "unassigned" sentinels.
    #[serde(rename = "operario_asignado", default)]
    pub assigned_operator: Option<String>,
    #[serde(
        rename = "operario_asignado_id",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_operator_id: Option<OperatorId>,
    #[serde(rename = "items_completados", default, deserialize_with = "null_as_default")]
    pub completed_items: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: u32,
    #[serde(rename = "progreso_porcentaje", default, deserialize_with = "null_as_default")]
    pub progress_percent: f64,
    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "estado_codigo", default, deserialize_with = "null_as_default")]
    pub status_code: StatusCode,
    #[serde(rename = "prioridad", default, deserialize_with = "null_as_default")]
    pub priority: PriorityCode,
    #[serde(rename = "productos", default, deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
}

impl Order {
    pub fn has_operator_assigned(&self) -> bool {
        crate::display::has_operator_assigned(self.assigned_operator.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operator {
    pub id: OperatorId,
    #[serde(rename = "nombre", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "codigo_operario", default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Decodes an explicit JSON `null` the same way as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
