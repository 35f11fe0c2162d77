use super::*;
use serde_json::json;

fn sample_order_json() -> serde_json::Value {
    json!({
        "id": 42,
        "numero_orden": "ORD-2025-0042",
        "nombre_cliente": "Calzados Rivera",
        "fecha_creacion": "2025-03-05T14:30:00",
        "fecha_limite": "Sin fecha límite",
        "total_cajas": 3,
        "operario_asignado": "Lucía Romero",
        "items_completados": 1,
        "total_items": 4,
        "progreso_porcentaje": 25.0,
        "estado": "En picking",
        "estado_codigo": "IN_PICKING",
        "prioridad": "URGENT",
        "productos": [
            {
                "id": 7,
                "nombre": "Zapatilla",
                "descripcion": "Running",
                "sku": "ZR-01",
                "ean": "8412345678901",
                "ubicacion": "A-03-2",
                "talla": "42",
                "color": "Azul",
                "cantidad_solicitada": 4,
                "cantidad_servida": 1,
                "estado": "PENDING"
            }
        ]
    })
}

#[test]
fn decodes_order_detail_with_spanish_field_names() {
    let order: Order = serde_json::from_value(sample_order_json()).expect("order");

    assert_eq!(order.id, OrderId(42));
    assert_eq!(order.number, "ORD-2025-0042");
    assert_eq!(order.deadline, NO_DEADLINE);
    assert_eq!(order.status_code, StatusCode::InPicking);
    assert_eq!(order.priority, PriorityCode::Urgent);
    assert_eq!(order.assigned_operator_id, None);
    assert_eq!(order.products.len(), 1);
    assert_eq!(order.products[0].location, "A-03-2");
    assert_eq!(order.products[0].status, ProductStatus::Pending);
    assert!(order.has_operator_assigned());
}

#[test]
fn unknown_codes_survive_decoding() {
    let mut raw = sample_order_json();
    raw["estado_codigo"] = json!("ON_HOLD");
    raw["prioridad"] = json!("CRITICAL");

    let order: Order = serde_json::from_value(raw).expect("order");

    assert_eq!(order.status_code, StatusCode::Other("ON_HOLD".into()));
    assert_eq!(order.priority, PriorityCode::Other("CRITICAL".into()));
    assert_eq!(order.priority.as_code(), "CRITICAL");
}

#[test]
fn missing_optional_fields_fall_back_to_defaults() {
    let order: Order = serde_json::from_value(json!({ "id": 1 })).expect("order");

    assert!(order.products.is_empty());
    assert_eq!(order.assigned_operator, None);
    assert!(!order.has_operator_assigned());
    assert_eq!(order.status_code, StatusCode::Pending);
    assert_eq!(order.priority, PriorityCode::Normal);
}

#[test]
fn codes_serialize_back_to_wire_strings() {
    let order: Order = serde_json::from_value(sample_order_json()).expect("order");
    let encoded = serde_json::to_value(&order).expect("encode");

    assert_eq!(encoded["estado_codigo"], "IN_PICKING");
    assert_eq!(encoded["prioridad"], "URGENT");
    assert!(encoded.get("operario_asignado_id").is_none());
}

#[test]
fn operator_defaults_to_active_when_flag_is_absent() {
    let operator: Operator =
        serde_json::from_value(json!({ "id": 3, "nombre": "Pablo", "codigo_operario": "OP-03" }))
            .expect("operator");

    assert_eq!(operator.id, OperatorId(3));
    assert_eq!(operator.code, "OP-03");
    assert!(operator.active);
}

#[test]
fn null_fields_decode_like_missing_ones() {
    let mut raw = sample_order_json();
    raw["fecha_limite"] = json!(null);
    raw["nombre_cliente"] = json!(null);
    raw["estado_codigo"] = json!(null);
    raw["productos"][0]["ean"] = json!(null);
    raw["productos"][0]["talla"] = json!(null);

    let order: Order = serde_json::from_value(raw).expect("order");

    assert_eq!(order.deadline, "");
    assert_eq!(order.client_name, "");
    assert_eq!(order.status_code, StatusCode::Pending);
    assert_eq!(order.products[0].ean, "");
    assert_eq!(order.products[0].size, "");
    assert_eq!(order.products[0].sku, "ZR-01");

    let operators: Vec<Operator> = serde_json::from_value(json!([
        { "id": 1, "nombre": "Lucía Romero", "codigo_operario": null },
        { "id": 2, "nombre": "Pablo Ortega", "codigo_operario": "OP-02" }
    ]))
    .expect("operators");

    assert_eq!(operators.len(), 2);
    assert_eq!(operators[0].code, "");
    assert_eq!(operators[1].code, "OP-02");
}
