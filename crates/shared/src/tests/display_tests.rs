use super::*;

#[test]
fn sentinels_mean_unassigned_regardless_of_case_and_padding() {
    for sentinel in [
        "Sin operario",
        "Sin asignar",
        "No asignado",
        "null",
        "undefined",
        "  SIN ASIGNAR ",
        "\tNULL\n",
        "Undefined",
    ] {
        assert!(
            !has_operator_assigned(Some(sentinel)),
            "sentinel {sentinel:?} should read as unassigned"
        );
    }
}

#[test]
fn blank_or_absent_values_are_unassigned() {
    assert!(!has_operator_assigned(None));
    assert!(!has_operator_assigned(Some("")));
    assert!(!has_operator_assigned(Some("   ")));
}

#[test]
fn any_other_name_counts_as_assigned() {
    assert!(has_operator_assigned(Some("Lucía Romero")));
    assert!(has_operator_assigned(Some("  nullable ")));
    assert!(has_operator_assigned(Some("Sin operario asignado")));
}

#[test]
fn priority_lookup_uses_fallbacks_for_unknown_codes() {
    assert_eq!(PriorityCode::from("URGENT").label(), "URGENTE");
    assert_eq!(PriorityCode::from("URGENT").severity(), "high");
    assert_eq!(PriorityCode::from("HIGH").label(), "ALTA PRIORIDAD");
    assert_eq!(PriorityCode::from("NORMAL").severity(), "medium");
    assert_eq!(PriorityCode::from("LOW").severity(), "low");

    let unknown = PriorityCode::from("CRITICAL");
    assert_eq!(unknown.label(), "CRITICAL");
    assert_eq!(unknown.severity(), "medium");
}

#[test]
fn status_lookup_maps_codes_to_classes() {
    assert_eq!(StatusCode::from("IN_PICKING").css_class(), "in-progress");
    assert_eq!(StatusCode::from("SHIPPED").css_class(), "completed");
    assert_eq!(StatusCode::from("CANCELLED").css_class(), "cancelled");
    assert_eq!(StatusCode::from("ON_HOLD").css_class(), "pending");
}

#[test]
fn product_status_labels() {
    assert_eq!(ProductStatus::Completed.label(), "Completado");
    assert_eq!(ProductStatus::Pending.label(), "Pendiente");
    assert_eq!(ProductStatus::from("PARTIAL").label(), "Pendiente");
}

#[test]
fn formats_timestamps_as_spanish_long_dates() {
    assert_eq!(format_date("2025-03-05T14:30:00"), "5 de marzo de 2025, 14:30");
    assert_eq!(
        format_date("2024-12-24T08:05:09.123456"),
        "24 de diciembre de 2024, 08:05"
    );
    assert_eq!(
        format_date("2025-01-10T09:00:00+01:00"),
        "10 de enero de 2025, 09:00"
    );
    assert_eq!(format_date("2025-07-01 18:45"), "1 de julio de 2025, 18:45");
}

#[test]
fn leaves_placeholders_and_garbage_untouched() {
    assert_eq!(format_date(""), "");
    assert_eq!(format_date(NO_DEADLINE), NO_DEADLINE);
    assert_eq!(format_date("mañana"), "mañana");
}
