use super::*;

// =============================================================================
// Role
// =============================================================================

#[test]
fn role_parse_is_case_insensitive() {
    assert_eq!(Role::parse("ADMIN"), Some(Role::Admin));
    assert_eq!(Role::parse(" Recruiter "), Some(Role::Recruiter));
    assert_eq!(Role::parse("viewer"), Some(Role::Viewer));
    assert_eq!(Role::parse("owner"), None);
}

#[test]
fn role_serializes_as_lowercase_string() {
    assert_eq!(serde_json::to_value(Role::Admin).unwrap(), serde_json::json!("admin"));
}

#[test]
fn unknown_role_deserializes_as_viewer() {
    let role: Role = serde_json::from_value(serde_json::json!("superuser")).unwrap();
    assert_eq!(role, Role::Viewer);
}

#[test]
fn user_without_role_defaults_to_viewer() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "00000000-0000-0000-0000-000000000001",
        "name": "Ada",
        "email": null
    }))
    .unwrap();
    assert_eq!(user.role, Role::Viewer);
}

// =============================================================================
// Document
// =============================================================================

#[test]
fn document_accepts_objects() {
    let doc: Document = serde_json::from_value(serde_json::json!({"communication": 4})).unwrap();
    assert_eq!(doc.len(), 1);
    assert_eq!(doc.get("communication"), Some(&serde_json::json!(4)));
}

#[test]
fn document_rejects_arrays_and_scalars() {
    assert_eq!(Document::try_from(serde_json::json!([1, 2])), Err(DocumentError("array")));
    assert_eq!(Document::try_from(serde_json::json!("text")), Err(DocumentError("string")));
    assert_eq!(Document::try_from(serde_json::Value::Null), Err(DocumentError("null")));
}

#[test]
fn document_rejection_surfaces_through_report_deserialization() {
    let raw = serde_json::json!({
        "session_token": "s-1",
        "candidate_email": null,
        "candidate_name": null,
        "score": 1.0,
        "section_ratings": [1, 2, 3],
        "created_at": "2025-01-01T00:00:00Z"
    });
    let err = serde_json::from_value::<Report>(raw).unwrap_err();
    assert!(err.to_string().contains("expected a JSON object"));
}

#[test]
fn report_missing_mappings_default_to_empty() {
    let raw = serde_json::json!({
        "session_token": "s-1",
        "candidate_email": "a@b.c",
        "candidate_name": "Ada",
        "score": 87.5,
        "created_at": "2025-01-01T00:00:00Z"
    });
    let report: Report = serde_json::from_value(raw).unwrap();
    assert!(report.section_ratings.is_empty());
    assert!(report.ai_feedback.is_empty());
    assert!(report.full_report.is_empty());
}

// =============================================================================
// Capability + bodies
// =============================================================================

#[test]
fn capability_messages_are_fixed() {
    assert_eq!(
        Capability::ReportInit.unavailable_message(),
        "Report init not available in AI Interviewer SaaS."
    );
    assert_eq!(
        Capability::AiAnalysis.unavailable_message(),
        "AI analysis not available in AI Interviewer SaaS."
    );
}

#[test]
fn failure_body_shape() {
    let body = serde_json::to_value(ApiFailure::new(SUBCATEGORIES_FETCH_FAILED)).unwrap();
    assert_eq!(body, serde_json::json!({"success": false, "error": "Failed to fetch subcategories"}));
}

#[test]
fn subcategory_list_exposes_only_public_fields() {
    let list = SubcategoryList::new(vec![Subcategory {
        id: Uuid::nil(),
        name: "Rust".to_owned(),
        description: Some("Systems".to_owned()),
    }]);
    let body = serde_json::to_value(list).unwrap();
    assert_eq!(body["success"], serde_json::json!(true));
    let item = body["subcategories"][0].as_object().unwrap();
    let mut keys = item.keys().cloned().collect::<Vec<_>>();
    keys.sort();
    assert_eq!(keys, vec!["description", "id", "name"]);
}

#[test]
fn request_code_response_omits_missing_code() {
    let body = serde_json::to_value(RequestCodeResponse { ok: true, code: None }).unwrap();
    assert_eq!(body, serde_json::json!({"ok": true}));
}
