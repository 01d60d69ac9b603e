use expense_organizer::models::*;

#[test]
fn deserialize_transaction_with_card_reference() {
    let json = r#"{
        "id": "tx-001",
        "date": "2024-07-25",
        "title": "Mercado",
        "place": "Supermercado Central",
        "amount": 152.3,
        "category": "Alimentação",
        "card_id": "card-123",
        "budget_id": null,
        "type": "credit",
        "user_id": "user-abc",
        "author": {"email": "ana@example.com"}
    }"#;
    let t: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(t.id, "tx-001");
    assert_eq!(t.card_id.as_deref(), Some("card-123"));
    assert_eq!(t.budget_id, None);
    assert_eq!(t.kind, PaymentKind::Credit);
    assert_eq!(
        t.author.unwrap().email.as_deref(),
        Some("ana@example.com")
    );
}

#[test]
fn deserialize_transaction_without_optional_fields() {
    // Insert responses carry no joined author and may omit the refs.
    let json = r#"{
        "id": "tx-002",
        "date": "2024-07-26",
        "title": "Padaria",
        "place": "Esquina",
        "amount": 12.5,
        "category": "Alimentação",
        "type": "debit",
        "user_id": "user-abc"
    }"#;
    let t: Transaction = serde_json::from_str(json).unwrap();
    assert_eq!(t.card_id, None);
    assert_eq!(t.budget_id, None);
    assert_eq!(t.kind, PaymentKind::Debit);
    assert_eq!(t.author, None);
}

#[test]
fn serialize_create_transaction_payload_renames_kind() {
    let payload = CreateTransactionPayload {
        title: "Cinema".to_string(),
        place: "Shopping".to_string(),
        amount: 45.0,
        date: "2024-07-25".to_string(),
        category: "Lazer".to_string(),
        card_id: Some("card-123".to_string()),
        budget_id: None,
        kind: PaymentKind::Credit,
    };
    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains(r#""type":"credit""#));
    assert!(json.contains(r#""budget_id":null"#));
    assert!(!json.contains("kind"));
}

#[test]
fn serde_card_roundtrip() {
    let card = Card {
        id: "card-001".to_string(),
        name: "Platinum".to_string(),
        bank: "Banco Azul".to_string(),
        closing_day: 28,
        due_day: 5,
    };
    let json = serde_json::to_string(&card).unwrap();
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);
}

#[test]
fn deserialize_budget() {
    let json = r#"{"id":"b1","name":"iFood","total_amount":200.0,"spent_amount":30.0}"#;
    let b: Budget = serde_json::from_str(json).unwrap();
    assert_eq!(b.name, "iFood");
    assert_eq!(b.total_amount, 200.0);
    assert_eq!(b.spent_amount, 30.0);
}

#[test]
fn deserialize_connection_with_joined_emails() {
    let json = r#"{
        "id": "conn-1",
        "status": "pending",
        "requester_id": "user-a",
        "addressee_id": "user-b",
        "created_at": "2024-07-25T10:30:00Z",
        "requester": {"email": "a@example.com"},
        "addressee": {"email": null}
    }"#;
    let c: Connection = serde_json::from_str(json).unwrap();
    assert_eq!(c.status, ConnectionStatus::Pending);
    assert_eq!(
        c.requester.as_ref().unwrap().email.as_deref(),
        Some("a@example.com")
    );
    assert_eq!(c.addressee.as_ref().unwrap().email, None);
}

#[test]
fn deserialize_connection_without_joined_emails() {
    let json = r#"{
        "id": "conn-2",
        "status": "accepted",
        "requester_id": "user-a",
        "addressee_id": "user-b",
        "created_at": "2024-07-25T10:30:00Z"
    }"#;
    let c: Connection = serde_json::from_str(json).unwrap();
    assert_eq!(c.status, ConnectionStatus::Accepted);
    assert_eq!(c.requester, None);
    assert_eq!(c.addressee, None);
}

#[test]
fn connection_status_uses_lowercase_wire_names() {
    assert_eq!(
        serde_json::to_string(&ConnectionStatus::Declined).unwrap(),
        r#""declined""#
    );
    let status: ConnectionStatus = serde_json::from_str(r#""accepted""#).unwrap();
    assert_eq!(status, ConnectionStatus::Accepted);
}

#[test]
fn serialize_respond_connection_payload() {
    let payload = RespondConnectionPayload {
        status: ConnectionStatus::Accepted,
    };
    assert_eq!(
        serde_json::to_string(&payload).unwrap(),
        r#"{"status":"accepted"}"#
    );
}

#[test]
fn deserialize_invite_response() {
    let json = r#"{"message":"Convite enviado para maria@example.com"}"#;
    let resp: InviteResponse = serde_json::from_str(json).unwrap();
    assert_eq!(resp.message, "Convite enviado para maria@example.com");
}

#[test]
fn serde_session_user() {
    let json = r#"{"id":"user-1","email":"ana@example.com"}"#;
    let user: SessionUser = serde_json::from_str(json).unwrap();
    assert_eq!(user.id, "user-1");
    assert_eq!(user.email, "ana@example.com");
    let serialized = serde_json::to_string(&user).unwrap();
    assert!(serialized.contains("ana@example.com"));
}
