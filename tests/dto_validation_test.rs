use validator::Validate;

use autoloc_backend::dto::charge_dto::CreateChargeRequest;
use autoloc_backend::dto::contract_dto::CreateContractRequest;
use autoloc_backend::dto::customer_dto::CreateCustomerRequest;
use autoloc_backend::dto::facture_dto::CreateFactureRequest;
use autoloc_backend::dto::incident_dto::CreateAccidentRequest;

fn contract_json(client: &str, price: f64) -> String {
    format!(
        r#"{{
            "client": "{client}",
            "vehicle": "64b64c3f2f9b256e80f1a002",
            "contractDate": "2025-03-09",
            "departureDate": "2025-03-10",
            "departureTime": "09:00",
            "returnDate": "2025-03-13",
            "pricePerDay": {price},
            "discount": 50.0,
            "advance": 200.0,
            "paymentType": "espece"
        }}"#
    )
}

#[test]
fn test_contract_request_accepts_camel_case_payload() {
    let req: CreateContractRequest =
        serde_json::from_str(&contract_json("64b64c3f2f9b256e80f1a001", 300.0)).unwrap();
    assert!(req.validate().is_ok());
    assert_eq!(req.departure_time.as_deref(), Some("09:00"));
    assert!(req.extension.is_none());
}

#[test]
fn test_contract_request_rejects_malformed_object_id() {
    let req: CreateContractRequest =
        serde_json::from_str(&contract_json("not-an-id", 300.0)).unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn test_contract_request_rejects_negative_price() {
    let req: CreateContractRequest =
        serde_json::from_str(&contract_json("64b64c3f2f9b256e80f1a001", -10.0)).unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn test_contract_extension_requires_at_least_one_day() {
    let json = r#"{
        "client": "64b64c3f2f9b256e80f1a001",
        "vehicle": "64b64c3f2f9b256e80f1a002",
        "contractDate": "2025-03-09",
        "departureDate": "2025-03-10",
        "returnDate": "2025-03-13",
        "pricePerDay": 300.0,
        "paymentType": "espece",
        "extension": { "additionalDuration": 0, "pricePerDay": 350.0 }
    }"#;
    let req: CreateContractRequest = serde_json::from_str(json).unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn test_customer_request_validates_email_and_phone() {
    let req = CreateCustomerRequest {
        first_name: "Amine".to_string(),
        last_name: "Bensalem".to_string(),
        birth_date: None,
        phone: "123".to_string(),
        email: Some("not-an-email".to_string()),
        address: None,
        wilaya: None,
        national_id: None,
        license_number: "DL-443221".to_string(),
        license_delivery_date: None,
        license_expiry_date: None,
    };
    let err = req.validate().unwrap_err();
    let fields = err.field_errors();
    assert!(fields.contains_key("phone"));
    assert!(fields.contains_key("email"));
}

#[test]
fn test_accident_request_rejects_whitespace_only_location() {
    let json = r#"{
        "vehicle": "64b64c3f2f9b256e80f1a002",
        "accidentDate": "2025-04-02",
        "location": "   ",
        "repairCost": 1200.0
    }"#;
    let req: CreateAccidentRequest = serde_json::from_str(json).unwrap();
    let err = req.validate().unwrap_err();
    assert!(err.field_errors().contains_key("location"));
}

#[test]
fn test_charge_request_rejects_blank_label_and_description() {
    let req = CreateChargeRequest {
        label: " \t ".to_string(),
        charge_date: "2025-04-02".to_string(),
        amount: 80.0,
        category: None,
        description: Some("  ".to_string()),
    };
    let err = req.validate().unwrap_err();
    let fields = err.field_errors();
    assert!(fields.contains_key("label"));
    assert!(fields.contains_key("description"));
}

#[test]
fn test_contract_request_rejects_whitespace_only_locations() {
    let json = r#"{
        "client": "64b64c3f2f9b256e80f1a001",
        "vehicle": "64b64c3f2f9b256e80f1a002",
        "contractDate": "2025-03-09",
        "departureDate": "2025-03-10",
        "returnDate": "2025-03-13",
        "pricePerDay": 300.0,
        "paymentType": "espece",
        "pickupLocation": "   ",
        "returnLocation": "Aeroport d'Alger"
    }"#;
    let req: CreateContractRequest = serde_json::from_str(json).unwrap();
    assert!(req.validate().is_err());
}

#[test]
fn test_facture_request_allows_partial_vat_primitives() {
    let json = r#"{
        "client": "64b64c3f2f9b256e80f1a001",
        "invoiceDate": "2025-03-01",
        "totalTtc": 100.0,
        "tvaPercentage": 20.0,
        "paymentType": "virement"
    }"#;
    let req: CreateFactureRequest = serde_json::from_str(json).unwrap();
    assert!(req.validate().is_ok());
    assert!(req.montant_ht.is_none());
    assert_eq!(req.total_ttc, Some(100.0));
}

#[test]
fn test_facture_request_rejects_percentage_above_hundred() {
    let json = r#"{
        "client": "64b64c3f2f9b256e80f1a001",
        "invoiceDate": "2025-03-01",
        "montantHt": 180.0,
        "tvaPercentage": 120.0,
        "paymentType": "virement"
    }"#;
    let req: CreateFactureRequest = serde_json::from_str(json).unwrap();
    assert!(req.validate().is_err());
}
