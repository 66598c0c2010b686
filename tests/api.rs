mod helpers;

use company_registry_sdk::{
    APIErrorVariant, CompanyPatch, CompanyProfile, RegistrySDK, UpdateCompanyInput, ID,
};
use helpers::setup::spawn_app;
use reqwest::StatusCode;
use serde_json::{json, Value};

async fn create(sdk: &RegistrySDK, profile: CompanyProfile) -> ID {
    sdk.company
        .create(profile)
        .await
        .expect("Expected to create company")
        .id
}

#[actix_web::main]
#[test]
async fn test_status_ok() {
    let (sdk, _) = spawn_app().await;
    let res = sdk
        .status
        .check_health()
        .await
        .expect("Expected status to be ok");
    assert!(res.success);
    assert_eq!(res.service, "company_registry_api");
}

#[actix_web::main]
#[test]
async fn test_index_page_is_html() {
    let (_, address) = spawn_app().await;
    let res = reqwest::get(&address).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));
}

#[actix_web::main]
#[test]
async fn test_list_is_ordered_by_name() {
    let (sdk, _) = spawn_app().await;
    assert!(sdk.company.list().await.unwrap().companies.is_empty());

    for name in ["Globex", "Acme", "Initech"] {
        create(&sdk, CompanyProfile::new(name)).await;
    }

    let res = sdk.company.list().await.expect("Expected to list companies");
    assert!(res.success);
    let names = res
        .companies
        .into_iter()
        .map(|c| c.profile.company_name)
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["Acme", "Globex", "Initech"]);
}

#[actix_web::main]
#[test]
async fn test_create_and_get() {
    let (sdk, _) = spawn_app().await;
    let profile = CompanyProfile {
        main_business: Some("tech".into()),
        ..CompanyProfile::new("Acme")
    };
    let res = sdk.company.create(profile.clone()).await.unwrap();
    assert!(res.success);

    let company = sdk
        .company
        .get(res.id)
        .await
        .expect("Expected to get company")
        .company;
    assert_eq!(company.id, res.id);
    assert_eq!(company.profile, profile);
}

#[actix_web::main]
#[test]
async fn test_create_accepts_form_values() {
    let (_, address) = spawn_app().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/companies", address))
        .json(&json!({
            "companyName": "Acme",
            "foundedDate": "1998-04-01",
            "employees": "340",
            "roe": "",
            "notes": ""
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], true);
    let id = body["id"].as_i64().expect("Expected id in response");

    let body: Value = client
        .get(format!("{}/api/companies/{}", address, id))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["company"]["id"], id);
    assert_eq!(body["company"]["companyName"], "Acme");
    assert_eq!(body["company"]["foundedDate"], "1998-04-01");
    assert_eq!(body["company"]["employees"], 340);
    assert!(body["company"]["roe"].is_null());
}

#[actix_web::main]
#[test]
async fn test_create_requires_name() {
    let (sdk, address) = spawn_app().await;
    let err = sdk
        .company
        .create(CompanyProfile::new("  "))
        .await
        .expect_err("Expected blank name to be rejected");
    assert_eq!(err.variant, APIErrorVariant::UnexpectedStatusCode);
    assert_eq!(err.status, Some(StatusCode::BAD_REQUEST));

    // Missing name and malformed json
    let client = reqwest::Client::new();
    for body in [r#"{"ceoName": "Jane"}"#, "{not json"] {
        let res = client
            .post(format!("{}/api/companies", address))
            .header("content-type", "application/json")
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert!(body["message"].is_string());
    }
    assert!(sdk.company.list().await.unwrap().companies.is_empty());
}

#[actix_web::main]
#[test]
async fn test_non_finite_ratios_are_rejected() {
    let (sdk, address) = spawn_app().await;
    let client = reqwest::Client::new();
    let res = client
        .post(format!("{}/api/companies", address))
        .json(&json!({ "companyName": "Acme", "roe": "NaN", "turnoverRate": "inf" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(sdk.company.list().await.unwrap().companies.is_empty());

    let id = create(&sdk, CompanyProfile::new("Acme")).await;
    let res = client
        .put(format!("{}/api/companies/{}", address, id))
        .json(&json!({ "operatingProfitMargin": "-infinity" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[actix_web::main]
#[test]
async fn test_update_leaves_other_fields_untouched() {
    let (sdk, _) = spawn_app().await;
    let profile = CompanyProfile {
        ceo_name: Some("Jane Doe".into()),
        employees: Some(120),
        roe: Some(8.5),
        notes: Some("Visited in spring".into()),
        ..CompanyProfile::new("Acme")
    };
    let id = create(&sdk, profile.clone()).await;

    let res = sdk
        .company
        .update(UpdateCompanyInput {
            company_id: id,
            patch: CompanyPatch {
                employees: Some(Some(150)),
                ..Default::default()
            },
        })
        .await
        .expect("Expected to update company");
    assert!(res.success);

    let company = sdk.company.get(id).await.unwrap().company;
    assert_eq!(company.profile.employees, Some(150));
    assert_eq!(
        company.profile,
        CompanyProfile {
            employees: Some(150),
            ..profile
        }
    );
}

#[actix_web::main]
#[test]
async fn test_update_can_clear_fields() {
    let (sdk, _) = spawn_app().await;
    let id = create(
        &sdk,
        CompanyProfile {
            notes: Some("Outdated".into()),
            ..CompanyProfile::new("Acme")
        },
    )
    .await;

    sdk.company
        .update(UpdateCompanyInput {
            company_id: id,
            patch: CompanyPatch {
                notes: Some(None),
                ..Default::default()
            },
        })
        .await
        .unwrap();
    let company = sdk.company.get(id).await.unwrap().company;
    assert!(company.profile.notes.is_none());
    assert_eq!(company.profile.company_name, "Acme");
}

#[actix_web::main]
#[test]
async fn test_update_of_unknown_company_is_acknowledged() {
    let (sdk, _) = spawn_app().await;
    let res = sdk
        .company
        .update(UpdateCompanyInput {
            company_id: ID::from(999),
            patch: CompanyPatch {
                company_name: Some("Ghost".into()),
                ..Default::default()
            },
        })
        .await
        .expect("Expected update to be acknowledged");
    assert!(res.success);
    assert!(sdk.company.list().await.unwrap().companies.is_empty());
}

#[actix_web::main]
#[test]
async fn test_update_without_fields_is_rejected() {
    let (sdk, _) = spawn_app().await;
    let id = create(&sdk, CompanyProfile::new("Acme")).await;
    let err = sdk
        .company
        .update(UpdateCompanyInput {
            company_id: id,
            patch: CompanyPatch::default(),
        })
        .await
        .expect_err("Expected empty update to be rejected");
    assert_eq!(err.status, Some(StatusCode::BAD_REQUEST));
}

#[actix_web::main]
#[test]
async fn test_get_unknown_company_is_logical_failure() {
    let (sdk, _) = spawn_app().await;
    let err = sdk
        .company
        .get(ID::from(999))
        .await
        .expect_err("Expected unknown company to fail");
    assert_eq!(err.variant, APIErrorVariant::Failure);
    assert_eq!(err.status, Some(StatusCode::OK));
    assert!(!err.message.is_empty());
}

#[actix_web::main]
#[test]
async fn test_delete() {
    let (sdk, _) = spawn_app().await;
    let id = create(&sdk, CompanyProfile::new("Acme")).await;

    let res = sdk.company.delete(id).await.expect("Expected to delete");
    assert!(res.success);

    // Get after deleted should be a logical failure
    let err = sdk.company.get(id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Failure);

    // Deleting again reports not found with status 200
    let err = sdk.company.delete(id).await.unwrap_err();
    assert_eq!(err.variant, APIErrorVariant::Failure);
    assert_eq!(err.status, Some(StatusCode::OK));
}

#[actix_web::main]
#[test]
async fn test_compare_skips_unknown_ids() {
    let (sdk, _) = spawn_app().await;
    let first = create(&sdk, CompanyProfile::new("Acme")).await;
    let second = create(&sdk, CompanyProfile::new("Globex")).await;
    create(&sdk, CompanyProfile::new("Initech")).await;

    let res = sdk
        .company
        .compare(vec![first, second, ID::from(999)])
        .await
        .expect("Expected to compare companies");
    assert!(res.success);
    let ids = res.companies.iter().map(|c| c.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![first, second]);
}

#[actix_web::main]
#[test]
async fn test_compare_accepts_string_ids() {
    let (sdk, address) = spawn_app().await;
    let id = create(&sdk, CompanyProfile::new("Acme")).await;

    let res = reqwest::Client::new()
        .post(format!("{}/api/compare", address))
        .json(&json!({ "ids": [id.to_string()] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["companies"][0]["companyName"], "Acme");
}

#[actix_web::main]
#[test]
async fn test_compare_without_ids_is_rejected() {
    let (sdk, address) = spawn_app().await;
    let err = sdk
        .company
        .compare(Vec::new())
        .await
        .expect_err("Expected empty comparison to be rejected");
    assert_eq!(err.status, Some(StatusCode::BAD_REQUEST));
    assert!(!err.message.is_empty());

    let res = reqwest::Client::new()
        .post(format!("{}/api/compare", address))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
}

#[actix_web::main]
#[test]
async fn test_malformed_id_is_rejected() {
    let (_, address) = spawn_app().await;
    let res = reqwest::get(format!("{}/api/companies/acme", address))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["success"], false);
}
