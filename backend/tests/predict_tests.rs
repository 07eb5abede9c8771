//! Tests for `POST /predict`

mod common;

use agri_advisor_backend::services::PredictorService;
use axum::http::{Method, StatusCode};
use common::*;
use proptest::prelude::*;
use shared::{parse_confidence, SoilClimateSample};

#[tokio::test]
async fn returns_top_three_sorted() {
    let (status, body) = send(
        app(Default::default()),
        json_request(Method::POST, "/predict", &sample_json()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        serde_json::json!({
            "top_3_recommended_crops": [
                {"crop": "rice", "confidence": "70.00%"},
                {"crop": "jute", "confidence": "20.00%"},
                {"crop": "maize", "confidence": "5.00%"}
            ]
        })
    );
}

#[tokio::test]
async fn city_never_appears_in_output() {
    let mut sample = sample_json();
    sample["city"] = "Coimbatore".into();

    let (status, bytes) = send_raw(
        app(Default::default()),
        json_request(Method::POST, "/predict", &sample),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let text = String::from_utf8(bytes).unwrap();
    assert!(!text.contains("city"));
    assert!(!text.contains("Coimbatore"));
}

#[tokio::test]
async fn wrong_field_type_is_rejected() {
    let mut sample = sample_json();
    sample["N"] = "ninety".into();

    let (status, body) = send(
        app(Default::default()),
        json_request(Method::POST, "/predict", &sample),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn missing_field_is_rejected() {
    let mut sample = sample_json();
    sample.as_object_mut().unwrap().remove("rainfall");

    let (status, body) = send(
        app(Default::default()),
        json_request(Method::POST, "/predict", &sample),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn unusual_readings_still_get_three_crops() {
    let mut sample = sample_json();
    sample["temperature"] = serde_json::json!(72.0);
    sample["ph"] = serde_json::json!(19.5);
    sample["N"] = serde_json::json!(-4);

    let (status, body) = send(
        app_with(Default::default(), shipped_classifier()),
        json_request(Method::POST, "/predict", &sample),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["top_3_recommended_crops"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn bundled_model_is_deterministic() {
    let request = || json_request(Method::POST, "/predict", &sample_json());
    let classifier = shipped_classifier();

    let (status, first) = send_raw(app_with(Default::default(), classifier.clone()), request()).await;
    let (_, second) = send_raw(app_with(Default::default(), classifier), request()).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(first, second);

    let body: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let crops: Vec<&str> = body["top_3_recommended_crops"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["crop"].as_str().unwrap())
        .collect();
    assert_eq!(crops[0], "rice");
    assert_eq!(crops[1], "jute");
}

fn sample_strategy() -> impl Strategy<Value = SoilClimateSample> {
    (
        0i64..150,
        0i64..150,
        0i64..210,
        5.0f64..45.0,
        10.0f64..100.0,
        3.5f64..9.5,
        20.0f64..300.0,
    )
        .prop_map(|(n, p, k, temperature, humidity, ph, rainfall)| SoilClimateSample {
            n,
            p,
            k,
            temperature,
            humidity,
            ph,
            rainfall,
            city: None,
        })
}

proptest! {
    #[test]
    fn any_valid_sample_yields_three_sorted_confidences(sample in sample_strategy()) {
        let predictor = PredictorService::new(shipped_classifier());
        let response = predictor.recommend(&sample).unwrap();
        let crops = response.top_3_recommended_crops;

        prop_assert_eq!(crops.len(), 3);
        let values: Vec<f64> = crops
            .iter()
            .map(|c| parse_confidence(&c.confidence).unwrap())
            .collect();
        prop_assert!(values.iter().all(|v| (0.0..=100.0).contains(v)));
        prop_assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }
}
