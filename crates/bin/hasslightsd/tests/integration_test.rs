//! End-to-end tests for the intent pipeline.
//!
//! Each test decodes a real Hermes payload, routes it through the real
//! `IntentRouter` and `HassClient`, and answers the HTTP call from a
//! `wiremock` server standing in for Home Assistant. Confirmations are
//! captured by a recording dialogue publisher, so no MQTT broker is needed.

use std::sync::{Arc, Mutex};

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use hasslights_adapter_http_reqwest::{HassClient, HassConfig};
use hasslights_adapter_mqtt::message::IntentMessage;
use hasslights_app::ports::DialoguePublisher;
use hasslights_app::services::intent_router::{HandleOutcome, IntentRouter};
use hasslights_domain::confirmation::{Confirmation, ConfirmationPhrases};
use hasslights_domain::error::HassLightsError;

/// Records every notification instead of publishing it.
#[derive(Default)]
struct RecordingDialogue {
    spoken: Mutex<Vec<(String, String)>>,
}

impl RecordingDialogue {
    fn spoken(&self) -> Vec<(String, String)> {
        self.spoken.lock().unwrap().clone()
    }
}

impl DialoguePublisher for RecordingDialogue {
    async fn start_notification(&self, site_id: &str, text: &str) -> Result<(), HassLightsError> {
        self.spoken
            .lock()
            .unwrap()
            .push((site_id.to_string(), text.to_string()));
        Ok(())
    }
}

type TestRouter = IntentRouter<HassClient, Arc<RecordingDialogue>>;

/// Build a router calling `base_url`, returning the dialogue recorder too.
fn router(base_url: &str) -> (TestRouter, Arc<RecordingDialogue>) {
    let client = HassClient::new(HassConfig::new(base_url, "long-lived-token"))
        .expect("client should build");
    let dialogue = Arc::new(RecordingDialogue::default());
    let router = IntentRouter::new(
        client,
        Arc::clone(&dialogue),
        ConfirmationPhrases::default(),
    );
    (router, dialogue)
}

async fn handle(router: &TestRouter, payload: &str) -> HandleOutcome {
    let intent = IntentMessage::from_slice(payload.as_bytes())
        .and_then(IntentMessage::into_intent)
        .expect("payload should decode");
    router.handle_intent(&intent).await
}

// ---------------------------------------------------------------------------
// Successful calls
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_turn_on_room_group_and_confirm() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/services/homeassistant/turn_on"))
        .and(header("Authorization", "Bearer long-lived-token"))
        .and(body_json(
            serde_json::json!({"entity_id": "group.lights_kueche"}),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (router, dialogue) = router(&server.uri());
    let outcome = handle(
        &router,
        r#"{
            "siteId": "wohnzimmer",
            "intent": { "intentName": "s710:turnOnLight" },
            "slots": [
                { "slotName": "roomName", "value": { "kind": "Custom", "value": "Küche" } }
            ]
        }"#,
    )
    .await;

    assert_eq!(outcome, HandleOutcome::Confirmed(Confirmation::Success));
    assert_eq!(
        dialogue.spoken(),
        vec![("wohnzimmer".to_string(), "Bestätige".to_string())]
    );
}

#[tokio::test]
async fn should_prefer_lamp_over_room() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/services/light/turn_off"))
        .and(body_json(
            serde_json::json!({"entity_id": "light.stehlampe"}),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (router, _) = router(&server.uri());
    let outcome = handle(
        &router,
        r#"{
            "siteId": "wohnzimmer",
            "intent": { "intentName": "s710:turnOffLight" },
            "slots": [
                { "slotName": "roomName", "value": { "kind": "Custom", "value": "Büro" } },
                { "slotName": "lightType", "value": { "kind": "Custom", "value": "Stehlampe" } }
            ]
        }"#,
    )
    .await;

    assert_eq!(outcome, HandleOutcome::Confirmed(Confirmation::Success));
}

#[tokio::test]
async fn should_fall_back_to_site_when_slots_are_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/services/automation/turn_on"))
        .and(body_json(
            serde_json::json!({"entity_id": "automation.lights_on_schlafzimmer"}),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (router, _) = router(&server.uri());
    let outcome = handle(
        &router,
        r#"{
            "siteId": "schlafzimmer",
            "intent": { "intentName": "s710:keepLightOn" },
            "slots": [ "garbage", { "slotName": 7 } ]
        }"#,
    )
    .await;

    assert_eq!(outcome, HandleOutcome::Confirmed(Confirmation::Success));
}

#[tokio::test]
async fn should_keep_lights_on_prefix_for_keep_light_off() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/services/automation/turn_off"))
        .and(body_json(
            serde_json::json!({"entity_id": "automation.lights_on_kueche"}),
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let (router, _) = router(&server.uri());
    let outcome = handle(
        &router,
        r#"{
            "siteId": "wohnzimmer",
            "intent": { "intentName": "s710:keepLightOff" },
            "slots": [
                { "slotName": "roomName", "value": { "kind": "Custom", "value": "Küche" } }
            ]
        }"#,
    )
    .await;

    assert_eq!(outcome, HandleOutcome::Confirmed(Confirmation::Success));
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_speak_failure_phrase_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/services/homeassistant/turn_off"))
        .and(body_json(
            serde_json::json!({"entity_id": "group.all_lights"}),
        ))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let (router, dialogue) = router(&server.uri());
    let outcome = handle(
        &router,
        r#"{"siteId": "flur", "intent": {"intentName": "s710:turnOffAllLights"}}"#,
    )
    .await;

    assert_eq!(outcome, HandleOutcome::Confirmed(Confirmation::Failure));
    assert_eq!(
        dialogue.spoken(),
        vec![("flur".to_string(), "Ausführung nicht möglich".to_string())]
    );
}

#[tokio::test]
async fn should_speak_failure_phrase_when_home_assistant_is_unreachable() {
    let (router, dialogue) = router("http://127.0.0.1:1");
    let outcome = handle(
        &router,
        r#"{"siteId": "flur", "intent": {"intentName": "s710:turnOnAllLights"}}"#,
    )
    .await;

    assert_eq!(outcome, HandleOutcome::Confirmed(Confirmation::Failure));
    assert_eq!(
        dialogue.spoken(),
        vec![("flur".to_string(), "Ausführung nicht möglich".to_string())]
    );
}

#[tokio::test]
async fn should_ignore_unknown_intent_without_http_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (router, dialogue) = router(&server.uri());
    let outcome = handle(
        &router,
        r#"{"siteId": "flur", "intent": {"intentName": "s710:setTimer"}}"#,
    )
    .await;

    assert_eq!(outcome, HandleOutcome::Ignored);
    assert!(dialogue.spoken().is_empty());
}
