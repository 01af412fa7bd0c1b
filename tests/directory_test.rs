//! 薬局リスト取得の統合テスト
//!
//! wiremockでAPIを立て、実ネットワークには出ない。

use eczane_common::state::{MSG_DIRECTORY_FAILED, MSG_DIRECTORY_UPDATED};
use eczane_common::{AppState, Endpoint, Error, Intent, MapSettings};
use izmir_eczane::directory::DirectoryClient;
use izmir_eczane::session::Session;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn directory_json() -> serde_json::Value {
    json!([
        {
            "Adi": "Deniz Eczanesi",
            "Adres": "Cumhuriyet Blv. No:10",
            "Telefon": "0232 123 45 67",
            "Bolge": "Konak",
            "BolgeAciklama": "Saat Kulesi yanı",
            "Tarih": "2025-01-01T09:00:00Z",
            "LokasyonX": "38.4189",
            "LokasyonY": "27.1287"
        },
        {
            "Adi": "Işık Eczanesi",
            "Adres": "Şehitler Cd. No:3",
            "Telefon": "0232 765 43 21",
            "Bolge": "Karşıyaka",
            "BolgeAciklama": null,
            "Tarih": "2025-01-01T09:00:00Z",
            "LokasyonX": 38.4594,
            "LokasyonY": 27.1123
        }
    ])
}

fn test_client(server: &MockServer) -> DirectoryClient {
    DirectoryClient::new(&server.uri(), 5).expect("failed to build test client")
}

#[tokio::test]
async fn load_returns_records_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nobetcieczaneler"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_json()))
        .mount(&server)
        .await;

    let records = test_client(&server)
        .load(Endpoint::OnDuty)
        .await
        .expect("expected records");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].name, "Deniz Eczanesi");
    assert_eq!(records[0].district_note(), Some("Saat Kulesi yanı"));
    assert_eq!(records[1].location_x, "38.4594");
    assert!(records[1].coordinates().is_some());
}

#[tokio::test]
async fn load_all_uses_full_directory_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/eczaneler"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let records = test_client(&server).load(Endpoint::All).await.expect("expected Ok");
    assert!(records.is_empty());
}

#[tokio::test]
async fn load_maps_non_success_status_to_network_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nobetcieczaneler"))
        .respond_with(ResponseTemplate::new(500).set_body_json(directory_json()))
        .mount(&server)
        .await;

    let err = test_client(&server).load(Endpoint::OnDuty).await.unwrap_err();
    assert!(matches!(err, Error::Network { status: 500 }), "got: {err:?}");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn load_maps_malformed_body_to_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nobetcieczaneler"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>bakım</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server).load(Endpoint::OnDuty).await.unwrap_err();
    assert!(matches!(err, Error::Json(_)), "got: {err:?}");
}

#[tokio::test]
async fn load_maps_refused_connection_to_transport_error() {
    // ポート1には誰も待ち受けていない
    let client = DirectoryClient::new("http://127.0.0.1:1", 2).expect("failed to build test client");

    let err = client.load(Endpoint::OnDuty).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
}

#[tokio::test]
async fn session_start_populates_state() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nobetcieczaneler"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_json()))
        .mount(&server)
        .await;

    let mut session = Session::new(test_client(&server), AppState::new(MapSettings::default())).quiet();
    session.start().await;

    let state = session.state();
    assert!(!state.is_loading());
    assert_eq!(state.records().len(), 2);
    // 成功通知はスケジュール済みの解除で消えている
    assert!(state.notification().is_none());

    session.send(Intent::SearchChanged("karşıyaka".into())).await;
    let visible = session.state().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Işık Eczanesi");
}

#[tokio::test]
async fn session_failure_clears_list_and_reload_recovers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/nobetcieczaneler"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/nobetcieczaneler"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory_json()))
        .mount(&server)
        .await;

    let mut session = Session::new(test_client(&server), AppState::new(MapSettings::default())).quiet();
    session.start().await;
    assert!(session.state().records().is_empty());
    assert!(!session.state().is_loading());

    session.send(Intent::Reload).await;
    assert_eq!(session.state().records().len(), 2);

    let record = session.find("deniz eczanesi").expect("expected a match");
    session.send(Intent::Select(record)).await;
    assert_eq!(
        session.state().selected().map(|r| r.name.as_str()),
        Some("Deniz Eczanesi")
    );
    assert_eq!(session.state().camera().generation(), 1);
}

#[test]
fn notification_messages_are_turkish() {
    assert_eq!(MSG_DIRECTORY_UPDATED, "Eczaneler güncellendi");
    assert!(MSG_DIRECTORY_FAILED.starts_with("Eczane listesi alınamadı"));
}
