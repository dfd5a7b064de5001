//! In-process stand-in for the tracking backend.
//!
//! Serves canned fixtures over real HTTP on an ephemeral port so client
//! and page tests exercise the full request path, including the token
//! header and error-body handling. Hit counters record how often each
//! list endpoint was fetched; the failure flags flip endpoints into
//! error responses mid-test.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;

pub const TOKEN: &str = "fixture-token";
pub const USERNAME: &str = "admin";
pub const PASSWORD: &str = "hunter2";

#[derive(Default)]
pub struct BackendState {
    pub meeting_list_hits: AtomicUsize,
    pub visit_list_hits: AtomicUsize,
    pub meeting_writes: AtomicUsize,
    pub visit_writes: AtomicUsize,
    pub meeting_deletes: AtomicUsize,
    pub visit_deletes: AtomicUsize,
    /// When set, mutating meeting/visit calls answer 400 with a detail body.
    pub fail_writes: AtomicBool,
    /// When set, every guarded endpoint answers 401.
    pub expire_session: AtomicBool,
}

pub struct MockBackend {
    pub base_url: String,
    pub state: Arc<BackendState>,
}

/// Bind an ephemeral port, spawn the server on the current system, and
/// hand back the base URL the client should talk to.
pub async fn spawn_backend() -> MockBackend {
    let state = Arc::new(BackendState::default());
    let data = web::Data::from(state.clone());

    let server = HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .route("/api/login/", web::post().to(login))
            .route("/api/users/", web::get().to(list_users))
            .route("/api/toplanti-odalari/", web::get().to(list_rooms))
            .route("/api/toplantilar/", web::get().to(list_meetings))
            .route("/api/toplantilar/", web::post().to(create_meeting))
            .route("/api/toplantilar/{id}/", web::put().to(update_meeting))
            .route("/api/toplantilar/{id}/", web::delete().to(delete_meeting))
            .route("/api/ziyaretciler/", web::get().to(list_visits))
            .route("/api/ziyaretciler/", web::post().to(create_visit))
            .route("/api/ziyaretciler/{id}/", web::put().to(update_visit))
            .route("/api/ziyaretciler/{id}/", web::delete().to(delete_visit))
            .route("/api/raporlar/ziyaretci/", web::get().to(visitor_report))
            .route("/api/raporlar/toplanti/", web::get().to(meeting_report))
            .route("/api/raporlar/mevcut-tarihler/", web::get().to(available_periods))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("mock backend should bind an ephemeral port");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());

    MockBackend {
        base_url: format!("http://{addr}/api"),
        state,
    }
}

// -------------------------------------------------------------------------
// handlers
// -------------------------------------------------------------------------

async fn login(body: web::Json<serde_json::Value>) -> HttpResponse {
    let username = body["username"].as_str().unwrap_or_default();
    let password = body["password"].as_str().unwrap_or_default();
    if username != USERNAME || password != PASSWORD {
        return HttpResponse::Unauthorized()
            .json(json!({"error": "Invalid username or password"}));
    }
    HttpResponse::Ok().json(json!({"token": TOKEN, "user_id": 1, "username": USERNAME}))
}

fn guard(state: &BackendState, req: &HttpRequest) -> Option<HttpResponse> {
    let presented = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());
    let valid = presented == Some(&format!("Token {TOKEN}")[..]);
    if state.expire_session.load(Ordering::SeqCst) || !valid {
        return Some(HttpResponse::Unauthorized().json(json!({"detail": "Invalid token."})));
    }
    None
}

async fn list_users(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    HttpResponse::Ok().json(json!([sample_user(1), sample_user(2)]))
}

async fn list_rooms(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    HttpResponse::Ok().json(json!([
        {"id": 1, "ad": "Room A", "kapasite": 8, "aciklama": null}
    ]))
}

async fn list_meetings(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.meeting_list_hits.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(json!([sample_meeting(1)]))
}

async fn create_meeting(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.meeting_writes.fetch_add(1, Ordering::SeqCst);
    if state.fail_writes.load(Ordering::SeqCst) {
        return HttpResponse::BadRequest()
            .json(json!({"detail": "The room is booked for that time"}));
    }
    HttpResponse::Created().json(sample_meeting(2))
}

async fn update_meeting(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.meeting_writes.fetch_add(1, Ordering::SeqCst);
    if state.fail_writes.load(Ordering::SeqCst) {
        return HttpResponse::BadRequest()
            .json(json!({"detail": "The room is booked for that time"}));
    }
    HttpResponse::Ok().json(sample_meeting(1))
}

async fn delete_meeting(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.meeting_deletes.fetch_add(1, Ordering::SeqCst);
    HttpResponse::NoContent().finish()
}

async fn list_visits(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.visit_list_hits.fetch_add(1, Ordering::SeqCst);
    HttpResponse::Ok().json(json!([sample_visit(1)]))
}

async fn create_visit(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.visit_writes.fetch_add(1, Ordering::SeqCst);
    if state.fail_writes.load(Ordering::SeqCst) {
        return HttpResponse::BadRequest().json(json!({"detail": "Host is unavailable"}));
    }
    HttpResponse::Created().json(sample_visit(2))
}

async fn update_visit(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.visit_writes.fetch_add(1, Ordering::SeqCst);
    if state.fail_writes.load(Ordering::SeqCst) {
        return HttpResponse::BadRequest().json(json!({"detail": "Host is unavailable"}));
    }
    HttpResponse::Ok().json(sample_visit(1))
}

async fn delete_visit(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    state.visit_deletes.fetch_add(1, Ordering::SeqCst);
    HttpResponse::NoContent().finish()
}

async fn visitor_report(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    let query = web::Query::<std::collections::HashMap<String, String>>::from_query(
        req.query_string(),
    )
    .map(|q| q.into_inner())
    .unwrap_or_default();
    let start = query.get("baslangic").cloned().unwrap_or_else(|| "2024-03-01".to_string());
    let end = query.get("bitis").cloned().unwrap_or_else(|| "2024-03-31".to_string());
    HttpResponse::Ok().json(json!({
        "gunluk_ziyaretler": [
            {"tarih": "2024-03-05", "toplam": 4, "kurum_ici": 1, "kurum_disi": 3}
        ],
        "saat_dagilimi": [{"saat": 10, "toplam": 2}, {"saat": 14, "toplam": 2}],
        "en_cok_ziyaret_edilenler": [
            {"ziyaret_edilen__username": "user1", "ziyaret_edilen__first_name": "Test",
             "ziyaret_edilen__last_name": "User1", "toplam_ziyaret": 3}
        ],
        "randevu_durumu": {"randevulu": 3, "randevusuz": 1},
        "filtre": {"baslangic": start, "bitis": end}
    }))
}

async fn meeting_report(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    HttpResponse::Ok().json(json!({
        "gunluk_toplantilar": [
            {"tarih": "2024-03-05", "toplam": 2, "kurum_ici": 2, "kurum_disi": 0}
        ],
        "oda_kullanimi": [
            {"oda__ad": "Room A", "toplam_toplanti": 2, "ortalama_sure": "1:30:00"}
        ],
        "saat_dagilimi": [{"saat": 9, "toplam": 2}],
        "aylik_istatistikler": [
            {"ay": "2024-03", "toplam": 2, "kurum_ici": 2, "kurum_disi": 0}
        ],
        "filtre": {"baslangic": "2024-03-01", "bitis": "2024-03-31"}
    }))
}

async fn available_periods(state: web::Data<BackendState>, req: HttpRequest) -> HttpResponse {
    if let Some(resp) = guard(&state, &req) {
        return resp;
    }
    HttpResponse::Ok().json(json!({
        "tarihler": [
            {"yil": 2024, "ay": 3, "ay_adi": "March 2024"},
            {"yil": 2024, "ay": 2, "ay_adi": "February 2024"}
        ]
    }))
}

// -------------------------------------------------------------------------
// fixtures
// -------------------------------------------------------------------------

pub fn sample_user(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "username": format!("user{id}"),
        "first_name": "Test",
        "last_name": format!("User{id}"),
        "email": ""
    })
}

pub fn sample_meeting(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "baslik": "Weekly sync",
        "konu": "Status round",
        "baslangic_zamani": "2024-03-01T09:00",
        "bitis_zamani": "2024-03-01T10:45",
        "oda": {"id": 1, "ad": "Room A", "kapasite": 8, "aciklama": null},
        "durum": "TAMAMLANDI",
        "tur": "KURUM_ICI",
        "olusturan": sample_user(1),
        "katilimcilar": [sample_user(2)],
        "kurum_disi_katilimcilar": [
            {"id": 5, "ad": "Jane", "soyad": "Doe", "kurum_unvan": "Acme"}
        ],
        "notlar": null
    })
}

pub fn sample_visit(id: i64) -> serde_json::Value {
    json!({
        "id": id,
        "ziyaret_nedeni": "Contract signing",
        "randevulu": true,
        "randevu_zamani": "2024-03-05T13:30",
        "ziyaret_zamani": "2024-03-05T13:45",
        "ziyaret_bitis_zamani": null,
        "ziyaret_edilen": sample_user(1),
        "durum": "BEKLIYOR",
        "tur": "KURUM_DISI",
        "kurum_ici_ziyaretciler": [],
        "kurum_disi_ziyaretciler": [
            {"id": 2, "ad": "Jane", "soyad": "Doe", "telefon": "5551234", "kurum_unvan": "Acme"}
        ],
        "notlar": null
    })
}
