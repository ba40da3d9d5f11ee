//! End-to-end flows against a canned-response HTTP stub.
//!
//! The stub speaks just enough HTTP/1.1 for one request per connection,
//! which is all the client needs: every response closes its connection.

use costabella::{
    ApiClient, BookingForm, ContactForm, Dashboard, MemorySink, NoticeLevel, Province, RoomType,
    SearchCriteria, WeatherArchiver, WeatherPanel,
};
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

struct StubServer {
    base_url: String,
    received: Arc<Mutex<Vec<String>>>,
}

impl StubServer {
    /// Starts a stub serving the given `"METHOD /path"` routes; anything
    /// else answers 404.
    async fn start(routes: Vec<(&'static str, u16, String)>) -> StubServer {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let routes: HashMap<String, (u16, String)> = routes
            .into_iter()
            .map(|(route, status, body)| (route.to_string(), (status, body)))
            .collect();
        let received = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&received);

        tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(accepted) => accepted,
                    Err(_) => break,
                };
                tokio::spawn(handle_connection(stream, routes.clone(), Arc::clone(&log)));
            }
        });

        StubServer {
            base_url: format!("http://{addr}"),
            received,
        }
    }

    fn client(&self) -> ApiClient {
        ApiClient::builder().base_url(self.base_url.clone()).build()
    }

    /// Body of the most recent request, parsed as JSON.
    fn last_body(&self) -> serde_json::Value {
        let requests = self.received.lock().unwrap();
        let raw = requests.last().expect("no requests received");
        let body = raw.split_once("\r\n\r\n").map(|(_, body)| body).unwrap_or("");
        serde_json::from_str(body).expect("request body was not JSON")
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    routes: HashMap<String, (u16, String)>,
    received: Arc<Mutex<Vec<String>>>,
) {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let read = match stream.read(&mut chunk).await {
            Ok(read) => read,
            Err(_) => return,
        };
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(headers_end) = headers_end(&buffer) {
            let headers = String::from_utf8_lossy(&buffer[..headers_end]);
            if buffer.len() >= headers_end + 4 + content_length(&headers) {
                break;
            }
        }
    }

    let request = String::from_utf8_lossy(&buffer).into_owned();
    let mut parts = request.split_whitespace();
    let key = match (parts.next(), parts.next()) {
        (Some(method), Some(path)) => format!("{method} {path}"),
        _ => return,
    };
    received.lock().unwrap().push(request.clone());

    let (status, body) = routes
        .get(&key)
        .cloned()
        .unwrap_or((404, r#"{"detail":"not found"}"#.to_string()));
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason(status),
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

fn headers_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn content_length(headers: &str) -> usize {
    headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            if name.eq_ignore_ascii_case("content-length") {
                value.trim().parse().ok()
            } else {
                None
            }
        })
        .unwrap_or(0)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "OK",
    }
}

fn healthy() -> (&'static str, u16, String) {
    (
        "GET /health",
        200,
        json!({"status": "healthy", "message": "Hotel Costa Bella API funcionando correctamente"})
            .to_string(),
    )
}

fn demo_reservation_rows() -> String {
    json!([
        {
            "id": 1,
            "first_name": "María",
            "last_name": "González",
            "email": "maria@example.com",
            "room_type": "Suite Vista al Mar",
            "checkin_date": "2025-08-15",
            "checkout_date": "2025-08-18",
            "guests": 2,
            "country": "Costa Rica"
        },
        {
            "id": 2,
            "first_name": "Carlos",
            "last_name": "Rodríguez",
            "email": "carlos@example.com",
            "room_type": "Villa Privada",
            "checkin_date": "2025-08-20",
            "checkout_date": "2025-08-25",
            "guests": 4,
            "country": "Estados Unidos"
        },
        {
            "id": 3,
            "first_name": "Ana",
            "last_name": "López",
            "email": "ana@example.com",
            "room_type": "Habitación Deluxe",
            "checkin_date": "2025-08-25",
            "checkout_date": "2025-08-26",
            "guests": 1
        }
    ])
    .to_string()
}

#[tokio::test]
async fn live_backend_paints_kpis_and_derived_charts() {
    let server = StubServer::start(vec![
        healthy(),
        (
            "GET /api/stats/reservations",
            200,
            json!({
                "monthly_revenue": 52340,
                "total_reservations": 89,
                "occupancy_rate": 84.0,
                "avg_rating": 4.8
            })
            .to_string(),
        ),
        ("GET /reservations", 200, demo_reservation_rows()),
        (
            "GET /api/weather/San%20Jos%C3%A9",
            200,
            json!({"city": "San José", "temperature": 24.5, "description": "Parcialmente nublado", "humidity": 73})
                .to_string(),
        ),
    ])
    .await;

    let mut dashboard = Dashboard::builder()
        .api(server.client())
        .sink(MemorySink::new())
        .build();
    dashboard.initialize().await;

    assert_eq!(dashboard.data().reservations.len(), 3);
    assert_eq!(
        dashboard.data().weather.as_ref().map(|w| w.temperature),
        Some(24.5)
    );

    let sink = dashboard.into_sink();
    assert_eq!(
        sink.notices,
        vec![(
            NoticeLevel::Success,
            "Dashboard cargado con datos reales".to_string()
        )]
    );

    assert_eq!(sink.values["revenue-value"], "$52,340");
    assert_eq!(sink.values["bookings-value"], "89");
    assert_eq!(sink.values["occupancy-value"], "84%");
    assert_eq!(sink.values["satisfaction-value"], "4.8");

    // August bucket: 200 + 350 + 150 across the three rows.
    let revenue = &sink.charts["revenueChart"];
    assert_eq!(revenue.series.labels[7], "Ago");
    assert_eq!(revenue.series.values[7], 700);

    assert_eq!(
        sink.charts["roomTypeChart"].series.values,
        vec![33, 33, 33, 0, 0]
    );
    assert_eq!(
        sink.charts["occupancyChart"].series.values,
        vec![20, 25, 22, 30, 40, 50, 45]
    );
    assert_eq!(
        sink.charts["originChart"].series.labels,
        vec!["Costa Rica", "Estados Unidos"]
    );
    assert_eq!(sink.charts["originChart"].series.values, vec![67, 33]);
}

#[tokio::test]
async fn skipped_endpoints_degrade_without_failing_the_load() {
    let rows = json!([
        {"first_name": "A", "checkin_date": "2020-01-10", "room_type": "Villa Privada"},
        {"first_name": "B", "checkin_date": "2020-02-11", "room_type": "Villa Privada"},
        {"first_name": "C", "checkin_date": "2020-03-12", "room_type": "Villa Privada"}
    ])
    .to_string();
    let server = StubServer::start(vec![
        healthy(),
        ("GET /api/stats/reservations", 500, "{}".to_string()),
        ("GET /reservations", 200, rows),
        // No weather route: the fetch answers 404 and is skipped.
    ])
    .await;

    let mut dashboard = Dashboard::builder()
        .api(server.client())
        .sink(MemorySink::new())
        .build();
    dashboard.initialize().await;

    assert!(dashboard.data().stats.is_none());
    assert!(dashboard.data().weather.is_none());

    let sink = dashboard.into_sink();
    assert_eq!(sink.notices[0].0, NoticeLevel::Success);

    // KPIs estimated from the rows: no current-month check-ins, three bookings.
    assert_eq!(sink.values["revenue-value"], "$0");
    assert_eq!(sink.values["bookings-value"], "3");
    assert_eq!(sink.values["occupancy-value"], "78%");
    assert_eq!(sink.values["satisfaction-value"], "4.7");
}

#[tokio::test]
async fn partial_stats_fill_in_per_field_fallbacks() {
    let server = StubServer::start(vec![
        healthy(),
        (
            "GET /api/stats/reservations",
            200,
            json!({"monthly_revenue": 61000}).to_string(),
        ),
        ("GET /reservations", 200, "[]".to_string()),
    ])
    .await;

    let mut dashboard = Dashboard::builder()
        .api(server.client())
        .sink(MemorySink::new())
        .build();
    dashboard.initialize().await;

    let sink = dashboard.into_sink();
    assert_eq!(sink.values["revenue-value"], "$61,000");
    assert_eq!(sink.values["bookings-value"], "156");
    assert_eq!(sink.values["occupancy-value"], "78%");
    assert_eq!(sink.values["satisfaction-value"], "4.7");

    // Empty reservation list: every chart falls back to its demo series.
    assert_eq!(
        sink.charts["occupancyChart"].series.values,
        vec![65, 72, 68, 75, 85, 95, 88]
    );
}

#[tokio::test]
async fn refresh_tick_reports_live_and_simulated_updates() {
    let live = StubServer::start(vec![(
        "GET /api/stats/reservations",
        200,
        json!({"monthly_revenue": 48000, "total_reservations": 120, "occupancy_rate": 81.0, "avg_rating": 4.5})
            .to_string(),
    )])
    .await;
    let mut dashboard = Dashboard::builder()
        .api(live.client())
        .sink(MemorySink::new())
        .build();
    dashboard.refresh_tick().await;
    assert_eq!(dashboard.kpi_display().revenue, "$48,000");
    let sink = dashboard.into_sink();
    assert_eq!(
        sink.notices,
        vec![(
            NoticeLevel::Info,
            "Datos actualizados desde base de datos".to_string()
        )]
    );

    let down = StubServer::start(vec![(
        "GET /api/stats/reservations",
        503,
        "{}".to_string(),
    )])
    .await;
    let mut dashboard = Dashboard::builder()
        .api(down.client())
        .sink(MemorySink::new())
        .build();
    dashboard.refresh_tick().await;

    // Simulated revenue stays inside its fixed range.
    let revenue: u64 = dashboard
        .kpi_display()
        .revenue
        .trim_start_matches('$')
        .replace(',', "")
        .parse()
        .unwrap();
    assert!((40_000..50_000).contains(&revenue));
    let sink = dashboard.into_sink();
    assert_eq!(
        sink.notices,
        vec![(NoticeLevel::Info, "Datos simulados actualizados".to_string())]
    );
}

#[tokio::test]
async fn booking_submission_posts_the_payload_and_resets() {
    let server = StubServer::start(vec![(
        "POST /reservations",
        200,
        json!({"ok": true, "reservation_id": 17}).to_string(),
    )])
    .await;
    let api = server.client();
    let mut sink = MemorySink::new();

    let search = SearchCriteria {
        checkin: NaiveDate::from_ymd_opt(2025, 9, 1),
        checkout: NaiveDate::from_ymd_opt(2025, 9, 4),
        guests: 2,
    };
    let mut form = BookingForm::new();
    form.select_room(RoomType::SuiteVistaAlMar, &search).unwrap();
    form.first_name = "María".to_string();
    form.last_name = "González".to_string();
    form.email = "maria@example.com".to_string();
    form.phone = "+506 8888 1234".to_string();
    form.country = "Costa Rica".to_string();

    let id = form.submit(&api, &mut sink).await;
    assert_eq!(id, Some(17));
    assert_eq!(sink.alerts, vec!["Reserva guardada (ID: 17)".to_string()]);

    let body = server.last_body();
    assert_eq!(body["first_name"], "María");
    assert_eq!(body["room_type"], "Suite Vista al Mar");
    assert_eq!(body["checkin_date"], "2025-09-01");
    assert_eq!(body["checkout_date"], "2025-09-04");
    assert_eq!(body["guests"], 2);
    assert!(body.get("comments").is_none());

    // The form reset for the next guest.
    assert_eq!(form.first_name, "");
    assert!(!form.personal_section_visible());
    assert_eq!(form.selected_room(), None);
}

#[tokio::test]
async fn rejected_booking_keeps_the_form_for_correction() {
    let server = StubServer::start(vec![(
        "POST /reservations",
        400,
        json!({"detail": "Número de huéspedes debe estar entre 1 y 10"}).to_string(),
    )])
    .await;
    let api = server.client();
    let mut sink = MemorySink::new();

    let search = SearchCriteria {
        checkin: NaiveDate::from_ymd_opt(2025, 9, 1),
        checkout: NaiveDate::from_ymd_opt(2025, 9, 2),
        guests: 2,
    };
    let mut form = BookingForm::new();
    form.select_room(RoomType::VillaPrivada, &search).unwrap();
    form.first_name = "Carlos".to_string();

    let id = form.submit(&api, &mut sink).await;
    assert_eq!(id, None);
    assert_eq!(
        sink.alerts,
        vec!["Error al crear reserva: Número de huéspedes debe estar entre 1 y 10".to_string()]
    );
    assert_eq!(form.first_name, "Carlos");
    assert!(form.personal_section_visible());
}

#[tokio::test]
async fn rejection_without_detail_alerts_the_unknown_message() {
    let server = StubServer::start(vec![("POST /reservations", 500, "{}".to_string())]).await;
    let api = server.client();
    let mut sink = MemorySink::new();

    let search = SearchCriteria {
        checkin: NaiveDate::from_ymd_opt(2025, 9, 1),
        checkout: NaiveDate::from_ymd_opt(2025, 9, 2),
        guests: 1,
    };
    let mut form = BookingForm::new();
    form.select_room(RoomType::HabitacionEstandar, &search).unwrap();

    form.submit(&api, &mut sink).await;
    assert_eq!(
        sink.alerts,
        vec!["Error al crear reserva: desconocido".to_string()]
    );
}

#[tokio::test]
async fn unreachable_backend_alerts_the_connection_message() {
    let api = ApiClient::builder()
        .base_url("http://127.0.0.1:9".to_string())
        .build();
    let mut sink = MemorySink::new();

    let search = SearchCriteria {
        checkin: NaiveDate::from_ymd_opt(2025, 9, 1),
        checkout: NaiveDate::from_ymd_opt(2025, 9, 2),
        guests: 1,
    };
    let mut form = BookingForm::new();
    form.select_room(RoomType::HabitacionDeluxe, &search).unwrap();

    let id = form.submit(&api, &mut sink).await;
    assert_eq!(id, None);
    assert_eq!(
        sink.alerts,
        vec!["No se pudo conectar con el servidor".to_string()]
    );
}

#[tokio::test]
async fn contact_form_submits_and_clears() {
    let server = StubServer::start(vec![(
        "POST /contact",
        200,
        json!({"ok": true, "message_id": 5}).to_string(),
    )])
    .await;
    let api = server.client();
    let mut sink = MemorySink::new();

    let mut form = ContactForm::new();
    form.full_name = "Ana López".to_string();
    form.email = "ana@example.com".to_string();
    form.message = "¿Tienen habitaciones con vista al mar?".to_string();

    assert!(form.submit(&api, &mut sink).await);
    assert_eq!(sink.alerts, vec!["Mensaje enviado. ¡Gracias!".to_string()]);
    assert_eq!(form.full_name, "");

    let body = server.last_body();
    assert_eq!(body["full_name"], "Ana López");
    assert_eq!(body["message"], "¿Tienen habitaciones con vista al mar?");
}

#[tokio::test]
async fn rejected_contact_message_keeps_the_form() {
    let server = StubServer::start(vec![(
        "POST /contact",
        422,
        json!({"detail": [{"msg": "field required"}]}).to_string(),
    )])
    .await;
    let api = server.client();
    let mut sink = MemorySink::new();

    let mut form = ContactForm::new();
    form.full_name = "Ana".to_string();

    assert!(!form.submit(&api, &mut sink).await);
    assert_eq!(sink.alerts, vec!["Error al enviar mensaje".to_string()]);
    assert_eq!(form.full_name, "Ana");
}

#[tokio::test]
async fn weather_panel_prefers_live_data() {
    let server = StubServer::start(vec![(
        "GET /api/weather/Liberia",
        200,
        json!({"city": "Liberia", "temperature": 30.2, "description": "lluvia fuerte", "humidity": 70})
            .to_string(),
    )])
    .await;

    let mut panel = WeatherPanel::builder()
        .api(server.client())
        .sink(MemorySink::new())
        .province(Province::Guanacaste)
        .build();
    panel.change_province(Province::Guanacaste).await;

    let sink = panel.into_sink();
    assert_eq!(
        sink.values["weather1"],
        "Temperatura: 30°C 🌧️ (lluvia fuerte)"
    );
    // Wind is not reported by the backend, so the widget default shows.
    assert_eq!(
        sink.values["weather3"],
        "Viento: 10 km/h 🌬️ (Velocidad del viento)"
    );
}

#[tokio::test]
async fn archiver_writes_a_backup_from_the_live_endpoint() {
    let server = StubServer::start(vec![(
        "GET /api/weather/San%20Jos%C3%A9",
        200,
        json!({"city": "San José", "temperature": 23.0, "description": "Nublado", "humidity": 80})
            .to_string(),
    )])
    .await;

    let dir = TempDir::new().unwrap();
    let archiver = WeatherArchiver::builder()
        .api(server.client())
        .backup_dir(dir.path().to_path_buf())
        .build()
        .unwrap();

    let path = archiver.update().await.unwrap();
    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(written["city"], "San José");
    assert_eq!(written["weather_data"]["temperature"], 23.0);
    assert_eq!(written["source"], "Hotel Costa Bella API");
}

#[tokio::test]
async fn export_round_trips_live_data() {
    let server = StubServer::start(vec![
        healthy(),
        (
            "GET /api/stats/reservations",
            200,
            json!({"monthly_revenue": 52340, "total_reservations": 89, "occupancy_rate": 84.0, "avg_rating": 4.8})
                .to_string(),
        ),
        ("GET /reservations", 200, demo_reservation_rows()),
    ])
    .await;

    let dir = TempDir::new().unwrap();
    let mut dashboard = Dashboard::builder()
        .api(server.client())
        .sink(MemorySink::new())
        .build();
    dashboard.initialize().await;
    let path = dashboard.export_data(Some(dir.path())).unwrap();

    let written: serde_json::Value =
        serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(written["dataSource"], "Base de datos real");
    assert_eq!(written["totalReservations"], 3);
    assert_eq!(written["kpis"]["revenue"], "$52,340");
    assert_eq!(
        written["reservationsData"].as_array().unwrap().len(),
        3
    );
    assert_eq!(
        written["reservationsData"][0]["first_name"],
        "María"
    );
}
