use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

const TODAY: &str = "2025-03-07";

#[derive(Debug, Deserialize)]
struct DayCell {
    date: String,
    completed: bool,
    tooltip: String,
}

#[derive(Debug, Deserialize)]
struct CalendarMonth {
    days: Vec<DayCell>,
}

#[derive(Debug, Deserialize)]
struct CalendarYear {
    year: i32,
    months: Vec<CalendarMonth>,
}

impl CalendarYear {
    fn cell(&self, date: &str) -> &DayCell {
        self.months
            .iter()
            .flat_map(|month| &month.days)
            .find(|day| day.date == date)
            .expect("missing calendar day")
    }
}

#[derive(Debug, Deserialize)]
struct Exercise {
    id: String,
    checked: bool,
}

#[derive(Debug, Deserialize)]
struct CategoryView {
    category: String,
    progress_label: String,
    exercises: Vec<Exercise>,
}

#[derive(Debug, Deserialize)]
struct TrackerView {
    today: String,
    today_completed: bool,
    categories: Vec<CategoryView>,
    calendar: CalendarYear,
}

impl TrackerView {
    fn category(&self, id: &str) -> &CategoryView {
        self.categories
            .iter()
            .find(|view| view.category == id)
            .expect("missing category")
    }
}

#[derive(Debug, Deserialize)]
struct ThemeResponse {
    theme: String,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!("workout_tracker_http_{}_{}.json", std::process::id(), nanos));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/state")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_workout_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("APP_TODAY", TODAY)
        .env("CALENDAR_YEAR", "2025")
        .env_remove("WORKOUT_CATALOG_PATH")
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn post(client: &Client, url: String, body: serde_json::Value) -> TrackerView {
    let response = client.post(url).json(&body).send().await.unwrap();
    assert!(response.status().is_success());
    response.json().await.unwrap()
}

#[tokio::test]
async fn http_checking_a_whole_category_completes_today() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before: TrackerView = client
        .get(format!("{}/api/state", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(before.today, TODAY);

    let ids: Vec<String> = before
        .category("treinoA")
        .exercises
        .iter()
        .map(|exercise| exercise.id.clone())
        .collect();

    let mut view = before;
    for id in &ids {
        view = post(
            &client,
            format!("{}/api/checkbox", server.base_url),
            serde_json::json!({ "id": id, "checked": true }),
        )
        .await;
    }

    let treino_a = view.category("treinoA");
    assert_eq!(treino_a.progress_label, format!("{0}/{0}", ids.len()));
    assert!(treino_a.exercises.iter().all(|exercise| exercise.checked));
    assert!(view.today_completed);
    assert_eq!(view.calendar.cell(TODAY).tooltip, "Hoje: Treino concluído");

    let reset = post(
        &client,
        format!("{}/api/reset", server.base_url),
        serde_json::json!({ "category": "treinoA" }),
    )
    .await;
    assert!(!reset.today_completed);
    assert_eq!(reset.category("treinoA").progress_label, format!("0/{}", ids.len()));
}

#[tokio::test]
async fn http_calendar_toggle_flips_past_day() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();
    let url = format!("{}/api/calendar/toggle", server.base_url);

    let first = post(&client, url.clone(), serde_json::json!({ "date": "2025-02-10" })).await;
    let cell = first.calendar.cell("2025-02-10");
    assert!(cell.completed);
    assert_eq!(cell.tooltip, "Treino concluído");

    let calendar: CalendarYear = client
        .get(format!("{}/api/calendar?year=2025", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(calendar.year, 2025);
    assert!(calendar.cell("2025-02-10").completed);

    let second = post(&client, url, serde_json::json!({ "date": "2025-02-10" })).await;
    assert!(!second.calendar.cell("2025-02-10").completed);
}

#[tokio::test]
async fn http_rejects_invalid_input() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let bad_date = client
        .post(format!("{}/api/calendar/toggle", server.base_url))
        .json(&serde_json::json!({ "date": "2025-2-10" }))
        .send()
        .await
        .unwrap();
    assert_eq!(bad_date.status(), reqwest::StatusCode::BAD_REQUEST);

    let unknown = client
        .post(format!("{}/api/checkbox", server.base_url))
        .json(&serde_json::json!({ "id": "theme", "checked": true }))
        .send()
        .await
        .unwrap();
    assert_eq!(unknown.status(), reqwest::StatusCode::NOT_FOUND);

    let category = client
        .post(format!("{}/api/reset", server.base_url))
        .json(&serde_json::json!({ "category": "treinoC" }))
        .send()
        .await
        .unwrap();
    assert_eq!(category.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_theme_persists_choice() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let saved: ThemeResponse = client
        .post(format!("{}/api/theme", server.base_url))
        .json(&serde_json::json!({ "theme": "dark" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(saved.theme, "dark");

    let loaded: ThemeResponse = client
        .get(format!("{}/api/theme?prefers_dark=false", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(loaded.theme, "dark");
}

#[tokio::test]
async fn http_page_load_reflects_checked_category() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let page = client.get(&server.base_url).send().await.unwrap();
    assert!(page.status().is_success());
    let html = page.text().await.unwrap();
    assert!(html.contains("março 2025 - Dia 07/03"));

    let state: TrackerView = client
        .get(format!("{}/api/state", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<String> = state
        .category("treinoPerna")
        .exercises
        .iter()
        .map(|exercise| exercise.id.clone())
        .collect();
    for id in &ids {
        post(
            &client,
            format!("{}/api/checkbox", server.base_url),
            serde_json::json!({ "id": id, "checked": true }),
        )
        .await;
    }

    let reloaded: TrackerView = client
        .get(format!("{}/api/state", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(reloaded.today_completed);
    assert_eq!(reloaded.calendar.cell(TODAY).tooltip, "Hoje: Treino concluído");

    post(
        &client,
        format!("{}/api/reset", server.base_url),
        serde_json::json!({ "category": "treinoPerna" }),
    )
    .await;
}
