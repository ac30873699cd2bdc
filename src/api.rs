//! HTTP server: rendered pages plus the JSON API behind the dashboard widgets.
//!
//! Browser local storage is replaced by a per-client slot store; clients
//! identify themselves with an opaque `client` id.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, Json},
    routing::{get, post, put},
    Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use kku_chatbot::{ChatBot, ChatMessage, SessionStore};
use kku_core::config::Config;
use kku_core::error::GatewayError;
use kku_core::locale::{self, Locale, LocaleContext};
use kku_core::traits::LocalStorage;
use kku_i18n::Translator;
use kku_services::board::Board;
use kku_services::calendar;
use kku_services::checklist::{self, Category, ListKind};
use kku_services::costs::{self, CostEstimate, Currency};
use kku_services::programs::{self, ProgramFilter};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::pages::{self, DashboardData, LinkStyle, Page, View};

/// Storage key of a client's preferred locale.
pub const PREFERRED_LANGUAGE_KEY: &str = "preferred-language";

type ApiResult<T> = Result<T, (StatusCode, Json<Value>)>;

/// Shared state for handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    storage: Arc<dyn LocalStorage>,
    uptime: Instant,
    sessions: Arc<Mutex<SessionStore>>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn LocalStorage>) -> Self {
        let sessions =
            SessionStore::new(config.chatbot.max_sessions, config.chatbot.session_idle());
        Self {
            config: Arc::new(config),
            storage,
            uptime: Instant::now(),
            sessions: Arc::new(Mutex::new(sessions)),
        }
    }
}

fn error_response(e: GatewayError) -> (StatusCode, Json<Value>) {
    let status = match e {
        GatewayError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
        _ => {
            error!("request failed: {e}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    (status, Json(json!({"error": e.to_string()})))
}

fn bad_request(message: impl Into<String>) -> (StatusCode, Json<Value>) {
    error_response(GatewayError::InvalidInput(message.into()))
}

fn parse_body<T>(body: Result<Json<T>, JsonRejection>) -> ApiResult<T> {
    body.map(|Json(value)| value)
        .map_err(|e| bad_request(format!("invalid request: {e}")))
}

fn require_client(client: Option<&str>) -> ApiResult<&str> {
    match client.map(str::trim) {
        Some(c) if !c.is_empty() => Ok(c),
        _ => Err(bad_request("client must not be empty")),
    }
}

/// Query parameter first, then the client's stored preference, then the default.
async fn resolve_locale(
    state: &AppState,
    lang: Option<&str>,
    client: Option<&str>,
) -> LocaleContext {
    if let Some(locale) = lang.and_then(Locale::from_code) {
        return locale.into();
    }
    let stored = match client {
        Some(client) => match state.storage.get_item(client, PREFERRED_LANGUAGE_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!("failed to read language preference: {e}");
                None
            }
        },
        None => None,
    };
    locale::resolve_with_preference(lang, stored.as_deref()).into()
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    lang: Option<String>,
    client: Option<String>,
    level: Option<String>,
    language: Option<String>,
    q: Option<String>,
    amount: Option<String>,
    currency: Option<String>,
}

async fn render_dashboard(state: &AppState, query: &PageQuery, view: &View) -> String {
    let t = *view.translator();
    let client = query.client.as_deref().map(str::trim).filter(|c| !c.is_empty());
    let mut data = match client {
        Some(client) => {
            let checklist = Board::new(state.storage.clone(), client, ListKind::Checklist, t)
                .items()
                .await;
            let tracker = Board::new(state.storage.clone(), client, ListKind::Progress, t)
                .items()
                .await;
            DashboardData::with_lists(&t, checklist, tracker, Utc::now().date_naive())
        }
        None => DashboardData::seeded(&t),
    };
    if let Some(amount) = query.amount.as_deref() {
        let currency = query
            .currency
            .as_deref()
            .and_then(|c| c.parse::<Currency>().ok())
            .unwrap_or(Currency::Usd);
        data.conversion = costs::convert(amount, currency);
    }
    pages::render_dashboard(view, &data)
}

async fn render_page(state: &AppState, query: &PageQuery, page: Page) -> Html<String> {
    let ctx = resolve_locale(state, query.lang.as_deref(), query.client.as_deref()).await;
    let view = View::new(ctx, LinkStyle::Query);
    let html = match page {
        Page::Dashboard => render_dashboard(state, query, &view).await,
        Page::Programs => {
            let criteria = ProgramFilter::parse(
                query.level.as_deref(),
                query.language.as_deref(),
                query.q.as_deref(),
            )
            .unwrap_or_default();
            pages::render_programs(&view, &criteria)
        }
        _ => pages::render(page, &view),
    };
    Html(html)
}

async fn home(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    render_page(&state, &query, Page::Home).await
}

async fn preparation(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    render_page(&state, &query, Page::Preparation).await
}

async fn arrival(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    render_page(&state, &query, Page::Arrival).await
}

async fn campus_life(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    render_page(&state, &query, Page::CampusLife).await
}

async fn dashboard(State(state): State<AppState>, Query(query): Query<PageQuery>) -> Html<String> {
    render_page(&state, &query, Page::Dashboard).await
}

async fn programs_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Html<String> {
    render_page(&state, &query, Page::Programs).await
}

// ---------------------------------------------------------------------------
// Site metadata
// ---------------------------------------------------------------------------

/// `GET /api/health`
async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": state.config.gateway.name,
        "version": env!("CARGO_PKG_VERSION"),
        "uptime_secs": state.uptime.elapsed().as_secs(),
        "storage": state.storage.name(),
    }))
}

/// `GET /api/locales`
async fn locales() -> Json<Value> {
    let list: Vec<Value> = Locale::ALL
        .iter()
        .map(|l| json!({"code": l.code(), "name": l.native_name(), "flag": l.flag()}))
        .collect();
    Json(json!({"default": Locale::DEFAULT.code(), "locales": list}))
}

/// `GET /api/i18n/{locale}/{path}`
async fn translation(Path((code, path)): Path<(String, String)>) -> ApiResult<Json<Value>> {
    let locale: Locale = code.parse().map_err(error_response)?;
    let t = Translator::new(locale);
    let text = t.get(&path).ok_or_else(|| {
        error_response(GatewayError::NotFound(format!("no translation for {path}")))
    })?;
    Ok(Json(json!({
        "locale": locale.code(),
        "path": path,
        "text": text,
        "translated": t.is_translated(&path),
    })))
}

// ---------------------------------------------------------------------------
// Chat
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ChatRequest {
    session: Option<Uuid>,
    message: String,
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QuickReplyRequest {
    session: Option<Uuid>,
    key: String,
    lang: Option<String>,
}

/// Append a user line, opening the session with the greeting if it is new.
async fn push_user_line(state: &AppState, session: Uuid, t: &Translator, text: &str) -> Value {
    let mut sessions = state.sessions.lock().await;
    let conversation = sessions.entry(session);
    conversation.open(t.text("chatbot.greeting"));
    json!(conversation.push_user(text))
}

/// Append the reply. A session deleted or evicted meanwhile is not revived.
async fn push_bot_line(state: &AppState, session: Uuid, text: &str) -> Value {
    let mut sessions = state.sessions.lock().await;
    match sessions.touch(&session) {
        Some(conversation) => json!(conversation.push_bot(text)),
        None => json!(ChatMessage::bot(text)),
    }
}

/// `POST /api/chat`: free-text question, answered after the reply delay.
async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let request = parse_body(body)?;
    let message = request.message.trim();
    if message.is_empty() {
        return Err(bad_request("message must not be empty"));
    }

    let session = request.session.unwrap_or_else(Uuid::new_v4);
    let locale = locale::resolve(request.lang.as_deref());
    let t = Translator::new(locale);

    let user = push_user_line(&state, session, &t, message).await;
    // The sessions lock is not held while the bot waits.
    let bot = ChatBot::new(locale, &state.config.chatbot);
    let answer = bot.answer(message).await;
    let reply = push_bot_line(&state, session, answer).await;

    Ok(Json(json!({
        "session": session,
        "topic": kku_chatbot::resolve_topic(message).key(),
        "user": user,
        "reply": reply,
    })))
}

/// `POST /api/chat/quick`: quick-reply button, answered immediately.
async fn chat_quick(
    State(state): State<AppState>,
    body: Result<Json<QuickReplyRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let request = parse_body(body)?;
    let session = request.session.unwrap_or_else(Uuid::new_v4);
    let locale = locale::resolve(request.lang.as_deref());
    let t = Translator::new(locale);

    let label_key = format!("chatbot.quickReplies.{}", request.key);
    let label = t.text_or(&label_key, &request.key);
    let user = push_user_line(&state, session, &t, label).await;
    let bot = ChatBot::new(locale, &state.config.chatbot);
    let reply = push_bot_line(&state, session, bot.quick_reply(&request.key)).await;

    Ok(Json(json!({
        "session": session,
        "topic": kku_chatbot::quick_reply_topic(&request.key).key(),
        "user": user,
        "reply": reply,
    })))
}

/// `GET /api/chat/{session}`: full transcript.
async fn chat_history(
    State(state): State<AppState>,
    Path(session): Path<Uuid>,
) -> ApiResult<Json<Value>> {
    let sessions = state.sessions.lock().await;
    let conversation = sessions.get(&session).ok_or_else(|| {
        error_response(GatewayError::NotFound(format!("no chat session {session}")))
    })?;
    Ok(Json(json!({"session": session, "messages": conversation.messages()})))
}

/// `DELETE /api/chat/{session}`: drop the session and its transcript.
async fn chat_clear(State(state): State<AppState>, Path(session): Path<Uuid>) -> StatusCode {
    state.sessions.lock().await.remove(&session);
    StatusCode::NO_CONTENT
}

// ---------------------------------------------------------------------------
// Calendar
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CalendarQuery {
    year: Option<i32>,
    month: Option<u32>,
    selected: Option<String>,
    lang: Option<String>,
}

/// `GET /api/calendar`
async fn calendar_month(Query(query): Query<CalendarQuery>) -> ApiResult<Json<Value>> {
    let today = Utc::now().date_naive();
    let year = query.year.unwrap_or(today.year());
    let month = query.month.unwrap_or(today.month());
    let selected = match query.selected.as_deref() {
        Some(s) => Some(
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| bad_request(format!("invalid selected date {s}: {e}")))?,
        ),
        None => None,
    };

    let t = Translator::new(locale::resolve(query.lang.as_deref()));
    let events = calendar::sample_events(&t);
    let grid = calendar::build_month(year, month, &events, Some(today), selected)
        .map_err(error_response)?;
    let month_name = t
        .list("calendar.monthNames")
        .get(month as usize - 1)
        .copied()
        .unwrap_or_default();

    Ok(Json(json!({
        "title": format!("{month_name} {year}"),
        "day_names": t.list("calendar.dayNames"),
        "grid": grid,
        "previous": grid.previous(),
        "next": grid.next(),
        "selected_events": selected.map(|d| calendar::events_on(&events, d)),
        "upcoming": calendar::upcoming(&events, 3),
    })))
}

// ---------------------------------------------------------------------------
// Checklists
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct ListQuery {
    client: Option<String>,
    lang: Option<String>,
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ToggleRequest {
    client: String,
    id: String,
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResetRequest {
    client: String,
    lang: Option<String>,
}

async fn open_board(
    state: &AppState,
    list: &str,
    client: &str,
    lang: Option<&str>,
) -> ApiResult<Board> {
    let kind: ListKind = list.parse().map_err(error_response)?;
    let ctx = resolve_locale(state, lang, Some(client)).await;
    Ok(Board::new(state.storage.clone(), client, kind, Translator::new(ctx.current())))
}

fn list_body(
    kind: ListKind,
    items: &[checklist::ChecklistItem],
    category: Option<Category>,
) -> Value {
    let by_category: Vec<Value> = kind
        .categories()
        .iter()
        .map(|&c| json!({"category": c, "progress": checklist::progress(items, Some(c))}))
        .collect();
    json!({
        "list": kind,
        "items": checklist::filter(items, category),
        "progress": checklist::progress(items, category),
        "overall": checklist::progress(items, None),
        "categories": by_category,
    })
}

/// `GET /api/checklist/{list}`
async fn checklist_get(
    State(state): State<AppState>,
    Path(list): Path<String>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Value>> {
    let client = require_client(query.client.as_deref())?;
    let category = match query.category.as_deref() {
        None | Some("") | Some("all") => None,
        Some(c) => Some(c.parse::<Category>().map_err(error_response)?),
    };
    let board = open_board(&state, &list, client, query.lang.as_deref()).await?;
    let items = board.items().await;
    Ok(Json(list_body(board.kind(), &items, category)))
}

/// `POST /api/checklist/{list}/toggle`
async fn checklist_toggle(
    State(state): State<AppState>,
    Path(list): Path<String>,
    body: Result<Json<ToggleRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let request = parse_body(body)?;
    let client = require_client(Some(&request.client))?;
    let board = open_board(&state, &list, client, request.lang.as_deref()).await?;
    let items = board.toggle(&request.id).await.map_err(error_response)?;
    Ok(Json(list_body(board.kind(), &items, None)))
}

/// `POST /api/checklist/{list}/reset`
async fn checklist_reset(
    State(state): State<AppState>,
    Path(list): Path<String>,
    body: Result<Json<ResetRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let request = parse_body(body)?;
    let client = require_client(Some(&request.client))?;
    let board = open_board(&state, &list, client, request.lang.as_deref()).await?;
    let items = board.reset().await;
    Ok(Json(list_body(board.kind(), &items, None)))
}

// ---------------------------------------------------------------------------
// Preferences, programs, costs
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct LanguagePreference {
    client: String,
    lang: String,
}

/// `PUT /api/preferences/language`
async fn set_language(
    State(state): State<AppState>,
    body: Result<Json<LanguagePreference>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let request = parse_body(body)?;
    let client = require_client(Some(&request.client))?;
    let locale: Locale = request.lang.parse().map_err(error_response)?;
    state
        .storage
        .set_item(client, PREFERRED_LANGUAGE_KEY, locale.code())
        .await
        .map_err(error_response)?;
    Ok(Json(json!({"client": client, "lang": locale.code()})))
}

#[derive(Debug, Deserialize)]
struct ProgramQuery {
    level: Option<String>,
    language: Option<String>,
    q: Option<String>,
}

/// `GET /api/programs`
async fn programs_list(Query(query): Query<ProgramQuery>) -> ApiResult<Json<Value>> {
    let criteria = ProgramFilter::parse(
        query.level.as_deref(),
        query.language.as_deref(),
        query.q.as_deref(),
    )
    .map_err(error_response)?;
    let found = programs::filter(&criteria);
    Ok(Json(json!({
        "count": found.len(),
        "programs": found,
        "level_counts": programs::level_counts(),
    })))
}

#[derive(Debug, Deserialize)]
struct CostRequest {
    #[serde(flatten)]
    estimate: CostEstimate,
    #[serde(default)]
    currency: Currency,
}

/// `POST /api/costs`
async fn cost_estimate(body: Result<Json<CostRequest>, JsonRejection>) -> ApiResult<Json<Value>> {
    let CostRequest { estimate, currency } = parse_body(body)?;
    let monthly = estimate.monthly_total();
    let semester = estimate.semester_total();
    Ok(Json(json!({
        "currency": currency,
        "monthly_total": monthly,
        "semester_tuition": estimate.tuition,
        "semester_total": semester,
        "formatted": {
            "monthly_total": costs::format(monthly, currency),
            "semester_tuition": costs::format(estimate.tuition, currency),
            "semester_total": costs::format(semester, currency),
        },
        "breakdown": estimate.breakdown(),
    })))
}

#[derive(Debug, Deserialize)]
struct ConvertQuery {
    amount: Option<String>,
    from: Option<String>,
}

/// `GET /api/convert`: the dashboard's USD/KRW converter.
async fn convert_currency(Query(query): Query<ConvertQuery>) -> ApiResult<Json<Value>> {
    let from = match query.from.as_deref() {
        None | Some("") => Currency::Usd,
        Some(code) => code.parse().map_err(error_response)?,
    };
    let amount = query.amount.as_deref().unwrap_or("");
    Ok(Json(json!({
        "rate": costs::KRW_PER_USD,
        "conversion": costs::convert(amount, from),
    })))
}

/// Build the axum router with shared state.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;
    Router::new()
        .route("/", get(home))
        .route("/preparation", get(preparation))
        .route("/arrival", get(arrival))
        .route("/campus-life", get(campus_life))
        .route("/dashboard", get(dashboard))
        .route("/programs", get(programs_page))
        .route("/api/health", get(health))
        .route("/api/locales", get(locales))
        .route("/api/i18n/{locale}/{path}", get(translation))
        .route("/api/chat", post(chat))
        .route("/api/chat/quick", post(chat_quick))
        .route("/api/chat/{session}", get(chat_history).delete(chat_clear))
        .route("/api/calendar", get(calendar_month))
        .route("/api/checklist/{list}", get(checklist_get))
        .route("/api/checklist/{list}/toggle", post(checklist_toggle))
        .route("/api/checklist/{list}/reset", post(checklist_reset))
        .route("/api/preferences/language", put(set_language))
        .route("/api/programs", get(programs_list))
        .route("/api/costs", post(cost_estimate))
        .route("/api/convert", get(convert_currency))
        .layer(axum::extract::DefaultBodyLimit::max(body_limit))
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn serve(state: AppState) -> anyhow::Result<()> {
    let addr = format!("{}:{}", state.config.server.host, state.config.server.port);
    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind to {addr}: {e}"))?;
    info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
