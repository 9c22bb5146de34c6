use crate::auth::sessions::SESSION_TTL_SECS;
use crate::auth::{LoginOutcome, SESSION_COOKIE};
use crate::domain::category::find_category;
use crate::domain::{validate_nomination, NominationForm, Status, ValidationErrors};
use crate::errors::ServerError;
use crate::forms;
use crate::responses::{html_response, redirect, redirect_with_cookie, ResultResp};
use crate::state::AppState;
use crate::templates::pages;
use astra::{Body, Request};
use std::collections::HashMap;
use std::io::Read;
use std::time::{SystemTime, UNIX_EPOCH};

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let (parts, body) = req.into_parts();
    let method = parts.method.as_str();
    let path = parts.uri.path();
    let query = parts.uri.query().unwrap_or("");
    let cookie = parts
        .headers
        .get("cookie")
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    let content_type = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    match (method, path) {
        ("GET", "/") => html_response(pages::home_page()),
        ("GET", "/about") => html_response(pages::about::about_page()),
        ("GET", "/projects") => html_response(pages::projects::projects_page()),
        ("GET", "/contact") => html_response(pages::contact::contact_page()),
        ("GET", "/Landinfo") => html_response(pages::landinfo::landinfo_page()),
        ("GET", "/categories") => html_response(pages::categories_page()),

        ("GET", "/nominate") => get_nominate(query),
        ("POST", "/nominate") => post_nominate(state, content_type.as_deref(), body),

        ("GET", "/admin") => get_admin_login(state, cookie.as_deref()),
        ("POST", "/admin") => post_admin_login(state, body),
        ("GET", "/admin/dashboard") => get_dashboard(state, cookie.as_deref(), query),
        ("POST", "/admin/logout") => post_logout(state, cookie.as_deref()),

        ("GET", _) if path.starts_with("/categories/") => {
            let id = &path["/categories/".len()..];
            let category = find_category(id).ok_or(ServerError::NotFound)?;
            html_response(pages::category_detail_page(category))
        }
        ("POST", _) if path.starts_with("/admin/nominations/") => {
            let rest = &path["/admin/nominations/".len()..];
            post_nomination_action(state, cookie.as_deref(), rest, body)
        }

        _ => Err(ServerError::NotFound),
    }
}

// ---------- public site ----------

fn get_nominate(query: &str) -> ResultResp {
    let params = forms::parse_query(query);
    let mut form = NominationForm::default();

    // A detail page's "Submit Nomination" link carries the category slug.
    if let Some(category) = params.get("category").and_then(|slug| find_category(slug)) {
        form.category = category.title.to_string();
    }

    html_response(pages::nominate_page(&form, &ValidationErrors::new()))
}

fn post_nominate(state: &AppState, content_type: Option<&str>, body: Body) -> ResultResp {
    let bytes = read_body(body)?;

    let boundary = content_type.and_then(forms::boundary_from_content_type);
    let form = match boundary {
        Some(boundary) => {
            let parts = forms::parse_multipart(&bytes, &boundary)?;
            forms::nomination_from_parts(&parts)
        }
        None => NominationForm::from_fields(&forms::parse_form(&bytes)),
    };

    let errors = validate_nomination(&form);
    if !errors.is_empty() {
        return html_response(pages::nominate_page(&form, &errors));
    }

    state.submitter.submit(&form)?;
    html_response(pages::nomination_success_page())
}

// ---------- admin ----------

fn get_admin_login(state: &AppState, cookie: Option<&str>) -> ResultResp {
    if is_authenticated(state, cookie, now_unix())? {
        return redirect("/admin/dashboard");
    }
    html_response(pages::admin_login_page("", &ValidationErrors::new()))
}

fn post_admin_login(state: &AppState, body: Body) -> ResultResp {
    let fields = forms::parse_form(&read_body(body)?);
    let email = fields.get("email").map(String::as_str).unwrap_or("");
    let password = fields.get("password").map(String::as_str).unwrap_or("");

    match state.gate.login(&state.sessions, email, password, now_unix())? {
        LoginOutcome::Granted(token) => {
            let cookie = format!(
                "{SESSION_COOKIE}={token}; Path=/; HttpOnly; Max-Age={SESSION_TTL_SECS}"
            );
            redirect_with_cookie("/admin/dashboard", &cookie)
        }
        LoginOutcome::Invalid(errors) => html_response(pages::admin_login_page(email, &errors)),
    }
}

fn get_dashboard(state: &AppState, cookie: Option<&str>, query: &str) -> ResultResp {
    if !is_authenticated(state, cookie, now_unix())? {
        return redirect("/admin");
    }

    let params = forms::parse_query(query);
    let search = params.get("q").cloned().unwrap_or_default();
    let category_raw = params
        .get("category")
        .cloned()
        .unwrap_or_else(|| "all".to_string());
    let status_raw = params
        .get("status")
        .cloned()
        .unwrap_or_else(|| "all".to_string());

    let category = match category_raw.as_str() {
        "" | "all" => None,
        other => Some(other),
    };
    // Anything that is not a known status ("all" included) means no filter.
    let status = status_raw.parse::<Status>().ok();

    let records = state.store.list(&search, category, status)?;
    let stats = state.store.stats()?;

    html_response(pages::admin_dashboard_page(&pages::DashboardVm {
        records,
        stats,
        search,
        category: category_raw,
        status: status_raw,
    }))
}

fn post_nomination_action(
    state: &AppState,
    cookie: Option<&str>,
    rest: &str,
    body: Body,
) -> ResultResp {
    let (id, action) = rest.split_once('/').ok_or(ServerError::NotFound)?;
    let id: u64 = id.parse().map_err(|_| ServerError::NotFound)?;

    if !is_authenticated(state, cookie, now_unix())? {
        return redirect("/admin");
    }

    // The action forms carry the current filters so the redirect keeps them.
    let fields = forms::parse_form(&read_body(body)?);

    let found = match action {
        "approve" => state.store.set_status(id, Status::Approved)?.is_some(),
        "reject" => state.store.set_status(id, Status::Rejected)?.is_some(),
        "delete" => state.store.remove(id)?,
        _ => return Err(ServerError::NotFound),
    };
    if !found {
        return Err(ServerError::NotFound);
    }

    redirect(&dashboard_location(&fields))
}

fn post_logout(state: &AppState, cookie: Option<&str>) -> ResultResp {
    if let Some(token) = session_token(cookie) {
        state.gate.logout(&state.sessions, &token)?;
    }
    let cleared = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; Max-Age=0");
    redirect_with_cookie("/admin", &cleared)
}

// ---------- helpers ----------

fn dashboard_location(fields: &HashMap<String, String>) -> String {
    let get = |k: &str| fields.get(k).map(String::as_str).unwrap_or("");
    let query = forms::encode_query([
        ("q", get("q")),
        ("category", get("category")),
        ("status", get("status")),
    ]);
    if query.is_empty() {
        "/admin/dashboard".to_string()
    } else {
        format!("/admin/dashboard?{query}")
    }
}

fn session_token(cookie: Option<&str>) -> Option<String> {
    cookie?.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

fn is_authenticated(
    state: &AppState,
    cookie: Option<&str>,
    now: i64,
) -> Result<bool, ServerError> {
    match session_token(cookie) {
        Some(token) => state.sessions.is_valid(&token, now),
        None => Ok(false),
    }
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs() as i64
}

fn read_body(mut body: Body) -> Result<Vec<u8>, ServerError> {
    let mut buf = Vec::new();
    body.reader()
        .read_to_end(&mut buf)
        .map_err(|_| ServerError::BadRequest("failed to read request body".into()))?;
    Ok(buf)
}
