//! Visitor theme preference routes.
//!
//! The preference lives in a per-browser cookie; the server never stores
//! it. The context object from the domain layer decides when a change
//! actually needs flushing back into the jar.

use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};

use domain::services::{Theme, ThemeContext};

/// Cookie holding the persisted theme preference.
pub const THEME_COOKIE: &str = "clinic_theme";

#[derive(Debug, Serialize, Deserialize)]
pub struct ThemePreference {
    pub theme: Theme,
}

fn context_from_jar(jar: &CookieJar) -> ThemeContext {
    ThemeContext::init(jar.get(THEME_COOKIE).map(|cookie| cookie.value()))
}

/// GET /api/v1/preferences/theme
pub async fn get_theme(jar: CookieJar) -> Json<ThemePreference> {
    let context = context_from_jar(&jar);
    Json(ThemePreference {
        theme: context.theme(),
    })
}

/// PUT /api/v1/preferences/theme
///
/// Updates the preference; the cookie is rewritten only when the value
/// actually changed.
pub async fn put_theme(
    jar: CookieJar,
    Json(preference): Json<ThemePreference>,
) -> (CookieJar, Json<ThemePreference>) {
    let mut context = context_from_jar(&jar);
    context.set(preference.theme);

    let jar = match context.take_flush() {
        Some(theme) => jar.add(
            Cookie::build((THEME_COOKIE, theme.to_string()))
                .path("/")
                .permanent()
                .build(),
        ),
        None => jar,
    };

    (
        jar,
        Json(ThemePreference {
            theme: context.theme(),
        }),
    )
}
