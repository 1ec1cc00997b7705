//! Administrator credential checks and session tokens.
//!
//! Passwords are stored as unsalted lowercase hex SHA-256 digests, the
//! format the database is seeded with. Sessions are per-login random tokens
//! with a fixed lifetime; there is no shared static token.

use std::collections::HashMap;
use std::sync::Mutex;

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::http::header;
use actix_web::{Error, FromRequest, HttpRequest, HttpResponse, web};
use chrono::{DateTime, Duration, Utc};
use serde_json::json;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;
use uuid::Uuid;

/// Hex SHA-256 digest of a password.
pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

/// Compare a candidate password against a stored hex digest in constant
/// time. Digests that fail to decode never match.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(stored) = hex::decode(stored_hash) else {
        return false;
    };
    let computed = Sha256::digest(password.as_bytes());
    computed.as_slice().ct_eq(&stored).into()
}

struct Session {
    username: String,
    expires_at: DateTime<Utc>,
}

/// Process-wide store of live admin sessions.
pub struct SessionStore {
    ttl: Duration,
    sessions: Mutex<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: Mutex::new(HashMap::new()),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Session>> {
        match self.sessions.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Issue a fresh random token for a successfully authenticated admin.
    ///
    /// Also sweeps expired sessions so abandoned tokens do not accumulate
    /// for the life of the process.
    pub fn issue(&self, username: &str) -> String {
        let now = Utc::now();
        let token = Uuid::new_v4().to_string();
        let mut sessions = self.lock();
        sessions.retain(|_, session| session.expires_at > now);
        sessions.insert(
            token.clone(),
            Session {
                username: username.to_string(),
                expires_at: now + self.ttl,
            },
        );
        token
    }

    /// Resolve a token to the admin it belongs to, pruning it if expired.
    pub fn session_user(&self, token: &str) -> Option<String> {
        let mut sessions = self.lock();
        match sessions.get(token) {
            Some(session) if session.expires_at > Utc::now() => Some(session.username.clone()),
            Some(_) => {
                sessions.remove(token);
                None
            }
            None => None,
        }
    }

    /// True iff the token maps to a live session.
    pub fn authorize(&self, token: &str) -> bool {
        self.session_user(token).is_some()
    }
}

/// Extractor proving the request carries a live admin session.
///
/// Reads the `Authorization: Bearer <token>` header and checks it against
/// the [`SessionStore`]. Handlers that take this parameter never run for
/// unauthorized callers; the rejection is a 403 with a structured body.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub username: String,
}

fn forbidden() -> Error {
    let body = json!({"status": "error", "message": "權限不足"});
    InternalError::from_response("forbidden", HttpResponse::Forbidden().json(body)).into()
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = std::future::Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let result = req
            .app_data::<web::Data<SessionStore>>()
            .and_then(|store| {
                let token = req
                    .headers()
                    .get(header::AUTHORIZATION)?
                    .to_str()
                    .ok()?
                    .strip_prefix("Bearer ")?
                    .to_string();
                store.session_user(&token)
            })
            .map(|username| AdminSession { username })
            .ok_or_else(forbidden);
        std::future::ready(result)
    }
}
