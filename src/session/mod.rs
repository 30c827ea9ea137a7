use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{Error, FromRequest, HttpRequest, web};
use redis::{Client, RedisError, aio::ConnectionManager};
use serde::{Deserialize, Serialize};
use std::future::{Ready, ready};
use uuid::Uuid;

use crate::error::AppError;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "sid";

/// Generate a fresh opaque session token (128 bits, hex).
pub fn new_token() -> String {
    Uuid::new_v4().simple().to_string()
}

fn is_valid_token(token: &str) -> bool {
    token.len() == 32 && token.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Build the session cookie carrying a token.
pub fn session_cookie(token: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, token.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

// ── Flash messages ──

/// Severity of a flash message; rendered as a CSS class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Success,
    Error,
}

/// A one-shot status message shown on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub level: Level,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: Level::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            text: text.into(),
        }
    }
}

/// Redis key generators
mod keys {
    /// Key binding a session token to a user id
    pub fn session(token: &str) -> String {
        format!("session:{token}")
    }

    /// Key holding a session's pending flash messages
    pub fn flash(token: &str) -> String {
        format!("flash:{token}")
    }
}

// ── Store ──

/// Redis-backed session and flash-message store.
#[derive(Clone)]
pub struct SessionStore {
    connection: ConnectionManager,
    ttl_secs: u64,
}

impl SessionStore {
    pub async fn new(redis_url: &str, ttl_secs: u64) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        Ok(Self {
            connection,
            ttl_secs,
        })
    }

    /// Bind a token to a user id, starting the session TTL.
    pub async fn bind(&self, token: &str, user_id: Uuid) -> redis::RedisResult<()> {
        redis::cmd("SET")
            .arg(keys::session(token))
            .arg(user_id.to_string())
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Resolve a token to a user id, sliding the TTL on a hit.
    pub async fn user_id(&self, token: &str) -> redis::RedisResult<Option<Uuid>> {
        let key = keys::session(token);
        let value: Option<String> = redis::cmd("GET")
            .arg(&key)
            .query_async(&mut self.connection.clone())
            .await?;

        match value.as_deref().map(Uuid::parse_str) {
            Some(Ok(user_id)) => {
                let _: () = redis::cmd("EXPIRE")
                    .arg(&key)
                    .arg(self.ttl_secs)
                    .query_async(&mut self.connection.clone())
                    .await?;
                Ok(Some(user_id))
            }
            _ => Ok(None),
        }
    }

    /// Drop a session and any flash messages queued on it.
    pub async fn destroy(&self, token: &str) -> redis::RedisResult<()> {
        redis::cmd("DEL")
            .arg(keys::session(token))
            .arg(keys::flash(token))
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Append a flash message to the session's queue.
    pub async fn push_flash(&self, token: &str, message: Message) -> redis::RedisResult<()> {
        let key = keys::flash(token);
        let mut pending = self.read_flash(&key).await?;
        pending.push(message);

        let serialized = serde_json::to_string(&pending).map_err(|e| {
            RedisError::from((
                redis::ErrorKind::TypeError,
                "Serialization error",
                e.to_string(),
            ))
        })?;

        redis::cmd("SET")
            .arg(&key)
            .arg(serialized)
            .arg("EX")
            .arg(self.ttl_secs)
            .query_async(&mut self.connection.clone())
            .await
    }

    /// Drain the session's flash messages: read once, then clear.
    pub async fn take_flash(&self, token: &str) -> redis::RedisResult<Vec<Message>> {
        let key = keys::flash(token);
        let pending = self.read_flash(&key).await?;
        if !pending.is_empty() {
            let _: () = redis::cmd("DEL")
                .arg(&key)
                .query_async(&mut self.connection.clone())
                .await?;
        }
        Ok(pending)
    }

    async fn read_flash(&self, key: &str) -> redis::RedisResult<Vec<Message>> {
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut self.connection.clone())
            .await?;

        match value {
            Some(v) => serde_json::from_str(&v).map_err(|e| {
                RedisError::from((
                    redis::ErrorKind::TypeError,
                    "Deserialization error",
                    e.to_string(),
                ))
            }),
            None => Ok(Vec::new()),
        }
    }
}

// ── Request handle ──

/// Per-request session handle: the caller's token (minted lazily when the
/// request carries no cookie) plus the store it lives in. Extraction never
/// fails for lack of a cookie; authentication is layered on top by
/// `AuthenticatedUser`.
pub struct SessionHandle {
    token: String,
    fresh: bool,
    store: SessionStore,
}

impl SessionHandle {
    pub async fn user_id(&self) -> Result<Option<Uuid>, AppError> {
        Ok(self.store.user_id(&self.token).await?)
    }

    /// Open a session for a user. The token is rotated so a pre-login cookie
    /// never becomes an authenticated one.
    pub async fn login(&mut self, user_id: Uuid) -> Result<(), AppError> {
        self.token = new_token();
        self.fresh = true;
        self.store.bind(&self.token, user_id).await?;
        Ok(())
    }

    /// Destroy the server-side session and fall back to a fresh anonymous
    /// token, which can still carry a flash message.
    pub async fn logout(&mut self) -> Result<(), AppError> {
        self.store.destroy(&self.token).await?;
        self.token = new_token();
        self.fresh = true;
        Ok(())
    }

    pub async fn flash(&self, message: Message) -> Result<(), AppError> {
        Ok(self.store.push_flash(&self.token, message).await?)
    }

    pub async fn take_messages(&self) -> Result<Vec<Message>, AppError> {
        Ok(self.store.take_flash(&self.token).await?)
    }

    /// True when the token was minted during this request and the response
    /// must (re-)set the cookie.
    pub fn is_fresh(&self) -> bool {
        self.fresh
    }

    pub fn cookie(&self) -> Cookie<'static> {
        session_cookie(&self.token)
    }
}

impl FromRequest for SessionHandle {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let store = match req.app_data::<web::Data<SessionStore>>() {
            Some(store) => store.get_ref().clone(),
            None => {
                return ready(Err(actix_web::error::ErrorInternalServerError(
                    "Session store not configured",
                )));
            }
        };

        let (token, fresh) = match req
            .cookie(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .filter(|t| is_valid_token(t))
        {
            Some(token) => (token, false),
            None => (new_token(), true),
        };

        ready(Ok(SessionHandle {
            token,
            fresh,
            store,
        }))
    }
}
