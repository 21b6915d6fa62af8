use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::application::access::{AuthContext, AuthRefusal};
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;

/// Tokens are issued by the identity service sharing `JWT_SECRET`; `sub` is the user id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

pub struct Bearer(pub String);

impl Bearer {
    fn from_parts(parts: &Parts) -> Option<Self> {
        // 1) Prefer Authorization header if present
        if let Some(auth) = parts
            .headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
        {
            if let Some(t) = auth.strip_prefix("Bearer ") {
                return Some(Bearer(t.trim().to_string()));
            }
        }

        // 2) Fallback to HttpOnly cookie `access_token`
        parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|cookie_hdr| get_cookie(cookie_hdr, "access_token"))
            .map(Bearer)
    }
}

fn get_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (k, v) = pair.trim().split_once('=')?;
        (k == name && !v.is_empty()).then(|| v.to_string())
    })
}

pub fn validate_bearer(cfg: &Config, bearer: &Bearer) -> Result<String, AuthRefusal> {
    if bearer.0.is_empty() {
        return Err(AuthRefusal::MissingToken);
    }
    let data = jsonwebtoken::decode::<Claims>(
        &bearer.0,
        &DecodingKey::from_secret(cfg.jwt_secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthRefusal::ExpiredToken,
        _ => AuthRefusal::InvalidToken,
    })?;
    if data.claims.sub.trim().is_empty() {
        return Err(AuthRefusal::InvalidToken);
    }
    Ok(data.claims.sub)
}

pub fn resolve_auth_context(cfg: &Config, bearer: Option<Bearer>) -> AuthContext {
    let Some(bearer) = bearer else {
        return AuthContext::Unauthenticated {
            reason: AuthRefusal::MissingToken,
        };
    };
    match validate_bearer(cfg, &bearer) {
        Ok(user_id) => AuthContext::Authenticated { user_id },
        Err(reason) => {
            tracing::debug!(%reason, "auth_context_unauthenticated");
            AuthContext::Unauthenticated { reason }
        }
    }
}

// Never rejects: each handler decides what an unauthenticated caller may do.
#[axum::async_trait]
impl FromRequestParts<AppContext> for AuthContext {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        Ok(resolve_auth_context(&ctx.cfg, Bearer::from_parts(parts)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::config::StorageBackend;
    use jsonwebtoken::{EncodingKey, Header};

    fn cfg() -> Config {
        Config {
            api_port: 0,
            frontend_url: None,
            database_url: String::new(),
            db_max_connections: 1,
            storage_backend: StorageBackend::Memory,
            jwt_secret: "unit-test-secret".into(),
            body_max_bytes: 1024,
            is_production: false,
        }
    }

    fn token(secret: &str, sub: &str, exp_offset: i64) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset) as usize;
        jsonwebtoken::encode(
            &Header::default(),
            &Claims {
                sub: sub.into(),
                exp,
            },
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn valid_token_resolves_user() {
        let ctx = resolve_auth_context(
            &cfg(),
            Some(Bearer(token("unit-test-secret", "alice", 3600))),
        );
        assert_eq!(
            ctx,
            AuthContext::Authenticated {
                user_id: "alice".into()
            }
        );
    }

    #[test]
    fn refusal_reasons_are_distinguished() {
        let cfg = cfg();
        assert_eq!(
            resolve_auth_context(&cfg, None).require_user(),
            Err(AuthRefusal::MissingToken)
        );
        assert_eq!(
            resolve_auth_context(&cfg, Some(Bearer(token("other-secret", "alice", 3600))))
                .require_user(),
            Err(AuthRefusal::InvalidToken)
        );
        assert_eq!(
            resolve_auth_context(&cfg, Some(Bearer(token("unit-test-secret", "alice", -3600))))
                .require_user(),
            Err(AuthRefusal::ExpiredToken)
        );
        assert_eq!(
            resolve_auth_context(&cfg, Some(Bearer("garbage".into()))).require_user(),
            Err(AuthRefusal::InvalidToken)
        );
    }

    #[test]
    fn reads_access_token_cookie() {
        assert_eq!(
            get_cookie("theme=dark; access_token=abc.def; x=1", "access_token").as_deref(),
            Some("abc.def")
        );
        assert_eq!(get_cookie("access_token=", "access_token"), None);
    }
}
