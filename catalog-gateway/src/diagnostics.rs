//! Health probes and fault-injection endpoints for external test harnesses.
//!
//! None of these touch the catalog's records. `/api/slow`, `/api/error` and
//! `/api/random` give load and smoke tests fixed latency, a guaranteed
//! failure, and a failure that flips with the wall-clock second.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    config::{BUILD_DATE, RUNTIME_VERSION, VERSION},
    error::GatewayError,
    state::SharedState,
};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub timestamp: DateTime<Utc>,
    pub checks: ReadyChecks,
}

/// Individual readiness checks.
#[derive(Debug, Serialize)]
pub struct ReadyChecks {
    /// Both collection locks are usable.
    pub database: bool,
    /// There is no cache; always `true`.
    pub cache: bool,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
    pub build_date: &'static str,
    pub runtime_version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SlowResponse {
    pub message: &'static str,
    /// Applied delay, e.g. `"3s"`.
    pub delay: String,
}

#[derive(Debug, Serialize)]
pub struct RandomResponse {
    pub success: bool,
    /// Unix timestamp (seconds) that decided the outcome.
    pub random: i64,
}

/// `GET /health` — liveness probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy", timestamp: Utc::now(), version: VERSION })
}

/// `GET /ready` — readiness probe.
pub async fn ready(State(state): State<SharedState>) -> Json<ReadyResponse> {
    let database = state.catalog.is_healthy();
    Json(ReadyResponse {
        ready: database,
        timestamp: Utc::now(),
        checks: ReadyChecks { database, cache: true },
    })
}

/// `GET /version`
pub async fn version() -> Json<VersionResponse> {
    Json(VersionResponse { version: VERSION, build_date: BUILD_DATE, runtime_version: RUNTIME_VERSION })
}

/// `GET /api/slow` — answers after the configured delay.
///
/// The sleep suspends only this request's task.
pub async fn slow(State(state): State<SharedState>) -> Json<SlowResponse> {
    let delay = state.config.slow_delay;
    tokio::time::sleep(delay).await;
    Json(SlowResponse { message: "This endpoint is intentionally slow", delay: format!("{delay:?}") })
}

/// `GET /api/error` — always `500 Internal Server Error`.
pub async fn always_fail() -> GatewayError {
    GatewayError::Internal("This endpoint always returns an error".to_owned())
}

/// `GET /api/random` — succeeds on even Unix seconds, `503` on odd ones.
///
/// # Errors
/// Returns [`GatewayError::ServiceUnavailable`] during odd seconds.
pub async fn random() -> Result<Json<RandomResponse>, GatewayError> {
    random_outcome(Utc::now()).map(Json)
}

/// Outcome of `/api/random` at instant `now`.
///
/// The parity of the Unix second is the only input, so a harness can predict
/// the result from its own clock.
///
/// # Errors
/// Returns [`GatewayError::ServiceUnavailable`] when the second is odd.
pub fn random_outcome(now: DateTime<Utc>) -> Result<RandomResponse, GatewayError> {
    let secs = now.timestamp();
    if secs % 2 == 0 {
        Ok(RandomResponse { success: true, random: secs })
    } else {
        Err(GatewayError::ServiceUnavailable("Random error occurred".to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        match Utc.timestamp_opt(secs, 0).single() {
            Some(t) => t,
            None => panic!("invalid timestamp {secs}"),
        }
    }

    #[test]
    fn random_outcome_even_second_succeeds() {
        match random_outcome(at(1_700_000_000)) {
            Ok(resp) => {
                assert!(resp.success);
                assert_eq!(resp.random, 1_700_000_000);
            }
            Err(e) => panic!("even second must succeed, got {e}"),
        }
    }

    #[test]
    fn random_outcome_odd_second_is_unavailable() {
        match random_outcome(at(1_700_000_001)) {
            Err(e) => {
                assert_eq!(e.status(), StatusCode::SERVICE_UNAVAILABLE);
                assert_eq!(e.to_string(), "Random error occurred");
            }
            Ok(resp) => panic!("odd second must fail, got {resp:?}"),
        }
    }

    #[test]
    fn random_outcome_ignores_sub_second_part() {
        let even_late = at(1_700_000_000) + chrono::Duration::milliseconds(999);
        assert!(random_outcome(even_late).is_ok());
    }

    #[test]
    fn slow_response_formats_delay_in_seconds() {
        let resp = SlowResponse {
            message: "This endpoint is intentionally slow",
            delay: format!("{:?}", std::time::Duration::from_secs(3)),
        };
        assert_eq!(resp.delay, "3s");
    }
}
