use crate::domain::Outcome;
use futures::FutureExt;
use serde_json::Value;
use std::any::Any;
use std::future::Future;
use std::panic::{catch_unwind, AssertUnwindSafe, UnwindSafe};

/// Runs `work` immediately, lifting a normal return into a success and a
/// panic into a failure carrying the panic payload. The panic never reaches
/// the caller.
pub fn wrap<T>(work: impl FnOnce() -> T + UnwindSafe) -> Outcome<T, Value> {
    match catch_unwind(work) {
        Ok(value) => Outcome::success(value),
        Err(panic) => Outcome::failure(panic_payload(panic)),
    }
}

/// The deferred form of [`wrap`]: awaiting the returned future suspends the
/// caller until `fut` resolves, exactly once. A panic inside `fut` is caught
/// and lifted into a failure instead of tearing down the caller.
///
/// Nothing here retries, times out, or cancels the underlying work; if `fut`
/// never resolves, neither does the outcome.
pub async fn wrap_future<T>(fut: impl Future<Output = T>) -> Outcome<T, Value> {
    match AssertUnwindSafe(fut).catch_unwind().await {
        Ok(value) => Outcome::success(value),
        Err(panic) => Outcome::failure(panic_payload(panic)),
    }
}

fn panic_payload(panic: Box<dyn Any + Send>) -> Value {
    if let Some(message) = panic.downcast_ref::<&str>() {
        Value::String((*message).to_string())
    } else if let Some(message) = panic.downcast_ref::<String>() {
        Value::String(message.clone())
    } else {
        Value::String("opaque panic payload".to_string())
    }
}
