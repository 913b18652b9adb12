use crate::domain::Outcome;

/// A handler registered under an error discriminant.
pub type Arm<'a, R> = (&'a str, Box<dyn FnOnce() -> R + 'a>);

pub fn arm<'a, R>(tag: &'a str, handler: impl FnOnce() -> R + 'a) -> Arm<'a, R> {
    (tag, Box::new(handler))
}

/// Consumes an outcome by handing its value to `on_success` or its error to
/// `on_failure`. Exactly one of the two runs.
pub fn fold<T, E, R>(
    outcome: Outcome<T, E>,
    on_success: impl FnOnce(T) -> R,
    on_failure: impl FnOnce(E) -> R,
) -> R {
    match outcome {
        Outcome::Success { value } => on_success(value),
        Outcome::Failure { error } => on_failure(error),
    }
}

/// Invokes the single arm registered under `tag`.
///
/// # Panics
///
/// Panics when no arm carries the tag. A missing arm is a bug at the call
/// site, not a runtime condition to recover from, so there is no default.
pub fn dispatch<R>(tag: &str, arms: Vec<Arm<'_, R>>) -> R {
    for (name, handler) in arms {
        if name == tag {
            return handler();
        }
    }

    panic!("no arm registered for tag: {}", tag)
}
