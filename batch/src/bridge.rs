use std::future::Future;

use tokio::task::JoinHandle;

/// Run `callback` once with the outcome of `future`, then hand the outcome back.
///
/// The callback sees either the value or the error, never both, and the
/// returned future resolves exactly as `future` would have.
pub async fn bridge<F, T, E, C>(future: F, callback: C) -> Result<T, E>
where
    F: Future<Output = Result<T, E>>,
    C: FnOnce(Result<&T, &E>),
{
    let result = future.await;
    callback(result.as_ref());
    result
}

/// Drive [`bridge`] on the tokio runtime so `callback` fires even if the
/// returned handle is never awaited.
pub fn spawn_bridged<F, T, E, C>(future: F, callback: C) -> JoinHandle<Result<T, E>>
where
    F: Future<Output = Result<T, E>> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    C: FnOnce(Result<&T, &E>) + Send + 'static,
{
    tokio::spawn(bridge(future, callback))
}
