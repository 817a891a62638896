//! Callback-style completion for facade futures

use std::future::Future;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

use crate::domain::MlError;

/// Completion callback for an asynchronous action.
///
/// Completing consumes the listener, so it is notified exactly once with
/// either the response or the failure.
pub struct ActionListener<T> {
    callback: Box<dyn FnOnce(Result<T, MlError>) + Send>,
}

impl<T: Send + 'static> ActionListener<T> {
    pub fn new(callback: impl FnOnce(Result<T, MlError>) + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Listener built from separate response and failure callbacks
    pub fn wrap(
        on_response: impl FnOnce(T) + Send + 'static,
        on_failure: impl FnOnce(MlError) + Send + 'static,
    ) -> Self {
        Self::new(move |result| match result {
            Ok(response) => on_response(response),
            Err(error) => on_failure(error),
        })
    }

    /// Listener that forwards the outcome into a oneshot channel
    pub fn from_sender(sender: oneshot::Sender<Result<T, MlError>>) -> Self {
        Self::new(move |result| {
            // Receiver may have gone away; nobody is left to notify
            let _ = sender.send(result);
        })
    }

    pub fn on_response(self, response: T) {
        self.complete(Ok(response))
    }

    pub fn on_failure(self, error: MlError) {
        self.complete(Err(error))
    }

    pub fn complete(self, result: Result<T, MlError>) {
        (self.callback)(result)
    }

    /// Listener for a raw response that re-creates `T` before delegating.
    ///
    /// A failed re-creation is reported as a failure.
    pub fn map<U, F>(self, recreate: F) -> ActionListener<U>
    where
        U: Send + 'static,
        F: FnOnce(U) -> Result<T, MlError> + Send + 'static,
    {
        ActionListener::new(move |raw: Result<U, MlError>| self.complete(raw.and_then(recreate)))
    }
}

/// Drive `future` on the runtime and complete `listener` with its outcome
pub fn listen<T, F>(future: F, listener: ActionListener<T>) -> JoinHandle<()>
where
    T: Send + 'static,
    F: Future<Output = Result<T, MlError>> + Send + 'static,
{
    tokio::spawn(async move {
        listener.complete(future.await);
    })
}
