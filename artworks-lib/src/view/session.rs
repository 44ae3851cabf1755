use std::sync::Arc;

use log::debug;
use log::warn;
use tokio::sync::mpsc;

use crate::api::Page;
use crate::api::PageSource;
use crate::error::FetchError;
use crate::error::ValidationError;
use crate::pagination::Completion;
use crate::pagination::LoadRequest;
use crate::pagination::RequestToken;

use super::CatalogView;
use super::ViewEvent;

type FetchResult = (RequestToken, Result<Page, FetchError>);

/// Runs the fetches a [`CatalogView`] asks for.
///
/// Every [`LoadRequest`] is fetched on its own tokio task. Results come back
/// over a channel and are applied one at a time by
/// [`next_completion`](Self::next_completion); results of superseded
/// requests are discarded by the view. Superseded tasks are left to finish.
/// A fetch that panics is reported as [`FetchError::Task`] for its token, so
/// every spawned fetch produces exactly one completion.
///
/// Must be used from within a tokio runtime.
///
/// # Example
///
/// ```ignore
/// let client = CatalogClient::from_config(&config)?;
/// let mut session = Session::new(client, CatalogView::new(10)?);
///
/// session.dispatch(ViewEvent::Mount)?;
/// while let Some((_, completion)) = session.next_completion().await {
///     render(session.view().table_props());
/// }
/// ```
pub struct Session<S> {
    view: CatalogView,
    source: Arc<S>,
    sender: mpsc::UnboundedSender<FetchResult>,
    receiver: mpsc::UnboundedReceiver<FetchResult>,
    in_flight: usize,
}

impl<S> Session<S>
where
    S: PageSource + 'static,
{
    pub fn new(source: S, view: CatalogView) -> Self {
        Self::with_shared(Arc::new(source), view)
    }

    /// Creates a session over a source shared with other owners.
    pub fn with_shared(source: Arc<S>, view: CatalogView) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            view,
            source,
            sender,
            receiver,
            in_flight: 0,
        }
    }

    pub fn view(&self) -> &CatalogView {
        &self.view
    }

    /// Returns the number of fetches whose results have not arrived yet,
    /// superseded ones included.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Applies an event and starts the fetch it needs, if any.
    ///
    /// Returns the token of the started fetch.
    pub fn dispatch(&mut self, event: ViewEvent) -> Result<Option<RequestToken>, ValidationError> {
        let load = self.view.handle(event)?;
        Ok(load.map(|load| self.spawn(load)))
    }

    /// Waits for the next fetch result and applies it.
    ///
    /// Returns `None` right away when no fetch is outstanding.
    pub async fn next_completion(&mut self) -> Option<(RequestToken, Completion)> {
        if self.in_flight == 0 {
            return None;
        }
        let (token, result) = self.receiver.recv().await?;
        self.in_flight -= 1;
        let completion = self.view.complete(token, result);
        debug!("fetch {} completed: {:?}", token, completion);
        Some((token, completion))
    }

    /// Applies results until the latest fetch has been applied.
    pub async fn settle(&mut self) {
        while self.view.pagination().is_loading() {
            if self.next_completion().await.is_none() {
                break;
            }
        }
    }

    fn spawn(&mut self, load: LoadRequest) -> RequestToken {
        let LoadRequest { token, request } = load;
        let source = Arc::clone(&self.source);
        let sender = self.sender.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let fetch = tokio::spawn(async move { source.fetch_page(request).await });
            let result = match fetch.await {
                Ok(result) => result,
                Err(err) => {
                    warn!("fetch {} did not finish: {}", token, err);
                    Err(FetchError::Task(err.to_string()))
                }
            };
            // The receiver lives as long as the session.
            let _ = sender.send((token, result));
        });
        token
    }
}

impl<S> std::fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("view", &self.view)
            .field("in_flight", &self.in_flight)
            .finish()
    }
}
