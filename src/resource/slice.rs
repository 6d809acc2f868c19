//! Generic resource slice: HTTP operations around the resource reducer.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::watch;

use crate::api::{ApiClient, ApiError, Envelope};
use crate::config::RacePolicy;
use crate::mvi::Reducer;
use crate::pagination::ListQuery;

use super::entity::{Entity, ResourceDescriptor};
use super::intent::{Mutation, ResourceIntent};
use super::reducer::ResourceReducer;
use super::state::{OpKind, ResourceState};

/// HTTP verb of a mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Post,
    Put,
    Patch,
    Delete,
}

impl Verb {
    pub fn method(self) -> Method {
        match self {
            Verb::Post => Method::POST,
            Verb::Put => Method::PUT,
            Verb::Patch => Method::PATCH,
            Verb::Delete => Method::DELETE,
        }
    }
}

/// How an async slice operation ended.
///
/// Errors never escape a slice as `Err`; the message is already stored in
/// the fragment and repeated here for callers that branch on completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Fulfilled,
    Rejected(String),
    /// A newer fetch of the same kind was in flight, so this response was
    /// dropped without touching the fragment. Mutations are never discarded.
    Discarded,
}

impl Outcome {
    pub fn is_fulfilled(&self) -> bool {
        matches!(self, Outcome::Fulfilled)
    }
}

/// One backend resource: its fragment plus fetch/mutate operations.
///
/// Cloning shares the fragment, so a clone can be moved into a spawned task
/// while views keep observing through [`ResourceSlice::subscribe`].
#[derive(Clone)]
pub struct ResourceSlice<E: Entity> {
    descriptor: ResourceDescriptor,
    api: ApiClient,
    state: Arc<watch::Sender<ResourceState<E>>>,
    seq: Arc<AtomicU64>,
}

impl<E: Entity> ResourceSlice<E> {
    pub fn new(descriptor: ResourceDescriptor, api: ApiClient, policy: RacePolicy) -> Self {
        let (state, _) = watch::channel(ResourceState::new(policy));
        Self {
            descriptor,
            api,
            state: Arc::new(state),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn descriptor(&self) -> ResourceDescriptor {
        self.descriptor
    }

    /// Clone of the current fragment.
    pub fn snapshot(&self) -> ResourceState<E> {
        self.state.borrow().clone()
    }

    /// Receiver notified after every fragment update.
    pub fn subscribe(&self) -> watch::Receiver<ResourceState<E>> {
        self.state.subscribe()
    }

    /// GET the collection with `query`; replaces `items` and `pagination`.
    pub async fn fetch_list(&self, query: &ListQuery) -> Outcome {
        let token = self.begin(ResourceIntent::ListPending {
            token: self.next_token(),
            filters: query.filters().clone(),
        });

        let result = self
            .api
            .get(self.descriptor.base_path, &query.to_pairs())
            .await
            .and_then(Envelope::into_list::<E>);

        self.settle(
            OpKind::FetchList,
            token,
            result.map(|page| ResourceIntent::ListFulfilled { token, page }),
        )
    }

    /// GET one entity; replaces `selected`.
    pub async fn fetch_one(&self, id: &str) -> Outcome {
        let token = self.begin(ResourceIntent::Pending {
            kind: OpKind::FetchOne,
            token: self.next_token(),
        });

        let result = self
            .api
            .get(&self.descriptor.item_path(id), &[])
            .await
            .and_then(Envelope::into_entity::<E>);

        self.settle(
            OpKind::FetchOne,
            token,
            result.map(|entity| ResourceIntent::OneFulfilled { token, entity }),
        )
    }

    /// POST/PUT/PATCH/DELETE against the collection or one item.
    ///
    /// POST without an id creates; PUT, PATCH and DELETE require an id.
    pub async fn mutate(&self, id: Option<&str>, payload: Option<Value>, verb: Verb) -> Outcome {
        self.run_mutation(id, Ok(payload), verb).await
    }

    pub async fn create<P: Serialize + ?Sized>(&self, payload: &P) -> Outcome {
        self.run_mutation(None, to_payload(payload), Verb::Post).await
    }

    pub async fn update<P: Serialize + ?Sized>(&self, id: &str, payload: &P) -> Outcome {
        self.run_mutation(Some(id), to_payload(payload), Verb::Put).await
    }

    pub async fn patch<P: Serialize + ?Sized>(&self, id: &str, payload: &P) -> Outcome {
        self.run_mutation(Some(id), to_payload(payload), Verb::Patch).await
    }

    pub async fn delete(&self, id: &str) -> Outcome {
        self.run_mutation(Some(id), Ok(None), Verb::Delete).await
    }

    /// POST to `base_path/id/action` (e.g., event registration).
    ///
    /// A returned entity is spliced into `items` like an update; an envelope
    /// without `data` only settles the lifecycle.
    pub async fn action(&self, id: &str, action: &str, payload: Option<Value>) -> Outcome {
        let token = self.begin(ResourceIntent::Pending {
            kind: OpKind::Mutate,
            token: self.next_token(),
        });

        let path = self.descriptor.action_path(id, action);
        let result = self
            .api
            .send(Method::POST, &path, payload.as_ref())
            .await
            .and_then(|envelope| match envelope.data {
                Some(_) => envelope.into_entity::<E>().map(Mutation::Updated),
                None => Ok(Mutation::Acknowledged),
            });

        self.settle(
            OpKind::Mutate,
            token,
            result.map(|mutation| ResourceIntent::Mutated { token, mutation }),
        )
    }

    pub fn clear_error(&self) {
        self.dispatch(ResourceIntent::ClearError);
    }

    pub fn reset_filters(&self) {
        self.dispatch(ResourceIntent::ResetFilters);
    }

    async fn run_mutation(
        &self,
        id: Option<&str>,
        payload: Result<Option<Value>, ApiError>,
        verb: Verb,
    ) -> Outcome {
        let token = self.begin(ResourceIntent::Pending {
            kind: OpKind::Mutate,
            token: self.next_token(),
        });

        let result = match payload {
            Ok(payload) => self.send_mutation(id, payload.as_ref(), verb).await,
            Err(err) => Err(err),
        };

        self.settle(
            OpKind::Mutate,
            token,
            result.map(|mutation| ResourceIntent::Mutated { token, mutation }),
        )
    }

    async fn send_mutation(
        &self,
        id: Option<&str>,
        payload: Option<&Value>,
        verb: Verb,
    ) -> Result<Mutation<E>, ApiError> {
        let path = match (id, verb) {
            (Some(id), _) => self.descriptor.item_path(id),
            (None, Verb::Post) => self.descriptor.base_path.to_string(),
            (None, verb) => {
                return Err(ApiError::InvalidUrl {
                    url: self.descriptor.base_path.to_string(),
                    reason: format!("{} requires an id", verb.method()),
                })
            }
        };

        let envelope = self.api.send(verb.method(), &path, payload).await?;

        match verb {
            Verb::Post => envelope.into_entity().map(Mutation::Created),
            Verb::Put | Verb::Patch => envelope.into_entity().map(Mutation::Updated),
            Verb::Delete => Ok(Mutation::Deleted(id.unwrap_or_default().to_string())),
        }
    }

    fn next_token(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Dispatches a pending intent and returns its token.
    fn begin(&self, intent: ResourceIntent<E>) -> u64 {
        let (kind, token) = intent.lifecycle().unwrap_or((OpKind::Mutate, 0));
        tracing::debug!(
            resource = self.descriptor.name,
            op = ?kind,
            token,
            "operation dispatched"
        );
        self.dispatch(intent);
        token
    }

    fn settle(
        &self,
        kind: OpKind,
        token: u64,
        result: Result<ResourceIntent<E>, ApiError>,
    ) -> Outcome {
        let (intent, outcome) = match result {
            Ok(intent) => (intent, Outcome::Fulfilled),
            Err(err) => {
                let message = err.user_message();
                tracing::warn!(
                    resource = self.descriptor.name,
                    op = ?kind,
                    token,
                    status = ?err.status(),
                    error = %err,
                    "operation rejected"
                );
                (
                    ResourceIntent::Rejected {
                        kind,
                        token,
                        message: message.clone(),
                    },
                    Outcome::Rejected(message),
                )
            }
        };

        if self.dispatch(intent) {
            if outcome.is_fulfilled() {
                tracing::debug!(
                    resource = self.descriptor.name,
                    op = ?kind,
                    token,
                    "operation fulfilled"
                );
            }
            outcome
        } else {
            tracing::debug!(
                resource = self.descriptor.name,
                op = ?kind,
                token,
                "stale response discarded"
            );
            Outcome::Discarded
        }
    }

    /// Runs the reducer under the channel lock. Returns false when a
    /// settlement was rejected as stale.
    fn dispatch(&self, intent: ResourceIntent<E>) -> bool {
        let mut applied = true;
        self.state.send_modify(|state| {
            if intent.is_settlement() {
                if let Some((kind, token)) = intent.lifecycle() {
                    applied = state.accepts(kind, token);
                }
            }
            *state = ResourceReducer::<E>::reduce(std::mem::take(state), intent);
        });
        applied
    }
}

fn to_payload<P: Serialize + ?Sized>(payload: &P) -> Result<Option<Value>, ApiError> {
    serde_json::to_value(payload)
        .map(Some)
        .map_err(|e| ApiError::InvalidPayload(e.to_string()))
}
