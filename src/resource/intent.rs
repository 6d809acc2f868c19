use std::collections::BTreeMap;

use crate::api::ListPage;
use crate::mvi::Intent;

use super::entity::Entity;
use super::state::OpKind;

/// Effect of a successful mutation on the cached collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation<E> {
    /// Prepended to `items`.
    Created(E),
    /// Spliced into `items` by id.
    Updated(E),
    /// Removed from `items` by id.
    Deleted(String),
    /// Server confirmed without returning an entity; nothing to splice.
    Acknowledged,
}

/// Intents dispatched to a resource slice.
#[derive(Debug, Clone)]
pub enum ResourceIntent<E> {
    /// A list fetch started with these filters.
    ListPending {
        token: u64,
        filters: BTreeMap<String, String>,
    },

    /// A single-entity fetch or a mutation started.
    Pending { kind: OpKind, token: u64 },

    /// A list page arrived.
    ListFulfilled { token: u64, page: ListPage<E> },

    /// A single entity arrived.
    OneFulfilled { token: u64, entity: E },

    /// A mutation succeeded.
    Mutated { token: u64, mutation: Mutation<E> },

    /// The operation failed with an already-normalized message.
    Rejected {
        kind: OpKind,
        token: u64,
        message: String,
    },

    /// Dismiss the current error.
    ClearError,

    /// Forget the recorded filters.
    ResetFilters,
}

impl<E> ResourceIntent<E> {
    /// Operation kind and token for lifecycle intents.
    pub fn lifecycle(&self) -> Option<(OpKind, u64)> {
        match self {
            ResourceIntent::ListPending { token, .. } => Some((OpKind::FetchList, *token)),
            ResourceIntent::Pending { kind, token } => Some((*kind, *token)),
            ResourceIntent::ListFulfilled { token, .. } => Some((OpKind::FetchList, *token)),
            ResourceIntent::OneFulfilled { token, .. } => Some((OpKind::FetchOne, *token)),
            ResourceIntent::Mutated { token, .. } => Some((OpKind::Mutate, *token)),
            ResourceIntent::Rejected { kind, token, .. } => Some((*kind, *token)),
            ResourceIntent::ClearError | ResourceIntent::ResetFilters => None,
        }
    }

    /// True for intents that settle an operation (fulfilled or rejected).
    pub fn is_settlement(&self) -> bool {
        matches!(
            self,
            ResourceIntent::ListFulfilled { .. }
                | ResourceIntent::OneFulfilled { .. }
                | ResourceIntent::Mutated { .. }
                | ResourceIntent::Rejected { .. }
        )
    }
}

impl<E: Entity> Intent for ResourceIntent<E> {}
