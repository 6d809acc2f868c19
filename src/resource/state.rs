//! State fragment owned by one resource slice.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::api::Pagination;
use crate::config::RacePolicy;
use crate::mvi::SliceState;

use super::entity::Entity;

/// Lifecycle of the most recent dispatch of one operation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpStatus {
    #[default]
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// The three async operation kinds a slice performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OpKind {
    FetchList,
    FetchOne,
    Mutate,
}

/// One value per [`OpKind`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OpTable<T> {
    pub fetch_list: T,
    pub fetch_one: T,
    pub mutate: T,
}

impl<T> OpTable<T> {
    pub fn get(&self, kind: OpKind) -> &T {
        match kind {
            OpKind::FetchList => &self.fetch_list,
            OpKind::FetchOne => &self.fetch_one,
            OpKind::Mutate => &self.mutate,
        }
    }

    pub fn get_mut(&mut self, kind: OpKind) -> &mut T {
        match kind {
            OpKind::FetchList => &mut self.fetch_list,
            OpKind::FetchOne => &mut self.fetch_one,
            OpKind::Mutate => &mut self.mutate,
        }
    }
}

/// Resource fragment: last fetched page, last fetched entity, request
/// lifecycle and the last error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceState<E> {
    pub items: Vec<E>,
    pub selected: Option<E>,
    pub pagination: Pagination,
    pub filters: BTreeMap<String, String>,
    pub status: OpTable<OpStatus>,
    pub error: Option<String>,
    /// Operation kind whose rejection produced `error`.
    #[serde(skip)]
    pub(crate) error_source: Option<OpKind>,
    /// Token of the latest dispatch per kind that has not resolved yet.
    #[serde(skip)]
    pub(crate) in_flight: OpTable<Option<u64>>,
    #[serde(skip)]
    pub(crate) policy: RacePolicy,
}

impl<E> Default for ResourceState<E> {
    fn default() -> Self {
        Self::new(RacePolicy::default())
    }
}

impl<E: Entity> SliceState for ResourceState<E> {}

impl<E> ResourceState<E> {
    pub fn new(policy: RacePolicy) -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            pagination: Pagination::default(),
            filters: BTreeMap::new(),
            status: OpTable::default(),
            error: None,
            error_source: None,
            in_flight: OpTable::default(),
            policy,
        }
    }

    pub fn status(&self, kind: OpKind) -> OpStatus {
        *self.status.get(kind)
    }

    pub fn is_pending(&self, kind: OpKind) -> bool {
        self.status(kind) == OpStatus::Pending
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The operation whose failure is currently shown in `error`.
    pub fn error_source(&self) -> Option<OpKind> {
        self.error_source
    }

    pub fn policy(&self) -> RacePolicy {
        self.policy
    }

    /// Whether a response for `token` would be applied right now.
    ///
    /// Only fetches replace shared state, so only fetches can go stale.
    /// Mutations touch one entity each and always apply.
    pub fn accepts(&self, kind: OpKind, token: u64) -> bool {
        match (self.policy, kind) {
            (RacePolicy::LastResolved, _) | (_, OpKind::Mutate) => true,
            (RacePolicy::DiscardStale, _) => *self.in_flight.get(kind) == Some(token),
        }
    }
}
