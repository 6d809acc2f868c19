//! Reducer for resource fragments.

use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::entity::Entity;
use super::intent::{Mutation, ResourceIntent};
use super::state::{OpKind, OpStatus, ResourceState};

/// Reducer shared by every resource slice.
///
/// Pure function. Network I/O happens in [`super::ResourceSlice`] around the
/// dispatch calls.
pub struct ResourceReducer<E>(PhantomData<E>);

impl<E: Entity> Reducer for ResourceReducer<E> {
    type State = ResourceState<E>;
    type Intent = ResourceIntent<E>;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        // Settlements for a superseded dispatch leave the fragment untouched.
        if intent.is_settlement() {
            if let Some((kind, token)) = intent.lifecycle() {
                if !state.accepts(kind, token) {
                    return state;
                }
            }
        }

        match intent {
            ResourceIntent::ListPending { token, filters } => {
                state.filters = filters;
                start(&mut state, OpKind::FetchList, token);
            }

            ResourceIntent::Pending { kind, token } => start(&mut state, kind, token),

            ResourceIntent::ListFulfilled { token, page } => {
                state.items = page.items;
                state.pagination = page.pagination;
                settle(&mut state, OpKind::FetchList, token, OpStatus::Fulfilled);
            }

            ResourceIntent::OneFulfilled { token, entity } => {
                state.selected = Some(entity);
                settle(&mut state, OpKind::FetchOne, token, OpStatus::Fulfilled);
            }

            ResourceIntent::Mutated { token, mutation } => {
                apply_mutation(&mut state, mutation);
                settle(&mut state, OpKind::Mutate, token, OpStatus::Fulfilled);
            }

            ResourceIntent::Rejected {
                kind,
                token,
                message,
            } => {
                state.error = Some(message);
                state.error_source = Some(kind);
                settle(&mut state, kind, token, OpStatus::Rejected);
            }

            ResourceIntent::ClearError => {
                state.error = None;
                state.error_source = None;
            }

            ResourceIntent::ResetFilters => state.filters.clear(),
        }

        state
    }
}

fn start<E>(state: &mut ResourceState<E>, kind: OpKind, token: u64) {
    *state.in_flight.get_mut(kind) = Some(token);
    *state.status.get_mut(kind) = OpStatus::Pending;
    clear_error_from(state, kind);
}

fn settle<E>(state: &mut ResourceState<E>, kind: OpKind, token: u64, status: OpStatus) {
    let superseded = match *state.in_flight.get(kind) {
        Some(latest) if latest == token => {
            *state.in_flight.get_mut(kind) = None;
            false
        }
        Some(_) => true,
        None => false,
    };
    // A newer dispatch of this kind is still running and owns the status.
    if !superseded {
        *state.status.get_mut(kind) = status;
    }
    if status == OpStatus::Fulfilled {
        clear_error_from(state, kind);
    }
}

// Errors raised by a different operation stay visible.
fn clear_error_from<E>(state: &mut ResourceState<E>, kind: OpKind) {
    if state.error_source == Some(kind) {
        state.error = None;
        state.error_source = None;
    }
}

fn apply_mutation<E: Entity>(state: &mut ResourceState<E>, mutation: Mutation<E>) {
    match mutation {
        Mutation::Created(entity) => {
            state.items.retain(|item| item.id() != entity.id());
            refresh_selected(state, &entity);
            state.items.insert(0, entity);
        }
        Mutation::Updated(entity) => {
            refresh_selected(state, &entity);
            if let Some(slot) = state.items.iter_mut().find(|item| item.id() == entity.id()) {
                *slot = entity;
            }
        }
        Mutation::Deleted(id) => {
            state.items.retain(|item| item.id() != id);
            if state.selected.as_ref().is_some_and(|s| s.id() == id) {
                state.selected = None;
            }
        }
        Mutation::Acknowledged => {}
    }
}

fn refresh_selected<E: Entity>(state: &mut ResourceState<E>, entity: &E) {
    if state.selected.as_ref().is_some_and(|s| s.id() == entity.id()) {
        state.selected = Some(entity.clone());
    }
}
