use std::marker::PhantomData;

use crate::mvi::Reducer;

use super::entity::Record;
use super::intent::ResourceIntent;
use super::state::ResourceState;

pub struct ResourceReducer<T>(PhantomData<T>);

impl<T: Record> Reducer for ResourceReducer<T> {
    type State = ResourceState<T>;
    type Intent = ResourceIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResourceIntent::LoadStarted => ResourceState {
                loading: true,
                error: None,
                ..state
            },
            ResourceIntent::Loaded { items } => ResourceState {
                items,
                loading: false,
                ..state
            },
            ResourceIntent::LoadFailed { message } => ResourceState {
                loading: false,
                error: Some(message),
                ..state
            },
            ResourceIntent::OpenCreate => ResourceState {
                editing: None,
                show_form: true,
                ..state
            },
            ResourceIntent::OpenEdit { item } => ResourceState {
                editing: Some(item),
                show_form: true,
                ..state
            },
            ResourceIntent::Cancel | ResourceIntent::Saved => ResourceState {
                editing: None,
                show_form: false,
                ..state
            },
            ResourceIntent::SaveFailed { message } | ResourceIntent::RemoveFailed { message } => {
                ResourceState {
                    error: Some(message),
                    ..state
                }
            }
            ResourceIntent::Removed { id } => {
                let mut items = state.items;
                items.retain(|item| item.id() != Some(id.as_str()));
                ResourceState { items, ..state }
            }
        }
    }
}
