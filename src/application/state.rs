//! Transport-free view-state machine.
//!
//! Every mutation of the visible state goes through [`ViewState::apply`],
//! which is synchronous and free of I/O so the whole machine unit-tests
//! without a runtime or a rendering environment.

use crate::application::error::ActionError;
use crate::application::store::PostStore;
use crate::domain::posts::Post;

/// Lifecycle of the listing view. `Failed` is terminal: the initial load is
/// never retried and the list is not rendered again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    Failed,
}

/// Inline-edit controller. At most one row edits at a time; starting a new
/// edit silently discards any prior unsaved draft.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    Idle,
    Editing {
        id: u64,
        title: String,
        body: String,
    },
}

/// The create form's fields. Cleared on submission attempt, not on outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposeDraft {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    LoadSucceeded(Vec<Post>),
    LoadFailed,
    FilterChanged(String),
    ComposeTitleChanged(String),
    ComposeBodyChanged(String),
    ComposeSubmitted,
    CreateSucceeded(Post),
    CreateFailed,
    UpdateSucceeded { original_id: u64, post: Post },
    UpdateFailed,
    DeleteSucceeded(u64),
    DeleteFailed,
    EditRequested(u64),
    EditTitleChanged(String),
    EditBodyChanged(String),
    EditCancelled,
    EditSaved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub phase: Phase,
    pub store: PostStore,
    pub filter: String,
    pub edit: EditMode,
    pub compose: ComposeDraft,
    pub error: Option<ActionError>,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            store: PostStore::new(),
            filter: String::new(),
            edit: EditMode::Idle,
            compose: ComposeDraft::default(),
            error: None,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed list is always derived from the store and the filter,
    /// never held separately.
    pub fn visible(&self) -> Vec<&Post> {
        self.store.visible(&self.filter)
    }

    pub fn apply(&mut self, event: Event) {
        match event {
            Event::LoadSucceeded(posts) => {
                self.store.replace_all(posts);
                self.phase = Phase::Ready;
            }
            Event::LoadFailed => {
                self.phase = Phase::Failed;
                self.error = Some(ActionError::Load);
            }
            Event::FilterChanged(text) => self.filter = text,
            Event::ComposeTitleChanged(text) => self.compose.title = text,
            Event::ComposeBodyChanged(text) => self.compose.body = text,
            Event::ComposeSubmitted => self.compose = ComposeDraft::default(),
            Event::CreateSucceeded(post) => self.store.append(post),
            Event::CreateFailed => self.error = Some(ActionError::Create),
            Event::UpdateSucceeded { original_id, post } => {
                self.store.replace(original_id, post);
            }
            Event::UpdateFailed => self.error = Some(ActionError::Update),
            Event::DeleteSucceeded(id) => self.store.remove(id),
            Event::DeleteFailed => self.error = Some(ActionError::Delete),
            Event::EditRequested(id) => {
                // Edits start from a rendered row; an id the store does not
                // hold leaves the controller unchanged.
                if let Some(post) = self.store.get(id) {
                    self.edit = EditMode::Editing {
                        id,
                        title: post.title.clone(),
                        body: post.body.clone(),
                    };
                }
            }
            Event::EditTitleChanged(text) => {
                if let EditMode::Editing { title, .. } = &mut self.edit {
                    *title = text;
                }
            }
            Event::EditBodyChanged(text) => {
                if let EditMode::Editing { body, .. } = &mut self.edit {
                    *body = text;
                }
            }
            Event::EditCancelled | Event::EditSaved => self.edit = EditMode::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
            user_id: 1,
        }
    }

    fn ready_state(ids: &[u64]) -> ViewState {
        let mut state = ViewState::new();
        state.apply(Event::LoadSucceeded(ids.iter().copied().map(post).collect()));
        state
    }

    #[test]
    fn load_success_populates_store_and_ends_loading() {
        let state = ready_state(&[1, 2]);
        assert_eq!(state.phase, Phase::Ready);
        assert_eq!(state.store.len(), 2);
        assert!(state.error.is_none());
    }

    #[test]
    fn load_failure_is_terminal() {
        let mut state = ViewState::new();
        state.apply(Event::LoadFailed);
        assert_eq!(state.phase, Phase::Failed);
        assert_eq!(state.error, Some(ActionError::Load));
        assert!(state.store.is_empty());
    }

    #[test]
    fn filter_one_shows_only_id_one() {
        let mut state = ready_state(&[1, 10, 11]);
        state.apply(Event::FilterChanged("1".into()));
        let shown: Vec<u64> = state.visible().iter().map(|p| p.id).collect();
        assert_eq!(shown, vec![1]);
    }

    #[test]
    fn create_success_appends_server_record() {
        let mut state = ready_state(&[1]);
        let created = Post {
            id: 101,
            title: "T".into(),
            body: "B".into(),
            user_id: 1,
        };
        state.apply(Event::CreateSucceeded(created.clone()));
        assert_eq!(state.store.len(), 2);
        assert_eq!(state.store.iter().last(), Some(&created));
    }

    #[test]
    fn compose_submission_clears_fields_unconditionally() {
        let mut state = ViewState::new();
        state.apply(Event::ComposeTitleChanged("T".into()));
        state.apply(Event::ComposeBodyChanged("B".into()));
        state.apply(Event::ComposeSubmitted);
        assert_eq!(state.compose, ComposeDraft::default());
        // A later failure does not restore the fields.
        state.apply(Event::CreateFailed);
        assert_eq!(state.compose, ComposeDraft::default());
    }

    #[test]
    fn update_success_replaces_in_place() {
        let mut state = ready_state(&[4, 5, 6]);
        let mut updated = post(5);
        updated.title = "new".into();
        state.apply(Event::UpdateSucceeded {
            original_id: 5,
            post: updated.clone(),
        });
        assert_eq!(state.store.len(), 3);
        assert_eq!(state.store.get(5), Some(&updated));
    }

    #[test]
    fn delete_success_removes_entry() {
        let mut state = ready_state(&[7, 8]);
        state.apply(Event::DeleteSucceeded(7));
        assert!(state.store.get(7).is_none());
        assert_eq!(state.store.len(), 1);
    }

    #[test]
    fn failed_actions_leave_store_identical_and_flag_error() {
        let mut state = ready_state(&[1, 2]);
        let before = state.store.clone();

        state.apply(Event::CreateFailed);
        assert_eq!(state.store, before);
        assert_eq!(state.error, Some(ActionError::Create));

        state.apply(Event::UpdateFailed);
        assert_eq!(state.store, before);
        assert_eq!(state.error, Some(ActionError::Update));

        state.apply(Event::DeleteFailed);
        assert_eq!(state.store, before);
        assert_eq!(state.error, Some(ActionError::Delete));
    }

    #[test]
    fn edit_prefills_from_row_and_cancel_restores_idle() {
        let mut state = ready_state(&[3]);
        state.apply(Event::EditRequested(3));
        assert_eq!(
            state.edit,
            EditMode::Editing {
                id: 3,
                title: "title 3".into(),
                body: "body 3".into(),
            }
        );
        let before = state.store.clone();
        state.apply(Event::EditTitleChanged("changed".into()));
        state.apply(Event::EditCancelled);
        assert_eq!(state.edit, EditMode::Idle);
        assert_eq!(state.store, before);
    }

    #[test]
    fn new_edit_discards_prior_draft() {
        let mut state = ready_state(&[1, 2]);
        state.apply(Event::EditRequested(1));
        state.apply(Event::EditTitleChanged("unsaved".into()));
        state.apply(Event::EditRequested(2));
        assert_eq!(
            state.edit,
            EditMode::Editing {
                id: 2,
                title: "title 2".into(),
                body: "body 2".into(),
            }
        );
    }

    #[test]
    fn edit_of_unknown_id_is_a_no_op() {
        let mut state = ready_state(&[1]);
        state.apply(Event::EditRequested(42));
        assert_eq!(state.edit, EditMode::Idle);
    }
}
