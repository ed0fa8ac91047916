//! Orchestration of the transport port and the view-state machine.

use tracing::{debug, warn};

use crate::application::api::{ApiError, PostApi};
use crate::application::error::ActionError;
use crate::application::state::{EditMode, Event, ViewState};
use crate::application::update::{UpdatePolicy, UpdateStrategy};
use crate::domain::posts::{self, NewPost, Post};

/// Drives the four remote operations and feeds their outcomes to the state
/// machine. Store mutations happen only on an operation's success path, so
/// a failed call always leaves the store identical to its pre-call value.
pub struct PostService<A> {
    api: A,
    policy: UpdatePolicy,
    user_id: u64,
    state: ViewState,
}

impl<A: PostApi> PostService<A> {
    pub fn new(api: A, policy: UpdatePolicy, user_id: u64) -> Self {
        Self {
            api,
            policy,
            user_id,
            state: ViewState::new(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn visible(&self) -> Vec<&Post> {
        self.state.visible()
    }

    pub fn set_filter(&mut self, text: impl Into<String>) {
        self.state.apply(Event::FilterChanged(text.into()));
    }

    /// Initial wholesale load. A failure is terminal for the listing view.
    pub async fn load(&mut self) -> Result<(), ActionError> {
        match self.api.list_posts().await {
            Ok(posts) => {
                debug!(count = posts.len(), "loaded posts");
                self.state.apply(Event::LoadSucceeded(posts));
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "initial load failed");
                self.state.apply(Event::LoadFailed);
                Err(ActionError::Load)
            }
        }
    }

    pub async fn create(&mut self, title: &str, body: &str) -> Result<Post, ActionError> {
        if let Err(error) = posts::validate_content(title, body) {
            warn!(error = %error, "rejected create input");
            return Err(ActionError::Invalid);
        }
        let payload = NewPost {
            id: None,
            title: title.to_owned(),
            body: body.to_owned(),
            user_id: self.user_id,
        };
        match self.api.create_post(&payload).await {
            Ok(created) => {
                debug!(id = created.id, "created post");
                self.state.apply(Event::CreateSucceeded(created.clone()));
                Ok(created)
            }
            Err(error) => {
                warn!(error = %error, "create failed");
                self.state.apply(Event::CreateFailed);
                Err(ActionError::Create)
            }
        }
    }

    /// Two-variant update (direct vs delete-then-recreate) selected by the
    /// configured synthetic-id threshold. A partial recreate (delete ok,
    /// create failed) is not rolled back; the store simply stays as it was.
    pub async fn update(&mut self, id: u64, title: &str, body: &str) -> Result<Post, ActionError> {
        let outcome = match self.policy.strategy_for(id) {
            UpdateStrategy::Direct => {
                let record = Post {
                    id,
                    title: title.to_owned(),
                    body: body.to_owned(),
                    user_id: self.user_id,
                };
                self.api.update_post(id, &record).await
            }
            UpdateStrategy::DeleteThenRecreate => self.recreate(id, title, body).await,
        };
        match outcome {
            Ok(post) => {
                debug!(id, new_id = post.id, "updated post");
                self.state.apply(Event::UpdateSucceeded {
                    original_id: id,
                    post: post.clone(),
                });
                Ok(post)
            }
            Err(error) => {
                warn!(error = %error, "update failed");
                self.state.apply(Event::UpdateFailed);
                Err(ActionError::Update)
            }
        }
    }

    async fn recreate(&self, id: u64, title: &str, body: &str) -> Result<Post, ApiError> {
        self.api.delete_post(id).await?;
        let payload = NewPost {
            id: Some(id),
            title: title.to_owned(),
            body: body.to_owned(),
            user_id: self.user_id,
        };
        self.api.create_post(&payload).await
    }

    pub async fn delete(&mut self, id: u64) -> Result<(), ActionError> {
        match self.api.delete_post(id).await {
            Ok(()) => {
                debug!(id, "deleted post");
                self.state.apply(Event::DeleteSucceeded(id));
                Ok(())
            }
            Err(error) => {
                warn!(error = %error, "delete failed");
                self.state.apply(Event::DeleteFailed);
                Err(ActionError::Delete)
            }
        }
    }

    pub fn compose_title(&mut self, text: impl Into<String>) {
        self.state.apply(Event::ComposeTitleChanged(text.into()));
    }

    pub fn compose_body(&mut self, text: impl Into<String>) {
        self.state.apply(Event::ComposeBodyChanged(text.into()));
    }

    /// Submit the compose form. Invalid fields block submission entirely;
    /// once submission is attempted the fields clear regardless of how the
    /// remote call ends.
    pub async fn submit_compose(&mut self) -> Result<Post, ActionError> {
        let title = self.state.compose.title.clone();
        let body = self.state.compose.body.clone();
        posts::validate_content(&title, &body).map_err(|error| {
            warn!(error = %error, "rejected compose submission");
            ActionError::Invalid
        })?;
        self.state.apply(Event::ComposeSubmitted);
        self.create(&title, &body).await
    }

    pub fn begin_edit(&mut self, id: u64) {
        self.state.apply(Event::EditRequested(id));
    }

    pub fn edit_title(&mut self, text: impl Into<String>) {
        self.state.apply(Event::EditTitleChanged(text.into()));
    }

    pub fn edit_body(&mut self, text: impl Into<String>) {
        self.state.apply(Event::EditBodyChanged(text.into()));
    }

    pub fn cancel_edit(&mut self) {
        self.state.apply(Event::EditCancelled);
    }

    /// Save the active draft: the draft clears before the update resolves,
    /// so even a failed save leaves the controller idle. Returns `None`
    /// when no edit was active.
    pub async fn save_edit(&mut self) -> Result<Option<Post>, ActionError> {
        let EditMode::Editing { id, title, body } = self.state.edit.clone() else {
            return Ok(None);
        };
        self.state.apply(Event::EditSaved);
        self.update(id, &title, &body).await.map(Some)
    }
}
