//! Score provider double.

use crate::models::user::tests::user;
use crate::models::{ScoreRecord, User};
use crate::network::{ApiError, ScoreProvider};
use std::sync::Mutex;

/// Provider knowing a fixed set of users, all sharing one score list.
/// Usernames match case-insensitively, like the real API.
#[derive(Debug, Default)]
pub struct FakeProvider {
    users: Vec<User>,
    scores: Vec<ScoreRecord>,
    recent_requests: Mutex<Vec<(u32, u32, bool)>>,
}

impl FakeProvider {
    pub fn with_user(id: u32, username: &str) -> Self {
        Self {
            users: vec![user(id, username)],
            ..Default::default()
        }
    }

    pub fn from_user(user: User) -> Self {
        Self {
            users: vec![user],
            ..Default::default()
        }
    }

    pub fn with_scores(mut self, scores: Vec<ScoreRecord>) -> Self {
        self.scores = scores;
        self
    }

    pub fn recent_requests(&self) -> Vec<(u32, u32, bool)> {
        self.recent_requests.lock().unwrap().clone()
    }
}

impl ScoreProvider for FakeProvider {
    async fn user(&self, username: &str) -> Result<User, ApiError> {
        self.users
            .iter()
            .find(|u| u.username.eq_ignore_ascii_case(username))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("user '{}'", username)))
    }

    async fn recent_scores(
        &self,
        user_id: u32,
        limit: u32,
        include_fails: bool,
    ) -> Result<Vec<ScoreRecord>, ApiError> {
        self.recent_requests
            .lock()
            .unwrap()
            .push((user_id, limit, include_fails));

        Ok(self.scores.iter().take(limit as usize).cloned().collect())
    }
}
