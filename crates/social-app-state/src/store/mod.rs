use crate::chat::{chat_key, Chat};
use crate::common::{query, snapshot};
use crate::notification::Notification;
use crate::post::{Comment, Post, PostDraft};
use crate::seed;
use crate::storage::LocalStorage;
use crate::user::User;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const STORAGE_KEY: &str = "social-storage";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SocialState {
    pub current_user: Option<User>,
    pub users: Vec<User>,
    pub posts: Vec<Post>,
    pub chats: Vec<Chat>,
    #[serde(default)]
    pub notifications: Vec<Notification>,
    pub theme: Theme,
}

pub struct SocialStore {
    state: SocialState,
    storage: Option<LocalStorage>,
}

impl SocialStore {
    pub fn open(storage: LocalStorage) -> Result<Self, String> {
        let state = match storage.read(STORAGE_KEY)? {
            Some(bytes) => snapshot::deserialize(&bytes)?,
            None => seed::initial_state(),
        };

        Ok(SocialStore {
            state,
            storage: Some(storage),
        })
    }

    pub fn in_memory() -> Self {
        SocialStore {
            state: seed::initial_state(),
            storage: None,
        }
    }

    pub fn state(&self) -> &SocialState {
        &self.state
    }

    // Every mutation computes the next snapshot from a copy of the current
    // one, swaps it in, then mirrors it to storage.
    fn update<T>(&mut self, f: impl FnOnce(&mut SocialState) -> T) -> T {
        let mut next = self.state.clone();
        let result = f(&mut next);
        self.state = next;
        self.persist();
        result
    }

    fn persist(&self) {
        if let Some(storage) = &self.storage {
            let result = snapshot::serialize(&self.state)
                .and_then(|bytes| storage.write(STORAGE_KEY, &bytes));

            if let Err(err) = result {
                log::warn!("persist state - error: {err}");
            }
        }
    }

    pub fn set_current_user(&mut self, user: Option<User>) {
        self.update(|state| {
            match &user {
                Some(user) => log::info!("set current user - user id: {}", user.user_id),
                None => log::info!("set current user - signed out"),
            }
            state.current_user = user;
        })
    }

    pub fn add_user(&mut self, user: User) {
        self.update(|state| {
            log::info!("add user - user id: {}", user.user_id);
            state.users.push(user);
        })
    }

    pub fn add_post(&mut self, post: Post) {
        self.update(|state| {
            log::info!(
                "add post - post id: {}, created by: {}",
                post.post_id,
                post.created_by
            );
            state.posts.insert(0, post);
        })
    }

    pub fn toggle_like(&mut self, post_id: &str, user_id: &str) -> bool {
        self.update(
            |state| match state.posts.iter_mut().find(|p| p.post_id == post_id) {
                Some(post) => {
                    let liked = post.toggle_like(user_id);
                    log::info!(
                        "toggle like - post id: {post_id}, user id: {user_id}, liked: {liked}"
                    );

                    let author = post.created_by.clone();
                    if liked && author != user_id {
                        state.notifications.push(Notification::like(
                            author,
                            user_id.to_string(),
                            post_id.to_string(),
                        ));
                    }
                    true
                }
                None => false,
            },
        )
    }

    pub fn add_comment(&mut self, post_id: &str, comment: Comment) -> bool {
        self.update(
            |state| match state.posts.iter_mut().find(|p| p.post_id == post_id) {
                Some(post) => {
                    log::info!(
                        "add comment - post id: {post_id}, comment id: {}",
                        comment.comment_id
                    );

                    let author = post.created_by.clone();
                    let commenter = comment.created_by.clone();
                    post.add_comment(comment);

                    if author != commenter {
                        state.notifications.push(Notification::comment(
                            author,
                            commenter,
                            post_id.to_string(),
                        ));
                    }
                    true
                }
                None => false,
            },
        )
    }

    pub fn vote_poll(&mut self, post_id: &str, option_id: &str, user_id: &str) -> bool {
        self.update(|state| {
            let poll = state
                .posts
                .iter_mut()
                .find(|p| p.post_id == post_id)
                .and_then(|p| p.poll.as_mut());

            match poll {
                Some(poll) => {
                    log::info!(
                        "vote poll - post id: {post_id}, option id: {option_id}, user id: {user_id}"
                    );
                    poll.apply_vote(option_id, user_id);
                    true
                }
                None => false,
            }
        })
    }

    pub fn toggle_theme(&mut self) {
        self.update(|state| {
            state.theme = state.theme.toggle();
            log::info!("toggle theme - theme: {}", state.theme);
        })
    }

    pub fn send_message(&mut self, from_user_id: &str, to_user_id: &str, content: &str) -> String {
        self.update(|state| {
            let chat_id = chat_key(from_user_id, to_user_id);

            let message_id = match state.chats.iter_mut().find(|c| c.chat_id == chat_id) {
                Some(chat) => chat.add_message(from_user_id.to_string(), content.to_string()),
                None => {
                    let mut chat = Chat::direct(from_user_id, to_user_id);
                    let message_id =
                        chat.add_message(from_user_id.to_string(), content.to_string());
                    state.chats.push(chat);
                    message_id
                }
            };

            log::info!("send message - chat id: {chat_id}, message id: {message_id}");

            if to_user_id != from_user_id {
                state.notifications.push(Notification::message(
                    to_user_id.to_string(),
                    from_user_id.to_string(),
                    message_id.clone(),
                ));
            }

            message_id
        })
    }

    pub fn mark_notification_read(&mut self, notification_id: &str) -> bool {
        self.update(|state| {
            let found = state
                .notifications
                .iter_mut()
                .find(|n| n.notification_id == notification_id);

            match found {
                Some(notification) => {
                    log::info!("mark notification read - notification id: {notification_id}");
                    notification.mark_read();
                    true
                }
                None => false,
            }
        })
    }

    pub fn create_post(&mut self, draft: PostDraft) -> Option<String> {
        let user_id = self.state.current_user.as_ref()?.user_id.clone();
        let post = draft.build(user_id)?;
        let post_id = post.post_id.clone();

        self.add_post(post);

        Some(post_id)
    }

    pub fn comment_on(&mut self, post_id: &str, content: &str) -> Option<String> {
        let user_id = self.state.current_user.as_ref()?.user_id.clone();

        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        let comment = Comment::new(user_id, content.to_string());
        let comment_id = comment.comment_id.clone();

        if self.add_comment(post_id, comment) {
            Some(comment_id)
        } else {
            None
        }
    }

    pub fn message_to(&mut self, to_user_id: &str, content: &str) -> Option<String> {
        let from_user_id = self.state.current_user.as_ref()?.user_id.clone();

        let content = content.trim();
        if content.is_empty() {
            return None;
        }

        Some(self.send_message(&from_user_id, to_user_id, content))
    }

    pub fn current_user(&self) -> Option<&User> {
        self.state.current_user.as_ref()
    }

    pub fn user(&self, user_id: &str) -> Option<&User> {
        self.state.users.iter().find(|u| u.user_id == user_id)
    }

    pub fn feed(&self, search: &str, selected_tag: Option<&str>) -> Vec<&Post> {
        let matcher = PostQueryMatcher::new(search);

        log::debug!("feed - query matcher: {matcher}");

        self.state
            .posts
            .iter()
            .filter(|post| {
                matcher.matches_post(post)
                    && selected_tag
                        .map(|tag| post.tags.iter().any(|t| t == tag))
                        .unwrap_or(true)
            })
            .collect()
    }

    pub fn all_tags(&self) -> Vec<String> {
        let mut tags: Vec<String> = Vec::new();

        for post in &self.state.posts {
            for tag in &post.tags {
                if !tags.contains(tag) {
                    tags.push(tag.clone());
                }
            }
        }

        tags
    }

    pub fn chats_for(&self, user_id: &str) -> Vec<&Chat> {
        self.state
            .chats
            .iter()
            .filter(|c| c.involves(user_id))
            .collect()
    }

    pub fn chat_between(&self, user_a: &str, user_b: &str) -> Option<&Chat> {
        let chat_id = chat_key(user_a, user_b);
        self.state.chats.iter().find(|c| c.chat_id == chat_id)
    }

    pub fn contacts(&self, user_id: &str, search: &str) -> Vec<&User> {
        self.state
            .users
            .iter()
            .filter(|u| u.user_id != user_id && query::text_matches(&u.name, search))
            .collect()
    }

    pub fn notifications_for(&self, user_id: &str) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self
            .state
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id)
            .collect();

        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        notifications
    }

    pub fn unread_count(&self, user_id: &str) -> usize {
        self.state
            .notifications
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .count()
    }
}

#[derive(Clone, Debug)]
struct PostQueryMatcher {
    terms: Vec<String>,
    field_filters: Vec<(String, String)>,
}

impl Display for PostQueryMatcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PostQueryMatcher(terms: {:?}, field_filters: {:?})",
            self.terms, self.field_filters
        )
    }
}

impl PostQueryMatcher {
    fn new(search: &str) -> Self {
        let q = query::Query::new(search);

        Self {
            terms: q.terms,
            field_filters: q.field_filters,
        }
    }

    // Check if a post matches the query
    fn matches_post(&self, post: &Post) -> bool {
        // Check field filters first
        for (field, value) in self.field_filters.iter() {
            let matches = match field.as_str() {
                "created-by" | "createdby" => query::text_exact_matches(&post.created_by, value),
                "tag" | "tags" => post.tags.iter().any(|t| query::text_exact_matches(t, value)),
                _ => false, // Unknown field
            };

            if !matches {
                return false;
            }
        }

        // If no terms to match, just check if field filters passed
        if self.terms.is_empty() {
            return true;
        }

        // Check search terms against content and tags
        for term in self.terms.iter() {
            let matches = query::text_matches(&post.content, term)
                || post.tags.iter().any(|t| query::text_matches(t, term));

            if !matches {
                return false;
            }
        }

        true
    }
}
