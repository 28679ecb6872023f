pub mod chat;
mod common;
pub mod notification;
pub mod post;
mod seed;
pub mod storage;
pub mod store;
pub mod user;

pub use chat::{chat_key, Chat, Message};
pub use notification::{Notification, NotificationKind};
pub use post::{Comment, Poll, PollDraft, PollOption, Post, PostDraft};
pub use storage::LocalStorage;
pub use store::{SocialState, SocialStore, Theme, STORAGE_KEY};
pub use user::{User, UserDraft};
