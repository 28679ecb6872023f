use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Message,
    Like,
    Comment,
}

impl Display for NotificationKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Message => write!(f, "message"),
            NotificationKind::Like => write!(f, "like"),
            NotificationKind::Comment => write!(f, "comment"),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Notification {
    pub notification_id: String,
    pub user_id: String,
    pub kind: NotificationKind,
    pub created_by: String,
    pub post_id: Option<String>,
    pub message_id: Option<String>,
    pub read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Notification {
    fn new(user_id: String, kind: NotificationKind, created_by: String) -> Self {
        Notification {
            notification_id: uuid::Uuid::new_v4().to_string(),
            user_id,
            kind,
            created_by,
            post_id: None,
            message_id: None,
            read: false,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn like(user_id: String, created_by: String, post_id: String) -> Self {
        let mut notification = Notification::new(user_id, NotificationKind::Like, created_by);
        notification.post_id = Some(post_id);
        notification
    }

    pub fn comment(user_id: String, created_by: String, post_id: String) -> Self {
        let mut notification = Notification::new(user_id, NotificationKind::Comment, created_by);
        notification.post_id = Some(post_id);
        notification
    }

    pub fn message(user_id: String, created_by: String, message_id: String) -> Self {
        let mut notification = Notification::new(user_id, NotificationKind::Message, created_by);
        notification.message_id = Some(message_id);
        notification
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_notification() {
        let notification = Notification::like("1".to_string(), "3".to_string(), "42".to_string());

        assert_eq!(notification.kind, NotificationKind::Like);
        assert_eq!(notification.user_id, "1");
        assert_eq!(notification.created_by, "3");
        assert_eq!(notification.post_id, Some("42".to_string()));
        assert!(notification.message_id.is_none());
        assert!(!notification.read);

        uuid::Uuid::parse_str(&notification.notification_id).unwrap();
    }

    #[test]
    fn test_message_notification() {
        let notification =
            Notification::message("2".to_string(), "1".to_string(), "m-1".to_string());

        assert_eq!(notification.kind, NotificationKind::Message);
        assert!(notification.post_id.is_none());
        assert_eq!(notification.message_id, Some("m-1".to_string()));
    }

    #[test]
    fn test_mark_read() {
        let mut notification =
            Notification::comment("1".to_string(), "2".to_string(), "42".to_string());

        assert!(!notification.read);
        notification.mark_read();
        assert!(notification.read);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NotificationKind::Message.to_string(), "message");
        assert_eq!(NotificationKind::Like.to_string(), "like");
        assert_eq!(NotificationKind::Comment.to_string(), "comment");
    }
}
