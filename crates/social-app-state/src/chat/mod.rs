use serde::{Deserialize, Serialize};

// The chat id is a pure function of the unordered participant pair, so
// lookup and creation agree on one chat per pair.
pub fn chat_key(user_a: &str, user_b: &str) -> String {
    let mut pair = [user_a, user_b];
    pair.sort_unstable();
    pair.join("-")
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Message {
    pub message_id: String,
    pub created_by: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Message {
    pub fn new(user_id: String, content: String) -> Self {
        Message {
            message_id: uuid::Uuid::new_v4().to_string(),
            created_by: user_id,
            content,
            created_at: chrono::Utc::now(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Chat {
    pub chat_id: String,
    pub participants: Vec<String>,
    pub messages: Vec<Message>,
}

impl Chat {
    pub fn direct(from_user_id: &str, to_user_id: &str) -> Self {
        Chat {
            chat_id: chat_key(from_user_id, to_user_id),
            participants: vec![from_user_id.to_string(), to_user_id.to_string()],
            messages: Vec::new(),
        }
    }

    pub fn add_message(&mut self, created_by: String, content: String) -> String {
        let message = Message::new(created_by, content);
        let message_id = message.message_id.clone();
        self.messages.push(message);
        message_id
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.participants.iter().any(|id| id == user_id)
    }

    pub fn partner_of(&self, user_id: &str) -> Option<&str> {
        self.participants
            .iter()
            .find(|id| *id != user_id)
            .map(|id| id.as_str())
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_chat() -> Chat {
        Chat::direct("1", "2")
    }

    #[test]
    fn test_chat_key_is_order_independent() {
        assert_eq!(chat_key("1", "2"), "1-2");
        assert_eq!(chat_key("2", "1"), "1-2");
        assert_eq!(chat_key("10", "2"), "10-2");
    }

    #[test]
    fn test_direct_chat() {
        let chat = Chat::direct("2", "1");

        assert_eq!(chat.chat_id, "1-2");
        assert_eq!(chat.participants, vec!["2".to_string(), "1".to_string()]);
        assert!(chat.messages.is_empty());
        assert!(chat.last_message().is_none());
    }

    #[test]
    fn test_add_message() {
        let mut chat = create_test_chat();

        let message_id1 = chat.add_message("1".to_string(), "Hello".to_string());
        let message_id2 = chat.add_message("2".to_string(), "Hi there".to_string());

        assert_eq!(chat.messages.len(), 2);
        assert_eq!(chat.messages[0].message_id, message_id1);
        assert_eq!(chat.messages[0].content, "Hello");
        assert_eq!(chat.messages[0].created_by, "1");
        assert_eq!(chat.messages[1].message_id, message_id2);
        assert_ne!(message_id1, message_id2);

        uuid::Uuid::parse_str(&message_id1).unwrap();
    }

    #[test]
    fn test_last_message() {
        let mut chat = create_test_chat();
        chat.add_message("1".to_string(), "first".to_string());
        chat.add_message("2".to_string(), "second".to_string());

        let last = chat.last_message().unwrap();
        assert_eq!(last.content, "second");
        assert_eq!(last.created_by, "2");
    }

    #[test]
    fn test_involves_and_partner() {
        let chat = create_test_chat();

        assert!(chat.involves("1"));
        assert!(chat.involves("2"));
        assert!(!chat.involves("3"));

        assert_eq!(chat.partner_of("1"), Some("2"));
        assert_eq!(chat.partner_of("2"), Some("1"));
    }
}
