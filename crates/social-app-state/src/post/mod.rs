use serde::{Deserialize, Serialize};

#[derive(Clone, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: String,
    pub created_by: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Comment {
    pub fn new(user_id: String, content: String) -> Self {
        Comment {
            comment_id: uuid::Uuid::new_v4().to_string(),
            created_by: user_id,
            content,
            created_at: chrono::Utc::now(),
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct PollOption {
    pub option_id: String,
    pub label: String,
    pub votes: Vec<String>,
}

impl PollOption {
    fn new(label: String) -> Self {
        PollOption {
            option_id: uuid::Uuid::new_v4().to_string(),
            label,
            votes: Vec::new(),
        }
    }

    pub fn percent_of(&self, total_votes: usize) -> u32 {
        if total_votes == 0 {
            0
        } else {
            (self.votes.len() * 100 / total_votes) as u32
        }
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Poll {
    pub question: String,
    pub options: Vec<PollOption>,
    pub ends_at: chrono::DateTime<chrono::Utc>,
}

impl Poll {
    // Single-choice voting: the chosen option gains the voter, every other
    // option drops them. An unknown option id retracts the vote entirely.
    pub fn apply_vote(&mut self, option_id: &str, user_id: &str) {
        for option in self.options.iter_mut() {
            if option.option_id == option_id {
                if !option.votes.iter().any(|v| v == user_id) {
                    option.votes.push(user_id.to_string());
                }
            } else {
                option.votes.retain(|v| v != user_id);
            }
        }
    }

    pub fn total_votes(&self) -> usize {
        self.options.iter().map(|o| o.votes.len()).sum()
    }

    pub fn voted_option(&self, user_id: &str) -> Option<&str> {
        self.options
            .iter()
            .find(|o| o.votes.iter().any(|v| v == user_id))
            .map(|o| o.option_id.as_str())
    }

    pub fn is_closed(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.ends_at <= now
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct Post {
    pub post_id: String,
    pub created_by: String,
    pub content: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub poll: Option<Poll>,
    pub likes: Vec<String>,
    pub comments: Vec<Comment>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Post {
    pub fn new(post_id: String, created_by: String, content: String) -> Self {
        Post {
            post_id,
            created_by,
            content,
            image: None,
            tags: Vec::new(),
            poll: None,
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
        }
    }

    // Returns true when the user likes the post afterwards
    pub fn toggle_like(&mut self, user_id: &str) -> bool {
        if self.likes.iter().any(|id| id == user_id) {
            self.likes.retain(|id| id != user_id);
            false
        } else {
            self.likes.push(user_id.to_string());
            true
        }
    }

    pub fn has_liked(&self, user_id: &str) -> bool {
        self.likes.iter().any(|id| id == user_id)
    }

    pub fn add_comment(&mut self, comment: Comment) {
        self.comments.push(comment);
    }
}

#[derive(Clone)]
pub struct PollDraft {
    pub question: String,
    pub options: Vec<String>,
    pub duration_days: i64,
}

impl Default for PollDraft {
    fn default() -> Self {
        PollDraft {
            question: "".to_string(),
            options: Vec::new(),
            duration_days: 1,
        }
    }
}

impl PollDraft {
    fn build(self) -> Option<Poll> {
        let question = self.question.trim().to_string();

        let options: Vec<PollOption> = self
            .options
            .into_iter()
            .filter_map(|label| {
                let label = label.trim().to_string();
                if label.is_empty() {
                    None
                } else {
                    Some(PollOption::new(label))
                }
            })
            .collect();

        if question.is_empty() || options.len() < 2 {
            return None;
        }

        Some(Poll {
            question,
            options,
            ends_at: chrono::Utc::now() + chrono::Duration::days(self.duration_days.max(1)),
        })
    }
}

#[derive(Clone, Default)]
pub struct PostDraft {
    pub content: String,
    pub image: String,
    pub tags: String,
    pub poll: Option<PollDraft>,
}

impl PostDraft {
    pub fn build(self, created_by: String) -> Option<Post> {
        let content = self.content.trim().to_string();
        if content.is_empty() {
            return None;
        }

        let image = self.image.trim();

        Some(Post {
            post_id: uuid::Uuid::new_v4().to_string(),
            created_by,
            content,
            image: if image.is_empty() {
                None
            } else {
                Some(image.to_string())
            },
            tags: parse_tags(&self.tags),
            poll: self.poll.and_then(PollDraft::build),
            likes: Vec::new(),
            comments: Vec::new(),
            created_at: chrono::Utc::now(),
        })
    }
}

// Comma-separated input, one tag per entry: trimmed, lowercased, leading '#'
// stripped, duplicates dropped in first-seen order.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();

    for entry in input.split(',') {
        let tag = entry.trim().trim_start_matches('#').to_lowercase();
        if !tag.is_empty() && !tags.iter().any(|t| t == &tag) {
            tags.push(tag);
        }
    }

    tags
}
