use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Clone, Serialize, Deserialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: Option<String>,
    pub avatar: String,
    pub bio: String,
    pub location: String,
    pub website: String,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    pub fn new(user_id: String, name: String) -> Self {
        User {
            user_id,
            name,
            email: None,
            avatar: "".to_string(),
            bio: "".to_string(),
            location: "".to_string(),
            website: "".to_string(),
            joined_at: chrono::Utc::now(),
        }
    }
}

#[derive(Clone, Default)]
pub struct UserDraft {
    pub name: String,
    pub email: Option<String>,
    pub avatar: Option<String>,
    pub bio: String,
    pub location: String,
    pub website: String,
}

impl UserDraft {
    pub fn build(self, user_id: String) -> Result<User, String> {
        let _ = self
            .email
            .clone()
            .map(|email| {
                EmailAddress::from_str(email.as_str()).map_err(|e| format!("Invalid email: {e}"))
            })
            .transpose()?;

        let avatar = match self.avatar.filter(|a| !a.trim().is_empty()) {
            Some(avatar) => avatar,
            None => gravatar_url(self.email.as_deref().unwrap_or(&self.name)),
        };

        Ok(User {
            user_id,
            name: self.name,
            email: self.email,
            avatar,
            bio: self.bio,
            location: self.location,
            website: self.website,
            joined_at: chrono::Utc::now(),
        })
    }
}

pub fn gravatar_url(seed: &str) -> String {
    let digest = md5::compute(seed.trim().to_lowercase().as_bytes());
    format!("https://www.gravatar.com/avatar/{digest:x}?d=identicon")
}
