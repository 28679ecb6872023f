use crate::post::Post;
use crate::store::{SocialState, Theme};
use crate::user::User;

pub(crate) fn initial_state() -> SocialState {
    SocialState {
        current_user: None,
        users: initial_users(),
        posts: initial_posts(),
        chats: Vec::new(),
        notifications: Vec::new(),
        theme: Theme::Light,
    }
}

fn user(
    user_id: &str,
    name: &str,
    avatar: &str,
    bio: &str,
    location: &str,
    website: &str,
    joined_days_ago: i64,
) -> User {
    User {
        user_id: user_id.to_string(),
        name: name.to_string(),
        email: None,
        avatar: avatar.to_string(),
        bio: bio.to_string(),
        location: location.to_string(),
        website: website.to_string(),
        joined_at: chrono::Utc::now() - chrono::Duration::days(joined_days_ago),
    }
}

fn post(
    post_id: &str,
    created_by: &str,
    content: &str,
    image: Option<&str>,
    tags: &[&str],
    likes: &[&str],
    created_days_ago: i64,
) -> Post {
    Post {
        post_id: post_id.to_string(),
        created_by: created_by.to_string(),
        content: content.to_string(),
        image: image.map(|i| i.to_string()),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        poll: None,
        likes: likes.iter().map(|l| l.to_string()).collect(),
        comments: Vec::new(),
        created_at: chrono::Utc::now() - chrono::Duration::days(created_days_ago),
    }
}

fn initial_users() -> Vec<User> {
    vec![
        user(
            "1",
            "John Doe",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=400",
            "Software Developer",
            "San Francisco, CA",
            "https://johndoe.dev",
            75,
        ),
        user(
            "2",
            "Jane Smith",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=400",
            "Digital Artist",
            "New York, NY",
            "https://janesmith.art",
            61,
        ),
        user(
            "3",
            "Alex Johnson",
            "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=400",
            "Travel Photographer",
            "London, UK",
            "https://alexshots.com",
            44,
        ),
        user(
            "4",
            "Maria Garcia",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400",
            "UX Designer",
            "Barcelona, Spain",
            "https://mariadesigns.net",
            30,
        ),
        user(
            "5",
            "David Kim",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=400",
            "Tech Entrepreneur",
            "Seoul, South Korea",
            "https://davidkim.tech",
            15,
        ),
    ]
}

fn initial_posts() -> Vec<Post> {
    vec![
        post(
            "1",
            "1",
            "Just launched my new portfolio website! Check it out at https://johndoe.dev 🚀",
            None,
            &["webdev", "portfolio", "launch"],
            &["2", "3"],
            1,
        ),
        post(
            "2",
            "2",
            "Working on a new digital art series inspired by nature 🎨",
            Some("https://images.unsplash.com/photo-1579783902614-a3fb3927b6a5?w=800"),
            &["art", "digital", "nature"],
            &["1", "4"],
            2,
        ),
        post(
            "3",
            "3",
            "Captured this amazing sunset in London today!",
            Some("https://images.unsplash.com/photo-1529655683826-aba9b3e77383?w=800"),
            &["photography", "london", "sunset"],
            &["2", "5"],
            3,
        ),
    ]
}
