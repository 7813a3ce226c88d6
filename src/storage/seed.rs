//! Demo catalog used when nothing has been persisted yet

use crate::types::{Comment, User, Video};
use chrono::{DateTime, NaiveDate, Utc};

const SAMPLE_VIDEO_URL: &str =
    "https://sample-videos.com/video123/mp4/720/big_buck_bunny_720p_1mb.mp4";

fn date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .unwrap_or_default()
}

fn user(id: &str, username: &str, img: u32) -> User {
    User {
        id: id.into(),
        username: username.into(),
        avatar: Some(format!("https://i.pravatar.cc/150?img={}", img)),
    }
}

fn unsplash(photo: &str) -> String {
    format!(
        "https://images.unsplash.com/{}?w=500&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
        photo
    )
}

struct SeedVideo {
    title: &'static str,
    description: &'static str,
    photo: &'static str,
    uploaded: (i32, u32, u32),
    duration: u64,
    views: u64,
    likes: u64,
    owner: (&'static str, &'static str, u32),
    comment: &'static str,
    commenter: (&'static str, &'static str, u32),
    commented: (i32, u32, u32),
    comment_likes: u64,
}

const SEED: [SeedVideo; 6] = [
    SeedVideo {
        title: "Mountain Sunrise Timelapse",
        description: "Beautiful timelapse of sunrise over mountains captured during my hiking trip.",
        photo: "photo-1506905925346-21bda4d32df4",
        uploaded: (2023, 1, 15),
        duration: 180,
        views: 1542,
        likes: 124,
        owner: ("user1", "naturelover", 3),
        comment: "This view is incredible!",
        commenter: ("u2", "mountaineer", 12),
        commented: (2023, 1, 16),
        comment_likes: 5,
    },
    SeedVideo {
        title: "Urban Exploration: Hidden City",
        description: "Discovered some amazing hidden spots in the city that most locals don't even know about.",
        photo: "photo-1480714378408-67cf0d13bc1b",
        uploaded: (2023, 2, 22),
        duration: 421,
        views: 3281,
        likes: 275,
        owner: ("user2", "urbanexplorer", 7),
        comment: "I've lived here for years and never knew about these places!",
        commenter: ("u3", "citydweller", 25),
        commented: (2023, 2, 23),
        comment_likes: 12,
    },
    SeedVideo {
        title: "Deep Ocean Discoveries",
        description: "Footage from our deep-sea exploration revealing fascinating marine life.",
        photo: "photo-1551244072-5d12893278ab",
        uploaded: (2023, 3, 10),
        duration: 307,
        views: 5928,
        likes: 432,
        owner: ("user3", "oceanographer", 15),
        comment: "The bioluminescence is stunning!",
        commenter: ("u4", "marinebiologist", 32),
        commented: (2023, 3, 11),
        comment_likes: 18,
    },
    SeedVideo {
        title: "Desert Stargazing Guide",
        description: "A guide to the best stargazing spots in the desert and how to capture amazing night sky photos.",
        photo: "photo-1534447677768-be436bb09401",
        uploaded: (2023, 4, 5),
        duration: 493,
        views: 2865,
        likes: 301,
        owner: ("user4", "astroexplorer", 21),
        comment: "Used your tips last weekend and got some amazing shots!",
        commenter: ("u5", "nightphotographer", 44),
        commented: (2023, 4, 7),
        comment_likes: 9,
    },
    SeedVideo {
        title: "Traditional Cooking Methods",
        description: "Learning traditional cooking techniques from village elders around the world.",
        photo: "photo-1547592180-85f173990554",
        uploaded: (2023, 5, 18),
        duration: 612,
        views: 4127,
        likes: 385,
        owner: ("user5", "culinaryanthropologist", 28),
        comment: "This reminds me of how my grandmother used to cook!",
        commenter: ("u6", "foodhistorian", 51),
        commented: (2023, 5, 20),
        comment_likes: 24,
    },
    SeedVideo {
        title: "Wildlife Photography Tips",
        description: "Professional tips for capturing amazing wildlife photos in their natural habitat.",
        photo: "photo-1564349683136-77e08dba1ef3",
        uploaded: (2023, 6, 9),
        duration: 352,
        views: 3764,
        likes: 298,
        owner: ("user6", "wildlifephotographer", 36),
        comment: "Your patience is incredible! Great tips on getting the perfect shot.",
        commenter: ("u7", "naturephotoenthusiast", 60),
        commented: (2023, 6, 10),
        comment_likes: 15,
    },
];

/// The six demo videos, ids "1" through "6", each with one comment
pub fn demo_videos() -> Vec<Video> {
    SEED.iter()
        .enumerate()
        .map(|(i, s)| {
            let n = i + 1;
            let (y, m, d) = s.uploaded;
            let (cy, cm, cd) = s.commented;
            Video {
                id: n.to_string(),
                title: s.title.into(),
                description: s.description.into(),
                thumbnail_url: unsplash(s.photo),
                video_url: SAMPLE_VIDEO_URL.into(),
                upload_date: date(y, m, d),
                duration_seconds: s.duration,
                view_count: s.views,
                like_count: s.likes,
                owner: user(s.owner.0, s.owner.1, s.owner.2),
                comments: vec![Comment {
                    id: format!("c{}", n),
                    text: s.comment.into(),
                    author: user(s.commenter.0, s.commenter.1, s.commenter.2),
                    timestamp: date(cy, cm, cd),
                    like_count: s.comment_likes,
                }],
            }
        })
        .collect()
}
