//! Terminal rendering of videos, comments and users

use crate::core::format::{format_duration, format_relative, format_views};
use crate::types::{Comment, User, Video};
use chrono::Utc;
use colored::Colorize;

/// One-line summary used in lists and the picker
pub fn video_label(video: &Video) -> String {
    format!(
        "{} {} {} - {} {}",
        format!("[{}]", video.id).dimmed(),
        video.title,
        format!("[{}]", format_duration(video.duration_seconds)).dimmed(),
        video.owner.username.cyan(),
        format!("({} views)", format_views(video.view_count)).dimmed()
    )
}

/// Print a list of videos, or `empty` when there are none
pub fn print_videos<'a>(videos: impl IntoIterator<Item = &'a Video>, empty: &str) {
    let mut any = false;
    for video in videos {
        println!("{}", video_label(video));
        any = true;
    }
    if !any {
        println!("{}", empty.yellow());
    }
}

fn user_badge(user: &User) -> String {
    format!("{} {}", format!("[{}]", user.initials()).magenta(), user.username.cyan())
}

fn print_comment(comment: &Comment) {
    println!(
        "  {} {}",
        user_badge(&comment.author),
        format_relative(comment.timestamp, Utc::now()).dimmed()
    );
    println!("    {}", comment.text);
    if comment.like_count > 0 {
        println!("    {}", format!("♥ {}", comment.like_count).dimmed());
    }
}

/// Full detail view: header, description, comments and recommendations
pub fn print_video_detail(video: &Video, liked: bool, saved: bool, recommended: &[&Video]) {
    println!("{}", video.title.bold());
    println!(
        "{} views • {} • {}",
        format_views(video.view_count),
        format_relative(video.upload_date, Utc::now()),
        format_duration(video.duration_seconds)
    );
    println!("{}", user_badge(&video.owner));
    println!(
        "{} {}",
        if liked { "♥ Liked".red() } else { "♡ Like".normal() },
        if saved { "✓ Saved".green() } else { "+ Watch later".normal() }
    );
    println!();
    println!("{}", video.description);
    println!("{}", video.video_url.dimmed());
    println!();

    println!("{}", format!("Comments ({})", video.comments.len()).bold());
    if video.comments.is_empty() {
        println!("  {}", "No comments yet. Be the first to comment!".dimmed());
    }
    for comment in &video.comments {
        print_comment(comment);
    }

    if !recommended.is_empty() {
        println!();
        println!("{}", "Recommended".bold());
        for video in recommended {
            println!("  {}", video_label(video));
        }
    }
}

pub fn print_user(user: Option<&User>) {
    match user {
        Some(user) => println!("Signed in as {}", user_badge(user)),
        None => println!("{}", "Not signed in.".yellow()),
    }
}
