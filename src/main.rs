//! viewvoyage - browse, like and comment on videos in your terminal

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use viewvoyage::app::App;
use viewvoyage::core::upload;
use viewvoyage::error::ViewVoyageError;
use viewvoyage::storage::{FileStore, config};
use viewvoyage::types::{Config, MenuItem, UploadOptions, UploadRequest};
use viewvoyage::ui::{picker, render};
use viewvoyage::utils::paths::ensure_app_dirs;

/// Browse, search, upload, like and comment on videos.
#[derive(Parser, Debug)]
#[command(name = "viewvoyage")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in (any non-empty username and password)
    Login {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Create an account and sign in
    Signup {
        #[arg(short, long)]
        username: Option<String>,
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// List videos, optionally filtered by a search query
    List {
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Pick a video interactively and show it
    Browse {
        #[arg(trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// Show a video with its comments
    Show { id: String },
    /// Like or unlike a video
    Like { id: String },
    /// Add or remove a video from watch later
    Save { id: String },
    /// List liked videos
    Liked,
    /// List videos saved for later
    Mylist,
    /// Comment on a video
    Comment {
        id: String,
        #[arg(trailing_var_arg = true, required = true)]
        text: Vec<String>,
    },
    /// Upload a video
    Upload {
        #[arg(short, long, default_value = "")]
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        /// Video file
        #[arg(long)]
        video: Option<PathBuf>,
        /// Thumbnail image (optional)
        #[arg(long)]
        thumbnail: Option<PathBuf>,
    },
    /// Show or edit the configuration file
    Config {
        #[arg(short, long)]
        edit: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "viewvoyage=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load config
    let cfg = config::load_config().await?;

    // Ensure app directories exist
    ensure_app_dirs(&cfg.data_dir).await?;

    let mut app = App::new(FileStore::new(&cfg.data_dir), &cfg.storage_prefix);
    app.init().await?;

    match run(cli.command, &mut app, &cfg).await {
        Ok(()) => Ok(()),
        Err(e) if e.is_user_error() => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

async fn run(
    command: Command,
    app: &mut App<FileStore>,
    cfg: &Config,
) -> Result<(), ViewVoyageError> {
    match command {
        Command::Login { username, password } => {
            let (username, password) = credentials(username, password)?;
            if app.session.login(&username, &password).await {
                println!("{}", "Welcome back! You have successfully signed in.".green());
            } else {
                return Err(ViewVoyageError::MissingFields(
                    "please enter both username and password".into(),
                ));
            }
        }

        Command::Signup { username, password } => {
            let (username, password) = credentials(username, password)?;
            if app.session.signup(&username, &password).await {
                println!("{}", "Account created. You are now signed in.".green());
            } else {
                return Err(ViewVoyageError::MissingFields(
                    "please enter both username and password".into(),
                ));
            }
        }

        Command::Logout => {
            app.session.logout().await;
            println!("{}", "Signed out.".dimmed());
        }

        Command::Whoami => render::print_user(app.session.current_user()),

        Command::List { query } => {
            let query = query.join(" ");
            render::print_videos(app.catalog.filtered(&query), "No videos found.");
        }

        Command::Browse { query } => {
            let query = query.join(" ");
            let items: Vec<MenuItem<String>> = app
                .catalog
                .filtered(&query)
                .into_iter()
                .map(|v| MenuItem {
                    label: render::video_label(v),
                    value: v.id.clone(),
                })
                .collect();

            match picker::select(&items, "Select Video") {
                Some(id) => show(app, cfg, &id),
                None if items.is_empty() => println!("{}", "No videos found.".yellow()),
                None => {}
            }
        }

        Command::Show { id } => show(app, cfg, &id),

        Command::Like { id } => {
            let video = find(app, &id)?;
            if app.session.toggle_like(&video).await {
                println!("{} {}", "Liked".red(), video.title);
            } else {
                println!("{} {}", "Removed like from".dimmed(), video.title);
            }
        }

        Command::Save { id } => {
            let video = find(app, &id)?;
            if app.session.toggle_my_list(&video).await {
                println!("{} {}", "Saved for later:".green(), video.title);
            } else {
                println!("{} {}", "Removed from watch later:".dimmed(), video.title);
            }
        }

        Command::Liked => {
            render::print_videos(app.session.liked_videos(), "You haven't liked any videos yet.")
        }

        Command::Mylist => render::print_videos(
            app.session.my_list_videos(),
            "Your watch later list is empty.",
        ),

        Command::Comment { id, text } => {
            let user = app
                .session
                .current_user()
                .cloned()
                .ok_or(ViewVoyageError::NotAuthenticated)?;
            find(app, &id)?;

            match app.catalog.add_comment(&id, &user, &text.join(" ")).await {
                Some(_) => println!("{}", "Comment added.".green()),
                None => println!("{}", "Nothing to post.".yellow()),
            }
        }

        Command::Upload {
            title,
            description,
            video,
            thumbnail,
        } => {
            let request = UploadRequest {
                title,
                description,
                video_path: video,
                thumbnail_path: thumbnail,
            };
            let options = UploadOptions::from(cfg);
            let new_video =
                upload::upload(&request, app.session.current_user(), &options).await?;
            let video = app.catalog.add_video(new_video).await;
            println!("{} {}", "Upload successful:".green(), render::video_label(&video));
        }

        Command::Config { edit } => {
            if edit {
                config::edit_config(&cfg.editor).await?;
            } else {
                println!("{}", serde_json::to_string_pretty(cfg)?);
            }
        }
    }

    Ok(())
}

fn credentials(
    username: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ViewVoyageError> {
    let username = picker::text_or_prompt(username, "Username")?;
    let password = picker::password_or_prompt(password)?;
    Ok((username, password))
}

fn find(app: &App<FileStore>, id: &str) -> Result<viewvoyage::types::Video, ViewVoyageError> {
    app.catalog
        .get_by_id(id)
        .cloned()
        .ok_or_else(|| ViewVoyageError::NotFound(id.to_string()))
}

/// Detail view. An unknown id falls back to the full catalog.
fn show(app: &App<FileStore>, cfg: &Config, id: &str) {
    let Some(video) = app.catalog.get_by_id(id) else {
        println!("{} {}", "Video not found:".yellow(), id);
        println!();
        render::print_videos(app.catalog.list(), "No videos found.");
        return;
    };

    let recommended = app.catalog.recommended(id, cfg.recommended_limit);
    render::print_video_detail(
        video,
        app.session.is_video_liked(id),
        app.session.is_video_in_my_list(id),
        &recommended,
    );
}
