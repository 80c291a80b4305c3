use std::path::PathBuf;

use anyhow::Result as Fallible;
use clap::{Parser, Subcommand};
use rfdb_application::prelude as flows;
use rfdb_core::{
    entities::*,
    thread::{AnnotatedComment, ThreadConfig},
    usecases,
};
use rfdb_db_sqlite::Connections;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "rfdb", version, about = "Threaded restaurant comments")]
pub struct Args {
    /// Configuration file [default: rfdb.toml]
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Register a new user
    AddUser {
        name: String,
        email: String,
        #[arg(long, default_value = "user")]
        role: Role,
    },
    /// Add a new restaurant
    AddRestaurant { name: String },
    /// Post a top-level comment on a restaurant
    Comment {
        #[arg(long)]
        restaurant: Id,
        #[arg(long)]
        user: Id,
        text: String,
    },
    /// Reply to an existing comment
    Reply {
        #[arg(long)]
        restaurant: Id,
        #[arg(long)]
        parent: Id,
        #[arg(long)]
        user: Id,
        text: String,
    },
    /// Like a comment
    Like {
        #[arg(long)]
        user: Id,
        comment: Id,
    },
    /// Withdraw a like
    Unlike {
        #[arg(long)]
        user: Id,
        comment: Id,
    },
    /// Delete a single comment (admins only)
    DeleteComment {
        #[arg(long)]
        account: Id,
        comment: Id,
    },
    /// Print the ranked comment thread of a restaurant
    Thread {
        restaurant: Id,
        /// Mark the comments liked by this user
        #[arg(long)]
        viewer: Option<Id>,
    },
}

pub fn run(args: Args) -> Fallible<()> {
    let Args { config, command } = args;
    let cfg = Config::try_load_from_file_or_default(config)?;
    let connections = Connections::init(&cfg.db.conn_sqlite, cfg.db.conn_pool_size.into())?;
    rfdb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;
    execute(&connections, &cfg.comments.thread, command)
}

fn execute(connections: &Connections, thread_config: &ThreadConfig, command: Command) -> Fallible<()> {
    match command {
        Command::AddUser { name, email, role } => {
            let user = flows::create_user(connections, NewUser { name, email, role })?;
            println!("Created user {} <{}>", user.id, user.email);
        }
        Command::AddRestaurant { name } => {
            let restaurant = flows::create_restaurant(connections, &name)?;
            println!("Created restaurant {} '{}'", restaurant.id, restaurant.name);
        }
        Command::Comment {
            restaurant,
            user,
            text,
        } => {
            let comment = flows::post_comment(
                connections,
                usecases::PostComment {
                    restaurant_id: restaurant,
                    author_id: user,
                    text,
                },
            )?;
            println!("Posted comment {}", comment.id);
        }
        Command::Reply {
            restaurant,
            parent,
            user,
            text,
        } => {
            let comment = flows::reply_to_comment(
                connections,
                usecases::ReplyToComment {
                    restaurant_id: restaurant,
                    parent_id: parent,
                    author_id: user,
                    text,
                },
            )?;
            if !thread_config.is_rendered(comment.layer) {
                log::warn!(
                    "Reply {} on layer {} is stored but not displayed",
                    comment.id,
                    comment.layer.value()
                );
            }
            println!("Posted reply {}", comment.id);
        }
        Command::Like { user, comment } => {
            flows::like_comment(connections, user, comment)?;
        }
        Command::Unlike { user, comment } => {
            flows::unlike_comment(connections, user, comment)?;
        }
        Command::DeleteComment { account, comment } => {
            let deleted = flows::delete_comment(connections, account, comment)?;
            println!(
                "Deleted comment {} of restaurant {}",
                deleted.id, deleted.restaurant_id
            );
        }
        Command::Thread { restaurant, viewer } => {
            let thread =
                flows::load_comment_thread(connections, restaurant, viewer, thread_config)?;
            print!("{}", render_thread(&thread));
        }
    }
    Ok(())
}

// One line per comment, indented by its layer
fn render_thread(thread: &[AnnotatedComment]) -> String {
    thread
        .iter()
        .map(|annotated| {
            let AnnotatedComment {
                comment,
                like_count,
                liked_by_viewer,
            } = annotated;
            let indent = usize::from(comment.layer.value().saturating_sub(1)) * 2;
            let marker = if *liked_by_viewer { " *" } else { "" };
            format!(
                "{:indent$}[{}] {} ({} likes{}) {}\n",
                "", comment.id, comment.text, like_count, marker, comment.created_at
            )
        })
        .collect()
}
