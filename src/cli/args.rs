//! Command-line argument parsing.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::models::{Id, PostFields, PostPatch};

#[derive(Parser, Debug)]
#[command(name = "blogdeck")]
#[command(version)]
#[command(about = "Terminal client for the blog REST API")]
pub struct Cli {
    /// API base URL (overrides BLOGDECK_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Directory for the session file and log (overrides BLOGDECK_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Cli {
    /// The command to run; no subcommand opens the browser.
    pub fn command(&self) -> CliCommand {
        self.command.clone().unwrap_or(CliCommand::Browse)
    }

    /// Apply the global flags on top of `config`.
    pub fn apply_to(&self, mut config: ClientConfig) -> ClientConfig {
        if let Some(url) = &self.api_url {
            config = config.with_base_url(url.clone());
        }
        if let Some(home) = &self.home {
            config = config.with_data_dir(home.clone());
        }
        config
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        /// Read from a hidden prompt when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        /// Read from a hidden prompt when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Forget the stored session
    Logout,

    /// Show the signed-in user
    Whoami,

    /// List all posts
    List,

    /// Show one post
    Show {
        #[arg(value_name = "POST_ID")]
        id: String,
    },

    /// Publish a new post
    Create(NewPostArgs),

    /// Edit one of your posts; omitted fields keep their current value
    Edit {
        #[arg(value_name = "POST_ID")]
        id: String,
        #[command(flatten)]
        fields: EditPostArgs,
    },

    /// Delete one of your posts
    Delete {
        #[arg(value_name = "POST_ID")]
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Open the interactive browser (default)
    Browse,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct NewPostArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    #[arg(long, value_name = "URL")]
    pub image_url: String,
    #[arg(long)]
    pub category: String,
}

impl From<NewPostArgs> for PostFields {
    fn from(args: NewPostArgs) -> Self {
        PostFields::new(args.title, args.description, args.image_url, args.category)
    }
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct EditPostArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long, value_name = "URL")]
    pub image_url: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
}

impl From<EditPostArgs> for PostPatch {
    fn from(args: EditPostArgs) -> Self {
        PostPatch {
            title: args.title,
            description: args.description,
            image_url: args.image_url,
            category: args.category,
        }
    }
}

/// Parse a post id argument.
pub fn parse_id(raw: &str) -> Id {
    match raw.trim().parse::<Id>() {
        Ok(id) => id,
        Err(never) => match never {},
    }
}
