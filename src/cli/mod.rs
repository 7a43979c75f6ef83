//! One-shot commands.
//!
//! [`args`] defines the command line; [`run_command`] executes every
//! subcommand except `browse`, which needs the terminal and is started by
//! the binary.
//!
//! ```ignore
//! use blogdeck::cli::{run_command, Cli, CommandContext};
//!
//! let cli = Cli::parse();
//! let ctx = CommandContext::new(api);
//! run_command(cli.command(), &ctx, &mut std::io::stdout()).await?;
//! ```

pub mod args;

pub use args::{parse_id, Cli, CliCommand, EditPostArgs, NewPostArgs};

use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;

use crate::adapters::{Preanswered, StdinConfirm};
use crate::api::BlogApi;
use crate::cli_output::{print_notice, print_post_detail, print_post_list, print_user};
use crate::error::FlowError;
use crate::flows::auth::{LOGIN_OK, LOGOUT_OK, SIGNUP_OK};
use crate::flows::posts::{DELETE_OK, NO_POSTS, PUBLISH_OK, UPDATE_OK};
use crate::flows::{AuthFlow, DeleteOutcome, Notice, PostFlow};
use crate::models::PostFields;
use crate::traits::Confirm;

/// Why a command did not complete.
#[derive(Debug, Error)]
pub enum CommandError {
    /// A flow failed; the message is the one to show the user.
    #[error(transparent)]
    Flow(#[from] FlowError),

    /// Reading a password or writing output failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    /// `browse` was passed to [`run_command`].
    #[error("the browser must be started by the binary")]
    NeedsTerminal,
}

/// Reads a password without echoing it.
pub type PasswordReader = fn(&str) -> io::Result<String>;

/// Everything a command needs besides its arguments.
#[derive(Clone)]
pub struct CommandContext {
    pub auth: AuthFlow,
    pub posts: PostFlow,
    confirm: Arc<dyn Confirm>,
    read_password: PasswordReader,
}

impl CommandContext {
    /// Context that prompts on the controlling terminal.
    pub fn new(api: BlogApi) -> Self {
        Self {
            auth: AuthFlow::new(api.clone()),
            posts: PostFlow::new(api),
            confirm: Arc::new(StdinConfirm),
            read_password: prompt_hidden,
        }
    }

    pub fn with_confirm(mut self, confirm: Arc<dyn Confirm>) -> Self {
        self.confirm = confirm;
        self
    }

    pub fn with_password_reader(mut self, reader: PasswordReader) -> Self {
        self.read_password = reader;
        self
    }

    fn password(&self, given: Option<String>) -> io::Result<String> {
        match given {
            Some(password) => Ok(password),
            None => (self.read_password)("Password: "),
        }
    }
}

fn prompt_hidden(prompt: &str) -> io::Result<String> {
    rpassword::prompt_password(prompt)
}

/// Run one command, writing its output to `out`.
pub async fn run_command<W: Write>(
    command: CliCommand,
    ctx: &CommandContext,
    out: &mut W,
) -> Result<(), CommandError> {
    tracing::debug!(?command, "Running command");

    match command {
        CliCommand::Login { email, password } => {
            let password = ctx.password(password)?;
            let session = ctx.auth.login(&email, &password).await?;
            print_notice(out, &Notice::success(LOGIN_OK))?;
            print_user(out, &session.user)?;
        }
        CliCommand::Signup {
            name,
            email,
            password,
        } => {
            let password = ctx.password(password)?;
            let session = ctx.auth.signup(&name, &email, &password).await?;
            print_notice(out, &Notice::success(SIGNUP_OK))?;
            print_user(out, &session.user)?;
        }
        CliCommand::Logout => {
            ctx.auth.logout().await?;
            print_notice(out, &Notice::success(LOGOUT_OK))?;
        }
        CliCommand::Whoami => match ctx.auth.current_user().await {
            Some(user) => print_user(out, &user)?,
            None => print_notice(out, &Notice::info("Not signed in"))?,
        },
        CliCommand::List => {
            let viewer = ctx.auth.current_user().await;
            match ctx.posts.list().await {
                Ok(list) => print_post_list(out, &list, viewer.as_ref())?,
                Err(err) => {
                    writeln!(out, "{}", NO_POSTS)?;
                    return Err(err.into());
                }
            }
        }
        CliCommand::Show { id } => {
            let post = ctx.posts.get(&parse_id(&id)).await?;
            let viewer = ctx.auth.current_user().await;
            print_post_detail(out, &post, viewer.as_ref())?;
        }
        CliCommand::Create(args) => {
            let post = ctx.posts.create(PostFields::from(args)).await?;
            print_notice(out, &Notice::success(PUBLISH_OK))?;
            writeln!(out, "[{}] {}", post.id, post.title)?;
        }
        CliCommand::Edit { id, fields } => {
            let post = ctx.posts.edit(&parse_id(&id), fields.into()).await?;
            print_notice(out, &Notice::success(UPDATE_OK))?;
            writeln!(out, "[{}] {}", post.id, post.title)?;
        }
        CliCommand::Delete { id, yes } => {
            let id = parse_id(&id);
            let outcome = if yes {
                ctx.posts.delete(&id, &Preanswered(true)).await?
            } else {
                ctx.posts.delete(&id, ctx.confirm.as_ref()).await?
            };
            match outcome {
                DeleteOutcome::Deleted => print_notice(out, &Notice::success(DELETE_OK))?,
                DeleteOutcome::Declined => print_notice(out, &Notice::info("Cancelled"))?,
            }
        }
        CliCommand::Browse => return Err(CommandError::NeedsTerminal),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemorySession, MockHttpClient, MockResponse, ScriptedConfirm};
    use crate::models::User;
    use crate::session::Session;
    use serde_json::json;

    fn no_tty(_: &str) -> io::Result<String> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no tty"))
    }

    fn typed_password(_: &str) -> io::Result<String> {
        Ok("hunter2".to_string())
    }

    fn context(session: InMemorySession) -> (CommandContext, MockHttpClient) {
        let http = MockHttpClient::new();
        let api = BlogApi::new("http://api.test", Arc::new(http.clone()), Arc::new(session));
        let ctx = CommandContext::new(api)
            .with_confirm(Arc::new(ScriptedConfirm::new(false)))
            .with_password_reader(no_tty);
        (ctx, http)
    }

    async fn run(ctx: &CommandContext, command: CliCommand) -> (Result<(), CommandError>, String) {
        let mut out = Vec::new();
        let result = run_command(command, ctx, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_login_prompts_for_missing_password() {
        let (ctx, http) = context(InMemorySession::new());
        let ctx = ctx.with_password_reader(typed_password);
        http.set_response(
            "POST",
            "http://api.test/login",
            MockResponse::json(
                200,
                json!({"accessToken": "t", "user": {"id": 1, "name": "Ada", "email": "a@x.io"}}),
            ),
        );

        let (result, out) = run(
            &ctx,
            CliCommand::Login {
                email: "a@x.io".to_string(),
                password: None,
            },
        )
        .await;

        assert!(result.is_ok());
        assert!(out.contains("Logged in successfully!"));
        let body = http.get_requests()[0].json_body().unwrap();
        assert_eq!(body["password"], "hunter2");
    }

    #[tokio::test]
    async fn test_password_prompt_failure_sends_nothing() {
        let (ctx, http) = context(InMemorySession::new());
        let (result, _) = run(
            &ctx,
            CliCommand::Login {
                email: "a@x.io".to_string(),
                password: None,
            },
        )
        .await;
        assert!(matches!(result, Err(CommandError::Io(_))));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_list_failure_prints_placeholder_and_fails() {
        let (ctx, http) = context(InMemorySession::new());
        http.set_response("GET", "http://api.test/posts", MockResponse::status(503));

        let (result, out) = run(&ctx, CliCommand::List).await;
        assert_eq!(out, "No posts available.\n");
        let Err(CommandError::Flow(err)) = result else {
            panic!("expected flow error");
        };
        assert_eq!(err.message(), "Failed to load posts");
    }

    #[tokio::test]
    async fn test_delete_declined_prints_cancelled() {
        let (ctx, http) = context(InMemorySession::new());
        let (result, out) = run(
            &ctx,
            CliCommand::Delete {
                id: "5".to_string(),
                yes: false,
            },
        )
        .await;
        assert!(result.is_ok());
        assert!(out.contains("Cancelled"));
        assert_eq!(http.request_count(), 0);
    }

    #[tokio::test]
    async fn test_delete_with_yes_skips_prompt() {
        let (ctx, http) = context(InMemorySession::new());
        http.set_response("DELETE", "http://api.test/posts/5", MockResponse::status(200));

        let (result, out) = run(
            &ctx,
            CliCommand::Delete {
                id: "5".to_string(),
                yes: true,
            },
        )
        .await;
        assert!(result.is_ok());
        assert!(out.contains("Post deleted successfully"));
    }

    #[tokio::test]
    async fn test_whoami() {
        let session = Session::new("t", User::new(2u64, "Grace", "g@x.io"));
        let (ctx, _) = context(InMemorySession::with_session(session));
        let (_, out) = run(&ctx, CliCommand::Whoami).await;
        assert_eq!(out, "Grace <g@x.io> (id 2)\n");

        let (ctx, _) = context(InMemorySession::new());
        let (_, out) = run(&ctx, CliCommand::Whoami).await;
        assert!(out.contains("Not signed in"));
    }

    #[tokio::test]
    async fn test_browse_is_rejected() {
        let (ctx, _) = context(InMemorySession::new());
        let (result, _) = run(&ctx, CliCommand::Browse).await;
        assert!(matches!(result, Err(CommandError::NeedsTerminal)));
    }
}
