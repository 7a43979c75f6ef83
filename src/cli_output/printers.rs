//! Printers for notices, users and posts.

use std::io::{self, Write};

use crate::flows::{Notice, NoticeKind, PostList};
use crate::flows::posts::NO_POSTS;
use crate::models::{Post, User};
use crate::view::{byline, detail_subtitle, excerpt, post_actions, PostAction};

/// Line width for separators.
const LINE_WIDTH: usize = 60;

/// Status icons
pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const FAILURE: &str = "✗";
    pub const INFO: &str = "·";
}

/// Print a notice prefixed with its icon.
///
/// ```text
/// ✓ Logged in successfully!
/// ```
pub fn print_notice<W: Write>(out: &mut W, notice: &Notice) -> io::Result<()> {
    let icon = match notice.kind {
        NoticeKind::Success => icons::SUCCESS,
        NoticeKind::Error => icons::FAILURE,
        NoticeKind::Info => icons::INFO,
    };
    writeln!(out, "{} {}", icon, notice.message)
}

/// ```text
/// Ada <ada@example.com> (id 3)
/// ```
pub fn print_user<W: Write>(out: &mut W, user: &User) -> io::Result<()> {
    writeln!(out, "{} <{}> (id {})", user.name, user.email, user.id)
}

/// Print the home list, or the empty placeholder.
///
/// ```text
/// [12] Rust in production
///   Engineering
///   Notes from a year of running Rust services.
///   Ada — 3/7/2025   [edit] [delete]
/// ────────────────────────────────────────────────────────────
/// ```
pub fn print_post_list<W: Write>(
    out: &mut W,
    list: &PostList,
    viewer: Option<&User>,
) -> io::Result<()> {
    if list.is_empty() {
        return writeln!(out, "{}", NO_POSTS);
    }
    for post in list.posts() {
        print_post_card(out, post, viewer)?;
        writeln!(out, "{}", "─".repeat(LINE_WIDTH))?;
    }
    Ok(())
}

pub fn print_post_card<W: Write>(out: &mut W, post: &Post, viewer: Option<&User>) -> io::Result<()> {
    writeln!(out, "[{}] {}", post.id, post.title)?;
    writeln!(out, "  {}", post.category)?;
    writeln!(out, "  {}", excerpt(&post.description))?;
    writeln!(
        out,
        "  {}{}",
        byline(post),
        action_suffix(&post_actions(post, viewer))
    )
}

/// Print one post in full.
pub fn print_post_detail<W: Write>(
    out: &mut W,
    post: &Post,
    viewer: Option<&User>,
) -> io::Result<()> {
    writeln!(out, "{}", post.title)?;
    writeln!(out, "{}", "═".repeat(LINE_WIDTH))?;
    writeln!(out, "{}", detail_subtitle(post))?;
    writeln!(out, "by {}", post.author)?;
    writeln!(out, "Image: {}", post.image_url)?;
    writeln!(out)?;
    writeln!(out, "{}", post.description)?;

    let actions = post_actions(post, viewer);
    if !actions.is_empty() {
        writeln!(out)?;
        writeln!(out, "Actions:{}", action_suffix(&actions))?;
    }
    Ok(())
}

fn action_suffix(actions: &[PostAction]) -> String {
    actions
        .iter()
        .map(|action| match action {
            PostAction::Edit => "   [edit]",
            PostAction::Delete => " [delete]",
        })
        .collect()
}
