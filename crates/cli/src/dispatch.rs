//! Hook dispatch
//!
//! One invocation: check the repository, snapshot the context, resolve the
//! messages and let the presenter decide the verdict.

use hookmsg_config::resolve_hook;
use hookmsg_engine::{GitProvider, current_context};
use owo_colors::OwoColorize;
use std::io::Write;
use std::path::Path;

use crate::ui::{MessagePresenter, StatusIcon};

/// Run one hook and return whether the git operation may proceed
///
/// `hook_name` is the config key the messages are looked up under. Prompts
/// are shown only when `require_confirmation` is set and the config allows
/// interactive mode. The presenter's input is closed before returning.
pub fn handle_hook<W: Write>(
    git: &dyn GitProvider,
    start_dir: &Path,
    hook_name: &str,
    require_confirmation: bool,
    presenter: &mut MessagePresenter<W>,
) -> bool {
    if !git.is_repository() {
        eprintln!("{}", not_a_repository_notice(presenter.is_colored()));
        return false;
    }

    let context = current_context(git);
    let resolution = resolve_hook(start_dir, hook_name, Some(&context));
    tracing::debug!(
        hook = hook_name,
        branch = %context.branch,
        count = resolution.messages.len(),
        "Resolved messages"
    );

    if resolution.messages.is_empty() {
        return true;
    }

    let require_confirmation = require_confirmation && resolution.options.interactive();
    let verdict = presenter.display_interactive_messages(
        &resolution.messages,
        Some(&context),
        require_confirmation,
        Some(hook_name),
    );
    presenter.close();

    verdict
}

/// Line reported when the hook runs outside a repository
fn not_a_repository_notice(color: bool) -> String {
    let notice = format!("{} Not in a git repository", StatusIcon::Error.get());
    if color {
        notice.red().to_string()
    } else {
        notice
    }
}
