//! Command dispatch and shared handler helpers.

pub mod auth;
pub mod config_cmd;
pub mod devices;
pub mod equipment;
pub mod ip;
pub mod users;

use indicatif::{ProgressBar, ProgressStyle};

use campus_api::ItemId;
use campus_core::{BulkAction, ListController, ListSource};

use crate::cli::{Command, GlobalOpts, ListArgs};
use crate::context::AppContext;
use crate::error::CliError;

/// Dispatch a server-bound command to the appropriate handler.
pub async fn dispatch(cmd: Command, ctx: &AppContext, global: &GlobalOpts) -> Result<(), CliError> {
    match cmd {
        Command::Login(args) => auth::login(ctx, args).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Devices(args) => devices::handle(ctx, args, global).await,
        Command::Equipment(args) => equipment::handle(ctx, args, global).await,
        Command::Users(args) => users::handle(ctx, args, global).await,
        Command::Ip(args) => ip::handle(ctx, args, global).await,
        // Config and Completions are handled before dispatch
        Command::Config(_) | Command::Completions(_) => unreachable!(),
    }
}

// ── Shared helpers ───────────────────────────────────────────────────

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<(), CliError> {
    if yes_flag {
        return Ok(());
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    if confirmed { Ok(()) } else { Err(CliError::Aborted) }
}

/// Load a list per the shared `ListArgs` and leave the controller
/// positioned on the requested page.
pub async fn load_list<S: ListSource>(
    ctl: &mut ListController<S>,
    args: &ListArgs,
) -> Result<(), CliError> {
    if let Some(size) = args.page_size {
        ctl.set_page_size(size).await?;
    }
    match &args.search {
        Some(text) => {
            let mode = match &args.field {
                Some(field) => campus_core::SearchMode::Field(field.clone()),
                None => campus_core::SearchMode::All,
            };
            ctl.search(text.clone(), mode).await?;
        }
        None => ctl.refresh().await?,
    }
    if let Some(text) = &args.live_filter {
        if ctl.is_server_mode() {
            return Err(CliError::Validation {
                field: "live-filter".into(),
                reason: "this endpoint is server-paginated; use --search".into(),
            });
        }
        ctl.live_filter(text.clone());
    }
    if args.page > 1 {
        ctl.go_to_page(args.page).await?;
    }
    Ok(())
}

/// Run one bulk action against explicit ids: load, select, confirm,
/// fan out, and report per-item failures.
pub async fn run_bulk<S: ListSource>(
    ctl: &mut ListController<S>,
    raw_ids: &[String],
    action: BulkAction,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    ctl.refresh().await?;

    let ids: Vec<ItemId> = raw_ids.iter().map(|raw| ItemId::from(raw.clone())).collect();
    ctl.select_exact(&ids);
    if let Some(missing) = ids.iter().find(|id| !ctl.is_selected(id)) {
        return Err(CliError::UnknownId {
            id: missing.to_string(),
        });
    }

    confirm(
        &format!("{} {} item(s)?", action.describe(), ctl.selection_len()),
        global.yes,
    )?;

    let spinner = progress_spinner(&action.describe(), global.quiet);
    let report = ctl.bulk(action).await?;
    spinner.finish_and_clear();

    for (id, err) in report.failures() {
        eprintln!("  {id}: {err}");
    }
    if report.failed() > 0 {
        return Err(CliError::BulkFailed {
            failed: report.failed(),
            total: report.outcomes.len(),
        });
    }
    Ok(())
}

fn progress_spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_owned());
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));
    spinner
}

/// Footer line for paginated table output.
pub fn page_footer<S: ListSource>(ctl: &ListController<S>) -> String {
    format!(
        "page {}/{} ({} total)",
        ctl.pager().current_page(),
        ctl.pager().total_pages(),
        ctl.pager().total_count()
    )
}
