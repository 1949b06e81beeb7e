//! User account command handlers.

use tabled::Tabled;

use campus_api::Account;
use campus_core::{AccountSource, BulkAction, ListController};

use crate::cli::{GlobalOpts, OutputFormat, UsersArgs, UsersCommand};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::{load_list, page_footer, run_bulk};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Username")]
    username: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Initial PW")]
    initial_password: String,
}

impl From<&Account> for AccountRow {
    fn from(a: &Account) -> Self {
        Self {
            id: a.id.to_string(),
            username: a.username.clone(),
            name: a.display_name.clone().unwrap_or_else(|| "-".into()),
            email: a.email.clone().unwrap_or_else(|| "-".into()),
            role: a.role.to_string(),
            active: if a.is_active { "yes" } else { "no" }.into(),
            initial_password: if a.is_initial_password { "yes" } else { "-" }.into(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &AppContext, args: UsersArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let source = AccountSource::new(ctx.client.clone());
    let mut ctl = ListController::new(source, ctx.toasts.clone(), ctx.page_size);

    match args.command {
        UsersCommand::List(list) => {
            load_list(&mut ctl, &list).await?;
            let out = output::render_list(
                &global.output,
                ctl.visible(),
                |a| AccountRow::from(a),
                |a| a.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            if matches!(global.output, OutputFormat::Table) {
                output::print_output(&page_footer(&ctl), global.quiet);
            }
            Ok(())
        }
        UsersCommand::Delete { ids } => run_bulk(&mut ctl, &ids, BulkAction::Delete, global).await,
        UsersCommand::Activate { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::SetActive(true), global).await
        }
        UsersCommand::Deactivate { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::SetActive(false), global).await
        }
    }
}
