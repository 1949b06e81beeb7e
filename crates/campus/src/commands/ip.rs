//! IP assignment command handlers.

use tabled::Tabled;

use campus_api::IpAssignment;
use campus_core::{BulkAction, IpSource, ListController, format};

use crate::cli::{GlobalOpts, IpArgs, IpCommand, OutputFormat};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::{load_list, page_footer, run_bulk};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct IpRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "Hostname")]
    hostname: String,
    #[tabled(rename = "Assigned To")]
    assigned_to: String,
    #[tabled(rename = "Blacklisted")]
    blacklisted: String,
    #[tabled(rename = "Lease")]
    lease: String,
}

impl From<&IpAssignment> for IpRow {
    fn from(a: &IpAssignment) -> Self {
        let lease = a
            .lease_expires_at
            .as_deref()
            .and_then(format::parse_timestamp)
            .map_or_else(
                || "-".to_owned(),
                |expires| format::lease_countdown(&expires, &chrono::Utc::now()),
            );
        Self {
            id: a.id.to_string(),
            ip: a.ip.clone(),
            mac: a.mac.clone(),
            hostname: a.hostname.clone().unwrap_or_else(|| "-".into()),
            assigned_to: a.assigned_to.clone().unwrap_or_else(|| "-".into()),
            blacklisted: if a.blacklisted { "yes" } else { "-" }.into(),
            lease,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(ctx: &AppContext, args: IpArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let source = IpSource::new(ctx.client.clone());
    let mut ctl = ListController::new(source, ctx.toasts.clone(), ctx.page_size);

    match args.command {
        IpCommand::List(list) => {
            load_list(&mut ctl, &list).await?;
            let out = output::render_list(
                &global.output,
                ctl.visible(),
                |a| IpRow::from(a),
                |a| a.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            if matches!(global.output, OutputFormat::Table) {
                output::print_output(&page_footer(&ctl), global.quiet);
            }
            Ok(())
        }
        IpCommand::Release { ids } => run_bulk(&mut ctl, &ids, BulkAction::Delete, global).await,
        IpCommand::Blacklist { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::SetBlacklisted(true), global).await
        }
        IpCommand::Unblacklist { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::SetBlacklisted(false), global).await
        }
    }
}
