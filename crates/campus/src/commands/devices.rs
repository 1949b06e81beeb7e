//! Device command handlers.

use tabled::Tabled;

use campus_api::Device;
use campus_core::{BulkAction, DeviceSource, ListController, format};

use crate::cli::{DevicesArgs, DevicesCommand, GlobalOpts, OutputFormat};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::{load_list, page_footer, run_bulk};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct DeviceRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "MAC")]
    mac: String,
    #[tabled(rename = "IP")]
    ip: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Owner")]
    owner: String,
    #[tabled(rename = "Active")]
    active: String,
    #[tabled(rename = "Created")]
    created: String,
}

impl From<&Device> for DeviceRow {
    fn from(d: &Device) -> Self {
        Self {
            id: d.id.to_string(),
            name: d.name.clone(),
            mac: d.mac.clone(),
            ip: d.ip.clone().unwrap_or_else(|| "-".into()),
            location: d.location.clone().unwrap_or_else(|| "-".into()),
            owner: d.owner.clone().unwrap_or_else(|| "-".into()),
            active: if d.is_active { "yes" } else { "no" }.into(),
            created: format::display_timestamp(d.created_at.as_deref()),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    ctx: &AppContext,
    args: DevicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let source = DeviceSource::new(ctx.client.clone());
    let mut ctl = ListController::new(source, ctx.toasts.clone(), ctx.page_size);

    match args.command {
        DevicesCommand::List(list) => {
            load_list(&mut ctl, &list).await?;
            let out = output::render_list(
                &global.output,
                ctl.visible(),
                |d| DeviceRow::from(d),
                |d| d.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            if matches!(global.output, OutputFormat::Table) {
                output::print_output(&page_footer(&ctl), global.quiet);
            }
            Ok(())
        }
        DevicesCommand::Delete { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::Delete, global).await
        }
        DevicesCommand::Activate { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::SetActive(true), global).await
        }
        DevicesCommand::Deactivate { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::SetActive(false), global).await
        }
    }
}
