//! Equipment command handlers.

use tabled::Tabled;

use campus_api::{Equipment, EquipmentStatus};
use campus_core::{BulkAction, EquipmentSource, ListController, format};

use crate::cli::{EquipmentArgs, EquipmentCommand, GlobalOpts, OutputFormat, StatusArg};
use crate::context::AppContext;
use crate::error::CliError;
use crate::output;

use super::{load_list, page_footer, run_bulk};

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct EquipmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Serial")]
    serial: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Renter")]
    renter: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

impl From<&Equipment> for EquipmentRow {
    fn from(e: &Equipment) -> Self {
        Self {
            id: e.id.to_string(),
            name: e.name.clone(),
            serial: e.serial_no.clone(),
            category: e.category.clone().unwrap_or_else(|| "-".into()),
            status: e.status.to_string(),
            renter: e.renter.clone().unwrap_or_else(|| "-".into()),
            updated: format::display_timestamp(e.updated_at.as_deref()),
        }
    }
}

impl From<StatusArg> for EquipmentStatus {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Available => Self::Available,
            StatusArg::Rented => Self::Rented,
            StatusArg::Maintenance => Self::Maintenance,
            StatusArg::Retired => Self::Retired,
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    ctx: &AppContext,
    args: EquipmentArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let source = EquipmentSource::new(ctx.client.clone());
    let mut ctl = ListController::new(source, ctx.toasts.clone(), ctx.page_size);

    match args.command {
        EquipmentCommand::List(list) => {
            load_list(&mut ctl, &list).await?;
            let out = output::render_list(
                &global.output,
                ctl.visible(),
                |e| EquipmentRow::from(e),
                |e| e.id.to_string(),
            );
            output::print_output(&out, global.quiet);
            if matches!(global.output, OutputFormat::Table) {
                output::print_output(&page_footer(&ctl), global.quiet);
            }
            Ok(())
        }
        EquipmentCommand::Delete { ids } => {
            run_bulk(&mut ctl, &ids, BulkAction::Delete, global).await
        }
        EquipmentCommand::SetStatus { status, user, ids } => {
            let action = BulkAction::SetStatus {
                status: status.into(),
                renter: user,
            };
            run_bulk(&mut ctl, &ids, action, global).await
        }
    }
}
