//! Template management commands

use gounit::output::{OperationResult, OutputMode, TemplateInfo, TemplateListResult};
use gounit::storage::TemplateStore;

use crate::cli::TemplateAction;

/// Run a `template` subcommand
pub fn template_cmd(action: TemplateAction, mode: OutputMode) -> anyhow::Result<()> {
    let store = TemplateStore::open();

    match action {
        TemplateAction::Add { file } => {
            let name = store.add(&file)?;
            OperationResult::ok(format!("Installed template {name}")).render(mode);
        }
        TemplateAction::List => {
            let templates = store.list()?.into_iter().map(TemplateInfo::from).collect();
            TemplateListResult { templates }.render(mode);
        }
        TemplateAction::Use { name } => {
            store.set_default(&name)?;
            OperationResult::ok(format!("Default template is now {name}")).render(mode);
        }
        TemplateAction::Remove { name } => {
            store.remove(&name)?;
            OperationResult::ok(format!("Removed template {name}")).render(mode);
        }
    }

    Ok(())
}
