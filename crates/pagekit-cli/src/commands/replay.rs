use anyhow::{Context, Result};
use colored::Colorize;
use pagekit_forms::SimulatedTransport;
use pagekit_page::PageRuntime;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::script::{Script, ScriptStep};

pub fn execute(script_path: &Path, config_path: Option<&Path>, fail_transport: Option<String>) -> Result<()> {
    let script = Script::load(script_path)?;
    let mut config = super::load_config(config_path)?;
    if fail_transport.is_some() {
        config.forms.transport.fail_with = fail_transport;
    }

    eprintln!(
        "{} {} ({} step(s))",
        "Replaying".green().bold(),
        script_path.display(),
        script.steps.len()
    );

    // The page state is single-threaded; everything runs on this thread
    let dom = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async move {
            let transport = Arc::new(SimulatedTransport::from_config(&config.forms.transport));
            let mut page = PageRuntime::new(config, script.layout, transport);

            for (index, step) in script.steps.into_iter().enumerate() {
                if let Some(wait) = step.wait() {
                    page.run_for(wait).await?;
                } else if let ScriptStep::Event(event) = step {
                    info!("Step {}: {:?}", index + 1, event);
                    page.dispatch(event);
                }
            }

            page.settle().await?;
            anyhow::Ok(page.snapshot())
        })?;

    let json = serde_json::to_string_pretty(&dom).context("Failed to serialize page state")?;
    println!("{}", json);

    Ok(())
}
