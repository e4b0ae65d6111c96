use anyhow::Context;
use parkdemand_core::{apply_event, render_sidebar, AppConfig};
use parkdemand_phq::{PhqClient, RadiusCache};

use crate::{display, session, SidebarArgs};

/// One render cycle: load session, apply selections, render, persist.
///
/// The cache starts from the lookup stored in the session, so rendering the
/// same location again does not reach the vendor. A failed radius lookup
/// aborts the cycle before the session is written.
pub(crate) async fn run(config: &AppConfig, args: &SidebarArgs) -> anyhow::Result<()> {
    let path = args.state.as_ref().unwrap_or(&config.session_path);
    let state = session::load(path)?;
    let state = args.events().into_iter().fold(state, apply_event);

    let cache = PhqClient::from_config(config)?
        .map(|client| RadiusCache::new(client, config.radius_cache_capacity));
    match (&cache, &state.suggested_for, &state.suggested_radius) {
        (Some(cache), Some(query), Some(radius)) => {
            cache.seed(query.clone(), radius.clone()).await;
        }
        (None, ..) => {
            tracing::warn!("PHQ_ACCESS_TOKEN is not set; sidebar controls are disabled");
        }
        _ => {}
    }

    let render = render_sidebar(&state, chrono::Utc::now(), cache.as_ref())
        .await
        .context("suggested radius lookup failed")?;

    session::save(path, &render.state)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&render.view)?);
    } else {
        print!("{}", display::sidebar(&render.view));
    }
    Ok(())
}

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;
