use anyhow::{Context, Result};
use rangepick::{init_tracing_once, prerender_routes, PrerenderOptions, SnapshotRenderer};
use std::path::PathBuf;

const DIST_ROOT: &str = "./dist";

fn main() -> Result<()> {
    init_tracing_once();
    let dist_dir = std::env::args().nth(1).map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DIST_ROOT));

    // Without a browser attached every route starts from the built SPA shell.
    let mut renderer = SnapshotRenderer::from_file(&dist_dir.join("index.html"))
        .context("Prerender failed")?;

    let opts = PrerenderOptions::default()
        .with_dist_dir(&dist_dir)
        .with_progress(true);

    let written = prerender_routes(&mut renderer, &opts).context("Prerender failed")?;
    println!("Prerendered {} routes", written.len());

    Ok(())
}
