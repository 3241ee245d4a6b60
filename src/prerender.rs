//! Build-time prerender: snapshot each configured route to static HTML with
//! route-specific SEO tags. The browser itself sits behind [`PageRenderer`].

use crate::progress::ProgressScope;
use crate::date::DateValue;
use crate::seo::{load_seo_config, output_path_for, update_page_meta, write_sitemap};
use crate::util::{init_tracing_once, trim_base_url};
use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread::sleep;
use std::time::Duration;

/// Something that can load a URL and hand back the rendered document.
pub trait PageRenderer {
    fn render(&mut self, url: &str) -> Result<String>;
}

/// Serves one already-built HTML shell for every URL.
#[derive(Clone, Debug)]
pub struct SnapshotRenderer {
    html: String,
}

impl SnapshotRenderer {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
    pub fn from_file(path: &Path) -> Result<Self> {
        let html = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Ok(Self { html })
    }
}

impl PageRenderer for SnapshotRenderer {
    fn render(&mut self, url: &str) -> Result<String> {
        tracing::debug!("snapshot for {}", url);
        Ok(self.html.clone())
    }
}

/// Batch options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct PrerenderOptions {
    pub dist_dir: PathBuf,
    pub server_url: String,      // no trailing slash
    pub root_id: String,         // element id that must be present before snapshotting
    pub settle_delay: Duration,  // wait after the root node shows up
    pub progress: bool,
}

impl Default for PrerenderOptions {
    fn default() -> Self {
        Self {
            dist_dir: PathBuf::from("./dist"),
            server_url: "http://localhost:4173".to_string(),
            root_id: "root".to_string(),
            settle_delay: Duration::from_millis(500),
            progress: true,
        }
    }
}

impl PrerenderOptions {
    pub fn with_dist_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.dist_dir = dir.as_ref().to_path_buf();
        self
    }
    pub fn with_server_url(mut self, url: impl AsRef<str>) -> Self {
        self.server_url = trim_base_url(url.as_ref());
        self
    }
    pub fn with_root_id(mut self, id: impl Into<String>) -> Self {
        self.root_id = id.into();
        self
    }
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
}

/// True if `html` contains an element with `id="<id>"` (either quote style).
pub fn has_root_node(html: &str, id: &str) -> bool {
    let pat = format!(r#"\sid\s*=\s*["']{}["']"#, regex::escape(id));
    Regex::new(&pat).map(|re| re.is_match(html)).unwrap_or(false)
}

/// Prerender every `SSG_ROUTES` entry of `<dist>/seo-config.json`.
///
/// - Copies `index.html` to `app.html` first so the untouched SPA shell survives.
/// - Each route is rendered, checked for the root node, given its SEO tags and
///   written to its output path.
/// - The first failure aborts the batch. Otherwise `sitemap.xml` is written last
///   and the prerendered page paths are returned.
pub fn prerender_routes<R>(renderer: &mut R, opts: &PrerenderOptions) -> Result<Vec<PathBuf>>
where
    R: PageRenderer + ?Sized,
{
    init_tracing_once();
    let dist = &opts.dist_dir;
    let index = dist.join("index.html");
    let app = dist.join("app.html");
    fs::copy(&index, &app).with_context(|| format!("copy {} -> {}", index.display(), app.display()))?;

    let cfg = load_seo_config(dist);
    if cfg.routes.is_empty() {
        tracing::warn!("No SSG routes configured; nothing to prerender.");
    } else {
        tracing::info!("Prerendering {} routes from {}", cfg.routes.len(), opts.server_url);
    }

    let progress = ProgressScope::count(opts.progress, "Prerender", cfg.routes.len() as u64);
    let mut written = Vec::with_capacity(cfg.routes.len());
    for route in &cfg.routes {
        progress.set_message(route.clone());
        let res = render_route(renderer, opts, route).and_then(|html| {
            let html = update_page_meta(&html, route, &cfg);
            write_route(dist, route, &html)
        });
        match res {
            Ok(path) => {
                tracing::info!("{} -> {}", route, path.display());
                written.push(path);
                progress.inc(1);
            }
            Err(e) => {
                progress.abandon();
                return Err(e).with_context(|| format!("prerender {route}"));
            }
        }
    }
    progress.finish("done");

    let sitemap = write_sitemap(dist, &cfg, DateValue::today())?;
    tracing::info!("sitemap -> {}", sitemap.display());
    Ok(written)
}

fn render_route<R>(renderer: &mut R, opts: &PrerenderOptions, route: &str) -> Result<String>
where
    R: PageRenderer + ?Sized,
{
    let url = format!("{}{}", opts.server_url, route);
    let html = renderer.render(&url).with_context(|| format!("render {url}"))?;
    if !has_root_node(&html, &opts.root_id) {
        bail!("#{} not found in {}", opts.root_id, url);
    }
    if !opts.settle_delay.is_zero() {
        sleep(opts.settle_delay);
    }
    Ok(html)
}

fn write_route(dist: &Path, route: &str, html: &str) -> Result<PathBuf> {
    let out = output_path_for(dist, route);
    if let Some(parent) = out.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    fs::write(&out, html).with_context(|| format!("write {}", out.display()))?;
    Ok(out)
}
