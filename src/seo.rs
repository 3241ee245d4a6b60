//! Per-route SEO config, the meta-tag rewrite applied to prerendered pages, and
//! the sitemap for indexable routes.

use crate::date::DateValue;
use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Site-wide defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSeo {
    pub site_url: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub og_image: String,
    pub locale: String,
}

/// Per-route overrides. `priority` / `changefreq` feed the sitemap and are carried as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changefreq: Option<String>,
}

/// Shape of `seo-config.json` emitted next to the built site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoConfig {
    #[serde(rename = "SEO_CONFIG")]
    pub site: SiteSeo,
    #[serde(rename = "PAGE_SEO", default)]
    pub pages: BTreeMap<String, PageSeo>,
    #[serde(rename = "SSG_ROUTES", default)]
    pub routes: Vec<String>,
    /// Routes listed in `sitemap.xml`; routes without a page entry are skipped.
    #[serde(rename = "INDEXABLE_ROUTES", default = "home_only")]
    pub indexable_routes: Vec<String>,
}

fn home_only() -> Vec<String> {
    vec!["/".to_string()]
}

impl Default for SeoConfig {
    fn default() -> Self {
        let mut pages = BTreeMap::new();
        pages.insert(
            "/".to_string(),
            PageSeo {
                title: "Home".into(),
                description: "Report EUM 홈".into(),
                keywords: None,
                priority: Some("1.0".into()),
                changefreq: Some("weekly".into()),
            },
        );
        Self {
            site: SiteSeo {
                site_url: "https://report.eum.com".into(),
                title: "Report EUM".into(),
                description: "Report EUM - E-um 리포트 서비스".into(),
                keywords: None,
                og_image: "https://report.eum.com/og.png".into(),
                locale: "ko_KR".into(),
            },
            pages,
            routes: home_only(),
            indexable_routes: home_only(),
        }
    }
}

impl SeoConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parse seo config")
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("load {}", path.display()))
    }

    /// Canonical URL of `route` on this site.
    pub fn page_url(&self, route: &str) -> String {
        let base = self.site.site_url.trim_end_matches('/');
        if route == "/" { format!("{base}/") } else { format!("{base}{route}") }
    }
}

/// Read `<dist>/seo-config.json`, falling back to the built-in defaults when the
/// file is missing or malformed.
pub fn load_seo_config(dist_dir: &Path) -> SeoConfig {
    let path = dist_dir.join("seo-config.json");
    match SeoConfig::from_path(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::warn!("using default SEO config: {:#}", e);
            SeoConfig::default()
        }
    }
}

struct PageMeta {
    title: String,
    description: String,
    url: String,
}

struct MetaRule {
    re: Regex,
    render: fn(&PageMeta) -> String,
}

fn rule(pat: &str, render: fn(&PageMeta) -> String) -> MetaRule {
    MetaRule { re: Regex::new(pat).unwrap(), render }
}

fn meta_rules() -> &'static [MetaRule] {
    static RULES: OnceLock<Vec<MetaRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        vec![
            rule(r"<title>[^<]*</title>", |m| format!("<title>{}</title>", m.title)),
            rule(r#"<meta name="description" content="[^"]*""#, |m| {
                format!(r#"<meta name="description" content="{}""#, m.description)
            }),
            rule(r#"<link rel="canonical" href="[^"]*""#, |m| format!(r#"<link rel="canonical" href="{}""#, m.url)),
            rule(r#"<meta name="robots" content="[^"]*"\s*(?:/?>)"#, |_| {
                r#"<meta name="robots" content="index, follow" />"#.to_string()
            }),
            rule(r#"<meta property="og:title" content="[^"]*""#, |m| {
                format!(r#"<meta property="og:title" content="{}""#, m.title)
            }),
            rule(r#"<meta property="og:description" content="[^"]*""#, |m| {
                format!(r#"<meta property="og:description" content="{}""#, m.description)
            }),
            rule(r#"<meta property="og:url" content="[^"]*""#, |m| format!(r#"<meta property="og:url" content="{}""#, m.url)),
            rule(r#"<meta name="twitter:title" content="[^"]*""#, |m| {
                format!(r#"<meta name="twitter:title" content="{}""#, m.title)
            }),
            rule(r#"<meta name="twitter:description" content="[^"]*""#, |m| {
                format!(r#"<meta name="twitter:description" content="{}""#, m.description)
            }),
        ]
    })
}

/// Rewrite title, description, canonical, robots, Open Graph and Twitter tags for
/// `route`. Routes without a page entry come back unchanged.
pub fn update_page_meta(html: &str, route: &str, cfg: &SeoConfig) -> String {
    let Some(page) = cfg.pages.get(route) else {
        return html.to_string();
    };
    let meta = PageMeta {
        title: escape_markup(&format!("{} | {}", page.title, cfg.site.title)),
        description: escape_markup(&page.description),
        url: escape_markup(&cfg.page_url(route)),
    };
    let mut out = html.to_string();
    for r in meta_rules() {
        let replacement = (r.render)(&meta);
        out = r.re.replace(&out, NoExpand(&replacement)).into_owned();
    }
    out
}

/// `/` lands on `dist/index.html`, anything else on `dist/<route>/index.html`.
pub fn output_path_for(dist_dir: &Path, route: &str) -> PathBuf {
    let rel = route.trim_matches('/');
    if rel.is_empty() {
        dist_dir.join("index.html")
    } else {
        dist_dir.join(rel).join("index.html")
    }
}

/// Escape text for an HTML/XML attribute value or element body.
fn escape_markup(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// `sitemap.xml` for every indexable route that has a page entry, stamped with `today`.
pub fn render_sitemap(cfg: &SeoConfig, today: DateValue) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    out.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for route in &cfg.indexable_routes {
        let Some(page) = cfg.pages.get(route) else {
            tracing::debug!("sitemap: skipping {} (no page entry)", route);
            continue;
        };
        out.push_str("  <url>\n");
        out.push_str(&format!("    <loc>{}</loc>\n", escape_markup(&cfg.page_url(route))));
        out.push_str(&format!("    <lastmod>{today}</lastmod>\n"));
        if let Some(freq) = &page.changefreq {
            out.push_str(&format!("    <changefreq>{}</changefreq>\n", escape_markup(freq)));
        }
        if let Some(priority) = &page.priority {
            out.push_str(&format!("    <priority>{}</priority>\n", escape_markup(priority)));
        }
        out.push_str("  </url>\n");
    }
    out.push_str("</urlset>\n");
    out
}

/// Write `<dist>/sitemap.xml`.
pub fn write_sitemap(dist_dir: &Path, cfg: &SeoConfig, today: DateValue) -> Result<PathBuf> {
    let path = dist_dir.join("sitemap.xml");
    fs::write(&path, render_sitemap(cfg, today)).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
