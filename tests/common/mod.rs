#![allow(dead_code)]

use rangepick::DateValue;
use std::cell::RefCell;
use std::fs;
use std::path::Path;
use std::rc::Rc;

/// Shorthand for a known-valid date.
pub fn d(year: i32, month: u8, day: u8) -> DateValue {
    DateValue::new(year, month, day).unwrap()
}

/// A change callback that records every value it is given, plus a handle to read them back.
pub fn recorder<T: 'static>() -> (Rc<RefCell<Vec<T>>>, impl FnMut(T)) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    (log, move |v: T| sink.borrow_mut().push(v))
}

/// Minimal built SPA shell with every tag the SEO rewrite touches.
pub const SHELL_HTML: &str = r#"<!doctype html>
<html lang="ko">
  <head>
    <title>Report EUM</title>
    <meta name="description" content="default description" />
    <link rel="canonical" href="https://report.eum.com/" />
    <meta name="robots" content="noindex, nofollow" />
    <meta property="og:title" content="Report EUM" />
    <meta property="og:description" content="default description" />
    <meta property="og:url" content="https://report.eum.com/" />
    <meta name="twitter:title" content="Report EUM" />
    <meta name="twitter:description" content="default description" />
  </head>
  <body>
    <div id="root"><main>app</main></div>
  </body>
</html>
"#;

/// SEO config with two prerendered routes, one of them nested.
pub const SEO_JSON: &str = r#"{
  "SEO_CONFIG": {
    "siteUrl": "https://report.eum.com",
    "title": "Report EUM",
    "description": "Report EUM - E-um 리포트 서비스",
    "ogImage": "https://report.eum.com/og.png",
    "locale": "ko_KR"
  },
  "PAGE_SEO": {
    "/": { "title": "Home", "description": "Report EUM 홈", "priority": "1.0", "changefreq": "weekly" },
    "/design-system": { "title": "Design System", "description": "E-um 디자인 시스템 가이드" }
  },
  "SSG_ROUTES": ["/", "/design-system"]
}"#;

/// Lay out a fake `dist/` with `index.html` and (optionally) `seo-config.json`.
pub fn write_dist(dir: &Path, seo_json: Option<&str>) {
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("index.html"), SHELL_HTML).unwrap();
    if let Some(json) = seo_json {
        fs::write(dir.join("seo-config.json"), json).unwrap();
    }
}
