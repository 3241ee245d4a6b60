//! Progress reporting for batch steps (one tick per prerendered route).

use indicatif::{ProgressBar, ProgressStyle};

/// Bar counting prerendered routes; `label` is shown until the first route name replaces it.
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template("{spinner:.green} [{bar:32.cyan/blue}] {pos}/{len} routes  {msg}  ({elapsed})")
        .unwrap()
        .progress_chars("=> ");
    pb.set_style(style);
    pb.set_message(label.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(120));
    pb
}

/// Optional bar: a disabled scope turns every call into a no-op.
pub struct ProgressScope {
    pb: Option<ProgressBar>,
}

impl ProgressScope {
    pub fn count(enabled: bool, label: &str, total: u64) -> Self {
        Self { pb: enabled.then(|| make_count_progress(total, label)) }
    }
    #[inline]
    pub fn set_message(&self, msg: impl Into<String>) {
        if let Some(pb) = &self.pb { pb.set_message(msg.into()); }
    }
    #[inline]
    pub fn inc(&self, delta: u64) {
        if let Some(pb) = &self.pb { pb.inc(delta); }
    }
    pub fn finish(&self, msg: impl Into<String>) {
        if let Some(pb) = &self.pb { pb.finish_with_message(msg.into()); }
    }
    pub fn abandon(&self) {
        if let Some(pb) = &self.pb { pb.abandon(); }
    }
}
