mod config;
mod date;
mod parse;
mod text_input;
mod matcher;
mod calendar;
mod picker;
mod range;

mod seo;
mod prerender;
mod progress;
mod oidc;
mod util;

pub use crate::config::{ConflictPolicy, PickerOptions, RangeConfig};
pub use crate::date::{days_in_month, is_leap_year, DateValue, YearMonth};
pub use crate::range::{resolve_from, resolve_to, DateRange, Endpoint, RangeCoordinator};

// Parser / clamper helpers are pure and usable on their own.
pub use crate::parse::{clamp_digits, parse_triplet, sanitize_digits};
pub use crate::text_input::{DateTextInput, Field, FieldState, TextTriplet};

pub use crate::picker::{Commit, PickerEvent, PickerRole, PickerState, SelectOption, SingleDateInput, SinglePicker};
pub use crate::matcher::{DayMatcher, DisabledDays};
pub use crate::calendar::{build_grid, month_weeks, DayCell, RangeHighlight, RangeModifiers};

// Static-site tooling
pub use crate::seo::{
    load_seo_config, output_path_for, render_sitemap, update_page_meta, write_sitemap, PageSeo, SeoConfig, SiteSeo,
};
pub use crate::prerender::{has_root_node, prerender_routes, PageRenderer, PrerenderOptions, SnapshotRenderer};
pub use crate::progress::{make_count_progress, ProgressScope};
pub use crate::oidc::{OidcSettings, ProviderMetadata};

pub use crate::util::init_tracing_once;
