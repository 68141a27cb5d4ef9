pub mod formatting;
pub mod pr_plan_sync;
pub mod status_filter;
