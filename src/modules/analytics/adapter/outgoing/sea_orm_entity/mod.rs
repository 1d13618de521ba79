pub mod analytics_snapshots;
