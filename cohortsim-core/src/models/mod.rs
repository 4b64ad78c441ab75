mod daily_revenue;
mod retention_point;
mod sale_window;
mod variant;

pub use daily_revenue::DailyRevenue;
pub use retention_point::RetentionPoint;
pub use sale_window::SaleWindow;
pub use variant::VariantConfig;

/// Installs per calendar day; index `i` is calendar day `i + 1`.
///
/// Signed so that negative counts propagate instead of being rejected.
pub type InstallSeries = Vec<i64>;

/// Expected active users per calendar day, same indexing as [`InstallSeries`].
pub type DauSeries = Vec<f64>;

/// Total daily revenue (IAP + ads), same indexing as [`InstallSeries`].
pub type RevenueSeries = Vec<f64>;
