use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Unknown summary metric '{0}' (expected orders, sales or margin)")]
    UnknownMetric(String),
}
