//! HTTP front end for the diabetes risk predictor.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use medi_diabetes::FEATURE_NAMES;
use medi_risk_model::{ModelBundle, ModelError, RiskModel};

pub use config::ServerConfig;
pub use routes::{router, AppState};

/// Load both artifacts and check they were trained on our column order.
pub fn load_model(config: &ServerConfig) -> Result<Arc<dyn RiskModel>, ModelError> {
    let bundle = ModelBundle::load(&config.classifier_path, &config.scaler_path)?;
    bundle.expect_feature_names(&FEATURE_NAMES)?;
    Ok(Arc::new(bundle))
}
