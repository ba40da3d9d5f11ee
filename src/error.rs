use crate::api::error::ApiError;
use crate::export::ExportError;
use crate::forms::error::FormError;
use crate::weather::error::WeatherArchiveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CostaBellaError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Export(#[from] ExportError),

    #[error(transparent)]
    WeatherArchive(#[from] WeatherArchiveError),
}
