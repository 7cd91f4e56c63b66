//! `geoedit update` - push a feature edit to GeoServer.

use clap::Args;
use geoedit::config::ConfigFile;
use geoedit::drawing::{DrawingService, FeatureUpdateRequest};
use uuid::Uuid;

use super::common::{geometry_value, geoserver, parse_properties, print_json};
use crate::error::CliError;

/// Arguments for the update command.
#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Catalogued layer id from config.ini
    #[arg(long)]
    pub layer_id: Uuid,

    /// Server feature id (e.g. parcels.12)
    #[arg(long)]
    pub feature_id: String,

    /// Geometry as JSON, e.g. '{"type":"Point","coordinates":[1,2]}'
    #[arg(long)]
    pub geometry: String,

    /// Attribute values as a JSON object
    #[arg(long)]
    pub properties: Option<String>,
}

/// Run the update command.
///
/// The result is always printed; a failed update also exits non-zero.
pub fn run(args: UpdateArgs, config: &ConfigFile) -> Result<(), CliError> {
    let request = FeatureUpdateRequest {
        geometry: geometry_value(&args.geometry),
        properties: parse_properties(args.properties.as_deref())?,
    };

    let service = DrawingService::new(config.layer_repository(), geoserver(config)?);
    let result = service.update_feature(args.layer_id, &args.feature_id, request);
    print_json(&result)?;

    if result.success {
        Ok(())
    } else {
        Err(CliError::UpdateFailed(result.message))
    }
}
