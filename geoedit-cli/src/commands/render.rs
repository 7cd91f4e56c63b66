//! `geoedit render` - print the WFS-T Update for a feature edit.
//!
//! Nothing is sent; this is the offline half of `geoedit update`.

use clap::Args;
use geoedit::catalog::LayerCatalog;
use geoedit::feature::Feature;
use geoedit::geometry::FeatureGeometry;
use geoedit::transaction::build_update;
use uuid::Uuid;

use super::common::parse_properties;
use crate::error::CliError;

/// Arguments for the render command.
#[derive(Debug, Args)]
pub struct RenderArgs {
    /// GeoServer workspace
    #[arg(long)]
    pub workspace: String,

    /// Layer name inside the workspace
    #[arg(long)]
    pub layer: String,

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

/// Run the render command.
pub fn run(args: RenderArgs) -> Result<(), CliError> {
    println!("{}", render(&args)?);
    Ok(())
}

fn render(args: &RenderArgs) -> Result<String, CliError> {
    let geometry =
        FeatureGeometry::from_json_str(&args.geometry).map_err(|e| CliError::Argument {
            flag: "geometry",
            message: e.to_string(),
        })?;
    let feature = Feature::new(&args.feature_id, geometry)
        .with_properties(parse_properties(args.properties.as_deref())?);
    let layer = LayerCatalog::new(Uuid::nil(), &args.layer, &args.workspace, &args.layer);

    Ok(build_update(&layer, &feature)?)
}
