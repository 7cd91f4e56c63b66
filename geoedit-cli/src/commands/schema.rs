//! `geoedit schema` - print a layer's editable schema as JSON.

use clap::Args;
use geoedit::config::ConfigFile;
use geoedit::drawing::DrawingService;
use geoedit::server::CartographicServer;
use tracing::info;
use uuid::Uuid;

use super::common::{geoserver, print_json};
use crate::error::CliError;

/// Arguments for the schema command.
#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// GeoServer workspace (with --layer)
    #[arg(long, requires = "layer", conflicts_with = "layer_id")]
    pub workspace: Option<String>,

    /// Layer name inside the workspace (with --workspace)
    #[arg(long, requires = "workspace")]
    pub layer: Option<String>,

    /// Catalogued layer id from config.ini
    #[arg(long, required_unless_present = "workspace")]
    pub layer_id: Option<Uuid>,
}

/// Run the schema command.
pub fn run(args: SchemaArgs, config: &ConfigFile) -> Result<(), CliError> {
    let server = geoserver(config)?;

    let schema = match (args.layer_id, args.workspace, args.layer) {
        (Some(layer_id), _, _) => {
            let service = DrawingService::new(config.layer_repository(), server);
            service.layer_schema(layer_id)?
        }
        (None, Some(workspace), Some(layer)) => server.layer_schema(&workspace, &layer)?,
        _ => {
            return Err(CliError::Argument {
                flag: "layer-id",
                message: "give either --layer-id or --workspace with --layer".to_string(),
            })
        }
    };

    info!(
        geometry_type = %schema.geometry_type,
        attributes = schema.attributes.len(),
        "Layer schema loaded"
    );
    print_json(&schema)
}
