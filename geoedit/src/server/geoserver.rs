//! GeoServer WFS-T adapter

use tracing::{debug, error, info};

use super::http::{BasicCredentials, HttpClient};
use super::types::{CartographicServer, ServerError, UpdateOutcome};
use crate::catalog::LayerCatalog;
use crate::feature::Feature;
use crate::schema::{parse_describe_feature_type, LayerSchema};
use crate::transaction::{build_update, interpret, UpdateVerdict};

/// Cartographic protocol adapter for GeoServer.
///
/// Reads layer schemas with `DescribeFeatureType` and pushes edits as
/// WFS-T 1.1.0 Update transactions, authenticating with HTTP Basic.
pub struct GeoServerAdapter<C: HttpClient> {
    http_client: C,
    base_url: String,
    credentials: BasicCredentials,
}

impl<C: HttpClient> GeoServerAdapter<C> {
    /// Creates an adapter for the GeoServer rooted at `base_url`
    /// (e.g. `http://localhost:8080/geoserver`).
    pub fn new(http_client: C, base_url: impl Into<String>, credentials: BasicCredentials) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client,
            base_url,
            credentials,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http_client(&self) -> &C {
        &self.http_client
    }

    /// URL of the DescribeFeatureType request for `workspace:layer_name`.
    pub fn describe_feature_type_url(&self, workspace: &str, layer_name: &str) -> String {
        format!(
            "{}/{}/ows?service=WFS&version=1.1.0&request=DescribeFeatureType&typeName={}:{}",
            self.base_url, workspace, workspace, layer_name
        )
    }

    /// URL transactions are posted to.
    pub fn transaction_url(&self) -> String {
        format!("{}/wfs", self.base_url)
    }

    fn submit(&self, layer: &LayerCatalog, feature: &Feature) -> Result<UpdateVerdict, ServerError> {
        let transaction = build_update(layer, feature)?;
        let authorization = self.credentials.authorization_header();
        let headers = [
            ("Authorization", authorization.as_str()),
            ("Content-Type", "application/xml"),
            ("Accept", "application/xml"),
        ];

        let body = self
            .http_client
            .post_with_headers(&self.transaction_url(), &transaction, &headers)?;
        let body = String::from_utf8_lossy(&body);

        let verdict = interpret(Some(body.as_ref()));
        if !verdict.success {
            debug!(response = %body, "WFS response");
        }
        Ok(verdict)
    }
}

impl<C: HttpClient> CartographicServer for GeoServerAdapter<C> {
    fn layer_schema(&self, workspace: &str, layer_name: &str) -> Result<LayerSchema, ServerError> {
        let url = self.describe_feature_type_url(workspace, layer_name);
        let authorization = self.credentials.authorization_header();

        debug!(url = %url, "Fetching DescribeFeatureType");
        let body = self
            .http_client
            .get_with_headers(&url, &[("Authorization", authorization.as_str())])?;
        let xml = String::from_utf8(body).map_err(|e| ServerError::Encoding(e.to_string()))?;

        Ok(parse_describe_feature_type(&xml)?)
    }

    fn update_feature(&self, layer: &LayerCatalog, feature: &Feature) -> UpdateOutcome {
        info!(
            feature_id = %feature.id,
            layer = %layer.name,
            geoserver_layer = %layer.geoserver_layer_name,
            "Executing WFS-T Update"
        );

        match self.submit(layer, feature) {
            Ok(verdict) if verdict.success => {
                info!(
                    feature_id = %feature.id,
                    layer = %layer.name,
                    basis = %verdict.basis,
                    "WFS-T Update successful"
                );
                UpdateOutcome::succeeded(format!("Feature updated ({})", verdict.basis))
            }
            Ok(verdict) => {
                error!(
                    feature_id = %feature.id,
                    layer = %layer.name,
                    basis = %verdict.basis,
                    "WFS-T Update failed"
                );
                let message = match verdict.detail {
                    Some(detail) => format!("WFS-T Update rejected: {}", detail),
                    None => format!("WFS-T Update rejected ({})", verdict.basis),
                };
                UpdateOutcome::failed(message)
            }
            Err(e) => {
                error!(
                    feature_id = %feature.id,
                    layer = %layer.name,
                    error = %e,
                    "Error executing WFS-T Update"
                );
                UpdateOutcome::failed(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::FeatureGeometry;
    use crate::schema::{GeometryKind, InputType, SchemaError};
    use crate::server::http::tests::MockHttpClient;
    use crate::server::TransportError;
    use uuid::Uuid;

    const SCHEMA: &str = r#"<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema"
        xmlns:gml="http://www.opengis.net/gml">
      <xsd:complexType name="treesType">
        <xsd:sequence>
          <xsd:element name="gid" type="xsd:int"/>
          <xsd:element name="the_geom" type="gml:PointPropertyType"/>
          <xsd:element name="species" type="xsd:string"/>
          <xsd:element name="planted_on" type="xsd:date"/>
        </xsd:sequence>
      </xsd:complexType>
    </xsd:schema>"#;

    fn adapter(mock: MockHttpClient) -> GeoServerAdapter<MockHttpClient> {
        GeoServerAdapter::new(
            mock,
            "http://gs.local:8080/geoserver/",
            BasicCredentials::new("admin", "geoserver"),
        )
    }

    fn layer() -> LayerCatalog {
        LayerCatalog::new(Uuid::nil(), "Trees", "parks", "trees")
    }

    fn feature() -> Feature {
        Feature::new("trees.9", FeatureGeometry::new("point", vec![1.0_f64, 2.0]))
            .with_property("species", "Quercus robur")
    }

    #[test]
    fn test_describe_feature_type_url() {
        let adapter = adapter(MockHttpClient::responding(""));
        assert_eq!(
            adapter.describe_feature_type_url("parks", "trees"),
            "http://gs.local:8080/geoserver/parks/ows?service=WFS&version=1.1.0\
             &request=DescribeFeatureType&typeName=parks:trees"
        );
    }

    #[test]
    fn test_transaction_url_has_single_slash() {
        let adapter = adapter(MockHttpClient::responding(""));
        assert_eq!(adapter.transaction_url(), "http://gs.local:8080/geoserver/wfs");
    }

    #[test]
    fn test_layer_schema() {
        let adapter = adapter(MockHttpClient::responding(SCHEMA));

        let schema = adapter.layer_schema("parks", "trees").unwrap();

        assert_eq!(schema.geometry_type, GeometryKind::Point);
        assert_eq!(schema.attributes.len(), 2);
        assert_eq!(schema.attributes[1].input_type, InputType::Date);

        let requests = adapter.http_client.recorded();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(
            requests[0].header("Authorization"),
            Some("Basic YWRtaW46Z2Vvc2VydmVy")
        );
    }

    #[test]
    fn test_layer_schema_transport_error_propagates() {
        let adapter = adapter(MockHttpClient::with_response(Err(TransportError::Status {
            url: "u".to_string(),
            status: 503,
        })));

        let err = adapter.layer_schema("parks", "trees").unwrap_err();

        assert!(matches!(
            err,
            ServerError::Transport(TransportError::Status { status: 503, .. })
        ));
    }

    #[test]
    fn test_layer_schema_parse_error_propagates() {
        let adapter = adapter(MockHttpClient::responding("<xsd:schema/>"));

        let err = adapter.layer_schema("parks", "trees").unwrap_err();

        assert_eq!(err, ServerError::Schema(SchemaError::MissingGeometry));
    }

    #[test]
    fn test_layer_schema_rejects_invalid_utf8() {
        let adapter = adapter(MockHttpClient::with_response(Ok(vec![0xff, 0xfe, 0x00])));

        let err = adapter.layer_schema("parks", "trees").unwrap_err();

        assert!(matches!(err, ServerError::Encoding(_)));
    }

    #[test]
    fn test_update_feature_success() {
        let adapter = adapter(MockHttpClient::responding(
            "<wfs:TransactionResponse><wfs:totalUpdated>1</wfs:totalUpdated></wfs:TransactionResponse>",
        ));

        let outcome = adapter.update_feature(&layer(), &feature());

        assert!(outcome.success);
        let request = &adapter.http_client.recorded()[0];
        assert_eq!(request.method, "POST");
        assert_eq!(request.url, "http://gs.local:8080/geoserver/wfs");
        assert_eq!(request.header("Content-Type"), Some("application/xml"));
        assert_eq!(request.header("Accept"), Some("application/xml"));
        assert!(request.header("Authorization").unwrap().starts_with("Basic "));
        let body = request.body.as_deref().unwrap();
        assert!(body.contains("<wfs:Update typeName=\"parks:trees\">"));
        assert!(body.contains("<wfs:Value>Quercus robur</wfs:Value>"));
    }

    #[test]
    fn test_update_feature_exception_is_failure() {
        let adapter = adapter(MockHttpClient::responding(
            "<ows:ExceptionReport><ows:Exception><ows:ExceptionText>No such feature</ows:ExceptionText></ows:Exception></ows:ExceptionReport>",
        ));

        let outcome = adapter.update_feature(&layer(), &feature());

        assert!(!outcome.success);
        assert!(outcome.message.contains("No such feature"));
    }

    #[test]
    fn test_update_feature_transport_error_is_caught() {
        let adapter = adapter(MockHttpClient::with_response(Err(TransportError::Request {
            url: "http://gs.local:8080/geoserver/wfs".to_string(),
            message: "connection refused".to_string(),
        })));

        let outcome = adapter.update_feature(&layer(), &feature());

        assert!(!outcome.success);
        assert!(outcome.message.contains("connection refused"));
    }

    #[test]
    fn test_update_feature_geometry_error_is_caught() {
        let adapter = adapter(MockHttpClient::responding("<ok/>"));
        let bad = Feature::new("trees.9", FeatureGeometry::new("circle", vec![0.0_f64, 0.0]));

        let outcome = adapter.update_feature(&layer(), &bad);

        assert!(!outcome.success);
        assert!(outcome.message.contains("Unsupported geometry type: circle"));
        // Nothing was sent
        assert!(adapter.http_client.recorded().is_empty());
    }

    #[test]
    fn test_update_feature_empty_response_is_failure() {
        let adapter = adapter(MockHttpClient::responding(""));

        let outcome = adapter.update_feature(&layer(), &feature());

        assert!(!outcome.success);
    }
}
