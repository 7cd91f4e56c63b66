//! Interpretation of WFS-T transaction responses.
//!
//! This is a best-effort heuristic, not a protocol parse. A response is a
//! success when it reports `totalUpdated` of 1; failing that, a response
//! without any exception marker is taken as an implicit acknowledgement.
//! The implicit rule is a known fragility: a malformed response that happens
//! to contain no exception marker is classified as a success.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use std::fmt;

const EXPLICIT_SUCCESS: &str = "<wfs:totalUpdated>1</wfs:totalUpdated>";
const LOOSE_SUCCESS: &str = "totalUpdated>1</";
const EXCEPTION_MARKERS: [&str; 2] = ["<ows:Exception", "<ServiceException"];

/// What the verdict was based on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictBasis {
    /// Response reports exactly one updated feature
    UpdatedCount,
    /// No count, but no exception marker either
    NoException,
    /// Response carries an exception report
    ExceptionReported,
    /// Missing or blank body
    EmptyBody,
}

impl fmt::Display for VerdictBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpdatedCount => write!(f, "totalUpdated=1"),
            Self::NoException => write!(f, "no exception reported"),
            Self::ExceptionReported => write!(f, "exception reported"),
            Self::EmptyBody => write!(f, "empty response"),
        }
    }
}

/// Outcome of a transaction as read from the server response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVerdict {
    pub success: bool,
    pub basis: VerdictBasis,
    /// Exception text reported by the server, if any
    pub detail: Option<String>,
}

impl UpdateVerdict {
    fn new(success: bool, basis: VerdictBasis, detail: Option<String>) -> Self {
        Self {
            success,
            basis,
            detail,
        }
    }
}

/// Decides whether a transaction response means the update went through.
pub fn interpret(body: Option<&str>) -> UpdateVerdict {
    let body = match body {
        Some(b) if !b.trim().is_empty() => b,
        _ => return UpdateVerdict::new(false, VerdictBasis::EmptyBody, None),
    };

    if body.contains(EXPLICIT_SUCCESS) || body.contains(LOOSE_SUCCESS) {
        return UpdateVerdict::new(true, VerdictBasis::UpdatedCount, None);
    }

    if EXCEPTION_MARKERS.iter().any(|marker| body.contains(marker)) {
        return UpdateVerdict::new(
            false,
            VerdictBasis::ExceptionReported,
            exception_text(body),
        );
    }

    UpdateVerdict::new(true, VerdictBasis::NoException, None)
}

/// Extracts the text of the first `ExceptionText` or `ServiceException`.
fn exception_text(body: &str) -> Option<String> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    let mut capturing = false;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e))
                if matches!(
                    e.local_name().as_ref(),
                    b"ExceptionText" | b"ServiceException"
                ) =>
            {
                capturing = true;
            }
            Ok(Event::Text(t)) if capturing => {
                if let Ok(s) = t.unescape() {
                    text.push_str(&s);
                }
            }
            Ok(Event::CData(c)) if capturing => text.push_str(&String::from_utf8_lossy(&c)),
            Ok(Event::End(_)) if capturing => break,
            Ok(Event::Eof) | Err(_) => break,
            _ => {}
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUCCESS_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<wfs:TransactionResponse xmlns:wfs="http://www.opengis.net/wfs" version="1.1.0">
  <wfs:TransactionSummary>
    <wfs:totalInserted>0</wfs:totalInserted>
    <wfs:totalUpdated>1</wfs:totalUpdated>
    <wfs:totalDeleted>0</wfs:totalDeleted>
  </wfs:TransactionSummary>
  <wfs:TransactionResults/>
</wfs:TransactionResponse>"#;

    const EXCEPTION_RESPONSE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<ows:ExceptionReport xmlns:ows="http://www.opengis.net/ows" version="1.0.0">
  <ows:Exception exceptionCode="InvalidParameterValue">
    <ows:ExceptionText>Feature type 'cadastre:nope' unknown</ows:ExceptionText>
  </ows:Exception>
</ows:ExceptionReport>"#;

    #[test]
    fn test_explicit_total_updated() {
        let verdict = interpret(Some(SUCCESS_RESPONSE));
        assert!(verdict.success);
        assert_eq!(verdict.basis, VerdictBasis::UpdatedCount);
    }

    #[test]
    fn test_total_updated_with_other_prefix() {
        let body = "<TransactionResponse><x:totalUpdated>1</x:totalUpdated></TransactionResponse>";
        let verdict = interpret(Some(body));
        assert!(verdict.success);
        assert_eq!(verdict.basis, VerdictBasis::UpdatedCount);
    }

    #[test]
    fn test_exception_without_marker_fails() {
        let verdict = interpret(Some(EXCEPTION_RESPONSE));
        assert!(!verdict.success);
        assert_eq!(verdict.basis, VerdictBasis::ExceptionReported);
        assert_eq!(
            verdict.detail.as_deref(),
            Some("Feature type 'cadastre:nope' unknown")
        );
    }

    #[test]
    fn test_service_exception_fails() {
        let body = r#"<ServiceExceptionReport version="1.2.0">
  <ServiceException code="InvalidParameterValue"><![CDATA[Bad fid]]></ServiceException>
</ServiceExceptionReport>"#;
        let verdict = interpret(Some(body));
        assert!(!verdict.success);
        assert_eq!(verdict.detail.as_deref(), Some("Bad fid"));
    }

    #[test]
    fn test_empty_body_fails() {
        assert!(!interpret(None).success);
        assert!(!interpret(Some("")).success);
        let verdict = interpret(Some("  \n "));
        assert!(!verdict.success);
        assert_eq!(verdict.basis, VerdictBasis::EmptyBody);
    }

    #[test]
    fn test_implicit_success_without_exception() {
        let verdict = interpret(Some("<ack/>"));
        assert!(verdict.success);
        assert_eq!(verdict.basis, VerdictBasis::NoException);
    }

    #[test]
    fn test_zero_updated_without_exception_is_implicit_success() {
        // Documented fragility of the heuristic
        let body = "<wfs:TransactionResponse><wfs:totalUpdated>0</wfs:totalUpdated></wfs:TransactionResponse>";
        let verdict = interpret(Some(body));
        assert!(verdict.success);
        assert_eq!(verdict.basis, VerdictBasis::NoException);
    }

    #[test]
    fn test_count_wins_over_exception_marker() {
        let body = format!("{}<ows:Exception/>", SUCCESS_RESPONSE);
        assert!(interpret(Some(&body)).success);
    }

    #[test]
    fn test_exception_text_missing() {
        let verdict = interpret(Some("<ows:Exception exceptionCode=\"x\"/>"));
        assert!(!verdict.success);
        assert!(verdict.detail.is_none());
    }
}
