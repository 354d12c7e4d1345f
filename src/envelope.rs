//! Wire-format request body for the documents-creation endpoint.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	document::{DocType, Document, DocumentFormat},
	error::EncodingError,
};

/// Request body wrapping an encoded document and its detached signature.
///
/// Built fresh for every submission and never retained. The document and signature are
/// base64-encoded independently so the body stays binary-safe inside a JSON object.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Envelope {
	/// Format the document was encoded under.
	pub document_format: DocumentFormat,
	/// Base64 text of the serialized document.
	pub product_document: String,
	/// Wire name of the document type.
	#[serde(rename = "type")]
	pub doc_type: DocType,
	/// Base64 text of the caller-supplied signature.
	pub signature: String,
}
impl Envelope {
	/// Builds the envelope for a document, dispatching on the format its type maps to.
	///
	/// Only the inline-JSON `MANUAL` format is supported; any other format fails with
	/// [`Error::UnsupportedFormat`] before any I/O happens.
	pub fn seal<P>(document: &Document<P>, signature: &str) -> Result<Self>
	where
		P: Serialize,
	{
		let doc_type = document.doc_type;

		match doc_type.format() {
			DocumentFormat::Manual => Self::seal_manual_json(document, signature),
			format => Err(Error::UnsupportedFormat { doc_type, format }),
		}
	}

	fn seal_manual_json<P>(document: &Document<P>, signature: &str) -> Result<Self>
	where
		P: Serialize,
	{
		let canonical = serde_json::to_string(document)
			.map_err(|e| EncodingError::Document { source: e })?;

		Ok(Self {
			document_format: DocumentFormat::Manual,
			product_document: STANDARD.encode(canonical.as_bytes()),
			doc_type: document.doc_type,
			signature: STANDARD.encode(signature.as_bytes()),
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::document::{Description, IntroduceGoods, Product};

	fn fixture() -> Document<IntroduceGoods> {
		let date = |day| {
			time::Date::from_calendar_date(2020, time::Month::January, day)
				.expect("Fixture date should be valid.")
		};

		Document::introduce_goods("doc-1", "DRAFT", IntroduceGoods {
			description: Description { participant_inn: "7701234567".into() },
			import_request: true,
			owner_inn: "7701234567".into(),
			participant_inn: "7701234567".into(),
			producer_inn: "7707654321".into(),
			production_date: date(23),
			production_type: "OWN_PRODUCTION".into(),
			products: vec![Product {
				certificate_document: "CONFORMITY_CERTIFICATE".into(),
				certificate_document_date: date(20),
				certificate_document_number: "cert-42".into(),
				owner_inn: "7701234567".into(),
				producer_inn: "7707654321".into(),
				production_date: date(23),
				tnved_code: "6401".into(),
				uit_code: "uit-1".into(),
				uitu_code: "uitu-1".into(),
			}],
			reg_date: date(24),
			reg_number: "reg-7".into(),
		})
	}

	#[test]
	fn seal_encodes_document_and_signature_losslessly() {
		let document = fixture();
		let envelope = Envelope::seal(&document, "sig")
			.expect("Manual-format document should seal successfully.");

		assert_eq!(envelope.document_format, DocumentFormat::Manual);
		assert_eq!(envelope.doc_type, DocType::LpIntroduceGoods);

		let decoded = STANDARD
			.decode(&envelope.product_document)
			.expect("Encoded document should be valid base64.");
		let canonical = serde_json::to_string(&document)
			.expect("Fixture document should serialize successfully.");

		assert_eq!(decoded, canonical.as_bytes());
		assert_eq!(
			STANDARD.decode(&envelope.signature).expect("Signature should be valid base64."),
			b"sig",
		);
	}

	#[test]
	fn seal_rejects_unsupported_formats() {
		let mut document = fixture();

		document.doc_type = DocType::LpIntroduceGoodsXml;

		let err = Envelope::seal(&document, "sig")
			.expect_err("XML-format document should be rejected.");

		assert!(matches!(err, Error::UnsupportedFormat {
			doc_type: DocType::LpIntroduceGoodsXml,
			format: DocumentFormat::Xml,
		}));
	}

	#[test]
	fn envelope_serializes_with_wire_field_names() {
		let envelope = Envelope::seal(&fixture(), "sig")
			.expect("Manual-format document should seal successfully.");
		let value = serde_json::to_value(&envelope)
			.expect("Envelope should serialize successfully.");

		assert_eq!(value["document_format"], "MANUAL");
		assert_eq!(value["type"], "LP_INTRODUCE_GOODS");
		assert!(value["product_document"].is_string());
		assert!(value["signature"].is_string());
	}
}
