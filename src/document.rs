//! Typed document model for the ISMP documents-creation endpoint.
//!
//! Every [`DocType`] resolves to exactly one [`DocumentFormat`] through a fixed lookup
//! table; the set of both is closed, so an unsupported pairing is a hard error at
//! request-construction time rather than a fallback. Payload shapes are plain data
//! records composed under the generic [`Document`] wrapper instead of a type hierarchy.

// crates.io
use time::Date;
// self
use crate::_prelude::*;

time::serde::format_description!(iso_date, Date, "[year]-[month]-[day]");

/// Document types accepted by the documents-creation endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocType {
	/// Goods introduced into circulation, described inline as JSON.
	#[serde(rename = "LP_INTRODUCE_GOODS")]
	LpIntroduceGoods,
	/// Goods introduced into circulation, uploaded as CSV.
	#[serde(rename = "LP_INTRODUCE_GOODS_CSV")]
	LpIntroduceGoodsCsv,
	/// Goods introduced into circulation, uploaded as XML.
	#[serde(rename = "LP_INTRODUCE_GOODS_XML")]
	LpIntroduceGoodsXml,
}
impl DocType {
	/// Resolves the document format this type is registered under.
	pub const fn format(self) -> DocumentFormat {
		match self {
			DocType::LpIntroduceGoods => DocumentFormat::Manual,
			DocType::LpIntroduceGoodsCsv => DocumentFormat::Csv,
			DocType::LpIntroduceGoodsXml => DocumentFormat::Xml,
		}
	}

	/// Returns the wire name used in the request envelope and observability labels.
	pub const fn as_str(self) -> &'static str {
		match self {
			DocType::LpIntroduceGoods => "LP_INTRODUCE_GOODS",
			DocType::LpIntroduceGoodsCsv => "LP_INTRODUCE_GOODS_CSV",
			DocType::LpIntroduceGoodsXml => "LP_INTRODUCE_GOODS_XML",
		}
	}
}
impl Display for DocType {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Encoding strategies a document type can be registered under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentFormat {
	/// Inline JSON document, base64-wrapped in the request envelope.
	#[serde(rename = "MANUAL")]
	Manual,
	/// CSV upload; not supported by this client.
	#[serde(rename = "CSV")]
	Csv,
	/// XML upload; not supported by this client.
	#[serde(rename = "XML")]
	Xml,
}
impl DocumentFormat {
	/// Returns the wire name used in the request envelope.
	pub const fn as_str(self) -> &'static str {
		match self {
			DocumentFormat::Manual => "MANUAL",
			DocumentFormat::Csv => "CSV",
			DocumentFormat::Xml => "XML",
		}
	}
}
impl Display for DocumentFormat {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Generic document wrapper combining the shared identifying fields with a
/// type-specific payload, flattened into a single JSON object on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document<P> {
	/// Document type; drives the format dispatch in the envelope builder.
	pub doc_type: DocType,
	/// Registry identifier of the document.
	pub doc_id: String,
	/// Registry status of the document.
	pub doc_status: String,
	/// Type-specific payload fields.
	#[serde(flatten)]
	pub payload: P,
}
impl<P> Document<P> {
	/// Wraps a payload under an explicit document type.
	pub fn new(
		doc_type: DocType,
		doc_id: impl Into<String>,
		doc_status: impl Into<String>,
		payload: P,
	) -> Self {
		Self { doc_type, doc_id: doc_id.into(), doc_status: doc_status.into(), payload }
	}
}
impl Document<IntroduceGoods> {
	/// Wraps an [`IntroduceGoods`] payload under the matching inline-JSON document type.
	pub fn introduce_goods(
		doc_id: impl Into<String>,
		doc_status: impl Into<String>,
		payload: IntroduceGoods,
	) -> Self {
		Self::new(DocType::LpIntroduceGoods, doc_id, doc_status, payload)
	}
}

/// Payload for goods introduced into circulation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntroduceGoods {
	/// Participant description block.
	pub description: Description,
	/// Whether the goods were imported.
	#[serde(rename = "importRequest")]
	pub import_request: bool,
	/// Taxpayer number of the goods owner.
	pub owner_inn: String,
	/// Taxpayer number of the registry participant.
	pub participant_inn: String,
	/// Taxpayer number of the producer.
	pub producer_inn: String,
	/// Date the goods were produced.
	#[serde(with = "iso_date")]
	pub production_date: Date,
	/// Production type label.
	pub production_type: String,
	/// Product records covered by this document.
	pub products: Vec<Product>,
	/// Date the document was registered.
	#[serde(with = "iso_date")]
	pub reg_date: Date,
	/// Registry number assigned to the document.
	pub reg_number: String,
}

/// Participant description block nested under [`IntroduceGoods`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Description {
	/// Taxpayer number of the registry participant.
	#[serde(rename = "participantInn")]
	pub participant_inn: String,
}

/// Single product record within an [`IntroduceGoods`] payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
	/// Certificate document kind.
	pub certificate_document: String,
	/// Certificate issue date.
	#[serde(with = "iso_date")]
	pub certificate_document_date: Date,
	/// Certificate document number.
	pub certificate_document_number: String,
	/// Taxpayer number of the product owner.
	pub owner_inn: String,
	/// Taxpayer number of the product producer.
	pub producer_inn: String,
	/// Date the product was produced.
	#[serde(with = "iso_date")]
	pub production_date: Date,
	/// Customs classification code.
	pub tnved_code: String,
	/// Unit identification code.
	pub uit_code: String,
	/// Transport-unit identification code.
	pub uitu_code: String,
}
