//! External marketplace product import.
//!
//! The importer turns a 1688 listing URL into an
//! [`ExternalProductCandidate`] for administrator review. Real retrieval is
//! behind the [`ProductImporter`] trait so a fetching implementation can be
//! swapped in later; the shipped [`SampleImporter`] synthesizes the listing
//! data and only performs the URL and currency work for real.

use thiserror::Error;
use validator::ValidateUrl;

use crate::domain::candidate::{ExternalProductCandidate, SpecGroup};
use crate::domain::types::{ImageUrl, Money, Quantity, SourceUrl, TypeConstraintError};

/// Host suffix every accepted listing URL must carry.
pub const SOURCE_DOMAIN: &str = "1688.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImportError {
    /// The URL is not a recognizable listing on the expected marketplace.
    /// Raised before any retrieval work.
    #[error("無效的 1688 商品連結")]
    InvalidSource,
    /// Retrieval or extraction failed; the candidate is never returned
    /// partially filled.
    #[error("擷取商品資訊失敗: {0}")]
    Failed(String),
}

impl From<TypeConstraintError> for ImportError {
    fn from(err: TypeConstraintError) -> Self {
        ImportError::Failed(err.to_string())
    }
}

/// A source of normalized product candidates.
pub trait ProductImporter: Send + Sync {
    /// Produce a candidate for the given listing URL.
    fn import(&self, url: &str) -> Result<ExternalProductCandidate, ImportError>;
}

/// Convert a source-currency price to the local smallest unit, rounding
/// half away from zero. 50.0 at rate 4.5 yields 225.
pub fn convert_price(source_price: f64, rate: f64) -> Result<Money, ImportError> {
    let local = (source_price * rate).round();
    if !local.is_finite() || local < 0.0 || local > f64::from(i32::MAX) {
        return Err(ImportError::Failed(format!(
            "price out of range: {source_price} × {rate}"
        )));
    }
    Ok(Money::new(local as i32)?)
}

/// Derive the stable external identifier from a listing URL, validating the
/// host against [`SOURCE_DOMAIN`] first.
pub fn external_id_from_url(url: &str) -> Result<String, ImportError> {
    if !url.validate_url() {
        return Err(ImportError::InvalidSource);
    }
    let rest = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .ok_or(ImportError::InvalidSource)?;
    let (host, path) = rest.split_once('/').unwrap_or((rest, ""));
    let host = host.split(':').next().unwrap_or(host);
    if host != SOURCE_DOMAIN && !host.ends_with(&format!(".{SOURCE_DOMAIN}")) {
        return Err(ImportError::InvalidSource);
    }
    let slug = path
        .split('/')
        .next_back()
        .unwrap_or("")
        .split('?')
        .next()
        .unwrap_or("")
        .trim_end_matches(".html");
    if slug.is_empty() {
        return Err(ImportError::InvalidSource);
    }
    Ok(format!("1688-{slug}"))
}

/// Stub importer returning a fixed sample listing.
///
/// 1688 aggressively blocks plain HTTP scraping; a production importer
/// needs authenticated headers, proxies and JS rendering, so this stub
/// keeps the storefront working with fabricated attributes while applying
/// the same validation and conversion rules a real importer would.
pub struct SampleImporter {
    rate: f64,
}

impl SampleImporter {
    pub fn new(rate: f64) -> Self {
        Self { rate }
    }
}

const SAMPLE_IMAGE_URL: &str =
    "https://cbu01.alicdn.com/img/ibank/O1CN01x4Y2zC25T41G0i2X4_!!2209351044453-0-cib.jpg";
const SAMPLE_PRICE_CNY: f64 = 50.0;

impl ProductImporter for SampleImporter {
    fn import(&self, url: &str) -> Result<ExternalProductCandidate, ImportError> {
        let external_id = external_id_from_url(url)?;

        Ok(ExternalProductCandidate {
            external_id,
            name: "【模擬】1688 爆款藍牙耳機".to_string(),
            image_url: ImageUrl::new(SAMPLE_IMAGE_URL)?,
            price_local: convert_price(SAMPLE_PRICE_CNY, self.rate)?,
            min_quantity: Quantity::new(2)?,
            specs: vec![
                SpecGroup {
                    label: "顏色".to_string(),
                    options: vec![
                        "太空黑".to_string(),
                        "珍珠白".to_string(),
                        "天空藍".to_string(),
                    ],
                },
                SpecGroup {
                    label: "套餐".to_string(),
                    options: vec!["官方標配".to_string(), "豪華升級版".to_string()],
                },
            ],
            source_url: SourceUrl::new(url)?,
        })
    }
}
