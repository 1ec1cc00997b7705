use validator::Validate;

use crate::domain::candidate::ExternalProductCandidate;
use crate::forms::imports::ImportForm;
use crate::importer::ProductImporter;

use super::ServiceResult;

/// Produce a product candidate for administrator review from a marketplace
/// listing URL. Domain validation happens before any retrieval work.
pub fn import_listing<I>(form: ImportForm, importer: &I) -> ServiceResult<ExternalProductCandidate>
where
    I: ProductImporter + ?Sized,
{
    form.validate()?;
    Ok(importer.import(&form.url)?)
}
