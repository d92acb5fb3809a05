mod build_beach;
mod error;
mod merge_or_create;
mod sync_beaches;


pub use self::{build_beach::*, error::*, merge_or_create::*, sync_beaches::*};

pub const BEACH_ID_PREFIX: &str = "urn:ngsi-ld:Beach:";
pub const BEACH_TYPE_NAME: &str = "Beach";

const DEFAULT_SEE_ALSO_BASE_URL: &str = "https://goteborg.se/wps/portal/start/uppleva-och-gora/idrott-motion-och-friluftsliv/simma-och-bada/badplatser/hitta-badplatser-utomhusbad/?id=";
const DEFAULT_PROFILE_BASE_URL: &str =
    "https://badplatsen.havochvatten.se/badplatsen/api/testlocationprofile";
const DEFAULT_DATA_PROVIDER: &str = "ServiceGuiden";
const DEFAULT_SOURCE_PREFIX: &str = "se:goteborg:serviceguiden:businessid:";

/// Everything that is needed to turn a site into a beach entity
/// apart from the site itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeachSettings {
    pub id_prefix: String,
    pub entity_type: String,
    /// The business id of a site is appended to this URL.
    pub see_also_base_url: String,
    /// The NUTS code of a site is appended to this URL as a path segment.
    pub profile_base_url: String,
    pub data_provider: String,
    pub source_prefix: String,
}

impl Default for BeachSettings {
    fn default() -> Self {
        Self {
            id_prefix: BEACH_ID_PREFIX.to_string(),
            entity_type: BEACH_TYPE_NAME.to_string(),
            see_also_base_url: DEFAULT_SEE_ALSO_BASE_URL.to_string(),
            profile_base_url: DEFAULT_PROFILE_BASE_URL.to_string(),
            data_provider: DEFAULT_DATA_PROVIDER.to_string(),
            source_prefix: DEFAULT_SOURCE_PREFIX.to_string(),
        }
    }
}
