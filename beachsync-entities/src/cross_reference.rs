/// Links a site of the service guide to external identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrossReference {
    pub site_id: String,
    /// NUTS code of the bathing water, empty if unknown.
    pub nuts_code: String,
    pub device_id: String,
}

impl CrossReference {
    pub fn nuts_code(&self) -> Option<&str> {
        Some(self.nuts_code.as_str()).filter(|c| !c.is_empty())
    }

    pub fn device_id(&self) -> Option<&str> {
        Some(self.device_id.as_str()).filter(|d| !d.is_empty())
    }
}
