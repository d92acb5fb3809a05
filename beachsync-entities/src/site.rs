use crate::geo::MapPoint;
use itertools::Itertools;

/// Name of the service category that marks a bathing site.
pub const BATHING_SITE_CATEGORY: &str = "Badplatser";

/// Name of the attribute that holds the orientation of a site (sea, lake, ...).
pub const ORIENTATION_ATTRIBUTE: &str = "Inriktning";

/// One entry of the municipal service guide.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteRecord {
    pub id: String,
    pub name: String,
    pub description: String,
    pub pos: MapPoint,
    pub service_categories: Vec<ServiceCategory>,
    pub primary_area: String,
    pub city_area: String,
    pub sub_city_area: String,
    pub site_url: String,
    pub accessibility_url: String,
    pub visiting_address: String,
    pub business_id: i64,
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceCategory {
    pub name: String,
    pub attributes: Vec<CategoryAttribute>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAttribute {
    pub name: String,
    pub values: Vec<String>,
}

impl CategoryAttribute {
    fn is_orientation(&self) -> bool {
        self.name.trim().eq_ignore_ascii_case(ORIENTATION_ATTRIBUTE)
    }
}

impl SiteRecord {
    /// A deleted record is never relevant, no matter what it is categorized as.
    pub fn is_bathing_site(&self) -> bool {
        !self.deleted
            && self
                .service_categories
                .iter()
                .any(|c| c.name.eq_ignore_ascii_case(BATHING_SITE_CATEGORY))
    }

    /// The values of the first orientation attribute, joined with `", "`.
    pub fn category_label(&self) -> String {
        self.service_categories
            .iter()
            .flat_map(|c| c.attributes.iter())
            .find(|a| a.is_orientation())
            .map(|a| a.values.iter().map(|v| v.trim()).join(", "))
            .unwrap_or_default()
    }

    pub fn category_labels(&self) -> Vec<String> {
        split_labels(&self.category_label())
    }

    /// The first non-empty area: primary, city, sub-city.
    pub fn area_served(&self) -> &str {
        [&self.primary_area, &self.city_area, &self.sub_city_area]
            .into_iter()
            .find(|a| !a.is_empty())
            .map(String::as_str)
            .unwrap_or_default()
    }
}

fn split_labels(label: &str) -> Vec<String> {
    label
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, attributes: Vec<CategoryAttribute>) -> ServiceCategory {
        ServiceCategory {
            name: name.into(),
            attributes,
        }
    }

    fn attribute(name: &str, values: &[&str]) -> CategoryAttribute {
        CategoryAttribute {
            name: name.into(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn bathing_site_with_sea_orientation() {
        let site = SiteRecord {
            service_categories: vec![category(
                "Badplatser",
                vec![attribute("Inriktning", &["Hav"])],
            )],
            ..Default::default()
        };
        assert_eq!(site.category_label(), "Hav");
        assert_eq!(site.category_labels(), vec!["Hav"]);
        assert!(site.is_bathing_site());
    }

    #[test]
    fn deleted_sites_are_never_bathing_sites() {
        let site = SiteRecord {
            deleted: true,
            service_categories: vec![category("Badplatser", vec![])],
            ..Default::default()
        };
        assert!(!site.is_bathing_site());
    }

    #[test]
    fn match_bathing_site_category_case_insensitive() {
        let site = SiteRecord {
            service_categories: vec![category("Lekplatser", vec![]), category("BADPLATSER", vec![])],
            ..Default::default()
        };
        assert!(site.is_bathing_site());

        let site = SiteRecord {
            service_categories: vec![category("Lekplatser", vec![])],
            ..Default::default()
        };
        assert!(!site.is_bathing_site());
    }

    #[test]
    fn missing_orientation_yields_no_labels() {
        let site = SiteRecord {
            service_categories: vec![category(
                "Badplatser",
                vec![attribute("Toalett", &["Toalett öppen under badsäsong"])],
            )],
            ..Default::default()
        };
        assert_eq!(site.category_label(), "");
        assert!(site.category_labels().is_empty());
    }

    #[test]
    fn first_orientation_attribute_wins() {
        let site = SiteRecord {
            service_categories: vec![
                category(
                    "Badplatser",
                    vec![attribute(" inriktning ", &[" Hav ", "Sjö"])],
                ),
                category("Friluftsliv", vec![attribute("Inriktning", &["Klippor"])]),
            ],
            ..Default::default()
        };
        assert_eq!(site.category_label(), "Hav, Sjö");
        assert_eq!(site.category_labels(), vec!["Hav", "Sjö"]);
    }

    #[test]
    fn orientation_without_values() {
        let site = SiteRecord {
            service_categories: vec![category("Badplatser", vec![attribute("Inriktning", &[])])],
            ..Default::default()
        };
        assert!(site.category_labels().is_empty());
    }

    #[test]
    fn resolve_area_served() {
        let mut site = SiteRecord {
            city_area: "Sydväst".into(),
            sub_city_area: "Askim".into(),
            ..Default::default()
        };
        assert_eq!(site.area_served(), "Sydväst");
        site.primary_area = "Centrum".into();
        assert_eq!(site.area_served(), "Centrum");
        site.primary_area.clear();
        site.city_area.clear();
        assert_eq!(site.area_served(), "Askim");
        site.sub_city_area.clear();
        assert_eq!(site.area_served(), "");
    }
}
