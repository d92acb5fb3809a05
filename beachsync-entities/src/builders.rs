pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::site_builder::*;

pub mod site_builder {

    use super::*;
    use crate::{geo::*, site::*};

    #[derive(Debug)]
    pub struct SiteRecordBuild {
        site: SiteRecord,
    }

    impl SiteRecordBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.site.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.site.name = name.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.site.description = desc.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.site.pos = pos;
            self
        }
        pub fn business_id(mut self, business_id: i64) -> Self {
            self.site.business_id = business_id;
            self
        }
        pub fn city_area(mut self, area: &str) -> Self {
            self.site.city_area = area.into();
            self
        }
        pub fn accessibility_url(mut self, url: &str) -> Self {
            self.site.accessibility_url = url.into();
            self
        }
        pub fn deleted(mut self, deleted: bool) -> Self {
            self.site.deleted = deleted;
            self
        }
        pub fn category(mut self, name: &str) -> Self {
            self.site.service_categories.push(ServiceCategory {
                name: name.into(),
                attributes: vec![],
            });
            self
        }
        /// Adds an attribute to the most recently added category.
        pub fn attribute(mut self, name: &str, values: &[&str]) -> Self {
            let attribute = CategoryAttribute {
                name: name.into(),
                values: values.iter().map(|v| v.to_string()).collect(),
            };
            match self.site.service_categories.last_mut() {
                Some(category) => category.attributes.push(attribute),
                None => self.site.service_categories.push(ServiceCategory {
                    name: String::new(),
                    attributes: vec![attribute],
                }),
            }
            self
        }
        pub fn bathing_site(self, orientation: &[&str]) -> Self {
            self.category(BATHING_SITE_CATEGORY)
                .attribute(ORIENTATION_ATTRIBUTE, orientation)
        }
        pub fn finish(self) -> SiteRecord {
            self.site
        }
    }

    impl Builder for SiteRecord {
        type Build = SiteRecordBuild;
        fn build() -> SiteRecordBuild {
            SiteRecordBuild {
                site: SiteRecord {
                    id: "site-id".into(),
                    name: "Badplats".into(),
                    pos: MapPoint::new(57.7, 11.9),
                    business_id: 1,
                    ..Default::default()
                },
            }
        }
    }
}
