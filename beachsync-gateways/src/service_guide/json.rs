//! Wire format of the service guide API.

use beachsync_core::entities::{CategoryAttribute, MapPoint, ServiceCategory, SiteRecord};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ServiceGuide {
    #[serde(default)]
    pub content: Vec<Content>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Content {
    pub id: String,
    pub name: String,
    pub description: String,
    pub site_url: String,
    pub service_types: Vec<ServiceType>,
    pub business_id: i64,
    pub visiting_address: String,
    pub position: Position,
    pub primary_area: String,
    pub city_area: String,
    pub sub_city_area: String,
    pub accessibility_url: String,
    pub deleted: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceType {
    pub id: String,
    pub name: String,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Attribute {
    pub id: String,
    pub name: String,
    pub values: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Value {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Position {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<ServiceGuide> for Vec<SiteRecord> {
    fn from(from: ServiceGuide) -> Self {
        from.content.into_iter().map(SiteRecord::from).collect()
    }
}

impl From<Content> for SiteRecord {
    fn from(from: Content) -> Self {
        let Content {
            id,
            name,
            description,
            site_url,
            service_types,
            business_id,
            visiting_address,
            position,
            primary_area,
            city_area,
            sub_city_area,
            accessibility_url,
            deleted,
        } = from;
        let service_categories = service_types.into_iter().map(Into::into).collect();
        Self {
            id,
            name,
            description,
            pos: MapPoint::new(position.latitude, position.longitude),
            service_categories,
            primary_area,
            city_area,
            sub_city_area,
            site_url,
            accessibility_url,
            visiting_address,
            business_id,
            deleted,
        }
    }
}

impl From<ServiceType> for ServiceCategory {
    fn from(from: ServiceType) -> Self {
        let ServiceType {
            name, attributes, ..
        } = from;
        Self {
            name,
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Attribute> for CategoryAttribute {
    fn from(from: Attribute) -> Self {
        let Attribute { name, values, .. } = from;
        Self {
            name,
            values: values.into_iter().map(|v| v.name).collect(),
        }
    }
}
