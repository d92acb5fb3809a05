use super::BeachSettings;
use crate::entities::*;

/// Width and height of the polygon that represents a beach, in degrees.
pub const NEAR_POINT_EPSILON: f64 = 0.0001;

/// The id of the beach entity of a site.
///
/// Sites that share a NUTS code share an entity, so their data is merged
/// into the same beach.
pub fn beach_id(settings: &BeachSettings, site: &SiteRecord, nuts_code: Option<&str>) -> String {
    let key = nuts_code.filter(|c| !c.is_empty()).unwrap_or(site.id.as_str());
    format!("{}{key}", settings.id_prefix)
}

pub fn see_also(settings: &BeachSettings, site: &SiteRecord, nuts_code: Option<&str>) -> Vec<String> {
    let public_info = format!("{}{}", settings.see_also_base_url, site.business_id);
    let profile = nuts_code
        .filter(|c| !c.is_empty())
        .map(|code| format!("{}/{code}", settings.profile_base_url.trim_end_matches('/')))
        .unwrap_or_default();
    [public_info, profile, site.accessibility_url.clone()]
        .into_iter()
        .filter(|url| !url.is_empty())
        .collect()
}

/// Maps a site to a beach entity.
///
/// Apart from `dateCreated` the result only depends on the arguments.
pub fn build_beach(settings: &BeachSettings, site: &SiteRecord, nuts_code: Option<&str>) -> Entity {
    let id = beach_id(settings, site, nuts_code);
    let source = format!("{}{}", settings.source_prefix, site.business_id);

    let mut attributes = vec![
        Attribute::location(Polygon::near_point(site.pos, NEAR_POINT_EPSILON)),
        Attribute::text("name", site.name.as_str()),
        Attribute::text("description", site.description.as_str()),
        Attribute::text("areaServed", site.area_served()),
        Attribute::text("dataProvider", settings.data_provider.as_str()),
        Attribute::text("source", source),
        Attribute::date_time("dateCreated", Timestamp::now()),
    ];

    let beach_types = site.category_labels();
    if !beach_types.is_empty() {
        attributes.push(Attribute::text_list("beachType", beach_types));
    }
    let see_also = see_also(settings, site, nuts_code);
    if !see_also.is_empty() {
        attributes.push(Attribute::text_list("seeAlso", see_also));
    }

    Entity {
        id,
        entity_type: settings.entity_type.clone(),
        context: vec![DEFAULT_CONTEXT.to_string()],
        attributes,
    }
}
