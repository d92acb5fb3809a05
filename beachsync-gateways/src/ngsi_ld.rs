//! NGSI-LD representation of entities.

use beachsync_core::entities::*;
use serde_json::{json, Map, Value};

pub const CONTENT_TYPE: &str = "application/ld+json";

pub fn entity_to_json(entity: &Entity) -> Value {
    let Entity {
        id,
        entity_type,
        context,
        attributes,
    } = entity;
    let mut obj = Map::new();
    obj.insert("id".into(), Value::from(id.as_str()));
    obj.insert("type".into(), Value::from(entity_type.as_str()));
    insert_attributes(&mut obj, attributes);
    insert_context(&mut obj, context);
    Value::Object(obj)
}

pub fn fragment_to_json(fragment: &Fragment) -> Value {
    let mut obj = Map::new();
    insert_attributes(&mut obj, &fragment.attributes);
    insert_context(&mut obj, &fragment.context);
    Value::Object(obj)
}

fn insert_attributes(obj: &mut Map<String, Value>, attributes: &[Attribute]) {
    for Attribute { name, value } in attributes {
        obj.insert(name.clone(), attribute_value_to_json(value));
    }
}

fn insert_context(obj: &mut Map<String, Value>, context: &[String]) {
    match context {
        [] => {}
        [single] => {
            obj.insert("@context".into(), Value::from(single.as_str()));
        }
        many => {
            obj.insert("@context".into(), json!(many));
        }
    }
}

fn attribute_value_to_json(value: &AttributeValue) -> Value {
    match value {
        AttributeValue::Text(text) => json!({
            "type": "Property",
            "value": text,
        }),
        AttributeValue::TextList(list) => json!({
            "type": "Property",
            "value": list,
        }),
        AttributeValue::DateTime(ts) => json!({
            "type": "Property",
            "value": {
                "@type": "DateTime",
                "@value": ts.to_rfc3339(),
            },
        }),
        AttributeValue::MultiPolygon(polygons) => {
            let coordinates: Vec<Vec<Vec<[f64; 2]>>> = polygons
                .iter()
                .map(|p| vec![p.ring().iter().map(|&(lng, lat)| [lng, lat]).collect()])
                .collect();
            json!({
                "type": "GeoProperty",
                "value": {
                    "type": "MultiPolygon",
                    "coordinates": coordinates,
                },
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn beach() -> Entity {
        Entity {
            id: "urn:ngsi-ld:Beach:SE0A21480000000617".into(),
            entity_type: "Beach".into(),
            context: vec![DEFAULT_CONTEXT.into()],
            attributes: vec![
                Attribute::location(Polygon::near_point(MapPoint::new(57.5, 11.5), 0.5)),
                Attribute::text("name", "Askimsbadet"),
                Attribute::text_list("beachType", vec!["Hav".into()]),
                Attribute::date_time("dateCreated", Timestamp::try_from_secs(1_717_243_200).unwrap()),
            ],
        }
    }

    #[test]
    fn serialize_entity() {
        let json = entity_to_json(&beach());
        assert_eq!(json["id"], "urn:ngsi-ld:Beach:SE0A21480000000617");
        assert_eq!(json["type"], "Beach");
        assert_eq!(json["@context"], DEFAULT_CONTEXT);
        assert_eq!(json["name"], json!({"type": "Property", "value": "Askimsbadet"}));
        assert_eq!(json["beachType"]["value"], json!(["Hav"]));
        assert_eq!(
            json["dateCreated"]["value"],
            json!({"@type": "DateTime", "@value": "2024-06-01T12:00:00Z"})
        );
        assert_eq!(json["location"]["type"], "GeoProperty");
        assert_eq!(
            json["location"]["value"],
            json!({
                "type": "MultiPolygon",
                "coordinates": [[[[11.5, 57.5], [11.5, 58.0], [12.0, 58.0], [11.5, 57.5]]]],
            })
        );
    }

    #[test]
    fn serialize_fragment_without_id_and_type() {
        let json = fragment_to_json(&beach().fragment());
        assert!(json.get("id").is_none());
        assert!(json.get("type").is_none());
        assert_eq!(json["@context"], DEFAULT_CONTEXT);
        assert_eq!(json["name"]["value"], "Askimsbadet");
    }

    #[test]
    fn serialize_multiple_contexts_as_array() {
        let fragment = Fragment {
            context: vec!["a".into(), "b".into()],
            attributes: vec![],
        };
        assert_eq!(fragment_to_json(&fragment)["@context"], json!(["a", "b"]));
    }
}
