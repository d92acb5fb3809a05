use crate::{geo::Polygon, time::Timestamp};

/// The JSON-LD context that is attached to every created entity.
pub const DEFAULT_CONTEXT: &str =
    "https://raw.githubusercontent.com/diwise/context-broker/main/assets/jsonldcontexts/default-context.jsonld";

/// A complete entity as it is created in the entity store.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub id: String,
    pub entity_type: String,
    pub context: Vec<String>,
    pub attributes: Vec<Attribute>,
}

/// A partial entity that is merged into an existing one.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub context: Vec<String>,
    pub attributes: Vec<Attribute>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub value: AttributeValue,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    TextList(Vec<String>),
    DateTime(Timestamp),
    MultiPolygon(Vec<Polygon>),
}

impl Attribute {
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::Text(value.into()),
        }
    }

    pub fn text_list(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::TextList(values),
        }
    }

    pub fn date_time(name: impl Into<String>, ts: Timestamp) -> Self {
        Self {
            name: name.into(),
            value: AttributeValue::DateTime(ts),
        }
    }

    pub fn location(polygon: Polygon) -> Self {
        Self {
            name: "location".into(),
            value: AttributeValue::MultiPolygon(vec![polygon]),
        }
    }
}

impl Fragment {
    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        find_attribute(&self.attributes, name)
    }
}

impl Entity {
    pub fn with_default_context(mut self) -> Self {
        if !self.context.iter().any(|c| c == DEFAULT_CONTEXT) {
            self.context.push(DEFAULT_CONTEXT.to_string());
        }
        self
    }

    /// The entity without id and type.
    pub fn fragment(&self) -> Fragment {
        Fragment {
            context: self.context.clone(),
            attributes: self.attributes.clone(),
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        find_attribute(&self.attributes, name)
    }

    /// Replaces attributes with the same name and appends new ones.
    pub fn merge(&mut self, fragment: Fragment) {
        let Fragment {
            context,
            attributes,
        } = fragment;
        for ctx in context {
            if !self.context.contains(&ctx) {
                self.context.push(ctx);
            }
        }
        for attr in attributes {
            match self.attributes.iter_mut().find(|a| a.name == attr.name) {
                Some(existing) => *existing = attr,
                None => self.attributes.push(attr),
            }
        }
    }
}

fn find_attribute<'a>(attributes: &'a [Attribute], name: &str) -> Option<&'a AttributeValue> {
    attributes.iter().find(|a| a.name == name).map(|a| &a.value)
}
