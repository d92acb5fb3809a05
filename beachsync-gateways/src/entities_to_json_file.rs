use crate::ngsi_ld;
use beachsync_core::{
    entities::{Entity, Fragment},
    gateways::store::{self, EntityStore},
};
use jfs::Store;
use serde_json::Value;
use std::{fs, io, path::Path};

/// An entity store that writes every entity into its own JSON file.
///
/// Useful for dry runs and local testing.
pub struct EntitiesToJsonFile {
    json_store: Store,
}

impl EntitiesToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        fs::create_dir_all(directory.as_ref())?;
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }

    pub fn path(&self) -> &Path {
        self.json_store.path()
    }

    pub fn load(&self, id: &str) -> store::Result<Value> {
        self.json_store.get::<Value>(id).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => store::Error::NotFound,
            _ => err.into(),
        })
    }

    fn exists(&self, id: &str) -> store::Result<bool> {
        match self.load(id) {
            Ok(_) => Ok(true),
            Err(store::Error::NotFound) => Ok(false),
            Err(err) => Err(err),
        }
    }
}

impl EntityStore for EntitiesToJsonFile {
    fn merge_entity(&self, id: &str, fragment: &Fragment) -> store::Result<()> {
        let mut existing = self.load(id)?;
        let Some(obj) = existing.as_object_mut() else {
            return Err(anyhow::anyhow!("Entity {id} is not a JSON object").into());
        };
        if let Value::Object(attributes) = ngsi_ld::fragment_to_json(fragment) {
            for (name, value) in attributes {
                if name == "@context" && obj.contains_key("@context") {
                    continue;
                }
                obj.insert(name, value);
            }
        }
        self.json_store.save_with_id(&existing, id)?;
        Ok(())
    }

    fn create_entity(&self, entity: &Entity) -> store::Result<()> {
        if self.exists(&entity.id)? {
            return Err(store::Error::AlreadyExists);
        }
        self.json_store
            .save_with_id(&ngsi_ld::entity_to_json(entity), &entity.id)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beachsync_core::entities::*;

    fn beach(description: &str) -> Entity {
        Entity {
            id: "urn:ngsi-ld:Beach:1".into(),
            entity_type: "Beach".into(),
            context: vec![DEFAULT_CONTEXT.into()],
            attributes: vec![
                Attribute::text("name", "Askimsbadet"),
                Attribute::text("description", description),
            ],
        }
    }

    #[test]
    fn merge_missing_entity() {
        let dir = tempfile::tempdir().unwrap();
        let store = EntitiesToJsonFile::try_new(dir.path()).unwrap();
        let err = store
            .merge_entity("urn:ngsi-ld:Beach:1", &beach("").fragment())
            .unwrap_err();
        assert!(matches!(err, store::Error::NotFound));
    }

    #[test]
    fn create_and_merge_entity() {
        let dir = tempfile::tempdir().unwrap();
        let store = EntitiesToJsonFile::try_new(dir.path()).unwrap();
        store.create_entity(&beach("old")).unwrap();
        assert!(matches!(
            store.create_entity(&beach("old")),
            Err(store::Error::AlreadyExists)
        ));

        store
            .merge_entity("urn:ngsi-ld:Beach:1", &beach("new").fragment())
            .unwrap();
        let json = store.load("urn:ngsi-ld:Beach:1").unwrap();
        assert_eq!(json["type"], "Beach");
        assert_eq!(json["name"]["value"], "Askimsbadet");
        assert_eq!(json["description"]["value"], "new");
    }

    #[test]
    fn second_run_merges_the_entities_of_the_first_run() {
        use crate::service_guide::{json::tests::ASKIMSBADET_JSON, ServiceGuideFile};
        use beachsync_core::{
            lookup::ReferenceTable,
            usecases::{sync_beaches, BeachSettings, SyncReport},
        };

        let dir = tempfile::tempdir().unwrap();
        let feed_path = dir.path().join("serviceguiden.json");
        std::fs::write(&feed_path, format!(r#"{{ "content": [{ASKIMSBADET_JSON}] }}"#)).unwrap();
        let feed = ServiceGuideFile::new(&feed_path);
        let store = EntitiesToJsonFile::try_new(dir.path().join("entities")).unwrap();
        let references = ReferenceTable::from_rows(vec![CrossReference {
            site_id: "61e0a244cfc4d247cca95f4e".into(),
            nuts_code: "SE0A21480000000617".into(),
            device_id: String::new(),
        }]);
        let settings = BeachSettings::default();

        let first = sync_beaches(&feed, &references, &store, &settings).unwrap();
        assert_eq!(first, SyncReport { merged: 0, created: 1 });
        let second = sync_beaches(&feed, &references, &store, &settings).unwrap();
        assert_eq!(second, SyncReport { merged: 1, created: 0 });

        let json = store.load("urn:ngsi-ld:Beach:SE0A21480000000617").unwrap();
        assert_eq!(json["type"], "Beach");
        assert_eq!(json["areaServed"]["value"], "Sydväst");
        assert_eq!(json["beachType"]["value"], serde_json::json!(["Hav"]));
    }
}
