pub mod context_broker;
pub mod entities_to_json_file;
pub mod http;
pub mod lookup_table;
pub mod ngsi_ld;
pub mod service_guide;
