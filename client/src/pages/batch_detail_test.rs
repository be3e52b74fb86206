use super::*;
use crate::util::storage::MemoryStore;

struct NoNavigation;

impl Navigator for NoNavigation {
    fn hard_redirect(&self, _path: &str) {}
}

#[test]
fn unreachable_backend_yields_empty_detail() {
    let gateway = Gateway::new("/api/proxy", MemoryStore::new(), NoNavigation);
    let detail = futures::executor::block_on(load_batch_detail(&gateway, "b1"));
    assert_eq!(detail, BatchDetail::default());
}

#[test]
fn failed_or_null_single_records_are_absent() {
    assert_eq!(present("batch", Err(ApiError::Network("down".to_owned()))), None);
    assert_eq!(present("batch", Ok(serde_json::Value::Null)), None);
    let batch = serde_json::json!({ "id": "b1" });
    assert_eq!(present("batch", Ok(batch.clone())), Some(batch));
}
