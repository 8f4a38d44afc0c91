mod upsert_file_request;

pub use upsert_file_request::UpsertFileRequest;

use serde::Serialize;

pub trait SerializeRequest {
    fn into_request(self) -> Result<String, serde_json::Error>
    where
        Self: Serialize + Sized,
    {
        serde_json::to_string(&self)
    }
}

impl SerializeRequest for UpsertFileRequest {}
