mod sha_response;
mod upsert_file_response;

pub use sha_response::FileShaResponse;
pub use upsert_file_response::UpsertFileResponse;
