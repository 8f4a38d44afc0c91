pub mod upload_request;
