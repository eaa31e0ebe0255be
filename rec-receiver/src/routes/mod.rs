pub mod abc;
pub mod health_check;
pub mod upload_wav;
