pub mod error;
pub mod struct_helper;
pub mod version;
