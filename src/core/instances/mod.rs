mod dense_instance;
mod instance;
mod value;

pub use dense_instance::DenseInstance;
pub use instance::Instance;
pub use value::Value;
