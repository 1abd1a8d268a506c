mod chunk;
mod dependency;
mod module;

pub use self::chunk::*;
pub use self::dependency::*;
pub use self::module::*;
