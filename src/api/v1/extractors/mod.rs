pub mod caller;

pub use caller::RequireCaller;
