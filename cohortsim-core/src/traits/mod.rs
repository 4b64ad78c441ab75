mod retention;

pub use retention::{FnRetention, RetentionModel};
