mod logs;
pub mod validation;

pub use self::logs::Logger;
