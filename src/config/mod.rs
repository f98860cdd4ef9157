#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod simple;

pub const DEFAULT_URL: &str = "https://www.mapcamera.com/search?keyword=X100VI";
pub const DEFAULT_KEYWORD: &str = "X100VI";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_WINDOW: usize = 180;

#[cfg(feature = "cli")]
pub use cli::CheckConfig;
#[cfg(feature = "cli")]
pub use simple::SimpleCheckConfig;
