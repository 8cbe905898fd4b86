mod health;
mod locale;
pub mod router;

pub use locale::RequestLocale;
pub use router::system_router;
