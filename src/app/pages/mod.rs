pub mod routes;
pub mod screening;

pub use screening::ScreeningPage;
