pub mod serve;
pub mod show;
pub mod summary;

pub use serve::serve;
pub use show::show;
pub use summary::summary;
