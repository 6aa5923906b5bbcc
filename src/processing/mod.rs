pub mod batch;
pub mod imaging;

pub use batch::BatchProcessor;
pub use imaging::NativeExecutor;
