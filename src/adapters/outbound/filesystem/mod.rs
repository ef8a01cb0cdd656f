/// Filesystem adapters: dependency input, report output and the TTL cache
mod dependency_file_reader;
mod file_writer;
mod ttl_cache;

pub use dependency_file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use ttl_cache::FileTtlCache;
