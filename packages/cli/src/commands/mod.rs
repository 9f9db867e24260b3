pub mod compile;
pub mod pages;
pub mod publish;
pub mod transfer;

pub use compile::{compile, CompileArgs};
pub use pages::{new, pages, templates, NewArgs};
pub use publish::{publish, PublishArgs};
pub use transfer::{export, import, ExportArgs, ImportArgs};

use crate::config::Config;
use pagesmith_publish::{BuiltinCatalog, FileStore, Publisher};
use std::path::Path;

pub(crate) type LocalPublisher = Publisher<FileStore, BuiltinCatalog>;

/// Publisher over the configured data directory
pub(crate) fn open_publisher(config: &Config, cwd: &Path) -> LocalPublisher {
    Publisher::new(
        FileStore::new(config.data_dir(cwd)),
        BuiltinCatalog::new(),
        config.publish_config(),
    )
}
