pub use chrono::{DateTime, NaiveDate, Utc};
pub use elasticsearch::{
    Elasticsearch, SearchParts,
    http::Url,
    http::response::Response,
    http::transport::Transport as EsTransport,
    http::transport::{SingleNodeConnectionPool, TransportBuilder},
};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, Naming, Record,
};
pub use futures::Future;
pub use once_cell::sync::Lazy as once_lazy;
pub use rand::{SeedableRng, prelude::SliceRandom, rngs::StdRng};
pub use urlencoding::encode;
