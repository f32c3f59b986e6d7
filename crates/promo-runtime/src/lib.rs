pub mod backend;
pub mod board;
pub mod cache;
pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod logging;
pub mod picker;
pub mod session;
pub mod table;
pub mod transition;

pub use backend::{CampaignBackend, CampaignRequest, FixedImpressions, ImpressionSource, OfflineBackend};
pub use board::Board;
pub use cache::ImpressionsCache;
pub use config::{Config, resolve_data_dir};
pub use error::{Error, Result};
pub use form::{ErrorMark, FormController, FormFields, FormMode, FormState};
pub use http::HttpBackend;
pub use picker::{DatePicker, end_date_picker, start_date_picker};
pub use session::{EditSession, FormPlacement};
pub use table::{CampaignLimit, CampaignTable, CreateOutcome, Navigation, TableRow};
pub use transition::{Completed, Element, LogSurface, Step, Surface, Transition, TransitionRunner};
