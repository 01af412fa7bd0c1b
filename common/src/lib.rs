//! İzmir Nöbetçi Eczane Common Library
//!
//! CLIとWeb(WASM)で共有される型・検索・画面状態

pub mod types;
pub mod geo;
pub mod error;
pub mod directory;
pub mod filter;
pub mod links;
pub mod date;
pub mod map;
pub mod state;

pub use types::PharmacyRecord;
pub use geo::{Bounds, GeoError, LatLng, PermissionStatus};
pub use error::{Error, Result};
pub use directory::{decode_response, endpoint_url, Endpoint, DEFAULT_BASE_URL};
pub use filter::filter;
pub use links::{call_uri, directions_uri, map_uri};
pub use date::format_duty_date;
pub use map::{render, Camera, FlyTo, MapScene, MapSettings, Marker};
pub use state::{AppState, Effect, Intent, Notification, NotificationKind};
