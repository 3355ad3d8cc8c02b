pub mod api_client;
pub mod auth_service;
pub mod creator_service;
pub mod export_service;
pub mod fixture_service;

pub use api_client::{ApiClient, ApiError};
pub use auth_service::AuthService;
pub use creator_service::{
    CreatorDataSource, CreatorPage, CreatorQuery, FavoriteOutcome, RemoteCreators,
};
pub use export_service::{creators_to_csv, download_csv, open_remote_export};
pub use fixture_service::FixtureCreators;
