pub mod auth;
pub mod creator;
pub mod filters;
pub mod stats;

pub use auth::{LoginRequest, LoginResponse, User, VerifyResponse};
pub use creator::{
    Creator, CreatorsResponse, FavoriteResponse, Pagination, SocialNetwork,
};
pub use filters::CreatorFilters;
pub use stats::{DashboardStats, StatsResponse};
