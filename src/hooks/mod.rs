pub mod use_auth;
pub mod use_creators;
pub mod use_favorites;
pub mod use_filters;
pub mod use_services;
pub mod use_stats;

pub use use_auth::{use_auth, AuthState, AuthStatus, UseAuthHandle};
pub use use_creators::{use_creators, UseCreatorsHandle};
pub use use_favorites::{use_favorites, use_favorites_list, UseFavoritesHandle, UseFavoritesListHandle};
pub use use_filters::{use_filters, UseFiltersHandle};
pub use use_services::{use_services, AppServices};
pub use use_stats::{use_stats, UseStatsHandle};
