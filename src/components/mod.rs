pub mod app;
pub mod brands;
pub mod creator_card;
pub mod creator_modal;
pub mod creators_page;
pub mod dashboard;
pub mod filter_panel;
pub mod login_screen;

pub use app::App;
pub use brands::BrandsPage;
pub use creator_card::CreatorCard;
pub use creator_modal::CreatorModal;
pub use creators_page::CreatorsPage;
pub use dashboard::Dashboard;
pub use filter_panel::FilterPanel;
pub use login_screen::LoginScreen;
