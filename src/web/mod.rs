pub mod routes;
pub mod state;
pub mod views;

pub use routes::router;
pub use state::{AppState, PageSettings, Theme, ViewState};
pub use views::{render_comparison_dialog, render_plan_card, render_pricing_page, PriceDisplay};
