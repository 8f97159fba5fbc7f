pub mod aggregate;
pub mod app;
pub mod data;
pub mod model;
pub mod requirements;
pub mod resolve;
pub mod ui;
pub mod validation;
pub mod view_models;

pub use aggregate::aggregate;
pub use app::SurveyApp;
pub use model::{
    CategoryLevels, GroupedAnswers, LevelCatalog, LevelDefinition, OptionId, RequirementSet,
    SelectionSet,
};
pub use requirements::parse_requirement_set;
pub use resolve::{compute_category_levels, resolve};
pub use validation::{CatalogIssue, validate_catalog};
pub use view_models::ChartFeed;
