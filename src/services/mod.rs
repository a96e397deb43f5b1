// Business logic services over the shared connection pool

pub mod achievement_service;
pub mod dashboard_service;
pub mod goal_service;
pub mod trainer_service;
pub mod user_service;
pub mod workout_service;

pub use achievement_service::AchievementService;
pub use dashboard_service::DashboardService;
pub use goal_service::GoalService;
pub use trainer_service::TrainerService;
pub use user_service::UserService;
pub use workout_service::WorkoutService;
