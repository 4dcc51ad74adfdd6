pub mod scheduler;

pub use scheduler::{get_scheduler_config, load_config_from, parse_config, SchedulerConfig};
